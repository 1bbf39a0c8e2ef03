//! Actuator traits

use super::display::{DisplayDriver, DisplayError};

/// An on/off output such as the fan relay or the buzzer
///
/// Implementations own the electrical polarity; `on` always means the
/// device is running.
pub trait SwitchedOutput {
    /// Turn the device on or off
    fn set_on(&mut self, on: bool);

    /// Check if the device is currently on
    fn is_on(&self) -> bool;
}

/// Positional servo
pub trait ServoOutput {
    /// Last commanded angle in degrees
    fn angle(&self) -> u8;

    /// Command an absolute angle in degrees
    fn set_angle(&mut self, degrees: u8);
}

/// Everything the scheduler drives, in one place
///
/// All calls are fire-and-forget and return immediately.
pub trait ActuatorPort {
    fn set_fan(&mut self, on: bool);

    fn servo_angle(&self) -> u8;

    fn set_servo_angle(&mut self, degrees: u8);

    fn set_buzzer(&mut self, on: bool);

    /// Replace one display row
    fn write_display_line(&mut self, row: u8, text: &str) -> Result<(), DisplayError>;
}

/// An [`ActuatorPort`] assembled from individual drivers
pub struct ActuatorBank<F, S, B, D> {
    pub fan: F,
    pub servo: S,
    pub buzzer: B,
    pub display: D,
}

impl<F, S, B, D> ActuatorBank<F, S, B, D> {
    pub fn new(fan: F, servo: S, buzzer: B, display: D) -> Self {
        Self {
            fan,
            servo,
            buzzer,
            display,
        }
    }
}

impl<F, S, B, D> ActuatorPort for ActuatorBank<F, S, B, D>
where
    F: SwitchedOutput,
    S: ServoOutput,
    B: SwitchedOutput,
    D: DisplayDriver,
{
    fn set_fan(&mut self, on: bool) {
        self.fan.set_on(on);
    }

    fn servo_angle(&self) -> u8 {
        self.servo.angle()
    }

    fn set_servo_angle(&mut self, degrees: u8) {
        self.servo.set_angle(degrees);
    }

    fn set_buzzer(&mut self, on: bool) {
        self.buzzer.set_on(on);
    }

    fn write_display_line(&mut self, row: u8, text: &str) -> Result<(), DisplayError> {
        self.display.write_line(row, text)
    }
}
