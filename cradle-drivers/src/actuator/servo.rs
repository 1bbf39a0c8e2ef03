//! Hobby servo on a 50 Hz PWM channel
//!
//! Pulse width maps linearly onto 0..=180°. The servo cannot report its
//! position, so the driver remembers the last commanded angle.

use cradle_core::traits::ServoOutput;
use cradle_hal::PwmOutput;

/// Pulse width for 0°
pub const SERVO_MIN_PULSE_US: u16 = 544;

/// Pulse width for 180°
pub const SERVO_MAX_PULSE_US: u16 = 2400;

const MAX_ANGLE: u8 = 180;

/// Pulse width for `angle`, clamped to 180°
pub fn pulse_for_angle(angle: u8, min_us: u16, max_us: u16) -> u16 {
    let angle = u32::from(angle.min(MAX_ANGLE));
    let span = u32::from(max_us.saturating_sub(min_us));
    min_us + (span * angle / u32::from(MAX_ANGLE)) as u16
}

pub struct HobbyServo<P> {
    pwm: P,
    angle: u8,
    min_pulse_us: u16,
    max_pulse_us: u16,
}

impl<P: PwmOutput> HobbyServo<P> {
    /// Attach with the standard pulse range and move to `initial_angle`
    pub fn new(pwm: P, initial_angle: u8) -> Self {
        Self::with_pulse_range(pwm, SERVO_MIN_PULSE_US, SERVO_MAX_PULSE_US, initial_angle)
    }

    pub fn with_pulse_range(pwm: P, min_pulse_us: u16, max_pulse_us: u16, initial_angle: u8) -> Self {
        let mut servo = Self {
            pwm,
            angle: 0,
            min_pulse_us,
            max_pulse_us,
        };
        servo.set_angle(initial_angle);
        servo
    }
}

impl<P: PwmOutput> ServoOutput for HobbyServo<P> {
    fn angle(&self) -> u8 {
        self.angle
    }

    fn set_angle(&mut self, degrees: u8) {
        let degrees = degrees.min(MAX_ANGLE);
        self.angle = degrees;
        self.pwm
            .set_pulse_us(pulse_for_angle(degrees, self.min_pulse_us, self.max_pulse_us));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct MockPwm {
        pulse: u16,
    }

    impl PwmOutput for MockPwm {
        fn period_us(&self) -> u32 {
            20_000
        }

        fn set_pulse_us(&mut self, pulse_us: u16) {
            self.pulse = pulse_us;
        }

        fn pulse_us(&self) -> u16 {
            self.pulse
        }
    }

    #[test]
    fn test_pulse_mapping() {
        assert_eq!(pulse_for_angle(0, 544, 2400), 544);
        assert_eq!(pulse_for_angle(90, 544, 2400), 1472);
        assert_eq!(pulse_for_angle(180, 544, 2400), 2400);
        assert_eq!(pulse_for_angle(250, 544, 2400), 2400);
    }

    #[test]
    fn test_initial_position() {
        let servo = HobbyServo::new(MockPwm::default(), 60);
        assert_eq!(servo.angle(), 60);
        assert_eq!(servo.pwm.pulse_us(), 1162);
        assert_eq!(
            servo.pwm.pulse_us(),
            pulse_for_angle(60, SERVO_MIN_PULSE_US, SERVO_MAX_PULSE_US)
        );
    }

    #[test]
    fn test_angle_read_back_is_clamped() {
        let mut servo = HobbyServo::new(MockPwm::default(), 60);
        servo.set_angle(31);
        assert_eq!(servo.angle(), 31);
        servo.set_angle(200);
        assert_eq!(servo.angle(), 180);
        assert_eq!(servo.pwm.pulse_us(), 2400);
    }
}
