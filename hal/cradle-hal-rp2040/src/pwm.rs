//! Servo PWM adapter
//!
//! The 125 MHz system clock is divided by 125 so the counter ticks once
//! per microsecond. A top of 19 999 then gives the 20 ms servo frame and
//! compare values are pulse widths in microseconds.

use cradle_hal::PwmOutput;
use embassy_rp::pwm::{Config, Pwm};
use fixed::types::U12F4;

/// Counter ticks per microsecond at this divider
const CLOCK_DIVIDER: u8 = 125;

/// 20 ms frame
const PERIOD_US: u32 = 20_000;

/// Which output of the slice the servo is wired to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ServoChannel {
    A,
    B,
}

/// Slice configuration for a 50 Hz frame with `pulse_us` on `channel`
pub fn servo_pwm_config(channel: ServoChannel, pulse_us: u16) -> Config {
    let mut config = Config::default();
    config.divider = U12F4::from_num(CLOCK_DIVIDER);
    config.top = (PERIOD_US - 1) as u16;
    match channel {
        ServoChannel::A => config.compare_a = pulse_us,
        ServoChannel::B => config.compare_b = pulse_us,
    }
    config
}

pub struct RpServoPwm<'d> {
    pwm: Pwm<'d>,
    channel: ServoChannel,
    pulse_us: u16,
}

impl<'d> RpServoPwm<'d> {
    /// Wrap a slice already set up with [`servo_pwm_config`]
    pub fn new(pwm: Pwm<'d>, channel: ServoChannel, pulse_us: u16) -> Self {
        Self {
            pwm,
            channel,
            pulse_us,
        }
    }
}

impl PwmOutput for RpServoPwm<'_> {
    fn period_us(&self) -> u32 {
        PERIOD_US
    }

    fn set_pulse_us(&mut self, pulse_us: u16) {
        let pulse_us = pulse_us.min((PERIOD_US - 1) as u16);
        self.pulse_us = pulse_us;
        self.pwm
            .set_config(&servo_pwm_config(self.channel, pulse_us));
    }

    fn pulse_us(&self) -> u16 {
        self.pulse_us
    }
}
