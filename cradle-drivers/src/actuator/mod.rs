//! Actuator drivers

pub mod servo;
pub mod switch;

pub use servo::{pulse_for_angle, HobbyServo, SERVO_MAX_PULSE_US, SERVO_MIN_PULSE_US};
pub use switch::GpioSwitch;
