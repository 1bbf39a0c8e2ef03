//! RP2040-specific HAL for the cradle monitor firmware
//!
//! Thin adapters that let embassy-rp peripherals stand in for the shared
//! `cradle-hal` traits:
//!
//! - Push-pull outputs, inputs and an open-drain data line
//! - Blocking ADC channel
//! - Buffered UART for the GSM modem
//! - Blocking I2C for the LCD backpack
//! - 50 Hz servo PWM with microsecond compare values
//!
//! Peripherals are constructed by the firmware; these types only wrap them.

#![no_std]

pub mod adc;
pub mod gpio;
pub mod i2c;
pub mod pwm;
pub mod uart;

pub use adc::RpAdcChannel;
pub use gpio::{RpInput, RpOpenDrain, RpOutput};
pub use i2c::{i2c_config, RpI2c};
pub use pwm::{servo_pwm_config, RpServoPwm, ServoChannel};
pub use uart::{uart_config, RpUart};
