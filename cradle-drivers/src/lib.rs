//! Hardware driver implementations
//!
//! This crate provides concrete implementations of the traits defined
//! in cradle-core, built on the pin and bus traits of cradle-hal:
//!
//! - Sensors (DHT11 temperature, resistive soil probe, sound detector)
//! - Actuators (relay fan and buzzer switches, hobby servo)
//! - Display (HD44780 16x2 LCD behind a PCF8574 I2C backpack)
//! - Alerts (SIM800-style GSM modem speaking AT commands)
//!
//! Blocking waits go through [`embedded_hal::delay::DelayNs`] so the
//! drivers run against any timer, including the test doubles below.

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod actuator;
pub mod display;
pub mod modem;
pub mod sensor;
