//! Cradle Hardware Abstraction Layer
//!
//! This crate defines hardware abstraction traits that chip-specific HALs
//! implement. Drivers in `cradle-drivers` are written against these traits
//! only, so the same driver code runs on the RP2040 board and in host tests.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  Application (cradle-firmware)          │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  cradle-drivers (DHT11, LCD, modem...)  │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  cradle-hal (this crate - traits)       │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//!             ┌───────────────┐
//!             │  cradle-hal-  │
//!             │    rp2040     │
//!             └───────────────┘
//! ```
//!
//! # Traits
//!
//! - [`gpio::OutputPin`], [`gpio::InputPin`], [`gpio::IoPin`] - Digital I/O
//! - [`uart::UartTx`], [`uart::UartRx`] - Serial communication
//! - [`i2c::I2cBus`] - I2C bus operations
//! - [`adc::AdcInput`] - Single analog input channel
//! - [`pwm::PwmOutput`] - Pulse-width output (servo signal)

#![no_std]
#![deny(unsafe_code)]

pub mod adc;
pub mod gpio;
pub mod i2c;
pub mod pwm;
pub mod uart;

// Re-export key traits at crate root for convenience
pub use adc::AdcInput;
pub use gpio::{InputPin, IoPin, OutputPin};
pub use i2c::{I2cBus, I2cConfig};
pub use pwm::PwmOutput;
pub use uart::{Uart, UartConfig, UartRx, UartTx};
