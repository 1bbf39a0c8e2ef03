//! Board-agnostic core logic for the cradle monitor firmware
//!
//! This crate contains all application logic that does not depend on
//! specific hardware implementations:
//!
//! - Wrapping millisecond time base
//! - Sensor, actuator, display and alert port traits
//! - The cooperative tick scheduler and its four timed behaviours
//!   (sensor sampling, cradle swing, buzzer pattern, diaper alert window)
//! - Threshold rules and the status display presenter
//! - Configuration type definitions
//!
//! Nothing here blocks except [`traits::AlertTransport::send`], and nothing
//! allocates: every piece of state is a fixed-size field of
//! [`scheduler::Scheduler`].

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod config;
pub mod display;
pub mod scheduler;
pub mod state;
pub mod time;
pub mod traits;
