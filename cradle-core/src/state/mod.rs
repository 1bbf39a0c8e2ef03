//! Observable outcomes of a scheduler tick
//!
//! The scheduler never logs. It reports what happened as events and leaves
//! logging to the firmware.

pub mod events;

pub use events::Event;
