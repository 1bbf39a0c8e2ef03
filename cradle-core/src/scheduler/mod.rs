//! Cooperative tick scheduler
//!
//! Four independent timed behaviours share one thread and one clock
//! reading per tick. Each is a small state machine that does at most one
//! unit of work per tick and decides from its own timestamps whether that
//! work is due, so a slow tick (or a blocking alert send) only delays the
//! behaviours, it never corrupts them.

pub mod buzzer;
pub mod diaper;
pub mod executor;
pub mod rules;
pub mod sampling;
pub mod swing;

pub use buzzer::{AlertTone, BuzzerAction, BuzzerPattern, BuzzerState};
pub use diaper::{DiaperAlert, DiaperAlertState};
pub use executor::{Scheduler, TickReport, MAX_TICK_EVENTS};
pub use sampling::{SamplingTimer, SensorReading};
pub use swing::{CradleSwing, SwingAction, SwingState};
