//! Scheduler time base on top of embassy-time

use cradle_core::time::{ClockSource, Instant};

/// Milliseconds since boot, truncated to the scheduler's wrapping `u32`
pub struct EmbassyClock {
    start: embassy_time::Instant,
}

impl EmbassyClock {
    pub fn new() -> Self {
        Self {
            start: embassy_time::Instant::now(),
        }
    }
}

impl ClockSource for EmbassyClock {
    fn now(&self) -> Instant {
        Instant::from_millis(self.start.elapsed().as_millis() as u32)
    }
}
