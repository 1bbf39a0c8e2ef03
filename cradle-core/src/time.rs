//! Millisecond time base
//!
//! Timestamps are a free-running `u32` millisecond counter that wraps after
//! roughly 49.7 days. Every elapsed-time computation goes through
//! [`Instant::elapsed_since`], which uses wrapping subtraction, so a
//! rollover between two timestamps never yields a huge or negative delta.

/// A point on the millisecond tick counter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Instant(u32);

impl Instant {
    /// Counter value at power-on
    pub const ZERO: Self = Self(0);

    /// Create an instant from a raw millisecond count
    pub const fn from_millis(ms: u32) -> Self {
        Self(ms)
    }

    /// Raw millisecond count
    pub const fn as_millis(self) -> u32 {
        self.0
    }

    /// Milliseconds from `earlier` to `self`
    ///
    /// Correct across one counter wrap as long as the true interval is
    /// shorter than the counter period.
    pub const fn elapsed_since(self, earlier: Instant) -> u32 {
        self.0.wrapping_sub(earlier.0)
    }

    /// Instant `ms` milliseconds later, wrapping like the hardware counter
    pub const fn wrapping_add_ms(self, ms: u32) -> Self {
        Self(self.0.wrapping_add(ms))
    }
}

/// Source of the scheduler's tick timestamp
///
/// Read exactly once per scheduler tick.
pub trait ClockSource {
    /// Current time on the monotonic millisecond counter
    fn now(&self) -> Instant;
}
