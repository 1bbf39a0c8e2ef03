//! PWM output abstraction
//!
//! Only what a hobby servo needs: a fixed frame period and a settable
//! high-time in microseconds.

/// Pulse-width modulated output with microsecond resolution
pub trait PwmOutput {
    /// Frame period in microseconds (20_000 for a 50 Hz servo frame)
    fn period_us(&self) -> u32;

    /// Set the high time of each frame in microseconds
    ///
    /// Values larger than the period are clamped to the period.
    fn set_pulse_us(&mut self, pulse_us: u16);

    /// Get the currently configured high time in microseconds
    fn pulse_us(&self) -> u16;
}
