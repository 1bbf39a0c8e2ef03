//! Sensor sampling timer

use crate::time::Instant;

/// One successful set of sensor readings
///
/// Lives only for the tick that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SensorReading {
    /// Temperature (°C × 10)
    pub temperature_x10: i16,
    /// Wetness probe value (0-1023, lower is wetter)
    pub wetness: u16,
    /// Cry detector hears crying
    pub crying: bool,
}

/// Gates sensor reads to a fixed period
#[derive(Debug, Clone)]
pub struct SamplingTimer {
    period_ms: u32,
    last_sample: Instant,
}

impl SamplingTimer {
    /// Create a timer whose first sample falls one period after power-on
    pub const fn new(period_ms: u32) -> Self {
        Self {
            period_ms,
            last_sample: Instant::ZERO,
        }
    }

    /// Check whether a sample is due, and claim it if so
    ///
    /// The window is consumed even if the caller later discards the
    /// readings, so a faulty sensor is retried one full period later.
    pub fn poll(&mut self, now: Instant) -> bool {
        if now.elapsed_since(self.last_sample) >= self.period_ms {
            self.last_sample = now;
            true
        } else {
            false
        }
    }

    /// Time of the last claimed sample
    pub fn last_sample(&self) -> Instant {
        self.last_sample
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_sample_after_one_period() {
        let mut timer = SamplingTimer::new(500);
        assert!(!timer.poll(Instant::from_millis(499)));
        assert!(timer.poll(Instant::from_millis(500)));
        assert_eq!(timer.last_sample(), Instant::from_millis(500));
    }

    #[test]
    fn test_period_measured_from_claim() {
        let mut timer = SamplingTimer::new(500);
        assert!(timer.poll(Instant::from_millis(730)));
        assert!(!timer.poll(Instant::from_millis(1_000)));
        assert!(!timer.poll(Instant::from_millis(1_229)));
        assert!(timer.poll(Instant::from_millis(1_230)));
    }

    #[test]
    fn test_poll_across_wrap() {
        let mut timer = SamplingTimer::new(500);
        let start = Instant::from_millis(u32::MAX - 100);
        assert!(timer.poll(start));
        assert!(!timer.poll(start.wrapping_add_ms(499)));
        assert!(timer.poll(start.wrapping_add_ms(500)));
    }
}
