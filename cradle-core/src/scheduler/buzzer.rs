//! Buzzer pattern state machine
//!
//! The output level is recomputed every tick from the time elapsed since
//! the current beep started, never from a tick count, so a late or missed
//! tick is corrected on the next one.

use crate::config::{BuzzerConfig, ToneTiming};
use crate::time::Instant;

/// Beep rhythm
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum AlertTone {
    /// Fast beeping
    CryAlert,
    /// Slow beeping
    WetAlert,
}

/// Buzzer pattern state
///
/// Inactive carries nothing: there is no tone or unit count to go stale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum BuzzerState {
    Off,
    Active {
        tone: AlertTone,
        /// Half-cycles left; one beep is an ON unit plus an OFF unit
        units_remaining: u8,
        /// Start of the beep currently playing
        pattern_start: Instant,
    },
}

/// What the buzzer pin should do after an advance
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum BuzzerAction {
    /// Pattern not running; leave the pin alone
    Idle,
    /// Drive the buzzer on or off
    Drive(bool),
    /// Last beep finished; drive the buzzer off
    Finished,
}

/// Buzzer pattern player
#[derive(Debug, Clone)]
pub struct BuzzerPattern {
    state: BuzzerState,
    config: BuzzerConfig,
}

impl BuzzerPattern {
    pub fn new(config: BuzzerConfig) -> Self {
        Self {
            state: BuzzerState::Off,
            config,
        }
    }

    pub fn state(&self) -> BuzzerState {
        self.state
    }

    pub fn is_active(&self) -> bool {
        self.state != BuzzerState::Off
    }

    fn timing(&self, tone: AlertTone) -> ToneTiming {
        match tone {
            AlertTone::CryAlert => self.config.cry,
            AlertTone::WetAlert => self.config.wet,
        }
    }

    /// Start playing `beeps` beeps of `tone`
    ///
    /// First request wins: while a pattern is playing, new requests are
    /// dropped without touching it. Returns whether the pattern started.
    pub fn start(&mut self, tone: AlertTone, beeps: u8, now: Instant) -> bool {
        if self.is_active() {
            return false;
        }

        self.state = BuzzerState::Active {
            tone,
            units_remaining: beeps.saturating_mul(2),
            pattern_start: now,
        };
        true
    }

    /// Compute the buzzer level for `now`
    pub fn advance(&mut self, now: Instant) -> BuzzerAction {
        let BuzzerState::Active {
            tone,
            units_remaining,
            pattern_start,
        } = self.state
        else {
            return BuzzerAction::Idle;
        };

        if units_remaining == 0 {
            self.state = BuzzerState::Off;
            return BuzzerAction::Finished;
        }

        let timing = self.timing(tone);
        let period = timing.period_ms().max(1);
        let elapsed = now.elapsed_since(pattern_start);
        let on = elapsed % period < timing.on_ms;

        if elapsed >= period {
            // One ON and one OFF unit done
            let remaining = units_remaining.saturating_sub(2);
            if remaining == 0 {
                self.state = BuzzerState::Off;
                return BuzzerAction::Finished;
            }
            self.state = BuzzerState::Active {
                tone,
                units_remaining: remaining,
                pattern_start: now,
            };
        }

        BuzzerAction::Drive(on)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Run a pattern with a fixed tick and return (level, start, end) runs
    fn record(tone: AlertTone, beeps: u8, tick_ms: u32) -> Vec<(bool, u32, u32)> {
        let mut buzzer = BuzzerPattern::new(BuzzerConfig::default());
        let t0 = Instant::from_millis(50_000);
        buzzer.start(tone, beeps, t0);

        let mut runs: Vec<(bool, u32, u32)> = Vec::new();
        let mut t = 0u32;
        loop {
            let level = match buzzer.advance(t0.wrapping_add_ms(t)) {
                BuzzerAction::Drive(on) => on,
                BuzzerAction::Finished => {
                    if let Some(last) = runs.last_mut() {
                        last.2 = t;
                    }
                    break;
                }
                BuzzerAction::Idle => panic!("pattern went idle without finishing"),
            };
            match runs.last_mut() {
                Some(last) if last.0 == level => {}
                Some(last) => {
                    last.2 = t;
                    runs.push((level, t, t));
                }
                None => runs.push((level, t, t)),
            }
            t += tick_ms;
            assert!(t < 60_000, "pattern never finished");
        }
        runs
    }

    #[test]
    fn test_cry_pattern_three_pulses() {
        let runs = record(AlertTone::CryAlert, 3, 1);
        let pulses: Vec<_> = runs.iter().filter(|r| r.0).collect();
        let gaps: Vec<_> = runs.iter().filter(|r| !r.0).collect();

        assert_eq!(pulses.len(), 3);
        for pulse in &pulses {
            assert_eq!(pulse.2 - pulse.1, 200);
        }
        for gap in &gaps {
            assert_eq!(gap.2 - gap.1, 200);
        }
        assert!(runs.first().unwrap().0, "pattern starts with a beep");
    }

    #[test]
    fn test_pulses_never_short_with_coarse_ticks() {
        let runs = record(AlertTone::CryAlert, 3, 7);
        let pulses: Vec<_> = runs.iter().filter(|r| r.0).collect();
        assert_eq!(pulses.len(), 3);
        for pulse in pulses {
            assert!(pulse.2 - pulse.1 >= 200);
        }
    }

    #[test]
    fn test_wet_pattern_timing() {
        let runs = record(AlertTone::WetAlert, 3, 1);
        let pulses: Vec<_> = runs.iter().filter(|r| r.0).collect();
        assert_eq!(pulses.len(), 3);
        assert_eq!(pulses[0].2 - pulses[0].1, 500);
    }

    #[test]
    fn test_silent_after_finish() {
        let mut buzzer = BuzzerPattern::new(BuzzerConfig::default());
        let t0 = Instant::from_millis(0);
        buzzer.start(AlertTone::CryAlert, 1, t0);
        assert_eq!(buzzer.advance(t0), BuzzerAction::Drive(true));
        assert_eq!(buzzer.advance(t0.wrapping_add_ms(250)), BuzzerAction::Drive(false));
        assert_eq!(buzzer.advance(t0.wrapping_add_ms(400)), BuzzerAction::Finished);
        assert_eq!(buzzer.state(), BuzzerState::Off);
        assert_eq!(buzzer.advance(t0.wrapping_add_ms(500)), BuzzerAction::Idle);
        assert_eq!(buzzer.advance(t0.wrapping_add_ms(9_000)), BuzzerAction::Idle);
    }

    #[test]
    fn test_start_while_active_is_ignored() {
        let mut buzzer = BuzzerPattern::new(BuzzerConfig::default());
        let t0 = Instant::from_millis(1_000);
        assert!(buzzer.start(AlertTone::CryAlert, 3, t0));
        buzzer.advance(t0.wrapping_add_ms(120));
        let before = buzzer.state();

        assert!(!buzzer.start(AlertTone::WetAlert, 5, t0.wrapping_add_ms(150)));
        assert_eq!(buzzer.state(), before);
        assert_eq!(
            before,
            BuzzerState::Active {
                tone: AlertTone::CryAlert,
                units_remaining: 6,
                pattern_start: t0,
            }
        );
    }

    #[test]
    fn test_late_tick_consumes_one_beep() {
        let mut buzzer = BuzzerPattern::new(BuzzerConfig::default());
        let t0 = Instant::from_millis(0);
        buzzer.start(AlertTone::CryAlert, 3, t0);
        // Tick stalled for 2.5 s by an alert send
        let late = t0.wrapping_add_ms(2_500);
        assert_eq!(buzzer.advance(late), BuzzerAction::Drive(true));
        assert_eq!(
            buzzer.state(),
            BuzzerState::Active {
                tone: AlertTone::CryAlert,
                units_remaining: 4,
                pattern_start: late,
            }
        );
    }

    #[test]
    fn test_restart_after_finish() {
        let mut buzzer = BuzzerPattern::new(BuzzerConfig::default());
        let t0 = Instant::from_millis(0);
        buzzer.start(AlertTone::CryAlert, 1, t0);
        buzzer.advance(t0.wrapping_add_ms(400));
        assert!(!buzzer.is_active());
        assert!(buzzer.start(AlertTone::WetAlert, 1, t0.wrapping_add_ms(500)));
    }
}
