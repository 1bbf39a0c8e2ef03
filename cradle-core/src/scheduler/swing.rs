//! Cradle swing state machine
//!
//! The servo is ramped one degree per step instead of being commanded to
//! its end stops, so each tick does a bounded amount of work and the
//! buzzer and sampler keep running while the cradle rocks.
//!
//! ```text
//!            arm(cycles)
//!   Idle ───────────────▶ Forward ──(angle ≥ max)──▶ Back
//!    ▲                      ▲                         │
//!    │                      └──(cycles left > 0)──────┤ angle ≤ min
//!    │                                                ▼
//!    └───────(angle == rest)──────────────────── Returning
//! ```

use crate::config::SwingConfig;
use crate::time::Instant;

/// Swing phase, carrying only the data meaningful to that phase
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SwingState {
    /// Parked at the rest angle
    Idle,
    /// Ramping up toward the maximum angle
    Forward { cycles_left: u8, last_step: Instant },
    /// Ramping down toward the minimum angle
    Back { cycles_left: u8, last_step: Instant },
    /// All sweeps done, ramping to the rest angle
    Returning { last_step: Instant },
}

impl SwingState {
    fn last_step(&self) -> Option<Instant> {
        match *self {
            SwingState::Idle => None,
            SwingState::Forward { last_step, .. }
            | SwingState::Back { last_step, .. }
            | SwingState::Returning { last_step } => Some(last_step),
        }
    }
}

/// What the servo should do after an advance
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SwingAction {
    /// Leave the servo where it is
    Hold,
    /// Command this angle
    MoveTo(u8),
    /// Rest angle reached; the machine is idle again
    Stopped,
}

/// Cradle swing sequencer
#[derive(Debug, Clone)]
pub struct CradleSwing {
    state: SwingState,
    config: SwingConfig,
}

impl CradleSwing {
    /// Create an idle sequencer
    pub fn new(config: SwingConfig) -> Self {
        Self {
            state: SwingState::Idle,
            config,
        }
    }

    /// Current phase
    pub fn state(&self) -> SwingState {
        self.state
    }

    pub fn is_idle(&self) -> bool {
        self.state == SwingState::Idle
    }

    /// Start a swing sequence of `cycles` forward+back sweeps
    ///
    /// Ignored unless idle. Returns whether the sequence was started.
    /// The first step is taken one step interval after `now`.
    pub fn arm(&mut self, now: Instant, cycles: u8) -> bool {
        if !self.is_idle() {
            return false;
        }

        self.state = if cycles == 0 {
            SwingState::Returning { last_step: now }
        } else {
            SwingState::Forward {
                cycles_left: cycles,
                last_step: now,
            }
        };
        true
    }

    /// Advance by at most one step
    ///
    /// `angle` is the servo's current angle. Steps are rate limited to one
    /// per `step_interval_ms` regardless of how often this is called.
    pub fn advance(&mut self, now: Instant, angle: u8) -> SwingAction {
        let Some(last_step) = self.state.last_step() else {
            return SwingAction::Hold;
        };

        if now.elapsed_since(last_step) < self.config.step_interval_ms {
            return SwingAction::Hold;
        }

        let SwingConfig {
            min_deg,
            max_deg,
            rest_deg,
            ..
        } = self.config;

        match self.state {
            SwingState::Idle => SwingAction::Hold,

            SwingState::Forward { cycles_left, .. } => {
                if angle < max_deg {
                    self.state = SwingState::Forward {
                        cycles_left,
                        last_step: now,
                    };
                    SwingAction::MoveTo(angle + 1)
                } else {
                    self.state = SwingState::Back {
                        cycles_left,
                        last_step: now,
                    };
                    SwingAction::Hold
                }
            }

            SwingState::Back { cycles_left, .. } => {
                if angle > min_deg {
                    self.state = SwingState::Back {
                        cycles_left,
                        last_step: now,
                    };
                    SwingAction::MoveTo(angle - 1)
                } else {
                    let remaining = cycles_left.saturating_sub(1);
                    self.state = if remaining > 0 {
                        SwingState::Forward {
                            cycles_left: remaining,
                            last_step: now,
                        }
                    } else {
                        SwingState::Returning { last_step: now }
                    };
                    SwingAction::Hold
                }
            }

            SwingState::Returning { .. } => {
                if angle == rest_deg {
                    self.state = SwingState::Idle;
                    return SwingAction::Stopped;
                }

                self.state = SwingState::Returning { last_step: now };
                if angle < rest_deg {
                    SwingAction::MoveTo(angle + 1)
                } else {
                    SwingAction::MoveTo(angle - 1)
                }
            }
        }
    }
}
