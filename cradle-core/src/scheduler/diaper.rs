//! Diaper alert window
//!
//! A pure timeout. It does not touch the buzzer, which runs its own
//! countdown; it only decides the status message and when the wetness rule
//! may fire again.

use crate::time::Instant;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DiaperAlertState {
    Inactive,
    Active { since: Instant },
}

/// Diaper alert window timer
#[derive(Debug, Clone)]
pub struct DiaperAlert {
    state: DiaperAlertState,
    window_ms: u32,
}

impl DiaperAlert {
    pub fn new(window_ms: u32) -> Self {
        Self {
            state: DiaperAlertState::Inactive,
            window_ms,
        }
    }

    pub fn state(&self) -> DiaperAlertState {
        self.state
    }

    pub fn is_active(&self) -> bool {
        self.state != DiaperAlertState::Inactive
    }

    /// Open the alert window at `now`
    ///
    /// Ignored while a window is already open. Returns whether it opened.
    pub fn arm(&mut self, now: Instant) -> bool {
        if self.is_active() {
            return false;
        }
        self.state = DiaperAlertState::Active { since: now };
        true
    }

    /// Close the window once strictly more than `window_ms` has passed
    ///
    /// Returns `true` on the tick the window closes.
    pub fn advance(&mut self, now: Instant) -> bool {
        match self.state {
            DiaperAlertState::Active { since } if now.elapsed_since(since) > self.window_ms => {
                self.state = DiaperAlertState::Inactive;
                true
            }
            _ => false,
        }
    }
}
