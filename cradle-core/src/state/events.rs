//! Events produced by the scheduler

use crate::traits::{AlertError, AlertKind, DisplayError, SensorError};

/// Things that happened during one scheduler tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Event {
    // Sampling events
    /// Temperature read failed; the sample's rules were skipped
    SensorFault(SensorError),
    /// Fan relay changed state
    FanSwitched { on: bool },

    // Trigger events
    /// Crying heard while the cradle was idle; swing armed
    CryDetected,
    /// Wet probe reading while no diaper alert was active; window armed
    DiaperWet,

    // Alert link events
    /// SMS handed to the modem
    AlertSent(AlertKind),
    /// SMS could not be handed to the modem; not retried
    AlertFailed { kind: AlertKind, error: AlertError },

    // Completion events
    /// Cradle reached its rest angle and stopped
    CradleStopped,
    /// Buzzer pattern ran out of beeps
    BuzzerFinished,
    /// Diaper alert window expired
    DiaperAlertCleared,

    // Output faults
    /// Status display write failed
    DisplayFault(DisplayError),
}

impl Event {
    /// Check if this event comes from a threshold rule firing
    pub fn is_trigger(&self) -> bool {
        matches!(self, Event::CryDetected | Event::DiaperWet)
    }

    /// Check if this event concerns the SMS link
    pub fn is_alert_event(&self) -> bool {
        matches!(self, Event::AlertSent(_) | Event::AlertFailed { .. })
    }

    /// Check if this event reports degraded hardware
    pub fn is_fault(&self) -> bool {
        matches!(
            self,
            Event::SensorFault(_) | Event::AlertFailed { .. } | Event::DisplayFault(_)
        )
    }
}
