//! Remote alert transport trait

/// Errors from the alert link
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum AlertError {
    /// Modem did not answer the liveness probe
    Unavailable,
    /// Serial write failed
    Io,
    /// Destination or body does not fit the modem's command buffer
    TooLong,
}

/// Kinds of alert the monitor can raise
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum AlertKind {
    BabyCrying,
    DiaperWet,
}

impl AlertKind {
    /// Fixed SMS body for this alert
    pub const fn message(&self) -> &'static str {
        match self {
            AlertKind::BabyCrying => "Alert: Baby is Crying!",
            AlertKind::DiaperWet => "Alert: Diaper is wet. Please check.",
        }
    }
}

/// Trait for sending short text alerts
///
/// This is the one blocking operation the scheduler performs: a send may
/// stall the tick loop for several seconds while the modem is driven.
/// Alerts are rare and human-paced, so the other behaviours simply resume
/// late and catch up from their own timestamps.
pub trait AlertTransport {
    /// Send `body` to `destination`
    fn send(&mut self, destination: &str, body: &str) -> Result<(), AlertError>;
}
