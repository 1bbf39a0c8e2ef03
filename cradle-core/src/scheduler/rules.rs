//! Threshold rules evaluated on every successful sample
//!
//! The rules are stateless; re-arm suppression comes from the state of the
//! machines they arm, passed in by the caller.

/// Fan runs strictly above the threshold
///
/// No hysteresis: a reading hovering at the threshold may toggle the relay
/// on every sample.
pub fn fan_should_run(temperature_x10: i16, threshold_x10: i16) -> bool {
    temperature_x10 > threshold_x10
}

/// Crying only triggers while the cradle is idle
pub fn cry_triggers(crying: bool, cradle_idle: bool) -> bool {
    crying && cradle_idle
}

/// A wet reading only triggers while no diaper alert is active
pub fn wetness_triggers(wetness: u16, threshold: u16, alert_active: bool) -> bool {
    wetness < threshold && !alert_active
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fan_threshold_is_strict() {
        assert!(!fan_should_run(250, 300));
        assert!(!fan_should_run(300, 300));
        assert!(fan_should_run(301, 300));
    }

    #[test]
    fn test_cry_needs_idle_cradle() {
        assert!(cry_triggers(true, true));
        assert!(!cry_triggers(true, false));
        assert!(!cry_triggers(false, true));
    }

    #[test]
    fn test_wetness_needs_inactive_alert() {
        assert!(wetness_triggers(400, 500, false));
        assert!(!wetness_triggers(400, 500, true));
        assert!(!wetness_triggers(500, 500, false));
        assert!(!wetness_triggers(900, 500, false));
    }
}
