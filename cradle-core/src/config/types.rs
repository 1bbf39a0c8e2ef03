//! Configuration type definitions
//!
//! Temperatures are fixed-point with 0.1°C resolution (`_x10`), times are
//! milliseconds, angles are whole degrees.

use heapless::String;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Maximum length of the alert destination phone number
pub const MAX_DESTINATION_LEN: usize = 20;

/// Configuration errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// Swing limits are not ordered `min < rest < max`, or exceed 180°
    InvalidSwingRange,
    /// A period or window that must be non-zero is zero
    ZeroDuration,
    /// Beep count is zero or too large to express in half-cycle units
    InvalidBeepCount,
    /// No alert destination configured
    EmptyDestination,
    /// Embedded binary config could not be decoded or encoded
    Malformed,
}

/// Sensor sampling configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SamplingConfig {
    /// Minimum time between two sensor samples
    pub period_ms: u32,
}

impl Default for SamplingConfig {
    fn default() -> Self {
        Self { period_ms: 500 }
    }
}

/// Threshold rule configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ThresholdConfig {
    /// Fan runs while temperature is strictly above this (°C × 10)
    pub fan_above_x10: i16,
    /// Diaper counts as wet while the probe reads strictly below this
    pub wet_below: u16,
}

impl Default for ThresholdConfig {
    fn default() -> Self {
        Self {
            fan_above_x10: 300,
            wet_below: 500,
        }
    }
}

/// Cradle swing configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SwingConfig {
    /// Lowest servo angle of a sweep
    pub min_deg: u8,
    /// Highest servo angle of a sweep
    pub max_deg: u8,
    /// Parking angle
    pub rest_deg: u8,
    /// Minimum time between two 1° steps
    pub step_interval_ms: u32,
    /// Forward+back sweeps per cry trigger
    pub cycles: u8,
}

impl Default for SwingConfig {
    fn default() -> Self {
        Self {
            min_deg: 30,
            max_deg: 90,
            rest_deg: 60,
            step_interval_ms: 30,
            cycles: 3,
        }
    }
}

/// On/off timing of one buzzer tone
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ToneTiming {
    pub on_ms: u32,
    pub off_ms: u32,
}

impl ToneTiming {
    /// Length of one full ON+OFF beep
    pub const fn period_ms(&self) -> u32 {
        self.on_ms.saturating_add(self.off_ms)
    }
}

/// Buzzer pattern configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct BuzzerConfig {
    /// Fast beeping for a crying baby
    pub cry: ToneTiming,
    /// Slow beeping for a wet diaper
    pub wet: ToneTiming,
    /// Beeps per alert
    pub beeps: u8,
}

impl Default for BuzzerConfig {
    fn default() -> Self {
        Self {
            cry: ToneTiming {
                on_ms: 200,
                off_ms: 200,
            },
            wet: ToneTiming {
                on_ms: 500,
                off_ms: 500,
            },
            beeps: 3,
        }
    }
}

/// Diaper alert window configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct DiaperConfig {
    /// How long a wet alert stays active before it may re-arm
    pub window_ms: u32,
}

impl Default for DiaperConfig {
    fn default() -> Self {
        Self { window_ms: 5000 }
    }
}

/// SMS alert configuration
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct AlertConfig {
    /// Parent's phone number in international format
    pub destination: String<MAX_DESTINATION_LEN>,
    /// `AT` liveness probes before the modem is declared unavailable
    pub probe_attempts: u8,
    /// Time the modem needs after power-up before the first probe
    pub modem_boot_ms: u32,
}

impl Default for AlertConfig {
    fn default() -> Self {
        let mut destination = String::new();
        let _ = destination.push_str("+917416640739");
        Self {
            destination,
            probe_attempts: 5,
            modem_boot_ms: 3000,
        }
    }
}

/// Boot sequence configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct BootConfig {
    /// Settle time after outputs are parked, before the modem is probed
    pub stabilize_ms: u32,
}

impl Default for BootConfig {
    fn default() -> Self {
        Self { stabilize_ms: 2000 }
    }
}

/// Complete monitor configuration
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct CradleConfig {
    pub sampling: SamplingConfig,
    pub thresholds: ThresholdConfig,
    pub swing: SwingConfig,
    pub buzzer: BuzzerConfig,
    pub diaper: DiaperConfig,
    pub alert: AlertConfig,
    pub boot: BootConfig,
}

impl CradleConfig {
    /// Check the configuration for values the scheduler cannot run with
    pub fn validate(&self) -> Result<(), ConfigError> {
        let swing = &self.swing;
        if !(swing.min_deg < swing.rest_deg && swing.rest_deg < swing.max_deg)
            || swing.max_deg > 180
        {
            return Err(ConfigError::InvalidSwingRange);
        }

        if self.sampling.period_ms == 0
            || swing.step_interval_ms == 0
            || self.diaper.window_ms == 0
            || self.buzzer.cry.on_ms == 0
            || self.buzzer.wet.on_ms == 0
        {
            return Err(ConfigError::ZeroDuration);
        }

        if self.buzzer.beeps == 0 || self.buzzer.beeps > u8::MAX / 2 {
            return Err(ConfigError::InvalidBeepCount);
        }

        if self.alert.destination.is_empty() {
            return Err(ConfigError::EmptyDestination);
        }

        Ok(())
    }

    /// Decode a postcard-encoded configuration and validate it
    #[cfg(feature = "serde")]
    pub fn from_postcard(bytes: &[u8]) -> Result<Self, ConfigError> {
        let config: Self = postcard::from_bytes(bytes).map_err(|_| ConfigError::Malformed)?;
        config.validate()?;
        Ok(config)
    }

    /// Encode into `buf` with postcard, returning the used prefix
    #[cfg(feature = "serde")]
    pub fn to_postcard<'a>(&self, buf: &'a mut [u8]) -> Result<&'a mut [u8], ConfigError> {
        postcard::to_slice(self, buf).map_err(|_| ConfigError::Malformed)
    }
}
