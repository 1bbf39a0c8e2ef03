//! Sensor traits

/// Errors that make a temperature reading invalid
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SensorError {
    /// Sensor did not answer the start signal
    NoResponse,
    /// Sensor stopped toggling the line mid-frame
    Timeout,
    /// Frame checksum did not match
    ChecksumMismatch,
    /// Reading outside the sensor's physical range
    OutOfRange,
}

/// Trait for temperature sensors
pub trait TemperatureSensor {
    /// Read the current temperature in degrees Celsius
    ///
    /// Returns a fixed-point value with 0.1°C resolution.
    /// For example, 31.5°C is returned as 315.
    ///
    /// Takes `&mut self` because single-wire reads drive the data line.
    fn read_celsius_x10(&mut self) -> Result<i16, SensorError>;
}

/// Trait for the diaper wetness probe
pub trait WetnessSensor {
    /// Raw probe value normalised to 10 bits (0-1023)
    ///
    /// Lower values mean more moisture. A probe that cannot be read
    /// reports full scale, i.e. dry.
    fn read_wetness(&mut self) -> u16;
}

/// Trait for the sound (cry) detector
pub trait CryDetector {
    /// Raw digital level: `true` = silence, `false` = crying
    ///
    /// Mirrors the active-low output of common sound detector modules.
    fn read_level(&mut self) -> bool;

    /// Check whether the detector currently hears crying
    fn is_crying(&mut self) -> bool {
        !self.read_level()
    }
}

/// Everything the sampling step reads, in one place
pub trait SensorPort {
    /// Temperature in °C × 10, or the reason the reading is invalid
    fn read_temperature(&mut self) -> Result<i16, SensorError>;

    /// Wetness probe value, 0-1023, lower is wetter
    fn read_wetness(&mut self) -> u16;

    /// Cry detector level: `true` = silence, `false` = crying
    fn read_cry_level(&mut self) -> bool;
}

/// A [`SensorPort`] assembled from individual sensor drivers
pub struct SensorBank<T, W, C> {
    pub temperature: T,
    pub wetness: W,
    pub cry: C,
}

impl<T, W, C> SensorBank<T, W, C> {
    pub fn new(temperature: T, wetness: W, cry: C) -> Self {
        Self {
            temperature,
            wetness,
            cry,
        }
    }
}

impl<T: TemperatureSensor, W: WetnessSensor, C: CryDetector> SensorPort for SensorBank<T, W, C> {
    fn read_temperature(&mut self) -> Result<i16, SensorError> {
        self.temperature.read_celsius_x10()
    }

    fn read_wetness(&mut self) -> u16 {
        self.wetness.read_wetness()
    }

    fn read_cry_level(&mut self) -> bool {
        self.cry.read_level()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FixedTemp(Result<i16, SensorError>);

    impl TemperatureSensor for FixedTemp {
        fn read_celsius_x10(&mut self) -> Result<i16, SensorError> {
            self.0
        }
    }

    struct FixedWetness(u16);

    impl WetnessSensor for FixedWetness {
        fn read_wetness(&mut self) -> u16 {
            self.0
        }
    }

    struct FixedLevel(bool);

    impl CryDetector for FixedLevel {
        fn read_level(&mut self) -> bool {
            self.0
        }
    }

    #[test]
    fn test_bank_forwards_reads() {
        let mut bank = SensorBank::new(FixedTemp(Ok(254)), FixedWetness(812), FixedLevel(true));
        assert_eq!(bank.read_temperature(), Ok(254));
        assert_eq!(bank.read_wetness(), 812);
        assert!(bank.read_cry_level());
    }

    #[test]
    fn test_cry_level_is_active_low() {
        assert!(FixedLevel(false).is_crying());
        assert!(!FixedLevel(true).is_crying());
    }

    #[test]
    fn test_bank_passes_sensor_fault() {
        let mut bank = SensorBank::new(
            FixedTemp(Err(SensorError::ChecksumMismatch)),
            FixedWetness(0),
            FixedLevel(true),
        );
        assert_eq!(bank.read_temperature(), Err(SensorError::ChecksumMismatch));
    }
}
