//! Resistive soil-moisture probe used as a wetness sensor
//!
//! The probe reads high when dry and falls as the pad gets wet. Readings
//! are scaled to 10 bits whatever the ADC resolution, so one threshold
//! works across boards.

use cradle_core::traits::WetnessSensor;
use cradle_hal::AdcInput;

/// Full-scale value of a normalised reading
pub const WETNESS_FULL_SCALE: u16 = 1023;

/// Scale a raw conversion of `bits` resolution to 0..=1023
pub fn normalize_to_10_bits(raw: u16, bits: u8) -> u16 {
    let scaled = if bits >= 10 {
        raw >> (bits - 10).min(15)
    } else {
        raw << (10 - bits)
    };
    scaled.min(WETNESS_FULL_SCALE)
}

/// Wetness probe on an analog input
pub struct SoilProbe<A> {
    adc: A,
}

impl<A: AdcInput> SoilProbe<A> {
    pub fn new(adc: A) -> Self {
        Self { adc }
    }
}

impl<A: AdcInput> WetnessSensor for SoilProbe<A> {
    /// A failed conversion reads as a dry pad
    fn read_wetness(&mut self) -> u16 {
        let bits = self.adc.resolution_bits();
        self.adc
            .read_raw()
            .map(|raw| normalize_to_10_bits(raw, bits))
            .unwrap_or(WETNESS_FULL_SCALE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    struct MockAdc {
        bits: u8,
        value: Result<u16, ()>,
    }

    impl AdcInput for MockAdc {
        type Error = ();

        fn resolution_bits(&self) -> u8 {
            self.bits
        }

        fn read_raw(&mut self) -> Result<u16, ()> {
            self.value
        }
    }

    #[test]
    fn test_twelve_bit_scaling() {
        assert_eq!(normalize_to_10_bits(4095, 12), 1023);
        assert_eq!(normalize_to_10_bits(2000, 12), 500);
        assert_eq!(normalize_to_10_bits(0, 12), 0);
    }

    #[test]
    fn test_ten_bit_passthrough() {
        assert_eq!(normalize_to_10_bits(400, 10), 400);
    }

    #[test]
    fn test_eight_bit_scaling() {
        assert_eq!(normalize_to_10_bits(255, 8), 1020);
    }

    #[test]
    fn test_probe_reads_normalised() {
        let mut probe = SoilProbe::new(MockAdc {
            bits: 12,
            value: Ok(1600),
        });
        assert_eq!(probe.read_wetness(), 400);
    }

    #[test]
    fn test_adc_fault_reads_dry() {
        let mut probe = SoilProbe::new(MockAdc {
            bits: 12,
            value: Err(()),
        });
        assert_eq!(probe.read_wetness(), WETNESS_FULL_SCALE);
    }

    proptest! {
        #[test]
        fn prop_never_exceeds_full_scale(raw in any::<u16>(), bits in 8u8..=16) {
            prop_assert!(normalize_to_10_bits(raw, bits) <= WETNESS_FULL_SCALE);
        }
    }
}
