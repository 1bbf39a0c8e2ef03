//! Analog input abstraction

/// A single analog input channel
///
/// The channel owns whatever peripheral access it needs, so a driver can
/// sample it without knowing how the ADC is shared.
pub trait AdcInput {
    /// Error type for conversions
    type Error;

    /// Resolution of a raw sample in bits (e.g. 12 for RP2040)
    fn resolution_bits(&self) -> u8;

    /// Perform one blocking conversion and return the raw sample
    fn read_raw(&mut self) -> Result<u16, Self::Error>;
}
