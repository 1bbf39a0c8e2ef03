//! ADC adapter

use cradle_hal::AdcInput;
use embassy_rp::adc::{Adc, Blocking, Channel, Error};

/// RP2040 conversions are 12 bits wide
const RESOLUTION_BITS: u8 = 12;

/// One analog channel with exclusive use of the converter
pub struct RpAdcChannel<'d> {
    adc: Adc<'d, Blocking>,
    channel: Channel<'d>,
}

impl<'d> RpAdcChannel<'d> {
    pub fn new(adc: Adc<'d, Blocking>, channel: Channel<'d>) -> Self {
        Self { adc, channel }
    }
}

impl AdcInput for RpAdcChannel<'_> {
    type Error = Error;

    fn resolution_bits(&self) -> u8 {
        RESOLUTION_BITS
    }

    fn read_raw(&mut self) -> Result<u16, Error> {
        self.adc.blocking_read(&mut self.channel)
    }
}
