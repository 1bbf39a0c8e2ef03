//! I2C adapter

use cradle_hal::{I2cBus, I2cConfig};
use embassy_rp::i2c;
use embedded_hal::i2c::I2c;

/// Any blocking `embedded-hal` I2C master
pub struct RpI2c<B>(B);

impl<B> RpI2c<B> {
    pub fn new(bus: B) -> Self {
        Self(bus)
    }
}

impl<B: I2c> I2cBus for RpI2c<B> {
    type Error = B::Error;

    fn write(&mut self, address: u8, data: &[u8]) -> Result<(), Self::Error> {
        self.0.write(address, data)
    }

    fn read(&mut self, address: u8, buf: &mut [u8]) -> Result<(), Self::Error> {
        self.0.read(address, buf)
    }
}

pub fn i2c_config(config: &I2cConfig) -> i2c::Config {
    let mut cfg = i2c::Config::default();
    cfg.frequency = config.frequency;
    cfg
}
