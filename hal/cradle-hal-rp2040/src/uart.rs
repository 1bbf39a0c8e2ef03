//! UART adapter
//!
//! Wraps anything speaking blocking `embedded-io`, which covers the
//! interrupt-driven `BufferedUart`: writes queue into its ring buffer and
//! `read_ready` tells whether received bytes are waiting.

use cradle_hal::uart::{Parity, StopBits};
use cradle_hal::{UartConfig, UartRx, UartTx};
use embassy_rp::uart;
use embedded_io::{Read, ReadReady, Write};

pub struct RpUart<U>(U);

impl<U> RpUart<U> {
    pub fn new(uart: U) -> Self {
        Self(uart)
    }
}

impl<U: Write> UartTx for RpUart<U> {
    type Error = U::Error;

    fn write_blocking(&mut self, data: &[u8]) -> Result<(), Self::Error> {
        self.0.write_all(data)
    }

    fn flush(&mut self) -> Result<(), Self::Error> {
        self.0.flush()
    }
}

impl<U: Read + ReadReady> UartRx for RpUart<U> {
    type Error = U::Error;

    fn read_available(&mut self, buf: &mut [u8]) -> Result<usize, Self::Error> {
        if buf.is_empty() || !self.0.read_ready()? {
            return Ok(0);
        }
        self.0.read(buf)
    }
}

/// Translate a board-agnostic UART configuration
pub fn uart_config(config: &UartConfig) -> uart::Config {
    let mut cfg = uart::Config::default();
    cfg.baudrate = config.baudrate;
    cfg.parity = match config.parity {
        Parity::None => uart::Parity::ParityNone,
        Parity::Even => uart::Parity::ParityEven,
        Parity::Odd => uart::Parity::ParityOdd,
    };
    cfg.stop_bits = match config.stop_bits {
        StopBits::One => uart::StopBits::STOP1,
        StopBits::Two => uart::StopBits::STOP2,
    };
    cfg
}
