//! SIM800-family GSM modem sending text messages over AT commands
//!
//! The modem is driven open loop: each command is followed by a fixed
//! settle delay rather than by parsing its reply. Only the liveness probe
//! reads from the modem. A send therefore blocks for the sum of the
//! settle delays, about 2.6 s with the default timing.

use cradle_core::traits::{AlertError, AlertTransport};
use cradle_hal::{UartRx, UartTx};
use embedded_hal::delay::DelayNs;

/// Longest body accepted in a single 7-bit text message
pub const MAX_BODY_LEN: usize = 160;

/// Terminates the message body and submits it
const CTRL_Z: u8 = 0x1A;

/// Settle delays after each step, in milliseconds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ModemTiming {
    /// After each `AT` probe, before reading the reply
    pub probe_ms: u32,
    /// After `AT+CMGF=1`
    pub text_mode_ms: u32,
    /// After `AT+CMGS="<number>"`, while the modem prompts for the body
    pub recipient_ms: u32,
    /// After the body
    pub body_ms: u32,
    /// After Ctrl-Z, while the message is submitted
    pub submit_ms: u32,
}

impl Default for ModemTiming {
    fn default() -> Self {
        Self {
            probe_ms: 1_000,
            text_mode_ms: 500,
            recipient_ms: 1_000,
            body_ms: 100,
            submit_ms: 1_000,
        }
    }
}

impl ModemTiming {
    /// Total blocking time of one send
    pub fn send_ms(&self) -> u32 {
        self.text_mode_ms + self.recipient_ms + self.body_ms + self.submit_ms
    }
}

/// Probe failures
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ModemError {
    /// The UART reported an error
    Uart,
    /// No `OK` within the allowed attempts
    NoResponse,
}

pub struct Sim800<U, D> {
    uart: U,
    delay: D,
    timing: ModemTiming,
    /// Last probe succeeded
    ready: bool,
}

impl<U: UartTx + UartRx, D: DelayNs> Sim800<U, D> {
    pub fn new(uart: U, delay: D) -> Self {
        Self::with_timing(uart, delay, ModemTiming::default())
    }

    pub fn with_timing(uart: U, delay: D, timing: ModemTiming) -> Self {
        Self {
            uart,
            delay,
            timing,
            ready: false,
        }
    }

    /// Whether the last probe got an answer
    pub fn is_ready(&self) -> bool {
        self.ready
    }

    /// Check the modem answers `AT`, then switch it to text mode
    ///
    /// Tries up to `attempts` times. The caller is expected to have given
    /// the modem time to boot first.
    pub fn probe(&mut self, attempts: u8) -> Result<u8, ModemError> {
        self.ready = false;

        for attempt in 1..=attempts {
            self.write(b"AT\r\n").map_err(|_| ModemError::Uart)?;
            self.delay.delay_ms(self.timing.probe_ms);

            if self.reply_contains_ok()? {
                self.write(b"AT+CMGF=1\r\n").map_err(|_| ModemError::Uart)?;
                self.delay.delay_ms(self.timing.text_mode_ms);
                self.ready = true;
                return Ok(attempt);
            }
        }

        Err(ModemError::NoResponse)
    }

    /// Drain the receive buffer looking for `OK`
    fn reply_contains_ok(&mut self) -> Result<bool, ModemError> {
        let mut buf = [0u8; 32];
        let mut previous = 0u8;
        let mut found = false;

        loop {
            let n = self
                .uart
                .read_available(&mut buf)
                .map_err(|_| ModemError::Uart)?;
            if n == 0 {
                return Ok(found);
            }
            for &byte in &buf[..n] {
                found |= previous == b'O' && byte == b'K';
                previous = byte;
            }
        }
    }

    /// Throw away unsolicited output so it is not mistaken for a reply
    fn discard_input(&mut self) -> Result<(), AlertError> {
        let mut buf = [0u8; 32];
        while self.uart.read_available(&mut buf).map_err(|_| AlertError::Io)? > 0 {}
        Ok(())
    }

    fn write(&mut self, data: &[u8]) -> Result<(), <U as UartTx>::Error> {
        self.uart.write_blocking(data)?;
        self.uart.flush()
    }

    fn write_all(&mut self, parts: &[&[u8]], settle_ms: u32) -> Result<(), AlertError> {
        for part in parts {
            self.uart.write_blocking(part).map_err(|_| AlertError::Io)?;
        }
        self.uart.flush().map_err(|_| AlertError::Io)?;
        self.delay.delay_ms(settle_ms);
        Ok(())
    }

    pub fn release(self) -> (U, D) {
        (self.uart, self.delay)
    }
}

impl<U: UartTx + UartRx, D: DelayNs> AlertTransport for Sim800<U, D> {
    fn send(&mut self, destination: &str, body: &str) -> Result<(), AlertError> {
        if destination.is_empty() {
            return Err(AlertError::Unavailable);
        }
        // A quote would end the number field, Ctrl-Z would end the body
        if destination.contains('"') || body.len() > MAX_BODY_LEN || body.contains('\u{1A}') {
            return Err(AlertError::TooLong);
        }

        self.discard_input()?;
        let timing = self.timing;
        self.write_all(&[b"AT+CMGF=1\r\n".as_slice()], timing.text_mode_ms)?;
        self.write_all(
            &[
                b"AT+CMGS=\"".as_slice(),
                destination.as_bytes(),
                b"\"\r\n".as_slice(),
            ],
            timing.recipient_ms,
        )?;
        self.write_all(&[body.as_bytes()], timing.body_ms)?;
        self.write_all(&[[CTRL_Z].as_slice()], timing.submit_ms)
    }
}
