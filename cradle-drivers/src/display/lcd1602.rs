//! HD44780 16x2 character LCD behind a PCF8574 I2C backpack
//!
//! The expander's eight outputs are wired as:
//!
//! ```text
//!  P7 P6 P5 P4 | P3        | P2 | P1 | P0
//!  D7 D6 D5 D4 | backlight | EN | RW | RS
//! ```
//!
//! so the controller runs in 4-bit mode and every byte goes out as two
//! nibbles, each latched by an EN pulse.

use cradle_core::traits::{DisplayDriver, DisplayError, DISPLAY_COLS, DISPLAY_ROWS};
use cradle_hal::I2cBus;
use embedded_hal::delay::DelayNs;

/// Usual address of PCF8574 backpacks with all jumpers open
pub const LCD_DEFAULT_ADDRESS: u8 = 0x27;

const RS: u8 = 0x01;
const EN: u8 = 0x04;
const BACKLIGHT: u8 = 0x08;

const CMD_CLEAR: u8 = 0x01;
const CMD_ENTRY_MODE_INCREMENT: u8 = 0x06;
const CMD_DISPLAY_ON: u8 = 0x0C;
const CMD_FUNCTION_4BIT_2LINE: u8 = 0x28;
const CMD_SET_DDRAM: u8 = 0x80;

/// DDRAM address of the first column of each row
const ROW_OFFSETS: [u8; DISPLAY_ROWS as usize] = [0x00, 0x40];

/// Execution time of ordinary instructions
const COMMAND_US: u32 = 50;
/// Execution time of clear and home
const CLEAR_US: u32 = 2_000;

pub struct Lcd1602<I, D> {
    i2c: I,
    delay: D,
    address: u8,
    backlight: bool,
}

impl<I: I2cBus, D: DelayNs> Lcd1602<I, D> {
    pub fn new(i2c: I, delay: D, address: u8) -> Self {
        Self {
            i2c,
            delay,
            address,
            backlight: true,
        }
    }

    /// Run the 4-bit initialisation by instruction sequence
    ///
    /// Leaves the display on, cleared, cursor hidden.
    pub fn init(&mut self) -> Result<(), DisplayError> {
        // Power-on settling
        self.delay.delay_ms(50);
        self.expander_write(0)?;

        // Force 8-bit mode three times, then drop to 4-bit
        self.write_nibble(0x30, 0)?;
        self.delay.delay_us(4_500);
        self.write_nibble(0x30, 0)?;
        self.delay.delay_us(4_500);
        self.write_nibble(0x30, 0)?;
        self.delay.delay_us(150);
        self.write_nibble(0x20, 0)?;

        self.command(CMD_FUNCTION_4BIT_2LINE)?;
        self.command(CMD_DISPLAY_ON)?;
        self.clear()?;
        self.command(CMD_ENTRY_MODE_INCREMENT)
    }

    pub fn set_backlight(&mut self, on: bool) -> Result<(), DisplayError> {
        self.backlight = on;
        self.expander_write(0)
    }

    fn set_cursor(&mut self, col: u8, row: u8) -> Result<(), DisplayError> {
        let offset = ROW_OFFSETS
            .get(row as usize)
            .ok_or(DisplayError::InvalidRow)?;
        self.command(CMD_SET_DDRAM | (offset + col))
    }

    fn command(&mut self, value: u8) -> Result<(), DisplayError> {
        self.send(value, 0)?;
        self.delay.delay_us(COMMAND_US);
        Ok(())
    }

    fn send(&mut self, value: u8, mode: u8) -> Result<(), DisplayError> {
        self.write_nibble(value & 0xF0, mode)?;
        self.write_nibble((value << 4) & 0xF0, mode)
    }

    /// Put a nibble on D4..D7 and latch it with an EN pulse
    fn write_nibble(&mut self, nibble: u8, mode: u8) -> Result<(), DisplayError> {
        let bits = nibble | mode | self.backlight_bit();
        self.i2c
            .write(self.address, &[bits | EN, bits])
            .map_err(|_| DisplayError::Bus)
    }

    fn expander_write(&mut self, bits: u8) -> Result<(), DisplayError> {
        let value = bits | self.backlight_bit();
        self.i2c
            .write(self.address, &[value])
            .map_err(|_| DisplayError::Bus)
    }

    fn backlight_bit(&self) -> u8 {
        if self.backlight {
            BACKLIGHT
        } else {
            0
        }
    }
}

impl<I: I2cBus, D: DelayNs> DisplayDriver for Lcd1602<I, D> {
    fn clear(&mut self) -> Result<(), DisplayError> {
        self.send(CMD_CLEAR, 0)?;
        self.delay.delay_us(CLEAR_US);
        Ok(())
    }

    fn write_line(&mut self, row: u8, text: &str) -> Result<(), DisplayError> {
        self.set_cursor(0, row)?;

        let mut chars = text.bytes();
        for _ in 0..DISPLAY_COLS {
            // The character ROM only matches ASCII
            let byte = match chars.next() {
                Some(b) if b.is_ascii() && !b.is_ascii_control() => b,
                Some(_) => b'?',
                None => b' ',
            };
            self.send(byte, RS)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct MockBus {
        writes: Vec<(u8, Vec<u8>)>,
        fail: bool,
    }

    impl I2cBus for MockBus {
        type Error = ();

        fn write(&mut self, address: u8, data: &[u8]) -> Result<(), ()> {
            if self.fail {
                return Err(());
            }
            self.writes.push((address, data.to_vec()));
            Ok(())
        }

        fn read(&mut self, _address: u8, _buf: &mut [u8]) -> Result<(), ()> {
            Ok(())
        }
    }

    struct NoDelay;

    impl DelayNs for NoDelay {
        fn delay_ns(&mut self, _ns: u32) {}
    }

    /// Reassemble the bytes latched while RS matched `data`
    fn latched(bus: &MockBus, data: bool) -> Vec<u8> {
        let nibbles: Vec<u8> = bus
            .writes
            .iter()
            .filter(|(_, bytes)| bytes.len() == 2 && bytes[0] & EN != 0)
            .filter(|(_, bytes)| (bytes[1] & RS != 0) == data)
            .map(|(_, bytes)| bytes[1] & 0xF0)
            .collect();
        nibbles
            .chunks(2)
            .filter(|pair| pair.len() == 2)
            .map(|pair| pair[0] | (pair[1] >> 4))
            .collect()
    }

    fn lcd() -> Lcd1602<MockBus, NoDelay> {
        Lcd1602::new(MockBus::default(), NoDelay, LCD_DEFAULT_ADDRESS)
    }

    #[test]
    fn test_writes_go_to_address_with_backlight() {
        let mut lcd = lcd();
        lcd.init().unwrap();
        assert!(lcd
            .i2c
            .writes
            .iter()
            .all(|(addr, bytes)| *addr == 0x27 && bytes.iter().all(|b| b & BACKLIGHT != 0)));
    }

    #[test]
    fn test_backlight_off_clears_bit() {
        let mut lcd = lcd();
        lcd.set_backlight(false).unwrap();
        assert_eq!(lcd.i2c.writes.last(), Some(&(0x27, vec![0x00])));

        lcd.write_line(0, "x").unwrap();
        assert!(lcd.i2c.writes.iter().all(|(_, bytes)| bytes.iter().all(|b| b & BACKLIGHT == 0)));

        lcd.set_backlight(true).unwrap();
        assert_eq!(lcd.i2c.writes.last(), Some(&(0x27, vec![BACKLIGHT])));
    }

    #[test]
    fn test_line_is_padded() {
        let mut lcd = lcd();
        lcd.write_line(1, "System OK").unwrap();

        assert_eq!(latched(&lcd.i2c, true), b"System OK       ".to_vec());
        assert_eq!(latched(&lcd.i2c, false), vec![CMD_SET_DDRAM | 0x40]);
    }

    #[test]
    fn test_line_is_truncated() {
        let mut lcd = lcd();
        lcd.write_line(0, "Temperature is 24.5 C").unwrap();
        assert_eq!(latched(&lcd.i2c, true), b"Temperature is 2".to_vec());
    }

    #[test]
    fn test_non_ascii_replaced() {
        let mut lcd = lcd();
        lcd.write_line(0, "24°C").unwrap();
        let text = latched(&lcd.i2c, true);
        assert_eq!(&text[..6], b"24??C ");
    }

    #[test]
    fn test_invalid_row() {
        let mut lcd = lcd();
        assert_eq!(lcd.write_line(2, "x"), Err(DisplayError::InvalidRow));
        assert!(lcd.i2c.writes.is_empty());
    }

    #[test]
    fn test_bus_error() {
        let mut lcd = lcd();
        lcd.i2c.fail = true;
        assert_eq!(lcd.write_line(0, "x"), Err(DisplayError::Bus));
    }
}
