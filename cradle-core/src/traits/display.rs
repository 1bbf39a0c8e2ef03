//! Character display trait for the 16x2 status LCD

/// Number of character columns
pub const DISPLAY_COLS: usize = 16;

/// Number of character rows
pub const DISPLAY_ROWS: usize = 2;

/// Errors that can occur with display communication
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DisplayError {
    /// Bus transfer failed (no ACK from the display backpack)
    Bus,
    /// Row number outside the display
    InvalidRow,
}

/// Trait for text-mode displays
pub trait DisplayDriver {
    /// Clear the entire screen
    fn clear(&mut self) -> Result<(), DisplayError>;

    /// Replace the content of one row
    ///
    /// Text shorter than the display is padded with spaces, longer text is
    /// truncated, so a row never shows leftovers from a previous write.
    fn write_line(&mut self, row: u8, text: &str) -> Result<(), DisplayError>;
}
