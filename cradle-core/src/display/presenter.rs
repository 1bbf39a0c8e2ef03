//! Status screen presenter
//!
//! Pure rendering of the two LCD rows from the scheduler's current state:
//!
//! ```text
//! ┌────────────────┐
//! │Temp:24.5C F:ON │
//! │System OK       │
//! └────────────────┘
//! ```

use core::fmt::Write;

use heapless::String;

use crate::traits::DISPLAY_COLS;

/// One rendered display row
pub type DisplayLine = String<DISPLAY_COLS>;

/// Column where the fan indicator starts on the first row
const FAN_COL: usize = 11;

/// Second-row status message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum StatusLine {
    CradleSwinging,
    DiaperWet,
    SystemOk,
}

impl StatusLine {
    /// Pick the message by priority: swinging beats wet beats OK
    pub fn select(cradle_swinging: bool, diaper_wet: bool) -> Self {
        if cradle_swinging {
            StatusLine::CradleSwinging
        } else if diaper_wet {
            StatusLine::DiaperWet
        } else {
            StatusLine::SystemOk
        }
    }

    pub const fn text(&self) -> &'static str {
        match self {
            StatusLine::CradleSwinging => "Cradle Swinging",
            StatusLine::DiaperWet => "Diaper is Wet!",
            StatusLine::SystemOk => "System OK",
        }
    }
}

/// Inputs to the status screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct StatusView {
    /// Latest valid temperature (°C × 10)
    pub temperature_x10: i16,
    pub fan_on: bool,
    pub cradle_swinging: bool,
    pub diaper_wet: bool,
}

/// Render both display rows
pub fn render(view: &StatusView) -> [DisplayLine; 2] {
    [
        temperature_line(view.temperature_x10, view.fan_on),
        status_line(StatusLine::select(view.cradle_swinging, view.diaper_wet)),
    ]
}

/// First row: temperature with one decimal, then the fan indicator
fn temperature_line(temperature_x10: i16, fan_on: bool) -> DisplayLine {
    let mut line = DisplayLine::new();

    let sign = if temperature_x10 < 0 { "-" } else { "" };
    let magnitude = temperature_x10.unsigned_abs();
    let _ = write!(line, "Temp:{}{}.{}C ", sign, magnitude / 10, magnitude % 10);

    // Wide readings lose their tail to the fan indicator
    line.truncate(FAN_COL);
    pad_to(&mut line, FAN_COL);

    let _ = line.push_str(if fan_on { "F:ON " } else { "F:OFF" });
    line
}

fn status_line(status: StatusLine) -> DisplayLine {
    let mut line = DisplayLine::new();
    let _ = line.push_str(status.text());
    pad_to(&mut line, DISPLAY_COLS);
    line
}

fn pad_to(line: &mut DisplayLine, width: usize) {
    while line.len() < width {
        if line.push(' ').is_err() {
            break;
        }
    }
}
