//! GPIO pin abstractions
//!
//! Digital input and output traits implemented by chip-specific HALs.
//! Polarity (active-low relays, active-low sound detectors) is handled by
//! the drivers, never here: these traits speak electrical levels only.

/// Digital output pin
pub trait OutputPin {
    /// Drive the pin high (logic 1)
    fn set_high(&mut self);

    /// Drive the pin low (logic 0)
    fn set_low(&mut self);

    /// Drive the pin to a specific level
    fn set_level(&mut self, high: bool) {
        if high {
            self.set_high();
        } else {
            self.set_low();
        }
    }

    /// Check if the pin is currently driven high
    fn is_set_high(&self) -> bool;

    /// Check if the pin is currently driven low
    fn is_set_low(&self) -> bool {
        !self.is_set_high()
    }
}

/// Digital input pin
pub trait InputPin {
    /// Check if the pin reads high (logic 1)
    fn is_high(&self) -> bool;

    /// Check if the pin reads low (logic 0)
    fn is_low(&self) -> bool {
        !self.is_high()
    }
}

/// Bidirectional pin for single-wire protocols
///
/// Used as an open-drain line: `set_low` pulls the line down, `set_high`
/// releases it to the pull-up so the device on the other end can drive it.
/// Reading the pin while released observes the device.
pub trait IoPin: OutputPin + InputPin {}

// Blanket implementation for types that implement both traits
impl<T: OutputPin + InputPin> IoPin for T {}
