//! GPIO adapters

use cradle_hal::{InputPin, OutputPin};
use embassy_rp::gpio::{Flex, Input, Output, Pull};

/// Push-pull output
pub struct RpOutput<'d>(Output<'d>);

impl<'d> RpOutput<'d> {
    pub fn new(pin: Output<'d>) -> Self {
        Self(pin)
    }
}

impl OutputPin for RpOutput<'_> {
    fn set_high(&mut self) {
        self.0.set_high();
    }

    fn set_low(&mut self) {
        self.0.set_low();
    }

    fn is_set_high(&self) -> bool {
        self.0.is_set_high()
    }
}

/// Digital input
pub struct RpInput<'d>(Input<'d>);

impl<'d> RpInput<'d> {
    pub fn new(pin: Input<'d>) -> Self {
        Self(pin)
    }
}

impl InputPin for RpInput<'_> {
    fn is_high(&self) -> bool {
        self.0.is_high()
    }
}

/// Open-drain line emulated on a flex pin
///
/// Driving low enables the output with a low level; driving high turns the
/// output off and lets the pull-up raise the line, so the far end can pull
/// it low again.
pub struct RpOpenDrain<'d> {
    pin: Flex<'d>,
    released: bool,
}

impl<'d> RpOpenDrain<'d> {
    /// Take the pin and release the line
    pub fn new(mut pin: Flex<'d>) -> Self {
        pin.set_pull(Pull::Up);
        pin.set_low();
        pin.set_as_input();
        Self {
            pin,
            released: true,
        }
    }
}

impl OutputPin for RpOpenDrain<'_> {
    fn set_high(&mut self) {
        self.pin.set_as_input();
        self.released = true;
    }

    fn set_low(&mut self) {
        self.pin.set_low();
        self.pin.set_as_output();
        self.released = false;
    }

    fn is_set_high(&self) -> bool {
        self.released
    }
}

impl InputPin for RpOpenDrain<'_> {
    fn is_high(&self) -> bool {
        self.pin.is_high()
    }
}
