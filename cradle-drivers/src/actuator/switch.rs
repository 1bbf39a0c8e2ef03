//! GPIO on/off output
//!
//! Drives the fan relay module and the buzzer. Relay boards commonly
//! energise on a LOW input, so the active level is configurable.

use cradle_core::traits::SwitchedOutput;
use cradle_hal::OutputPin;

/// On/off load behind a GPIO pin
pub struct GpioSwitch<P> {
    pin: P,
    /// If true, load ON = pin LOW
    inverted: bool,
    on: bool,
}

impl<P: OutputPin> GpioSwitch<P> {
    /// Create a switch and force the load off
    pub fn new(pin: P, inverted: bool) -> Self {
        let mut switch = Self {
            pin,
            inverted,
            on: false,
        };
        switch.set_on(false);
        switch
    }

    /// Load on while the pin is high (buzzer)
    pub fn active_high(pin: P) -> Self {
        Self::new(pin, false)
    }

    /// Load on while the pin is low (relay module)
    pub fn active_low(pin: P) -> Self {
        Self::new(pin, true)
    }
}

impl<P: OutputPin> SwitchedOutput for GpioSwitch<P> {
    fn set_on(&mut self, on: bool) {
        self.on = on;
        self.pin.set_level(on != self.inverted);
    }

    fn is_on(&self) -> bool {
        self.on
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct MockPin {
        high: bool,
    }

    impl OutputPin for MockPin {
        fn set_high(&mut self) {
            self.high = true;
        }

        fn set_low(&mut self) {
            self.high = false;
        }

        fn is_set_high(&self) -> bool {
            self.high
        }
    }

    #[test]
    fn test_buzzer_active_high() {
        let mut buzzer = GpioSwitch::active_high(MockPin { high: true });
        assert!(!buzzer.is_on());
        assert!(buzzer.pin.is_set_low());

        buzzer.set_on(true);
        assert!(buzzer.pin.is_set_high());
    }

    #[test]
    fn test_relay_active_low() {
        let mut fan = GpioSwitch::active_low(MockPin { high: false });
        // Starts off, which holds the relay input high
        assert!(!fan.is_on());
        assert!(fan.pin.is_set_high());

        fan.set_on(true);
        assert!(fan.is_on());
        assert!(fan.pin.is_set_low());

        fan.set_on(false);
        assert!(fan.pin.is_set_high());
    }
}
