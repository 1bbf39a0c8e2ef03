//! Digital sound detector module
//!
//! The comparator output idles high and drops low while the sound level
//! is above the module's potentiometer setting.

use cradle_core::traits::CryDetector;
use cradle_hal::InputPin;

pub struct SoundDetector<P> {
    pin: P,
}

impl<P: InputPin> SoundDetector<P> {
    pub fn new(pin: P) -> Self {
        Self { pin }
    }
}

impl<P: InputPin> CryDetector for SoundDetector<P> {
    fn read_level(&mut self) -> bool {
        self.pin.is_high()
    }
}
