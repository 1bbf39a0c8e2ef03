//! Sensor drivers

pub mod dht11;
pub mod soil;
pub mod sound;

pub use dht11::{decode_frame, Dht11, Dht11Reading};
pub use soil::{normalize_to_10_bits, SoilProbe, WETNESS_FULL_SCALE};
pub use sound::SoundDetector;
