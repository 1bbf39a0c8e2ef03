//! DHT11 temperature and humidity sensor
//!
//! Single-wire protocol on an open-drain pin with a pull-up:
//!
//! ```text
//!  host      sensor response      bit 0          bit 1
//!  ▔▔╲_18ms_╱▔▔╲__80us__╱▔80us▔╲_50us_╱▔26us▔╲_50us_╱▔▔70us▔▔╲ ...
//! ```
//!
//! Bits are told apart by comparing each high pulse with the preceding
//! 50 us low pulse, measured with the same polling loop, so the loop's own
//! overhead cancels out.

use cradle_core::traits::{SensorError, TemperatureSensor};
use cradle_hal::IoPin;
use embedded_hal::delay::DelayNs;

/// Host start pulse length
const START_LOW_MS: u32 = 18;

/// Longest any single level may last before the read is abandoned
const LEVEL_TIMEOUT_US: u32 = 100;

/// Readings beyond this magnitude are treated as line noise
const MAX_PLAUSIBLE_X10: i16 = 800;

/// A decoded reading
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Dht11Reading {
    /// Temperature in 0.1°C units
    pub temperature_x10: i16,
    /// Relative humidity in 0.1% units
    pub humidity_x10: u16,
}

/// Decode and validate a raw 5-byte frame
///
/// Layout: humidity integer, humidity decimal, temperature integer,
/// temperature decimal (bit 7 = negative), checksum of the first four.
pub fn decode_frame(frame: &[u8; 5]) -> Result<Dht11Reading, SensorError> {
    let sum = frame[..4]
        .iter()
        .fold(0u8, |acc, byte| acc.wrapping_add(*byte));
    if sum != frame[4] {
        return Err(SensorError::ChecksumMismatch);
    }

    let magnitude = i16::from(frame[2]) * 10 + i16::from(frame[3] & 0x0F);
    let temperature_x10 = if frame[3] & 0x80 != 0 {
        -magnitude
    } else {
        magnitude
    };

    if temperature_x10.abs() > MAX_PLAUSIBLE_X10 {
        return Err(SensorError::OutOfRange);
    }

    Ok(Dht11Reading {
        temperature_x10,
        humidity_x10: u16::from(frame[0]) * 10 + u16::from(frame[1] % 10),
    })
}

/// DHT11 driver
pub struct Dht11<P, D> {
    pin: P,
    delay: D,
}

impl<P: IoPin, D: DelayNs> Dht11<P, D> {
    /// Create a driver, releasing the data line
    pub fn new(mut pin: P, delay: D) -> Self {
        pin.set_high();
        Self { pin, delay }
    }

    /// Perform one full transaction
    ///
    /// Takes roughly 23 ms. The sensor needs about a second between
    /// transactions to produce a fresh reading.
    pub fn read(&mut self) -> Result<Dht11Reading, SensorError> {
        let frame = self.read_frame()?;
        decode_frame(&frame)
    }

    fn read_frame(&mut self) -> Result<[u8; 5], SensorError> {
        self.pin.set_low();
        self.delay.delay_ms(START_LOW_MS);
        self.pin.set_high();

        // Sensor pulls the line low to acknowledge
        self.wait_while(true)
            .map_err(|_| SensorError::NoResponse)?;
        self.wait_while(false)?;
        self.wait_while(true)?;

        let mut frame = [0u8; 5];
        for byte in frame.iter_mut() {
            for _ in 0..8 {
                let low = self.wait_while(false)?;
                let high = self.wait_while(true)?;
                *byte = (*byte << 1) | u8::from(high > low);
            }
        }
        Ok(frame)
    }

    /// Poll until the line leaves `high`, returning the loop count
    fn wait_while(&mut self, high: bool) -> Result<u32, SensorError> {
        let mut count = 0;
        while self.pin.is_high() == high {
            if count >= LEVEL_TIMEOUT_US {
                return Err(SensorError::Timeout);
            }
            self.delay.delay_us(1);
            count += 1;
        }
        Ok(count)
    }

    /// Release the pin and delay
    pub fn release(self) -> (P, D) {
        (self.pin, self.delay)
    }
}

impl<P: IoPin, D: DelayNs> TemperatureSensor for Dht11<P, D> {
    fn read_celsius_x10(&mut self) -> Result<i16, SensorError> {
        self.read().map(|reading| reading.temperature_x10)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cradle_hal::{InputPin, OutputPin};
    use proptest::prelude::*;
    use std::cell::Cell;
    use std::rc::Rc;

    /// Microsecond clock shared by the pin and the delay
    type SimTime = Rc<Cell<u64>>;

    struct SimDelay(SimTime);

    impl DelayNs for SimDelay {
        fn delay_ns(&mut self, ns: u32) {
            let us = u64::from(ns).div_ceil(1000);
            self.0.set(self.0.get() + us);
        }
    }

    /// Data line driven by a scripted sensor once the host releases it
    struct SimLine {
        time: SimTime,
        driven_low: bool,
        released_at: Option<u64>,
        waveform: Vec<(bool, u64)>,
    }

    impl OutputPin for SimLine {
        fn set_high(&mut self) {
            if self.driven_low {
                self.released_at = Some(self.time.get());
            }
            self.driven_low = false;
        }

        fn set_low(&mut self) {
            self.driven_low = true;
            self.released_at = None;
        }

        fn is_set_high(&self) -> bool {
            !self.driven_low
        }
    }

    impl InputPin for SimLine {
        fn is_high(&self) -> bool {
            if self.driven_low {
                return false;
            }
            let Some(released) = self.released_at else {
                return true;
            };
            let mut t = self.time.get() - released;
            for &(level, duration) in &self.waveform {
                if t < duration {
                    return level;
                }
                t -= duration;
            }
            true
        }
    }

    fn sensor_waveform(frame: [u8; 5]) -> Vec<(bool, u64)> {
        let mut wave = vec![(true, 30), (false, 80), (true, 80)];
        for byte in frame {
            for bit in (0..8).rev() {
                let one = byte & (1 << bit) != 0;
                wave.push((false, 50));
                wave.push((true, if one { 70 } else { 26 }));
            }
        }
        wave.push((false, 50));
        wave
    }

    fn dht(waveform: Vec<(bool, u64)>) -> Dht11<SimLine, SimDelay> {
        let time = SimTime::default();
        let line = SimLine {
            time: time.clone(),
            driven_low: false,
            released_at: None,
            waveform,
        };
        Dht11::new(line, SimDelay(time))
    }

    #[test]
    fn test_decode_positive() {
        let frame = [55, 0, 24, 5, 84];
        assert_eq!(
            decode_frame(&frame),
            Ok(Dht11Reading {
                temperature_x10: 245,
                humidity_x10: 550,
            })
        );
    }

    #[test]
    fn test_decode_negative() {
        let frame = [40, 0, 2, 0x83, 40u8.wrapping_add(2).wrapping_add(0x83)];
        assert_eq!(decode_frame(&frame).map(|r| r.temperature_x10), Ok(-23));
    }

    #[test]
    fn test_decode_bad_checksum() {
        assert_eq!(
            decode_frame(&[55, 0, 24, 5, 85]),
            Err(SensorError::ChecksumMismatch)
        );
    }

    #[test]
    fn test_decode_implausible() {
        let frame = [0, 0, 200, 0, 200];
        assert_eq!(decode_frame(&frame), Err(SensorError::OutOfRange));
    }

    #[test]
    fn test_read_full_transaction() {
        let mut sensor = dht(sensor_waveform([60, 0, 31, 0, 91]));
        assert_eq!(sensor.read_celsius_x10(), Ok(310));
        // Line is released afterwards
        assert!(sensor.pin.is_set_high());
    }

    #[test]
    fn test_silent_sensor() {
        let mut sensor = dht(vec![(true, 10_000)]);
        assert_eq!(sensor.read_celsius_x10(), Err(SensorError::NoResponse));
    }

    #[test]
    fn test_stuck_low_mid_frame() {
        let mut wave = sensor_waveform([60, 0, 31, 0, 91]);
        wave.truncate(20);
        wave.push((false, 10_000));
        let mut sensor = dht(wave);
        assert_eq!(sensor.read_celsius_x10(), Err(SensorError::Timeout));
    }

    proptest! {
        #[test]
        fn prop_waveform_decodes(humidity in 20u8..90, temperature in 0u8..50, tenth in 0u8..10) {
            let checksum = humidity.wrapping_add(temperature).wrapping_add(tenth);
            let mut sensor = dht(sensor_waveform([humidity, 0, temperature, tenth, checksum]));
            let reading = sensor.read().unwrap();
            prop_assert_eq!(reading.temperature_x10, i16::from(temperature) * 10 + i16::from(tenth));
            prop_assert_eq!(reading.humidity_x10, u16::from(humidity) * 10);
        }
    }
}
