//! Pin assignment for the cradle board
//!
//! ```text
//!  GPIO0  UART0 TX  -> modem RX
//!  GPIO1  UART0 RX  <- modem TX
//!  GPIO2  DHT11 data (open drain, pulled up)
//!  GPIO3  sound detector DO (active low)
//!  GPIO4  I2C0 SDA  -> LCD backpack
//!  GPIO5  I2C0 SCL  -> LCD backpack
//!  GPIO6  PWM3 A    -> servo signal
//!  GPIO7  fan relay IN (active low)
//!  GPIO8  buzzer (active high)
//!  GPIO26 ADC0      <- soil probe AO
//! ```

use embassy_rp::peripherals::{
    ADC, I2C0, PIN_0, PIN_1, PIN_2, PIN_26, PIN_3, PIN_4, PIN_5, PIN_6, PIN_7, PIN_8, PWM_SLICE3,
    UART0,
};
use embassy_rp::{Peri, Peripherals};

/// The peripherals this board uses, by function
pub struct Board {
    pub modem_uart: Peri<'static, UART0>,
    pub modem_tx: Peri<'static, PIN_0>,
    pub modem_rx: Peri<'static, PIN_1>,
    pub dht: Peri<'static, PIN_2>,
    pub sound: Peri<'static, PIN_3>,
    pub lcd_i2c: Peri<'static, I2C0>,
    pub lcd_sda: Peri<'static, PIN_4>,
    pub lcd_scl: Peri<'static, PIN_5>,
    pub servo_slice: Peri<'static, PWM_SLICE3>,
    pub servo: Peri<'static, PIN_6>,
    pub fan_relay: Peri<'static, PIN_7>,
    pub buzzer: Peri<'static, PIN_8>,
    pub adc: Peri<'static, ADC>,
    pub soil: Peri<'static, PIN_26>,
}

impl Board {
    pub fn take(p: Peripherals) -> Self {
        Self {
            modem_uart: p.UART0,
            modem_tx: p.PIN_0,
            modem_rx: p.PIN_1,
            dht: p.PIN_2,
            sound: p.PIN_3,
            lcd_i2c: p.I2C0,
            lcd_sda: p.PIN_4,
            lcd_scl: p.PIN_5,
            servo_slice: p.PWM_SLICE3,
            servo: p.PIN_6,
            fan_relay: p.PIN_7,
            buzzer: p.PIN_8,
            adc: p.ADC,
            soil: p.PIN_26,
        }
    }
}
