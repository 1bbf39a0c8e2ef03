//! Cradle - Smart Infant Cradle Monitor Firmware
//!
//! Main firmware binary for RP2040-based cradle boards. Watches room
//! temperature, diaper wetness and crying; runs a fan, rocks the cradle,
//! beeps, and texts the parents.
//!
//! Everything runs in the main task: the scheduler is polled on a short
//! ticker and every behaviour advances by elapsed time, so there are no
//! other tasks, channels or shared state.

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use embassy_rp::adc::{self, Adc, Channel};
use embassy_rp::bind_interrupts;
use embassy_rp::gpio::{Flex, Input, Level, Output, Pull};
use embassy_rp::i2c::I2c;
use embassy_rp::peripherals::UART0;
use embassy_rp::pwm::Pwm;
use embassy_rp::uart::{BufferedInterruptHandler, Uart};
use embassy_time::{Delay, Duration, Ticker, Timer};
use static_cell::StaticCell;
use {defmt_rtt as _, panic_probe as _};

use cradle_core::scheduler::Scheduler;
use cradle_core::traits::{ActuatorBank, DisplayDriver, SensorBank};
use cradle_drivers::actuator::{pulse_for_angle, GpioSwitch, HobbyServo};
use cradle_drivers::actuator::{SERVO_MAX_PULSE_US, SERVO_MIN_PULSE_US};
use cradle_drivers::display::{Lcd1602, LCD_DEFAULT_ADDRESS};
use cradle_drivers::modem::Sim800;
use cradle_drivers::sensor::{Dht11, SoilProbe, SoundDetector};
use cradle_hal::{I2cConfig, UartConfig};
use cradle_hal_rp2040::{
    i2c_config, servo_pwm_config, uart_config, RpAdcChannel, RpI2c, RpInput, RpOpenDrain,
    RpOutput, RpServoPwm, RpUart, ServoChannel,
};

use crate::board::Board;
use crate::clock::EmbassyClock;

mod board;
mod clock;
mod config;
mod report;

/// Scheduler poll interval; well under the 30 ms servo step
const TICK_INTERVAL_MS: u64 = 5;

/// Shown while the sensors settle
const SPLASH: &str = " Baby Monitor ";

bind_interrupts!(struct Irqs {
    UART0_IRQ => BufferedInterruptHandler<UART0>;
});

// Static cells for UART buffers (must live forever)
static TX_BUF: StaticCell<[u8; 256]> = StaticCell::new();
static RX_BUF: StaticCell<[u8; 256]> = StaticCell::new();

/// Main entry point
#[embassy_executor::main]
async fn main(_spawner: Spawner) {
    info!("Cradle monitor starting...");

    let board = Board::take(embassy_rp::init(Default::default()));
    let config = config::load();

    // Loads first, so nothing runs while the rest comes up
    let fan = GpioSwitch::active_low(RpOutput::new(Output::new(board.fan_relay, Level::High)));
    let buzzer = GpioSwitch::active_high(RpOutput::new(Output::new(board.buzzer, Level::Low)));

    let rest_deg = config.swing.rest_deg;
    let rest_pulse = pulse_for_angle(rest_deg, SERVO_MIN_PULSE_US, SERVO_MAX_PULSE_US);
    let pwm = Pwm::new_output_a(
        board.servo_slice,
        board.servo,
        servo_pwm_config(ServoChannel::A, rest_pulse),
    );
    let servo = HobbyServo::new(RpServoPwm::new(pwm, ServoChannel::A, rest_pulse), rest_deg);
    info!("Fan off, buzzer off, servo parked at {} deg", rest_deg);

    // Display
    let i2c = I2c::new_blocking(
        board.lcd_i2c,
        board.lcd_scl,
        board.lcd_sda,
        i2c_config(&I2cConfig::STANDARD),
    );
    let mut lcd = Lcd1602::new(RpI2c::new(i2c), Delay, LCD_DEFAULT_ADDRESS);
    if let Err(e) = lcd.init() {
        warn!("LCD init failed: {}", e);
    }
    if let Err(e) = lcd.write_line(0, SPLASH) {
        warn!("LCD splash failed: {}", e);
    }

    // Sensors
    let dht = Dht11::new(RpOpenDrain::new(Flex::new(board.dht)), Delay);
    let adc = Adc::new_blocking(board.adc, adc::Config::default());
    let soil = SoilProbe::new(RpAdcChannel::new(adc, Channel::new_pin(board.soil, Pull::None)));
    let sound = SoundDetector::new(RpInput::new(Input::new(board.sound, Pull::Up)));
    info!("Sensors initialized");

    Timer::after_millis(u64::from(config.boot.stabilize_ms)).await;
    if let Err(e) = lcd.clear() {
        warn!("LCD clear failed: {}", e);
    }

    // GSM modem
    let tx_buf = TX_BUF.init([0u8; 256]);
    let rx_buf = RX_BUF.init([0u8; 256]);
    let uart = Uart::new_blocking(
        board.modem_uart,
        board.modem_tx,
        board.modem_rx,
        uart_config(&UartConfig::MODEM),
    );
    let uart = uart.into_buffered(Irqs, tx_buf, rx_buf);
    let mut modem = Sim800::new(RpUart::new(uart), Delay);

    info!("Initializing GSM modem...");
    Timer::after_millis(u64::from(config.alert.modem_boot_ms)).await;
    match modem.probe(config.alert.probe_attempts) {
        Ok(attempt) => info!("GSM modem ready (attempt {})", attempt),
        // Sends are still attempted; the modem may come up later
        Err(e) => warn!("GSM modem initialization failed: {}", e),
    }

    let sensors = SensorBank::new(dht, soil, sound);
    let actuators = ActuatorBank::new(fan, servo, buzzer, lcd);
    let mut scheduler = Scheduler::new(config, sensors, actuators, modem);
    scheduler.park_outputs();

    let clock = EmbassyClock::new();
    let mut ticker = Ticker::every(Duration::from_millis(TICK_INTERVAL_MS));
    info!("System ready.");

    loop {
        let report = scheduler.poll(&clock);
        report::log_tick(&report);
        ticker.next().await;
    }
}
