//! Log lines for scheduler events

use cradle_core::scheduler::TickReport;
use cradle_core::state::Event;
use defmt::*;

/// Log everything that happened during one tick
pub fn log_tick(report: &TickReport) {
    if let Some(reading) = report.reading {
        debug!(
            "Sample: temp_x10={} wetness={} crying={}",
            reading.temperature_x10, reading.wetness, reading.crying
        );
    }

    for event in report.events.iter() {
        log_event(event);
    }
}

fn log_event(event: &Event) {
    match *event {
        Event::SensorFault(error) => warn!("Temperature read failed: {}", error),
        Event::FanSwitched { on } => info!("Fan {}", if on { "ON" } else { "OFF" }),
        Event::CryDetected => info!("Baby crying! Starting cradle and alert."),
        Event::DiaperWet => info!("Diaper wet! Starting alert."),
        Event::AlertSent(kind) => info!("SMS sent: {}", kind),
        Event::AlertFailed { kind, error } => warn!("SMS {} not sent: {}", kind, error),
        Event::CradleStopped => info!("Cradle stopped."),
        Event::BuzzerFinished => debug!("Buzzer pattern finished"),
        Event::DiaperAlertCleared => info!("Diaper alert window elapsed"),
        Event::DisplayFault(error) => warn!("LCD write failed: {}", error),
    }
}
