//! Tick dispatch
//!
//! Owns every piece of runtime state and every port. One call to
//! [`Scheduler::tick`] is one pass of the main loop: sample the sensors if
//! the sampling window has elapsed, evaluate the threshold rules, then
//! advance the swing, buzzer and diaper machines. The three machines drive
//! disjoint outputs, so their order within a tick does not matter.

use heapless::Vec;

use super::buzzer::{AlertTone, BuzzerAction, BuzzerPattern, BuzzerState};
use super::diaper::{DiaperAlert, DiaperAlertState};
use super::rules;
use super::sampling::{SamplingTimer, SensorReading};
use super::swing::{CradleSwing, SwingAction, SwingState};
use crate::config::CradleConfig;
use crate::display::{render, StatusView};
use crate::state::Event;
use crate::time::{ClockSource, Instant};
use crate::traits::{ActuatorPort, AlertKind, AlertTransport, SensorPort};

/// Maximum events reported from a single tick
pub const MAX_TICK_EVENTS: usize = 12;

/// Display row holding the status message
const STATUS_ROW: u8 = 1;

/// What happened during one tick
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TickReport {
    /// Clock reading the tick ran against
    pub now: Instant,
    /// The sampling window elapsed and the sensors were read
    pub sampled: bool,
    /// Readings, if sampled and the temperature was valid
    pub reading: Option<SensorReading>,
    /// Events in the order they occurred
    pub events: Vec<Event, MAX_TICK_EVENTS>,
}

impl TickReport {
    fn new(now: Instant) -> Self {
        Self {
            now,
            ..Default::default()
        }
    }

    fn push(&mut self, event: Event) {
        // Capacity covers the worst case of one tick
        let _ = self.events.push(event);
    }
}

/// Cooperative cradle scheduler
///
/// Generic over the sensor, actuator and alert ports so the same logic runs
/// against the real drivers and against test doubles.
pub struct Scheduler<S, A, T> {
    config: CradleConfig,
    sensors: S,
    actuators: A,
    transport: T,
    sampling: SamplingTimer,
    swing: CradleSwing,
    buzzer: BuzzerPattern,
    diaper: DiaperAlert,
    /// Fan state from the last valid sample, for change reporting
    fan_on: Option<bool>,
}

impl<S: SensorPort, A: ActuatorPort, T: AlertTransport> Scheduler<S, A, T> {
    /// Create a scheduler with every behaviour idle
    pub fn new(config: CradleConfig, sensors: S, actuators: A, transport: T) -> Self {
        Self {
            sampling: SamplingTimer::new(config.sampling.period_ms),
            swing: CradleSwing::new(config.swing),
            buzzer: BuzzerPattern::new(config.buzzer),
            diaper: DiaperAlert::new(config.diaper.window_ms),
            fan_on: None,
            config,
            sensors,
            actuators,
            transport,
        }
    }

    /// Put the outputs in their power-on state
    ///
    /// Fan off, buzzer off, servo at the rest angle.
    pub fn park_outputs(&mut self) {
        self.actuators.set_fan(false);
        self.actuators.set_buzzer(false);
        self.actuators.set_servo_angle(self.config.swing.rest_deg);
    }

    /// Run one tick against the clock's current reading
    pub fn poll<C: ClockSource>(&mut self, clock: &C) -> TickReport {
        self.tick(clock.now())
    }

    /// Run one tick at `now`
    pub fn tick(&mut self, now: Instant) -> TickReport {
        let mut report = TickReport::new(now);

        if self.sampling.poll(now) {
            report.sampled = true;
            self.sample(now, &mut report);
        }

        self.advance_swing(now, &mut report);
        self.advance_buzzer(now, &mut report);
        self.advance_diaper(now, &mut report);

        report
    }

    /// Read the sensors and evaluate the rules
    fn sample(&mut self, now: Instant, report: &mut TickReport) {
        let temperature = self.sensors.read_temperature();
        let wetness = self.sensors.read_wetness();
        let crying = !self.sensors.read_cry_level();

        // An invalid temperature voids the whole sample
        let temperature_x10 = match temperature {
            Ok(value) => value,
            Err(error) => {
                report.push(Event::SensorFault(error));
                return;
            }
        };

        let reading = SensorReading {
            temperature_x10,
            wetness,
            crying,
        };
        report.reading = Some(reading);

        let fan_on = self.apply_fan_rule(reading.temperature_x10, report);
        self.apply_cry_rule(now, reading.crying, report);
        self.apply_wetness_rule(now, reading.wetness, report);
        self.refresh_display(reading.temperature_x10, fan_on, report);
    }

    fn apply_fan_rule(&mut self, temperature_x10: i16, report: &mut TickReport) -> bool {
        let fan_on = rules::fan_should_run(temperature_x10, self.config.thresholds.fan_above_x10);
        self.actuators.set_fan(fan_on);

        if self.fan_on != Some(fan_on) {
            report.push(Event::FanSwitched { on: fan_on });
            self.fan_on = Some(fan_on);
        }
        fan_on
    }

    fn apply_cry_rule(&mut self, now: Instant, crying: bool, report: &mut TickReport) {
        if !rules::cry_triggers(crying, self.swing.is_idle()) {
            return;
        }

        self.swing.arm(now, self.config.swing.cycles);
        report.push(Event::CryDetected);
        self.buzzer
            .start(AlertTone::CryAlert, self.config.buzzer.beeps, now);
        self.send_alert(AlertKind::BabyCrying, report);
    }

    fn apply_wetness_rule(&mut self, now: Instant, wetness: u16, report: &mut TickReport) {
        let threshold = self.config.thresholds.wet_below;
        if !rules::wetness_triggers(wetness, threshold, self.diaper.is_active()) {
            return;
        }

        self.diaper.arm(now);
        report.push(Event::DiaperWet);
        self.buzzer
            .start(AlertTone::WetAlert, self.config.buzzer.beeps, now);
        self.send_alert(AlertKind::DiaperWet, report);
    }

    /// Hand an alert to the transport; blocks for the duration of the send
    ///
    /// Failures are reported once and never retried.
    fn send_alert(&mut self, kind: AlertKind, report: &mut TickReport) {
        let destination = self.config.alert.destination.as_str();
        match self.transport.send(destination, kind.message()) {
            Ok(()) => report.push(Event::AlertSent(kind)),
            Err(error) => report.push(Event::AlertFailed { kind, error }),
        }
    }

    fn refresh_display(&mut self, temperature_x10: i16, fan_on: bool, report: &mut TickReport) {
        let view = StatusView {
            temperature_x10,
            fan_on,
            cradle_swinging: !self.swing.is_idle(),
            diaper_wet: self.diaper.is_active(),
        };

        for (row, line) in render(&view).iter().enumerate() {
            if let Err(error) = self.actuators.write_display_line(row as u8, line.as_str()) {
                report.push(Event::DisplayFault(error));
                return;
            }
        }
    }

    fn advance_swing(&mut self, now: Instant, report: &mut TickReport) {
        if self.swing.is_idle() {
            return;
        }

        let angle = self.actuators.servo_angle();
        match self.swing.advance(now, angle) {
            SwingAction::Hold => {}
            SwingAction::MoveTo(next) => self.actuators.set_servo_angle(next),
            SwingAction::Stopped => {
                report.push(Event::CradleStopped);
                if let Err(error) = self.actuators.write_display_line(STATUS_ROW, "") {
                    report.push(Event::DisplayFault(error));
                }
            }
        }
    }

    fn advance_buzzer(&mut self, now: Instant, report: &mut TickReport) {
        match self.buzzer.advance(now) {
            BuzzerAction::Idle => {}
            BuzzerAction::Drive(on) => self.actuators.set_buzzer(on),
            BuzzerAction::Finished => {
                self.actuators.set_buzzer(false);
                report.push(Event::BuzzerFinished);
            }
        }
    }

    fn advance_diaper(&mut self, now: Instant, report: &mut TickReport) {
        if self.diaper.advance(now) {
            report.push(Event::DiaperAlertCleared);
        }
    }
}

impl<S, A, T> Scheduler<S, A, T> {
    pub fn config(&self) -> &CradleConfig {
        &self.config
    }

    pub fn swing_state(&self) -> SwingState {
        self.swing.state()
    }

    pub fn buzzer_state(&self) -> BuzzerState {
        self.buzzer.state()
    }

    pub fn diaper_state(&self) -> DiaperAlertState {
        self.diaper.state()
    }

    /// Fan state decided by the last valid sample
    pub fn fan_on(&self) -> Option<bool> {
        self.fan_on
    }

    pub fn sensors_mut(&mut self) -> &mut S {
        &mut self.sensors
    }

    pub fn actuators(&self) -> &A {
        &self.actuators
    }

    pub fn actuators_mut(&mut self) -> &mut A {
        &mut self.actuators
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn transport_mut(&mut self) -> &mut T {
        &mut self.transport
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::traits::{AlertError, DisplayError, SensorError};

    struct StubSensors {
        temperature: Result<i16, SensorError>,
        wetness: u16,
        level: bool,
    }

    impl SensorPort for StubSensors {
        fn read_temperature(&mut self) -> Result<i16, SensorError> {
            self.temperature
        }
        fn read_wetness(&mut self) -> u16 {
            self.wetness
        }
        fn read_cry_level(&mut self) -> bool {
            self.level
        }
    }

    #[derive(Default)]
    struct StubActuators {
        fan: bool,
        buzzer: bool,
        angle: u8,
        rows: [std::string::String; 2],
        display_broken: bool,
    }

    impl ActuatorPort for StubActuators {
        fn set_fan(&mut self, on: bool) {
            self.fan = on;
        }
        fn servo_angle(&self) -> u8 {
            self.angle
        }
        fn set_servo_angle(&mut self, degrees: u8) {
            self.angle = degrees;
        }
        fn set_buzzer(&mut self, on: bool) {
            self.buzzer = on;
        }
        fn write_display_line(&mut self, row: u8, text: &str) -> Result<(), DisplayError> {
            if self.display_broken {
                return Err(DisplayError::Bus);
            }
            self.rows[row as usize] = text.into();
            Ok(())
        }
    }

    struct StubTransport {
        result: Result<(), AlertError>,
        sent: u32,
    }

    impl AlertTransport for StubTransport {
        fn send(&mut self, _destination: &str, _body: &str) -> Result<(), AlertError> {
            self.sent += 1;
            self.result
        }
    }

    fn scheduler(
        temperature: Result<i16, SensorError>,
    ) -> Scheduler<StubSensors, StubActuators, StubTransport> {
        Scheduler::new(
            CradleConfig::default(),
            StubSensors {
                temperature,
                wetness: 900,
                level: true,
            },
            StubActuators::default(),
            StubTransport {
                result: Ok(()),
                sent: 0,
            },
        )
    }

    #[test]
    fn test_park_outputs() {
        let mut sched = scheduler(Ok(250));
        sched.actuators_mut().fan = true;
        sched.actuators_mut().buzzer = true;
        sched.park_outputs();
        assert!(!sched.actuators().fan);
        assert!(!sched.actuators().buzzer);
        assert_eq!(sched.actuators().angle, 60);
    }

    #[test]
    fn test_no_sample_before_window() {
        let mut sched = scheduler(Ok(250));
        let report = sched.tick(Instant::from_millis(100));
        assert!(!report.sampled);
        assert!(report.events.is_empty());
        assert_eq!(sched.fan_on(), None);
    }

    #[test]
    fn test_invalid_temperature_skips_rules_and_display() {
        let mut sched = scheduler(Err(SensorError::Timeout));
        sched.sensors_mut().level = false; // crying
        sched.sensors_mut().wetness = 100; // wet

        let report = sched.tick(Instant::from_millis(500));
        assert!(report.sampled);
        assert!(report.reading.is_none());
        assert_eq!(report.events.as_slice(), &[Event::SensorFault(SensorError::Timeout)]);
        assert_eq!(sched.swing_state(), SwingState::Idle);
        assert_eq!(sched.transport().sent, 0);
        assert!(sched.actuators().rows[0].is_empty());

        // Window consumed: no retry until the next period
        let report = sched.tick(Instant::from_millis(700));
        assert!(!report.sampled);
    }

    #[test]
    fn test_send_failure_reported_not_retried() {
        let mut sched = scheduler(Ok(250));
        sched.transport_mut().result = Err(AlertError::Unavailable);
        sched.sensors_mut().level = false;

        let report = sched.tick(Instant::from_millis(500));
        assert!(report.events.contains(&Event::AlertFailed {
            kind: AlertKind::BabyCrying,
            error: AlertError::Unavailable,
        }));
        // Swing and buzzer run regardless of the alert link
        assert!(matches!(sched.swing_state(), SwingState::Forward { .. }));
        assert!(matches!(sched.buzzer_state(), BuzzerState::Active { .. }));

        for ms in (501..3_000).step_by(10) {
            sched.tick(Instant::from_millis(ms));
        }
        assert_eq!(sched.transport().sent, 1);
    }

    #[test]
    fn test_display_fault_reported() {
        let mut sched = scheduler(Ok(250));
        sched.actuators_mut().display_broken = true;
        let report = sched.tick(Instant::from_millis(500));
        assert!(report.events.contains(&Event::DisplayFault(DisplayError::Bus)));
        assert_eq!(sched.fan_on(), Some(false));
    }
}
