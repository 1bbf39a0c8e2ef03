//! Hardware abstraction traits
//!
//! These traits define the interface between the scheduler and the
//! hardware-specific drivers. Individual device traits are implemented by
//! drivers; the `*Port` traits are what the scheduler consumes, and the
//! `*Bank` structs glue the two together.

pub mod actuator;
pub mod alert;
pub mod display;
pub mod sensor;

pub use actuator::{ActuatorBank, ActuatorPort, ServoOutput, SwitchedOutput};
pub use alert::{AlertError, AlertKind, AlertTransport};
pub use display::{DisplayDriver, DisplayError, DISPLAY_COLS, DISPLAY_ROWS};
pub use sensor::{
    CryDetector, SensorBank, SensorError, SensorPort, TemperatureSensor, WetnessSensor,
};
