//! GSM modem drivers

pub mod sim800;

pub use sim800::{ModemError, ModemTiming, Sim800, MAX_BODY_LEN};
