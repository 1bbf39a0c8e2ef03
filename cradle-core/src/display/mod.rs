//! Status display rendering

pub mod presenter;

pub use presenter::{render, DisplayLine, StatusLine, StatusView};
