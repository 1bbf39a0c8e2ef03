//! Configuration types
//!
//! Every tunable of the monitor, with the values the cradle was built
//! around as defaults. The firmware embeds a postcard-encoded copy.

pub mod types;

pub use types::*;
