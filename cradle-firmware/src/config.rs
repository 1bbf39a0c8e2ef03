//! Configuration compiled into the image by build.rs

use cradle_core::config::CradleConfig;
use defmt::*;

/// Postcard encoding of cradle.toml, validated at build time
static EMBEDDED_CONFIG: &[u8] = include_bytes!(concat!(env!("OUT_DIR"), "/cradle_config.bin"));

/// Decode the embedded configuration, falling back to the defaults
pub fn load() -> CradleConfig {
    match CradleConfig::from_postcard(EMBEDDED_CONFIG) {
        Ok(config) => {
            info!("Loaded embedded configuration");
            config
        }
        Err(e) => {
            warn!("Embedded configuration unusable ({}), using defaults", e);
            CradleConfig::default()
        }
    }
}
