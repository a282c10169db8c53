//! Compile-time configuration
//!
//! `build.rs` validates `pedal.toml` and writes its values as constants.

use defmt::*;

use hallpedal_core::MapperConfig;
use hallpedal_drivers::digipot::PotSelect;

include!(concat!(env!("OUT_DIR"), "/pedal_config.rs"));

/// Mapper configuration from `pedal.toml`
///
/// Falls back to defaults if the values are rejected; the build script
/// checks the same ranges, so this only matters if the two drift apart.
pub fn mapper_config() -> MapperConfig {
    match MapperConfig::new(ADC_BITS, WARMUP_SAMPLES, DEAD_ZONE_DIVISOR) {
        Ok(config) => config,
        Err(e) => {
            warn!("Invalid mapper config ({:?}), using defaults", e);
            MapperConfig::default()
        }
    }
}
