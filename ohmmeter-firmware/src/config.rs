//! Embedded configuration
//!
//! meter.toml is compiled into the image and parsed at boot. The build
//! script already rejects a bad file, so the fallback below only guards
//! against the two parsers drifting apart.

use defmt::*;

use ohmmeter_core::config::{parse_config, MeterConfig};

/// Embedded configuration (compiled into firmware)
/// Edit meter.toml and rebuild to customize
const EMBEDDED_CONFIG: &str = include_str!("../meter.toml");

/// Load the embedded configuration, falling back to defaults
pub fn load() -> MeterConfig {
    let config = match parse_config(EMBEDDED_CONFIG) {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to parse embedded config: {:?}", e);
            warn!("Using default configuration");
            return MeterConfig::default();
        }
    };

    if let Err(e) = config.validate() {
        error!("Embedded config rejected: {:?}", e);
        warn!("Using default configuration");
        return MeterConfig::default();
    }

    info!(
        "Config: R_known={} ohm, ADC max={}, window={}, brightness={}%",
        config.divider.known_ohms,
        config.divider.adc_resolution,
        config.sampling.window,
        config.matrix.brightness_pct
    );
    config
}
