//! Embedded configuration
//!
//! timer.toml is validated and postcard-encoded by the build script. The
//! blob is decoded once at boot; a blob that fails to decode or validate
//! falls back to the built-in defaults rather than refusing to run.

use defmt::*;
use feedtimer_core::config::TimerConfig;

/// Encoded `[timer]` section of timer.toml
const CONFIG_BLOB: &[u8] = include_bytes!(concat!(env!("OUT_DIR"), "/timer_config.bin"));

include!(concat!(env!("OUT_DIR"), "/board.rs"));

/// Decode the embedded timer configuration
pub fn load_config() -> TimerConfig {
    match TimerConfig::decode(CONFIG_BLOB) {
        Ok(config) => {
            info!(
                "Config: alarm after {} ms, snooze {} ms, debounce {} ms",
                config.arm_threshold_ms, config.snooze_ms, config.debounce_ms
            );
            config
        }
        Err(e) => {
            warn!("Embedded config rejected ({}), using defaults", e);
            TimerConfig::default()
        }
    }
}
