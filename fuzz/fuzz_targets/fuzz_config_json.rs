//! Fuzz target: `IndicatorConfig` JSON loading
//!
//! Feeds arbitrary bytes through the same path as the host runner's config
//! file and verifies:
//! - No panics while parsing or validating
//! - A config that validates always yields non-zero timer periods
//! - A config that validates keeps every level within 0-100
//!
//! cargo fuzz run fuzz_config_json

#![no_main]

use layerlight::config::{BRIGHTNESS_CEILING, IndicatorConfig};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(config) = serde_json::from_slice::<IndicatorConfig>(data) else {
        return;
    };
    if config.validate().is_err() {
        return;
    }

    assert!(config.poll_interval().as_ticks() > 0);
    assert!(config.blink_interval(true).as_ticks() > 0);
    assert!(config.blink_first_toggle().as_ticks() > 0);
    assert!(config.breathe_tick().as_ticks() > 0);
    assert!(config.breathe_min < config.breathe_max);
    assert!(config.breathe_max <= BRIGHTNESS_CEILING);
    assert!(config.blink_high <= BRIGHTNESS_CEILING);
});
