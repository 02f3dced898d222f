//! Layer → pattern lookup.
//!
//! The table is fixed: layers 0-3 have a behaviour, everything else is
//! dark. Levels and timings come from [`IndicatorConfig`]. The resolved
//! pattern is stored in the controller state and is what the drivers read
//! their parameters from.

use embassy_time::Duration;

use crate::brightness::Brightness;
use crate::config::IndicatorConfig;

use super::Layer;

/// Base layer: steady light that follows activity and underglow.
pub const BASE_LAYER: Layer = 0;
/// Blinks at the normal cadence.
pub const BLINK_LAYER: Layer = 1;
/// Breathes continuously.
pub const BREATHE_LAYER: Layer = 2;
/// Blinks at twice the normal rate.
pub const FAST_BLINK_LAYER: Layer = 3;

/// Triangle-wave bounds and step for the breathe driver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BreatheRamp {
    pub min: u8,
    pub max: u8,
    pub step: u8,
}

impl BreatheRamp {
    pub fn from_config(config: &IndicatorConfig) -> Self {
        Self {
            min: config.breathe_min,
            max: config.breathe_max,
            step: config.breathe_step,
        }
    }
}

/// What the cluster should do for a given layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LayerPattern {
    /// Switch the cluster off.
    #[default]
    Off,
    /// Write one level and leave it.
    Static(Brightness),
    /// Alternate between two levels.
    Blink {
        high: Brightness,
        low: Brightness,
        /// Time between toggles once running.
        period: Duration,
        /// Level written when the pattern is armed.
        start_high: bool,
        fast: bool,
    },
    /// Triangle-wave ramp.
    Breathe { ramp: BreatheRamp, tick: Duration },
}

/// Map a sampled `(layer, active, underglow_on)` triple to its pattern.
pub fn resolve(
    layer: Layer,
    active: bool,
    underglow_on: bool,
    config: &IndicatorConfig,
) -> LayerPattern {
    match layer {
        BASE_LAYER => {
            let level = if underglow_on && active {
                Brightness::new(config.static_max_brightness)
            } else {
                Brightness::OFF
            };
            LayerPattern::Static(level)
        }
        // Underglow on: low first, then high. Off: the reverse.
        BLINK_LAYER => blink(config, !underglow_on, false),
        BREATHE_LAYER => LayerPattern::Breathe {
            ramp: BreatheRamp::from_config(config),
            tick: config.breathe_tick(),
        },
        FAST_BLINK_LAYER => blink(config, false, true),
        _ => LayerPattern::Off,
    }
}

fn blink(config: &IndicatorConfig, start_high: bool, fast: bool) -> LayerPattern {
    LayerPattern::Blink {
        high: Brightness::new(config.blink_high),
        low: Brightness::new(config.blink_low),
        period: config.blink_interval(fast),
        start_high,
        fast,
    }
}

/// Whether `layer` is one of the blinking layers.
///
/// The blink driver checks this on every toggle against the *stored* layer,
/// so a toggle that fires after a layer change finds `false` and stops.
pub fn is_blink_layer(layer: Option<Layer>) -> bool {
    matches!(layer, Some(BLINK_LAYER | FAST_BLINK_LAYER))
}

/// Whether `layer` is the breathing layer.
pub fn is_breathe_layer(layer: Option<Layer>) -> bool {
    layer == Some(BREATHE_LAYER)
}
