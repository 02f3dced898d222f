//! Indicator configuration parameters
//!
//! Every timing constant and brightness level used by the poller and the
//! two pattern drivers. The defaults reproduce the stock board behaviour;
//! the host runner can override them from a JSON file.

use embassy_time::Duration;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Highest brightness value any channel accepts (percent).
pub const BRIGHTNESS_CEILING: u8 = 100;

/// Indicator controller configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct IndicatorConfig {
    // --- Poller ---
    /// Layer/activity sampling period (milliseconds)
    pub poll_interval_ms: u32,

    // --- Static ---
    /// Brightness on the base layer while active with underglow on (0-100%)
    pub static_max_brightness: u8,

    // --- Blink ---
    /// "On" phase brightness (0-100%)
    pub blink_high: u8,
    /// "Off" phase brightness (0-100%)
    pub blink_low: u8,
    /// Normal blink cadence (milliseconds). The fast cadence is half of this.
    pub blink_period_ms: u32,

    // --- Breathe ---
    /// Triangle-wave floor (0-100%)
    pub breathe_min: u8,
    /// Triangle-wave ceiling (0-100%)
    pub breathe_max: u8,
    /// Brightness change per breathe tick
    pub breathe_step: u8,
    /// Breathe tick period (milliseconds)
    pub breathe_tick_ms: u32,
    /// Delay between entering the breathe layer and the first ramp tick (milliseconds)
    pub breathe_warmup_ms: u32,

    // --- Underglow ---
    /// Value assumed when the underglow state cannot be read
    pub underglow_fallback: bool,
}

impl Default for IndicatorConfig {
    fn default() -> Self {
        Self {
            poll_interval_ms: 100, // 10 Hz

            static_max_brightness: 90,

            blink_high: 100,
            blink_low: 10,
            blink_period_ms: 500,

            breathe_min: 10,
            breathe_max: 100,
            breathe_step: 5,
            breathe_tick_ms: 20, // 50 Hz
            breathe_warmup_ms: 100,

            // Fail open: patterns take their "RGB on" branch.
            underglow_fallback: true,
        }
    }
}

impl IndicatorConfig {
    /// Reject values the drivers cannot run with.
    pub fn validate(&self) -> Result<()> {
        if self.poll_interval_ms == 0 {
            return Err(Error::Config("poll_interval_ms must be non-zero"));
        }
        if self.blink_period_ms < 2 {
            return Err(Error::Config("blink_period_ms must be at least 2"));
        }
        if self.breathe_tick_ms == 0 {
            return Err(Error::Config("breathe_tick_ms must be non-zero"));
        }
        if self.breathe_step == 0 {
            return Err(Error::Config("breathe_step must be non-zero"));
        }
        if self.breathe_min >= self.breathe_max {
            return Err(Error::Config("breathe_min must be below breathe_max"));
        }
        let levels = [
            self.static_max_brightness,
            self.blink_high,
            self.blink_low,
            self.breathe_max,
        ];
        if levels.iter().any(|&l| l > BRIGHTNESS_CEILING) {
            return Err(Error::Config("brightness levels must be within 0-100"));
        }
        Ok(())
    }

    pub fn poll_interval(&self) -> Duration {
        Duration::from_millis(u64::from(self.poll_interval_ms))
    }

    /// Blink cadence; `fast` halves it.
    pub fn blink_interval(&self, fast: bool) -> Duration {
        let ms = if fast {
            self.blink_period_ms / 2
        } else {
            self.blink_period_ms
        };
        Duration::from_millis(u64::from(ms))
    }

    /// Delay before the first blink toggle after entering a blink layer.
    pub fn blink_first_toggle(&self) -> Duration {
        Duration::from_millis(u64::from(self.blink_period_ms / 2))
    }

    pub fn breathe_tick(&self) -> Duration {
        Duration::from_millis(u64::from(self.breathe_tick_ms))
    }

    pub fn breathe_warmup(&self) -> Duration {
        Duration::from_millis(u64::from(self.breathe_warmup_ms))
    }
}
