//! Controller state shared by the poller and both pattern drivers.
//!
//! `ControllerState` is owned by the [`Controller`](crate::app::service::Controller)
//! and handed to each work handler by `&mut`. The work queue runs one
//! handler at a time, so exclusive access is the whole synchronisation
//! story.

use crate::config::IndicatorConfig;

use super::patterns::LayerPattern;
use super::{Layer, LightMode};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ControllerState {
    /// Activity reading at the last detected transition.
    pub previous_active: bool,
    /// Layer at the last detected transition. `None` until the first poll.
    pub previous_layer: Option<Layer>,
    /// Blink phase: `true` = high level. Only meaningful while blinking.
    pub blink_phase: bool,
    /// Next level the breathe driver will emit.
    pub cycle_brightness: u8,
    /// Breathe ramp direction.
    pub cycle_rising: bool,
    /// Pattern resolved at the last transition. The drivers take their
    /// levels and cadence from here.
    pub pattern: LayerPattern,
    /// Behaviour armed by the last transition.
    pub mode: LightMode,
}

impl ControllerState {
    pub fn new(active: bool, config: &IndicatorConfig) -> Self {
        Self {
            previous_active: active,
            previous_layer: None,
            blink_phase: false,
            cycle_brightness: config.breathe_min,
            cycle_rising: true,
            pattern: LayerPattern::Off,
            mode: LightMode::Idle,
        }
    }

    /// Whether `(layer, active)` differs from the last recorded pair.
    pub fn has_changed(&self, layer: Layer, active: bool) -> bool {
        self.previous_layer != Some(layer) || self.previous_active != active
    }

    pub fn record(&mut self, layer: Layer, active: bool) {
        self.previous_layer = Some(layer);
        self.previous_active = active;
    }

    /// Rewind both driver phases to their starting point.
    pub fn reset_patterns(&mut self, config: &IndicatorConfig) {
        self.blink_phase = false;
        self.cycle_brightness = config.breathe_min;
        self.cycle_rising = true;
    }
}
