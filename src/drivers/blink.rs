//! Blink driver.
//!
//! Runs from the `Blink` work item. Each invocation flips the phase and
//! reports the level to write and when to run again, using the levels and
//! period of the stored blink pattern. If the stored layer no longer
//! blinks, the driver reports [`DriverStep::Disarm`] and the controller
//! writes 0 and leaves it unscheduled.

use crate::fsm::context::ControllerState;
use crate::fsm::patterns::{self, LayerPattern};

use super::DriverStep;

pub fn blink_tick(state: &mut ControllerState) -> DriverStep {
    if !patterns::is_blink_layer(state.previous_layer) {
        return DriverStep::Disarm;
    }
    let LayerPattern::Blink {
        high, low, period, ..
    } = state.pattern
    else {
        return DriverStep::Disarm;
    };

    state.blink_phase = !state.blink_phase;
    let level = if state.blink_phase { high } else { low };

    DriverStep::Apply {
        level,
        rearm: period,
    }
}
