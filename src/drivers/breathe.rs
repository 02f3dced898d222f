//! Breathe driver — triangle-wave brightness ramp.
//!
//! Emits the current ramp level, then moves it one step. A step that would
//! reach or pass either bound is clamped to it and turns the ramp around,
//! so the ceiling and the floor are each emitted once per cycle. With the
//! default ramp (10-100, step 5) a cycle is 2 * (100 - 10) / 5 = 36 ticks.
//!
//! ```text
//!  100 |        /\
//!      |       /  \
//!      |      /    \
//!   10 |_____/      \/ ...
//!        10 15 .. 95 100 95 .. 15 10 15
//! ```

use crate::brightness::Brightness;
use crate::fsm::context::ControllerState;
use crate::fsm::patterns::{self, BreatheRamp, LayerPattern};

use super::DriverStep;

pub fn breathe_tick(state: &mut ControllerState) -> DriverStep {
    if !patterns::is_breathe_layer(state.previous_layer) {
        return DriverStep::Disarm;
    }
    let LayerPattern::Breathe { ramp, tick } = state.pattern else {
        return DriverStep::Disarm;
    };

    let level = Brightness::new(state.cycle_brightness);
    let (next, rising) = advance(state.cycle_brightness, state.cycle_rising, &ramp);
    state.cycle_brightness = next;
    state.cycle_rising = rising;

    DriverStep::Apply { level, rearm: tick }
}

/// One ramp step from `(level, rising)`.
pub fn advance(level: u8, rising: bool, ramp: &BreatheRamp) -> (u8, bool) {
    if rising {
        let next = level.saturating_add(ramp.step);
        if next >= ramp.max { (ramp.max, false) } else { (next, true) }
    } else {
        match level.checked_sub(ramp.step) {
            Some(next) if next > ramp.min => (next, false),
            _ => (ramp.min, true),
        }
    }
}
