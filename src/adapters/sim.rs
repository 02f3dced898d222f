//! Simulated keyboard and PWM outputs for the host runner.
//!
//! [`SimulatedKeyboard`] replays a script of `(time, layer, active)` steps
//! against a clock supplied by the caller. [`SimPwm`] is an in-memory PWM
//! output that remembers its duty cycle, so a
//! [`PwmLedBank`](crate::drivers::pwm_bank::PwmLedBank) of them behaves
//! like a real LED controller.

use core::convert::Infallible;

use embedded_hal::pwm::{ErrorType, SetDutyCycle};
use heapless::Vec;
use log::info;

use crate::app::ports::{ActivityState, KeyboardStatePort, UnderglowPort};
use crate::error::UnderglowError;
use crate::fsm::Layer;

/// Maximum number of scripted steps.
pub const MAX_SCRIPT_STEPS: usize = 16;

/// One scripted change, applied once `at_ms` has elapsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScriptStep {
    pub at_ms: u64,
    pub layer: Layer,
    pub active: bool,
}

pub struct SimulatedKeyboard {
    script: Vec<ScriptStep, MAX_SCRIPT_STEPS>,
    cursor: usize,
    layer: Layer,
    active: bool,
    underglow: Option<bool>,
}

impl SimulatedKeyboard {
    /// Start on the base layer, active. `underglow = None` models a board
    /// without an underglow subsystem.
    pub fn new(underglow: Option<bool>) -> Self {
        Self {
            script: Vec::new(),
            cursor: 0,
            layer: 0,
            active: true,
            underglow,
        }
    }

    /// Queue a step. Steps must be pushed in time order; returns `false`
    /// when the script is full.
    pub fn push_step(&mut self, step: ScriptStep) -> bool {
        self.script.push(step).is_ok()
    }

    /// Apply every step due by `elapsed_ms`.
    pub fn advance(&mut self, elapsed_ms: u64) {
        while let Some(step) = self.script.get(self.cursor) {
            if step.at_ms > elapsed_ms {
                break;
            }
            info!(
                "sim: t={}ms layer={} active={}",
                step.at_ms, step.layer, step.active
            );
            self.layer = step.layer;
            self.active = step.active;
            self.cursor += 1;
        }
    }

    /// Time of the last scripted step.
    pub fn script_end_ms(&self) -> u64 {
        self.script.last().map_or(0, |s| s.at_ms)
    }
}

impl KeyboardStatePort for SimulatedKeyboard {
    fn activity_state(&mut self) -> ActivityState {
        if self.active {
            ActivityState::Active
        } else {
            ActivityState::Idle
        }
    }

    fn highest_active_layer(&mut self) -> Layer {
        self.layer
    }
}

impl UnderglowPort for SimulatedKeyboard {
    fn underglow_enabled(&mut self) -> Result<bool, UnderglowError> {
        self.underglow.ok_or(UnderglowError::Unsupported)
    }
}

// ── SimPwm ────────────────────────────────────────────────────

/// In-memory PWM channel with an 8-bit-style duty range.
#[derive(Debug, Default)]
pub struct SimPwm {
    duty: u16,
}

impl SimPwm {
    pub const MAX_DUTY: u16 = 255;

    pub fn new() -> Self {
        Self::default()
    }

    pub fn duty(&self) -> u16 {
        self.duty
    }
}

impl ErrorType for SimPwm {
    type Error = Infallible;
}

impl SetDutyCycle for SimPwm {
    fn max_duty_cycle(&self) -> u16 {
        Self::MAX_DUTY
    }

    fn set_duty_cycle(&mut self, duty: u16) -> Result<(), Self::Error> {
        self.duty = duty;
        Ok(())
    }
}
