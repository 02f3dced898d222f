//! Pattern drivers and LED output helpers.

pub mod blink;
pub mod breathe;
pub mod indicator_led;
pub mod pwm_bank;

use embassy_time::Duration;

use crate::brightness::Brightness;

/// Outcome of one pattern-driver invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DriverStep {
    /// Write `level`, then run again after `rearm`.
    Apply { level: Brightness, rearm: Duration },
    /// The pattern is stale: switch the LEDs off and do not run again.
    Disarm,
}
