//! Application core — the indicator state machine, zero direct I/O.
//!
//! The controller polls keyboard state, decides which lighting pattern
//! owns the LEDs and drives the pattern timers. All interaction with the
//! board happens through the **port traits** in [`ports`], keeping this
//! layer testable without real peripherals.

pub mod events;
pub mod ports;
pub mod service;
