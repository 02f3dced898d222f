//! Layer-to-lighting state machine.
//!
//! ```text
//!             ┌──────────────── layer/activity changed ───────────────┐
//!             │                                                        │
//!             ▼                                                        │
//!  ┌────────────────────┐                                              │
//!  │  resolve pattern   │──[layer 0]──────────▶ STATIC(90 or 0) ───────┤
//!  │  (patterns table)  │──[layer 1, 3]───────▶ BLINKING(normal/fast) ─┤
//!  │                    │──[layer 2]──────────▶ BREATHING ─────────────┤
//!  │                    │──[anything else]────▶ IDLE (dark) ───────────┘
//!  └────────────────────┘
//! ```
//!
//! There is no transition table of handlers: every detected change goes
//! through the same cancel → reset → arm sequence in the poller, and the
//! resulting [`LightMode`] is recorded in the [`context::ControllerState`].
//! The two pattern drivers never consult the mode to decide whether they
//! are still valid; they re-check the stored layer, which is what the
//! poller updates first.

pub mod context;
pub mod patterns;

use crate::brightness::Brightness;

/// Keymap layer index as reported by the keymap engine.
pub type Layer = u8;

/// Which lighting behaviour currently owns the LED cluster.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LightMode {
    /// Nothing armed. Either no layer has been seen yet, or the layer has
    /// no pattern and the cluster was switched off.
    #[default]
    Idle,
    /// A constant level was written once; no timer is armed.
    Static(Brightness),
    /// The blink driver is armed. `fast` selects the half-period cadence.
    Blinking { fast: bool },
    /// The breathe driver is armed.
    Breathing,
}
