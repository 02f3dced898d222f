//! Port traits — the boundary between the controller and the board.
//!
//! ```text
//!   Adapter ──▶ Port trait ──▶ Controller (domain)
//! ```
//!
//! The keymap engine, the activity tracker, the underglow subsystem and the
//! LED driver all sit behind these traits. The
//! [`Controller`](super::service::Controller) takes them via generics, so
//! the state machine never touches hardware directly.

use crate::brightness::Brightness;
use crate::error::{DeviceError, UnderglowError};
use crate::fsm::Layer;

// ───────────────────────────────────────────────────────────────
// Keyboard state (driven adapter: keymap/activity → domain)
// ───────────────────────────────────────────────────────────────

/// Whether the keyboard is in use.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActivityState {
    Active,
    Idle,
}

impl ActivityState {
    pub fn is_active(self) -> bool {
        self == Self::Active
    }
}

/// Read-side port for keymap and activity tracking.
pub trait KeyboardStatePort {
    fn activity_state(&mut self) -> ActivityState;

    /// Highest layer currently active. With no layer held this is the base
    /// layer (0).
    fn highest_active_layer(&mut self) -> Layer;
}

// ───────────────────────────────────────────────────────────────
// Underglow (optional capability)
// ───────────────────────────────────────────────────────────────

/// Read-side port for the RGB underglow on/off state.
///
/// Boards without underglow implement this with an empty body; the default
/// reports [`UnderglowError::Unsupported`] and the controller falls back to
/// [`IndicatorConfig::underglow_fallback`](crate::config::IndicatorConfig).
pub trait UnderglowPort {
    fn underglow_enabled(&mut self) -> Result<bool, UnderglowError> {
        Err(UnderglowError::Unsupported)
    }
}

// ───────────────────────────────────────────────────────────────
// LED output (driven adapter: domain → hardware)
// ───────────────────────────────────────────────────────────────

/// Write-side port for the indicator LED controller.
pub trait LedPort {
    /// Readiness of the LED controller.
    fn is_ready(&self) -> bool;

    /// Number of channels in the cluster. Fixed for the life of the device.
    fn channel_count(&self) -> usize;

    /// Set one channel's brightness.
    fn set_brightness(&mut self, channel: usize, level: Brightness) -> Result<(), DeviceError>;
}

/// Everything the controller needs from a board.
pub trait Board: KeyboardStatePort + UnderglowPort + LedPort {}

impl<T: KeyboardStatePort + UnderglowPort + LedPort> Board for T {}

// ───────────────────────────────────────────────────────────────
// Event sink (driven adapter: domain → logging)
// ───────────────────────────────────────────────────────────────

/// The controller reports what it did through this port.
pub trait EventSink {
    fn emit(&mut self, event: &super::events::AppEvent);
}
