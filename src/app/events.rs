//! Outbound controller events.
//!
//! The [`Controller`](super::service::Controller) emits these through the
//! [`EventSink`](super::ports::EventSink) port. Adapters decide where they
//! go; the stock one writes them to the log.

use crate::brightness::Brightness;
use crate::error::DeviceError;
use crate::fsm::{Layer, LightMode};
use crate::scheduler::WorkId;

/// Structured events emitted by the controller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppEvent {
    /// Initialisation succeeded and the poller is armed.
    Started { active: bool, channels: usize },

    /// The poller saw a new `(layer, active)` pair and armed a new mode.
    Transition {
        from: Option<Layer>,
        to: Layer,
        active: bool,
        mode: LightMode,
    },

    /// A pattern driver fired after its layer went away and stopped itself.
    DriverDisarmed(WorkId),

    /// A brightness write was dropped because the device failed.
    OutputSkipped { level: Brightness, error: DeviceError },
}
