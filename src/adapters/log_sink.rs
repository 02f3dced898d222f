//! Log-based event sink adapter.
//!
//! Implements [`EventSink`] by writing controller events to the `log`
//! facade, which ends up on the serial console on a device and on stderr
//! in the host runner.

use log::{info, warn};

use crate::app::events::AppEvent;
use crate::app::ports::EventSink;

/// Adapter that logs every [`AppEvent`].
pub struct LogEventSink;

impl LogEventSink {
    pub fn new() -> Self {
        Self
    }
}

impl Default for LogEventSink {
    fn default() -> Self {
        Self::new()
    }
}

impl EventSink for LogEventSink {
    fn emit(&mut self, event: &AppEvent) {
        match event {
            AppEvent::Started { active, channels } => {
                info!(
                    "START | leds={} | activity={}",
                    channels,
                    if *active { "active" } else { "idle" }
                );
            }
            AppEvent::Transition {
                from,
                to,
                active,
                mode,
            } => match from {
                Some(from) => info!("LAYER | {} -> {} | active={} | {:?}", from, to, active, mode),
                None => info!("LAYER | -> {} | active={} | {:?}", to, active, mode),
            },
            AppEvent::DriverDisarmed(work) => {
                info!("DRIVER | '{}' disarmed", work.name());
            }
            AppEvent::OutputSkipped { level, error } => {
                warn!("OUTPUT | dropped {} write: {}", level, error);
            }
        }
    }
}
