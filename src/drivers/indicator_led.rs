//! Indicator LED cluster output.
//!
//! Writes one brightness to every channel behind an [`LedPort`]. A failing
//! channel is logged and skipped; the rest of the cluster is still
//! written. Only a device that is not ready at all is reported back.

use log::error;

use crate::app::ports::LedPort;
use crate::brightness::Brightness;
use crate::error::DeviceError;

pub struct IndicatorCluster {
    current: Option<Brightness>,
    failed_writes: u32,
}

impl IndicatorCluster {
    pub fn new() -> Self {
        Self {
            current: None,
            failed_writes: 0,
        }
    }

    /// Apply `level` to every channel.
    pub fn set_all(
        &mut self,
        led: &mut (impl LedPort + ?Sized),
        level: Brightness,
    ) -> Result<(), DeviceError> {
        if !led.is_ready() {
            error!("Indicator LED device not ready");
            return Err(DeviceError::NotReady);
        }
        for channel in 0..led.channel_count() {
            if let Err(e) = led.set_brightness(channel, level) {
                error!("Failed to set LED[{}] brightness: {}", channel, e);
                self.failed_writes = self.failed_writes.saturating_add(1);
            }
        }
        self.current = Some(level);
        Ok(())
    }

    /// Last level handed to a ready device. `None` before the first write.
    pub fn current_level(&self) -> Option<Brightness> {
        self.current
    }

    /// Channel writes that failed since construction.
    pub fn failed_writes(&self) -> u32 {
        self.failed_writes
    }
}

impl Default for IndicatorCluster {
    fn default() -> Self {
        Self::new()
    }
}
