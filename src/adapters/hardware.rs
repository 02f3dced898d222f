//! Hardware adapter — bridges a keyboard state source and an LED bank to
//! the controller's port traits.
//!
//! Owns both halves and forwards each port call to the half that serves
//! it. This is what the runner hands to the
//! [`Controller`](crate::app::service::Controller) as its `Board`.

use crate::app::ports::{ActivityState, KeyboardStatePort, LedPort, UnderglowPort};
use crate::brightness::Brightness;
use crate::error::{DeviceError, UnderglowError};
use crate::fsm::Layer;

pub struct HardwareAdapter<K, L> {
    keyboard: K,
    leds: L,
}

impl<K, L> HardwareAdapter<K, L> {
    pub fn new(keyboard: K, leds: L) -> Self {
        Self { keyboard, leds }
    }

    pub fn keyboard(&self) -> &K {
        &self.keyboard
    }

    pub fn keyboard_mut(&mut self) -> &mut K {
        &mut self.keyboard
    }

    pub fn leds(&self) -> &L {
        &self.leds
    }
}

// ── KeyboardStatePort / UnderglowPort ─────────────────────────

impl<K: KeyboardStatePort, L> KeyboardStatePort for HardwareAdapter<K, L> {
    fn activity_state(&mut self) -> ActivityState {
        self.keyboard.activity_state()
    }

    fn highest_active_layer(&mut self) -> Layer {
        self.keyboard.highest_active_layer()
    }
}

impl<K: UnderglowPort, L> UnderglowPort for HardwareAdapter<K, L> {
    fn underglow_enabled(&mut self) -> Result<bool, UnderglowError> {
        self.keyboard.underglow_enabled()
    }
}

// ── LedPort ───────────────────────────────────────────────────

impl<K, L: LedPort> LedPort for HardwareAdapter<K, L> {
    fn is_ready(&self) -> bool {
        self.leds.is_ready()
    }

    fn channel_count(&self) -> usize {
        self.leds.channel_count()
    }

    fn set_brightness(&mut self, channel: usize, level: Brightness) -> Result<(), DeviceError> {
        self.leds.set_brightness(channel, level)
    }
}
