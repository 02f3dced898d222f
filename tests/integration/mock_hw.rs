//! Mock board for integration tests.
//!
//! Serves keyboard state from plain fields and records every LED write, so
//! tests can assert on the full output history without real hardware.

use embassy_time::Instant;
use layerlight::app::events::AppEvent;
use layerlight::app::ports::{ActivityState, EventSink, KeyboardStatePort, LedPort, UnderglowPort};
use layerlight::app::service::Controller;
use layerlight::brightness::Brightness;
use layerlight::config::IndicatorConfig;
use layerlight::error::{DeviceError, UnderglowError};

// ── LED write record ──────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LedWrite {
    pub channel: usize,
    pub level: u8,
}

// ── MockBoard ─────────────────────────────────────────────────

pub struct MockBoard {
    pub layer: u8,
    pub active: bool,
    pub underglow: Result<bool, UnderglowError>,
    pub ready: bool,
    pub channels: usize,
    pub broken_channel: Option<usize>,
    pub writes: Vec<LedWrite>,
}

#[allow(dead_code)]
impl MockBoard {
    pub fn new() -> Self {
        Self {
            layer: 0,
            active: true,
            underglow: Ok(true),
            ready: true,
            channels: 2,
            broken_channel: None,
            writes: Vec::new(),
        }
    }

    /// Levels written to channel 0, in order. One entry per cluster update.
    pub fn frames(&self) -> Vec<u8> {
        self.writes
            .iter()
            .filter(|w| w.channel == 0)
            .map(|w| w.level)
            .collect()
    }

    pub fn last_level(&self, channel: usize) -> Option<u8> {
        self.writes
            .iter()
            .rev()
            .find(|w| w.channel == channel)
            .map(|w| w.level)
    }
}

impl Default for MockBoard {
    fn default() -> Self {
        Self::new()
    }
}

impl KeyboardStatePort for MockBoard {
    fn activity_state(&mut self) -> ActivityState {
        if self.active {
            ActivityState::Active
        } else {
            ActivityState::Idle
        }
    }

    fn highest_active_layer(&mut self) -> u8 {
        self.layer
    }
}

impl UnderglowPort for MockBoard {
    fn underglow_enabled(&mut self) -> Result<bool, UnderglowError> {
        self.underglow
    }
}

impl LedPort for MockBoard {
    fn is_ready(&self) -> bool {
        self.ready
    }

    fn channel_count(&self) -> usize {
        self.channels
    }

    fn set_brightness(&mut self, channel: usize, level: Brightness) -> Result<(), DeviceError> {
        if self.broken_channel == Some(channel) {
            return Err(DeviceError::ChannelWrite { channel, code: -5 });
        }
        self.writes.push(LedWrite {
            channel,
            level: level.percent(),
        });
        Ok(())
    }
}

// ── RecordingSink ─────────────────────────────────────────────

pub struct RecordingSink {
    pub events: Vec<AppEvent>,
}

#[allow(dead_code)]
impl RecordingSink {
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    pub fn transitions(&self) -> usize {
        self.events
            .iter()
            .filter(|e| matches!(e, AppEvent::Transition { .. }))
            .count()
    }
}

impl Default for RecordingSink {
    fn default() -> Self {
        Self::new()
    }
}

impl EventSink for RecordingSink {
    fn emit(&mut self, event: &AppEvent) {
        self.events.push(event.clone());
    }
}

// ── Helpers ───────────────────────────────────────────────────

pub fn at(ms: u64) -> Instant {
    Instant::from_millis(ms)
}

/// Controller with default config, started at t=0.
pub fn start(board: &mut MockBoard, sink: &mut RecordingSink) -> Controller {
    Controller::init(IndicatorConfig::default(), board, sink, at(0)).expect("init")
}

/// Step through every deadline up to and including `until_ms`, recording
/// `(time_ms, level)` for each deadline that changed the LED output.
#[allow(dead_code)]
pub fn run_timeline(
    ctl: &mut Controller,
    board: &mut MockBoard,
    sink: &mut RecordingSink,
    until_ms: u64,
) -> Vec<(u64, u8)> {
    let mut timeline = Vec::new();
    while let Some(deadline) = ctl.next_deadline() {
        if deadline > at(until_ms) {
            break;
        }
        let before = board.frames().len();
        ctl.run_until(deadline, board, sink);
        let frames = board.frames();
        if frames.len() > before {
            for level in &frames[before..] {
                timeline.push((deadline.as_millis(), *level));
            }
        }
    }
    ctl.run_until(at(until_ms), board, sink);
    timeline
}
