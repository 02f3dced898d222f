//! Indicator controller — the core of the crate.
//!
//! [`Controller`] owns the controller state, the work queue and the LED
//! cluster bookkeeping. All I/O flows through the port traits passed in
//! at each call, so the whole thing runs against mock boards in tests.
//!
//! ```text
//!  KeyboardStatePort ──▶ ┌──────────────────────────────┐ ──▶ EventSink
//!  UnderglowPort ──────▶ │          Controller          │
//!                        │  Poll · Blink · Breathe work │
//!            LedPort ◀── └──────────────────────────────┘
//! ```
//!
//! Three work items share one queue. `Poll` re-arms itself every tick and,
//! when the `(layer, active)` pair changes, cancels whichever pattern was
//! running, rewinds the driver fields and arms the new pattern. `Blink`
//! and `Breathe` re-arm themselves while their layer is still current.

use embassy_time::Instant;
use log::{debug, info};

use crate::brightness::Brightness;
use crate::config::IndicatorConfig;
use crate::drivers::DriverStep;
use crate::drivers::blink::blink_tick;
use crate::drivers::breathe::breathe_tick;
use crate::drivers::indicator_led::IndicatorCluster;
use crate::error::{DeviceError, Result};
use crate::fsm::context::ControllerState;
use crate::fsm::patterns::{self, LayerPattern};
use crate::fsm::{Layer, LightMode};
use crate::scheduler::{WorkId, WorkQueue};

use super::events::AppEvent;
use super::ports::{Board, EventSink};

// ───────────────────────────────────────────────────────────────
// Controller
// ───────────────────────────────────────────────────────────────

pub struct Controller {
    config: IndicatorConfig,
    state: ControllerState,
    queue: WorkQueue,
    cluster: IndicatorCluster,
}

impl Controller {
    // ── Lifecycle ─────────────────────────────────────────────

    /// Check the LED device, take an initial activity reading and arm the
    /// first poll one interval after `now`.
    ///
    /// Fails with [`DeviceError::NotReady`] if the LED device is not ready,
    /// or with a config error if `config` does not validate. Nothing is
    /// armed or written in either case.
    pub fn init(
        config: IndicatorConfig,
        hw: &mut impl Board,
        sink: &mut impl EventSink,
        now: Instant,
    ) -> Result<Self> {
        config.validate()?;
        if !hw.is_ready() {
            log::error!("LED indicator device not ready");
            return Err(DeviceError::NotReady.into());
        }

        let active = hw.activity_state().is_active();
        let state = ControllerState::new(active, &config);
        let mut queue = WorkQueue::new(now);
        queue.reschedule(WorkId::Poll, config.poll_interval());

        let channels = hw.channel_count();
        info!("Indicator controller started ({} LEDs, active={})", channels, active);
        sink.emit(&AppEvent::Started { active, channels });

        Ok(Self {
            config,
            state,
            queue,
            cluster: IndicatorCluster::new(),
        })
    }

    // ── Execution ─────────────────────────────────────────────

    /// Run every work item due at or before `until`, in deadline order,
    /// then move queue time to `until`. Returns how many items ran.
    pub fn run_until(
        &mut self,
        until: Instant,
        hw: &mut impl Board,
        sink: &mut impl EventSink,
    ) -> usize {
        let mut ran = 0;
        while let Some(work) = self.queue.pop_due(until) {
            self.dispatch(work, hw, sink);
            ran += 1;
        }
        self.queue.advance_to(until);
        ran
    }

    /// Run one work handler immediately.
    ///
    /// The queue normally calls this. It is public so a handler can be
    /// invoked the way a timer that was already due when it got cancelled
    /// would be.
    pub fn dispatch(&mut self, work: WorkId, hw: &mut impl Board, sink: &mut impl EventSink) {
        match work {
            WorkId::Poll => self.poll(hw, sink),
            WorkId::Blink => self.blink(hw, sink),
            WorkId::Breathe => self.breathe(hw, sink),
        }
    }

    // ── Queries ───────────────────────────────────────────────

    pub fn state(&self) -> &ControllerState {
        &self.state
    }

    pub fn mode(&self) -> LightMode {
        self.state.mode
    }

    pub fn config(&self) -> &IndicatorConfig {
        &self.config
    }

    /// Whether `work` currently has a deadline.
    pub fn is_armed(&self, work: WorkId) -> bool {
        self.queue.is_pending(work)
    }

    /// Deadline of `work`, if armed.
    pub fn deadline(&self, work: WorkId) -> Option<Instant> {
        self.queue.deadline(work)
    }

    /// Earliest pending deadline. The poller keeps this `Some` forever.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.queue.next_due()
    }

    /// Current queue time.
    pub fn now(&self) -> Instant {
        self.queue.now()
    }

    /// Channel writes that failed since init.
    pub fn failed_writes(&self) -> u32 {
        self.cluster.failed_writes()
    }

    /// Last level successfully handed to the LED device.
    pub fn last_output(&self) -> Option<Brightness> {
        self.cluster.current_level()
    }

    // ── Work handlers ─────────────────────────────────────────

    fn poll(&mut self, hw: &mut impl Board, sink: &mut impl EventSink) {
        let active = hw.activity_state().is_active();
        let layer = hw.highest_active_layer();
        let underglow_on = hw.underglow_enabled().unwrap_or_else(|e| {
            debug!("Indicator: {}, assuming underglow={}", e, self.config.underglow_fallback);
            self.config.underglow_fallback
        });

        if self.state.has_changed(layer, active) {
            self.transition(layer, active, underglow_on, hw, sink);
        }

        self.queue.reschedule(WorkId::Poll, self.config.poll_interval());
    }

    fn transition(
        &mut self,
        layer: Layer,
        active: bool,
        underglow_on: bool,
        hw: &mut impl Board,
        sink: &mut impl EventSink,
    ) {
        let from = self.state.previous_layer;
        self.state.record(layer, active);

        self.queue.cancel(WorkId::Blink);
        self.queue.cancel(WorkId::Breathe);
        self.state.reset_patterns(&self.config);

        let pattern = patterns::resolve(layer, active, underglow_on, &self.config);
        self.state.pattern = pattern;
        let mode = match pattern {
            LayerPattern::Off => {
                self.apply(hw, Brightness::OFF, sink);
                LightMode::Idle
            }
            LayerPattern::Static(level) => {
                self.apply(hw, level, sink);
                LightMode::Static(level)
            }
            LayerPattern::Blink {
                high,
                low,
                start_high,
                fast,
                ..
            } => {
                self.state.blink_phase = start_high;
                self.apply(hw, if start_high { high } else { low }, sink);
                // Half period so the first toggle is not an overlong wait.
                self.queue
                    .reschedule(WorkId::Blink, self.config.blink_first_toggle());
                LightMode::Blinking { fast }
            }
            LayerPattern::Breathe { .. } => {
                self.queue
                    .reschedule(WorkId::Breathe, self.config.breathe_warmup());
                LightMode::Breathing
            }
        };
        self.state.mode = mode;

        info!(
            "Indicator: layer {:?} -> {} (active={}, underglow={}) => {:?}",
            from, layer, active, underglow_on, mode
        );
        sink.emit(&AppEvent::Transition {
            from,
            to: layer,
            active,
            mode,
        });
    }

    fn blink(&mut self, hw: &mut impl Board, sink: &mut impl EventSink) {
        let step = blink_tick(&mut self.state);
        self.run_driver(WorkId::Blink, step, hw, sink);
    }

    fn breathe(&mut self, hw: &mut impl Board, sink: &mut impl EventSink) {
        let step = breathe_tick(&mut self.state);
        self.run_driver(WorkId::Breathe, step, hw, sink);
    }

    fn run_driver(
        &mut self,
        work: WorkId,
        step: DriverStep,
        hw: &mut impl Board,
        sink: &mut impl EventSink,
    ) {
        match step {
            DriverStep::Apply { level, rearm } => {
                self.apply(hw, level, sink);
                self.queue.reschedule(work, rearm);
            }
            DriverStep::Disarm => {
                debug!(
                    "Indicator: stale '{}' work on layer {:?}, switching off",
                    work.name(),
                    self.state.previous_layer
                );
                self.apply(hw, Brightness::OFF, sink);
                sink.emit(&AppEvent::DriverDisarmed(work));
            }
        }
    }

    // ── Output ────────────────────────────────────────────────

    /// Best-effort write. A device that is not ready costs this one write.
    fn apply(&mut self, hw: &mut impl Board, level: Brightness, sink: &mut impl EventSink) {
        if let Err(error) = self.cluster.set_all(hw, level) {
            sink.emit(&AppEvent::OutputSkipped { level, error });
        }
    }
}
