//! Integration tests: device faults, failed queries and stale timers.

use layerlight::app::events::AppEvent;
use layerlight::app::service::Controller;
use layerlight::brightness::Brightness;
use layerlight::config::IndicatorConfig;
use layerlight::error::{DeviceError, Error, UnderglowError};
use layerlight::fsm::LightMode;
use layerlight::scheduler::WorkId;

use crate::mock_hw::{MockBoard, RecordingSink, at, run_timeline, start};

// ── Init ──────────────────────────────────────────────────────

#[test]
fn init_refuses_unready_device() {
    let mut board = MockBoard::new();
    board.ready = false;
    let mut sink = RecordingSink::new();

    let result = Controller::init(IndicatorConfig::default(), &mut board, &mut sink, at(0));
    assert!(matches!(result, Err(Error::Device(DeviceError::NotReady))));
    assert!(sink.events.is_empty());
    assert!(board.writes.is_empty());
}

#[test]
fn init_refuses_inverted_breathe_range() {
    let mut board = MockBoard::new();
    let mut sink = RecordingSink::new();
    let config = IndicatorConfig {
        breathe_min: 80,
        breathe_max: 20,
        ..IndicatorConfig::default()
    };

    let result = Controller::init(config, &mut board, &mut sink, at(0));
    assert!(matches!(result, Err(Error::Config(_))));
    assert!(sink.events.is_empty());
}

// ── Runtime device loss ───────────────────────────────────────

#[test]
fn unready_device_skips_output_but_keeps_polling() {
    let mut board = MockBoard::new();
    let mut sink = RecordingSink::new();
    let mut ctl = start(&mut board, &mut sink);

    board.ready = false;
    ctl.run_until(at(100), &mut board, &mut sink);
    assert!(board.writes.is_empty());
    assert!(sink.events.contains(&AppEvent::OutputSkipped {
        level: Brightness::new(90),
        error: DeviceError::NotReady,
    }));
    assert!(ctl.is_armed(WorkId::Poll));
    assert_eq!(ctl.last_output(), None);

    // Same reading again: nothing to retry until the layer changes.
    board.ready = true;
    ctl.run_until(at(300), &mut board, &mut sink);
    assert!(board.writes.is_empty());

    board.layer = 7;
    ctl.run_until(at(400), &mut board, &mut sink);
    assert_eq!(board.frames(), [0]);
    assert_eq!(ctl.last_output(), Some(Brightness::OFF));
}

#[test]
fn blink_keeps_running_while_device_is_down() {
    let mut board = MockBoard::new();
    board.layer = 3;
    let mut sink = RecordingSink::new();
    let mut ctl = start(&mut board, &mut sink);

    board.ready = false;
    ctl.run_until(at(600), &mut board, &mut sink);
    assert!(board.writes.is_empty());
    assert!(ctl.is_armed(WorkId::Blink));

    let skipped = sink
        .events
        .iter()
        .filter(|e| matches!(e, AppEvent::OutputSkipped { .. }))
        .count();
    // Initial write at 100 plus toggles at 350 and 600.
    assert_eq!(skipped, 3);

    board.ready = true;
    let timeline = run_timeline(&mut ctl, &mut board, &mut sink, 850);
    assert_eq!(timeline, vec![(850, 100)]);
}

#[test]
fn broken_channel_does_not_block_the_others() {
    let mut board = MockBoard::new();
    board.broken_channel = Some(0);
    let mut sink = RecordingSink::new();
    let mut ctl = start(&mut board, &mut sink);

    ctl.run_until(at(100), &mut board, &mut sink);
    assert_eq!(board.last_level(0), None);
    assert_eq!(board.last_level(1), Some(90));
    assert!(
        !sink
            .events
            .iter()
            .any(|e| matches!(e, AppEvent::OutputSkipped { .. })),
        "a single channel failure is not a skipped update"
    );
    assert_eq!(ctl.mode(), LightMode::Static(Brightness::new(90)));
}

// ── Underglow query failures ──────────────────────────────────

#[test]
fn unsupported_underglow_counts_as_on() {
    let mut board = MockBoard::new();
    board.layer = 1;
    board.underglow = Err(UnderglowError::Unsupported);
    let mut sink = RecordingSink::new();
    let mut ctl = start(&mut board, &mut sink);

    let timeline = run_timeline(&mut ctl, &mut board, &mut sink, 350);
    assert_eq!(timeline, vec![(100, 10), (350, 100)]);
}

#[test]
fn underglow_change_alone_is_not_a_transition() {
    let mut board = MockBoard::new();
    let mut sink = RecordingSink::new();
    let mut ctl = start(&mut board, &mut sink);

    ctl.run_until(at(100), &mut board, &mut sink);
    board.underglow = Ok(false);
    ctl.run_until(at(500), &mut board, &mut sink);
    assert_eq!(sink.transitions(), 1);
    assert_eq!(board.frames(), [90]);
}

// ── Stale timers ──────────────────────────────────────────────

#[test]
fn stale_breathe_tick_switches_off_without_rearming() {
    let mut board = MockBoard::new();
    board.layer = 2;
    let mut sink = RecordingSink::new();
    let mut ctl = start(&mut board, &mut sink);

    ctl.run_until(at(260), &mut board, &mut sink);
    board.layer = 3;
    ctl.run_until(at(300), &mut board, &mut sink);
    assert!(!ctl.is_armed(WorkId::Breathe));
    assert!(ctl.is_armed(WorkId::Blink));

    // A breathe tick that was already in flight when the cancel landed.
    ctl.dispatch(WorkId::Breathe, &mut board, &mut sink);
    assert_eq!(board.frames().last(), Some(&0));
    assert_eq!(sink.events.last(), Some(&AppEvent::DriverDisarmed(WorkId::Breathe)));
    assert!(!ctl.is_armed(WorkId::Breathe));
    assert_eq!(ctl.mode(), LightMode::Blinking { fast: true });

    // The live blink pattern is unaffected and overwrites the stray zero.
    let timeline = run_timeline(&mut ctl, &mut board, &mut sink, 550);
    assert_eq!(timeline, vec![(550, 100)]);
}

#[test]
fn stale_blink_on_unmapped_layer_stays_dark() {
    let mut board = MockBoard::new();
    board.layer = 1;
    let mut sink = RecordingSink::new();
    let mut ctl = start(&mut board, &mut sink);

    ctl.run_until(at(100), &mut board, &mut sink);
    board.layer = 5;
    ctl.run_until(at(200), &mut board, &mut sink);
    assert_eq!(board.frames(), [10, 0]);

    ctl.dispatch(WorkId::Blink, &mut board, &mut sink);
    assert_eq!(board.frames(), [10, 0, 0]);
    assert!(!ctl.is_armed(WorkId::Blink));
    assert_eq!(ctl.mode(), LightMode::Idle);
}
