//! Fuzz target: controller under arbitrary keyboard input
//!
//! Each input byte is one 10 ms slice: the low three bits pick the layer,
//! bit 3 the activity state, bits 4-5 the underglow reading. Verifies:
//! - No panics across arbitrary layer/activity/underglow sequences
//! - The poller is always armed
//! - Blink and breathe are never armed together
//!
//! cargo fuzz run fuzz_controller_script

#![no_main]

use embassy_time::Instant;
use layerlight::adapters::hardware::HardwareAdapter;
use layerlight::adapters::log_sink::LogEventSink;
use layerlight::adapters::sim::{ScriptStep, SimPwm, SimulatedKeyboard};
use layerlight::app::service::Controller;
use layerlight::config::IndicatorConfig;
use layerlight::drivers::pwm_bank::PwmLedBank;
use layerlight::scheduler::WorkId;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let keyboard = SimulatedKeyboard::new(Some(true));
    let mut board = HardwareAdapter::new(keyboard, PwmLedBank::new([SimPwm::new()]));
    let mut sink = LogEventSink::new();
    let Ok(mut ctl) = Controller::init(
        IndicatorConfig::default(),
        &mut board,
        &mut sink,
        Instant::from_millis(0),
    ) else {
        return;
    };

    for (i, byte) in data.iter().take(4_096).enumerate() {
        let t = (i as u64 + 1) * 10;
        let mut next = SimulatedKeyboard::new(match (byte >> 4) & 0b11 {
            0 => None,
            1 => Some(false),
            _ => Some(true),
        });
        next.push_step(ScriptStep { at_ms: 0, layer: byte & 0b111, active: byte & 0b1000 != 0 });
        next.advance(0);
        *board.keyboard_mut() = next;

        ctl.run_until(Instant::from_millis(t), &mut board, &mut sink);
        assert!(ctl.is_armed(WorkId::Poll));
        assert!(!(ctl.is_armed(WorkId::Blink) && ctl.is_armed(WorkId::Breathe)));
    }
});
