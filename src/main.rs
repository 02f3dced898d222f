//! Layerlight host runner.
//!
//! Drives the indicator controller against a simulated keyboard and a bank
//! of in-memory PWM LEDs, in real time, and logs what the LEDs do.
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │  SimulatedKeyboard ─┐                                    │
//! │                     ├─ HardwareAdapter ──▶ Controller    │
//! │  PwmLedBank<SimPwm> ┘        ▲                │          │
//! │                              │          LogEventSink     │
//! │  MonotonicClock ── sleep_until(next deadline) ┘          │
//! └──────────────────────────────────────────────────────────┘
//! ```
//!
//! Usage: `layerlight [config.json]`. Set `RUST_LOG=debug` for driver
//! detail.

use anyhow::{Context, Result};
use log::{info, warn};

use layerlight::adapters::hardware::HardwareAdapter;
use layerlight::adapters::log_sink::LogEventSink;
use layerlight::adapters::sim::{ScriptStep, SimPwm, SimulatedKeyboard};
use layerlight::adapters::time::MonotonicClock;
use layerlight::app::service::Controller;
use layerlight::config::IndicatorConfig;
use layerlight::drivers::pwm_bank::PwmLedBank;

/// LEDs in the simulated indicator cluster.
const CLUSTER_LEDS: usize = 3;

/// Demo walk through every layer behaviour.
const DEMO_SCRIPT: [ScriptStep; 7] = [
    ScriptStep { at_ms: 1_000, layer: 1, active: true },
    ScriptStep { at_ms: 3_000, layer: 2, active: true },
    ScriptStep { at_ms: 5_000, layer: 3, active: true },
    ScriptStep { at_ms: 6_500, layer: 0, active: true },
    ScriptStep { at_ms: 7_500, layer: 0, active: false },
    ScriptStep { at_ms: 8_500, layer: 7, active: true },
    ScriptStep { at_ms: 9_500, layer: 0, active: true },
];

/// Keep running this long after the last scripted step.
const TAIL_MS: u64 = 1_000;

fn load_config() -> Result<IndicatorConfig> {
    match std::env::args().nth(1) {
        Some(path) => load_config_file(&path),
        None => Ok(IndicatorConfig::default()),
    }
}

fn load_config_file(path: &str) -> Result<IndicatorConfig> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading config file {path}"))?;
    let config: IndicatorConfig = serde_json::from_str(&text)
        .with_context(|| format!("parsing config file {path}"))?;
    info!("Config loaded from {}", path);
    Ok(config)
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    info!("layerlight v{}", env!("CARGO_PKG_VERSION"));

    let config = load_config()?;

    let mut keyboard = SimulatedKeyboard::new(Some(true));
    for step in DEMO_SCRIPT {
        if !keyboard.push_step(step) {
            warn!("Script full, dropping step at {}ms", step.at_ms);
        }
    }
    let leds = PwmLedBank::new(core::array::from_fn::<_, CLUSTER_LEDS, _>(|_| SimPwm::new()));
    let mut board = HardwareAdapter::new(keyboard, leds);
    let mut sink = LogEventSink::new();

    let clock = MonotonicClock::new();
    let mut controller = Controller::init(config, &mut board, &mut sink, clock.now())
        .context("indicator init failed")?;

    let stop_at = board.keyboard().script_end_ms() + TAIL_MS;
    let mut last_level = None;

    while clock.uptime_ms() < stop_at {
        let Some(deadline) = controller.next_deadline() else {
            warn!("No work pending, stopping");
            break;
        };
        clock.sleep_until(deadline);

        let elapsed = clock.uptime_ms();
        board.keyboard_mut().advance(elapsed);
        controller.run_until(clock.now(), &mut board, &mut sink);

        let level = controller.last_output();
        if level != last_level {
            if let Some(level) = level {
                let duty = board.leds().channel(0).map_or(0, SimPwm::duty);
                log::debug!("t={}ms LEDs at {} (duty {}/{})", elapsed, level, duty, SimPwm::MAX_DUTY);
            }
            last_level = level;
        }
    }

    info!(
        "Simulation finished after {}ms ({} failed LED writes)",
        clock.uptime_ms(),
        controller.failed_writes()
    );
    Ok(())
}
