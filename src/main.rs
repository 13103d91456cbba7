//! Oven simulation — main entry point.
//!
//! Wires the production drivers to the cook controller and runs a scripted
//! cook session on the host at the configured tick rate.
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │                  Drivers (outer ring)                    │
//! │                                                          │
//! │  OvenHardware                      LogEventSink          │
//! │  (Heater+Timer+Display+            (EventSink)           │
//! │   Buzzer+Notifier ports)                                 │
//! │                                                          │
//! │  ───────────── Port Trait Boundary ─────────────         │
//! │                                                          │
//! │  ┌────────────────────────────────────────────────┐      │
//! │  │          CookController (pure logic)           │      │
//! │  │             Idle ⇄ Cooking                     │      │
//! │  └────────────────────────────────────────────────┘      │
//! └──────────────────────────────────────────────────────────┘
//! ```
#![deny(unused_must_use)]

use std::thread;
use std::time::Duration;

use anyhow::{Context, Result};
use log::info;

use ovencore::config::OvenConfig;
use ovencore::cook::commands::CookCommand;
use ovencore::cook::controller::CookController;
use ovencore::drivers::oven::{LogEventSink, OvenHardware};

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    info!("ovencore v{} — host simulation", env!("CARGO_PKG_VERSION"));

    let config = load_config()?;
    let tick = Duration::from_millis(u64::from(config.tick_interval_ms));

    let mut hw = OvenHardware::new(&config);
    let mut sink = LogEventSink::new();
    let mut controller = CookController::new(&hw);

    info!("controller ready, max power {} W", controller.max_power());

    // ── Cycle 1: cook to natural expiration, extending mid-way ──
    controller.handle_command(
        CookCommand::Start {
            power_watts: 600,
            duration_secs: 5,
        },
        &mut hw,
        &mut sink,
    )?;

    let mut ticks = 0u32;
    while controller.is_cooking() {
        thread::sleep(tick);
        ticks += 1;
        if ticks == 2 {
            controller.handle_command(CookCommand::AddTime { delta_secs: 3 }, &mut hw, &mut sink)?;
        }
        if let Some(event) = hw.second_elapsed() {
            controller.on_timer_event(event, &mut hw, &mut sink);
        }
    }

    // ── Cycle 2: cook, then cancel before expiration ──────────
    controller.handle_command(
        CookCommand::Start {
            power_watts: 200,
            duration_secs: 60,
        },
        &mut hw,
        &mut sink,
    )?;

    for _ in 0..3 {
        thread::sleep(tick);
        if let Some(event) = hw.second_elapsed() {
            controller.on_timer_event(event, &mut hw, &mut sink);
        }
    }
    controller.handle_command(CookCommand::Stop, &mut hw, &mut sink)?;

    info!("simulation complete");
    Ok(())
}

/// Load configuration from the JSON file given as the first argument, or
/// fall back to the built-in defaults.
fn load_config() -> Result<OvenConfig> {
    match std::env::args().nth(1) {
        Some(path) => {
            let text = std::fs::read_to_string(&path)
                .with_context(|| format!("reading config file {path}"))?;
            let config = serde_json::from_str(&text)
                .with_context(|| format!("parsing config file {path}"))?;
            info!("config: loaded from {path}");
            Ok(config)
        }
        None => Ok(OvenConfig::default()),
    }
}
