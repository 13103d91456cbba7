//! Oven hardware adapter — bridges the drivers to the domain port traits.
//!
//! Owns the heating element, countdown timer, display, buzzer and notifier,
//! exposing them through the port traits so controller entry points can
//! take a single `&mut (impl HeaterPort + …)` argument. This is the only
//! production type that touches every driver; the domain core sees traits.

use crate::config::OvenConfig;
use crate::cook::events::{OvenEvent, TimerEvent};
use crate::cook::ports::{
    BuzzerPort, DisplayPort, EventSink, HeaterPort, NotifierPort, TimerPort,
};
use crate::error::Result;

use super::buzzer::Buzzer;
use super::display::ConsoleDisplay;
use super::heater::{HeaterState, HeatingElement};
use super::notifier::ConsoleNotifier;
use super::timer::CookTimer;

/// Concrete adapter that combines all oven peripherals behind port traits.
pub struct OvenHardware {
    heater: HeatingElement,
    timer: CookTimer,
    display: ConsoleDisplay,
    buzzer: Buzzer,
    notifier: ConsoleNotifier,
}

impl OvenHardware {
    /// Wire up the production drivers from configuration.
    pub fn new(config: &OvenConfig) -> Self {
        Self {
            heater: HeatingElement::new(config.max_power_watts),
            timer: CookTimer::new(),
            display: ConsoleDisplay::new(),
            buzzer: Buzzer::new(config.buzz_bursts),
            notifier: ConsoleNotifier::new(),
        }
    }

    /// Advance the countdown by one second (called by the host tick loop).
    pub fn second_elapsed(&mut self) -> Option<TimerEvent> {
        self.timer.second_elapsed()
    }

    pub fn heater_state(&self) -> HeaterState {
        self.heater.state()
    }

    pub fn timer_running(&self) -> bool {
        self.timer.is_running()
    }

    /// The `(minutes, seconds)` currently on the display, if anything.
    pub fn display_shown(&self) -> Option<(u32, u32)> {
        self.display.shown()
    }
}

// ── HeaterPort implementation ─────────────────────────────────

impl HeaterPort for OvenHardware {
    fn turn_on(&mut self, power_watts: u32) -> Result<()> {
        self.heater.turn_on(power_watts)
    }

    fn turn_off(&mut self) {
        self.heater.turn_off();
    }

    fn max_power(&self) -> u32 {
        self.heater.max_power()
    }
}

// ── TimerPort implementation ──────────────────────────────────

impl TimerPort for OvenHardware {
    fn start(&mut self, duration_secs: u32) {
        self.timer.start(duration_secs);
    }

    fn add_time(&mut self, extra_secs: u32) {
        self.timer.add_time(extra_secs);
    }

    fn remaining_secs(&self) -> u32 {
        self.timer.remaining_secs()
    }
}

// ── Passive sink implementations ──────────────────────────────

impl DisplayPort for OvenHardware {
    fn show_time(&mut self, minutes: u32, seconds: u32) {
        self.display.show_time(minutes, seconds);
    }
}

impl BuzzerPort for OvenHardware {
    fn burst_buzz(&mut self) {
        self.buzzer.burst_buzz();
    }
}

impl NotifierPort for OvenHardware {
    fn cooking_is_done(&mut self) {
        self.notifier.cooking_is_done();
    }
}

// ── Log-based event sink ──────────────────────────────────────

/// Adapter that logs every [`OvenEvent`] to the console. A status-panel or
/// telemetry adapter would implement the same trait.
pub struct LogEventSink;

impl LogEventSink {
    pub fn new() -> Self {
        Self
    }
}

impl EventSink for LogEventSink {
    fn emit(&mut self, event: &OvenEvent) {
        match event {
            OvenEvent::StateChanged { from, to } => {
                log::info!("STATE | {:?} -> {:?}", from, to);
            }
            OvenEvent::CookStarted {
                power_watts,
                duration_secs,
            } => {
                log::info!("COOK  | started {}W for {}s", power_watts, duration_secs);
            }
            OvenEvent::CookCompleted => {
                log::info!("COOK  | completed");
            }
            OvenEvent::CookStopped => {
                log::info!("COOK  | stopped");
            }
            OvenEvent::TimeExtended { extra_secs } => {
                log::info!("COOK  | +{}s", extra_secs);
            }
        }
    }
}
