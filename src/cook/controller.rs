//! Cook controller — the orchestrating state machine.
//!
//! [`CookController`] validates cooking requests, drives the heating
//! element, tracks the countdown through the timer port, and signals
//! completion to the display, buzzer and notifier. All I/O flows through
//! port traits injected at call sites, making the entire controller
//! testable with mock collaborators.
//!
//! ```text
//!  CookCommand ──▶ ┌────────────────────────┐ ──▶ HeaterPort · TimerPort
//!                  │      CookController     │
//!  TimerEvent  ──▶ │     Idle ⇄ Cooking      │ ──▶ DisplayPort · BuzzerPort
//!                  └────────────────────────┘     NotifierPort · EventSink
//! ```
//!
//! Single-threaded by contract: public operations and `on_timer_event` must
//! not be invoked concurrently without external synchronisation if the host
//! delivers timer signals on a separate thread. Every handler performs only
//! bounded, non-blocking work.

use log::{debug, info, warn};

use crate::error::{Error, Result};

use super::commands::CookCommand;
use super::events::{OvenEvent, TimerEvent};
use super::ports::{BuzzerPort, DisplayPort, EventSink, HeaterPort, NotifierPort, TimerPort};

// ───────────────────────────────────────────────────────────────
// State identity
// ───────────────────────────────────────────────────────────────

/// The controller's two states. No separate terminal state: the controller
/// returns to `Idle` after every cook cycle and may be restarted
/// indefinitely.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CookState {
    Idle,
    Cooking,
}

// ───────────────────────────────────────────────────────────────
// CookController
// ───────────────────────────────────────────────────────────────

/// The cook controller orchestrates a single oven session.
pub struct CookController {
    state: CookState,
    /// Mirror of the heating element's bound, read once at construction and
    /// exposed for client-side validation.
    max_power: u32,
}

impl CookController {
    /// Construct the controller, reading the power bound from the heating
    /// element it will drive. Starts in `Idle`.
    pub fn new(heater: &impl HeaterPort) -> Self {
        Self {
            state: CookState::Idle,
            max_power: heater.max_power(),
        }
    }

    // ── Operations ────────────────────────────────────────────

    /// Begin a cook cycle: energise the heating element at `power_watts`
    /// and start the countdown for `duration_secs`.
    ///
    /// The controller performs no range check of its own — the heating
    /// element's `OutOfRange` / `AlreadyActive` failures propagate to the
    /// caller unmodified, and on failure nothing has been started.
    pub fn start_cooking(
        &mut self,
        power_watts: u32,
        duration_secs: u32,
        hw: &mut (impl HeaterPort + TimerPort),
        sink: &mut impl EventSink,
    ) -> Result<()> {
        hw.turn_on(power_watts)?;
        hw.start(duration_secs);

        info!("cook: started at {power_watts} W for {duration_secs}s");
        sink.emit(&OvenEvent::CookStarted {
            power_watts,
            duration_secs,
        });
        self.transition(CookState::Cooking, sink);
        Ok(())
    }

    /// Cancel the current cook cycle. Valid in any state: de-energising an
    /// already-off heating element is a safe no-op. No buzzer and no
    /// completion notice — stop is a distinct outcome from expiration.
    pub fn stop(&mut self, hw: &mut impl HeaterPort, sink: &mut impl EventSink) {
        hw.turn_off();
        if self.state == CookState::Cooking {
            info!("cook: stopped before expiration");
            sink.emit(&OvenEvent::CookStopped);
            self.transition(CookState::Idle, sink);
        }
    }

    /// Extend the running countdown by `delta_secs`.
    ///
    /// A negative delta fails with `OutOfRange` in any state and changes
    /// nothing. Non-negative deltas are forwarded to the timer
    /// unconditionally; while idle the timer is stopped and the extension
    /// has no effect (see DESIGN.md).
    pub fn add_time(
        &mut self,
        delta_secs: i32,
        hw: &mut impl TimerPort,
        sink: &mut impl EventSink,
    ) -> Result<()> {
        if delta_secs < 0 {
            return Err(Error::OutOfRange {
                value: i64::from(delta_secs),
                min: 0,
                max: i64::from(i32::MAX),
            });
        }

        let extra_secs = delta_secs as u32;
        hw.add_time(extra_secs);

        if self.state == CookState::Cooking {
            info!("cook: extended by {extra_secs}s");
            sink.emit(&OvenEvent::TimeExtended { extra_secs });
        } else {
            warn!("cook: time extension while idle has no effect");
        }
        Ok(())
    }

    // ── Timer event dispatch ──────────────────────────────────

    /// Entry point for timer-emitted messages, dispatched on kind.
    ///
    /// Signals arriving while `Idle` are stale deliveries from a countdown
    /// that outlived a manual stop; they are dropped without side effects.
    pub fn on_timer_event(
        &mut self,
        event: TimerEvent,
        hw: &mut (impl HeaterPort + DisplayPort + BuzzerPort + NotifierPort),
        sink: &mut impl EventSink,
    ) {
        if self.state != CookState::Cooking {
            debug!("cook: ignoring stale timer event {event:?} while idle");
            return;
        }

        match event {
            TimerEvent::Tick { remaining_secs } => {
                // Pure integer split; the timer guarantees a non-negative
                // remaining count at tick time.
                let minutes = remaining_secs / 60;
                let seconds = remaining_secs % 60;
                debug!("cook: {remaining_secs}s remaining ({minutes:02}:{seconds:02})");
                hw.show_time(minutes, seconds);
            }
            TimerEvent::Expired => {
                hw.turn_off();
                hw.burst_buzz();
                hw.cooking_is_done();

                info!("cook: cycle complete");
                sink.emit(&OvenEvent::CookCompleted);
                self.transition(CookState::Idle, sink);
            }
        }
    }

    // ── Command handling ──────────────────────────────────────

    /// Process an inbound command from a host adapter (button panel,
    /// serial console, test harness).
    pub fn handle_command(
        &mut self,
        cmd: CookCommand,
        hw: &mut (impl HeaterPort + TimerPort),
        sink: &mut impl EventSink,
    ) -> Result<()> {
        match cmd {
            CookCommand::Start {
                power_watts,
                duration_secs,
            } => self.start_cooking(power_watts, duration_secs, hw, sink),
            CookCommand::Stop => {
                self.stop(hw, sink);
                Ok(())
            }
            CookCommand::AddTime { delta_secs } => self.add_time(delta_secs, hw, sink),
        }
    }

    // ── Queries ───────────────────────────────────────────────

    /// The heating element's configured maximum power, established at
    /// construction and immutable thereafter.
    pub fn max_power(&self) -> u32 {
        self.max_power
    }

    /// Current controller state.
    pub fn state(&self) -> CookState {
        self.state
    }

    /// True strictly between a successful start and the subsequent
    /// stop/expire event.
    pub fn is_cooking(&self) -> bool {
        self.state == CookState::Cooking
    }

    // ── Internal ──────────────────────────────────────────────

    fn transition(&mut self, to: CookState, sink: &mut impl EventSink) {
        let from = self.state;
        if from != to {
            self.state = to;
            sink.emit(&OvenEvent::StateChanged { from, to });
        }
    }
}
