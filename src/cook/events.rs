//! Timer messages and outbound application events.
//!
//! [`TimerEvent`] is the inbound message kind the timer delivers to the
//! controller; [`OvenEvent`] is what the controller emits through the
//! [`EventSink`](super::ports::EventSink) port. Adapters on the other side
//! decide what to do with them — log to the console, drive a status panel,
//! record them in a test.

use super::controller::CookState;

/// Signals delivered by the countdown timer, dispatched on kind by
/// [`CookController::on_timer_event`](super::controller::CookController::on_timer_event).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerEvent {
    /// Periodic signal carrying the remaining cook time.
    /// The timer guarantees `remaining_secs > 0` at tick time.
    Tick { remaining_secs: u32 },

    /// Terminal signal: the requested cook duration has fully elapsed.
    Expired,
}

/// Structured events emitted by the cook controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OvenEvent {
    /// The controller transitioned between states.
    StateChanged { from: CookState, to: CookState },

    /// A cook cycle was accepted and has begun.
    CookStarted {
        power_watts: u32,
        duration_secs: u32,
    },

    /// The cook cycle ran to natural expiration.
    CookCompleted,

    /// The cook cycle was cancelled before expiration.
    CookStopped,

    /// A time extension was accepted and forwarded to the timer.
    TimeExtended { extra_secs: u32 },
}
