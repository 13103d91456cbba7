//! Port traits — the boundary between the cook controller and its collaborators.
//!
//! ```text
//!   Driver ──▶ Port trait ──▶ CookController (domain)
//! ```
//!
//! Drivers (heating element, timer, display, buzzer, notifier) implement
//! these traits. The [`CookController`](super::controller::CookController)
//! consumes them via generics injected at call sites, so the domain core
//! never touches concrete hardware and every collaborator can be replaced
//! by a recording mock in tests.

use crate::error::Result;

use super::events::OvenEvent;

// ───────────────────────────────────────────────────────────────
// Heating element port (domain → power stage)
// ───────────────────────────────────────────────────────────────

/// The heating element capability.
///
/// Implementations enforce the power bound themselves: the controller
/// forwards the requested wattage unchecked and propagates failures to its
/// caller unmodified.
pub trait HeaterPort {
    /// Energise the element at `power_watts`.
    ///
    /// Fails with [`Error::OutOfRange`](crate::error::Error::OutOfRange)
    /// when the power is outside `[1, max_power]`, and with
    /// [`Error::AlreadyActive`](crate::error::Error::AlreadyActive) when the
    /// element is already on. Either failure leaves the element untouched.
    fn turn_on(&mut self, power_watts: u32) -> Result<()>;

    /// De-energise the element. Idempotent: a second call is a silent no-op.
    fn turn_off(&mut self);

    /// The configured maximum power (watts), fixed at construction.
    fn max_power(&self) -> u32;
}

// ───────────────────────────────────────────────────────────────
// Timer port (domain → countdown)
// ───────────────────────────────────────────────────────────────

/// The countdown timer capability.
///
/// The timer owns the remaining-time value; the controller reads it only
/// transiently when formatting display output. Tick and expiration signals
/// travel the other way, as [`TimerEvent`](super::events::TimerEvent)
/// messages handed to the controller's event entry point.
pub trait TimerPort {
    /// Begin a countdown of `duration_secs` seconds, replacing any
    /// countdown already in progress.
    fn start(&mut self, duration_secs: u32);

    /// Extend a running countdown by `extra_secs`. Sign validation happens
    /// in the controller; an extension while the timer is stopped is a
    /// no-op.
    fn add_time(&mut self, extra_secs: u32);

    /// Seconds left in the current countdown (0 when stopped).
    fn remaining_secs(&self) -> u32;
}

// ───────────────────────────────────────────────────────────────
// Passive sinks (domain → user-facing surfaces)
// ───────────────────────────────────────────────────────────────

/// Renders the remaining cook time.
pub trait DisplayPort {
    /// One-way notification; `minutes`/`seconds` are already split out.
    fn show_time(&mut self, minutes: u32, seconds: u32);
}

/// Emits an audible burst when a cook cycle completes.
pub trait BuzzerPort {
    fn burst_buzz(&mut self);
}

/// User-facing completion channel.
pub trait NotifierPort {
    fn cooking_is_done(&mut self);
}

// ───────────────────────────────────────────────────────────────
// Event sink port (domain → logging / telemetry)
// ───────────────────────────────────────────────────────────────

/// The controller emits structured [`OvenEvent`]s through this port.
/// Adapters decide where they go (serial log, status panel, test recorder).
pub trait EventSink {
    fn emit(&mut self, event: &OvenEvent);
}
