//! Inbound commands to the cook controller.
//!
//! These represent actions requested by the outside world (button panel,
//! serial console, test harness) that the
//! [`CookController`](super::controller::CookController) interprets and
//! acts upon.

/// Commands that host adapters can send into the cook controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CookCommand {
    /// Begin a cook cycle at `power_watts` for `duration_secs`.
    Start {
        power_watts: u32,
        duration_secs: u32,
    },

    /// Cancel the current cook cycle (valid in any state).
    Stop,

    /// Extend the running countdown by `delta_secs`.
    /// Negative deltas are rejected with `OutOfRange`.
    AddTime { delta_secs: i32 },
}
