//! System configuration parameters
//!
//! All tunable parameters for the oven control core. Values can be
//! overridden via a JSON config file passed to the simulation binary.

use serde::{Deserialize, Serialize};

/// Core system configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OvenConfig {
    // --- Heating element ---
    /// Maximum heating power the element accepts (watts)
    pub max_power_watts: u32,

    // --- Timing ---
    /// Countdown tick interval (milliseconds)
    pub tick_interval_ms: u32,

    // --- Completion signalling ---
    /// Number of buzzer bursts emitted when a cook cycle expires
    pub buzz_bursts: u8,
}

impl Default for OvenConfig {
    fn default() -> Self {
        Self {
            // Heating element
            max_power_watts: 700,

            // Timing: 1 Hz countdown
            tick_interval_ms: 1000,

            // Completion signalling
            buzz_bursts: 3,
        }
    }
}
