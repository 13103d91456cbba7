//! Seven-segment display driver (console rendition).
//!
//! Renders the remaining cook time in `MM:SS` form through the log facade.
//! Keeps the last rendered value in memory so the host and tests can read
//! back what is currently shown.

use log::info;

use crate::cook::ports::DisplayPort;

pub struct ConsoleDisplay {
    shown: Option<(u32, u32)>,
}

impl ConsoleDisplay {
    pub fn new() -> Self {
        Self { shown: None }
    }

    /// The `(minutes, seconds)` currently on the display, if anything.
    pub fn shown(&self) -> Option<(u32, u32)> {
        self.shown
    }
}

impl Default for ConsoleDisplay {
    fn default() -> Self {
        Self::new()
    }
}

impl DisplayPort for ConsoleDisplay {
    fn show_time(&mut self, minutes: u32, seconds: u32) {
        info!("display: {minutes:02}:{seconds:02}");
        self.shown = Some((minutes, seconds));
    }
}
