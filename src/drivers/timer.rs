//! Countdown timer driver.
//!
//! A software countdown decremented by an external 1 Hz tick source. The
//! host loop calls [`CookTimer::second_elapsed`] once per tick interval and
//! dispatches the returned [`TimerEvent`] to the controller; the timer
//! itself owns no thread and no clock.
//!
//! A tick always carries a positive remaining count; the final second
//! produces the terminal `Expired` signal instead of a tick, after which
//! the countdown stops.

use log::debug;

use crate::cook::events::TimerEvent;
use crate::cook::ports::TimerPort;

pub struct CookTimer {
    remaining_secs: u32,
    running: bool,
}

impl CookTimer {
    pub fn new() -> Self {
        Self {
            remaining_secs: 0,
            running: false,
        }
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Advance the countdown by one second.
    ///
    /// Returns the signal to deliver to the controller, or `None` when the
    /// timer is stopped.
    pub fn second_elapsed(&mut self) -> Option<TimerEvent> {
        if !self.running {
            return None;
        }

        self.remaining_secs = self.remaining_secs.saturating_sub(1);
        if self.remaining_secs > 0 {
            Some(TimerEvent::Tick {
                remaining_secs: self.remaining_secs,
            })
        } else {
            self.running = false;
            Some(TimerEvent::Expired)
        }
    }
}

impl Default for CookTimer {
    fn default() -> Self {
        Self::new()
    }
}

impl TimerPort for CookTimer {
    fn start(&mut self, duration_secs: u32) {
        debug!("timer: counting down from {duration_secs}s");
        self.remaining_secs = duration_secs;
        self.running = true;
    }

    fn add_time(&mut self, extra_secs: u32) {
        // Extensions only apply to a running countdown; a stopped timer
        // stays at zero.
        if self.running {
            debug!("timer: extended by {extra_secs}s");
            self.remaining_secs = self.remaining_secs.saturating_add(extra_secs);
        }
    }

    fn remaining_secs(&self) -> u32 {
        self.remaining_secs
    }
}
