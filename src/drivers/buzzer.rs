//! Buzzer driver (console rendition).
//!
//! Emits a configurable number of audible bursts when a cook cycle
//! completes. The burst count comes from
//! [`OvenConfig::buzz_bursts`](crate::config::OvenConfig).

use log::info;

use crate::cook::ports::BuzzerPort;

pub struct Buzzer {
    bursts: u8,
}

impl Buzzer {
    pub fn new(bursts: u8) -> Self {
        Self { bursts }
    }
}

impl BuzzerPort for Buzzer {
    fn burst_buzz(&mut self) {
        for _ in 0..self.bursts {
            info!("buzzer: bzzzt");
        }
    }
}
