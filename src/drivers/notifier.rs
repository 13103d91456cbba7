//! Completion notifier (console rendition).
//!
//! The user-facing completion channel. A real oven would hand this to its
//! user-interface layer; the host build announces completion on the log.

use log::info;

use crate::cook::ports::NotifierPort;

pub struct ConsoleNotifier;

impl ConsoleNotifier {
    pub fn new() -> Self {
        Self
    }
}

impl NotifierPort for ConsoleNotifier {
    fn cooking_is_done(&mut self) {
        info!("notifier: cooking is done");
    }
}
