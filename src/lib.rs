//! Microwave oven cook-control core.
//!
//! The [`cook`] module holds the domain logic (controller state machine,
//! port traits, command and event types); [`drivers`] holds the production
//! implementations wired together by the simulation binary.

#![deny(unused_must_use)]

pub mod config;
pub mod cook;
pub mod drivers;
pub mod error;

pub use error::{Error, Result};
