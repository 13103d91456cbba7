//! Cook-control core — pure domain logic, zero I/O.
//!
//! This module contains the business rules of the oven: the cook
//! controller's state machine and its coordination contract with the
//! heating element, timer, display, buzzer and notifier. All interaction
//! with the outside world happens through **port traits** defined in
//! [`ports`], keeping this layer fully testable without real peripherals.

pub mod commands;
pub mod controller;
pub mod events;
pub mod ports;
