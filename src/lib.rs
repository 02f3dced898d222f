//! Layer indicator backlight controller.
//!
//! Samples the active keymap layer and the keyboard activity state on a
//! fixed tick and drives a small LED cluster with a static level, one of
//! two blink cadences, or a breathing ramp. Exposes every module for
//! integration testing; the host runner in `main.rs` wires them to a
//! simulated board.

#![deny(unused_must_use)]

pub mod app;
pub mod brightness;
pub mod config;
pub mod error;
pub mod fsm;
pub mod scheduler;

pub mod adapters;
pub mod drivers;
