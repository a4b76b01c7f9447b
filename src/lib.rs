#![cfg_attr(not(test), no_std)]

//! # pico-ticker
//! ## A two-mode LCD1602 ticker for the Raspberry Pi Pico
//!
//! Features:
//! - Live temperature, heat index and humidity readout
//! - Rotating stored messages, never the same one twice in a row
//! - Trigger input switching between the two, checked every iteration
//! - Two-row text layout that pads and truncates to the LCD width
//!
//! Everything here is hardware-agnostic and tested on the host; the
//! firmware binary (`embedded` feature) binds it to rp-pico peripherals.

mod logging;

pub mod config;
pub mod error;
pub mod layout;
pub mod random;
pub mod rendering;
pub mod sensors;
pub mod texts;
pub mod ticker;
pub mod timer;

pub use error::{Error, Result};
pub use ticker::{Devices, Mode, Outcome, Ticker};
