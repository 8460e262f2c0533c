//! Serial hex terminal firmware for the ATmega328P.
//!
//! Received UART bytes are rendered as hex digits on a seven-segment
//! display; a debounced button press answers with the device ID string.
//! The hardware-independent core builds for the host so the encoding,
//! debounce and dispatch logic can run under `cargo test`; everything
//! register-level sits behind the `atmega328p` feature.
#![cfg_attr(not(test), no_std)]

#[cfg(feature = "atmega328p")]
pub mod hal;

pub mod application;
pub mod config;
pub mod drivers;
pub mod segment;
pub mod shared;
