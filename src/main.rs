//! Bike computer firmware for Raspberry Pi Pico 2 (RP2350)
//!
//! Measures wheel rotation with a Hall sensor, shows speed, distance, gear
//! advice and RPM on a 16x2 character LCD, and beeps when it gets dark.
//!
//! # Architecture
//!
//! - Rotation capture: async task on a high-priority `InterruptExecutor`,
//!   woken on each falling edge of the Hall sensor. It preempts the main loop.
//! - Main loop: blocking [`BikeComputer`](bike_computer::BikeComputer) pass
//!   loop on the thread-mode stack. Beeps and debounce waits block it, not the
//!   capture.
//!
//! # Button Controls
//!
//! - **Reset**: Clear trip distance and rotation timing
//! - **Mode**: Toggle Speed/Distance ↔ Gear/RPM
//!
//! Host builds compile an empty binary so `cargo test` can run the library tests.

#![cfg_attr(target_arch = "arm", no_std, no_main)]

// Modules only used in the binary (not testable on host)
#[cfg(target_arch = "arm")]
mod board;
#[cfg(target_arch = "arm")]
mod firmware;
#[cfg(target_arch = "arm")]
mod lcd;

#[cfg(not(target_arch = "arm"))]
fn main() {}
