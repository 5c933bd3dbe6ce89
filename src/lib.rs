//! Bike computer library - testable modules for the Hall-sensor bicycle computer.
//!
//! This library contains the whole measurement and display logic and runs on
//! the host. The binary (`main.rs`) wires it to the RP2350 peripherals:
//! Hall sensor capture, 16x2 character LCD, buzzer, light sensor and buttons.
//!
//! # Data Flow
//!
//! ```text
//! Hall sensor ISR ──► RotationState ──► estimator ──► SpeedSamples ──► render
//!                          ▲                                 │
//!   reset button ──────────┘              gear ◄─────────────┘
//!   light sensor ──► LightMonitor ──► buzzer + low-light screen
//! ```
//!
//! # Testing
//!
//! Run tests on host with:
//! ```bash
//! cargo test --lib --target x86_64-unknown-linux-gnu  # Linux/macOS
//! cargo test --lib --target x86_64-pc-windows-msvc    # Windows
//! ```
//!
//! Tests run with `std` enabled (via `cfg_attr`), allowing use of the standard
//! test framework while the actual firmware runs as `no_std`.

// Use no_std only when NOT testing (tests need std for the test harness)
#![cfg_attr(not(test), no_std)]
// Crate-level lints
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_sign_loss)]

// Logging macros first so every module below can use them
pub mod logging;

// Configuration and hardware seams
pub mod config;
pub mod hal;

// Shared and per-loop state
pub mod state;

// Measurement, advice and feedback
pub mod buzzer;
pub mod estimator;
pub mod gear;
pub mod light;

// Output and orchestration
pub mod computer;
pub mod render;

#[cfg(test)]
mod testing;

// Re-export commonly used items
pub use computer::{BikeComputer, Peripherals};
pub use config::Config;
pub use state::{DisplayMode, RotationSnapshot, RotationState};
