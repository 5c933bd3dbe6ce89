//! State management for the bike computer.
//!
//! - `rotation`: Wheel pulse timing and distance shared with the capture task
//! - `speed_samples`: Rolling window of speed samples
//! - `display_mode`: Display mode enum (speed/distance, gear/rpm)
//! - `input`: Button polling and action dispatch

mod display_mode;
mod input;
mod rotation;
mod speed_samples;

pub use display_mode::DisplayMode;
pub use input::{InputHandler, InputResult};
pub use rotation::{RotationSnapshot, RotationState};
pub use speed_samples::SpeedSamples;
