//! Fixed timing constants.
//!
//! All feedback and debounce waits are blocking delays on the main loop.
//! The rotation capture keeps running underneath them.

// =============================================================================
// Rotation
// =============================================================================

/// Time without a pulse after which the wheel is considered stopped (2 s).
pub const STALE_PULSE_US: u64 = 2_000_000;

/// Number of speed samples averaged for the displayed speed.
pub const SPEED_SAMPLES: usize = 5;

// =============================================================================
// Buzzer
// =============================================================================

/// Duration of a single feedback beep.
pub const BEEP_MS: u32 = 200;

/// Pause after each beep of the low-light warning sequence.
pub const WARNING_BEEP_GAP_MS: u32 = 200;

/// Number of beeps in the low-light warning sequence.
pub const WARNING_BEEPS: usize = 3;

/// Pause that closes the low-light warning sequence.
pub const WARNING_TAIL_MS: u32 = 1000;

// =============================================================================
// Buttons
// =============================================================================

/// Blocking wait after a handled button press.
pub const DEBOUNCE_MS: u32 = 200;
