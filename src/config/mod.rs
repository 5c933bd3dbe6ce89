//! Application configuration.
//!
//! - `layout`: Character LCD geometry
//! - `timing`: Fixed durations for feedback, debounce and staleness
//!
//! Tunable values (wheel size, measurement cadence, light threshold and alarm
//! cooldown) are grouped in [`Config`] and fixed at compile time.

pub mod layout;
pub mod timing;

// Re-export layout and timing constants at config level for convenience
pub use layout::{LCD_COLS, LCD_ROWS, LINE_CAPACITY};
pub use timing::{
    BEEP_MS,
    DEBOUNCE_MS,
    SPEED_SAMPLES,
    STALE_PULSE_US,
    WARNING_BEEP_GAP_MS,
    WARNING_BEEPS,
    WARNING_TAIL_MS,
};

/// Immutable bicycle computer configuration.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Config {
    /// Wheel circumference in meters.
    pub wheel_circumference_m: f32,
    /// Interval between speed samples and display refreshes.
    pub measurement_interval_ms: u32,
    /// Light sensor readings below this value raise the low-light alarm.
    /// Expressed on a 10-bit (0-1023) scale.
    pub low_light_threshold: u16,
    /// Minimum time between two light sensor evaluations.
    pub alarm_cooldown_ms: u32,
}

impl Config {
    /// Stock configuration: 2.2 m wheel, 3 s refresh, threshold 300, 3 min cooldown.
    pub const DEFAULT: Self = Self {
        wheel_circumference_m: 2.2,
        measurement_interval_ms: 3000,
        low_light_threshold: 300,
        alarm_cooldown_ms: 180_000,
    };

    /// Distance covered by one wheel rotation, in kilometers.
    #[inline]
    pub const fn distance_per_pulse_km(&self) -> f32 { self.wheel_circumference_m / 1000.0 }
}

impl Default for Config {
    fn default() -> Self { Self::DEFAULT }
}

const _: () = assert!(Config::DEFAULT.wheel_circumference_m > 0.0);
const _: () = assert!(Config::DEFAULT.measurement_interval_ms > 0);
const _: () = assert!(Config::DEFAULT.alarm_cooldown_ms > Config::DEFAULT.measurement_interval_ms);

// =============================================================================
// Unit Tests
// =============================================================================
