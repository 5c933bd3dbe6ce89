//! Speed and RPM derived from the latest rotation interval.
//!
//! Both values come from the same raw interval: RPM is the wheel rotation
//! rate, not a gear-adjusted cadence.
//!
//! ```text
//! rotations/s = 1 / interval_s
//! speed_kmh   = rotations/s * circumference_m * 3600 / 1000
//! rpm         = 60 / interval_s
//! ```

use crate::config::STALE_PULSE_US;
use crate::state::RotationSnapshot;

/// Microseconds per second, as a float divisor.
const US_PER_SECOND: f32 = 1_000_000.0;

/// Instantaneous speed in km/h.
///
/// Returns 0 when no interval has been recorded yet or when the last pulse is
/// older than [`STALE_PULSE_US`] (wheel stopped).
pub fn estimate_speed(
    rotation: &RotationSnapshot,
    now_us: u64,
    wheel_circumference_m: f32,
) -> f32 {
    if !rotation.has_interval() || rotation.since_last_pulse_us(now_us) > STALE_PULSE_US {
        return 0.0;
    }

    let interval_s = rotation.interval_us as f32 / US_PER_SECOND;
    let rotations_per_second = 1.0 / interval_s;
    rotations_per_second * wheel_circumference_m * 3600.0 / 1000.0
}

/// Wheel revolutions per minute, 0 when no interval has been recorded.
///
/// There is no staleness check here: a stopped wheel keeps reporting the
/// rate of its last rotation until the next reset.
pub fn estimate_rpm(rotation: &RotationSnapshot) -> f32 {
    if !rotation.has_interval() {
        return 0.0;
    }
    60.0 / (rotation.interval_us as f32 / US_PER_SECOND)
}

// =============================================================================
// Unit Tests
// =============================================================================
