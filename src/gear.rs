//! Gear ratio recommendation from average speed.
//!
//! Brackets are half-open `[lower, upper)`: a speed exactly on a threshold
//! belongs to the bracket above. There is no hysteresis; the refresh cadence
//! is slow enough that flicker at a boundary is harmless.
//!
//! | Average speed (km/h) | Ratio |
//! |----------------------|-------|
//! | < 5                  | 1:1   |
//! | 5 - 10               | 1:3   |
//! | 10 - 15              | 2:5   |
//! | 15 - 25              | 3:5   |
//! | >= 25                | 3:7   |

// =============================================================================
// Thresholds
// =============================================================================

/// Upper bound (exclusive) of the 1:1 bracket.
pub const GEAR_1_1_MAX_KMH: f32 = 5.0;

/// Upper bound (exclusive) of the 1:3 bracket.
pub const GEAR_1_3_MAX_KMH: f32 = 10.0;

/// Upper bound (exclusive) of the 2:5 bracket.
pub const GEAR_2_5_MAX_KMH: f32 = 15.0;

/// Upper bound (exclusive) of the 3:5 bracket. Anything faster is 3:7.
pub const GEAR_3_5_MAX_KMH: f32 = 25.0;

// Compile-time validation: thresholds must be in ascending order
const _: () = assert!(GEAR_1_1_MAX_KMH < GEAR_1_3_MAX_KMH);
const _: () = assert!(GEAR_1_3_MAX_KMH < GEAR_2_5_MAX_KMH);
const _: () = assert!(GEAR_2_5_MAX_KMH < GEAR_3_5_MAX_KMH);

// =============================================================================
// Gear
// =============================================================================

/// Recommended gear ratio.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Gear {
    OneOne,
    OneThree,
    TwoFive,
    ThreeFive,
    ThreeSeven,
}

impl Gear {
    /// Pick the ratio for an average speed in km/h.
    pub fn for_speed(speed_kmh: f32) -> Self {
        if speed_kmh < GEAR_1_1_MAX_KMH {
            Self::OneOne
        } else if speed_kmh < GEAR_1_3_MAX_KMH {
            Self::OneThree
        } else if speed_kmh < GEAR_2_5_MAX_KMH {
            Self::TwoFive
        } else if speed_kmh < GEAR_3_5_MAX_KMH {
            Self::ThreeFive
        } else {
            Self::ThreeSeven
        }
    }

    /// Ratio as shown on the LCD.
    pub const fn label(self) -> &'static str {
        match self {
            Self::OneOne => "1:1",
            Self::OneThree => "1:3",
            Self::TwoFive => "2:5",
            Self::ThreeFive => "3:5",
            Self::ThreeSeven => "3:7",
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
