//! Display mode selection.
//!
//! Switched with the mode button.
//!
//! # Modes
//!
//! - [`DisplayMode::SpeedDistance`]: average speed and trip distance
//! - [`DisplayMode::GearRpm`]: recommended gear ratio and wheel RPM

/// What the LCD shows on each measurement refresh.
#[derive(Clone, Copy, PartialEq, Eq, Default, Debug)]
pub enum DisplayMode {
    /// Row 1: "Viteza: <avg> km/h" or "STOP". Row 2: "Distanta: <km> km".
    #[default]
    SpeedDistance,

    /// Row 1: "Trepte: <ratio>". Row 2: "RPM: <rpm>".
    GearRpm,
}

impl DisplayMode {
    /// Toggle to the other mode (SpeedDistance ↔ GearRpm).
    #[inline]
    pub const fn toggle(self) -> Self {
        match self {
            Self::SpeedDistance => Self::GearRpm,
            Self::GearRpm => Self::SpeedDistance,
        }
    }

    /// Short name for logs.
    pub const fn label(self) -> &'static str {
        match self {
            Self::SpeedDistance => "speed/distance",
            Self::GearRpm => "gear/rpm",
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
