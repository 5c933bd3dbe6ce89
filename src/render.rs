//! Text rendering for the 16x2 character LCD.
//!
//! # Screens
//!
//! | Screen         | Row 0                   | Row 1                  |
//! |----------------|-------------------------|------------------------|
//! | Boot           | `Viteza: 0 km/h`        |                        |
//! | Speed/Distance | `Viteza: 12.34 km/h`    | `Distanta: 1.23 km`    |
//! | Stopped        | `Viteza: STOP`          | `Distanta: 1.23 km`    |
//! | Gear/RPM       | `Trepte: 2:5`           | `RPM: 97.50`           |
//! | Low light      | `Aprinde luminile!`     |                        |
//!
//! Rows are built in fixed-capacity strings, then written after a full clear.

use core::fmt::Write;

use heapless::String;

use crate::config::LINE_CAPACITY;
use crate::gear::Gear;
use crate::hal::CharDisplay;
use crate::state::DisplayMode;

/// One rendered LCD row.
pub type Line = String<LINE_CAPACITY>;

/// Text shown right after power-up.
pub const BOOT_TEXT: &str = "Viteza: 0 km/h";

/// Low-light warning ("Turn on the lights!").
pub const LOW_LIGHT_TEXT: &str = "Aprinde luminile!";

/// Values shown by one measurement refresh.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Measurement {
    pub mode: DisplayMode,
    /// Smoothed speed (km/h).
    pub average_kmh: f32,
    /// Trip distance (km).
    pub distance_km: f32,
    /// Wheel RPM from the latest interval, not smoothed.
    pub rpm: f32,
}

/// Build both rows for a measurement.
pub fn format_lines(m: &Measurement) -> (Line, Line) {
    let mut top = Line::new();
    let mut bottom = Line::new();

    // Overflow only truncates the row, nothing to recover
    match m.mode {
        DisplayMode::SpeedDistance => {
            if m.average_kmh > 0.0 {
                let _ = write!(top, "Viteza: {:.2} km/h", m.average_kmh);
            } else {
                let _ = top.push_str("Viteza: STOP");
            }
            let _ = write!(bottom, "Distanta: {:.2} km", m.distance_km);
        }
        DisplayMode::GearRpm => {
            let _ = write!(top, "Trepte: {}", Gear::for_speed(m.average_kmh).label());
            let _ = write!(bottom, "RPM: {:.2}", m.rpm);
        }
    }

    (top, bottom)
}

/// Clear the display and show a measurement.
pub fn show_measurement<D: CharDisplay>(
    display: &mut D,
    m: &Measurement,
) -> Result<(), D::Error> {
    let (top, bottom) = format_lines(m);
    display.clear()?;
    display.set_cursor(0, 0)?;
    display.write_str(&top)?;
    display.set_cursor(0, 1)?;
    display.write_str(&bottom)
}

/// Clear the display and show the low-light warning.
pub fn show_low_light_warning<D: CharDisplay>(display: &mut D) -> Result<(), D::Error> {
    display.clear()?;
    display.write_str(LOW_LIGHT_TEXT)
}

/// Clear the display and show the power-up placeholder.
pub fn show_boot_screen<D: CharDisplay>(display: &mut D) -> Result<(), D::Error> {
    display.clear()?;
    display.write_str(BOOT_TEXT)
}

// =============================================================================
// Unit Tests
// =============================================================================
