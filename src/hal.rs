//! Capability traits for the hardware around the bike computer.
//!
//! Digital pins and blocking delays use the `embedded-hal` 1.0 traits directly.
//! The remaining collaborators have no `embedded-hal` counterpart and are
//! described here:
//!
//! - [`Clock`]: free-running microsecond and millisecond counters
//! - [`LightSensor`]: ambient light sampling
//! - [`CharDisplay`]: character LCD with cursor addressing

/// Monotonic time source.
///
/// The microsecond counter is 64 bits wide and never wraps in practice, so
/// pulse staleness holds over any ride length. The millisecond counter is 32
/// bits wide and wraps on overflow; callers compute elapsed time with
/// `wrapping_sub`.
pub trait Clock {
    /// Microseconds since boot.
    fn now_micros(&self) -> u64;

    /// Milliseconds since boot (wraps after ~49 days).
    fn now_millis(&self) -> u32;
}

/// Ambient light sensor.
///
/// Readings are on a 10-bit scale where lower means darker. A reading is
/// always produced; conversion faults are reported as 0 by the implementation.
pub trait LightSensor {
    /// Sample the sensor once.
    fn read_level(&mut self) -> u16;
}

/// Character display addressed by column and row.
pub trait CharDisplay {
    /// Driver error type.
    type Error;

    /// Clear the whole display and home the cursor.
    fn clear(&mut self) -> Result<(), Self::Error>;

    /// Move the cursor to `col` (0-based) on `row` (0-based).
    fn set_cursor(
        &mut self,
        col: u8,
        row: u8,
    ) -> Result<(), Self::Error>;

    /// Write text at the cursor, advancing it.
    fn write_str(
        &mut self,
        text: &str,
    ) -> Result<(), Self::Error>;
}
