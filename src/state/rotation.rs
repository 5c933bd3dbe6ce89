//! Wheel rotation state shared between the Hall sensor capture and the main loop.
//!
//! The capture runs in interrupt context and may preempt the main loop at any
//! point. The (timestamp, interval, distance) triple is therefore kept behind a
//! critical-section mutex and only ever read or written as a whole, so the main
//! loop never sees a new timestamp paired with a stale interval.
//!
//! Every falling edge counts as one full wheel rotation. There is no filtering
//! of contact bounce or stray triggers; a noisy sensor over-counts distance.

use core::cell::Cell;

use embassy_sync::blocking_mutex::Mutex;
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;

/// Consistent copy of the rotation state.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct RotationSnapshot {
    /// Timestamp of the last magnet pass (µs since boot).
    pub last_pulse_us: u64,
    /// Time between the last two magnet passes (µs), saturated at `u32::MAX`.
    /// 0 means no interval yet.
    pub interval_us: u32,
    /// Cumulative distance since boot or the last reset (km).
    pub distance_km: f32,
}

impl RotationSnapshot {
    /// State at boot and after a reset.
    pub const ZERO: Self = Self {
        last_pulse_us: 0,
        interval_us: 0,
        distance_km: 0.0,
    };

    /// Whether at least one interval has been recorded.
    #[inline]
    pub const fn has_interval(&self) -> bool { self.interval_us != 0 }

    /// Time elapsed since the last magnet pass.
    #[inline]
    pub const fn since_last_pulse_us(
        &self,
        now_us: u64,
    ) -> u64 {
        now_us.saturating_sub(self.last_pulse_us)
    }
}

/// Rotation state guarded by a critical section.
///
/// `const`-constructible so it can live in a `static` shared with the
/// interrupt-priority capture task.
pub struct RotationState {
    inner: Mutex<CriticalSectionRawMutex, Cell<RotationSnapshot>>,
}

impl RotationState {
    /// Create a zeroed rotation state.
    pub const fn new() -> Self {
        Self {
            inner: Mutex::new(Cell::new(RotationSnapshot::ZERO)),
        }
    }

    /// Record one magnet pass at `now_us` and add one rotation worth of distance.
    ///
    /// Called from the capture context; bounded and allocation free.
    pub fn record_pulse(
        &self,
        now_us: u64,
        distance_per_pulse_km: f32,
    ) {
        self.inner.lock(|cell| {
            let prev = cell.get();
            let interval_us = now_us.saturating_sub(prev.last_pulse_us);
            cell.set(RotationSnapshot {
                last_pulse_us: now_us,
                interval_us: u32::try_from(interval_us).unwrap_or(u32::MAX),
                distance_km: prev.distance_km + distance_per_pulse_km,
            });
        });
    }

    /// Copy the whole state atomically.
    pub fn snapshot(&self) -> RotationSnapshot { self.inner.lock(Cell::get) }

    /// Zero distance, interval and last pulse time.
    pub fn reset(&self) { self.inner.lock(|cell| cell.set(RotationSnapshot::ZERO)) }
}

impl Default for RotationState {
    fn default() -> Self { Self::new() }
}

// =============================================================================
// Unit Tests
// =============================================================================
