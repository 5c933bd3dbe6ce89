//! Rolling window of recent speed samples.
//!
//! A fixed ring of [`SPEED_SAMPLES`] slots, zero-filled at startup. Each push
//! overwrites the oldest slot. The average always divides by the full window
//! size, so the first few averages after boot are pulled toward zero.

use crate::config::SPEED_SAMPLES;

/// Ring buffer of speed samples in km/h.
#[derive(Clone, Debug)]
pub struct SpeedSamples {
    buffer: [f32; SPEED_SAMPLES],
    /// Next slot to write, always in `0..SPEED_SAMPLES`.
    cursor: usize,
}

impl SpeedSamples {
    /// Create a zero-filled window.
    pub const fn new() -> Self {
        Self {
            buffer: [0.0; SPEED_SAMPLES],
            cursor: 0,
        }
    }

    /// Overwrite the slot at the cursor and advance it.
    pub fn push(
        &mut self,
        speed_kmh: f32,
    ) {
        self.buffer[self.cursor] = speed_kmh;
        self.cursor = (self.cursor + 1) % SPEED_SAMPLES;
    }

    /// Arithmetic mean over every slot, written or not.
    pub fn average(&self) -> f32 { self.buffer.iter().sum::<f32>() / SPEED_SAMPLES as f32 }

    /// Current write cursor.
    #[cfg(test)]
    pub(crate) const fn cursor(&self) -> usize { self.cursor }
}

impl Default for SpeedSamples {
    fn default() -> Self { Self::new() }
}

// =============================================================================
// Unit Tests
// =============================================================================
