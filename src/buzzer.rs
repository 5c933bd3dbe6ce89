//! Buzzer feedback.
//!
//! Every pattern is a blocking sequence of level changes and delays. While a
//! pattern plays the main loop does nothing else; the rotation capture still
//! runs at interrupt priority.

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::OutputPin;

use crate::config::{BEEP_MS, WARNING_BEEP_GAP_MS, WARNING_BEEPS, WARNING_TAIL_MS};

/// Active-high buzzer on a digital output.
pub struct Buzzer<P> {
    pin: P,
}

impl<P: OutputPin> Buzzer<P> {
    /// Wrap the buzzer pin and make sure it starts silent.
    pub fn new(mut pin: P) -> Self {
        pin.set_low().ok();
        Self { pin }
    }

    /// One 200 ms beep (button feedback).
    pub fn short_beep(
        &mut self,
        delay: &mut impl DelayNs,
    ) {
        self.pin.set_high().ok();
        delay.delay_ms(BEEP_MS);
        self.pin.set_low().ok();
    }

    /// Low-light warning: three beeps, each followed by a 200 ms pause, then 1 s of silence.
    pub fn warning_sequence(
        &mut self,
        delay: &mut impl DelayNs,
    ) {
        for _ in 0..WARNING_BEEPS {
            self.short_beep(delay);
            delay.delay_ms(WARNING_BEEP_GAP_MS);
        }
        delay.delay_ms(WARNING_TAIL_MS);
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
