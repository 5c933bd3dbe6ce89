//! Input handling for the reset and mode buttons.
//!
//! Buttons are active-low with pull-ups and are read by level, once per loop
//! pass, in a fixed order: reset first, then mode. A handled press beeps and
//! then blocks for [`DEBOUNCE_MS`]. There is no edge detection: a button still
//! held when the next pass reads it counts as a new press.
//!
//! A pin read error counts as "not pressed".

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::{InputPin, OutputPin};

use super::{DisplayMode, RotationState};
use crate::buzzer::Buzzer;
use crate::config::DEBOUNCE_MS;

/// Result of polling the buttons for a single loop pass.
#[derive(Default, Clone, Copy, PartialEq, Eq, Debug)]
pub struct InputResult {
    /// Trip distance and rotation timing were cleared.
    pub reset_done: bool,
    /// New display mode if the mode button was pressed.
    pub new_mode: Option<DisplayMode>,
}

/// Reset and mode buttons.
pub struct InputHandler<R, M> {
    reset_button: R,
    mode_button: M,
}

impl<R: InputPin, M: InputPin> InputHandler<R, M> {
    pub const fn new(
        reset_button: R,
        mode_button: M,
    ) -> Self {
        Self {
            reset_button,
            mode_button,
        }
    }

    /// Poll both buttons and apply their actions.
    ///
    /// The returned [`InputResult`] reports what was applied so the caller
    /// can react to it.
    ///
    /// # Arguments
    ///
    /// * `rotation` - Shared rotation state, zeroed on reset
    /// * `mode` - Current display mode, toggled on mode press
    /// * `buzzer` - Feedback beep on every handled press
    /// * `delay` - Blocking delay for the beep and debounce wait
    pub fn poll<P: OutputPin, D: DelayNs>(
        &mut self,
        rotation: &RotationState,
        mode: &mut DisplayMode,
        buzzer: &mut Buzzer<P>,
        delay: &mut D,
    ) -> InputResult {
        let mut result = InputResult::default();

        // Reset button: clear distance and rotation timing
        if is_pressed(&mut self.reset_button) {
            rotation.reset();
            buzzer.short_beep(delay);
            delay.delay_ms(DEBOUNCE_MS);
            result.reset_done = true;
        }

        // Mode button: switch between speed/distance and gear/rpm
        if is_pressed(&mut self.mode_button) {
            *mode = mode.toggle();
            buzzer.short_beep(delay);
            delay.delay_ms(DEBOUNCE_MS);
            result.new_mode = Some(*mode);
        }

        result
    }
}

/// Active-low read; errors read as released.
#[inline]
fn is_pressed(pin: &mut impl InputPin) -> bool { pin.is_low().unwrap_or(false) }

// =============================================================================
// Unit Tests
// =============================================================================
