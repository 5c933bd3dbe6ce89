//! Low-light monitoring.
//!
//! The sensor is sampled at most once per cooldown window, on its own cadence
//! independent of the measurement interval. The window restarts on every
//! evaluation whether or not the reading was dark, so a rider in a dark
//! environment is reminded exactly once per window.

use crate::hal::LightSensor;

/// Outcome of one light monitor poll.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum LightCheck {
    /// Cooldown window still running; the sensor was not sampled.
    NotDue,
    /// Sampled, at or above the threshold.
    Bright(u16),
    /// Sampled, below the threshold: raise the alarm.
    Low(u16),
}

/// Cooldown-gated light threshold check.
pub struct LightMonitor {
    threshold: u16,
    cooldown_ms: u32,
    /// Timestamp of the last evaluation (ms, wrapping clock). 0 at boot.
    last_check_ms: u32,
}

impl LightMonitor {
    pub const fn new(
        threshold: u16,
        cooldown_ms: u32,
    ) -> Self {
        Self {
            threshold,
            cooldown_ms,
            last_check_ms: 0,
        }
    }

    /// Sample the sensor if the cooldown window has elapsed.
    pub fn poll(
        &mut self,
        now_ms: u32,
        sensor: &mut impl LightSensor,
    ) -> LightCheck {
        if now_ms.wrapping_sub(self.last_check_ms) < self.cooldown_ms {
            return LightCheck::NotDue;
        }

        let level = sensor.read_level();
        self.last_check_ms = now_ms;

        if level < self.threshold {
            LightCheck::Low(level)
        } else {
            LightCheck::Bright(level)
        }
    }

    /// Timestamp of the last evaluation.
    #[cfg(test)]
    pub(crate) const fn last_check_ms(&self) -> u32 { self.last_check_ms }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::FakeLight;

    const THRESHOLD: u16 = 300;
    const COOLDOWN_MS: u32 = 180_000;

    #[test]
    fn test_not_due_before_first_window() {
        let mut monitor = LightMonitor::new(THRESHOLD, COOLDOWN_MS);
        let mut sensor = FakeLight::new(10);
        assert_eq!(monitor.poll(0, &mut sensor), LightCheck::NotDue);
        assert_eq!(monitor.poll(COOLDOWN_MS - 1, &mut sensor), LightCheck::NotDue);
        assert_eq!(sensor.reads(), 0);
    }

    #[test]
    fn test_threshold_is_exclusive() {
        let mut monitor = LightMonitor::new(THRESHOLD, COOLDOWN_MS);
        let mut sensor = FakeLight::new(THRESHOLD);
        assert_eq!(monitor.poll(COOLDOWN_MS, &mut sensor), LightCheck::Bright(THRESHOLD));

        sensor.set_level(THRESHOLD - 1);
        assert_eq!(monitor.poll(2 * COOLDOWN_MS, &mut sensor), LightCheck::Low(THRESHOLD - 1));
    }

    #[test]
    fn test_at_most_once_per_window() {
        let mut monitor = LightMonitor::new(THRESHOLD, COOLDOWN_MS);
        let mut sensor = FakeLight::new(50);

        let mut alarms = 0;
        // Poll every 10 ms over one and a half windows after the first check
        for now in (COOLDOWN_MS..COOLDOWN_MS * 2 + COOLDOWN_MS / 2).step_by(10) {
            if let LightCheck::Low(_) = monitor.poll(now, &mut sensor) {
                alarms += 1;
            }
        }
        assert_eq!(alarms, 2);
        assert_eq!(sensor.reads(), 2);
    }

    #[test]
    fn test_window_restarts_after_bright_reading() {
        let mut monitor = LightMonitor::new(THRESHOLD, COOLDOWN_MS);
        let mut sensor = FakeLight::new(900);
        assert_eq!(monitor.poll(COOLDOWN_MS, &mut sensor), LightCheck::Bright(900));
        assert_eq!(monitor.last_check_ms(), COOLDOWN_MS);

        // Darkness right after a bright check waits for the next window
        sensor.set_level(20);
        assert_eq!(monitor.poll(COOLDOWN_MS + 1000, &mut sensor), LightCheck::NotDue);
        assert_eq!(monitor.poll(2 * COOLDOWN_MS, &mut sensor), LightCheck::Low(20));
    }

    #[test]
    fn test_cooldown_across_clock_wrap() {
        let mut monitor = LightMonitor::new(THRESHOLD, COOLDOWN_MS);
        let mut sensor = FakeLight::new(10);
        let before_wrap = u32::MAX - 1000;
        assert_eq!(monitor.poll(before_wrap, &mut sensor), LightCheck::Low(10));
        assert_eq!(monitor.poll(5_000, &mut sensor), LightCheck::NotDue);
        assert_eq!(monitor.poll(COOLDOWN_MS - 1001, &mut sensor), LightCheck::Low(10));
    }
}
