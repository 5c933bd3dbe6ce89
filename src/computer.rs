//! Main control loop.
//!
//! A single-threaded cooperative scheduler. Each pass runs three checks in a
//! fixed order against the millisecond timestamp taken at the start of the pass:
//!
//! 1. Buttons (reset, then mode); a press blocks for beep + debounce
//! 2. Light check, once per alarm cooldown window
//! 3. Measurement refresh, once per measurement interval
//!
//! The only preemption is the rotation capture, which writes the shared
//! [`RotationState`] from interrupt priority. The loop reads it through a
//! single snapshot per refresh.

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::{InputPin, OutputPin};

use crate::buzzer::Buzzer;
use crate::config::Config;
use crate::estimator::{estimate_rpm, estimate_speed};
use crate::hal::{CharDisplay, Clock, LightSensor};
use crate::light::{LightCheck, LightMonitor};
use crate::render::{self, Measurement};
use crate::state::{DisplayMode, InputHandler, RotationState, SpeedSamples};
use crate::{log_debug, log_info, log_warn};

/// Hardware handed to the [`BikeComputer`].
pub struct Peripherals<Disp, Light, Buzz, Rst, Mode, Clk, Dly> {
    pub display: Disp,
    pub light_sensor: Light,
    pub buzzer: Buzz,
    pub reset_button: Rst,
    pub mode_button: Mode,
    pub clock: Clk,
    pub delay: Dly,
}

/// Bike computer state and its peripherals.
pub struct BikeComputer<'r, Disp, Light, Buzz, Rst, Mode, Clk, Dly> {
    config: Config,
    rotation: &'r RotationState,
    display: Disp,
    light_sensor: Light,
    buzzer: Buzzer<Buzz>,
    input: InputHandler<Rst, Mode>,
    clock: Clk,
    delay: Dly,
    light_monitor: LightMonitor,
    samples: SpeedSamples,
    mode: DisplayMode,
    /// Timestamp of the last measurement refresh (ms, wrapping clock). 0 at boot.
    last_measurement_ms: u32,
}

impl<'r, Disp, Light, Buzz, Rst, Mode, Clk, Dly> BikeComputer<'r, Disp, Light, Buzz, Rst, Mode, Clk, Dly>
where
    Disp: CharDisplay,
    Light: LightSensor,
    Buzz: OutputPin,
    Rst: InputPin,
    Mode: InputPin,
    Clk: Clock,
    Dly: DelayNs,
{
    pub fn new(
        config: Config,
        rotation: &'r RotationState,
        peripherals: Peripherals<Disp, Light, Buzz, Rst, Mode, Clk, Dly>,
    ) -> Self {
        Self {
            light_monitor: LightMonitor::new(config.low_light_threshold, config.alarm_cooldown_ms),
            config,
            rotation,
            display: peripherals.display,
            light_sensor: peripherals.light_sensor,
            buzzer: Buzzer::new(peripherals.buzzer),
            input: InputHandler::new(peripherals.reset_button, peripherals.mode_button),
            clock: peripherals.clock,
            delay: peripherals.delay,
            samples: SpeedSamples::new(),
            mode: DisplayMode::default(),
            last_measurement_ms: 0,
        }
    }

    /// Show the boot screen. Call once before the first [`poll`](Self::poll).
    pub fn start(&mut self) -> Result<(), Disp::Error> {
        log_info!("Bike computer starting, wheel {} m", self.config.wheel_circumference_m);
        render::show_boot_screen(&mut self.display)
    }

    /// Run one loop pass.
    ///
    /// A display error does not cut the pass short: timers, samples and the
    /// buzzer are all updated before the first error is returned.
    pub fn poll(&mut self) -> Result<(), Disp::Error> {
        let now_ms = self.clock.now_millis();
        let mut result = Ok(());

        let input = self
            .input
            .poll(self.rotation, &mut self.mode, &mut self.buzzer, &mut self.delay);
        if input.reset_done {
            log_info!("Trip reset");
        }
        if let Some(mode) = input.new_mode {
            log_info!("Display mode: {}", mode.label());
        }

        match self.light_monitor.poll(now_ms, &mut self.light_sensor) {
            LightCheck::NotDue => {}
            LightCheck::Bright(level) => log_debug!("Light level {}", level),
            LightCheck::Low(level) => {
                log_warn!("Low light ({}), alarm", level);
                result = render::show_low_light_warning(&mut self.display);
                self.buzzer.warning_sequence(&mut self.delay);
            }
        }

        if now_ms.wrapping_sub(self.last_measurement_ms) >= self.config.measurement_interval_ms {
            self.last_measurement_ms = now_ms;
            let shown = self.refresh();
            result = result.and(shown);
        }

        result
    }

    /// Run forever, logging display failures.
    pub fn run(mut self) -> ! {
        loop {
            if self.poll().is_err() {
                log_warn!("Display write failed");
            }
        }
    }

    /// Sample speed, update the smoothing window and redraw.
    fn refresh(&mut self) -> Result<(), Disp::Error> {
        let rotation = self.rotation.snapshot();
        let speed = estimate_speed(&rotation, self.clock.now_micros(), self.config.wheel_circumference_m);
        self.samples.push(speed);

        let measurement = Measurement {
            mode: self.mode,
            average_kmh: self.samples.average(),
            distance_km: rotation.distance_km,
            rpm: estimate_rpm(&rotation),
        };
        log_debug!(
            "speed={} avg={} dist={} rpm={}",
            speed,
            measurement.average_kmh,
            measurement.distance_km,
            measurement.rpm
        );

        render::show_measurement(&mut self.display, &measurement)
    }

    /// Current display mode.
    #[cfg(test)]
    pub(crate) const fn mode(&self) -> DisplayMode { self.mode }

    /// Smoothed speed as of the last refresh.
    #[cfg(test)]
    pub(crate) fn average_speed(&self) -> f32 { self.samples.average() }
}

// =============================================================================
// Unit Tests
// =============================================================================
