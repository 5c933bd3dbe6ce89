//! Board wiring for the Raspberry Pi Pico 2 and adapters to the library capabilities.
//!
//! | Function            | GPIO | Notes                              |
//! |---------------------|------|------------------------------------|
//! | LCD RS              | 0    |                                    |
//! | LCD EN              | 1    |                                    |
//! | LCD D4..D7          | 2..5 | R/W tied to GND                    |
//! | Mode button         | 6    | Active-low, internal pull-up       |
//! | Hall sensor         | 7    | Open-drain output, internal pull-up |
//! | Reset button        | 8    | Active-low, internal pull-up       |
//! | Buzzer              | 11   | Active-high                        |
//! | Light sensor (LDR)  | 26   | ADC0, divider to 3V3               |

use bike_computer::Peripherals;
use bike_computer::hal::{Clock, LightSensor};
use bike_computer::log_warn;
use embassy_rp::adc::{self, Adc, Blocking, Channel};
use embassy_rp::gpio::{Input, Level, Output, Pull};
use embassy_time::{Delay, Instant};

use crate::lcd::Hd44780;

/// Peripherals as consumed by the bike computer on this board.
pub type BoardPeripherals = Peripherals<
    Hd44780<'static>,
    AdcLightSensor<'static>,
    Output<'static>,
    Input<'static>,
    Input<'static>,
    SystemClock,
    Delay,
>;

/// Board split into the capture input and the main loop peripherals.
pub struct Board {
    pub hall: Input<'static>,
    pub peripherals: BoardPeripherals,
}

impl Board {
    /// Configure every pin and bring up the LCD.
    pub fn new(p: embassy_rp::Peripherals) -> Self {
        let mut display = Hd44780::new(
            Output::new(p.PIN_0, Level::Low),
            Output::new(p.PIN_1, Level::Low),
            [
                Output::new(p.PIN_2, Level::Low),
                Output::new(p.PIN_3, Level::Low),
                Output::new(p.PIN_4, Level::Low),
                Output::new(p.PIN_5, Level::Low),
            ],
        );
        display.init();

        let light_sensor = AdcLightSensor {
            adc: Adc::new_blocking(p.ADC, adc::Config::default()),
            channel: Channel::new_pin(p.PIN_26, Pull::None),
        };

        Self {
            hall: Input::new(p.PIN_7, Pull::Up),
            peripherals: Peripherals {
                display,
                light_sensor,
                buzzer: Output::new(p.PIN_11, Level::Low),
                reset_button: Input::new(p.PIN_8, Pull::Up),
                mode_button: Input::new(p.PIN_6, Pull::Up),
                clock: SystemClock,
                delay: Delay,
            },
        }
    }
}

// =============================================================================
// Clock
// =============================================================================

/// Embassy time driver: 64-bit microseconds, 32-bit wrapping milliseconds.
pub struct SystemClock;

impl Clock for SystemClock {
    #[inline]
    fn now_micros(&self) -> u64 { Instant::now().as_micros() }

    #[inline]
    fn now_millis(&self) -> u32 { Instant::now().as_millis() as u32 }
}

// =============================================================================
// Light sensor
// =============================================================================

/// Light-dependent resistor on an ADC channel.
pub struct AdcLightSensor<'d> {
    adc: Adc<'d, Blocking>,
    channel: Channel<'d>,
}

impl LightSensor for AdcLightSensor<'_> {
    /// 12-bit conversion scaled down to the 10-bit range of the threshold.
    fn read_level(&mut self) -> u16 {
        match self.adc.blocking_read(&mut self.channel) {
            Ok(raw) => raw >> 2,
            Err(_) => {
                log_warn!("Light sensor conversion failed");
                0
            }
        }
    }
}
