//! Firmware entry point and rotation capture task.

use bike_computer::{BikeComputer, Config, RotationState, log_info, log_warn};
use cortex_m_rt::entry;
use embassy_executor::InterruptExecutor;
use embassy_rp::gpio::Input;
use embassy_rp::interrupt;
use embassy_rp::interrupt::{InterruptExt, Priority};
use embassy_time::Instant;
use {defmt_rtt as _, panic_probe as _};

use crate::board::Board;

/// Compile-time configuration.
const CONFIG: Config = Config::DEFAULT;

/// Rotation state written by the capture task and read by the main loop.
static ROTATION: RotationState = RotationState::new();

/// Executor for the capture task, driven by a software interrupt above thread mode.
static EXECUTOR_HIGH: InterruptExecutor = InterruptExecutor::new();

// Program metadata for `picotool info`
#[unsafe(link_section = ".bi_entries")]
#[used]
pub static PICOTOOL_ENTRIES: [embassy_rp::binary_info::EntryAddr; 4] = [
    embassy_rp::binary_info::rp_program_name!(c"bike-computer"),
    embassy_rp::binary_info::rp_program_description!(c"Hall sensor bicycle computer with 16x2 LCD"),
    embassy_rp::binary_info::rp_cargo_version!(),
    embassy_rp::binary_info::rp_program_build_attribute!(),
];

#[interrupt]
unsafe fn SWI_IRQ_0() {
    // SAFETY: SWI_IRQ_0 is reserved for EXECUTOR_HIGH
    unsafe { EXECUTOR_HIGH.on_interrupt() }
}

/// Rotation capture - one wheel rotation per falling edge of the Hall sensor.
#[embassy_executor::task]
async fn rotation_capture_task(mut hall: Input<'static>) {
    log_info!("Rotation capture started");

    loop {
        hall.wait_for_falling_edge().await;
        ROTATION.record_pulse(Instant::now().as_micros(), CONFIG.distance_per_pulse_km());
    }
}

#[entry]
fn main() -> ! {
    let p = embassy_rp::init(Default::default());
    log_info!("Bike computer firmware starting...");

    let Board { hall, peripherals } = Board::new(p);

    // Capture runs at a higher priority than the blocking main loop
    interrupt::SWI_IRQ_0.set_priority(Priority::P2);
    let spawner = EXECUTOR_HIGH.start(interrupt::SWI_IRQ_0);
    spawner.spawn(rotation_capture_task(hall)).unwrap();

    let mut computer = BikeComputer::new(CONFIG, &ROTATION, peripherals);
    if computer.start().is_err() {
        log_warn!("Boot screen failed");
    }

    log_info!("Main loop starting");
    computer.run()
}
