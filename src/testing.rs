//! Hand-written hardware fakes for host tests.
//!
//! All fakes that care about time share one [`FakeClock`]. [`FakeDelay`]
//! advances that clock instead of sleeping, so blocking waits in the code
//! under test show up as elapsed time.

use std::cell::{Cell, RefCell};
use std::convert::Infallible;
use std::rc::Rc;

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::{ErrorKind, ErrorType, InputPin, OutputPin};

use crate::config::{LCD_ROWS, LINE_CAPACITY};
use crate::hal::{CharDisplay, Clock, LightSensor};

// =============================================================================
// Time
// =============================================================================

/// Shared fake time base, in microseconds since boot.
#[derive(Clone, Default)]
pub struct FakeClock {
    micros: Rc<Cell<u64>>,
}

impl FakeClock {
    pub fn new() -> Self { Self::default() }

    pub fn set_millis(
        &self,
        ms: u64,
    ) {
        self.micros.set(ms * 1000);
    }

    pub fn advance_millis(
        &self,
        ms: u64,
    ) {
        self.micros.set(self.micros.get() + ms * 1000);
    }

    pub fn advance_micros(
        &self,
        us: u64,
    ) {
        self.micros.set(self.micros.get() + us);
    }

    pub fn millis(&self) -> u64 { self.micros.get() / 1000 }
}

impl Clock for FakeClock {
    fn now_micros(&self) -> u64 { self.micros.get() }

    fn now_millis(&self) -> u32 { (self.micros.get() / 1000) as u32 }
}

/// Delay that moves the shared clock forward and records each wait.
#[derive(Clone)]
pub struct FakeDelay {
    clock: FakeClock,
    waits_ns: Rc<RefCell<Vec<u64>>>,
}

impl FakeDelay {
    pub fn new(clock: &FakeClock) -> Self {
        Self {
            clock: clock.clone(),
            waits_ns: Rc::default(),
        }
    }

    /// Total blocked time in milliseconds.
    pub fn total_ms(&self) -> u64 { self.waits_ns.borrow().iter().sum::<u64>() / 1_000_000 }
}

impl DelayNs for FakeDelay {
    fn delay_ns(
        &mut self,
        ns: u32,
    ) {
        self.waits_ns.borrow_mut().push(u64::from(ns));
        self.clock.advance_micros(u64::from(ns) / 1000);
    }

    fn delay_ms(
        &mut self,
        ms: u32,
    ) {
        self.waits_ns.borrow_mut().push(u64::from(ms) * 1_000_000);
        self.clock.advance_millis(u64::from(ms));
    }
}

// =============================================================================
// Digital I/O
// =============================================================================

/// Output pin that records every level change with its timestamp (ms).
#[derive(Clone)]
pub struct FakeOutput {
    clock: FakeClock,
    changes: Rc<RefCell<Vec<(bool, u64)>>>,
}

impl FakeOutput {
    pub fn new(clock: &FakeClock) -> Self {
        Self {
            clock: clock.clone(),
            changes: Rc::default(),
        }
    }

    /// Recorded `(is_high, at_ms)` pairs.
    pub fn changes(&self) -> Vec<(bool, u64)> { self.changes.borrow().clone() }

    /// Number of rising edges (beeps for a buzzer).
    pub fn high_count(&self) -> usize { self.changes.borrow().iter().filter(|(high, _)| *high).count() }

    pub fn is_high(&self) -> bool { self.changes.borrow().last().is_some_and(|(high, _)| *high) }
}

impl ErrorType for FakeOutput {
    type Error = Infallible;
}

impl OutputPin for FakeOutput {
    fn set_low(&mut self) -> Result<(), Self::Error> {
        self.changes.borrow_mut().push((false, self.clock.millis()));
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        self.changes.borrow_mut().push((true, self.clock.millis()));
        Ok(())
    }
}

/// Active-low button with an idle pull-up; can be made to fail reads.
#[derive(Clone)]
pub struct FakeButton {
    pressed: Rc<Cell<bool>>,
    faulty: Rc<Cell<bool>>,
}

impl FakeButton {
    pub fn new() -> Self {
        Self {
            pressed: Rc::new(Cell::new(false)),
            faulty: Rc::new(Cell::new(false)),
        }
    }

    pub fn press(&self) { self.pressed.set(true) }

    pub fn release(&self) { self.pressed.set(false) }

    pub fn set_faulty(
        &self,
        faulty: bool,
    ) {
        self.faulty.set(faulty)
    }
}

impl ErrorType for FakeButton {
    type Error = ErrorKind;
}

impl InputPin for FakeButton {
    fn is_high(&mut self) -> Result<bool, Self::Error> { self.is_low().map(|low| !low) }

    fn is_low(&mut self) -> Result<bool, Self::Error> {
        if self.faulty.get() {
            return Err(ErrorKind::Other);
        }
        Ok(self.pressed.get())
    }
}

// =============================================================================
// Light sensor
// =============================================================================

/// Light sensor returning a settable level and counting samples.
#[derive(Clone)]
pub struct FakeLight {
    level: Rc<Cell<u16>>,
    reads: Rc<Cell<u32>>,
}

impl FakeLight {
    pub fn new(level: u16) -> Self {
        Self {
            level: Rc::new(Cell::new(level)),
            reads: Rc::new(Cell::new(0)),
        }
    }

    pub fn set_level(
        &self,
        level: u16,
    ) {
        self.level.set(level)
    }

    pub fn reads(&self) -> u32 { self.reads.get() }
}

impl LightSensor for FakeLight {
    fn read_level(&mut self) -> u16 {
        self.reads.set(self.reads.get() + 1);
        self.level.get()
    }
}

// =============================================================================
// Display
// =============================================================================

/// Write error raised by a failing [`FakeDisplay`].
#[derive(Debug, PartialEq, Eq)]
pub struct DisplayFault;

#[derive(Default)]
struct Screen {
    rows: [Vec<char>; LCD_ROWS as usize],
    cursor: (usize, usize),
    clears: usize,
    writes: Vec<String>,
}

/// Character display keeping its rows in memory.
#[derive(Clone, Default)]
pub struct FakeDisplay {
    screen: Rc<RefCell<Screen>>,
    failing: Rc<Cell<bool>>,
}

impl FakeDisplay {
    pub fn new() -> Self { Self::default() }

    /// Row text with trailing blanks removed.
    pub fn row(
        &self,
        row: usize,
    ) -> String {
        let screen = self.screen.borrow();
        screen.rows[row].iter().collect::<String>().trim_end().into()
    }

    pub fn clears(&self) -> usize { self.screen.borrow().clears }

    /// Every string passed to `write_str`, in order.
    pub fn writes(&self) -> Vec<String> { self.screen.borrow().writes.clone() }

    pub fn set_failing(
        &self,
        failing: bool,
    ) {
        self.failing.set(failing)
    }

    fn check(&self) -> Result<(), DisplayFault> { if self.failing.get() { Err(DisplayFault) } else { Ok(()) } }
}

impl CharDisplay for FakeDisplay {
    type Error = DisplayFault;

    fn clear(&mut self) -> Result<(), Self::Error> {
        self.check()?;
        let mut screen = self.screen.borrow_mut();
        for row in screen.rows.iter_mut() {
            row.clear();
        }
        screen.cursor = (0, 0);
        screen.clears += 1;
        Ok(())
    }

    fn set_cursor(
        &mut self,
        col: u8,
        row: u8,
    ) -> Result<(), Self::Error> {
        self.check()?;
        self.screen.borrow_mut().cursor = (usize::from(col), usize::from(row));
        Ok(())
    }

    fn write_str(
        &mut self,
        text: &str,
    ) -> Result<(), Self::Error> {
        self.check()?;
        let mut screen = self.screen.borrow_mut();
        screen.writes.push(text.into());
        let (mut col, row) = screen.cursor;
        for c in text.chars() {
            if col >= LINE_CAPACITY {
                break;
            }
            let line = &mut screen.rows[row];
            if line.len() <= col {
                line.resize(col + 1, ' ');
            }
            line[col] = c;
            col += 1;
        }
        screen.cursor = (col, row);
        Ok(())
    }
}
