//! HD44780 character LCD driver (4-bit parallel, write-only).
//!
//! R/W is tied to ground, so the busy flag cannot be polled. Every transfer is
//! followed by a fixed wait covering the instruction's worst-case execution
//! time (37 µs for most, 1.52 ms for clear).
//!
//! Row start addresses in display RAM: row 0 = 0x00, row 1 = 0x40.

use core::convert::Infallible;

use bike_computer::config::LCD_ROWS;
use bike_computer::hal::CharDisplay;
use embassy_rp::gpio::{Level, Output};
use embassy_time::{Duration, block_for};

// =============================================================================
// Instruction Set
// =============================================================================

const CMD_CLEAR: u8 = 0x01;
/// Entry mode: increment cursor, no display shift.
const CMD_ENTRY_MODE: u8 = 0x06;
/// Display on, cursor off, blink off.
const CMD_DISPLAY_ON: u8 = 0x0C;
/// 4-bit bus, 2 lines, 5x8 font.
const CMD_FUNCTION_SET: u8 = 0x28;
const CMD_SET_DDRAM_ADDR: u8 = 0x80;

const ROW_OFFSETS: [u8; LCD_ROWS as usize] = [0x00, 0x40];

const EXEC_TIME: Duration = Duration::from_micros(50);
const CLEAR_TIME: Duration = Duration::from_micros(2000);

/// HD44780 on six GPIOs.
pub struct Hd44780<'d> {
    rs: Output<'d>,
    en: Output<'d>,
    /// D4..D7
    data: [Output<'d>; 4],
}

impl<'d> Hd44780<'d> {
    pub fn new(
        rs: Output<'d>,
        en: Output<'d>,
        data: [Output<'d>; 4],
    ) -> Self {
        Self { rs, en, data }
    }

    /// Power-on initialization by instruction (datasheet figure 24).
    pub fn init(&mut self) {
        block_for(Duration::from_millis(50));
        self.rs.set_low();

        // Force 8-bit mode three times, then switch to 4-bit
        self.write_nibble(0x03);
        block_for(Duration::from_millis(5));
        self.write_nibble(0x03);
        block_for(Duration::from_micros(150));
        self.write_nibble(0x03);
        block_for(Duration::from_micros(150));
        self.write_nibble(0x02);
        block_for(EXEC_TIME);

        self.command(CMD_FUNCTION_SET);
        self.command(CMD_DISPLAY_ON);
        self.command(CMD_CLEAR);
        self.command(CMD_ENTRY_MODE);
    }

    fn command(
        &mut self,
        cmd: u8,
    ) {
        self.rs.set_low();
        self.write_byte(cmd);
        block_for(if cmd == CMD_CLEAR { CLEAR_TIME } else { EXEC_TIME });
    }

    fn write_char(
        &mut self,
        c: u8,
    ) {
        self.rs.set_high();
        self.write_byte(c);
        block_for(EXEC_TIME);
    }

    fn write_byte(
        &mut self,
        byte: u8,
    ) {
        self.write_nibble(byte >> 4);
        self.write_nibble(byte & 0x0F);
    }

    fn write_nibble(
        &mut self,
        nibble: u8,
    ) {
        for (bit, pin) in self.data.iter_mut().enumerate() {
            pin.set_level(Level::from((nibble >> bit) & 1 == 1));
        }
        // Data is latched on the falling edge of EN (min pulse width 450 ns)
        self.en.set_high();
        block_for(Duration::from_micros(1));
        self.en.set_low();
        block_for(Duration::from_micros(1));
    }
}

impl CharDisplay for Hd44780<'_> {
    type Error = Infallible;

    fn clear(&mut self) -> Result<(), Self::Error> {
        self.command(CMD_CLEAR);
        Ok(())
    }

    fn set_cursor(
        &mut self,
        col: u8,
        row: u8,
    ) -> Result<(), Self::Error> {
        let offset = ROW_OFFSETS[usize::from(row.min(LCD_ROWS - 1))];
        self.command(CMD_SET_DDRAM_ADDR | offset.wrapping_add(col));
        Ok(())
    }

    fn write_str(
        &mut self,
        text: &str,
    ) -> Result<(), Self::Error> {
        // The character ROM is ASCII-compatible only in the printable range
        for c in text.bytes() {
            self.write_char(if c.is_ascii_graphic() || c == b' ' { c } else { b'?' });
        }
        Ok(())
    }
}
