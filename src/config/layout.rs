//! Character LCD geometry.
//!
//! The display is a 16x2 HD44780-compatible module. Each row is backed by
//! 40 characters of display RAM, so text longer than the visible width is
//! accepted by the controller and simply scrolls off the right edge.

/// Visible columns per row.
pub const LCD_COLS: u8 = 16;

/// Number of rows.
pub const LCD_ROWS: u8 = 2;

/// Capacity of a rendered row (HD44780 DDRAM width per line).
pub const LINE_CAPACITY: usize = 40;

const _: () = assert!(LINE_CAPACITY >= LCD_COLS as usize);
