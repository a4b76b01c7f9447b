//! Compile-time configuration.
//!
//! Display geometry, refresh intervals and pin assignments live here so the
//! firmware can be retuned in one place. Nothing is configurable at runtime.

// LCD

/// Visible columns per LCD row.
pub const LCD_COLS: usize = 16;

/// Rows on the LCD.
pub const LCD_ROWS: usize = 2;

/// Capacity of one row buffer: every column plus the NUL terminator.
pub const ROW_CAPACITY: usize = LCD_COLS + 1;

/// Longest stored message that can be shown, i.e. both rows filled.
pub const MESSAGE_CAPACITY: usize = LCD_COLS * LCD_ROWS;

/// HD44780 ROM A00 code for the degree sign.
pub const DEGREE_GLYPH: u8 = 0xDF;

// Timing

/// Minimum time between two sensor readouts (ms).
pub const SENSOR_DISPLAY_INTERVAL_MS: u32 = 1000;

/// Minimum time between two stored messages (ms).
pub const TEXT_DISPLAY_INTERVAL_MS: u32 = 2000;

// GPIO pin assignments (Raspberry Pi Pico)
//
// Actual `rp_pico::hal::gpio` types are bound in `board.rs`.
//
//   Trigger    → GPIO11 (pull-down, high = text mode)
//   LCD RS     → GPIO0
//   LCD EN     → GPIO1
//   LCD D4..D7 → GPIO2..GPIO5
//   BME680 SDA → GPIO8 (PIO0 I2C)
//   BME680 SCL → GPIO9 (PIO0 I2C)

/// I2C bus frequency for the climate sensor (kHz).
pub const SENSOR_I2C_KHZ: u32 = 100;
