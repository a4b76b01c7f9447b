use ufmt::{uDisplay, uWrite, uwrite, Formatter};

use crate::config::{DEGREE_GLYPH, ROW_CAPACITY};
use crate::error::{Error, Result};
use crate::layout::RowBuffer;
use crate::sensors::Climate;

/// A row sized for the LCD
pub type LcdRow = RowBuffer<ROW_CAPACITY>;

/// A two-row character display
/// Writes do not wrap, so callers hand over complete rows
pub trait RowDisplay {
    type Error;

    /// Moves the cursor to (col, row)
    fn set_cursor(&mut self, col: u8, row: u8) -> core::result::Result<(), Self::Error>;

    /// Writes raw LCD charset bytes at the cursor
    fn print(&mut self, text: &[u8]) -> core::result::Result<(), Self::Error>;
}

/// Float shown with a single decimal, rounded half away from zero
/// NaN renders as "nan", as a failed DHT-style read would
#[derive(Clone, Copy, Debug)]
pub struct Tenths(pub f32);

impl uDisplay for Tenths {
    fn fmt<W>(&self, f: &mut Formatter<'_, W>) -> core::result::Result<(), W::Error>
    where
        W: uWrite + ?Sized,
    {
        let value = self.0;
        if value.is_nan() {
            return f.write_str("nan");
        }

        let scaled = value * 10.0;
        let tenths = if scaled < 0.0 {
            (scaled - 0.5) as i32
        } else {
            (scaled + 0.5) as i32
        };

        if tenths < 0 {
            f.write_str("-")?;
        }
        let magnitude = tenths.unsigned_abs();
        uwrite!(f, "{}.{}", magnitude / 10, magnitude % 10)
    }
}

/// Builds the sensor screen
/// Top: temperature and heat index, e.g. "23.5°C (23.1°C)"
/// Bottom: "Humidity: 45.0%"
/// param climate: the sample to show
/// returns both rows padded to the LCD width
pub fn sensor_rows(climate: &Climate) -> (LcdRow, LcdRow) {
    let mut row1 = LcdRow::new();
    uwrite!(row1, "{}", Tenths(climate.temperature_c)).ok();
    row1.push(DEGREE_GLYPH);
    uwrite!(row1, "C ({}", Tenths(climate.heat_index_c())).ok();
    row1.push(DEGREE_GLYPH);
    uwrite!(row1, "C)").ok();
    row1.pad_to_width();

    let mut row2 = LcdRow::new();
    uwrite!(row2, "Humidity: {}%", Tenths(climate.humidity_pct)).ok();
    row2.pad_to_width();

    (row1, row2)
}

/// Lays a stored message out over both rows
/// param text: message bytes; anything beyond two rows is dropped
pub fn text_rows(text: &[u8]) -> (LcdRow, LcdRow) {
    LcdRow::layout_pair(text)
}

/// Writes both rows from column 0, top row first
/// param display: LCD instance
/// param row1: top row
/// param row2: bottom row
pub fn print_rows<D, const CAP: usize>(
    display: &mut D,
    row1: &RowBuffer<CAP>,
    row2: &RowBuffer<CAP>,
) -> Result<()>
where
    D: RowDisplay,
{
    display.set_cursor(0, 0).map_err(|_| Error::Display)?;
    display.print(row1.visible()).map_err(|_| Error::Display)?;
    display.set_cursor(0, 1).map_err(|_| Error::Display)?;
    display.print(row2.visible()).map_err(|_| Error::Display)?;
    Ok(())
}
