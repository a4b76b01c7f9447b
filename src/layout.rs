//! Two-row text layout for character LCDs.
//!
//! A row is a NUL-terminated byte buffer of `width + 1` bytes. After layout
//! each row holds exactly `width` visible bytes (source text, then spaces)
//! followed by the terminator, which is what the LCD driver expects: it does
//! not wrap, so anything shorter would leave stale glyphs on screen.

use core::cmp::Ordering;
use core::convert::Infallible;
use core::iter;

/// Length of `source` up to its first NUL, or the whole slice without one.
fn terminated_len(source: &[u8]) -> usize {
    source.iter().position(|&b| b == 0).unwrap_or(source.len())
}

/// Pads the NUL-terminated string in `buffer` with spaces up to `width`
/// and terminates it at `width`.
///
/// If no terminator is found in `[0, width]` the content is taken to be
/// exactly `width` bytes long and only the terminator is written.
/// `width` is clamped to the buffer's capacity.
pub fn pad_row_to_width(buffer: &mut [u8], width: usize) {
    let Some(last) = buffer.len().checked_sub(1) else {
        return;
    };
    let width = width.min(last);

    let end = terminated_len(&buffer[..=width]).min(width);
    buffer[end..width].fill(b' ');
    buffer[width] = 0;
}

/// Spreads `source` over two rows of `width` visible bytes each.
///
/// Text that fits in the first row (with its terminator) leaves the second
/// row blank. Longer text continues on the second row at column 0; anything
/// past `2 * width` bytes is dropped.
pub fn layout_two_rows(source: &[u8], row1: &mut [u8], row2: &mut [u8], width: usize) {
    let (Some(last1), Some(last2)) = (row1.len().checked_sub(1), row2.len().checked_sub(1)) else {
        return;
    };
    let width = width.min(last1).min(last2);

    let len = terminated_len(source);
    let fits_one_row = len < width;

    // Position `len` carries the terminator.
    let chars = source[..len].iter().copied().chain(iter::once(0));
    for (i, ch) in chars.enumerate() {
        if i == 2 * width {
            row2[width] = 0;
            break;
        }
        match i.cmp(&width) {
            Ordering::Less => row1[i] = ch,
            Ordering::Equal => {
                row1[width] = 0;
                row2[0] = ch;
            }
            Ordering::Greater => row2[i - width] = ch,
        }
    }

    if fits_one_row {
        row2[0] = 0;
        pad_row_to_width(row1, width);
    }
    pad_row_to_width(row2, width);
}

/// One LCD row: `CAP - 1` visible bytes and a NUL terminator.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RowBuffer<const CAP: usize> {
    bytes: [u8; CAP],
}

impl<const CAP: usize> Default for RowBuffer<CAP> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const CAP: usize> RowBuffer<CAP> {
    /// Visible columns.
    pub const WIDTH: usize = CAP - 1;

    /// An empty row.
    pub const fn new() -> Self {
        Self { bytes: [0; CAP] }
    }

    /// Lays `source` out over a fresh pair of rows.
    pub fn layout_pair(source: &[u8]) -> (Self, Self) {
        let mut row1 = Self::new();
        let mut row2 = Self::new();
        layout_two_rows(source, &mut row1.bytes, &mut row2.bytes, Self::WIDTH);
        (row1, row2)
    }

    /// Current content, without the terminator.
    pub fn text(&self) -> &[u8] {
        &self.bytes[..self.len()]
    }

    /// The `WIDTH` bytes that end up on screen.
    pub fn visible(&self) -> &[u8] {
        &self.bytes[..Self::WIDTH]
    }

    pub fn as_bytes_with_nul(&self) -> &[u8] {
        &self.bytes
    }

    pub fn len(&self) -> usize {
        terminated_len(&self.bytes[..Self::WIDTH])
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn clear(&mut self) {
        self.bytes = [0; CAP];
    }

    /// Appends `byte` before the terminator. Returns false once the row is full.
    pub fn push(&mut self, byte: u8) -> bool {
        let len = self.len();
        if len >= Self::WIDTH {
            return false;
        }
        self.bytes[len] = byte;
        self.bytes[len + 1] = 0;
        true
    }

    pub fn pad_to_width(&mut self) {
        pad_row_to_width(&mut self.bytes, Self::WIDTH);
    }
}

/// Formatting into a row truncates silently, like `snprintf` into a fixed buffer.
impl<const CAP: usize> ufmt::uWrite for RowBuffer<CAP> {
    type Error = Infallible;

    fn write_str(&mut self, s: &str) -> Result<(), Self::Error> {
        for byte in s.bytes() {
            if !self.push(byte) {
                break;
            }
        }
        Ok(())
    }
}
