//! Display buffer and the cross-context buffer updater.
//!
//! [`SharedBuffer`] is the only state touched from both the button interrupt
//! and the main loop. The interrupt side replaces the whole frame with
//! [`SharedBuffer::update`]; the main loop copies it out with
//! [`SharedBuffer::snapshot`]. Both run inside a critical section, so the
//! renderer never sees half of one digit and half of another.

use core::cell::Cell;

use critical_section::Mutex;

use crate::config::{MATRIX_WIDTH, PIXEL_COUNT};
use crate::font::{Glyph, pattern_for};
use crate::types::Digit;

/// The current visual state of the matrix, one flag per pixel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DisplayBuffer {
    cells: Glyph,
}

impl DisplayBuffer {
    /// A buffer with every pixel off.
    pub const BLANK: DisplayBuffer = DisplayBuffer {
        cells: [false; PIXEL_COUNT],
    };

    /// Creates a buffer showing `digit`.
    #[inline]
    pub fn for_digit(digit: Digit) -> Self {
        Self {
            cells: *pattern_for(digit),
        }
    }

    /// Replaces every cell with the glyph for `digit`.
    #[inline]
    pub fn show(&mut self, digit: Digit) {
        self.cells = *pattern_for(digit);
    }

    /// Returns the cells in transmission order.
    #[inline]
    pub fn cells(&self) -> &Glyph {
        &self.cells
    }

    /// Returns whether the pixel at `index` is lit. Out-of-range indices are unlit.
    pub fn is_lit(&self, index: usize) -> bool {
        self.cells.get(index).copied().unwrap_or(false)
    }

    /// Number of lit pixels.
    pub fn lit_count(&self) -> usize {
        self.cells.iter().filter(|&&lit| lit).count()
    }
}

impl Default for DisplayBuffer {
    fn default() -> Self {
        Self::BLANK
    }
}

/// Draws the buffer as five rows of `#` (lit) and `.` (unlit).
impl core::fmt::Display for DisplayBuffer {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        for (i, row) in self.cells.chunks(MATRIX_WIDTH).enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            for &lit in row {
                f.write_str(if lit { "#" } else { "." })?;
            }
        }
        Ok(())
    }
}

/// A [`DisplayBuffer`] shared between interrupt and thread context.
///
/// `const`-constructible so it can sit in a `static` on the board.
pub struct SharedBuffer {
    frame: Mutex<Cell<DisplayBuffer>>,
}

impl SharedBuffer {
    /// Creates a blank shared buffer.
    pub const fn new() -> Self {
        Self {
            frame: Mutex::new(Cell::new(DisplayBuffer::BLANK)),
        }
    }

    /// Replaces the whole frame with the glyph for `digit`.
    ///
    /// The new frame is built before entering the critical section; the
    /// section itself only covers a single 25-byte copy.
    pub fn update(&self, digit: Digit) {
        let next = DisplayBuffer::for_digit(digit);
        critical_section::with(|cs| self.frame.borrow(cs).set(next));
    }

    /// Copies the current frame out.
    pub fn snapshot(&self) -> DisplayBuffer {
        critical_section::with(|cs| self.frame.borrow(cs).get())
    }
}

impl Default for SharedBuffer {
    fn default() -> Self {
        Self::new()
    }
}
