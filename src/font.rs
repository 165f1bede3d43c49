//! Digit font for the 5x5 matrix.
//!
//! Each glyph is 25 cells in strip transmission order, five cells per row.
//! Whatever the physical wiring of the matrix, the table already accounts
//! for it: the renderer sends cells strictly in index order.

use crate::config::PIXEL_COUNT;
use crate::types::Digit;

/// A lit/unlit pattern for every pixel of the matrix.
pub type Glyph = [bool; PIXEL_COUNT];

const fn glyph(bits: [u8; PIXEL_COUNT]) -> Glyph {
    let mut cells = [false; PIXEL_COUNT];
    let mut i = 0;
    while i < PIXEL_COUNT {
        cells[i] = bits[i] != 0;
        i += 1;
    }
    cells
}

/// Glyphs for digits 0 through 9.
#[rustfmt::skip]
pub static FONT: [Glyph; 10] = [
    glyph([1,1,1,1,1, 1,0,0,0,1, 1,0,0,0,1, 1,0,0,0,1, 1,1,1,1,1]), // 0
    glyph([0,1,1,1,0, 0,0,1,0,0, 0,0,1,0,0, 0,1,1,0,0, 0,0,1,0,0]), // 1
    glyph([1,1,1,1,1, 1,0,0,0,0, 1,1,1,1,0, 0,0,0,0,1, 1,1,1,1,0]), // 2
    glyph([1,1,1,1,1, 0,0,0,0,1, 1,1,1,1,1, 0,0,0,0,1, 1,1,1,1,1]), // 3
    glyph([1,0,0,0,0, 0,0,0,0,1, 1,1,1,1,1, 1,0,0,0,1, 1,0,0,0,1]), // 4
    glyph([1,1,1,1,1, 0,0,0,0,1, 1,1,1,1,1, 1,0,0,0,0, 1,1,1,1,1]), // 5
    glyph([1,1,1,1,1, 1,0,0,0,1, 1,1,1,1,1, 1,0,0,0,0, 1,1,1,1,1]), // 6
    glyph([1,0,0,0,0, 0,0,0,0,1, 1,0,0,0,0, 1,0,0,0,1, 1,1,1,1,1]), // 7
    glyph([1,1,1,1,1, 1,0,0,0,1, 1,1,1,1,1, 1,0,0,0,1, 1,1,1,1,1]), // 8
    glyph([1,1,1,1,1, 0,0,0,0,1, 1,1,1,1,1, 1,0,0,0,1, 1,1,1,1,1]), // 9
];

/// Returns the glyph for `digit`.
#[inline]
pub fn pattern_for(digit: Digit) -> &'static Glyph {
    &FONT[digit.index()]
}
