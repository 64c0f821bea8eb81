//! Static lookup from digit to a 5×5 bitmap.
//!
//! Each glyph row is an unsigned value whose low 5 bits are meaningful; bit
//! `4 - col` set means the LED at `(row, col)` is lit. Rows are composed from
//! a handful of named stroke patterns (a full bar, a single left or right
//! pixel, both border pixels, a centered bar, a centered dot) shifted and
//! OR-ed together.

use crate::digit::Digit;
use crate::{Error, Result};

// ============================================================================
// Stroke patterns
// ============================================================================

/// All five columns lit.
const FULL: u8 = 0b11111;
/// Rightmost column only.
const RIGHT: u8 = 0b00001;
/// Leftmost column only.
const LEFT: u8 = 0b10000;
/// Both border columns.
const BORDER: u8 = 0b10001;
/// Centered three-wide bar.
const CENTER: u8 = 0b01110;
/// Centered single pixel.
const DOT: u8 = 0b00100;

// ============================================================================
// Glyph
// ============================================================================

/// A 5×5 bitmap: five rows, low 5 bits per row, bit `4 - col` ⇒ `(row, col)` lit.
#[derive(Clone, Copy, Debug, Eq, PartialEq, defmt::Format)]
pub struct Glyph(pub [u8; 5]);

impl Glyph {
    /// Number of rows and of columns in a glyph.
    pub const SIZE: usize = 5;

    /// The all-dark glyph.
    pub const BLANK: Self = Self([0; 5]);

    /// Returns whether the pixel at `(row, col)` is lit.
    ///
    /// Out-of-range coordinates read as unlit.
    #[must_use]
    pub const fn is_lit(&self, row: usize, col: usize) -> bool {
        if row >= Self::SIZE || col >= Self::SIZE {
            return false;
        }
        self.0[row] & (1 << (Self::SIZE - 1 - col)) != 0
    }

    /// The five bitmap rows, top to bottom.
    #[must_use]
    pub const fn rows(&self) -> &[u8; 5] {
        &self.0
    }
}

// ============================================================================
// Digit glyph table
// ============================================================================

/// Bitmaps for the digits 0–9, indexed by digit value.
const GLYPHS: [Glyph; 10] = [
    Glyph([FULL, BORDER, BORDER, BORDER, FULL]),          // 0
    Glyph([DOT, 3 << 2, DOT, DOT, CENTER]),               // 1
    Glyph([CENTER, (RIGHT << 1) | LEFT, DOT, RIGHT << 3, FULL]), // 2
    Glyph([FULL, RIGHT, 0b00111, RIGHT, FULL]),           // 3
    Glyph([BORDER, BORDER, FULL, RIGHT, RIGHT]),          // 4
    Glyph([FULL, LEFT, FULL, RIGHT, FULL]),               // 5
    Glyph([FULL, LEFT, FULL, BORDER, FULL]),              // 6
    Glyph([FULL, RIGHT, RIGHT, RIGHT, RIGHT]),            // 7
    Glyph([FULL, BORDER, FULL, BORDER, FULL]),            // 8
    Glyph([FULL, BORDER, FULL, RIGHT, RIGHT]),            // 9
];

/// Looks up the glyph for a raw digit value.
///
/// # Errors
///
/// Returns [`Error::DigitOutOfRange`] when `digit > 9`. Callers holding a
/// [`Digit`] can use the infallible [`Digit::glyph`] instead.
pub const fn glyph(digit: u8) -> Result<Glyph> {
    if (digit as usize) < GLYPHS.len() {
        Ok(GLYPHS[digit as usize])
    } else {
        Err(Error::DigitOutOfRange { digit })
    }
}

impl Digit {
    /// The glyph for this digit. Total thanks to the `Digit` range invariant.
    #[must_use]
    pub const fn glyph(self) -> Glyph {
        GLYPHS[self.value() as usize]
    }
}
