//! The selectable digit and its closed increment/decrement arithmetic.

use derive_more::derive::Display;

use crate::{Error, Result};

/// A decimal digit in `0..=9`, the only values the panel can display.
///
/// The range invariant is enforced at construction, so [`next`](Self::next)
/// and [`prev`](Self::prev) never fail and glyph lookup through a `Digit`
/// is total.
#[derive(Clone, Copy, Debug, Display, Eq, Hash, Ord, PartialEq, PartialOrd, defmt::Format)]
#[display("{_0}")]
pub struct Digit(u8);

impl Digit {
    /// The startup digit.
    pub const ZERO: Self = Self(0);

    /// Number of displayable digits.
    pub const COUNT: u8 = 10;

    /// Creates a digit from a raw value.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DigitOutOfRange`] when `value > 9`.
    pub const fn new(value: u8) -> Result<Self> {
        if value < Self::COUNT {
            Ok(Self(value))
        } else {
            Err(Error::DigitOutOfRange { digit: value })
        }
    }

    /// The raw value in `0..=9`.
    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }

    /// The next digit, wrapping 9 → 0.
    #[must_use]
    pub const fn next(self) -> Self {
        Self((self.0 + 1) % Self::COUNT)
    }

    /// The previous digit, wrapping 0 → 9.
    #[must_use]
    pub const fn prev(self) -> Self {
        Self((self.0 + Self::COUNT - 1) % Self::COUNT)
    }
}

impl Default for Digit {
    fn default() -> Self {
        Self::ZERO
    }
}
