//! Per-LED pixel buffers in strip transmission order.

use core::ops::{Deref, DerefMut};

use heapless::Vec;
use smart_leds::RGB8;

/// Predefined RGB color constants from the `smart_leds` crate.
#[doc(inline)]
pub use smart_leds::colors;

/// RGB color representation re-exported from the `smart_leds` crate.
pub type Rgb = RGB8;

/// "Off" for a pixel is the zero color.
pub const OFF: Rgb = Rgb::new(0, 0, 0);

/// Ordered per-LED colors for one full transmission to the strip.
///
/// Index `i` is the color of the LED at physical index `i`. Frames are
/// rebuilt whole by the renderer; there are no partial updates.
///
/// Frames deref to `[Rgb; N]`, so pixels can be read and mutated directly.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Frame<const N: usize>(pub [Rgb; N]);

impl<const N: usize> Frame<N> {
    /// Number of LEDs in this frame.
    pub const LEN: usize = N;

    /// Create a new blank (all off) frame.
    #[must_use]
    pub const fn new() -> Self {
        Self([OFF; N])
    }

    /// Create a frame filled with a single color.
    #[must_use]
    pub const fn filled(color: Rgb) -> Self {
        Self([color; N])
    }

    /// Physical indices of every pixel that is not off, in ascending order.
    #[must_use]
    pub fn lit_indices(&self) -> Vec<usize, N> {
        self.0
            .iter()
            .enumerate()
            .filter(|(_, color)| **color != OFF)
            .map(|(index, _)| index)
            .collect()
    }
}

impl<const N: usize> Deref for Frame<N> {
    type Target = [Rgb; N];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<const N: usize> DerefMut for Frame<N> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl<const N: usize> From<[Rgb; N]> for Frame<N> {
    fn from(array: [Rgb; N]) -> Self {
        Self(array)
    }
}

impl<const N: usize> From<Frame<N>> for [Rgb; N] {
    fn from(frame: Frame<N>) -> Self {
        frame.0
    }
}

impl<const N: usize> Default for Frame<N> {
    fn default() -> Self {
        Self::new()
    }
}
