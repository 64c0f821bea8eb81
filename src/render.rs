//! Pure glyph-to-frame rendering for the digit panel.
//!
//! Rendering maps each lit bitmap cell through [`DIGIT_LAYOUT`] to its
//! physical strip index. No I/O happens here; transmitting the resulting
//! [`Frame`] is the hardware collaborator's job (see [`panel`](crate::panel)
//! on embedded builds).

use crate::frame::{Frame, OFF, Rgb};
use crate::glyph::Glyph;
use crate::layout::{DIGIT_LAYOUT, PANEL_SIZE, PIXEL_COUNT};

/// Cell `(row * 5 + col)` → physical LED index, precomputed from the wiring.
const XY_TO_INDEX: [u16; PIXEL_COUNT] = DIGIT_LAYOUT.xy_to_index();

/// One frame for the 25-LED digit panel.
pub type PanelFrame = Frame<PIXEL_COUNT>;

/// Renders a glyph into a transmission-ordered frame.
///
/// Every lit bitmap cell becomes `color` at its physical index; every other
/// pixel is off. Pure: identical inputs produce identical frames.
#[must_use]
pub fn render(glyph: &Glyph, color: Rgb) -> PanelFrame {
    let mut frame = PanelFrame::new();
    for row in 0..PANEL_SIZE {
        for col in 0..PANEL_SIZE {
            let physical_index = XY_TO_INDEX[row * PANEL_SIZE + col] as usize;
            frame[physical_index] = if glyph.is_lit(row, col) { color } else { OFF };
        }
    }
    frame
}

/// The all-off frame, used to blank the panel between digits.
#[must_use]
pub fn blank() -> PanelFrame {
    render(&Glyph::BLANK, OFF)
}
