#![allow(missing_docs)]
//! Host tests for glyph-to-frame rendering.

use digit_panel::digit::Digit;
use digit_panel::frame::{OFF, Rgb, colors};
use digit_panel::layout::DIGIT_LAYOUT;
use digit_panel::render::{blank, render};

const TEST_COLOR: Rgb = Rgb::new(10, 10, 10);

#[test]
fn round_trip_through_layout_reproduces_every_bitmap() {
    for value in 0..Digit::COUNT {
        let glyph = Digit::new(value).unwrap().glyph();
        let frame = render(&glyph, TEST_COLOR);

        // Map each physical pixel back to its grid cell and compare bits.
        for (led_index, &(col, row)) in DIGIT_LAYOUT.index_to_xy().iter().enumerate() {
            let lit = frame[led_index] == TEST_COLOR;
            assert_eq!(
                lit,
                glyph.is_lit(row as usize, col as usize),
                "digit {value}, led {led_index}"
            );
        }
    }
}

#[test]
fn digit_two_lights_hand_computed_physical_indices() {
    // Rows 01110, 10010, 00100, 01000, 11111 pushed through the wiring table.
    let frame = render(&Digit::new(2).unwrap().glyph(), colors::WHITE);
    assert_eq!(
        frame.lit_indices().as_slice(),
        &[0, 1, 2, 3, 4, 6, 12, 15, 18, 21, 22, 23]
    );
}

#[test]
fn digit_nine_lights_hand_computed_physical_indices() {
    // Rows 11111, 10001, 11111, 00001, 00001 pushed through the wiring table.
    let frame = render(&Digit::new(9).unwrap().glyph(), colors::WHITE);
    assert_eq!(
        frame.lit_indices().as_slice(),
        &[0, 9, 10, 11, 12, 13, 14, 15, 19, 20, 21, 22, 23, 24]
    );
}

#[test]
fn unlit_pixels_are_the_zero_color() {
    let frame = render(&Digit::new(7).unwrap().glyph(), TEST_COLOR);
    for &pixel in frame.iter() {
        assert!(pixel == TEST_COLOR || pixel == OFF);
    }
}

#[test]
fn render_is_idempotent() {
    let glyph = Digit::new(5).unwrap().glyph();
    assert_eq!(render(&glyph, TEST_COLOR), render(&glyph, TEST_COLOR));
}

#[test]
fn blank_frame_is_all_off() {
    assert!(blank().lit_indices().is_empty());
}
