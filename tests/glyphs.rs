#![allow(missing_docs)]
//! Host tests for the digit glyph table.

use digit_panel::Error;
use digit_panel::digit::Digit;
use digit_panel::glyph::{Glyph, glyph};

/// The reference 10×5 bit matrix, one row per line, written out literally.
const REFERENCE_ROWS: [[u8; 5]; 10] = [
    [0b11111, 0b10001, 0b10001, 0b10001, 0b11111], // 0
    [0b00100, 0b01100, 0b00100, 0b00100, 0b01110], // 1
    [0b01110, 0b10010, 0b00100, 0b01000, 0b11111], // 2
    [0b11111, 0b00001, 0b00111, 0b00001, 0b11111], // 3
    [0b10001, 0b10001, 0b11111, 0b00001, 0b00001], // 4
    [0b11111, 0b10000, 0b11111, 0b00001, 0b11111], // 5
    [0b11111, 0b10000, 0b11111, 0b10001, 0b11111], // 6
    [0b11111, 0b00001, 0b00001, 0b00001, 0b00001], // 7
    [0b11111, 0b10001, 0b11111, 0b10001, 0b11111], // 8
    [0b11111, 0b10001, 0b11111, 0b00001, 0b00001], // 9
];

#[test]
fn all_ten_glyphs_match_reference_rows() {
    for (value, expected) in REFERENCE_ROWS.iter().enumerate() {
        let glyph = glyph(value as u8).unwrap();
        assert_eq!(glyph.rows(), expected, "glyph for digit {value}");
    }
}

#[test]
fn digit_glyph_agrees_with_raw_lookup() {
    for value in 0..Digit::COUNT {
        let digit = Digit::new(value).unwrap();
        assert_eq!(digit.glyph(), glyph(value).unwrap());
    }
}

#[test]
fn out_of_range_lookup_is_explicit() {
    for value in [10, 11, u8::MAX] {
        assert!(matches!(
            glyph(value),
            Err(Error::DigitOutOfRange { digit }) if digit == value
        ));
    }
}

#[test]
fn is_lit_reads_high_bit_as_left_column() {
    let glyph = Glyph([0b10000, 0, 0, 0, 0b00001]);
    assert!(glyph.is_lit(0, 0));
    assert!(!glyph.is_lit(0, 4));
    assert!(glyph.is_lit(4, 4));
    assert!(!glyph.is_lit(4, 0));
}

#[test]
fn is_lit_out_of_range_reads_unlit() {
    let glyph = Glyph([0b11111; 5]);
    assert!(!glyph.is_lit(5, 0));
    assert!(!glyph.is_lit(0, 5));
}

#[test]
fn blank_glyph_has_no_lit_pixels() {
    for row in 0..Glyph::SIZE {
        for col in 0..Glyph::SIZE {
            assert!(!Glyph::BLANK.is_lit(row, col));
        }
    }
}
