#![allow(missing_docs)]
//! Host tests for the digit counter and the debounce gate.

use digit_panel::digit::Digit;
use digit_panel::frame::colors;
use digit_panel::render::render;
use digit_panel::select::{DEBOUNCE_WINDOW, DigitSelect};
use embassy_time::{Duration, Instant};

fn at_ms(millis: u64) -> Instant {
    Instant::from_millis(millis)
}

// ============================================================================
// Digit counter
// ============================================================================

#[test]
fn increment_then_decrement_is_identity_from_every_state() {
    for value in 0..Digit::COUNT {
        let digit = Digit::new(value).unwrap();
        assert_eq!(digit.next().prev(), digit);
        assert_eq!(digit.prev().next(), digit);
    }
}

#[test]
fn counter_wraps_at_both_ends() {
    assert_eq!(Digit::new(9).unwrap().next(), Digit::ZERO);
    assert_eq!(Digit::ZERO.prev(), Digit::new(9).unwrap());
}

// ============================================================================
// Debounce gate
// ============================================================================

#[test]
fn first_edge_is_accepted() {
    let select = DigitSelect::new();
    assert_eq!(select.offer_edge(at_ms(5), true, false), Digit::new(1).ok());
    assert_eq!(select.digit(), Digit::new(1).unwrap());
}

#[test]
fn edges_inside_the_window_are_discarded() {
    let select = DigitSelect::new();
    assert!(select.offer_edge(at_ms(1000), true, false).is_some());
    assert_eq!(select.offer_edge(at_ms(1100), true, false), None);
    assert_eq!(select.digit(), Digit::new(1).unwrap());
}

#[test]
fn edge_at_exactly_the_window_is_discarded() {
    let select = DigitSelect::new();
    assert!(select.offer_edge(at_ms(1000), true, false).is_some());
    let boundary = at_ms(1000) + DEBOUNCE_WINDOW;
    assert_eq!(select.offer_edge(boundary, true, false), None);
}

#[test]
fn edges_past_the_window_each_mutate_once() {
    let select = DigitSelect::new();
    assert!(select.offer_edge(at_ms(1000), true, false).is_some());
    assert!(select.offer_edge(at_ms(1201), true, false).is_some());
    assert!(select.offer_edge(at_ms(1402), true, false).is_some());
    assert_eq!(select.digit(), Digit::new(3).unwrap());
}

#[test]
fn discarded_edges_do_not_extend_the_window() {
    let select = DigitSelect::new();
    assert!(select.offer_edge(at_ms(1000), true, false).is_some());
    // Bounce right before the window closes...
    assert_eq!(select.offer_edge(at_ms(1199), true, false), None);
    // ...must not push acceptance past the original window.
    assert!(select.offer_edge(at_ms(1201), true, false).is_some());
    assert_eq!(select.digit(), Digit::new(2).unwrap());
}

#[test]
fn button_a_wins_a_simultaneous_press() {
    let select = DigitSelect::new();
    assert_eq!(
        select.offer_edge(at_ms(50), true, true),
        Digit::new(1).ok()
    );
}

#[test]
fn accepted_edge_with_no_level_asserted_reports_but_does_not_mutate() {
    // The level can already be released by the time the handler samples it;
    // the edge still consumes the gate and blanks the display.
    let select = DigitSelect::new();
    assert_eq!(select.offer_edge(at_ms(50), false, false), Some(Digit::ZERO));
    assert_eq!(select.digit(), Digit::ZERO);
}

#[test]
fn window_spacing_uses_the_accepted_timestamp() {
    let select = DigitSelect::new();
    let start = at_ms(10_000);
    assert!(select.offer_edge(start, false, true).is_some());
    let just_past = start + DEBOUNCE_WINDOW + Duration::from_millis(1);
    assert!(select.offer_edge(just_past, false, true).is_some());
    assert_eq!(select.digit(), Digit::new(8).unwrap());
}

// ============================================================================
// End-to-end scenario
// ============================================================================

#[test]
fn decrement_from_zero_shows_the_nine_glyph() {
    let select = DigitSelect::new();
    let digit = select.offer_edge(at_ms(500), false, true).unwrap();
    assert_eq!(digit, Digit::new(9).unwrap());

    let frame = render(&digit.glyph(), colors::WHITE);
    assert_eq!(
        frame.lit_indices().as_slice(),
        &[0, 9, 10, 11, 12, 13, 14, 15, 19, 20, 21, 22, 23, 24]
    );
}

#[test]
fn increment_from_zero_shows_digit_one() {
    let select = DigitSelect::new();
    let digit = select.offer_edge(at_ms(500), true, false).unwrap();
    assert_eq!(digit, Digit::new(1).unwrap());

    // Rows 00100, 01100, 00100, 00100, 01110 through the wiring table.
    let frame = render(&digit.glyph(), colors::WHITE);
    assert_eq!(
        frame.lit_indices().as_slice(),
        &[1, 2, 3, 7, 12, 16, 17, 22]
    );
}
