//! Debounced two-button digit selection state.
//!
//! [`DigitSelect`] owns the current digit and the debounce bookkeeping behind
//! one synchronization boundary, so a button edge handler (interrupt context,
//! or a spawned watch task) and the render loop can share it with an
//! at-most-one-writer-at-a-time discipline on any platform.

use core::cell::RefCell;

use embassy_sync::blocking_mutex::Mutex;
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_time::{Duration, Instant};

use crate::digit::Digit;

/// Minimum elapsed time between accepted button edges.
///
/// Edges closer together than this are treated as switch bounce and ignored.
pub const DEBOUNCE_WINDOW: Duration = Duration::from_millis(200);

struct SelectState {
    digit: Digit,
    last_accepted: Option<Instant>,
}

/// Shared digit-selection state: current digit plus the debounce gate.
///
/// Writers call [`offer_edge`](Self::offer_edge) from the button edge
/// handler; the render loop reads with [`digit`](Self::digit). Both go
/// through a critical-section mutex, so the single-writer contract holds even
/// on multi-core or preemptible platforms.
pub struct DigitSelect {
    state: Mutex<CriticalSectionRawMutex, RefCell<SelectState>>,
}

impl DigitSelect {
    /// Creates the selection state, starting at digit 0 with the debounce
    /// gate open.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            state: Mutex::new(RefCell::new(SelectState {
                digit: Digit::ZERO,
                last_accepted: None,
            })),
        }
    }

    /// The currently selected digit.
    #[must_use]
    pub fn digit(&self) -> Digit {
        self.state.lock(|cell| cell.borrow().digit)
    }

    /// Offers a raw button edge observed at `now` to the debounce gate.
    ///
    /// Returns `None` when the edge falls inside [`DEBOUNCE_WINDOW`] of the
    /// last accepted edge; the state is untouched. Otherwise the edge is
    /// accepted: the gate timestamp advances and the *current pin levels*
    /// decide the mutation — increment when button A reads pressed, else
    /// decrement when button B reads pressed, else leave the digit alone.
    /// `Some(digit)` reports the (possibly unchanged) selection and doubles
    /// as the cue to blank the display.
    ///
    /// Sampling levels rather than the edge's originating pin reproduces the
    /// reference firmware: with both buttons held, button A always wins.
    pub fn offer_edge(
        &self,
        now: Instant,
        increment_pressed: bool,
        decrement_pressed: bool,
    ) -> Option<Digit> {
        self.state.lock(|cell| {
            let mut state = cell.borrow_mut();

            if let Some(last) = state.last_accepted {
                if now - last <= DEBOUNCE_WINDOW {
                    return None;
                }
            }
            state.last_accepted = Some(now);

            if increment_pressed {
                state.digit = state.digit.next();
            } else if decrement_pressed {
                state.digit = state.digit.prev();
            }
            Some(state.digit)
        })
    }
}

impl Default for DigitSelect {
    fn default() -> Self {
        Self::new()
    }
}
