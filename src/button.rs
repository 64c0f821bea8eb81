//! A device abstraction for the two select buttons.
//!
//! Unlike self-debouncing button abstractions, this one stays deliberately
//! raw: it exposes the press *edge* and the current *level*, because the
//! digit-selection policy (one shared 200 ms window, levels sampled inside
//! the handler, button A checked first) lives in
//! [`DigitSelect`](crate::select::DigitSelect), not per button.

use embassy_rp::Peri;
use embassy_rp::gpio::{Input, Pull};

// ============================================================================
// PressedTo - How the button is wired
// ============================================================================

/// Describes how the button is physically wired.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd, defmt::Format)]
pub enum PressedTo {
    /// Button connects pin to voltage (3.3V) when pressed.
    /// Uses internal pull-down resistor. Pin reads HIGH when pressed.
    ///
    /// Note: The original Pico 2 (RP2350) has a known silicon bug with
    /// pull-down resistors that can cause pins to stay HIGH after button
    /// release. Use ToGround instead.
    Voltage,

    /// Button connects pin to ground (GND) when pressed.
    /// Uses internal pull-up resistor. Pin reads LOW when pressed.
    /// The reference digit-panel wiring; "asserted" means line pulled low.
    Ground,
}

// ============================================================================
// Button Virtual Device
// ============================================================================

/// A push button exposing its press edge and current level.
///
/// # Usage
///
/// A watch task waits on [`wait_for_press_edge()`](Self::wait_for_press_edge)
/// for either button, then samples both buttons' levels with
/// [`is_pressed()`](Self::is_pressed) and feeds them to the debounce gate.
pub struct Button<'a> {
    input: Input<'a>,
    pressed_to: PressedTo,
}

impl<'a> Button<'a> {
    /// Creates a new `Button` instance from a pin.
    ///
    /// The pin is configured based on the connection type:
    /// - [`PressedTo::Voltage`]: Uses internal pull-down (button to 3.3V)
    /// - [`PressedTo::Ground`]: Uses internal pull-up (button to GND)
    #[must_use]
    pub fn new<P: embassy_rp::gpio::Pin>(pin: Peri<'a, P>, pressed_to: PressedTo) -> Self {
        let pull = match pressed_to {
            PressedTo::Voltage => Pull::Down,
            PressedTo::Ground => Pull::Up,
        };
        Self {
            input: Input::new(pin, pull),
            pressed_to,
        }
    }

    /// Returns whether the button is currently pressed (line asserted).
    #[must_use]
    pub fn is_pressed(&self) -> bool {
        match self.pressed_to {
            PressedTo::Voltage => self.input.is_high(),
            PressedTo::Ground => self.input.is_low(),
        }
    }

    /// Waits for the next press edge (GPIO edge interrupt, not polling).
    ///
    /// For ground-wired buttons this is the falling edge of the line. No
    /// debouncing happens here; bounce filtering is the debounce gate's job.
    pub async fn wait_for_press_edge(&mut self) {
        match self.pressed_to {
            PressedTo::Voltage => self.input.wait_for_rising_edge().await,
            PressedTo::Ground => self.input.wait_for_falling_edge().await,
        }
    }
}
