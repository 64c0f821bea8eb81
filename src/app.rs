//! The orchestration loop: render the selected digit, blink the heartbeat,
//! and react to debounced button events.
//!
//! Button edges are watched by [`digit_select_watch`], a spawned task that
//! plays the role of the edge interrupt handler: it offers each raw edge to
//! the debounce gate and, on acceptance, messages the main loop instead of
//! touching the display itself. [`run`] owns all display I/O.

use embassy_futures::select::{Either3, select, select3};
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::signal::Signal;
use embassy_time::{Duration, Instant};

use crate::Result;
use crate::button::Button;
use crate::digit::Digit;
use crate::frame::Rgb;
use crate::indicator::Indicator;
use crate::panel::DigitPanel;
use crate::render::render;
use crate::select::DigitSelect;

/// Indicator heartbeat phase: on for 200 ms, off for 200 ms.
pub const HEARTBEAT_PHASE: Duration = Duration::from_millis(200);

/// Dim white used for lit digit pixels.
pub const DIGIT_COLOR: Rgb = Rgb::new(10, 10, 10);

/// Carries each accepted selection from the watch task to [`run`].
pub type ChangedSignal = Signal<CriticalSectionRawMutex, Digit>;

/// Cancellation token for [`run`]. Never signalled in normal operation; it
/// exists so the loop has a deterministic way out.
pub type CancelToken = Signal<CriticalSectionRawMutex, ()>;

/// Watches both select buttons and feeds their edges to the debounce gate.
///
/// On either button's press edge, the *current levels* of both buttons are
/// sampled and offered to `digit_select` — button A first, so A wins a
/// simultaneous press, exactly like the reference firmware's shared handler.
/// Accepted edges are signalled to the render loop.
#[embassy_executor::task]
pub async fn digit_select_watch(
    mut button_a: Button<'static>,
    mut button_b: Button<'static>,
    digit_select: &'static DigitSelect,
    changed: &'static ChangedSignal,
) -> ! {
    loop {
        select(
            button_a.wait_for_press_edge(),
            button_b.wait_for_press_edge(),
        )
        .await;

        let accepted = digit_select.offer_edge(
            Instant::now(),
            button_a.is_pressed(),
            button_b.is_pressed(),
        );
        if let Some(digit) = accepted {
            changed.signal(digit);
        }
    }
}

/// The main loop: render the current digit in dim white, transmit it, and
/// blink the indicator once per iteration.
///
/// An accepted button event blanks the panel as a transition cue; the blank
/// holds for one full heartbeat period before the next iteration redraws the
/// new digit. The blink delays are the loop's only suspension points. Returns
/// only when `cancel` is signalled.
pub async fn run(
    panel: &mut DigitPanel<'_>,
    indicator: &mut Indicator<'_>,
    digit_select: &'static DigitSelect,
    changed: &'static ChangedSignal,
    cancel: &CancelToken,
) -> Result<()> {
    loop {
        let frame = render(&digit_select.digit().glyph(), DIGIT_COLOR);
        panel.write_frame(&frame).await;

        match select3(
            changed.wait(),
            cancel.wait(),
            indicator.blink(HEARTBEAT_PHASE),
        )
        .await
        {
            Either3::First(digit) => {
                defmt::info!("selected digit {}", digit);
                indicator.set(false);
                panel.blank().await;
                // Keep the matrix dark through one heartbeat so the
                // transition cue is visible before the redraw.
                indicator.blink(HEARTBEAT_PHASE).await;
            }
            Either3::Second(()) => {
                indicator.set(false);
                panel.blank().await;
                return Ok(());
            }
            Either3::Third(()) => {}
        }
    }
}
