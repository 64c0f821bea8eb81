//! One-digit display with two-button select, on the reference wiring:
//! matrix data GPIO 7, indicator LED GPIO 13, button A (increment) GPIO 6,
//! button B (decrement) GPIO 5. Buttons are wired to ground.
#![no_std]
#![no_main]

use core::convert::Infallible;
use core::future;

use digit_panel::{
    Result,
    app::{self, CancelToken, ChangedSignal},
    button::{Button, PressedTo},
    indicator::Indicator,
    panel::DigitPanel,
    select::DigitSelect,
};
use embassy_executor::Spawner;
use embassy_sync::signal::Signal;
use {defmt_rtt as _, panic_probe as _};

static DIGIT_SELECT: DigitSelect = DigitSelect::new();
static CHANGED: ChangedSignal = Signal::new();
static CANCEL: CancelToken = Signal::new();

#[embassy_executor::main]
async fn main(spawner: Spawner) -> ! {
    let err = inner_main(spawner).await.unwrap_err();
    core::panic!("{err}");
}

async fn inner_main(spawner: Spawner) -> Result<Infallible> {
    let p = embassy_rp::init(Default::default());

    let mut panel = DigitPanel::new(p.PIO0, p.DMA_CH0, p.PIN_7);
    let mut indicator = Indicator::new(p.PIN_13);
    let button_a = Button::new(p.PIN_6, PressedTo::Ground);
    let button_b = Button::new(p.PIN_5, PressedTo::Ground);

    spawner.spawn(app::digit_select_watch(
        button_a,
        button_b,
        &DIGIT_SELECT,
        &CHANGED,
    ))?;

    app::run(&mut panel, &mut indicator, &DIGIT_SELECT, &CHANGED, &CANCEL).await?;
    future::pending().await // the cancel token is never signalled here
}
