//! A simple indicator output with a heartbeat blink.

use embassy_rp::Peri;
use embassy_rp::gpio::{Level, Output};
use embassy_time::{Duration, Timer};

/// An indicator LED on a plain GPIO output.
pub struct Indicator<'a> {
    output: Output<'a>,
}

impl<'a> Indicator<'a> {
    /// Creates the indicator, initially off.
    #[must_use]
    pub fn new<P: embassy_rp::gpio::Pin>(pin: Peri<'a, P>) -> Self {
        Self {
            output: Output::new(pin, Level::Low),
        }
    }

    /// Drives the indicator on or off.
    pub fn set(&mut self, on: bool) {
        self.output.set_level(if on { Level::High } else { Level::Low });
    }

    /// One blink: on for `phase`, then off for `phase`.
    ///
    /// The two delays are the only suspension points in the render loop.
    pub async fn blink(&mut self, phase: Duration) {
        self.set(true);
        Timer::after(phase).await;
        self.set(false);
        Timer::after(phase).await;
    }
}
