//! The hardware transmit collaborator: a PIO-driven WS2812 digit panel.
//!
//! This is the thin driver layer under the pure renderer. One call pushes a
//! whole 25-pixel frame to the strip over DMA and returns when the transfer
//! completes; there are no partial-frame writes.

use embassy_rp::Peri;
use embassy_rp::bind_interrupts;
use embassy_rp::dma::Channel;
use embassy_rp::peripherals::PIO0;
use embassy_rp::pio::{InterruptHandler, Pio, PioPin};
use embassy_rp::pio_programs::ws2812::{Grb, PioWs2812, PioWs2812Program};

use crate::layout::PIXEL_COUNT;
use crate::render::{PanelFrame, blank};

bind_interrupts!(struct Irqs {
    PIO0_IRQ_0 => InterruptHandler<PIO0>;
});

/// The 5×5 WS2812 panel on a PIO0 state machine.
pub struct DigitPanel<'d> {
    driver: PioWs2812<'d, PIO0, 0, PIXEL_COUNT, Grb>,
}

impl<'d> DigitPanel<'d> {
    /// Claims PIO0, a DMA channel, and the data pin, and loads the WS2812
    /// program (800 kHz, GRB wire order).
    #[must_use]
    pub fn new(pio: Peri<'d, PIO0>, dma: Peri<'d, impl Channel>, pin: Peri<'d, impl PioPin>) -> Self {
        let Pio {
            mut common, sm0, ..
        } = Pio::new(pio, Irqs);
        let program = PioWs2812Program::new(&mut common);
        let driver = PioWs2812::new(&mut common, sm0, dma, pin, &program);
        Self { driver }
    }

    /// Transmits one full frame; returns when the DMA transfer is done.
    pub async fn write_frame(&mut self, frame: &PanelFrame) {
        self.driver.write(&frame.0).await;
    }

    /// Transmits an all-off frame.
    pub async fn blank(&mut self) {
        self.write_frame(&blank()).await;
    }
}
