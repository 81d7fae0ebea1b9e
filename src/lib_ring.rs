use defmt::debug;

use embassy_rp::{
    bind_interrupts,
    peripherals::PIO0,
    pio::{InterruptHandler as PIOInterruptHandler, Pio},
    pio_programs::ws2812::{PioWs2812, PioWs2812Program},
};

use tank_gauge::{dim, render, Frame, OFF, RING_SIZE};

use crate::lib_resources::PeriNeopixel;

bind_interrupts!(struct Irqs {
    PIO0_IRQ_0 => PIOInterruptHandler<PIO0>;		// NeoPixel ring
});

// The NeoPixel ring. Colours are set in `frame` and only go out on `show()`.
pub struct LedRing<'d> {
    ws2812: PioWs2812<'d, PIO0, 0, RING_SIZE>,
    frame: Frame,
}

impl LedRing<'static> {
    pub fn new(r: PeriNeopixel) -> Self {
        let Pio {
            mut common, sm0, ..
        } = Pio::new(r.pio, Irqs);
        let program = PioWs2812Program::new(&mut common);
        let ws2812 = PioWs2812::new(&mut common, sm0, r.dma, r.pin, &program);

        Self {
            ws2812,
            frame: [OFF; RING_SIZE],
        }
    }

    // Push the current frame to the LEDs, at half brightness.
    pub async fn show(&mut self) {
        self.ws2812.write(&dim(&self.frame)).await;
    }

    // Turn all LEDs off.
    pub async fn clear(&mut self) {
        self.frame = [OFF; RING_SIZE];
        self.show().await;
        debug!("NeoPixel ring cleared");
    }

    // Paint the gauge for `lit_pixels` and show it.
    pub async fn gauge(&mut self, lit_pixels: i32) {
        render(lit_pixels, &mut self.frame);
        self.show().await;
    }
}
