//! Step the NeoPixel ring through every lit count, including the ones just
//! outside the ring, to check the wiring and the colour bands.

#![no_std]
#![no_main]

use defmt::info;

use embassy_executor::Spawner;
use embassy_time::Timer;

use tank_gauge::{Band, RING_SIZE};

use {defmt_rtt as _, panic_probe as _};

#[macro_use]
pub mod lib_resources;
pub mod lib_ring;

use crate::lib_resources::{AssignedResources, PeriNeopixel, PeriSensor, PeriSpeaker};
use crate::lib_ring::LedRing;

#[embassy_executor::main]
async fn main(_spawner: Spawner) {
    let p = embassy_rp::init(Default::default());
    let r = split_resources! {p};

    let mut ring = LedRing::new(r.neopixel);
    ring.clear().await;

    loop {
        // Empty to full, then back down again.
        for lit in -1..=RING_SIZE as i32 {
            info!("Lit pixels: {=i32} ({})", lit, Band::for_lit_pixels(lit));
            ring.gauge(lit).await;
            Timer::after_secs(1).await;
        }

        for lit in (-1..RING_SIZE as i32).rev() {
            info!("Lit pixels: {=i32} ({})", lit, Band::for_lit_pixels(lit));
            ring.gauge(lit).await;
            Timer::after_millis(250).await;
        }
    }
}
