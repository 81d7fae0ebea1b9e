//! Sound the "tank nearly full" alert every five seconds.

#![no_std]
#![no_main]

use defmt::{info, unwrap};

use embassy_executor::Spawner;
use embassy_time::{Duration, Timer};

use tank_gauge::{SineTable, ALERT_DURATION_MS};

use {defmt_rtt as _, panic_probe as _};

#[macro_use]
pub mod lib_resources;
pub mod lib_speaker;

use crate::lib_resources::{AssignedResources, PeriNeopixel, PeriSensor, PeriSpeaker};
use crate::lib_speaker::Speaker;

#[embassy_executor::main]
async fn main(_spawner: Spawner) {
    let p = embassy_rp::init(Default::default());
    let r = split_resources! {p};

    let sine_wave = unwrap!(SineTable::alert());
    info!("Tone table: {=[u16]}", sine_wave.samples());

    let mut speaker = Speaker::new(r.speaker);

    loop {
        info!("Beep");
        speaker
            .play_looped(&sine_wave, Duration::from_millis(ALERT_DURATION_MS))
            .await;

        Timer::after_secs(5).await;
    }
}
