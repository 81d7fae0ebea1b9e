//! Read the tank level sensor and log what the gauge would make of it.

#![no_std]
#![no_main]

use defmt::info;

use embassy_executor::Spawner;
use embassy_time::Timer;

use tank_gauge::{get_voltage, lit_pixels, should_alert, Band};

use {defmt_rtt as _, panic_probe as _};

#[macro_use]
pub mod lib_resources;
pub mod lib_sensor;

use crate::lib_resources::{AssignedResources, PeriNeopixel, PeriSensor, PeriSpeaker};
use crate::lib_sensor::LevelSensor;

#[embassy_executor::main]
async fn main(_spawner: Spawner) {
    let p = embassy_rp::init(Default::default());
    let r = split_resources! {p};

    let mut sensor = LevelSensor::new(r.sensor);

    loop {
        let raw = sensor.read_raw().await;
        let volts = get_voltage(raw);
        let lit = lit_pixels(volts);

        info!(
            "Level sensor: raw={=u16}, {=f64}V, lit={=i32} ({}), alert={=bool}",
            raw,
            volts,
            lit,
            Band::for_lit_pixels(lit),
            should_alert(lit)
        );

        Timer::after_secs(5).await;
    }
}
