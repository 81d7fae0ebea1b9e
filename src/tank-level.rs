//! Read the holding tank level sensor and show the level on the NeoPixel ring.
//! Beep when the tank is nearly full.

#![no_std]
#![no_main]

use defmt::{debug, info, unwrap};

use embassy_executor::Spawner;
use embassy_time::{Duration, Timer};

use tank_gauge::{
    format_voltage_line, lit_pixels, should_alert, SineTable, ALERT_DURATION_MS, LOOP_PERIOD_MS,
};

use {defmt_rtt as _, panic_probe as _};

// External "defines".
#[macro_use]
pub mod lib_resources;
pub mod lib_ring;
pub mod lib_sensor;
pub mod lib_speaker;

use crate::lib_resources::{AssignedResources, PeriNeopixel, PeriSensor, PeriSpeaker};
use crate::lib_ring::LedRing;
use crate::lib_sensor::LevelSensor;
use crate::lib_speaker::Speaker;

// Everything the loop owns. Set up once, kept until power off.
struct TankGauge {
    sensor: LevelSensor<'static>,
    ring: LedRing<'static>,
    speaker: Speaker<'static>,
    sine_wave: SineTable,
}

impl TankGauge {
    // One pass: sample, render, maybe alert.
    async fn poll(&mut self) {
        // Echo the voltage out the debug probe.
        let level_volts = self.sensor.read_volts().await;
        info!("{=str}", format_voltage_line(level_volts).as_str());

        // Now turn the voltage into a pixel display.
        let lit = lit_pixels(level_volts);
        debug!("Lit pixels: {=i32}", lit);
        self.ring.gauge(lit).await;

        // Nearly full, blocks for the length of the beep.
        if should_alert(lit) {
            info!("Tank nearly full");
            self.speaker
                .play_looped(&self.sine_wave, Duration::from_millis(ALERT_DURATION_MS))
                .await;
        }
    }
}

// ================================================================================

#[embassy_executor::main]
async fn main(_spawner: Spawner) {
    let p = embassy_rp::init(Default::default());
    let r = split_resources! {p};

    info!("Start");
    info!(
        "Application: {}, v{}/{}",
        env!("CARGO_PKG_NAME"),
        env!("CARGO_PKG_VERSION"),
        env!("GIT_HASH")
    );

    // =====
    //  1. Initialize the NeoPixel ring and turn all LEDs off.
    let mut ring = LedRing::new(r.neopixel);
    ring.clear().await;
    info!("NeoPixel ring initialized");

    // =====
    //  2. Compute the alert tone. Constant input, can't really fail.
    let sine_wave = unwrap!(SineTable::alert());
    info!("Alert tone computed ({=usize} samples)", sine_wave.len());

    // =====
    //  3. Enable the speaker. The PWM starts out silent.
    let speaker = Speaker::new(r.speaker);
    info!("Speaker initialized");

    // =====
    //  4. Initialize the level sensor.
    let sensor = LevelSensor::new(r.sensor);
    info!("Level sensor initialized");

    let mut gauge = TankGauge {
        sensor,
        ring,
        speaker,
        sine_wave,
    };

    // =====
    //  5. Main loop - runs forever.
    loop {
        gauge.poll().await;
        Timer::after_millis(LOOP_PERIOD_MS).await;
    }
}
