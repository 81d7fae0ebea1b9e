use defmt::debug;

use embassy_rp::{
    gpio::{Level, Output},
    pwm::{Config as PwmConfig, Pwm},
};
use embassy_time::{Duration, Instant, Ticker};

use fixed_macro::fixed;

use tank_gauge::{pwm_compare, SineTable, PWM_TOP};

use crate::lib_resources::PeriSpeaker;

// PWM "DAC" driving the piezo/speaker amplifier.
//
// The PWM slice free runs at sys_clk / (TOP + 1), way above anything audible,
// and the duty cycle is moved to the next sample at the sample rate.
pub struct Speaker<'d> {
    _enable: Output<'d>,
    pwm: Pwm<'d>,
    config: PwmConfig,
}

impl Speaker<'static> {
    pub fn new(r: PeriSpeaker) -> Self {
        // The amplifier is switched on once and left on.
        let enable = Output::new(r.enable, Level::High);

        let mut config = PwmConfig::default();
        config.divider = fixed!(1: U12F4);
        config.top = PWM_TOP;
        config.compare_a = 0; // Silent.

        let pwm = Pwm::new_output_a(r.pwm, r.pin, config.clone());

        Self {
            _enable: enable,
            pwm,
            config,
        }
    }

    fn set_level(&mut self, compare: u16) {
        self.config.compare_a = compare;
        self.pwm.set_config(&self.config);
    }

    // Loop `table` on the speaker for `duration`, then go quiet.
    // Nothing else runs on this task in the meantime.
    pub async fn play_looped(&mut self, table: &SineTable, duration: Duration) {
        debug!(
            "Playing {=usize} sample table at {=u32}Hz for {=u64}ms",
            table.len(),
            table.sample_rate(),
            duration.as_millis()
        );

        let deadline = Instant::now() + duration;
        let mut ticker = Ticker::every(Duration::from_hz(table.sample_rate() as u64));

        for sample in table.cycle() {
            if Instant::now() >= deadline {
                break;
            }

            self.set_level(pwm_compare(sample));
            ticker.next().await;
        }

        self.stop();
    }

    pub fn stop(&mut self) {
        self.set_level(0);
    }
}
