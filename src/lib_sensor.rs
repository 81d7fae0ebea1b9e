use defmt::{trace, unwrap};

use embassy_rp::{
    adc::{Adc, Async, Channel, Config as AdcConfig, InterruptHandler},
    bind_interrupts,
    gpio::Pull,
};

use tank_gauge::{get_voltage, widen_12bit};

use crate::lib_resources::PeriSensor;

bind_interrupts!(struct Irqs {
    ADC_IRQ_FIFO => InterruptHandler;			// Level sensor
});

// The Senix outputs 0-10V over a sensing range of 0-36 inches. A 10k/20k divider
// brings that down to the 0-3.3V the ADC can take.
pub struct LevelSensor<'d> {
    adc: Adc<'d, Async>,
    channel: Channel<'d>,
}

impl LevelSensor<'static> {
    pub fn new(r: PeriSensor) -> Self {
        let adc = Adc::new(r.adc, Irqs, AdcConfig::default());

        // No pull, the divider sets the level.
        let channel = Channel::new_pin(r.pin, Pull::None);

        Self { adc, channel }
    }

    // Read the sensor, as a 16-bit (0-65535) raw sample.
    // A failed conversion means the hardware is broken, nothing to do but stop.
    pub async fn read_raw(&mut self) -> u16 {
        let code = unwrap!(self.adc.read(&mut self.channel).await);
        trace!("ADC code: {=u16}", code);

        widen_12bit(code)
    }

    // Read the sensor, in volts (0-3.3V).
    pub async fn read_volts(&mut self) -> f64 {
        get_voltage(self.read_raw().await)
    }
}
