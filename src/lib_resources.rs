use assign_resources::assign_resources;
use embassy_rp::{peripherals, Peri};

assign_resources! {
    sensor: PeriSensor {
        adc: ADC,
        pin: PIN_27 // ADC1 - level sensor, through the 10k/20k divider
    },
    neopixel: PeriNeopixel {
        pio: PIO0,
        dma: DMA_CH0,
        pin: PIN_15
    },
    speaker: PeriSpeaker {
        pwm: PWM_SLICE0,
        pin: PIN_16,   // PWM0 A
        enable: PIN_17 // Amplifier enable
    }
}

// Free pins:
// * PIN_26,
// * PIN_28
