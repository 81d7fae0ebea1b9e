//! Hardware independent part of the tank level display.
//!
//! Everything here is plain arithmetic on values the firmware reads from, or
//! writes to, the hardware: ADC codes in, ring frames and audio samples out.

#![cfg_attr(not(test), no_std)]

pub mod gauge;
pub mod tone;
pub mod voltage;

pub use crate::gauge::{
    dim, lit_pixels, render, should_alert, Band, Calibration, Frame, Rgb, ALERT_THRESHOLD,
    BRIGHTNESS, OFF, RING_SIZE,
};
pub use crate::tone::{pwm_compare, SineTable, ToneError, ALERT_DURATION_MS, PWM_TOP};
pub use crate::voltage::{format_voltage_line, get_voltage, widen_12bit, VoltageLine};

// How often the main loop samples the sensor.
pub const LOOP_PERIOD_MS: u64 = 100;
