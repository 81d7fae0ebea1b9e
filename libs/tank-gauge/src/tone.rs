//! The "tank is nearly full" beep.
//!
//! One cycle of a sine wave is computed once at startup and looped by the
//! speaker for as long as the alert lasts.

use core::f64::consts::PI;

use heapless::Vec;
use thiserror_no_std::Error;

/// Alert tone, A4.
pub const FREQUENCY: u32 = 440;

/// Rate at which the speaker walks through the table.
pub const SAMPLE_RATE: u32 = 8000;

/// How long one alert lasts.
pub const ALERT_DURATION_MS: u64 = 1_000;

/// Largest table we keep room for (lowest tone = sample rate / 64).
pub const MAX_TABLE_LEN: usize = 64;

/// PWM counter wrap. 10 bits, ~122kHz carrier at 125MHz.
pub const PWM_TOP: u16 = 1023;

// Samples are u16, the PWM compare register counts to PWM_TOP.
const PWM_SHIFT: u32 = 16 - 10;

// The phase step is always 2π/18, whatever the table length is.
const PHASE_DIVISOR: f64 = 18.0;

const MIDPOINT: f64 = 32768.0;
const AMPLITUDE: f64 = 32767.0;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ToneError {
    #[error("frequency and sample rate must both be non-zero")]
    ZeroFrequency,
    #[error("frequency {frequency}Hz is above the sample rate {sample_rate}Hz")]
    EmptyTable { frequency: u32, sample_rate: u32 },
    #[error("a {0} sample table does not fit")]
    TableTooLong(usize),
}

/// A single cycle of the alert waveform, as unsigned 16-bit samples.
#[derive(Clone, Debug, PartialEq)]
pub struct SineTable {
    samples: Vec<u16, MAX_TABLE_LEN>,
    sample_rate: u32,
}

impl SineTable {
    /// Build a table of `sample_rate / frequency` samples.
    ///
    /// Sample `i` is `round(sin(2π·i/18) · 32767 + 32768)`.
    pub fn new(frequency: u32, sample_rate: u32) -> Result<Self, ToneError> {
        if frequency == 0 || sample_rate == 0 {
            return Err(ToneError::ZeroFrequency);
        }

        let length = (sample_rate / frequency) as usize;
        if length == 0 {
            return Err(ToneError::EmptyTable {
                frequency,
                sample_rate,
            });
        }
        if length > MAX_TABLE_LEN {
            return Err(ToneError::TableTooLong(length));
        }

        let mut samples = Vec::new();
        for i in 0..length {
            let phase = PI * 2.0 * i as f64 / PHASE_DIVISOR;
            let value = libm::round(libm::sin(phase) * AMPLITUDE + MIDPOINT);

            samples
                .push(value as u16)
                .map_err(|_| ToneError::TableTooLong(length))?;
        }

        Ok(Self {
            samples,
            sample_rate,
        })
    }

    /// The 440Hz / 8kHz table the alert uses.
    pub fn alert() -> Result<Self, ToneError> {
        Self::new(FREQUENCY, SAMPLE_RATE)
    }

    pub fn samples(&self) -> &[u16] {
        &self.samples
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    /// Loop over the table forever.
    pub fn cycle(&self) -> impl Iterator<Item = u16> + '_ {
        self.samples.iter().copied().cycle()
    }
}

/// Scale a 16-bit sample to a PWM compare value in `0..=PWM_TOP`.
pub fn pwm_compare(sample: u16) -> u16 {
    sample >> PWM_SHIFT
}

// ================================================================================

#[cfg(test)]
mod tests {
    use super::*;

    const EXPECTED: [u16; 18] = [
        32768, 43975, 53830, 61145, 65037, 65037, 61145, 53830, 43975, 32768, 21561, 11706, 4391,
        499, 499, 4391, 11706, 21561,
    ];

    #[test]
    fn alert_table() {
        let table = SineTable::alert().unwrap();

        assert_eq!(table.len(), 18);
        assert_eq!(table.sample_rate(), 8000);
        assert_eq!(table.samples()[0], 32768);
        assert_eq!(table.samples(), &EXPECTED[..]);
    }

    #[test]
    fn phase_step_ignores_table_length() {
        // 8000 / 250 = 32 samples, the second cycle repeats the first.
        let table = SineTable::new(250, 8000).unwrap();

        assert_eq!(table.len(), 32);
        assert_eq!(&table.samples()[..18], &EXPECTED[..]);
        assert_eq!(&table.samples()[18..], &EXPECTED[..14]);
    }

    #[test]
    fn table_length_rounds_down() {
        assert_eq!(SineTable::new(3000, 8000).unwrap().len(), 2);
        assert_eq!(SineTable::new(8000, 8000).unwrap().len(), 1);
    }

    #[test]
    fn bad_parameters() {
        assert_eq!(SineTable::new(0, 8000), Err(ToneError::ZeroFrequency));
        assert_eq!(SineTable::new(440, 0), Err(ToneError::ZeroFrequency));
        assert_eq!(
            SineTable::new(9000, 8000),
            Err(ToneError::EmptyTable {
                frequency: 9000,
                sample_rate: 8000
            })
        );
        assert_eq!(SineTable::new(100, 8000), Err(ToneError::TableTooLong(80)));
    }

    #[test]
    fn error_messages() {
        assert_eq!(
            ToneError::TableTooLong(80).to_string(),
            "a 80 sample table does not fit"
        );
        assert_eq!(
            ToneError::EmptyTable {
                frequency: 9000,
                sample_rate: 8000
            }
            .to_string(),
            "frequency 9000Hz is above the sample rate 8000Hz"
        );
    }

    #[test]
    fn cycle_wraps_around() {
        let table = SineTable::alert().unwrap();
        let looped: std::vec::Vec<u16> = table.cycle().skip(17).take(3).collect();

        assert_eq!(looped, [21561, 32768, 43975]);
    }

    #[test]
    fn pwm_compare_fits_counter() {
        assert_eq!(pwm_compare(0), 0);
        assert_eq!(pwm_compare(32768), 512);
        assert_eq!(pwm_compare(u16::MAX), PWM_TOP);

        let table = SineTable::alert().unwrap();
        assert!(table.cycle().take(100).all(|s| pwm_compare(s) <= PWM_TOP));
    }

    #[test]
    fn looped_table_sounds_near_the_tone() {
        let table = SineTable::alert().unwrap();

        // 8000 / 18 = 444.4Hz, the table length rounds the 440Hz down.
        let played = table.sample_rate() as f64 / table.len() as f64;
        assert!((played - FREQUENCY as f64).abs() / (FREQUENCY as f64) < 0.02);

        // One alert walks the table 444 full times and part of the next.
        let samples = SAMPLE_RATE as u64 * ALERT_DURATION_MS / 1_000;
        assert_eq!(samples / table.len() as u64, 444);
    }
}
