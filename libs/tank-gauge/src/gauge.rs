//! Map a level voltage onto the NeoPixel ring.
//!
//! The sensor sits at the top of the tank and measures distance to the
//! surface, so a *lower* voltage means a *fuller* tank:
//!
//! * Full  = ~1.0V
//! * Half  = ~2.5V
//! * Empty = ~3.3V
//!
//! Each LED covers 0.33V. The ring is lit from index 9 downwards and the whole
//! lit region gets one colour, picked from the total number of lit LEDs.

use smart_leds::{brightness, RGB8};

pub type Rgb = RGB8;

/// Number of LEDs on the ring.
pub const RING_SIZE: usize = 10;

pub type Frame = [Rgb; RING_SIZE];

pub const OFF: Rgb = Rgb::new(0, 0, 0);

/// Ring brightness, 128/255 ~ 0.5.
pub const BRIGHTNESS: u8 = 128;

/// Lit count at, or above, which the tank counts as near full.
pub const ALERT_THRESHOLD: i32 = 8;

// Band limits, inclusive.
const YELLOW_MAX: i32 = 7;
const GREEN_MAX: i32 = 4;

// Absorbs f64 rounding of a voltage sitting exactly on a band edge. Far below
// half an LSB of the 16-bit scale (~25µV), so real readings never move band.
const EDGE_TOLERANCE: f64 = 1e-9;

/// Level sensor calibration, fixed by the physical installation.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Calibration {
    /// Voltage of the "empty" reference.
    pub zero_volts: f64,
    /// Voltage covered by one LED.
    pub band_volts: f64,
}

impl Calibration {
    /// Calibration of the holding tank this was built for.
    pub const INSTALLED: Self = Self {
        zero_volts: 2.75 * 0.33,
        band_volts: 0.33,
    };

    /// Number of LED positions (less one) to light for a voltage.
    ///
    /// `9 - floor((volts - zero) / band)`. Not clamped: voltages outside the
    /// calibrated window give values below 0 or above 9.
    pub fn lit_pixels(&self, volts: f64) -> i32 {
        let bands = libm::floor((volts - self.zero_volts) / self.band_volts + EDGE_TOLERANCE);

        (RING_SIZE as i32 - 1) - bands as i32
    }
}

impl Default for Calibration {
    fn default() -> Self {
        Self::INSTALLED
    }
}

/// `Calibration::INSTALLED.lit_pixels(volts)`.
pub fn lit_pixels(volts: f64) -> i32 {
    Calibration::INSTALLED.lit_pixels(volts)
}

/// Whether the lit count should sound the alert.
pub fn should_alert(lit_pixels: i32) -> bool {
    lit_pixels >= ALERT_THRESHOLD
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Band {
    Red,
    Yellow,
    Green,
}

impl Band {
    /// Pick the colour band for the whole lit region.
    pub fn for_lit_pixels(lit_pixels: i32) -> Self {
        // Checked in order, green wins when both apply.
        let mut band = Band::Red;
        if lit_pixels <= YELLOW_MAX {
            band = Band::Yellow;
        }
        if lit_pixels <= GREEN_MAX {
            band = Band::Green;
        }

        band
    }

    pub const fn colour(self) -> Rgb {
        match self {
            Band::Red => Rgb::new(0x10, 0, 0),
            Band::Yellow => Rgb::new(0x10, 0x10, 0),
            Band::Green => Rgb::new(0, 0x10, 0),
        }
    }
}

/// Paint every slot of `frame` for the given lit count.
///
/// Position `i` (0..=9) lives at ring index `9 - i` and is lit when
/// `i <= lit_pixels`. All ten slots are written, so the frame never holds
/// anything from a previous pass.
pub fn render(lit_pixels: i32, frame: &mut Frame) {
    let colour = Band::for_lit_pixels(lit_pixels).colour();

    for i in 0..RING_SIZE {
        frame[RING_SIZE - 1 - i] = if (i as i32) <= lit_pixels { colour } else { OFF };
    }
}

/// Scale a frame down to the ring brightness before it goes on the wire.
pub fn dim(frame: &Frame) -> Frame {
    let mut dimmed = [OFF; RING_SIZE];

    for (slot, colour) in dimmed
        .iter_mut()
        .zip(brightness(frame.iter().copied(), BRIGHTNESS))
    {
        *slot = colour;
    }

    dimmed
}

// ================================================================================
