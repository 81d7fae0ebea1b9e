//! Turn ADC codes into volts, and volts into the line we log.

use core::fmt::{self, Write};

use heapless::String;

/// ADC reference voltage. The sensor's 0-10V output goes through a 10k/20k
/// divider, so full scale on the pin is 3.3V.
pub const REFERENCE_VOLTS: f64 = 3.3;

/// Number of steps in a 16-bit raw sample.
pub const FULL_SCALE: f64 = 65536.0;

// Room for "Voltage: " and any value a u16 can produce.
const LINE_CAPACITY: usize = 32;

/// Convert a 16-bit raw sample (0-65535) to volts (0-3.3).
pub fn get_voltage(raw: u16) -> f64 {
    (raw as f64 * REFERENCE_VOLTS) / FULL_SCALE
}

/// Widen a 12-bit ADC code to the 16-bit range by bit replication.
///
/// The top four bits are copied into the bottom so 0x000 maps to 0x0000 and
/// 0xFFF maps to 0xFFFF, the same scaling CircuitPython's `AnalogIn` uses.
/// Anything above bit 11 is ignored.
pub fn widen_12bit(code: u16) -> u16 {
    let code = code & 0x0FFF;
    (code << 4) | (code >> 8)
}

/// The per-iteration log line, `Voltage: %f` style (six decimals).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct VoltageLine(pub f64);

impl fmt::Display for VoltageLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Voltage: {:.6}", self.0)
    }
}

/// Render a `VoltageLine` into a fixed buffer so it can be handed to `defmt` as a `str`.
pub fn format_voltage_line(volts: f64) -> String<LINE_CAPACITY> {
    let mut line = String::new();

    // Only overflows for absurd values, in which case we log what fits.
    let _ = write!(line, "{}", VoltageLine(volts));
    line
}

// ================================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn voltage_matches_exact_ratio() {
        // raw * 3.3 / 65536 == raw * 33 / 655360 exactly; allow a few ulps.
        for raw in 0..=u16::MAX {
            let exact = raw as u64 * 33;
            let scaled = get_voltage(raw) * 655_360.0;

            assert!(
                (scaled - exact as f64).abs() < 1e-6,
                "raw {}: {} vs {}",
                raw,
                scaled,
                exact
            );
        }
    }

    #[test]
    fn voltage_is_monotonic() {
        let mut last = get_voltage(0);
        for raw in 1..=u16::MAX {
            let volts = get_voltage(raw);
            assert!(volts >= last, "raw {} went backwards", raw);
            last = volts;
        }
    }

    #[test]
    fn voltage_stays_below_reference() {
        assert_eq!(get_voltage(0), 0.0);
        assert!(get_voltage(u16::MAX) < REFERENCE_VOLTS);
    }

    #[test]
    fn widening_covers_full_range() {
        assert_eq!(widen_12bit(0), 0);
        assert_eq!(widen_12bit(0x0FFF), 0xFFFF);
        assert_eq!(widen_12bit(0x0800), 0x8008);
        assert_eq!(widen_12bit(0x0001), 0x0010);
    }

    #[test]
    fn widening_ignores_high_bits() {
        assert_eq!(widen_12bit(0xF123), widen_12bit(0x0123));
    }

    #[test]
    fn line_has_six_decimals() {
        assert_eq!(format_voltage_line(1.2).as_str(), "Voltage: 1.200000");
        assert_eq!(format_voltage_line(0.0).as_str(), "Voltage: 0.000000");
        assert_eq!(
            format_voltage_line(get_voltage(637)).as_str(),
            "Voltage: 0.032076"
        );
        assert_eq!(
            format_voltage_line(get_voltage(u16::MAX)).as_str(),
            "Voltage: 3.299950"
        );
    }
}
