//! Resistor color band reference table
//!
//! The standard four-band color code: each named color may stand for a
//! significant digit, a power-of-ten multiplier, a tolerance, or several of
//! these. The table is the only source of truth for encoding.

use std::fmt;

/// 24-bit display color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb(pub u32);

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:06X}", self.0 & 0xFF_FFFF)
    }
}

/// Position a color occupies on the resistor body
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BandRole {
    FirstDigit,
    SecondDigit,
    Multiplier,
    Tolerance,
}

impl fmt::Display for BandRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            BandRole::FirstDigit => "first digit",
            BandRole::SecondDigit => "second digit",
            BandRole::Multiplier => "multiplier",
            BandRole::Tolerance => "tolerance",
        };
        f.write_str(name)
    }
}

/// One row of the color code table
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorBandEntry {
    pub name: &'static str,
    pub digit: Option<u8>,
    pub multiplier: Option<f64>,
    /// Tolerance in percent
    pub tolerance: Option<f64>,
    /// `None` for the unpainted "no band" entry
    pub rgb: Option<Rgb>,
}

impl ColorBandEntry {
    const fn new(
        name: &'static str,
        digit: Option<u8>,
        multiplier: Option<f64>,
        tolerance: Option<f64>,
        rgb: Option<Rgb>,
    ) -> Self {
        Self {
            name,
            digit,
            multiplier,
            tolerance,
            rgb,
        }
    }

    /// Name with the first letter upper-cased, as shown in descriptions
    pub fn display_name(&self) -> String {
        let mut chars = self.name.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => String::new(),
        }
    }
}

pub static COLOR_BANDS: [ColorBandEntry; 13] = [
    ColorBandEntry::new("black", Some(0), Some(1.0), None, Some(Rgb(0x000000))),
    ColorBandEntry::new("brown", Some(1), Some(10.0), Some(1.0), Some(Rgb(0x8B4513))),
    ColorBandEntry::new("red", Some(2), Some(100.0), Some(2.0), Some(Rgb(0xFF0000))),
    ColorBandEntry::new("orange", Some(3), Some(1e3), None, Some(Rgb(0xFFA500))),
    ColorBandEntry::new("yellow", Some(4), Some(1e4), None, Some(Rgb(0xFFFF00))),
    ColorBandEntry::new("green", Some(5), Some(1e5), Some(0.5), Some(Rgb(0x00FF00))),
    ColorBandEntry::new("blue", Some(6), Some(1e6), Some(0.25), Some(Rgb(0x0000FF))),
    ColorBandEntry::new("violet", Some(7), Some(1e7), Some(0.1), Some(Rgb(0xEE82EE))),
    ColorBandEntry::new("gray", Some(8), Some(1e8), Some(0.05), Some(Rgb(0x808080))),
    ColorBandEntry::new("white", Some(9), Some(1e9), None, Some(Rgb(0xFFFFFF))),
    ColorBandEntry::new("gold", None, Some(0.1), Some(5.0), Some(Rgb(0xDAA520))),
    ColorBandEntry::new("silver", None, Some(0.01), Some(10.0), Some(Rgb(0xC0C0C0))),
    ColorBandEntry::new("none", None, None, Some(20.0), None),
];

const RELATIVE_EPSILON: f64 = 1e-9;

fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() <= RELATIVE_EPSILON * a.abs().max(b.abs())
}

/// Reverse lookups over [`COLOR_BANDS`]
pub struct ColorCode;

impl ColorCode {
    pub fn entries() -> &'static [ColorBandEntry] {
        &COLOR_BANDS
    }

    pub fn by_name(name: &str) -> Option<&'static ColorBandEntry> {
        let name = name.trim();
        COLOR_BANDS
            .iter()
            .find(|entry| entry.name.eq_ignore_ascii_case(name))
    }

    pub fn by_digit(digit: u8) -> Option<&'static ColorBandEntry> {
        COLOR_BANDS.iter().find(|entry| entry.digit == Some(digit))
    }

    pub fn by_multiplier(multiplier: f64) -> Option<&'static ColorBandEntry> {
        COLOR_BANDS
            .iter()
            .find(|entry| entry.multiplier.is_some_and(|m| approx_eq(m, multiplier)))
    }

    pub fn by_tolerance(percent: f64) -> Option<&'static ColorBandEntry> {
        COLOR_BANDS
            .iter()
            .find(|entry| entry.tolerance.is_some_and(|t| approx_eq(t, percent)))
    }

    /// Every tolerance the table can paint, in table order
    pub fn tolerances() -> impl Iterator<Item = f64> {
        COLOR_BANDS.iter().filter_map(|entry| entry.tolerance)
    }
}
