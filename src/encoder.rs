//! Resistor value to color band encoding
//!
//! A value is reduced to two significant digits and a power of ten, and each
//! of those plus the tolerance is looked up in the [`ColorCode`] table.

use crate::bands::{BandRole, ColorBandEntry, ColorCode, Rgb};
use crate::error::CatalogError;
use tracing::debug;

/// Smallest value the two-digit plus multiplier scheme can express
pub const MIN_ENCODABLE_OHMS: f64 = 1.0;

/// Two leading digits of a value and the power of ten that scales them back
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Significand {
    pub first: u8,
    pub second: u8,
    pub power: i32,
}

impl Significand {
    pub fn digits(&self) -> u32 {
        u32::from(self.first) * 10 + u32::from(self.second)
    }

    /// `digits * 10^power`, divided rather than multiplied for negative
    /// powers so that e.g. 4.7 prints as `4.7`
    pub fn value(&self) -> f64 {
        let digits = f64::from(self.digits());
        if self.power >= 0 {
            digits * 10f64.powi(self.power)
        } else {
            digits / 10f64.powi(-self.power)
        }
    }

    pub fn multiplier(&self) -> f64 {
        if self.power >= 0 {
            10f64.powi(self.power)
        } else {
            1.0 / 10f64.powi(-self.power)
        }
    }
}

/// Split a positive value into its significand.
///
/// The digits come from the shortest decimal rendering of the value with the
/// decimal point and leading zeros removed, so `4700`, `47` and `0.47` all
/// yield the digits 4 and 7.
pub fn significand(value: f64) -> Option<Significand> {
    if !value.is_finite() || value <= 0.0 {
        return None;
    }

    let rendered = value.to_string();
    let mut digits = rendered
        .chars()
        .filter_map(|c| c.to_digit(10))
        .skip_while(|&d| d == 0);

    let first = digits.next()? as u8;
    let second = digits.next().unwrap_or(0) as u8;
    let sig = f64::from(u32::from(first) * 10 + u32::from(second));
    let power = (value / sig).log10().round() as i32;

    Some(Significand {
        first,
        second,
        power,
    })
}

/// Four bands and description for one resistor
#[derive(Debug, Clone, PartialEq)]
pub struct ResistorEncoding {
    /// Display colors in body order: digit, digit, multiplier, tolerance
    pub band_colors: [Option<Rgb>; 4],
    pub description: String,
    pub bands: [&'static ColorBandEntry; 4],
    /// Value actually expressed by the bands
    pub resistance: f64,
    pub tolerance: f64,
}

impl ResistorEncoding {
    /// Capitalized band names joined with hyphens, e.g. `Yellow-Violet-Red-Gold`
    pub fn band_names(&self) -> String {
        self.bands
            .iter()
            .map(|entry| entry.display_name())
            .collect::<Vec<_>>()
            .join("-")
    }
}

fn parse_tolerance(text: &str) -> Option<(f64, &str)> {
    let trimmed = text.trim().trim_end_matches('%').trim_end();
    let percent = trimmed.parse::<f64>().ok()?;
    percent.is_finite().then_some((percent, trimmed))
}

/// Encode a resistance and tolerance percentage into four color bands.
///
/// Fails with [`CatalogError::InvalidValue`] below one ohm and with
/// [`CatalogError::LookupMiss`] when any band has no color in the table.
pub fn encode(value: f64, tolerance: &str) -> Result<ResistorEncoding, CatalogError> {
    if !value.is_finite() || value < MIN_ENCODABLE_OHMS {
        return Err(CatalogError::invalid_value(format!(
            "{} is below the encodable minimum of {}Ω",
            value, MIN_ENCODABLE_OHMS
        )));
    }

    let sig = significand(value).ok_or_else(|| {
        CatalogError::invalid_value(format!("{} has no significant digits", value))
    })?;

    let first = ColorCode::by_digit(sig.first).ok_or_else(|| CatalogError::LookupMiss {
        role: BandRole::FirstDigit,
        wanted: sig.first.to_string(),
    })?;
    let second = ColorCode::by_digit(sig.second).ok_or_else(|| CatalogError::LookupMiss {
        role: BandRole::SecondDigit,
        wanted: sig.second.to_string(),
    })?;
    let multiplier =
        ColorCode::by_multiplier(sig.multiplier()).ok_or_else(|| CatalogError::LookupMiss {
            role: BandRole::Multiplier,
            wanted: format!("10^{}", sig.power),
        })?;

    let (percent, tolerance_text) =
        parse_tolerance(tolerance).ok_or_else(|| CatalogError::LookupMiss {
            role: BandRole::Tolerance,
            wanted: format!("'{}'", tolerance.trim()),
        })?;
    let tolerance_band = ColorCode::by_tolerance(percent).ok_or_else(|| CatalogError::LookupMiss {
        role: BandRole::Tolerance,
        wanted: format!("{}%", tolerance_text),
    })?;

    let bands = [first, second, multiplier, tolerance_band];
    let resistance = sig.value();

    let mut encoding = ResistorEncoding {
        band_colors: bands.map(|entry| entry.rgb),
        description: String::new(),
        bands,
        resistance,
        tolerance: percent,
    };
    encoding.description = format!(
        "{} ({}Ω ±{}%)",
        encoding.band_names(),
        resistance,
        tolerance_text
    );

    debug!("Encoded {}Ω ±{}% as {}", value, tolerance_text, encoding.description);
    Ok(encoding)
}
