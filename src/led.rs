//! LED color handling
//!
//! The color is kept exactly as entered; the name and wavelength readouts
//! come from a small table of pure hues keyed by upper-case hex.

use regex::Regex;

use crate::bands::Rgb;

const KNOWN_HUES: &[(&str, &str, &str)] = &[
    ("#FF0000", "Red", "620-630nm"),
    ("#00FF00", "Green", "515-530nm"),
    ("#0000FF", "Blue", "465-475nm"),
    ("#FFFFFF", "White", "Broad spectrum"),
    ("#FFFF00", "Yellow", "570-590nm"),
    ("#FF00FF", "Magenta", "390-405nm"),
    ("#00FFFF", "Cyan", "490-500nm"),
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LedColor {
    text: String,
}

impl LedColor {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    /// The color exactly as supplied
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Parsed display color when the text is a `#RRGGBB` literal
    pub fn rgb(&self) -> Option<Rgb> {
        let re = Regex::new(r"^#([0-9A-Fa-f]{6})$").ok()?;
        let caps = re.captures(self.text.trim())?;
        u32::from_str_radix(&caps[1], 16).ok().map(Rgb)
    }

    fn known_hue(&self) -> Option<&'static (&'static str, &'static str, &'static str)> {
        let key = self.text.trim().to_uppercase();
        KNOWN_HUES.iter().find(|(hex, _, _)| *hex == key)
    }

    pub fn name(&self) -> &'static str {
        self.known_hue().map(|(_, name, _)| *name).unwrap_or("Custom")
    }

    pub fn wavelength(&self) -> &'static str {
        self.known_hue()
            .map(|(_, _, wavelength)| *wavelength)
            .unwrap_or("Varies")
    }
}

impl Default for LedColor {
    fn default() -> Self {
        Self::new("#00FF00")
    }
}
