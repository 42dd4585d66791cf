//! Current component parameters
//!
//! One [`ParameterStore`] holds the selected component type and the last
//! value set for every tunable parameter. It is passed explicitly to
//! whatever mutates it (direct input or the import pipeline); the newest
//! write always replaces the previous one.

use tracing::{debug, info};

use crate::bands::COLOR_BANDS;
use crate::components::ComponentType;
use crate::encoder::{encode, ResistorEncoding};
use crate::error::CatalogError;
use crate::led::LedColor;

/// Resistor value, tolerance and the bands derived from them
#[derive(Debug, Clone, PartialEq)]
pub struct ResistorParams {
    pub value: f64,
    pub tolerance: String,
    pub encoding: ResistorEncoding,
}

impl Default for ResistorParams {
    // 1kΩ ±5%
    fn default() -> Self {
        let bands = [&COLOR_BANDS[1], &COLOR_BANDS[0], &COLOR_BANDS[2], &COLOR_BANDS[10]];
        Self {
            value: 1000.0,
            tolerance: "5".to_string(),
            encoding: ResistorEncoding {
                band_colors: bands.map(|entry| entry.rgb),
                description: "Brown-Black-Red-Gold (1000Ω ±5%)".to_string(),
                bands,
                resistance: 1000.0,
                tolerance: 5.0,
            },
        }
    }
}

/// A single write to the store
#[derive(Debug, Clone, PartialEq)]
pub enum ParameterUpdate {
    Resistor { value: f64, tolerance: String },
    Capacitor(f64),
    Inductor(f64),
    LedColor(String),
    DcVoltage(f64),
    AcVoltage(f64),
}

impl ParameterUpdate {
    pub fn component(&self) -> ComponentType {
        match self {
            ParameterUpdate::Resistor { .. } => ComponentType::Resistor,
            ParameterUpdate::Capacitor(_) => ComponentType::Capacitor,
            ParameterUpdate::Inductor(_) => ComponentType::Inductor,
            ParameterUpdate::LedColor(_) => ComponentType::Led,
            ParameterUpdate::DcVoltage(_) => ComponentType::DcSource,
            ParameterUpdate::AcVoltage(_) => ComponentType::AcSource,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ParameterStore {
    selected: ComponentType,
    resistor: ResistorParams,
    /// μF
    capacitor: f64,
    /// mH
    inductor: f64,
    led: LedColor,
    dc_voltage: f64,
    ac_voltage: f64,
}

impl Default for ParameterStore {
    fn default() -> Self {
        Self {
            selected: ComponentType::Resistor,
            resistor: ResistorParams::default(),
            capacitor: 100.0,
            inductor: 10.0,
            led: LedColor::default(),
            dc_voltage: 12.0,
            ac_voltage: 12.0,
        }
    }
}

impl ParameterStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn select(&mut self, component: ComponentType) {
        debug!("Selected component: {}", component);
        self.selected = component;
    }

    pub fn selected(&self) -> ComponentType {
        self.selected
    }

    pub fn resistor(&self) -> &ResistorParams {
        &self.resistor
    }

    pub fn capacitor(&self) -> f64 {
        self.capacitor
    }

    pub fn inductor(&self) -> f64 {
        self.inductor
    }

    pub fn led(&self) -> &LedColor {
        &self.led
    }

    pub fn dc_voltage(&self) -> f64 {
        self.dc_voltage
    }

    pub fn ac_voltage(&self) -> f64 {
        self.ac_voltage
    }

    /// Re-encode the resistor. Nothing changes when the encode fails.
    pub fn set_resistor(
        &mut self,
        value: f64,
        tolerance: &str,
    ) -> Result<&ResistorEncoding, CatalogError> {
        let encoding = encode(value, tolerance)?;
        info!("Resistor set to {}", encoding.description);
        self.resistor = ResistorParams {
            value,
            tolerance: tolerance.trim().to_string(),
            encoding,
        };
        Ok(&self.resistor.encoding)
    }

    pub fn set_capacitor(&mut self, microfarads: f64) {
        self.capacitor = microfarads;
    }

    pub fn set_inductor(&mut self, millihenries: f64) {
        self.inductor = millihenries;
    }

    pub fn set_led_color(&mut self, color: impl Into<String>) {
        self.led = LedColor::new(color);
    }

    pub fn set_dc_voltage(&mut self, volts: f64) {
        self.dc_voltage = volts;
    }

    pub fn set_ac_voltage(&mut self, volts: f64) {
        self.ac_voltage = volts;
    }

    /// Apply one update; only a resistor update can fail
    pub fn apply(&mut self, update: &ParameterUpdate) -> Result<(), CatalogError> {
        match update {
            ParameterUpdate::Resistor { value, tolerance } => {
                self.set_resistor(*value, tolerance)?;
            }
            ParameterUpdate::Capacitor(value) => self.set_capacitor(*value),
            ParameterUpdate::Inductor(value) => self.set_inductor(*value),
            ParameterUpdate::LedColor(color) => self.set_led_color(color.clone()),
            ParameterUpdate::DcVoltage(value) => self.set_dc_voltage(*value),
            ParameterUpdate::AcVoltage(value) => self.set_ac_voltage(*value),
        }
        debug!("Applied {:?}", update);
        Ok(())
    }

    /// Lines describing a component with its current parameters
    pub fn readout(&self, component: ComponentType) -> Vec<String> {
        let mut lines = vec![
            component.label().to_string(),
            component.description().to_string(),
        ];

        match component {
            ComponentType::Resistor => {
                let encoding = &self.resistor.encoding;
                lines.push(format!("Color code: {}", encoding.description));
                let colors = encoding
                    .band_colors
                    .iter()
                    .map(|color| match color {
                        Some(rgb) => rgb.to_string(),
                        None => "(unpainted)".to_string(),
                    })
                    .collect::<Vec<_>>()
                    .join(" ");
                lines.push(format!("Bands: {}", colors));
            }
            ComponentType::Capacitor => lines.push(format!("Capacitance: {}μF", self.capacitor)),
            ComponentType::Inductor => lines.push(format!("Inductance: {}mH", self.inductor)),
            ComponentType::Led => {
                lines.push(format!("Color: {} ({})", self.led.name(), self.led.as_str()));
                if let Some(rgb) = self.led.rgb() {
                    lines.push(format!("Display: {}", rgb));
                }
                lines.push(format!("Wavelength: {}", self.led.wavelength()));
            }
            ComponentType::DcSource => lines.push(format!("Voltage: {:.1}V", self.dc_voltage)),
            ComponentType::AcSource => lines.push(format!("Voltage: {:.1}V", self.ac_voltage)),
            _ => {}
        }

        lines
    }
}
