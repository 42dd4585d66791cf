//! Catalog of component types
//!
//! Every entry the catalog can display, with the keyword used to select it
//! and the short text shown beside its model.

use std::fmt;
use std::str::FromStr;

use crate::error::CatalogError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ComponentType {
    Resistor,
    Capacitor,
    Inductor,
    Diode,
    Led,
    Bjt,
    Fet,
    Mosfet,
    Jfet,
    Igbt,
    Ujt,
    Phototransistor,
    DcSource,
    AcSource,
    Battery,
    BatteryPack,
    SolarPanel,
    DcMotor,
    StepperMotor,
    ServoMotor,
    Breadboard,
    Wire,
}

impl ComponentType {
    pub const ALL: [ComponentType; 22] = [
        ComponentType::Resistor,
        ComponentType::Capacitor,
        ComponentType::Inductor,
        ComponentType::Diode,
        ComponentType::Led,
        ComponentType::Bjt,
        ComponentType::Fet,
        ComponentType::Mosfet,
        ComponentType::Jfet,
        ComponentType::Igbt,
        ComponentType::Ujt,
        ComponentType::Phototransistor,
        ComponentType::DcSource,
        ComponentType::AcSource,
        ComponentType::Battery,
        ComponentType::BatteryPack,
        ComponentType::SolarPanel,
        ComponentType::DcMotor,
        ComponentType::StepperMotor,
        ComponentType::ServoMotor,
        ComponentType::Breadboard,
        ComponentType::Wire,
    ];

    /// Lower-case selector keyword
    pub fn keyword(&self) -> &'static str {
        match self {
            ComponentType::Resistor => "resistor",
            ComponentType::Capacitor => "capacitor",
            ComponentType::Inductor => "inductor",
            ComponentType::Diode => "diode",
            ComponentType::Led => "led",
            ComponentType::Bjt => "bjt",
            ComponentType::Fet => "fet",
            ComponentType::Mosfet => "mosfet",
            ComponentType::Jfet => "jfet",
            ComponentType::Igbt => "igbt",
            ComponentType::Ujt => "ujt",
            ComponentType::Phototransistor => "phototransistor",
            ComponentType::DcSource => "dcsource",
            ComponentType::AcSource => "acsource",
            ComponentType::Battery => "battery",
            ComponentType::BatteryPack => "batterypack",
            ComponentType::SolarPanel => "solarpanel",
            ComponentType::DcMotor => "dcmotor",
            ComponentType::StepperMotor => "steppermotor",
            ComponentType::ServoMotor => "servomotor",
            ComponentType::Breadboard => "breadboard",
            ComponentType::Wire => "wire",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ComponentType::Resistor => "Resistor",
            ComponentType::Capacitor => "Electrolytic Capacitor",
            ComponentType::Inductor => "Inductor",
            ComponentType::Diode => "Diode",
            ComponentType::Led => "LED",
            ComponentType::Bjt => "Bipolar Junction Transistor",
            ComponentType::Fet => "Field-Effect Transistor",
            ComponentType::Mosfet => "MOSFET",
            ComponentType::Jfet => "JFET",
            ComponentType::Igbt => "IGBT",
            ComponentType::Ujt => "Unijunction Transistor",
            ComponentType::Phototransistor => "Phototransistor",
            ComponentType::DcSource => "DC Voltage Source",
            ComponentType::AcSource => "AC Voltage Source",
            ComponentType::Battery => "Battery",
            ComponentType::BatteryPack => "Battery Pack",
            ComponentType::SolarPanel => "Solar Panel",
            ComponentType::DcMotor => "DC Motor",
            ComponentType::StepperMotor => "Stepper Motor",
            ComponentType::ServoMotor => "Servo Motor",
            ComponentType::Breadboard => "Breadboard",
            ComponentType::Wire => "Jumper Wire",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            ComponentType::Resistor => {
                "Limits current; its value and tolerance are printed as four color bands."
            }
            ComponentType::Capacitor => "Stores charge between two plates; polarized, value in μF.",
            ComponentType::Inductor => "Stores energy in a magnetic field; value in mH.",
            ComponentType::Diode => "Conducts in one direction; the band marks the cathode.",
            ComponentType::Led => "Diode that emits light; color sets the wavelength.",
            ComponentType::Bjt => {
                "Three-terminal current amplifier with base, collector and emitter."
            }
            ComponentType::Fet => "Voltage-controlled transistor with gate, drain and source.",
            ComponentType::Mosfet => "FET with an insulated gate, in a TO-220 style package.",
            ComponentType::Jfet => "FET controlled through a reverse-biased junction.",
            ComponentType::Igbt => {
                "High-power switch combining a MOSFET gate with a bipolar output."
            }
            ComponentType::Ujt => "Single-junction device used in relaxation oscillators.",
            ComponentType::Phototransistor => {
                "Transistor whose base current is generated by light."
            }
            ComponentType::DcSource => "Constant voltage supply.",
            ComponentType::AcSource => "Sinusoidal voltage supply.",
            ComponentType::Battery => "Single electrochemical cell.",
            ComponentType::BatteryPack => "Cells wired in series for a higher voltage.",
            ComponentType::SolarPanel => "Photovoltaic cells converting light to current.",
            ComponentType::DcMotor => "Brushed motor turning at a speed set by its voltage.",
            ComponentType::StepperMotor => "Motor moving in fixed angular steps.",
            ComponentType::ServoMotor => "Geared motor with position feedback.",
            ComponentType::Breadboard => "Solderless board for prototyping circuits.",
            ComponentType::Wire => "Flexible jumper connecting breadboard points.",
        }
    }
}

impl fmt::Display for ComponentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

impl FromStr for ComponentType {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let keyword = s.trim().to_lowercase();
        ComponentType::ALL
            .iter()
            .copied()
            .find(|component| component.keyword() == keyword)
            .ok_or_else(|| CatalogError::UnknownComponent { keyword })
    }
}
