// SPDX-FileCopyrightText: 2025 partbench contributors
// SPDX-License-Identifier: Apache-2.0

//! partbench - electronic component catalog core
//!
//! Encodes resistor values as four-band color codes and imports component
//! parameters (resistor value and tolerance, capacitance, inductance, LED
//! color, source voltages) from CSV files and spreadsheets.
//!
//! ```
//! use partbench::{encode, ParameterStore, TableImporter};
//!
//! let encoding = encode(4700.0, "5").unwrap();
//! assert_eq!(encoding.band_names(), "Yellow-Violet-Red-Gold");
//!
//! let grid = vec![
//!     vec!["component".to_string(), "value".to_string()],
//!     vec!["capacitor".to_string(), "47".to_string()],
//! ];
//! let mut store = ParameterStore::new();
//! TableImporter::new().import(&grid, &mut store).unwrap();
//! assert_eq!(store.capacitor(), 47.0);
//! ```

pub mod app;
pub mod bands;
pub mod components;
pub mod config;
pub mod encoder;
pub mod error;
pub mod grid;
pub mod import;
pub mod led;
pub mod progress;
pub mod store;

pub use app::CatalogApp;
pub use bands::{BandRole, ColorBandEntry, ColorCode, Rgb};
pub use components::ComponentType;
pub use config::{Action, Config};
pub use encoder::{encode, significand, ResistorEncoding, Significand};
pub use error::{CatalogError, Result};
pub use import::{ComponentKind, Grid, HeaderDetection, ImportReport, TableImporter};
pub use store::{ParameterStore, ParameterUpdate};
