//! Command runner for partbench
//!
//! Carries out one CLI action against a fresh [`ParameterStore`] and writes
//! the result to a text sink.

use crate::{
    bands::ColorCode,
    components::ComponentType,
    config::{Action, Config},
    error::{Result, ResultExt},
    grid::load_grid,
    import::{HeaderDetection, ImportReport, TableImporter},
    progress::ProgressTracker,
    store::ParameterStore,
};
use anyhow::Context;
use std::io::Write;
use std::path::Path;
use tracing::info;

pub struct CatalogApp {
    config: Config,
    progress_tracker: ProgressTracker,
    importer: TableImporter,
    store: ParameterStore,
}

impl CatalogApp {
    pub fn new(config: Config) -> Self {
        let progress_enabled = !config.no_progress;

        Self {
            config,
            progress_tracker: ProgressTracker::new(progress_enabled),
            importer: TableImporter::new(),
            store: ParameterStore::new(),
        }
    }

    pub fn store(&self) -> &ParameterStore {
        &self.store
    }

    /// Run the configured action, writing human-readable output to `out`
    pub fn run<W: Write>(&mut self, out: &mut W) -> Result<()> {
        self.config
            .validate()
            .context("Configuration validation failed")?;

        match self.config.action.clone() {
            Action::Encode { value, tolerance } => self.run_encode(value, &tolerance, out),
            Action::Import { path, show } => self.run_import(&path, show, out),
            Action::Show { component } => {
                self.store.select(component);
                self.print_readout(component, out)
            }
            Action::Bands => Self::print_bands(out),
        }
    }

    fn run_encode<W: Write>(&mut self, value: f64, tolerance: &str, out: &mut W) -> Result<()> {
        self.store
            .set_resistor(value, tolerance)
            .with_component_context("resistor")?;
        self.store.select(ComponentType::Resistor);

        let encoding = &self.store.resistor().encoding;
        writeln!(out, "{}", encoding.description)?;
        for (band, entry) in encoding.bands.iter().enumerate() {
            let color = entry
                .rgb
                .map(|rgb| rgb.to_string())
                .unwrap_or_else(|| "(unpainted)".to_string());
            writeln!(out, "  band {}: {:<7} {}", band + 1, entry.display_name(), color)?;
        }
        Ok(())
    }

    fn run_import<W: Write>(
        &mut self,
        path: &Path,
        show: ComponentType,
        out: &mut W,
    ) -> Result<()> {
        let start = std::time::Instant::now();

        let spinner = self
            .progress_tracker
            .create_spinner(&format!("Loading {}...", path.display()));
        let grid = match load_grid(path) {
            Ok(grid) => grid,
            Err(err) => {
                ProgressTracker::finish_with_error(spinner, "Loading failed");
                return Err(err);
            }
        };
        ProgressTracker::finish_progress(spinner, "Sheet loaded");

        let progress = self.progress_tracker.create_row_progress(grid.len());
        let report = self
            .importer
            .import_with_progress(&grid, &mut self.store, |done, total| {
                ProgressTracker::set_row_position(&progress, done, total)
            })
            .with_path_context("import", path)?;
        ProgressTracker::finish_progress(progress, "Rows applied");

        info!("Import completed in {} ms", start.elapsed().as_millis());

        Self::print_report(&report, out)?;
        writeln!(out)?;
        self.store.select(show);
        self.print_readout(show, out)
    }

    fn print_report<W: Write>(report: &ImportReport, out: &mut W) -> Result<()> {
        match report.header {
            HeaderDetection::DetectedAt(index) => {
                writeln!(out, "Header: row {} of the non-blank rows", index + 1)?
            }
            HeaderDetection::DefaultedToZero => {
                writeln!(out, "Header: none detected, first row used")?
            }
        }
        writeln!(
            out,
            "Rows: {} applied, {} skipped, {} ignored",
            report.applied.len(),
            report.skipped.len(),
            report.ignored
        )?;
        for skipped in &report.skipped {
            writeln!(
                out,
                "  line {}: {:?} skipped ({})",
                skipped.line, skipped.kind, skipped.reason
            )?;
        }
        Ok(())
    }

    fn print_readout<W: Write>(&self, component: ComponentType, out: &mut W) -> Result<()> {
        for line in self.store.readout(component) {
            writeln!(out, "{}", line)?;
        }
        Ok(())
    }

    fn print_bands<W: Write>(out: &mut W) -> Result<()> {
        writeln!(
            out,
            "{:<8} {:>5} {:>10} {:>9}  color",
            "name", "digit", "multiplier", "tolerance"
        )?;
        for entry in ColorCode::entries() {
            let digit = entry.digit.map(|d| d.to_string()).unwrap_or_default();
            let multiplier = entry.multiplier.map(|m| m.to_string()).unwrap_or_default();
            let tolerance = entry
                .tolerance
                .map(|t| format!("±{}%", t))
                .unwrap_or_default();
            let color = entry.rgb.map(|rgb| rgb.to_string()).unwrap_or_default();
            writeln!(
                out,
                "{:<8} {:>5} {:>10} {:>9}  {}",
                entry.name, digit, multiplier, tolerance, color
            )?;
        }
        Ok(())
    }
}
