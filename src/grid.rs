//! Sheet loading
//!
//! Turns a CSV file or the first worksheet of a workbook into a [`Grid`] of
//! text cells. No header interpretation or type coercion happens here; a
//! file either loads completely or fails.

use calamine::{open_workbook_auto, Data, Reader};
use std::{fs::File, io::Read, path::Path};
use tracing::{debug, info};

use crate::error::{CatalogError, Result, ResultExt};
use crate::import::Grid;

/// Sheet formats the loader understands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SheetFormat {
    Csv,
    Workbook,
}

impl SheetFormat {
    pub fn from_path(path: &Path) -> Option<Self> {
        let extension = path.extension()?.to_str()?.to_lowercase();
        match extension.as_str() {
            "csv" => Some(SheetFormat::Csv),
            "xlsx" | "xlsm" | "xlsb" | "xls" | "ods" => Some(SheetFormat::Workbook),
            _ => None,
        }
    }
}

fn import_failure<E: std::fmt::Display>(err: E) -> CatalogError {
    CatalogError::import(err.to_string())
}

/// Load the cell grid of a sheet file. Every failure is a
/// [`CatalogError::ImportError`] under the path context.
pub fn load_grid(path: &Path) -> Result<Grid> {
    let format = SheetFormat::from_path(path).ok_or_else(|| {
        CatalogError::import(format!("unsupported sheet format: {}", path.display()))
    })?;
    debug!("Loading {} as {:?}", path.display(), format);

    let grid = match format {
        SheetFormat::Csv => {
            let file = File::open(path)
                .map_err(import_failure)
                .with_path_context("open", path)?;
            read_csv(file).with_path_context("parse CSV", path)?
        }
        SheetFormat::Workbook => read_workbook(path)?,
    };

    info!("Loaded {} rows from {}", grid.len(), path.display());
    Ok(grid)
}

/// Read CSV records as rows; rows may differ in length
pub fn read_csv<R: Read>(reader: R) -> Result<Grid> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(reader);

    let mut grid = Vec::new();
    for (index, record) in reader.records().enumerate() {
        let record = record.map_err(|e| {
            CatalogError::import(format!("malformed CSV record {}: {}", index + 1, e))
        })?;
        grid.push(record.iter().map(str::to_string).collect());
    }
    Ok(grid)
}

fn read_workbook(path: &Path) -> Result<Grid> {
    let mut workbook = open_workbook_auto(path)
        .map_err(import_failure)
        .with_path_context("open workbook", path)?;
    let range = workbook
        .worksheet_range_at(0)
        .ok_or_else(|| CatalogError::import(format!("{} has no worksheets", path.display())))?
        .map_err(import_failure)
        .with_path_context("read first worksheet of", path)?;

    Ok(range
        .rows()
        .map(|row| row.iter().map(cell_text).collect())
        .collect())
}

fn cell_text(cell: &Data) -> String {
    match cell {
        Data::Empty => String::new(),
        other => other.to_string(),
    }
}
