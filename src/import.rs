//! Spreadsheet parameter import
//!
//! Takes the text grid of a decoded sheet, finds its header row, resolves the
//! `component`, `value`, `tolerance` and `color` columns, and applies every
//! recognized data row to a [`ParameterStore`] in order. A bad row is
//! skipped and recorded; only an unusable grid fails the import.

use std::fmt;

use tracing::{debug, info, warn};

use crate::error::CatalogError;
use crate::store::{ParameterStore, ParameterUpdate};

/// Rows of text cells as produced by a sheet decoder; empty cells are `""`
pub type Grid = Vec<Vec<String>>;

/// Highest row index still accepted as a detected header
pub const HEADER_SEARCH_LIMIT: usize = 25;

/// Outcome of the header row heuristic
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderDetection {
    DetectedAt(usize),
    DefaultedToZero,
}

impl HeaderDetection {
    /// Row index to read column names from
    pub fn index(&self) -> usize {
        match self {
            HeaderDetection::DetectedAt(index) => *index,
            HeaderDetection::DefaultedToZero => 0,
        }
    }
}

fn filled_cells(row: &[String]) -> usize {
    row.iter().filter(|cell| !cell.is_empty()).count()
}

fn is_blank(row: &[String]) -> bool {
    filled_cells(row) == 0
}

/// Pick the header row: the first row with at least as many filled cells as
/// the row after it. The last row has no successor and never qualifies.
pub fn detect_header<R: AsRef<[String]>>(rows: &[R], search_limit: usize) -> HeaderDetection {
    rows.windows(2)
        .position(|pair| filled_cells(pair[0].as_ref()) >= filled_cells(pair[1].as_ref()))
        .filter(|&index| index <= search_limit)
        .map(HeaderDetection::DetectedAt)
        .unwrap_or(HeaderDetection::DefaultedToZero)
}

/// Positions of the recognized columns in the header row
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ColumnMap {
    pub component: Option<usize>,
    pub value: Option<usize>,
    pub tolerance: Option<usize>,
    pub color: Option<usize>,
}

impl ColumnMap {
    /// Match header cells by exact name after trimming and lower-casing;
    /// the first matching cell wins
    pub fn resolve(header: &[String]) -> Self {
        let names: Vec<String> = header.iter().map(|h| h.trim().to_lowercase()).collect();
        let find = |name: &str| names.iter().position(|h| h == name);

        let columns = Self {
            component: find("component"),
            value: find("value"),
            tolerance: find("tolerance"),
            color: find("color"),
        };
        debug!("Resolved columns: {:?}", columns);
        columns
    }
}

/// Data row fields the dispatcher can require
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Value,
    Tolerance,
    Color,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Field::Value => "value",
            Field::Tolerance => "tolerance",
            Field::Color => "color",
        };
        f.write_str(name)
    }
}

/// One data row reduced to the recognized columns
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportRow {
    /// Trimmed, lower-cased component cell; empty when absent
    pub component: String,
    pub value: Option<String>,
    pub tolerance: Option<String>,
    pub color: Option<String>,
}

impl ImportRow {
    pub fn from_cells(cells: &[String], columns: &ColumnMap) -> Self {
        let cell = |position: Option<usize>| {
            position
                .and_then(|index| cells.get(index))
                .map(|text| text.trim())
                .filter(|text| !text.is_empty())
                .map(str::to_string)
        };

        Self {
            component: cell(columns.component)
                .map(|keyword| keyword.to_lowercase())
                .unwrap_or_default(),
            value: cell(columns.value),
            tolerance: cell(columns.tolerance),
            color: cell(columns.color),
        }
    }

    fn field(&self, field: Field) -> Option<&str> {
        match field {
            Field::Value => self.value.as_deref(),
            Field::Tolerance => self.tolerance.as_deref(),
            Field::Color => self.color.as_deref(),
        }
    }
}

/// Why a recognized row was not applied
#[derive(Debug, Clone, PartialEq)]
pub enum SkipReason {
    MissingField(Field),
    UnparsableNumber { field: Field, text: String },
    Rejected(CatalogError),
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipReason::MissingField(field) => write!(f, "missing {}", field),
            SkipReason::UnparsableNumber { field, text } => {
                write!(f, "{} '{}' is not a number", field, text)
            }
            SkipReason::Rejected(err) => write!(f, "{}", err),
        }
    }
}

/// Component types a sheet row can update
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ComponentKind {
    Resistor,
    Capacitor,
    Inductor,
    Led,
    DcSource,
    AcSource,
}

impl ComponentKind {
    pub fn from_keyword(keyword: &str) -> Option<Self> {
        match keyword.trim().to_lowercase().as_str() {
            "resistor" => Some(ComponentKind::Resistor),
            "capacitor" => Some(ComponentKind::Capacitor),
            "inductor" => Some(ComponentKind::Inductor),
            "led" => Some(ComponentKind::Led),
            "dcsource" => Some(ComponentKind::DcSource),
            "acsource" => Some(ComponentKind::AcSource),
            _ => None,
        }
    }

    pub fn required_fields(&self) -> &'static [Field] {
        match self {
            ComponentKind::Resistor => &[Field::Value, Field::Tolerance],
            ComponentKind::Capacitor
            | ComponentKind::Inductor
            | ComponentKind::DcSource
            | ComponentKind::AcSource => &[Field::Value],
            ComponentKind::Led => &[Field::Color],
        }
    }

    /// Build the store update for a row, checking the required fields first
    pub fn update_from(&self, row: &ImportRow) -> Result<ParameterUpdate, SkipReason> {
        if let Some(missing) = self
            .required_fields()
            .iter()
            .find(|field| row.field(**field).is_none())
        {
            return Err(SkipReason::MissingField(*missing));
        }

        let number = |field: Field| -> Result<f64, SkipReason> {
            let text = row.field(field).unwrap_or_default();
            text.parse::<f64>()
                .ok()
                .filter(|n| n.is_finite())
                .ok_or_else(|| SkipReason::UnparsableNumber {
                    field,
                    text: text.to_string(),
                })
        };

        let update = match self {
            ComponentKind::Resistor => ParameterUpdate::Resistor {
                value: number(Field::Value)?,
                tolerance: row.tolerance.clone().unwrap_or_default(),
            },
            ComponentKind::Capacitor => ParameterUpdate::Capacitor(number(Field::Value)?),
            ComponentKind::Inductor => ParameterUpdate::Inductor(number(Field::Value)?),
            ComponentKind::Led => ParameterUpdate::LedColor(row.color.clone().unwrap_or_default()),
            ComponentKind::DcSource => ParameterUpdate::DcVoltage(number(Field::Value)?),
            ComponentKind::AcSource => ParameterUpdate::AcVoltage(number(Field::Value)?),
        };
        Ok(update)
    }
}

/// An update that reached the store; `line` is the 1-based grid row
#[derive(Debug, Clone, PartialEq)]
pub struct AppliedRow {
    pub line: usize,
    pub update: ParameterUpdate,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SkippedRow {
    pub line: usize,
    pub kind: ComponentKind,
    pub reason: SkipReason,
}

/// What one import did to the store
#[derive(Debug, Clone, PartialEq)]
pub struct ImportReport {
    pub header: HeaderDetection,
    pub columns: ColumnMap,
    pub applied: Vec<AppliedRow>,
    pub skipped: Vec<SkippedRow>,
    /// Data rows whose component keyword is not importable
    pub ignored: usize,
}

impl ImportReport {
    pub fn data_rows(&self) -> usize {
        self.applied.len() + self.skipped.len() + self.ignored
    }
}

/// Applies a decoded sheet to a parameter store
#[derive(Debug, Clone)]
pub struct TableImporter {
    header_search_limit: usize,
}

impl Default for TableImporter {
    fn default() -> Self {
        Self::new()
    }
}

impl TableImporter {
    pub fn new() -> Self {
        Self {
            header_search_limit: HEADER_SEARCH_LIMIT,
        }
    }

    pub fn with_header_search_limit(mut self, limit: usize) -> Self {
        self.header_search_limit = limit;
        self
    }

    pub fn import(
        &self,
        grid: &[Vec<String>],
        store: &mut ParameterStore,
    ) -> Result<ImportReport, CatalogError> {
        self.import_with_progress(grid, store, |_, _| {})
    }

    /// Import, calling `on_row(done, total)` once before the first data row
    /// and again after each one; `total` counts data rows only
    pub fn import_with_progress<F>(
        &self,
        grid: &[Vec<String>],
        store: &mut ParameterStore,
        mut on_row: F,
    ) -> Result<ImportReport, CatalogError>
    where
        F: FnMut(usize, usize),
    {
        if grid.is_empty() {
            return Err(CatalogError::import("the sheet has no rows"));
        }

        let rows: Vec<(usize, &[String])> = grid
            .iter()
            .enumerate()
            .filter(|(_, row)| !is_blank(row))
            .map(|(index, row)| (index + 1, row.as_slice()))
            .collect();

        if rows.is_empty() {
            return Err(CatalogError::import("every row of the sheet is blank"));
        }
        debug!(
            "Kept {} of {} rows after dropping blank rows",
            rows.len(),
            grid.len()
        );

        let cells: Vec<&[String]> = rows.iter().map(|(_, row)| *row).collect();
        let header = detect_header(&cells, self.header_search_limit);
        if header == HeaderDetection::DefaultedToZero {
            warn!("No header row detected, using the first non-blank row");
        }

        let header_index = header.index();
        let columns = ColumnMap::resolve(cells[header_index]);
        info!(
            "Header found on line {} ({:?})",
            rows[header_index].0, header
        );

        let mut report = ImportReport {
            header,
            columns,
            applied: Vec::new(),
            skipped: Vec::new(),
            ignored: 0,
        };

        let data_rows = &rows[header_index + 1..];
        on_row(0, data_rows.len());
        for (count, (line, cells)) in data_rows.iter().enumerate() {
            let row = ImportRow::from_cells(cells, &columns);
            self.dispatch(*line, &row, store, &mut report);
            on_row(count + 1, data_rows.len());
        }

        info!(
            "Import finished: {} applied, {} skipped, {} ignored",
            report.applied.len(),
            report.skipped.len(),
            report.ignored
        );
        Ok(report)
    }

    fn dispatch(
        &self,
        line: usize,
        row: &ImportRow,
        store: &mut ParameterStore,
        report: &mut ImportReport,
    ) {
        let Some(kind) = ComponentKind::from_keyword(&row.component) else {
            debug!("Line {}: ignoring component '{}'", line, row.component);
            report.ignored += 1;
            return;
        };

        let outcome = kind
            .update_from(row)
            .and_then(|update| match store.apply(&update) {
                Ok(()) => Ok(update),
                Err(err) => Err(SkipReason::Rejected(err)),
            });

        match outcome {
            Ok(update) => {
                debug!("Line {}: applied {:?} to {}", line, update, update.component());
                report.applied.push(AppliedRow { line, update });
            }
            Err(reason) => {
                warn!("Line {}: skipping {:?} row, {}", line, kind, reason);
                report.skipped.push(SkippedRow { line, kind, reason });
            }
        }
    }
}
