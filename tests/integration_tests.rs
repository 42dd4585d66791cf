//! Integration tests for partbench
//!
//! Exercises the encoder, the import pipeline and the CLI runner through the
//! public API.

use partbench::{
    config::{Action, Config},
    encode,
    grid::load_grid,
    import::{Field, SkipReason},
    CatalogApp, CatalogError, ColorCode, ComponentKind, ComponentType, Grid, HeaderDetection,
    ParameterStore, ParameterUpdate, TableImporter,
};
use std::{fs, io::Write, path::PathBuf};
use tempfile::TempDir;
use zip::write::SimpleFileOptions;

const PARTS_CSV: &str = "Parts list exported 2025-03-01,,,\n\
,,,\n\
Component,Value,Tolerance,Color\n\
resistor,4700,5,\n\
capacitor,220,,\n\
led,,,#FF0000\n\
dcsource,9,,\n\
gizmo,1,,\n";

fn grid(rows: &[&[&str]]) -> Grid {
    rows.iter()
        .map(|row| row.iter().map(|cell| cell.to_string()).collect())
        .collect()
}

fn write_sheet(name: &str, content: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join(name);
    fs::write(&path, content).expect("Failed to write test sheet");
    (temp_dir, path)
}

const WORKBOOK_PARTS: &[(&str, &str)] = &[
    (
        "[Content_Types].xml",
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Types xmlns="http://schemas.openxmlformats.org/package/2006/content-types"><Default Extension="rels" ContentType="application/vnd.openxmlformats-package.relationships+xml"/><Default Extension="xml" ContentType="application/xml"/><Override PartName="/xl/workbook.xml" ContentType="application/vnd.openxmlformats-officedocument.spreadsheetml.sheet.main+xml"/><Override PartName="/xl/worksheets/sheet1.xml" ContentType="application/vnd.openxmlformats-officedocument.spreadsheetml.worksheet+xml"/></Types>"#,
    ),
    (
        "_rels/.rels",
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships"><Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/officeDocument" Target="xl/workbook.xml"/></Relationships>"#,
    ),
    (
        "xl/workbook.xml",
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<workbook xmlns="http://schemas.openxmlformats.org/spreadsheetml/2006/main" xmlns:r="http://schemas.openxmlformats.org/officeDocument/2006/relationships"><sheets><sheet name="Parts" sheetId="1" r:id="rId1"/></sheets></workbook>"#,
    ),
    (
        "xl/_rels/workbook.xml.rels",
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships"><Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/worksheet" Target="worksheets/sheet1.xml"/></Relationships>"#,
    ),
    (
        "xl/worksheets/sheet1.xml",
        r##"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<worksheet xmlns="http://schemas.openxmlformats.org/spreadsheetml/2006/main"><sheetData><row r="1"><c r="A1" t="inlineStr"><is><t>Parts list</t></is></c></row><row r="2"><c r="A2" t="inlineStr"><is><t>Component</t></is></c><c r="B2" t="inlineStr"><is><t>Value</t></is></c><c r="C2" t="inlineStr"><is><t>Tolerance</t></is></c><c r="D2" t="inlineStr"><is><t>Color</t></is></c></row><row r="3"><c r="A3" t="inlineStr"><is><t>resistor</t></is></c><c r="B3"><v>4700</v></c><c r="C3"><v>5</v></c></row><row r="4"><c r="A4" t="inlineStr"><is><t>led</t></is></c><c r="D4" t="inlineStr"><is><t>#FF0000</t></is></c></row></sheetData></worksheet>"##,
    ),
];

fn write_workbook(name: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join(name);
    let file = fs::File::create(&path).expect("Failed to create workbook");

    let mut zip = zip::ZipWriter::new(file);
    let options =
        SimpleFileOptions::default().compression_method(zip::CompressionMethod::Stored);
    for (part, content) in WORKBOOK_PARTS {
        zip.start_file(*part, options)
            .expect("Failed to start workbook part");
        zip.write_all(content.as_bytes())
            .expect("Failed to write workbook part");
    }
    zip.finish().expect("Failed to finish workbook");

    (temp_dir, path)
}

#[test]
fn test_every_table_tolerance_encodes_to_four_bands() {
    let values = [1.0, 4.7, 10.0, 22.0, 100.0, 330.0, 4700.0, 56_000.0, 1e6, 9.1e10];

    for tolerance in ColorCode::tolerances() {
        for value in values {
            let encoding = encode(value, &tolerance.to_string())
                .unwrap_or_else(|e| panic!("{} ±{}% failed: {}", value, tolerance, e));
            assert_eq!(encoding.band_colors.len(), 4);
            assert_eq!(encoding.bands.len(), 4);
        }
    }
}

#[test]
fn test_encode_reference_value() {
    let encoding = encode(4700.0, "5").expect("4.7k should encode");

    assert_eq!(encoding.band_names(), "Yellow-Violet-Red-Gold");
    assert!(encoding.description.contains("4700Ω ±5%"));
    assert_eq!(encode(4700.0, "5"), Ok(encoding));
}

#[test]
fn test_encode_rejects_sub_unity_values() {
    for value in [0.0, 0.5, 0.47] {
        assert!(matches!(
            encode(value, "10"),
            Err(CatalogError::InvalidValue { .. })
        ));
    }
}

#[test]
fn test_header_detection_in_import() {
    let rows = grid(&[
        &["Title"],
        &["Component", "Value", "Tolerance", "Color"],
        &["resistor", "4700", "5", ""],
    ]);
    let mut store = ParameterStore::new();

    let report = TableImporter::new()
        .import(&rows, &mut store)
        .expect("import should succeed");

    assert_eq!(report.header, HeaderDetection::DetectedAt(1));
    assert_eq!(store.resistor().value, 4700.0);
    assert_eq!(
        store.resistor().encoding.band_names(),
        "Yellow-Violet-Red-Gold"
    );
}

#[test]
fn test_import_dispatch() {
    let rows = grid(&[
        &["component", "value", "tolerance", "color"],
        &["resistor", "220", "5", ""],
        &["led", "", "", "#00FF00"],
        &["unknown", "100", "", ""],
    ]);
    let mut store = ParameterStore::new();
    store.set_led_color("#0000FF");
    let defaults = ParameterStore::new();

    let report = TableImporter::new()
        .import(&rows, &mut store)
        .expect("import should succeed");

    assert_eq!(store.resistor().value, 220.0);
    assert_eq!(store.resistor().tolerance, "5");
    assert_eq!(
        store.resistor().encoding.description,
        "Red-Red-Brown-Gold (220Ω ±5%)"
    );
    assert_eq!(store.led().as_str(), "#00FF00");
    assert_eq!(store.capacitor(), defaults.capacitor());
    assert_eq!(store.inductor(), defaults.inductor());
    assert_eq!(store.dc_voltage(), defaults.dc_voltage());
    assert_eq!(store.ac_voltage(), defaults.ac_voltage());

    assert_eq!(report.applied.len(), 2);
    assert_eq!(report.ignored, 1);
    assert!(report.skipped.is_empty());
}

#[test]
fn test_led_row_updates_only_led() {
    let rows = grid(&[
        &["component", "value", "tolerance", "color"],
        &["led", "", "", "#00FF00"],
    ]);
    let mut store = ParameterStore::new();
    store.set_led_color("#FFFFFF");
    let mut expected = store.clone();
    expected.set_led_color("#00FF00");

    TableImporter::new()
        .import(&rows, &mut store)
        .expect("import should succeed");

    assert_eq!(store, expected);
}

#[test]
fn test_last_write_wins() {
    let rows = grid(&[
        &["component", "value", "tolerance", "color"],
        &["resistor", "100", "1", ""],
        &["resistor", "68000", "10", ""],
    ]);
    let mut store = ParameterStore::new();

    let report = TableImporter::new()
        .import(&rows, &mut store)
        .expect("import should succeed");

    assert_eq!(report.applied.len(), 2);
    assert_eq!(store.resistor().value, 68_000.0);
    assert_eq!(store.resistor().tolerance, "10");
    assert_eq!(
        store.resistor().encoding.band_names(),
        "Blue-Gray-Orange-Silver"
    );
}

#[test]
fn test_blank_rows_are_excluded() {
    let rows = grid(&[
        &["", "", "", ""],
        &["component", "value", "tolerance", "color"],
        &["", ""],
        &["inductor", "33", "", ""],
        &[],
        &["acsource", "120", "", ""],
    ]);
    let mut store = ParameterStore::new();

    let report = TableImporter::new()
        .import(&rows, &mut store)
        .expect("import should succeed");

    assert_eq!(report.header, HeaderDetection::DetectedAt(0));
    assert_eq!(report.data_rows(), 2);
    assert_eq!(report.applied[0].line, 4);
    assert_eq!(report.applied[1].update, ParameterUpdate::AcVoltage(120.0));
    assert_eq!(store.inductor(), 33.0);
    assert_eq!(store.ac_voltage(), 120.0);
}

#[test]
fn test_bad_rows_are_skipped_without_partial_updates() {
    let rows = grid(&[
        &["component", "value", "tolerance", "color"],
        &["resistor", "0.5", "5", ""],
        &["resistor", "1000", "3", ""],
        &["resistor", "1000", "", ""],
        &["capacitor", "lots", "", ""],
        &["led", "", "", ""],
    ]);
    let mut store = ParameterStore::new();
    let before = store.clone();

    let report = TableImporter::new()
        .import(&rows, &mut store)
        .expect("row problems never fail the import");

    assert_eq!(store, before);
    assert_eq!(report.skipped.len(), 5);
    assert!(matches!(
        report.skipped[0].reason,
        SkipReason::Rejected(CatalogError::InvalidValue { .. })
    ));
    assert!(matches!(
        report.skipped[1].reason,
        SkipReason::Rejected(CatalogError::LookupMiss { .. })
    ));
    assert_eq!(
        report.skipped[2].reason,
        SkipReason::MissingField(Field::Tolerance)
    );
    assert_eq!(report.skipped[3].kind, ComponentKind::Capacitor);
    assert_eq!(
        report.skipped[4].reason,
        SkipReason::MissingField(Field::Color)
    );
}

#[test]
fn test_missing_component_column_ignores_every_row() {
    let rows = grid(&[&["part", "value"], &["capacitor", "1"]]);
    let mut store = ParameterStore::new();

    let report = TableImporter::new()
        .import(&rows, &mut store)
        .expect("import should succeed");

    assert_eq!(report.columns.component, None);
    assert_eq!(report.ignored, 1);
    assert_eq!(store.capacitor(), 100.0);
}

#[test]
fn test_empty_grid_is_import_error() {
    let mut store = ParameterStore::new();
    assert!(matches!(
        TableImporter::new().import(&Grid::new(), &mut store),
        Err(CatalogError::ImportError { .. })
    ));
}

#[test]
fn test_load_csv_and_import() {
    let (_dir, path) = write_sheet("parts.csv", PARTS_CSV);
    let rows = load_grid(&path).expect("csv should load");
    let mut store = ParameterStore::new();

    let report = TableImporter::new()
        .import(&rows, &mut store)
        .expect("import should succeed");

    assert_eq!(report.header, HeaderDetection::DetectedAt(1));
    assert_eq!(report.applied.len(), 4);
    assert_eq!(report.ignored, 1);
    assert_eq!(store.capacitor(), 220.0);
    assert_eq!(store.led().name(), "Red");
    assert_eq!(store.dc_voltage(), 9.0);
}

#[test]
fn test_load_workbook_and_import() {
    let (_dir, path) = write_workbook("parts.xlsx");
    let rows = load_grid(&path).expect("workbook should load");

    assert_eq!(rows.len(), 4);
    assert_eq!(rows[0], vec!["Parts list", "", "", ""]);
    assert_eq!(rows[2], vec!["resistor", "4700", "5", ""]);
    assert_eq!(rows[3], vec!["led", "", "", "#FF0000"]);

    let mut store = ParameterStore::new();
    let report = TableImporter::new()
        .import(&rows, &mut store)
        .expect("import should succeed");

    assert_eq!(report.header, HeaderDetection::DetectedAt(1));
    assert_eq!(report.applied.len(), 2);
    assert_eq!(report.applied[0].line, 3);
    assert_eq!(
        store.resistor().encoding.description,
        "Yellow-Violet-Red-Gold (4700Ω ±5%)"
    );
    assert_eq!(store.led().as_str(), "#FF0000");
}

#[test]
fn test_loader_failures_are_import_errors() {
    let (_dir, corrupt) = write_sheet("bad.xlsx", "not a zip");
    let missing = PathBuf::from("/nonexistent/parts.csv");

    for path in [corrupt, missing] {
        let err = load_grid(&path).unwrap_err();
        assert!(
            matches!(
                err.downcast_ref::<CatalogError>(),
                Some(CatalogError::ImportError { .. })
            ),
            "{}: {:#}",
            path.display(),
            err
        );
    }
}

#[test]
fn test_cli_import_run() {
    let (_dir, path) = write_sheet("parts.csv", PARTS_CSV);
    let config = Config {
        action: Action::Import {
            path,
            show: ComponentType::Led,
        },
        verbose: false,
        no_progress: true,
    };

    let mut app = CatalogApp::new(config);
    let mut out = Vec::new();
    app.run(&mut out).expect("import should succeed");
    let output = String::from_utf8(out).expect("utf-8 output");

    assert!(output.contains("Rows: 4 applied, 0 skipped, 1 ignored"));
    assert!(output.contains("Color: Red (#FF0000)"));
    assert!(output.contains("Wavelength: 620-630nm"));
    assert_eq!(app.store().selected(), ComponentType::Led);
    assert_eq!(app.store().resistor().value, 4700.0);
}

#[test]
fn test_cli_import_missing_file() {
    let config = Config {
        action: Action::Import {
            path: PathBuf::from("/nonexistent/parts.csv"),
            show: ComponentType::Resistor,
        },
        verbose: false,
        no_progress: true,
    };

    let mut app = CatalogApp::new(config);
    assert!(app.run(&mut Vec::new()).is_err());
}
