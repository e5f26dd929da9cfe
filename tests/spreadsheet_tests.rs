//! Loading plates and references from xlsx workbooks.

use std::path::{Path, PathBuf};

use platemate::{
    DataError, ParseError, Plate, PlateOptions, Reference, SheetSelector, SpreadsheetOptions,
    WellStatistic, FLUORESCENCE_INTENSITY,
};
use rust_xlsxwriter::{Workbook, XlsxError};
use tempfile::TempDir;

/// Workbook with a "Notes" sheet first, a "Plate" sheet second and a
/// "Reference" sheet third, the latter with a title row above its header.
fn write_workbook(dir: &Path) -> Result<PathBuf, XlsxError> {
    let path = dir.join("run.xlsx");
    let mut workbook = Workbook::new();

    let notes = workbook.add_worksheet();
    notes.set_name("Notes")?;
    notes.write_string(0, 0, "Exported by reader software")?;

    let plate = workbook.add_worksheet();
    plate.set_name("Plate")?;
    for (col, header) in ["Location", "Sample", "IL-6", "TNF"].iter().enumerate() {
        plate.write_string(0, col as u16, *header)?;
    }
    plate.write_string(1, 0, "1(1,A1)")?;
    plate.write_string(1, 1, "Standard1")?;
    plate.write_number(1, 2, 15020.0)?;
    plate.write_number(1, 3, 9800.0)?;
    plate.write_string(2, 0, "2(1,B1)")?;
    plate.write_string(2, 1, "Background1")?;
    plate.write_number(2, 2, 12.0)?;
    plate.write_number(2, 3, 8.5)?;
    plate.write_string(3, 0, "3(1,C1)")?;
    plate.write_string(3, 1, "Patient 12")?;
    plate.write_number(3, 2, 410.5)?;

    let reference = workbook.add_worksheet();
    reference.set_name("Reference")?;
    reference.write_string(0, 0, "Lot 2024-117")?;
    for (col, header) in ["analyte", "Standard1", "Standard2"].iter().enumerate() {
        reference.write_string(1, col as u16, *header)?;
    }
    reference.write_string(2, 0, "IL-6")?;
    reference.write_number(2, 1, 10000.0)?;
    reference.write_number(2, 2, 2500.0)?;
    reference.write_string(3, 0, "TNF")?;
    reference.write_number(3, 1, 8000.0)?;
    reference.write_number(3, 2, 2000.0)?;

    workbook.save(&path)?;
    Ok(path)
}

fn fixture() -> (TempDir, PathBuf) {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let path = write_workbook(dir.path()).expect("Failed to write workbook");
    (dir, path)
}

#[test]
fn test_plate_from_named_sheet() {
    let (_dir, path) = fixture();

    let plate = Plate::from_excel(
        &path,
        &SpreadsheetOptions::sheet_name("Plate"),
        PlateOptions::default().with_batch_id("B-3"),
    )
    .unwrap();

    assert_eq!(plate.len(), 3);
    assert_eq!(plate.filepath.as_deref(), Some(path.display().to_string().as_str()));
    assert_eq!(plate.batch_id.as_deref(), Some("B-3"));

    let first = &plate.wells[0];
    assert_eq!(first.location, Some(1));
    assert!(first.standard);
    assert_eq!(
        first.data.to_vec(),
        vec![
            WellStatistic::new(FLUORESCENCE_INTENSITY, "IL-6", 15020.0),
            WellStatistic::new(FLUORESCENCE_INTENSITY, "TNF", 9800.0),
        ]
    );

    assert!(plate.wells[1].background);
    assert!(plate.wells[2].data[1].value.is_nan());
}

#[test]
fn test_plate_from_sheet_index() {
    let (_dir, path) = fixture();
    let format = SpreadsheetOptions {
        sheet: SheetSelector::Index(1),
        ..SpreadsheetOptions::default()
    };

    let plate = Plate::from_excel(&path, &format, PlateOptions::default()).unwrap();
    assert_eq!(plate.len(), 3);
    assert_eq!(plate.standards().count(), 1);
}

#[test]
fn test_default_sheet_is_first() {
    let (_dir, path) = fixture();
    let result = Plate::from_excel(&path, &SpreadsheetOptions::default(), PlateOptions::default());
    assert!(matches!(result, Err(DataError::Schema(_))));
}

#[test]
fn test_reference_with_header_row() {
    let (_dir, path) = fixture();
    let format = SpreadsheetOptions {
        sheet: SheetSelector::Name("Reference".to_string()),
        header_row: 1,
        max_rows: None,
    };

    let reference = Reference::from_excel(&path, &format).unwrap();
    assert_eq!(reference.len(), 2);
    assert_eq!(reference.value("IL-6", "Standard2").unwrap(), 2500.0);

    let standard1 = reference.analytes_at("Standard1").unwrap();
    assert_eq!(standard1["TNF"], 8000.0);
}

#[test]
fn test_unknown_sheet_name() {
    let (_dir, path) = fixture();
    let result = Reference::from_excel(&path, &SpreadsheetOptions::sheet_name("Standards"));
    assert!(matches!(
        result,
        Err(DataError::Parse(ParseError::SheetNotFound(name))) if name == "Standards"
    ));
}

#[test]
fn test_sheet_index_out_of_range() {
    let (_dir, path) = fixture();
    let format = SpreadsheetOptions {
        sheet: SheetSelector::Index(5),
        ..SpreadsheetOptions::default()
    };

    let result = Plate::from_excel(&path, &format, PlateOptions::default());
    assert!(matches!(
        result,
        Err(DataError::Parse(ParseError::SheetNotFound(_)))
    ));
}
