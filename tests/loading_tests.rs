//! End-to-end loading of plates and references from files on disk.

use std::io::Write;
use std::path::Path;

use platemate::{
    ClassificationPatterns, DataError, Lookup, ParseError, Plate, PlateOptions, Reference,
    SpreadsheetOptions, WellStatistic, FLUORESCENCE_INTENSITY,
};
use tempfile::NamedTempFile;

fn write_fixture(suffix: &str, content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::with_suffix(suffix).expect("Failed to create temp file");
    file.write_all(content.as_bytes())
        .expect("Failed to write fixture");
    file
}

#[test]
fn test_plate_from_csv() {
    let file = write_fixture(
        ".csv",
        "Location,Sample,X,Y\n\
         A1,Standard1,10,20\n\
         B2,Unknown,5,15\n",
    );

    let options = PlateOptions::default()
        .with_run_datetime("2024-05-02 09:30")
        .with_batch_id("batch-7");
    let plate = Plate::from_csv(file.path(), options).unwrap();

    assert_eq!(plate.len(), 2);
    assert_eq!(
        plate.filepath.as_deref(),
        Some(file.path().display().to_string().as_str())
    );
    assert_eq!(plate.batch_id.as_deref(), Some("batch-7"));

    let first = &plate.wells[0];
    assert_eq!(first.location, Some(1));
    assert!(first.standard);
    assert!(!first.background);
    assert_eq!(
        first.data.to_vec(),
        vec![
            WellStatistic::new(FLUORESCENCE_INTENSITY, "X", 10.0),
            WellStatistic::new(FLUORESCENCE_INTENSITY, "Y", 20.0),
        ]
    );

    let second = &plate.wells[1];
    assert_eq!(second.location, Some(2));
    assert!(!second.standard);
    assert!(!second.background);
    assert_eq!(second.data[1].value, 15.0);
}

#[test]
fn test_plate_from_comma_separated_txt() {
    let file = write_fixture(".txt", "Location,Sample,X\nA1,Standard1,10\n");

    let plate = Plate::from_csv(file.path(), PlateOptions::default()).unwrap();
    assert_eq!(plate.len(), 1);
    assert_eq!(plate.wells[0].location, Some(1));
    assert!(plate.wells[0].standard);
    assert_eq!(
        plate.wells[0].data.to_vec(),
        vec![WellStatistic::new(FLUORESCENCE_INTENSITY, "X", 10.0)]
    );
}

#[test]
fn test_reference_from_comma_separated_txt() {
    let file = write_fixture(".txt", "analyte,S1\nIL-6,100\n");
    let reference = Reference::from_csv(file.path()).unwrap();
    assert_eq!(reference.value("IL-6", "S1").unwrap(), 100.0);
}

#[test]
fn test_plate_from_tsv_with_luminex_layout() {
    let file = write_fixture(
        ".tsv",
        "Location\tSample\tIL-6\tTNF\tIL-10\n\
         1(1,A1)\tBackground0\t12\t8\t3\n\
         2(1,B1)\tStandard1\t15020\t9800\t4400\n\
         3(1,C1)\tPatient 12\t410.5\t\t88\n\
         Unread\tstandard2\t7000\t5000\t2100\n",
    );

    let plate = Plate::from_csv(file.path(), PlateOptions::default()).unwrap();
    assert_eq!(plate.len(), 4);

    let locations: Vec<Option<u32>> = plate.wells.iter().map(|w| w.location).collect();
    assert_eq!(locations, vec![Some(1), Some(2), Some(3), None]);

    assert_eq!(plate.standards().count(), 2);
    assert_eq!(plate.backgrounds().count(), 1);

    for well in &plate.wells {
        assert_eq!(well.data.len(), 3);
    }

    let patient = &plate.wells[2];
    let tnf = patient.data.search(None, Some("TNF")).unwrap();
    assert_eq!(tnf.len(), 1);
    assert!(tnf[0].value.is_nan());

    let intensities = patient
        .data
        .search(Some(FLUORESCENCE_INTENSITY), None)
        .unwrap();
    assert_eq!(intensities.len(), 3);
}

#[test]
fn test_plate_with_custom_patterns() {
    let file = write_fixture(
        ".csv",
        "Location,Sample,X\nA1,CAL-1,1\nA2,Standard1,2\nA3,BLANK,3\n",
    );

    let patterns = ClassificationPatterns::new("CAL-[0-9]+", "BLANK").unwrap();
    let plate = Plate::from_csv(file.path(), PlateOptions::default().with_patterns(patterns)).unwrap();

    let flags: Vec<(bool, bool)> = plate
        .wells
        .iter()
        .map(|w| (w.standard, w.background))
        .collect();
    assert_eq!(flags, vec![(true, false), (false, false), (false, true)]);
}

#[test]
fn test_plate_missing_file_propagates() {
    let result = Plate::from_csv(Path::new("/nonexistent/plate.csv"), PlateOptions::default());
    assert!(matches!(result, Err(DataError::Parse(ParseError::Csv(_)))));
}

#[test]
fn test_plate_excel_missing_file_propagates() {
    let result = Plate::from_excel(
        Path::new("/nonexistent/plate.xlsx"),
        &SpreadsheetOptions::default(),
        PlateOptions::default(),
    );
    assert!(matches!(result, Err(DataError::Parse(_))));
}

#[test]
fn test_reference_from_csv() {
    let file = write_fixture(
        ".csv",
        "analyte,Standard1,Standard2,Standard3\n\
         IL-6,10000,2500,625\n\
         TNF,8000,2000,500\n",
    );

    let mut reference = Reference::from_csv(file.path()).unwrap();
    assert_eq!(reference.len(), 2);

    assert_eq!(
        reference.get(Some("IL-6"), Some("Standard2")).unwrap(),
        Lookup::Value(2500.0)
    );

    let at_standard1 = reference.get(None, Some("Standard1")).unwrap();
    let series = at_standard1.as_series().unwrap();
    assert_eq!(series["IL-6"], 10000.0);
    assert_eq!(series["TNF"], 8000.0);

    reference.put("IL-10", "Standard1", 4000.0);
    assert_eq!(reference.value("IL-10", "Standard1").unwrap(), 4000.0);
    assert!(matches!(
        reference.get(None, Some("Standard2")),
        Err(DataError::NotFound(_))
    ));
}

#[test]
fn test_reference_requires_analyte_column() {
    let file = write_fixture(".csv", "Analyte,S1\nIL-6,1\n");
    assert!(matches!(
        Reference::from_csv(file.path()),
        Err(DataError::Schema(_))
    ));
}

#[test]
fn test_reference_missing_file_propagates() {
    let result = Reference::from_csv(Path::new("/nonexistent/reference.csv"));
    assert!(matches!(result, Err(DataError::Parse(_))));
}

#[test]
fn test_error_messages() {
    let reference = Reference::new();
    let err = reference.get(Some("IL-6"), Some("S1")).unwrap_err();
    assert_eq!(
        err.to_string(),
        "Invalid analyte/standard, does not exist: analyte 'IL-6', standard 'S1'"
    );

    let err = reference.get(None, None).unwrap_err();
    assert!(err.to_string().starts_with("Invalid argument"));
}
