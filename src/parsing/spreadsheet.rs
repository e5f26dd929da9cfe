use std::path::Path;

use calamine::{open_workbook_auto, Data, Range, Reader};
use tracing::debug;

use crate::core::table::{CellValue, Table};
use crate::parsing::ParseError;

/// Which worksheet to read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SheetSelector {
    /// Zero-based position in the workbook
    Index(usize),
    /// Worksheet name
    Name(String),
}

impl Default for SheetSelector {
    fn default() -> Self {
        Self::Index(0)
    }
}

/// Format options forwarded to the spreadsheet reader.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SpreadsheetOptions {
    /// Worksheet to read (defaults to the first)
    pub sheet: SheetSelector,

    /// Zero-based row holding the column names; rows above it are ignored
    pub header_row: usize,

    /// Maximum number of data rows to read
    pub max_rows: Option<usize>,
}

impl SpreadsheetOptions {
    #[must_use]
    pub fn sheet_name(name: impl Into<String>) -> Self {
        Self {
            sheet: SheetSelector::Name(name.into()),
            ..Self::default()
        }
    }
}

/// Read one worksheet of an xlsx/xls/xlsb/ods workbook.
///
/// # Errors
///
/// Returns `ParseError::Spreadsheet` if the workbook cannot be opened or decoded,
/// `ParseError::SheetNotFound` if the selected sheet does not exist, or
/// `ParseError::InvalidFormat` if the header row is missing.
pub fn read_spreadsheet_file(path: &Path, options: &SpreadsheetOptions) -> Result<Table, ParseError> {
    let mut workbook = open_workbook_auto(path)?;

    let range = match &options.sheet {
        SheetSelector::Name(name) => {
            if !workbook.sheet_names().iter().any(|s| s == name) {
                return Err(ParseError::SheetNotFound(name.clone()));
            }
            workbook.worksheet_range(name)?
        }
        SheetSelector::Index(index) => workbook
            .worksheet_range_at(*index)
            .ok_or_else(|| ParseError::SheetNotFound(format!("index {index}")))??,
    };

    let table = range_to_table(&range, options)?;
    debug!(
        path = %path.display(),
        rows = table.len(),
        columns = table.columns().len(),
        "Read spreadsheet"
    );
    Ok(table)
}

fn range_to_table(range: &Range<Data>, options: &SpreadsheetOptions) -> Result<Table, ParseError> {
    let mut rows = range.rows().skip(options.header_row);

    let header = rows.next().ok_or_else(|| {
        ParseError::InvalidFormat(format!(
            "Header row {} is past the end of the sheet",
            options.header_row
        ))
    })?;

    let mut table = Table::new(header.iter().map(header_name));

    let limit = options.max_rows.unwrap_or(usize::MAX);
    for row in rows.take(limit) {
        table.push_row(row.iter().map(cell_to_value).collect())?;
    }

    Ok(table)
}

/// Column names keep header text verbatim; only non-text headers are formatted.
fn header_name(cell: &Data) -> String {
    match cell {
        Data::String(s) => s.clone(),
        other => cell_to_value(other).to_string(),
    }
}

fn cell_to_value(cell: &Data) -> CellValue {
    match cell {
        Data::Int(i) => CellValue::Integer(*i),
        Data::Float(f) => CellValue::Float(*f),
        Data::Bool(b) => CellValue::Bool(*b),
        Data::String(s) => CellValue::infer(s),
        Data::DateTime(dt) => CellValue::Float(dt.as_f64()),
        Data::DateTimeIso(s) | Data::DurationIso(s) => CellValue::Text(s.clone()),
        Data::Error(_) | Data::Empty => CellValue::Null,
    }
}
