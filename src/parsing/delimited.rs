use std::io::Read;
use std::path::Path;

use tracing::debug;

use crate::core::table::{CellValue, Table};
use crate::parsing::ParseError;

/// Options for reading delimited text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DelimitedOptions {
    /// Field separator
    pub delimiter: u8,

    /// Lines starting with this byte are skipped
    pub comment: Option<u8>,
}

impl Default for DelimitedOptions {
    fn default() -> Self {
        Self {
            delimiter: b',',
            comment: None,
        }
    }
}

impl DelimitedOptions {
    /// Pick the delimiter from the file extension: `.tsv`/`.tab` are tab-separated,
    /// everything else (including `.txt` exports) is comma-separated.
    #[must_use]
    pub fn for_path(path: &Path) -> Self {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_lowercase);

        let delimiter = match ext.as_deref() {
            Some("tsv" | "tab") => b'\t',
            _ => b',',
        };

        Self {
            delimiter,
            ..Self::default()
        }
    }
}

/// Read a delimited text file with a header row.
///
/// # Errors
///
/// Returns `ParseError::Csv` if the file cannot be opened or a record is malformed,
/// or `ParseError::InvalidFormat` if there is no header row.
pub fn read_delimited_file(path: &Path, options: &DelimitedOptions) -> Result<Table, ParseError> {
    let reader = builder(options).from_path(path)?;
    let table = read_records(reader)?;
    debug!(
        path = %path.display(),
        rows = table.len(),
        columns = table.columns().len(),
        "Read delimited file"
    );
    Ok(table)
}

/// Read delimited text held in memory.
///
/// # Errors
///
/// Returns `ParseError::Csv` if a record is malformed, or `ParseError::InvalidFormat`
/// if there is no header row.
pub fn read_delimited_text(text: &str, options: &DelimitedOptions) -> Result<Table, ParseError> {
    read_delimited(text.as_bytes(), options)
}

/// Read delimited text from any reader.
///
/// # Errors
///
/// Returns `ParseError::Csv` if reading fails or a record is malformed, or
/// `ParseError::InvalidFormat` if there is no header row.
pub fn read_delimited<R: Read>(source: R, options: &DelimitedOptions) -> Result<Table, ParseError> {
    read_records(builder(options).from_reader(source))
}

fn builder(options: &DelimitedOptions) -> csv::ReaderBuilder {
    let mut builder = csv::ReaderBuilder::new();
    builder
        .delimiter(options.delimiter)
        .comment(options.comment)
        .has_headers(true);
    builder
}

fn read_records<R: Read>(mut reader: csv::Reader<R>) -> Result<Table, ParseError> {
    let headers = reader.headers()?.clone();
    if headers.is_empty() {
        return Err(ParseError::InvalidFormat(
            "No header row found".to_string(),
        ));
    }

    let mut table = Table::new(headers.iter());
    for result in reader.records() {
        let record = result?;
        table.push_row(record.iter().map(CellValue::infer).collect())?;
    }

    Ok(table)
}
