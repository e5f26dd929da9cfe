use indexmap::{IndexMap, IndexSet};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, warn};

use crate::core::table::{CellValue, Table};
use crate::core::types::{DataError, Series, ANALYTE_COLUMN};
use crate::parsing::delimited::{read_delimited_file, DelimitedOptions};
use crate::parsing::spreadsheet::{read_spreadsheet_file, SpreadsheetOptions};

/// Result of [`Reference::get`]
#[derive(Debug, Clone, PartialEq)]
pub enum Lookup {
    /// A single analyte/standard value
    Value(f64),
    /// Standard → value for one analyte, or analyte → value for one standard
    Series(Series),
}

impl Lookup {
    #[must_use]
    pub fn as_value(&self) -> Option<f64> {
        match self {
            Self::Value(v) => Some(*v),
            Self::Series(_) => None,
        }
    }

    #[must_use]
    pub fn as_series(&self) -> Option<&Series> {
        match self {
            Self::Series(s) => Some(s),
            Self::Value(_) => None,
        }
    }
}

/// Expected standard values per analyte.
///
/// Stored analyte-major: analyte → (standard label → value), both levels in
/// insertion order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Reference {
    data: IndexMap<String, Series>,
}

impl Reference {
    /// Create an empty reference
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a reference from a table with an `analyte` column; every other column
    /// is a standard label. When an analyte appears twice the later row wins.
    ///
    /// # Errors
    ///
    /// Returns `DataError::Schema` if the table has no `analyte` column.
    pub fn from_table(table: &Table) -> Result<Self, DataError> {
        if !table.has_column(ANALYTE_COLUMN) {
            return Err(DataError::Schema(format!(
                "Table must contain the column '{ANALYTE_COLUMN}'"
            )));
        }

        let mut data = IndexMap::new();
        for row in table.rows() {
            let analyte = row
                .get(ANALYTE_COLUMN)
                .map(ToString::to_string)
                .unwrap_or_default();

            let standards: Series = row
                .iter()
                .filter(|(name, _)| *name != ANALYTE_COLUMN)
                .map(|(name, cell)| (name.to_string(), cell_to_f64(&analyte, name, cell)))
                .collect();

            if data.insert(analyte.clone(), standards).is_some() {
                warn!(analyte = %analyte, "Duplicate analyte in reference table, keeping last row");
            }
        }

        debug!(analytes = data.len(), "Built reference");
        Ok(Self { data })
    }

    /// Load a reference from a delimited text file.
    ///
    /// # Errors
    ///
    /// Returns `DataError::Parse` if the file cannot be read, or `DataError::Schema`
    /// if the `analyte` column is missing.
    pub fn from_csv(path: impl AsRef<Path>) -> Result<Self, DataError> {
        let path = path.as_ref();
        let table = read_delimited_file(path, &DelimitedOptions::for_path(path))?;
        Self::from_table(&table)
    }

    /// Load a reference from one worksheet of a spreadsheet.
    ///
    /// # Errors
    ///
    /// Returns `DataError::Parse` if the workbook or sheet cannot be read, or
    /// `DataError::Schema` if the `analyte` column is missing.
    pub fn from_excel(path: impl AsRef<Path>, format: &SpreadsheetOptions) -> Result<Self, DataError> {
        let table = read_spreadsheet_file(path.as_ref(), format)?;
        Self::from_table(&table)
    }

    /// Set a value, creating the analyte entry if needed.
    pub fn put(&mut self, analyte: impl Into<String>, standard: impl Into<String>, value: f64) {
        self.data
            .entry(analyte.into())
            .or_default()
            .insert(standard.into(), value);
    }

    /// Look up by analyte, standard or both.
    ///
    /// # Errors
    ///
    /// Returns `DataError::InvalidArgument` if neither selector is given, or
    /// `DataError::NotFound` if any requested key is absent.
    pub fn get(&self, analyte: Option<&str>, standard: Option<&str>) -> Result<Lookup, DataError> {
        match (analyte, standard) {
            (Some(a), Some(s)) => self.value(a, s).map(Lookup::Value),
            (Some(a), None) => self.standards_for(a).map(Lookup::Series),
            (None, Some(s)) => self.analytes_at(s).map(Lookup::Series),
            (None, None) => Err(DataError::InvalidArgument(
                "Must provide either analyte, standard, or both".to_string(),
            )),
        }
    }

    /// Value of one standard for one analyte.
    ///
    /// # Errors
    ///
    /// Returns `DataError::NotFound` if the analyte or standard does not exist.
    pub fn value(&self, analyte: &str, standard: &str) -> Result<f64, DataError> {
        self.data
            .get(analyte)
            .and_then(|standards| standards.get(standard))
            .copied()
            .ok_or_else(|| not_found(analyte, standard))
    }

    /// All standard values for one analyte.
    ///
    /// # Errors
    ///
    /// Returns `DataError::NotFound` if the analyte does not exist.
    pub fn standards_for(&self, analyte: &str) -> Result<Series, DataError> {
        self.data
            .get(analyte)
            .cloned()
            .ok_or_else(|| DataError::NotFound(format!("analyte '{analyte}'")))
    }

    /// The value at one standard for every analyte.
    ///
    /// # Errors
    ///
    /// Returns `DataError::NotFound` if any analyte lacks the standard.
    pub fn analytes_at(&self, standard: &str) -> Result<Series, DataError> {
        self.data
            .iter()
            .map(|(analyte, standards)| {
                standards
                    .get(standard)
                    .map(|v| (analyte.clone(), *v))
                    .ok_or_else(|| not_found(analyte, standard))
            })
            .collect()
    }

    /// Analyte names in insertion order
    pub fn analytes(&self) -> impl Iterator<Item = &str> {
        self.data.keys().map(String::as_str)
    }

    /// Number of analytes
    #[must_use]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Materialize as a table: one row per analyte, an `analyte` column followed by
    /// one column per standard label (first-seen order). Missing values are null.
    #[must_use]
    pub fn dataframe(&self) -> Table {
        let standards: IndexSet<&str> = self
            .data
            .values()
            .flat_map(|s| s.keys().map(String::as_str))
            .collect();

        let mut columns = vec![ANALYTE_COLUMN];
        columns.extend(standards.iter().copied());

        let rows = self
            .data
            .iter()
            .map(|(analyte, values)| {
                std::iter::once(CellValue::Text(analyte.clone()))
                    .chain(standards.iter().map(|s| {
                        values.get(*s).map_or(CellValue::Null, |v| CellValue::Float(*v))
                    }))
                    .collect()
            })
            .collect();

        Table::from_parts(columns, rows)
    }
}

impl From<IndexMap<String, Series>> for Reference {
    fn from(data: IndexMap<String, Series>) -> Self {
        Self { data }
    }
}

fn not_found(analyte: &str, standard: &str) -> DataError {
    DataError::NotFound(format!("analyte '{analyte}', standard '{standard}'"))
}

fn cell_to_f64(analyte: &str, standard: &str, cell: &CellValue) -> f64 {
    match cell.as_f64() {
        Some(v) => v,
        None => {
            if !cell.is_null() {
                warn!(analyte, standard, value = %cell, "Non-numeric reference value stored as NaN");
            }
            f64::NAN
        }
    }
}
