use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

use crate::core::table::Table;
use crate::core::types::{DataError, FLUORESCENCE_INTENSITY, LOCATION_COLUMN, SAMPLE_COLUMN};
use crate::core::well::{ClassificationPatterns, Well};
use crate::parsing::delimited::{read_delimited_file, DelimitedOptions};
use crate::parsing::spreadsheet::{read_spreadsheet_file, SpreadsheetOptions};

/// Free-form run metadata attached to a plate
pub type PlateMeta = IndexMap<String, serde_json::Value>;

/// Run metadata and classification settings applied while loading a plate.
#[derive(Debug, Clone, Default)]
pub struct PlateOptions {
    pub run_datetime: Option<String>,
    pub batch_id: Option<String>,
    pub meta: Option<PlateMeta>,
    pub patterns: ClassificationPatterns,
}

impl PlateOptions {
    #[must_use]
    pub fn with_run_datetime(mut self, run_datetime: impl Into<String>) -> Self {
        self.run_datetime = Some(run_datetime.into());
        self
    }

    #[must_use]
    pub fn with_batch_id(mut self, batch_id: impl Into<String>) -> Self {
        self.batch_id = Some(batch_id.into());
        self
    }

    #[must_use]
    pub fn with_meta(mut self, meta: PlateMeta) -> Self {
        self.meta = Some(meta);
        self
    }

    #[must_use]
    pub fn with_patterns(mut self, patterns: ClassificationPatterns) -> Self {
        self.patterns = patterns;
        self
    }
}

/// All wells from one assay run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Plate {
    /// Wells in source row order
    pub wells: Vec<Well>,

    /// File the plate was loaded from (provenance only)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filepath: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub run_datetime: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub batch_id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meta: Option<PlateMeta>,
}

impl Plate {
    #[must_use]
    pub fn new(wells: Vec<Well>) -> Self {
        Self {
            wells,
            filepath: None,
            run_datetime: None,
            batch_id: None,
            meta: None,
        }
    }

    /// Build a plate from an in-memory table, one well per row.
    ///
    /// # Errors
    ///
    /// Returns `DataError::Schema` if the `Location` or `Sample` column is missing.
    pub fn from_table(table: &Table, options: PlateOptions) -> Result<Self, DataError> {
        for column in [LOCATION_COLUMN, SAMPLE_COLUMN] {
            if !table.has_column(column) {
                return Err(DataError::Schema(format!(
                    "Plate table must contain the column '{column}'"
                )));
            }
        }

        let wells: Vec<Well> = table
            .rows()
            .map(|row| Well::from_row(&row, FLUORESCENCE_INTENSITY, &options.patterns))
            .collect();

        debug!(
            wells = wells.len(),
            standards = wells.iter().filter(|w| w.standard).count(),
            backgrounds = wells.iter().filter(|w| w.background).count(),
            "Built plate"
        );

        Ok(Self {
            wells,
            filepath: None,
            run_datetime: options.run_datetime,
            batch_id: options.batch_id,
            meta: options.meta,
        })
    }

    /// Load a plate from a delimited text file (comma-separated, or tab-separated
    /// for `.tsv`/`.tab`/`.txt`).
    ///
    /// # Errors
    ///
    /// Returns `DataError::Parse` if the file cannot be read, or `DataError::Schema`
    /// if required columns are missing.
    pub fn from_csv(path: impl AsRef<Path>, options: PlateOptions) -> Result<Self, DataError> {
        let path = path.as_ref();
        let table = read_delimited_file(path, &DelimitedOptions::for_path(path))?;
        Self::from_table(&table, options).map(|plate| plate.with_filepath(path))
    }

    /// Load a plate from one worksheet of a spreadsheet.
    ///
    /// # Errors
    ///
    /// Returns `DataError::Parse` if the workbook or sheet cannot be read, or
    /// `DataError::Schema` if required columns are missing.
    pub fn from_excel(
        path: impl AsRef<Path>,
        format: &SpreadsheetOptions,
        options: PlateOptions,
    ) -> Result<Self, DataError> {
        let path = path.as_ref();
        let table = read_spreadsheet_file(path, format)?;
        Self::from_table(&table, options).map(|plate| plate.with_filepath(path))
    }

    fn with_filepath(mut self, path: &Path) -> Self {
        self.filepath = Some(path.display().to_string());
        self
    }

    /// Number of wells
    #[must_use]
    pub fn len(&self) -> usize {
        self.wells.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.wells.is_empty()
    }

    /// Wells whose sample matched the standard pattern
    pub fn standards(&self) -> impl Iterator<Item = &Well> {
        self.wells.iter().filter(|w| w.standard)
    }

    /// Wells whose sample matched the background pattern
    pub fn backgrounds(&self) -> impl Iterator<Item = &Well> {
        self.wells.iter().filter(|w| w.background)
    }
}
