use regex::Regex;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::core::statistic::{WellStatistic, WellStatisticList};
use crate::core::table::{CellValue, Row};
use crate::core::types::{LOCATION_COLUMN, SAMPLE_COLUMN};

/// Default pattern marking a sample as a standard
pub const DEFAULT_STANDARD_PATTERN: &str = "[Ss]tandard[0-9]+";

/// Default pattern marking a sample as a background
pub const DEFAULT_BACKGROUND_PATTERN: &str = "[Bb]ackground[0-9]+";

/// Patterns used to classify wells by their sample identifier.
///
/// Patterns match at the start of the sample id only; trailing text is ignored,
/// so `Standard1 (1:2)` is still a standard.
#[derive(Debug, Clone)]
pub struct ClassificationPatterns {
    standard: Regex,
    background: Regex,
}

impl ClassificationPatterns {
    /// Compile caller-supplied patterns.
    ///
    /// # Errors
    ///
    /// Returns the regex compilation error if either pattern is invalid.
    pub fn new(standard: &str, background: &str) -> Result<Self, regex::Error> {
        Ok(Self {
            standard: anchored(standard)?,
            background: anchored(background)?,
        })
    }

    #[must_use]
    pub fn is_standard(&self, sample_id: &str) -> bool {
        self.standard.is_match(sample_id)
    }

    #[must_use]
    pub fn is_background(&self, sample_id: &str) -> bool {
        self.background.is_match(sample_id)
    }
}

impl Default for ClassificationPatterns {
    fn default() -> Self {
        Self::new(DEFAULT_STANDARD_PATTERN, DEFAULT_BACKGROUND_PATTERN)
            .expect("default classification patterns are valid")
    }
}

fn anchored(pattern: &str) -> Result<Regex, regex::Error> {
    Regex::new(&format!("^(?:{pattern})"))
}

/// One physical well on a plate
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Well {
    /// Location text as it appeared in the source (e.g. "A12")
    pub location_raw: String,

    /// First run of digits in `location_raw`, if any
    pub location: Option<u32>,

    pub sample_id: String,

    pub data: WellStatisticList,

    /// Sample matched the standard pattern
    pub standard: bool,

    /// Sample matched the background pattern
    pub background: bool,
}

impl Well {
    pub fn new(
        location_raw: impl Into<String>,
        sample_id: impl Into<String>,
        data: WellStatisticList,
        standard: bool,
        background: bool,
    ) -> Self {
        let location_raw = location_raw.into();
        Self {
            location: parse_location(&location_raw),
            location_raw,
            sample_id: sample_id.into(),
            data,
            standard,
            background,
        }
    }

    /// Build a well from one table row.
    ///
    /// Every column other than `Location` and `Sample` becomes a statistic tagged
    /// with `datatype`, in column order. Cells that are not numeric are stored as NaN.
    #[must_use]
    pub fn from_row(row: &Row<'_>, datatype: &str, patterns: &ClassificationPatterns) -> Self {
        let data = row
            .iter()
            .filter(|(name, _)| *name != LOCATION_COLUMN && *name != SAMPLE_COLUMN)
            .map(|(name, cell)| WellStatistic::new(datatype, name, cell_to_f64(name, cell)))
            .collect();

        let sample_id = row.get(SAMPLE_COLUMN).map(ToString::to_string).unwrap_or_default();
        let location_raw = row.get(LOCATION_COLUMN).map(ToString::to_string).unwrap_or_default();

        let standard = patterns.is_standard(&sample_id);
        let background = patterns.is_background(&sample_id);

        Self::new(location_raw, sample_id, data, standard, background)
    }
}

fn cell_to_f64(column: &str, cell: &CellValue) -> f64 {
    match cell.as_f64() {
        Some(v) => v,
        None => {
            if !cell.is_null() {
                warn!(column, value = %cell, "Non-numeric measurement stored as NaN");
            }
            f64::NAN
        }
    }
}

/// Extract the first run of ASCII digits as a well number.
///
/// Returns `None` when there are no digits or the number does not fit.
#[must_use]
pub fn parse_location(location: &str) -> Option<u32> {
    let start = location.find(|c: char| c.is_ascii_digit())?;
    let digits = &location[start..];
    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    digits[..end].parse().ok()
}
