use indexmap::IndexMap;
use thiserror::Error;

use crate::parsing::ParseError;

/// Datatype label attached to every statistic produced by the plate loaders
pub const FLUORESCENCE_INTENSITY: &str = "fluorescence intensity";

/// Column holding the well position in plate tables
pub const LOCATION_COLUMN: &str = "Location";

/// Column holding the sample identifier in plate tables
pub const SAMPLE_COLUMN: &str = "Sample";

/// Column holding the analyte name in reference tables
pub const ANALYTE_COLUMN: &str = "analyte";

/// An ordered label → value mapping, the result of a one-sided reference lookup
pub type Series = IndexMap<String, f64>;

#[derive(Error, Debug)]
pub enum DataError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Schema error: {0}")]
    Schema(String),

    #[error("Invalid analyte/standard, does not exist: {0}")]
    NotFound(String),

    #[error(transparent)]
    Parse(#[from] ParseError),
}
