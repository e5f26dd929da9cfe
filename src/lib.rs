//! # platemate
//!
//! A library for plate based assays like ELISAs or Luminex bead arrays.
//!
//! Plate readers export one row per well: a `Location`, a `Sample` identifier and a
//! column per measured analyte. `platemate` turns those tables into [`Plate`]s of
//! [`Well`]s, flags standard and background wells from their sample ids, and keeps
//! expected standard concentrations per analyte in a [`Reference`].
//!
//! ## Example
//!
//! ```rust,no_run
//! use platemate::{Plate, PlateOptions, Reference};
//!
//! let plate = Plate::from_csv("run_42.csv", PlateOptions::default().with_batch_id("42")).unwrap();
//! let reference = Reference::from_csv("standards.csv").unwrap();
//!
//! for well in plate.standards() {
//!     let readings = well.data.search(None, Some("IL-6")).unwrap();
//!     let expected = reference.value("IL-6", &well.sample_id);
//!     println!("{}: {:?} (expected {:?})", well.sample_id, readings, expected.ok());
//! }
//! ```
//!
//! ## Modules
//!
//! - [`core`]: Wells, plates, references and the table they are built from
//! - [`parsing`]: CSV and spreadsheet readers
//! - [`cli`]: Command-line interface implementation

pub mod cli;
pub mod core;
pub mod parsing;

// Re-export commonly used types for convenience
pub use core::plate::{Plate, PlateMeta, PlateOptions};
pub use core::reference::{Lookup, Reference};
pub use core::statistic::{WellStatistic, WellStatisticList};
pub use core::table::{CellValue, Table};
pub use core::types::*;
pub use core::well::{ClassificationPatterns, Well};
pub use parsing::spreadsheet::{SheetSelector, SpreadsheetOptions};
pub use parsing::ParseError;
