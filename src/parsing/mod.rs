//! Readers that turn tabular files into a [`Table`](crate::core::table::Table).
//!
//! - **Delimited text** (CSV/TSV): [`delimited`], backed by the `csv` crate
//! - **Spreadsheets** (xlsx, xls, xlsb, ods): [`spreadsheet`], backed by `calamine`
//!
//! Both readers are eager: the whole source is materialized before any plate or
//! reference is built from it.
//!
//! ## Example
//!
//! ```rust,no_run
//! use platemate::parsing::delimited::{read_delimited_file, DelimitedOptions};
//! use std::path::Path;
//!
//! let table = read_delimited_file(Path::new("plate.csv"), &DelimitedOptions::default()).unwrap();
//! println!("{} rows, columns: {:?}", table.len(), table.columns());
//! ```

use thiserror::Error;

pub mod delimited;
pub mod spreadsheet;

#[derive(Error, Debug)]
pub enum ParseError {
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Spreadsheet error: {0}")]
    Spreadsheet(#[from] calamine::Error),

    #[error("Sheet not found: {0}")]
    SheetNotFound(String),

    #[error("Invalid table format: {0}")]
    InvalidFormat(String),
}
