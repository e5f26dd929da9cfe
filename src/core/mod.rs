//! Core data model for plate-based assays.
//!
//! - [`Table`]: An eagerly loaded table of dynamically typed cells
//! - [`WellStatistic`], [`WellStatisticList`]: Named measurements on a well
//! - [`Well`]: One well with its location, sample id and standard/background flags
//! - [`Plate`]: All wells of one assay run plus provenance metadata
//! - [`Reference`]: Expected standard values per analyte
//!
//! ## Table layouts
//!
//! | Loader | Required columns | Other columns |
//! |--------|------------------|---------------|
//! | [`Plate`] | `Location`, `Sample` | One measurement per column |
//! | [`Reference`] | `analyte` | One standard label per column |
//!
//! [`Table`]: table::Table
//! [`WellStatistic`]: statistic::WellStatistic
//! [`WellStatisticList`]: statistic::WellStatisticList
//! [`Well`]: well::Well
//! [`Plate`]: plate::Plate
//! [`Reference`]: reference::Reference

pub mod plate;
pub mod reference;
pub mod statistic;
pub mod table;
pub mod types;
pub mod well;
