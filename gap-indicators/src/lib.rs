//! Indicator tables for the country indicators dashboard.
//!
//! This crate provides:
//! - `indicator`: the closed set of five datasets and their canonical names
//! - `table`: CSV parsing into per-country, per-year value tables
//! - `source`: pluggable byte sources (embedded, filesystem, static HTTP)
//! - `loader`: the all-or-nothing async load of every table
//! - `fixtures`: the sample tables compiled into the binary

pub mod compression;
pub mod error;
pub mod fixtures;
pub mod indicator;
pub mod loader;
pub mod source;
pub mod table;

pub use error::{LoadError, ParseIndicatorError};
pub use indicator::Indicator;
pub use loader::{load, IndicatorTables};
pub use source::{EmbeddedSource, IndicatorSource, SourceLocations};
pub use table::{IndicatorRow, IndicatorTable, YearValues};
