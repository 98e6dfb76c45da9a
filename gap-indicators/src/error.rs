/// Error types for loading indicator tables
use crate::indicator::Indicator;
use thiserror::Error;

/// Failure to produce one of the indicator tables.
///
/// Any of these aborts the whole load: the dashboard is never built from a
/// partial set of tables.
#[derive(Error, Debug)]
pub enum LoadError {
    /// The source could not deliver the bytes (missing file, HTTP error, ...)
    #[error("Failed to fetch {indicator} from {location}: {reason}")]
    Fetch {
        indicator: Indicator,
        location: String,
        reason: String,
    },

    /// The payload is not valid CSV
    #[error("Failed to parse CSV for {indicator}: {source}")]
    Csv {
        indicator: Indicator,
        #[source]
        source: csv::Error,
    },

    /// A required header is absent, so the payload is not an indicator table
    #[error("Table for {indicator} has no '{column}' column")]
    MissingColumn {
        indicator: Indicator,
        column: &'static str,
    },

    /// A gzip payload could not be inflated
    #[error("Failed to decompress {indicator}: {reason}")]
    Decompression { indicator: Indicator, reason: String },

    /// No location was configured for an indicator
    #[error("No source location configured for {0}")]
    MissingLocation(Indicator),
}

/// An indicator name that is not one of the five datasets.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown indicator: {0}")]
pub struct ParseIndicatorError(pub String);
