//! Error types for the aggregation pipeline.
//!
//! Variants carry what the failing layer knows; the caller adds the file
//! path when it reports or wraps the error.

use thiserror::Error;

/// Errors that can occur while turning result files into summary rows.
#[derive(Debug, Error)]
pub enum AggregateError {
    /// The file name does not encode the expected run parameters.
    #[error("bad results filename '{name}': {reason}")]
    FilenameFormat { name: String, reason: String },

    /// A data row is missing the sample field or holds a non-numeric value.
    #[error("row {row}: {reason}")]
    ContentFormat { row: usize, reason: String },

    /// The file has no data rows, so the percentile is undefined.
    #[error("no sample values, percentile is undefined")]
    EmptyInput,

    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// CSV-level read failure.
    #[error(transparent)]
    Csv(#[from] csv::Error),
}
