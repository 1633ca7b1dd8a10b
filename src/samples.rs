//! Sample-column extraction from result files.
//!
//! Result files are headerless comma-separated tables; one designated field
//! per row carries the measured value (response time, in the default layout).

use crate::error::AggregateError;
use std::path::Path;

/// Read the sample field (`column`, zero-based) from every row of a
/// headerless comma-separated file.
///
/// Row numbers in errors are 1-based. Rows with fewer than `column + 1`
/// fields and non-numeric sample fields are rejected; an empty file yields
/// an empty vector, which the caller must treat as having no percentile.
pub fn read_sample_column(path: &Path, column: usize) -> Result<Vec<f64>, AggregateError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(path)?;

    let mut samples = Vec::new();
    for (i, result) in reader.records().enumerate() {
        let record = result?;
        let row = i + 1;

        let field = record
            .get(column)
            .ok_or_else(|| AggregateError::ContentFormat {
                row,
                reason: format!("{} fields, need at least {}", record.len(), column + 1),
            })?;

        let value: f64 = field
            .trim()
            .parse()
            .map_err(|_| AggregateError::ContentFormat {
                row,
                reason: format!("field {column} '{field}' is not numeric"),
            })?;
        samples.push(value);
    }

    Ok(samples)
}
