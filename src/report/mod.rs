//! Summary-table output.
//!
//! The table is created fresh on every run, truncating any previous file,
//! and held open until the batch completes. One header row, then one data
//! row per successfully processed result file.

use crate::models::{RunParameters, SummaryRow};
use anyhow::{Context, Result};
use std::fs::File;
use std::path::{Path, PathBuf};

/// Writer for the aggregated summary table.
pub struct SummaryWriter {
    inner: csv::Writer<File>,
    path: PathBuf,
    rows: usize,
}

impl SummaryWriter {
    /// Create the output file (truncating an existing one) and write the
    /// header row.
    pub fn create(path: &Path, value_label: &str) -> Result<Self> {
        let file = File::create(path)
            .with_context(|| format!("Failed to create output file: {}", path.display()))?;
        let mut inner = csv::Writer::from_writer(file);

        let mut header: Vec<&str> = RunParameters::NAMES.to_vec();
        header.push(value_label);
        inner
            .write_record(&header)
            .with_context(|| format!("Failed to write header to {}", path.display()))?;

        Ok(Self {
            inner,
            path: path.to_path_buf(),
            rows: 0,
        })
    }

    /// Append one summary row: the seven parameters, then the metric value
    /// in Rust's default float formatting.
    pub fn write_row(&mut self, row: &SummaryRow) -> Result<()> {
        let mut record: Vec<String> = row
            .params
            .values()
            .iter()
            .map(|v| v.to_string())
            .collect();
        record.push(row.value.to_string());

        self.inner
            .write_record(&record)
            .with_context(|| format!("Failed to write row to {}", self.path.display()))?;
        self.rows += 1;
        Ok(())
    }

    /// Number of data rows written so far.
    pub fn rows_written(&self) -> usize {
        self.rows
    }

    /// Flush and close the table.
    pub fn finish(mut self) -> Result<()> {
        self.inner
            .flush()
            .with_context(|| format!("Failed to flush {}", self.path.display()))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn make_row(seed: i64, value: f64) -> SummaryRow {
        SummaryRow {
            params: RunParameters {
                n: 8,
                a: 2,
                j: 100000,
                l: 200,
                m: 5000,
                b: 1,
                g: seed,
            },
            value,
        }
    }

    #[test]
    fn test_header_and_rows() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("experimental_results.csv");

        let mut writer = SummaryWriter::create(&path, "p90").unwrap();
        writer.write_row(&make_row(1, 91.5)).unwrap();
        writer.write_row(&make_row(2, 42.0)).unwrap();
        assert_eq!(writer.rows_written(), 2);
        writer.finish().unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert_eq!(
            content,
            "n,a,j,l,m,b,g,p90\n\
             8,2,100000,200,5000,1,1,91.5\n\
             8,2,100000,200,5000,1,2,42\n"
        );
    }

    #[test]
    fn test_create_truncates_previous_output() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("experimental_results.csv");

        let mut writer = SummaryWriter::create(&path, "p90").unwrap();
        writer.write_row(&make_row(1, 1.0)).unwrap();
        writer.finish().unwrap();

        // Second run writes nothing but the header; the old row must be gone.
        let writer = SummaryWriter::create(&path, "p90").unwrap();
        writer.finish().unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert_eq!(content, "n,a,j,l,m,b,g,p90\n");
    }

    #[test]
    fn test_create_in_missing_directory_fails() {
        let err = SummaryWriter::create(Path::new("/no/such/dir/out.csv"), "p90");
        assert!(err.is_err());
    }
}
