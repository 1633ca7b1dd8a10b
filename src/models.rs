//! Data models for the result aggregator.
//!
//! This module contains the core data structures shared across the
//! application: run parameters, summary rows, and batch bookkeeping.

use std::fmt;
use std::path::PathBuf;

/// The seven integer parameters of one experimental run, in filename order.
///
/// The letters mirror the option flags of the load-balancer binary that
/// produced the result files.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunParameters {
    /// Number of worker queues.
    pub n: i64,
    /// Assignment policy (1 = random, 2 = round robin).
    pub a: i64,
    /// Number of jobs generated.
    pub j: i64,
    /// Arrival rate lambda.
    pub l: i64,
    /// Maximum hashing rounds per job.
    pub m: i64,
    /// Load balancing enabled (0 or 1).
    pub b: i64,
    /// Generator seed.
    pub g: i64,
}

impl RunParameters {
    /// Parameter names in output-column order.
    pub const NAMES: [&'static str; 7] = ["n", "a", "j", "l", "m", "b", "g"];

    /// Parameter values in output-column order.
    pub fn values(&self) -> [i64; 7] {
        [self.n, self.a, self.j, self.l, self.m, self.b, self.g]
    }
}

impl fmt::Display for RunParameters {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "n={} a={} j={} l={} m={} b={} g={}",
            self.n, self.a, self.j, self.l, self.m, self.b, self.g
        )
    }
}

/// One output row: the run parameters plus the computed percentile.
#[derive(Debug, Clone, PartialEq)]
pub struct SummaryRow {
    /// Parameters extracted from the input file name.
    pub params: RunParameters,
    /// The percentile of the sample column.
    pub value: f64,
}

/// A file that could not be processed under `--keep-going`.
#[derive(Debug)]
pub struct FileFailure {
    /// Path of the failed input file.
    pub path: PathBuf,
    /// Rendered error message.
    pub error: String,
}

/// Counters for the end-of-run printout.
#[derive(Debug, Default)]
pub struct BatchSummary {
    /// Number of input files matched by discovery.
    pub files_matched: usize,
    /// Number of data rows written to the summary table.
    pub rows_written: usize,
    /// Files skipped under `--keep-going`.
    pub failures: Vec<FileFailure>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_params() -> RunParameters {
        RunParameters {
            n: 8,
            a: 2,
            j: 100000,
            l: 200,
            m: 5000,
            b: 1,
            g: 42,
        }
    }

    #[test]
    fn test_values_match_names_order() {
        let params = make_params();
        assert_eq!(params.values(), [8, 2, 100000, 200, 5000, 1, 42]);
        assert_eq!(RunParameters::NAMES, ["n", "a", "j", "l", "m", "b", "g"]);
    }

    #[test]
    fn test_display() {
        let params = make_params();
        assert_eq!(params.to_string(), "n=8 a=2 j=100000 l=200 m=5000 b=1 g=42");
    }
}
