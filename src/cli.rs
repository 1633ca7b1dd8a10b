//! Command-line interface argument parsing.
//!
//! This module handles all CLI argument parsing using clap,
//! including validation and default values.

use clap::Parser;
use std::path::PathBuf;

/// expagg - aggregate experiment result files into a summary table
///
/// Scans a directory for `results_*.csv` files produced by load-balancer
/// experiment runs, computes the 90th percentile of each run's response-time
/// column, and writes one row per run to `experimental_results.csv`.
///
/// Examples:
///   expagg
///   expagg --dir ./runs --output summary.csv
///   expagg --dry-run
///   expagg --keep-going --verbose
#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Directory to scan for result files
    ///
    /// Defaults to the working directory, or to the config file's setting.
    #[arg(short, long, value_name = "DIR")]
    pub dir: Option<PathBuf>,

    /// Output file path for the summary table
    ///
    /// Defaults to experimental_results.csv in the working directory.
    /// The file is overwritten on every run.
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Path to configuration file
    ///
    /// If not specified, looks for .expagg.toml in the current directory
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Skip files that fail to parse instead of aborting the batch
    ///
    /// Skipped files are listed in the final summary. Exit code 2 when any
    /// file was skipped.
    #[arg(short, long)]
    pub keep_going: bool,

    /// Dry run: list matching result files without writing anything
    #[arg(long)]
    pub dry_run: bool,

    /// Generate a default .expagg.toml configuration file
    #[arg(long)]
    pub init_config: bool,

    /// Enable verbose logging output
    #[arg(short, long)]
    pub verbose: bool,

    /// Run in quiet mode (minimal output)
    #[arg(short, long)]
    pub quiet: bool,
}

impl Args {
    /// Parse command-line arguments.
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Validate the parsed arguments.
    pub fn validate(&self) -> Result<(), String> {
        // Skip validation for --init-config
        if self.init_config {
            return Ok(());
        }

        if self.verbose && self.quiet {
            return Err("Cannot use both --verbose and --quiet".to_string());
        }

        if let Some(ref dir) = self.dir {
            if !dir.exists() {
                return Err(format!("Input directory does not exist: {}", dir.display()));
            }
            if !dir.is_dir() {
                return Err(format!("Input path is not a directory: {}", dir.display()));
            }
        }

        Ok(())
    }

    /// Returns the log level based on verbosity settings.
    pub fn log_level(&self) -> tracing::Level {
        if self.quiet {
            tracing::Level::ERROR
        } else if self.verbose {
            tracing::Level::DEBUG
        } else {
            tracing::Level::INFO
        }
    }
}
