//! Configuration file handling.
//!
//! Settings load from `.expagg.toml` when present and merge with CLI
//! arguments; arguments win. The defaults reproduce the conventions of the
//! experiment harness: `results_*.csv` inputs in the working directory,
//! field 4 as the sample column, and a 90th-percentile summary written to
//! `experimental_results.csv`.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Root configuration structure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Input discovery settings.
    #[serde(default)]
    pub input: InputConfig,

    /// Output table settings.
    #[serde(default)]
    pub output: OutputConfig,

    /// Metric settings.
    #[serde(default)]
    pub metric: MetricConfig,
}

/// Where result files are discovered.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InputConfig {
    /// Directory to scan for result files.
    #[serde(default = "default_dir")]
    pub dir: PathBuf,

    /// Required file-name prefix.
    #[serde(default = "default_prefix")]
    pub prefix: String,

    /// Required file-name suffix.
    #[serde(default = "default_suffix")]
    pub suffix: String,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            dir: default_dir(),
            prefix: default_prefix(),
            suffix: default_suffix(),
        }
    }
}

fn default_dir() -> PathBuf {
    PathBuf::from(".")
}

fn default_prefix() -> String {
    "results_".to_string()
}

fn default_suffix() -> String {
    ".csv".to_string()
}

/// Where the summary table is written.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Path of the summary table. Overwritten on every run.
    #[serde(default = "default_output")]
    pub path: PathBuf,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            path: default_output(),
        }
    }
}

fn default_output() -> PathBuf {
    PathBuf::from("experimental_results.csv")
}

/// Which value is summarized and how.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MetricConfig {
    /// Zero-based index of the sample field in each data row.
    #[serde(default = "default_column")]
    pub column: usize,

    /// Percentile to report (0-100).
    #[serde(default = "default_percentile")]
    pub percentile: f64,
}

impl Default for MetricConfig {
    fn default() -> Self {
        Self {
            column: default_column(),
            percentile: default_percentile(),
        }
    }
}

fn default_column() -> usize {
    4
}

fn default_percentile() -> f64 {
    90.0
}

impl MetricConfig {
    /// Column label for the metric, e.g. `p90`.
    pub fn label(&self) -> String {
        format!("p{}", self.percentile)
    }
}

impl Config {
    /// Load configuration from a file path.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(config)
    }

    /// Try to load configuration from the default location.
    ///
    /// Returns `Ok(None)` if the file doesn't exist, `Err` if it exists but
    /// can't be parsed.
    pub fn load_default() -> Result<Option<Self>> {
        let default_path = Path::new(".expagg.toml");

        if default_path.exists() {
            Ok(Some(Self::load(default_path)?))
        } else {
            Ok(None)
        }
    }

    /// Merge this configuration with CLI arguments.
    ///
    /// CLI arguments take precedence, but only where the user passed an
    /// explicit value.
    pub fn merge_with_args(&mut self, args: &crate::cli::Args) {
        if let Some(ref dir) = args.dir {
            self.input.dir = dir.clone();
        }
        if let Some(ref output) = args.output {
            self.output.path = output.clone();
        }
    }

    /// Generate a default configuration file content.
    pub fn default_toml() -> String {
        let config = Config::default();
        toml::to_string_pretty(&config).unwrap_or_else(|_| String::new())
    }
}
