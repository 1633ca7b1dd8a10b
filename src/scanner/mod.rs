//! Discovery of result files in the input directory.
//!
//! Discovery is a single non-recursive directory listing filtered on the
//! result-file naming convention. The listing is sorted by name so a given
//! directory state always produces the same row order.

use anyhow::{Context, Result};
use std::fs;
use std::path::PathBuf;
use tracing::debug;

/// Configuration for result-file discovery.
#[derive(Debug, Clone)]
pub struct ScanConfig {
    /// Required file-name prefix.
    pub prefix: String,
    /// Required file-name suffix.
    pub suffix: String,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            prefix: "results_".to_string(),
            suffix: ".csv".to_string(),
        }
    }
}

impl From<&crate::config::InputConfig> for ScanConfig {
    fn from(config: &crate::config::InputConfig) -> Self {
        Self {
            prefix: config.prefix.clone(),
            suffix: config.suffix.clone(),
        }
    }
}

/// Scanner for result files in a single directory.
pub struct FileScanner {
    config: ScanConfig,
    dir: PathBuf,
}

impl FileScanner {
    /// Create a new file scanner.
    pub fn new(dir: PathBuf, config: ScanConfig) -> Self {
        Self { config, dir }
    }

    /// List all matching files, sorted by name.
    pub fn scan(&self) -> Result<Vec<PathBuf>> {
        let entries = fs::read_dir(&self.dir)
            .with_context(|| format!("Failed to read input directory: {}", self.dir.display()))?;

        let mut files = Vec::new();
        for entry in entries.flatten() {
            let path = entry.path();
            if !path.is_file() {
                continue;
            }

            let name = entry.file_name().to_string_lossy().to_string();
            if self.matches(&name) {
                files.push(path);
            } else {
                debug!("Skipping non-result file: {}", name);
            }
        }

        files.sort();
        Ok(files)
    }

    /// Check whether a file name matches the result-file convention.
    fn matches(&self, name: &str) -> bool {
        name.len() >= self.config.prefix.len() + self.config.suffix.len()
            && name.starts_with(&self.config.prefix)
            && name.ends_with(&self.config.suffix)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn touch(dir: &TempDir, name: &str) {
        fs::write(dir.path().join(name), "").unwrap();
    }

    fn scan_names(dir: &TempDir) -> Vec<String> {
        let scanner = FileScanner::new(dir.path().to_path_buf(), ScanConfig::default());
        scanner
            .scan()
            .unwrap()
            .into_iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().to_string())
            .collect()
    }

    #[test]
    fn test_scan_filters_and_sorts() {
        let dir = TempDir::new().unwrap();
        touch(&dir, "results_b_n=1_a=2_j=3_l=4_m=5_b=6_g=7_.csv");
        touch(&dir, "results_a_n=1_a=2_j=3_l=4_m=5_b=6_g=7_.csv");
        touch(&dir, "experimental_results.csv");
        touch(&dir, "results_notes.txt");
        touch(&dir, "readme.md");

        let names = scan_names(&dir);
        assert_eq!(
            names,
            vec![
                "results_a_n=1_a=2_j=3_l=4_m=5_b=6_g=7_.csv",
                "results_b_n=1_a=2_j=3_l=4_m=5_b=6_g=7_.csv",
            ]
        );
    }

    #[test]
    fn test_directories_are_not_matched() {
        let dir = TempDir::new().unwrap();
        fs::create_dir(dir.path().join("results_subdir.csv")).unwrap();

        assert!(scan_names(&dir).is_empty());
    }

    #[test]
    fn test_empty_directory() {
        let dir = TempDir::new().unwrap();
        assert!(scan_names(&dir).is_empty());
    }

    #[test]
    fn test_missing_directory_fails() {
        let scanner = FileScanner::new(PathBuf::from("/no/such/dir"), ScanConfig::default());
        assert!(scanner.scan().is_err());
    }

    #[test]
    fn test_prefix_must_be_at_start() {
        let dir = TempDir::new().unwrap();
        touch(&dir, "old_results_n=1_a=2_j=3_l=4_m=5_b=6_g=7_.csv");

        assert!(scan_names(&dir).is_empty());
    }
}
