//! expagg - experiment result aggregator
//!
//! A CLI tool that collects the per-run result files of a load-balancer
//! experiment, computes the 90th percentile of each run's response-time
//! column, and emits a single summary table.
//!
//! Exit codes:
//!   0 - Success
//!   1 - Runtime error (bad file name, unreadable input, write failure, etc.)
//!   2 - Completed with skipped files (--keep-going)

mod cli;
mod config;
mod error;
mod filename;
mod models;
mod report;
mod samples;
mod scanner;
mod stats;

use anyhow::{Context, Result};
use cli::Args;
use config::Config;
use error::AggregateError;
use indicatif::{ProgressBar, ProgressStyle};
use models::{BatchSummary, FileFailure, SummaryRow};
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::{debug, error, info, warn};
use tracing_subscriber::FmtSubscriber;

fn main() -> Result<()> {
    // Parse command-line arguments
    let args = Args::parse_args();

    // Validate arguments
    if let Err(e) = args.validate() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }

    // Handle --init-config early (no logging needed)
    if args.init_config {
        return handle_init_config();
    }

    // Initialize logging
    init_logging(&args);

    info!("expagg v{}", env!("CARGO_PKG_VERSION"));
    debug!("Arguments: {:?}", args);

    match run_aggregation(&args) {
        Ok(exit_code) => {
            std::process::exit(exit_code);
        }
        Err(e) => {
            error!("Aggregation failed: {:#}", e);
            eprintln!("\n❌ Error: {:#}", e);
            std::process::exit(1);
        }
    }
}

/// Handle --init-config: generate a default .expagg.toml.
fn handle_init_config() -> Result<()> {
    let path = Path::new(".expagg.toml");

    if path.exists() {
        eprintln!("⚠️  .expagg.toml already exists. Remove it first or edit it manually.");
        std::process::exit(1);
    }

    let content = Config::default_toml();
    std::fs::write(path, &content).context("Failed to write .expagg.toml")?;

    println!("✅ Created .expagg.toml with default settings.");
    println!("   Edit it to customize the input directory, output path, and metric.");
    Ok(())
}

/// Initialize logging based on verbosity settings.
fn init_logging(args: &Args) {
    let level = args.log_level();

    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .compact()
        .finish();

    tracing::subscriber::set_global_default(subscriber).expect("Failed to set tracing subscriber");
}

/// Run the complete aggregation workflow. Returns exit code (0 or 2).
fn run_aggregation(args: &Args) -> Result<i32> {
    let start_time = Instant::now();

    // Load configuration
    let mut config = load_config(args)?;
    config.merge_with_args(args);

    // Step 1: Discover result files
    let scan_config = scanner::ScanConfig::from(&config.input);
    let file_scanner = scanner::FileScanner::new(config.input.dir.clone(), scan_config);
    let files = file_scanner.scan()?;

    info!(
        "Found {} result files in {}",
        files.len(),
        config.input.dir.display()
    );

    // Handle --dry-run: list files and exit
    if args.dry_run {
        return handle_dry_run(&files);
    }

    // Step 2: Process every file into the summary table
    let progress = make_progress_bar(files.len() as u64, args.quiet);
    let summary = run_batch(&files, &config, args.keep_going, &progress)?;
    progress.finish_and_clear();

    // Step 3: Report what happened
    print_summary(
        &summary,
        &config.output.path,
        start_time.elapsed().as_secs_f64(),
        args.quiet,
    );

    if summary.failures.is_empty() {
        Ok(0)
    } else {
        Ok(2)
    }
}

/// Process every discovered file into the summary table.
///
/// The output file is created (truncating any previous run) before the first
/// input is opened, and stays open until the batch completes. Without
/// `keep_going`, the first bad input aborts the batch and whatever rows were
/// already written are left in place.
fn run_batch(
    files: &[PathBuf],
    config: &Config,
    keep_going: bool,
    progress: &ProgressBar,
) -> Result<BatchSummary> {
    let mut writer = report::SummaryWriter::create(&config.output.path, &config.metric.label())?;

    let mut failures = Vec::new();
    for path in files {
        match process_file(path, config) {
            Ok(row) => writer.write_row(&row)?,
            Err(e) if keep_going => {
                warn!("Skipping {}: {}", path.display(), e);
                failures.push(FileFailure {
                    path: path.clone(),
                    error: e.to_string(),
                });
            }
            Err(e) => {
                return Err(anyhow::Error::new(e)
                    .context(format!("Failed to process {}", path.display())));
            }
        }
        progress.inc(1);
    }

    let rows_written = writer.rows_written();
    writer.finish()?;

    Ok(BatchSummary {
        files_matched: files.len(),
        rows_written,
        failures,
    })
}

/// Turn one result file into a summary row.
fn process_file(path: &Path, config: &Config) -> Result<SummaryRow, AggregateError> {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();

    let params = filename::parse_run_parameters(&name)?;
    let samples = samples::read_sample_column(path, config.metric.column)?;
    let value = stats::percentile(&samples, config.metric.percentile)
        .ok_or(AggregateError::EmptyInput)?;

    debug!(
        "{}: {} samples, {} = {} ({})",
        name,
        samples.len(),
        config.metric.label(),
        value,
        params
    );

    Ok(SummaryRow { params, value })
}

/// Handle --dry-run: print what would be aggregated, write nothing.
fn handle_dry_run(files: &[PathBuf]) -> Result<i32> {
    println!("\n🔍 Dry run: listing result files (nothing written)...\n");

    if files.is_empty() {
        println!("   No matching result files found.");
    } else {
        for file in files {
            println!("     📄 {}", file.display());
        }
        println!("\n   Total: {} files", files.len());
    }

    println!("\n✅ Dry run complete.");
    Ok(0)
}

/// Build the batch progress bar, hidden in quiet mode.
fn make_progress_bar(len: u64, quiet: bool) -> ProgressBar {
    if quiet {
        return ProgressBar::hidden();
    }

    let pb = ProgressBar::new(len);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len}")
            .unwrap()
            .progress_chars("#>-"),
    );
    pb
}

/// Print the end-of-run summary.
fn print_summary(summary: &BatchSummary, output: &Path, duration: f64, quiet: bool) {
    if quiet {
        return;
    }

    println!("\n📊 Aggregation Summary:");
    println!("   Files matched: {}", summary.files_matched);
    println!("   Rows written:  {}", summary.rows_written);
    if !summary.failures.is_empty() {
        println!("   Files skipped: {}", summary.failures.len());
        for failure in &summary.failures {
            println!("     ⚠️  {}: {}", failure.path.display(), failure.error);
        }
    }
    println!("   Duration: {:.1}s", duration);
    println!("\n✅ Summary table written to: {}", output.display());
}

/// Load configuration from file or use defaults.
fn load_config(args: &Args) -> Result<Config> {
    // Try explicit config path
    if let Some(ref config_path) = args.config {
        info!("Loading config from: {}", config_path.display());
        return Config::load(config_path);
    }

    // Try default location
    match Config::load_default() {
        Ok(Some(config)) => {
            info!("Loaded default config from .expagg.toml");
            Ok(config)
        }
        Ok(None) => {
            debug!("No config file found, using defaults");
            Ok(Config::default())
        }
        Err(e) => {
            warn!("Failed to load config: {}", e);
            Ok(Config::default())
        }
    }
}
