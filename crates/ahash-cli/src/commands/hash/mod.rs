//! Hash command: enumerate, hash and report in one pass

mod banner;

use std::io::{self, Write};

use ahash_core::report::{today, write_report, Report};
use ahash_core::{hash_batch, BatchOutcome, MatchedFile, RunConfig, Scanner};
use anyhow::{bail, Context, Result};
use indicatif::ProgressBar;
use tracing::{info, warn};

pub use banner::{banner_lines, print_banner};

/// Run the hash command
///
/// # Errors
/// Returns an error if the extension filter is malformed, a file cannot be read
/// (unless keep-going), the report cannot be written, or keep-going
/// skipped any file.
pub fn run(config: &RunConfig) -> Result<()> {
    let files = list_input(config)?;
    print_banner(config);

    let outcome = hash_files(config, &files)?;
    let report = write_output(config, &outcome)?;

    println!();
    println!("Hashes saved to {}", report.path.display());

    log_run_summary(&outcome, &report);
    check_failures(&outcome)
}

/// Match the input directory against the extension filter
pub(crate) fn list_input(config: &RunConfig) -> Result<Vec<MatchedFile>> {
    let scanner = Scanner::new(&config.input_dir).with_extension(&config.extension);
    let files = scanner
        .scan()
        .with_context(|| format!("Failed to list {}", config.input_dir.display()))?;
    info!("Found {} files matching {}", files.len(), scanner.pattern());
    Ok(files)
}

/// Hash the listed files under the configured failure policy
pub(crate) fn hash_files(config: &RunConfig, files: &[MatchedFile]) -> Result<BatchOutcome> {
    let progress = ProgressBar::new(files.len() as u64);
    let outcome = hash_batch(files, config.failure_policy, |_| progress.inc(1));
    progress.finish_and_clear();

    outcome.context("Hashing aborted, no report written")
}

/// Write the dated report, echoing to stdout when verbose
pub(crate) fn write_output(config: &RunConfig, outcome: &BatchOutcome) -> Result<Report> {
    let stdout = io::stdout();
    let mut console = stdout.lock();
    let echo: Option<&mut dyn Write> = if config.verbose {
        Some(&mut console)
    } else {
        None
    };

    Ok(write_report(
        &config.output_dir,
        today(),
        &outcome.records,
        config.clean,
        echo,
    )?)
}

fn log_run_summary(outcome: &BatchOutcome, report: &Report) {
    info!(
        "✓ Run completed: {} hashed, {} skipped, report {}",
        outcome.records.len(),
        outcome.failures.len(),
        report.path.display()
    );
}

/// Fail the run when keep-going skipped any file
pub(crate) fn check_failures(outcome: &BatchOutcome) -> Result<()> {
    if outcome.is_complete() {
        return Ok(());
    }

    for failure in &outcome.failures {
        warn!("Not hashed: {}: {}", failure.name, failure.error);
    }
    bail!(
        "{} of {} files could not be hashed",
        outcome.failures.len(),
        outcome.processed()
    )
}
