//! # jsformat-suite
//!
//! Runs JSON-Schema-Test-Suite style `format` fixtures against a
//! [`jsformat::FormatRegistry`].
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use std::path::PathBuf;
//! use jsformat::FormatRegistry;
//! use jsformat_suite::{SuiteConfig, run_fs};
//!
//! let mut config = SuiteConfig::default();
//! config.paths = vec![PathBuf::from("JSON-Schema-Test-Suite/tests/draft2020-12/optional/format")];
//! config.exclude = vec!["idn-*.json".to_owned()];
//!
//! let report = run_fs(&config, &FormatRegistry::default()).unwrap();
//! println!("Passed: {}", report.passed);
//! println!("Failed: {}", report.failures_count());
//! println!("OK: {}", report.ok);
//! ```

mod config;
mod error;
mod fixture;
pub mod output;
mod report;
mod strategy;

pub use config::{SuiteConfig, UnknownFormatPolicy};
pub use error::{CaseFailure, ScanError, ScanErrorKind};
pub use fixture::{FileOutcome, FixtureCase, FixtureGroup, run_fixture_content};
pub use report::SuiteReport;

use jsformat::FormatRegistry;
use tracing::{debug, info};

use strategy::fs::{find_fixture_files, read_file_bounded};

/// Run every fixture file found under `config.paths`.
///
/// # Errors
///
/// Returns an error if `config.paths` is empty or any path does not exist.
/// Per-file problems are collected in `report.scan_errors` instead.
pub fn run_fs(config: &SuiteConfig, registry: &FormatRegistry) -> anyhow::Result<SuiteReport> {
    if config.paths.is_empty() {
        anyhow::bail!("No paths provided for fixture run");
    }
    for path in &config.paths {
        if !path.exists() {
            anyhow::bail!("Path does not exist: {}", path.display());
        }
    }

    let (files, mut scan_errors) = find_fixture_files(config);
    debug!(files = files.len(), "discovered fixture files");

    let mut failed_files = scan_errors.len();
    let mut scanned_files: usize = 0;
    let mut passed: usize = 0;
    let mut skipped: usize = 0;
    let mut failures = Vec::new();

    for file in &files {
        if scanned_files + failed_files >= config.max_files {
            scan_errors.push(ScanError {
                file: file.clone(),
                kind: ScanErrorKind::LimitExceeded,
                message: format!(
                    "Run aborted: max_files limit ({}) reached; remaining files not run",
                    config.max_files
                ),
            });
            failed_files += 1;
            break;
        }

        let outcome = read_file_bounded(file, config.max_file_size).and_then(|content| {
            run_fixture_content(&content, file, registry, config.unknown_formats)
        });
        match outcome {
            Ok(outcome) => {
                scanned_files += 1;
                passed += outcome.passed;
                skipped += outcome.skipped;
                failures.extend(outcome.failures);
            }
            Err(err) => {
                scan_errors.push(err);
                failed_files += 1;
            }
        }
    }

    let ok = failures.is_empty() && scan_errors.is_empty();
    info!(
        scanned_files,
        failed_files,
        passed,
        failed = failures.len(),
        skipped,
        "fixture run finished"
    );
    Ok(SuiteReport {
        scanned_files,
        failed_files,
        passed,
        skipped,
        ok,
        failures,
        scan_errors,
    })
}
