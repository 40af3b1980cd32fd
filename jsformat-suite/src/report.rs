//! Fixture run report.

use serde::Serialize;

use crate::error::{CaseFailure, ScanError};

/// Result of a fixture run.
///
/// A run is `ok` only when every executed case matched and no file failed
/// to scan; a non-empty `scan_errors` means coverage is incomplete.
#[derive(Debug, Clone, Serialize)]
#[non_exhaustive]
pub struct SuiteReport {
    /// Fixture files read and decoded.
    pub scanned_files: usize,
    /// Fixture files that could not be read or decoded.
    pub failed_files: usize,
    /// Cases whose verdict matched.
    pub passed: usize,
    /// Cases not executed (no format declared, or unknown format under
    /// `UnknownFormatPolicy::Skip`).
    pub skipped: usize,
    pub ok: bool,
    pub failures: Vec<CaseFailure>,
    pub scan_errors: Vec<ScanError>,
}

impl SuiteReport {
    /// Cases that produced a verdict or failed, i.e. everything not skipped.
    #[must_use]
    pub fn cases_run(&self) -> usize {
        self.passed + self.failures.len()
    }

    #[must_use]
    pub fn failures_count(&self) -> usize {
        self.failures.len()
    }
}
