//! Failure types for fixture runs.

use std::path::PathBuf;

use serde::Serialize;
use serde_json::Value;

/// The kind of problem that kept a fixture file from being run.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[non_exhaustive]
pub enum ScanErrorKind {
    /// The file could not be opened or read.
    IoError,
    /// The file exceeded the configured maximum size.
    FileTooLarge,
    /// The content is not a JSON array of fixture groups.
    JsonParseError,
    /// The content is not valid UTF-8.
    InvalidEncoding,
    /// The resolved path escapes the scan root (symlink escape).
    OutsideRoot,
    /// `max_files` was reached; the run is incomplete.
    LimitExceeded,
    /// Directory traversal failed (permission denied, loop detected, ...).
    WalkError,
    /// An exclude glob could not be parsed.
    InvalidExcludePattern,
}

/// A fixture file that could not be run at all.
///
/// Distinct from [`CaseFailure`]: a scan error means no verdicts were
/// produced for the file, so the run must not be reported as passing.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[non_exhaustive]
pub struct ScanError {
    pub file: PathBuf,
    pub kind: ScanErrorKind,
    /// Human-readable description.
    pub message: String,
}

impl ScanError {
    #[must_use]
    pub fn format_human_readable(&self) -> String {
        format!("{}: [scan error] {}", self.file.display(), self.message)
    }
}

/// A fixture case whose verdict differed from the expected one.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[non_exhaustive]
pub struct CaseFailure {
    /// Fixture file the case came from.
    pub file: PathBuf,
    /// Description of the enclosing group.
    pub group: String,
    /// Description of the case.
    pub description: String,
    /// Format under test.
    pub format: String,
    /// The instance, as written in the fixture.
    pub data: Value,
    /// Expected verdict.
    pub expected: bool,
    /// Verdict produced by the registry; `None` if the format is unknown.
    pub actual: Option<bool>,
}

impl CaseFailure {
    /// `{file}: [{format}] {group} / {description}: expected {valid|invalid}, got {...} ({data})`
    #[must_use]
    pub fn format_human_readable(&self) -> String {
        let verdict = |valid: bool| if valid { "valid" } else { "invalid" };
        let actual = self.actual.map_or("unknown format", verdict);
        format!(
            "{}: [{}] {} / {}: expected {}, got {} ({})",
            self.file.display(),
            self.format,
            self.group,
            self.description,
            verdict(self.expected),
            actual,
            self.data
        )
    }
}
