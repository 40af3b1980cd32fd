//! Configuration for fixture runs.

use std::path::PathBuf;

/// What to do with a fixture group whose format has no registered validator.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[non_exhaustive]
pub enum UnknownFormatPolicy {
    /// Count the group's cases as skipped (default).
    #[default]
    Skip,
    /// Record every case of the group as a failure.
    Fail,
}

/// Where fixtures come from and how far the walk may go.
///
/// NOTE: `paths` is required and must be non-empty. The location of a
/// checked-out test suite is the caller's concern.
#[derive(Debug, Clone)]
#[non_exhaustive]
pub struct SuiteConfig {
    /// Fixture files or directories to scan. Required, must be non-empty.
    pub paths: Vec<PathBuf>,
    /// Exclude patterns (glob format), matched against the full path and the
    /// file name.
    pub exclude: Vec<String>,
    /// Maximum fixture file size in bytes (default: 10 MB).
    pub max_file_size: u64,
    /// Whether to follow symbolic links (default: `false`).
    pub follow_links: bool,
    /// Maximum directory traversal depth (default: 64).
    pub max_depth: usize,
    /// Maximum number of fixture files to read (default: `100_000`).
    pub max_files: usize,
    /// Handling of formats the registry does not know.
    pub unknown_formats: UnknownFormatPolicy,
}

impl Default for SuiteConfig {
    fn default() -> Self {
        Self {
            paths: Vec::new(),
            exclude: Vec::new(),
            max_file_size: 10_485_760,
            follow_links: false,
            max_depth: 64,
            max_files: 100_000,
            unknown_formats: UnknownFormatPolicy::Skip,
        }
    }
}
