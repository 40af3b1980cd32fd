//! Fixture decoding and per-file execution.
//!
//! Fixture files follow the JSON-Schema-Test-Suite layout: an array of
//! groups, each with a schema and a list of cases. Only the schema's
//! `format` string is read; everything else in the schema is ignored.

use std::path::Path;

use jsformat::FormatRegistry;
use serde::Deserialize;
use serde_json::Value;
use tracing::debug;

use crate::config::UnknownFormatPolicy;
use crate::error::{CaseFailure, ScanError, ScanErrorKind};

/// One group of cases sharing a schema.
#[derive(Debug, Clone, Deserialize)]
pub struct FixtureGroup {
    pub description: String,
    pub schema: Value,
    pub tests: Vec<FixtureCase>,
}

impl FixtureGroup {
    /// The `format` declared by the group's schema, if it is an object with
    /// a string `format` member.
    #[must_use]
    pub fn format(&self) -> Option<&str> {
        self.schema.get("format").and_then(Value::as_str)
    }
}

/// A single instance with its expected verdict.
#[derive(Debug, Clone, Deserialize)]
pub struct FixtureCase {
    pub description: String,
    pub data: Value,
    pub valid: bool,
}

/// Verdict counts and failures for one fixture file.
#[derive(Debug, Default)]
pub struct FileOutcome {
    pub passed: usize,
    pub skipped: usize,
    pub failures: Vec<CaseFailure>,
}

/// Decode `content` and run every case against `registry`.
///
/// # Errors
///
/// Returns a `ScanError` if the content is not an array of fixture groups.
pub fn run_fixture_content(
    content: &str,
    path: &Path,
    registry: &FormatRegistry,
    unknown_formats: UnknownFormatPolicy,
) -> Result<FileOutcome, ScanError> {
    let groups: Vec<FixtureGroup> = serde_json::from_str(content).map_err(|e| ScanError {
        file: path.to_owned(),
        kind: ScanErrorKind::JsonParseError,
        message: format!("JSON parse error: {e}"),
    })?;

    let mut outcome = FileOutcome::default();
    for group in &groups {
        let Some(format) = group.format() else {
            debug!(file = %path.display(), group = %group.description, "group declares no format; skipped");
            outcome.skipped += group.tests.len();
            continue;
        };

        let Some(validator) = registry.lookup(format) else {
            match unknown_formats {
                UnknownFormatPolicy::Skip => {
                    debug!(file = %path.display(), format, "no validator registered; skipped");
                    outcome.skipped += group.tests.len();
                }
                UnknownFormatPolicy::Fail => {
                    outcome.failures.extend(
                        group
                            .tests
                            .iter()
                            .map(|case| failure(path, group, case, format, None)),
                    );
                }
            }
            continue;
        };

        for case in &group.tests {
            // Format assertions only apply to strings; other instances pass.
            let actual = case.data.as_str().is_none_or(|s| validator.validate(s));
            if actual == case.valid {
                outcome.passed += 1;
            } else {
                outcome
                    .failures
                    .push(failure(path, group, case, format, Some(actual)));
            }
        }
    }
    Ok(outcome)
}

fn failure(
    path: &Path,
    group: &FixtureGroup,
    case: &FixtureCase,
    format: &str,
    actual: Option<bool>,
) -> CaseFailure {
    CaseFailure {
        file: path.to_owned(),
        group: group.description.clone(),
        description: case.description.clone(),
        format: format.to_owned(),
        data: case.data.clone(),
        expected: case.valid,
        actual,
    }
}
