//! Report formatting.
//!
//! JSON and plain text only; colouring is left to the CLI.

use std::io::Write;

use crate::report::SuiteReport;

/// Write `report` as pretty-printed JSON.
///
/// # Errors
///
/// Returns an error if serialization or writing fails.
pub fn write_json(report: &SuiteReport, writer: &mut dyn Write) -> anyhow::Result<()> {
    let json = serde_json::to_string_pretty(report)?;
    writeln!(writer, "{json}")?;
    Ok(())
}

fn write_section(writer: &mut dyn Write, title: &str, lines: &[String]) -> anyhow::Result<()> {
    if lines.is_empty() {
        return Ok(());
    }
    writeln!(writer, "{}", "-".repeat(80))?;
    writeln!(writer, "  {title}")?;
    writeln!(writer, "{}", "-".repeat(80))?;
    for line in lines {
        writeln!(writer, "{line}")?;
    }
    writeln!(writer)?;
    Ok(())
}

/// Write `report` as plain text.
///
/// # Errors
///
/// Returns an error if writing fails.
pub fn write_human(report: &SuiteReport, writer: &mut dyn Write) -> anyhow::Result<()> {
    writeln!(writer)?;
    writeln!(writer, "{}", "=".repeat(80))?;
    writeln!(writer, "  FORMAT FIXTURE RUN")?;
    writeln!(writer, "{}", "=".repeat(80))?;
    writeln!(writer)?;
    writeln!(writer, "  Files scanned:  {}", report.scanned_files)?;
    writeln!(writer, "  Files failed:   {}", report.failed_files)?;
    writeln!(writer, "  Cases passed:   {}", report.passed)?;
    writeln!(writer, "  Cases failed:   {}", report.failures_count())?;
    writeln!(writer, "  Cases skipped:  {}", report.skipped)?;
    writeln!(writer)?;

    let scan_lines: Vec<String> = report
        .scan_errors
        .iter()
        .map(crate::error::ScanError::format_human_readable)
        .collect();
    write_section(writer, "SCAN ERRORS (files that could not be run)", &scan_lines)?;

    let failure_lines: Vec<String> = report
        .failures
        .iter()
        .map(crate::error::CaseFailure::format_human_readable)
        .collect();
    write_section(writer, "FAILED CASES", &failure_lines)?;

    writeln!(writer, "{}", "=".repeat(80))?;
    if report.ok {
        writeln!(
            writer,
            "OK: {} case(s) in {} file(s) matched",
            report.passed, report.scanned_files
        )?;
    } else {
        if !report.scan_errors.is_empty() {
            writeln!(
                writer,
                "FAILED: {} file(s) could not be run",
                report.failed_files
            )?;
        }
        if !report.failures.is_empty() {
            writeln!(
                writer,
                "FAILED: {} case(s) did not match the expected verdict",
                report.failures_count()
            )?;
        }
    }
    writeln!(writer, "{}", "=".repeat(80))?;

    Ok(())
}
