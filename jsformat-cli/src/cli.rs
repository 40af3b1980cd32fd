use std::io::Write;
use std::path::PathBuf;

use anyhow::Result;
use clap::{ArgAction, Parser, Subcommand};
use colored::Colorize;
use jsformat::{DateTimeProfile, FormatRegistry, PatternEngine, RegistryConfig};
use jsformat_suite::{SuiteConfig, UnknownFormatPolicy, output, run_fs};
use tracing::debug;

use crate::logging;

#[derive(Parser, Debug)]
#[command(name = "jsformat", version, about = "JSON Schema string format validators")]
pub struct Cli {
    /// Verbosity level (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Treat the regex facility as unavailable; pattern-based formats reject everything
    #[arg(long, global = true)]
    pub no_patterns: bool,

    /// Require fractional seconds in `date-time` values
    #[arg(long, global = true)]
    pub require_fraction: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the registered format names
    List,
    /// Check one or more values against a format
    Check {
        /// Format name, e.g. `date-time`
        format: String,
        /// Values to check
        #[arg(required = true)]
        values: Vec<String>,
    },
    /// Run JSON-Schema-Test-Suite style format fixtures
    Suite {
        /// Fixture files or directories
        #[arg(required = true)]
        paths: Vec<PathBuf>,
        /// Glob patterns to exclude (repeatable)
        #[arg(long)]
        exclude: Vec<String>,
        /// Print the report as JSON
        #[arg(long)]
        json: bool,
        /// Count cases of unregistered formats as failures instead of skipping them
        #[arg(long)]
        fail_unknown: bool,
    },
}

impl Cli {
    /// Registry options selected by the global flags.
    #[must_use]
    pub fn registry_config(&self) -> RegistryConfig {
        let mut config = RegistryConfig::default();
        if self.no_patterns {
            config.pattern_engine = PatternEngine::Disabled;
        }
        if self.require_fraction {
            config.date_time_profile = DateTimeProfile::FractionalSeconds;
        }
        config
    }

    /// Run the selected command, writing user output to `out`.
    ///
    /// Returns `Ok(false)` when the command ran but the verdict was negative.
    ///
    /// # Errors
    ///
    /// Returns an error for unknown formats, unusable fixture paths, or
    /// write failures.
    pub fn execute(&self, out: &mut dyn Write) -> Result<bool> {
        let registry = FormatRegistry::with_config(&self.registry_config());
        debug!(formats = registry.len(), "registry ready");

        match &self.command {
            Commands::List => {
                for name in registry.names() {
                    writeln!(out, "{name}")?;
                }
                Ok(true)
            }
            Commands::Check { format, values } => check(&registry, format, values, out),
            Commands::Suite {
                paths,
                exclude,
                json,
                fail_unknown,
            } => {
                let mut config = SuiteConfig::default();
                config.paths.clone_from(paths);
                config.exclude.clone_from(exclude);
                if *fail_unknown {
                    config.unknown_formats = UnknownFormatPolicy::Fail;
                }

                let report = run_fs(&config, &registry)?;
                if *json {
                    output::write_json(&report, out)?;
                } else {
                    output::write_human(&report, out)?;
                }
                Ok(report.ok)
            }
        }
    }
}

fn check(
    registry: &FormatRegistry,
    format: &str,
    values: &[String],
    out: &mut dyn Write,
) -> Result<bool> {
    let Some(validator) = registry.lookup(format) else {
        anyhow::bail!("Unknown format '{format}'");
    };

    let mut all_valid = true;
    for value in values {
        if validator.validate(value) {
            writeln!(out, "{} {value}", "valid".green())?;
        } else {
            all_valid = false;
            writeln!(out, "{} {value}", "invalid".red())?;
        }
    }
    Ok(all_valid)
}

/// Parse the process arguments, initialise logging and run.
///
/// # Errors
///
/// See [`Cli::execute`].
pub fn run() -> Result<bool> {
    let cli = Cli::parse();
    logging::init(cli.verbose);
    cli.execute(&mut std::io::stdout().lock())
}
