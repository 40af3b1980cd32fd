//! Availability guard for the regex-backed validators.
//!
//! The regex facility is probed once per process. Validators built while it
//! is unavailable (or while [`PatternEngine::Disabled`] is configured) fail
//! closed: every value is rejected.

use std::sync::LazyLock;

use regex::Regex;
use tracing::{debug, warn};

use crate::config::PatternEngine;

/// Exercises every regex feature the built-in patterns rely on: anchors,
/// non-capturing groups, alternation, bounded repetition and `\s`.
const PROBE_PATTERN: &str = r"^(?:[a-z0-9]{1,3}|-)(?:\s[^@\s]+)?$";

static DETECTED: LazyLock<Availability> = LazyLock::new(|| match Regex::new(PROBE_PATTERN) {
    Ok(re) if re.is_match("ab x") && !re.is_match("abcd") => Availability::Available,
    Ok(_) => {
        warn!("regex probe matched unexpectedly; pattern-based formats will reject all values");
        Availability::Unavailable
    }
    Err(err) => {
        warn!(error = %err, "regex facility unavailable; pattern-based formats will reject all values");
        Availability::Unavailable
    }
});

/// Whether the pattern facility can be used in this process.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Availability {
    Available,
    Unavailable,
}

impl Availability {
    /// The process-wide probe result. Computed on first use.
    #[must_use]
    pub fn detect() -> Self {
        *DETECTED
    }

    /// Combine the probe result with the configured policy.
    #[must_use]
    pub fn resolve(engine: PatternEngine) -> Self {
        match engine {
            PatternEngine::Auto => Self::detect(),
            PatternEngine::Disabled => Self::Unavailable,
        }
    }

    #[must_use]
    pub const fn is_available(self) -> bool {
        matches!(self, Self::Available)
    }
}

/// Compile a built-in pattern, logging instead of panicking on failure.
pub fn compile(format: &str, source: &str) -> Option<Regex> {
    match Regex::new(source) {
        Ok(re) => Some(re),
        Err(err) => {
            warn!(format, error = %err, "failed to compile format pattern; format will reject all values");
            None
        }
    }
}

/// A process-wide compiled pattern paired with the availability resolved
/// when the owning validator was built.
#[derive(Debug, Clone, Copy)]
pub struct GuardedPattern {
    availability: Availability,
    pattern: &'static LazyLock<Option<Regex>>,
}

impl GuardedPattern {
    pub fn new(
        format: &str,
        engine: PatternEngine,
        pattern: &'static LazyLock<Option<Regex>>,
    ) -> Self {
        let availability = Availability::resolve(engine);
        if !availability.is_available() {
            debug!(format, "pattern engine unavailable; format fails closed");
        }
        Self {
            availability,
            pattern,
        }
    }

    pub const fn availability(&self) -> Availability {
        self.availability
    }

    /// `false` whenever the facility or the compiled pattern is missing.
    pub fn is_match(&self, value: &str) -> bool {
        if !self.availability.is_available() {
            return false;
        }
        let Some(re) = &**self.pattern else {
            return false;
        };
        re.is_match(value)
    }
}
