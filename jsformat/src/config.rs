//! Configuration for the built-in validator set.

/// Whether pattern-based validators may use the regex facility.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[non_exhaustive]
pub enum PatternEngine {
    /// Use the regex facility if the process-wide probe succeeded (default).
    #[default]
    Auto,
    /// Treat the facility as unavailable: pattern-based validators reject
    /// every value.
    Disabled,
}

/// Which RFC 3339 / ISO 8601 profile the `date-time` validator accepts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[non_exhaustive]
pub enum DateTimeProfile {
    /// RFC 3339 `date-time`: fractional seconds optional, offset required.
    #[default]
    Rfc3339,
    /// Like `Rfc3339`, but fractional seconds are mandatory.
    FractionalSeconds,
}

/// Options applied when constructing the built-in validators.
#[derive(Debug, Clone, Default)]
#[non_exhaustive]
pub struct RegistryConfig {
    /// Availability policy for the regex-backed validators.
    pub pattern_engine: PatternEngine,
    /// Accepted `date-time` profile.
    pub date_time_profile: DateTimeProfile,
}
