//! `date-time`, `date` and `time` formats.

use std::sync::LazyLock;

use chrono::{DateTime, NaiveDate, Timelike};
use regex::Regex;

use crate::config::DateTimeProfile;
use crate::guard;
use crate::name::BuiltinFormat;
use crate::validator::FormatValidator;

/// `HH:MM:SS[.frac][Z|+HH:MM|-HH:MM]`, seconds capped at 59.
static TIME_PATTERN: LazyLock<Option<Regex>> = LazyLock::new(|| {
    guard::compile(
        BuiltinFormat::Time.as_str(),
        concat!(
            r"^(?:[01][0-9]|2[0-3])", // hour
            r":[0-5][0-9]",           // minute
            r":[0-5][0-9]",           // second, no leap second
            r"(?:\.[0-9]+)?",         // fraction
            r"(?:Z|[+-](?:[01][0-9]|2[0-3]):[0-5][0-9])?$",
        ),
    )
});

/// Parse an all-ASCII-digit slice.
fn ascii_number(bytes: &[u8]) -> Option<u32> {
    if bytes.is_empty() {
        return None;
    }
    bytes.iter().try_fold(0u32, |acc, &b| {
        b.is_ascii_digit()
            .then(|| acc * 10 + u32::from(b - b'0'))
    })
}

/// Strict `YYYY-MM-DD` parse; chrono's `%Y-%m-%d` would also take
/// unpadded and signed fields.
fn parse_full_date(value: &str) -> Option<NaiveDate> {
    let bytes = value.as_bytes();
    if bytes.len() != 10 || bytes[4] != b'-' || bytes[7] != b'-' {
        return None;
    }
    let year = i32::try_from(ascii_number(&bytes[0..4])?).ok()?;
    let month = ascii_number(&bytes[5..7])?;
    let day = ascii_number(&bytes[8..10])?;
    NaiveDate::from_ymd_opt(year, month, day)
}

/// RFC 3339 `date-time`.
///
/// Leap seconds are accepted only where they can occur, at 23:59:60 UTC.
#[derive(Debug, Clone, Copy, Default)]
pub struct DateTimeFormat {
    profile: DateTimeProfile,
}

impl DateTimeFormat {
    #[must_use]
    pub const fn new(profile: DateTimeProfile) -> Self {
        Self { profile }
    }

    #[must_use]
    pub const fn profile(&self) -> DateTimeProfile {
        self.profile
    }
}

impl FormatValidator for DateTimeFormat {
    fn name(&self) -> &str {
        BuiltinFormat::DateTime.as_str()
    }

    fn validate(&self, value: &str) -> bool {
        let bytes = value.as_bytes();
        // chrono also takes a space separator, RFC 3339 section 5.6 does not.
        if !matches!(bytes.get(10), Some(b'T' | b't')) {
            return false;
        }
        if self.profile == DateTimeProfile::FractionalSeconds && bytes.get(19) != Some(&b'.') {
            return false;
        }
        let Ok(parsed) = DateTime::parse_from_rfc3339(value) else {
            return false;
        };
        if bytes.get(17..19) == Some(b"60".as_slice()) {
            let utc = parsed.naive_utc();
            return utc.hour() == 23 && utc.minute() == 59;
        }
        true
    }
}

/// RFC 3339 `full-date`.
#[derive(Debug, Clone, Copy, Default)]
pub struct DateFormat;

impl FormatValidator for DateFormat {
    fn name(&self) -> &str {
        BuiltinFormat::Date.as_str()
    }

    fn validate(&self, value: &str) -> bool {
        parse_full_date(value).is_some()
    }
}

pattern_format! {
    /// Time of day with optional fraction and offset.
    TimeFormat => BuiltinFormat::Time, TIME_PATTERN
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use crate::config::PatternEngine;
    use crate::guard::Availability;
    use chrono::{SecondsFormat, Utc};

    #[test]
    fn test_date_time_rfc3339_profile() {
        let v = DateTimeFormat::default();
        assert!(v.validate("1963-06-19T08:30:06.283185Z"));
        assert!(v.validate("1963-06-19T08:30:06Z"));
        assert!(v.validate("1937-01-01T12:00:27.87+00:20"));
        assert!(v.validate("1990-12-31T15:59:59-08:00"));
    }

    #[test]
    fn test_date_time_rejects_malformed() {
        let v = DateTimeFormat::default();
        assert!(!v.validate(""));
        assert!(!v.validate("1963-06-19"));
        assert!(!v.validate("1963-06-19 08:30:06Z"));
        assert!(!v.validate("1963-06-19T08:30:06"));
        assert!(!v.validate("06/19/1963 08:30:06 PST"));
        assert!(!v.validate("2013-350T01:01:01"));
        assert!(!v.validate("1990-02-31T15:59:59.123-08:00"));
        assert!(!v.validate("1963-06-19T08:30:06.28123+01:00Z"));
    }

    #[test]
    fn test_date_time_leap_second_only_at_end_of_utc_day() {
        let v = DateTimeFormat::default();
        assert!(v.validate("1998-12-31T23:59:60Z"));
        assert!(!v.validate("1998-12-31T22:59:60Z"));
        assert!(!v.validate("1998-12-31T23:58:60Z"));
    }

    #[test]
    fn test_date_time_fractional_profile() {
        let v = DateTimeFormat::new(DateTimeProfile::FractionalSeconds);
        assert!(v.validate("1963-06-19T08:30:06.283185Z"));
        assert!(!v.validate("1963-06-19T08:30:06Z"));
        assert!(!v.validate("1963-06-19T08:30:06+01:00"));
    }

    #[test]
    fn test_date_time_now_round_trips() {
        let now = Utc::now().to_rfc3339_opts(SecondsFormat::Micros, true);
        assert!(DateTimeFormat::default().validate(&now), "{now}");
        assert!(
            DateTimeFormat::new(DateTimeProfile::FractionalSeconds).validate(&now),
            "{now}"
        );
    }

    #[test]
    fn test_date_leap_years() {
        let v = DateFormat;
        assert!(!v.validate("2023-02-29"));
        assert!(v.validate("2024-02-29"));
        assert!(v.validate("2000-02-29"));
        assert!(!v.validate("1900-02-29"));
    }

    #[test]
    fn test_date_rejects_non_existent_and_malformed() {
        let v = DateFormat;
        assert!(!v.validate("2020-02-30"));
        assert!(!v.validate("2020-13-01"));
        assert!(!v.validate("2020-00-10"));
        assert!(!v.validate("2020-01-32"));
        assert!(!v.validate("2020-1-01"));
        assert!(!v.validate("+2020-01-01"));
        assert!(!v.validate("2020-01-01T00:00:00Z"));
        assert!(!v.validate("2020/01/01"));
        assert!(!v.validate("2020-01-0\u{661}"));
        assert!(!v.validate(""));
    }

    #[test]
    fn test_date_today_round_trips() {
        let today = Utc::now().format("%Y-%m-%d").to_string();
        assert!(DateFormat.validate(&today), "{today}");
    }

    #[test]
    fn test_time_grammar() {
        let v = TimeFormat::default();
        assert!(v.validate("08:30:06"));
        assert!(v.validate("23:59:59.999"));
        assert!(v.validate("08:30:06Z"));
        assert!(v.validate("08:30:06.283185+05:30"));
        assert!(v.validate("00:00:00-23:59"));
        assert!(!v.validate("24:00:00"));
        assert!(!v.validate("12:60:00"));
        assert!(!v.validate("23:59:60"));
        assert!(!v.validate("8:30:06"));
        assert!(!v.validate("08:30"));
        assert!(!v.validate("08:30:06+0530"));
        assert!(!v.validate("08:30:06 Z"));
        assert!(!v.validate("\u{661}2:00:00"));
    }

    #[test]
    fn test_time_now_round_trips() {
        let now = Utc::now().format("%H:%M:%S%.6fZ").to_string();
        assert!(TimeFormat::default().validate(&now), "{now}");
    }

    #[test]
    fn test_time_disabled_rejects_everything() {
        let v = TimeFormat::new(PatternEngine::Disabled);
        assert_eq!(v.availability(), Availability::Unavailable);
        assert!(!v.validate("08:30:06Z"));
    }
}
