//! The fixed vocabulary of built-in format names.

use std::fmt;
use std::str::FromStr;

use crate::error::UnknownFormat;

/// A format name with a built-in validator.
///
/// Custom formats are identified by plain strings; this enum only covers the
/// names the registry pre-registers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum BuiltinFormat {
    DateTime,
    Date,
    Time,
    Email,
    Hostname,
    Ipv4,
    Ipv6,
    Uuid,
    Uri,
    UriReference,
}

impl BuiltinFormat {
    /// Every built-in format, in registration order.
    pub const ALL: [Self; 10] = [
        Self::DateTime,
        Self::Date,
        Self::Time,
        Self::Email,
        Self::Hostname,
        Self::Ipv4,
        Self::Ipv6,
        Self::Uuid,
        Self::Uri,
        Self::UriReference,
    ];

    /// The canonical, case-sensitive name used in schemas.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::DateTime => "date-time",
            Self::Date => "date",
            Self::Time => "time",
            Self::Email => "email",
            Self::Hostname => "hostname",
            Self::Ipv4 => "ipv4",
            Self::Ipv6 => "ipv6",
            Self::Uuid => "uuid",
            Self::Uri => "uri",
            Self::UriReference => "uri-reference",
        }
    }

    /// Whether the validator for this format relies on the regex facility
    /// and is therefore subject to the availability guard.
    #[must_use]
    pub const fn is_pattern_based(self) -> bool {
        matches!(
            self,
            Self::Time | Self::Email | Self::Hostname | Self::Ipv4 | Self::Ipv6
        )
    }
}

impl fmt::Display for BuiltinFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BuiltinFormat {
    type Err = UnknownFormat;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|f| f.as_str() == s)
            .ok_or_else(|| UnknownFormat(s.to_owned()))
    }
}
