//! The ten built-in format validators.
//!
//! - `datetime`: `date-time`, `date`, `time`
//! - `network`: `email`, `hostname`, `ipv4`, `ipv6`
//! - `identifier`: `uuid`, `uri`, `uri-reference`
//!
//! Validators backed by a regex go through the availability guard; the
//! others parse with chrono, uuid or the RFC 3986 parser re-exported by
//! `jsonschema` and need no guard.

use std::sync::Arc;

use crate::config::RegistryConfig;
use crate::name::BuiltinFormat;
use crate::validator::FormatValidator;

/// Declares a validator whose verdict is a single guarded regex match.
macro_rules! pattern_format {
    ($(#[$meta:meta])* $ty:ident => $format:expr, $pattern:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy)]
        pub struct $ty {
            pattern: $crate::guard::GuardedPattern,
        }

        impl $ty {
            #[must_use]
            pub fn new(engine: $crate::config::PatternEngine) -> Self {
                Self {
                    pattern: $crate::guard::GuardedPattern::new(
                        $format.as_str(),
                        engine,
                        &$pattern,
                    ),
                }
            }

            /// Availability resolved when this validator was built.
            #[must_use]
            pub const fn availability(&self) -> $crate::guard::Availability {
                self.pattern.availability()
            }
        }

        impl Default for $ty {
            fn default() -> Self {
                Self::new($crate::config::PatternEngine::Auto)
            }
        }

        impl $crate::validator::FormatValidator for $ty {
            fn name(&self) -> &str {
                $format.as_str()
            }

            fn validate(&self, value: &str) -> bool {
                self.pattern.is_match(value)
            }
        }
    };
}

mod datetime;
mod identifier;
mod network;

pub use datetime::{DateFormat, DateTimeFormat, TimeFormat};
pub use identifier::{UriFormat, UriReferenceFormat, UuidFormat};
pub use network::{EmailFormat, HostnameFormat, Ipv4Format, Ipv6Format};

/// Build the validator for one built-in format.
#[must_use]
pub fn builtin_validator(
    format: BuiltinFormat,
    config: &RegistryConfig,
) -> Arc<dyn FormatValidator> {
    let engine = config.pattern_engine;
    match format {
        BuiltinFormat::DateTime => Arc::new(DateTimeFormat::new(config.date_time_profile)),
        BuiltinFormat::Date => Arc::new(DateFormat),
        BuiltinFormat::Time => Arc::new(TimeFormat::new(engine)),
        BuiltinFormat::Email => Arc::new(EmailFormat::new(engine)),
        BuiltinFormat::Hostname => Arc::new(HostnameFormat::new(engine)),
        BuiltinFormat::Ipv4 => Arc::new(Ipv4Format::new(engine)),
        BuiltinFormat::Ipv6 => Arc::new(Ipv6Format::new(engine)),
        BuiltinFormat::Uuid => Arc::new(UuidFormat),
        BuiltinFormat::Uri => Arc::new(UriFormat),
        BuiltinFormat::UriReference => Arc::new(UriReferenceFormat),
    }
}

/// Build all ten built-in validators, in [`BuiltinFormat::ALL`] order.
#[must_use]
pub fn builtin_validators(config: &RegistryConfig) -> Vec<Arc<dyn FormatValidator>> {
    BuiltinFormat::ALL
        .into_iter()
        .map(|format| builtin_validator(format, config))
        .collect()
}
