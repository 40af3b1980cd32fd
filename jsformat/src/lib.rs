//! # jsformat
//!
//! String `format` validators for JSON Schema.
//!
//! A [`FormatValidator`] is a named, total predicate over strings. The
//! [`FormatRegistry`] maps format names to validators and comes
//! pre-populated with ten built-ins (`date-time`, `date`, `time`, `email`,
//! `hostname`, `ipv4`, `ipv6`, `uuid`, `uri`, `uri-reference`). Custom
//! validators are added with [`FormatRegistry::register`].
//!
//! ```
//! use jsformat::FormatRegistry;
//!
//! let registry = FormatRegistry::default();
//! let date = registry.lookup("date").unwrap();
//! assert!(date.validate("2024-02-29"));
//! assert!(!date.validate("2023-02-29"));
//! ```
//!
//! Regex-backed validators fail closed when the pattern facility is
//! unavailable or disabled through [`RegistryConfig::pattern_engine`].

mod builtin;
mod config;
pub mod engine;
mod error;
mod guard;
mod name;
mod registry;
mod validator;


pub use builtin::{
    DateFormat, DateTimeFormat, EmailFormat, HostnameFormat, Ipv4Format, Ipv6Format, TimeFormat,
    UriFormat, UriReferenceFormat, UuidFormat, builtin_validator, builtin_validators,
};
pub use config::{DateTimeProfile, PatternEngine, RegistryConfig};
pub use error::{RegistryError, UnknownFormat};
pub use guard::Availability;
pub use name::BuiltinFormat;
pub use registry::FormatRegistry;
pub use validator::{FormatFn, FormatValidator, SharedValidator};
