//! `email`, `hostname`, `ipv4` and `ipv6` formats.

use std::sync::LazyLock;

use regex::Regex;

use crate::guard;
use crate::name::BuiltinFormat;

/// `local@domain.tld` shape only; not the RFC 5322 grammar.
static EMAIL_PATTERN: LazyLock<Option<Regex>> = LazyLock::new(|| {
    guard::compile(BuiltinFormat::Email.as_str(), r"^[^@\s]+@[^@\s]+\.[^@\s]+$")
});

static HOSTNAME_PATTERN: LazyLock<Option<Regex>> = LazyLock::new(|| {
    guard::compile(
        BuiltinFormat::Hostname.as_str(),
        concat!(
            r"^[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?",
            r"(?:\.[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?)*$",
        ),
    )
});

/// Dotted decimal; an octet is `0`, `1-9`, `10-99`, `100-199`, `200-249`
/// or `250-255`, so leading zeros never match.
static IPV4_PATTERN: LazyLock<Option<Regex>> = LazyLock::new(|| {
    guard::compile(
        BuiltinFormat::Ipv4.as_str(),
        r"^(?:25[0-5]|2[0-4][0-9]|1[0-9][0-9]|[1-9]?[0-9])(?:\.(?:25[0-5]|2[0-4][0-9]|1[0-9][0-9]|[1-9]?[0-9])){3}$",
    )
});

/// Full form only: eight groups, no `::` compression, no embedded IPv4.
static IPV6_PATTERN: LazyLock<Option<Regex>> = LazyLock::new(|| {
    guard::compile(
        BuiltinFormat::Ipv6.as_str(),
        r"^(?:[A-Fa-f0-9]{1,4}:){7}[A-Fa-f0-9]{1,4}$",
    )
});

pattern_format! {
    /// Approximate e-mail address: no whitespace, one `@`, dotted domain.
    EmailFormat => BuiltinFormat::Email, EMAIL_PATTERN
}

pattern_format! {
    /// Dot-separated labels of 1-63 alphanumerics with internal hyphens.
    HostnameFormat => BuiltinFormat::Hostname, HOSTNAME_PATTERN
}

pattern_format! {
    /// IPv4 dotted-quad.
    Ipv4Format => BuiltinFormat::Ipv4, IPV4_PATTERN
}

pattern_format! {
    /// Uncompressed IPv6 address.
    Ipv6Format => BuiltinFormat::Ipv6, IPV6_PATTERN
}
