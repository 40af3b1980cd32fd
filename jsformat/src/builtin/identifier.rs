//! `uuid`, `uri` and `uri-reference` formats.

use jsonschema::Uri;
use referencing::UriRef;
use uuid::Uuid;

use crate::name::BuiltinFormat;
use crate::validator::FormatValidator;

/// Length of the hyphenated 8-4-4-4-12 form.
const HYPHENATED_UUID_LEN: usize = 36;

/// Hyphenated UUID, any case. The nil UUID is valid.
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidFormat;

impl FormatValidator for UuidFormat {
    fn name(&self) -> &str {
        BuiltinFormat::Uuid.as_str()
    }

    fn validate(&self, value: &str) -> bool {
        // `Uuid::parse_str` also takes the simple, braced and URN forms.
        value.len() == HYPHENATED_UUID_LEN && Uuid::parse_str(value).is_ok()
    }
}

/// RFC 3986 `URI`: a scheme followed by a hierarchical part, with strict
/// percent-encoding. Non-ASCII text is rejected (that is `iri`).
#[derive(Debug, Clone, Copy, Default)]
pub struct UriFormat;

impl FormatValidator for UriFormat {
    fn name(&self) -> &str {
        BuiltinFormat::Uri.as_str()
    }

    fn validate(&self, value: &str) -> bool {
        Uri::parse(value).is_ok()
    }
}

/// RFC 3986 `URI-reference`: a `URI` or a relative reference.
#[derive(Debug, Clone, Copy, Default)]
pub struct UriReferenceFormat;

impl FormatValidator for UriReferenceFormat {
    fn name(&self) -> &str {
        BuiltinFormat::UriReference.as_str()
    }

    fn validate(&self, value: &str) -> bool {
        UriRef::parse(value).is_ok()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn test_uuid() {
        let v = UuidFormat;
        assert!(v.validate("00000000-0000-0000-0000-000000000000"));
        assert!(v.validate("2eb8aa08-aa98-11ea-b4aa-73b441d16380"));
        assert!(v.validate("2EB8AA08-AA98-11EA-B4AA-73B441D16380"));
        assert!(v.validate("2eb8aa08-AA98-11ea-B4Aa-73B441D16380"));
        assert!(!v.validate("not-a-uuid"));
        assert!(!v.validate("2eb8aa08aa9811eab4aa73b441d16380"));
        assert!(!v.validate("{2eb8aa08-aa98-11ea-b4aa-73b441d16380}"));
        assert!(!v.validate("urn:uuid:2eb8aa08-aa98-11ea-b4aa-73b441d16380"));
        assert!(!v.validate("2eb8aa08-aa98-11ea-b4aa-73b441d1638g"));
        assert!(!v.validate("2eb8-aa08-aa98-11ea-b4aa73b441d16380"));
        assert!(!v.validate(""));
    }

    #[test]
    fn test_uuid_fresh_v4_round_trips() {
        let id = Uuid::new_v4().hyphenated().to_string();
        assert!(UuidFormat.validate(&id), "{id}");
    }

    #[test]
    fn test_uri() {
        let v = UriFormat;
        assert!(v.validate("https://example.com/path"));
        assert!(v.validate("http://foo.bar/?baz=qux#quux"));
        assert!(v.validate("mailto:John.Doe@example.com"));
        assert!(v.validate("urn:oasis:names:specification:docbook:dtd:xml:4.1.2"));
        assert!(v.validate("ftp://ftp.is.co.za/rfc/rfc1808.txt"));
        assert!(!v.validate("/relative/path"));
        assert!(!v.validate("//foo.bar/?baz=qux#quux"));
        assert!(!v.validate("abc"));
        assert!(!v.validate("http:// shouldfail.com"));
        assert!(!v.validate("\\\\WINDOWS\\fileshare"));
        assert!(!v.validate("https://example.com/\u{e9}"));
        assert!(!v.validate(""));
    }

    #[test]
    fn test_uri_accepts_any_scheme_shape() {
        let v = UriFormat;
        assert!(v.validate("http:"));
        assert!(v.validate("https://"));
        assert!(v.validate("foo://"));
        assert!(v.validate("https://example.com:99999/"));
        assert!(v.validate("http://[2001:db8::7]/c=GB?objectClass?one"));
        assert!(v.validate("http://example.com/%C3%A9"));
        assert!(!v.validate("://no-scheme"));
        assert!(!v.validate("1http://digit-first"));
    }

    #[test]
    fn test_uri_rejects_malformed_components() {
        let v = UriFormat;
        assert!(!v.validate("http://example.com/%zz"));
        assert!(!v.validate("http://example.com/%4"));
        assert!(!v.validate("http://example.com/[x]"));
        assert!(!v.validate("http://a/b#c#d"));
        assert!(!v.validate("http://example.com/{x}"));
        assert!(!v.validate("http://example.com/a\\b"));
    }

    #[test]
    fn test_uri_reference() {
        let v = UriReferenceFormat;
        assert!(v.validate("/relative/path"));
        assert!(v.validate("https://example.com/path"));
        assert!(v.validate("../up/one"));
        assert!(v.validate("#fragment"));
        assert!(v.validate("?query=1"));
        assert!(v.validate("//host.example/x"));
        assert!(v.validate(""));
        assert!(!v.validate("\\\\WINDOWS\\fileshare"));
        assert!(!v.validate("#frag ment"));
        assert!(!v.validate("a\u{0}b"));
        assert!(!v.validate("%zz"));
        assert!(!v.validate("[x]"));
        assert!(!v.validate("a#b#c"));
        assert!(!v.validate("/caf\u{e9}"));
    }
}
