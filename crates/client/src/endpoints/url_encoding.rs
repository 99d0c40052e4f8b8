//! URL encoding for API path segments.
//!
//! Record IDs, object types and association types are interpolated into
//! request paths. Without encoding, a value like `1/associations` would
//! address a different resource and `a?b` would start a query string.
//!
//! ```
//! use hubspot_client::endpoints::url_encoding::encode_path_segment;
//!
//! assert_eq!(encode_path_segment("a/b"), "a%2Fb");
//! ```

use percent_encoding::{AsciiSet, CONTROLS, percent_encode};

/// Characters percent-encoded in a path segment.
///
/// RFC 3986 section 3.3 delimiters, plus `%` so that pre-encoded input is
/// not decoded twice and `/` so a value stays a single segment.
pub const PATH_SEGMENT_ENCODE_SET: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'<')
    .add(b'>')
    .add(b'`')
    .add(b'{')
    .add(b'}')
    .add(b'|')
    .add(b'\\')
    .add(b'^')
    .add(b'%')
    .add(b'/')
    .add(b'?')
    .add(b'#')
    .add(b'+')
    .add(b',')
    .add(b';')
    .add(b'[')
    .add(b']');

/// Percent-encode a value for use as one URL path segment.
///
/// ```
/// use hubspot_client::endpoints::url_encoding::encode_path_segment;
///
/// assert_eq!(encode_path_segment("42"), "42");
/// assert_eq!(encode_path_segment("acme.com"), "acme.com");
/// assert_eq!(encode_path_segment("a b"), "a%20b");
/// ```
pub fn encode_path_segment(segment: &str) -> String {
    percent_encode(segment.as_bytes(), PATH_SEGMENT_ENCODE_SET).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_ids_pass_through() {
        assert_eq!(encode_path_segment("42"), "42");
        assert_eq!(encode_path_segment("company_to_contact"), "company_to_contact");
        assert_eq!(encode_path_segment("acme-corp.example.com"), "acme-corp.example.com");
    }

    #[test]
    fn test_slash_stays_one_segment() {
        assert_eq!(encode_path_segment("42/associations"), "42%2Fassociations");
    }

    #[test]
    fn test_query_and_fragment_delimiters() {
        assert_eq!(encode_path_segment("a?b"), "a%3Fb");
        assert_eq!(encode_path_segment("a#b"), "a%23b");
    }

    #[test]
    fn test_percent_not_double_decoded() {
        assert_eq!(encode_path_segment("a%20b"), "a%2520b");
    }

    #[test]
    fn test_unicode_encoded_as_utf8() {
        assert_eq!(encode_path_segment("caf\u{00e9}"), "caf%C3%A9");
    }

    #[test]
    fn test_email_style_id_property_value() {
        assert_eq!(encode_path_segment("ops@acme.com"), "ops@acme.com");
        assert_eq!(encode_path_segment("a+b@acme.com"), "a%2Bb@acme.com");
    }
}
