// Passive presence checks against a response's headers

use crate::catalog::HeaderSpec;
use reqwest::header::HeaderMap;
use std::collections::HashMap;

/// Case-insensitive access to the first value of a response header.
pub trait HeaderLookup {
    /// True when `name` is present and its first value is non-empty.
    fn has_value(&self, name: &str) -> bool;
}

impl HeaderLookup for HeaderMap {
    fn has_value(&self, name: &str) -> bool {
        // HeaderMap names are stored lowercased, so `get` is already case-insensitive.
        // Non-UTF-8 values still count: only the byte length matters.
        self.get(name).is_some_and(|value| !value.as_bytes().is_empty())
    }
}

impl HeaderLookup for HashMap<String, String> {
    fn has_value(&self, name: &str) -> bool {
        self.iter()
            .any(|(key, value)| key.eq_ignore_ascii_case(name) && !value.is_empty())
    }
}

pub fn is_present<H: HeaderLookup + ?Sized>(headers: &H, spec: &HeaderSpec) -> bool {
    headers.has_value(spec.name) || spec.aliases.iter().any(|alias| headers.has_value(alias))
}

/// Literal prefix check, matching how the URL normalizer decides on a scheme.
pub fn is_https(url: &str) -> bool {
    url.starts_with("https://")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::find;
    use reqwest::header::HeaderValue;

    #[test]
    fn test_header_map_lookup_ignores_case() {
        let mut headers = HeaderMap::new();
        headers.insert("x-frame-options", HeaderValue::from_static("DENY"));

        assert!(headers.has_value("X-Frame-Options"));
        assert!(headers.has_value("X-FRAME-OPTIONS"));
    }

    #[test]
    fn test_hash_map_lookup_ignores_case() {
        let mut headers = HashMap::new();
        headers.insert("STRICT-transport-security".to_string(), "max-age=1".to_string());

        assert!(headers.has_value("Strict-Transport-Security"));
        assert!(!headers.has_value("X-Frame-Options"));
    }

    #[test]
    fn test_empty_value_is_absent() {
        let mut headers = HeaderMap::new();
        headers.insert("referrer-policy", HeaderValue::from_static(""));

        assert!(!is_present(&headers, find("Referrer-Policy").unwrap()));
    }

    #[test]
    fn test_alias_counts_as_present() {
        let mut headers = HeaderMap::new();
        headers.insert("feature-policy", HeaderValue::from_static("camera 'none'"));

        assert!(is_present(&headers, find("Permissions-Policy").unwrap()));
    }

    #[test]
    fn test_is_https() {
        assert!(is_https("https://example.com"));
        assert!(!is_https("http://example.com"));
        assert!(!is_https("HTTPS://example.com"));
    }
}
