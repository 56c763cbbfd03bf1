//! URL normalization.
//!
//! License: MIT OR APACHE 2.0

use once_cell::sync::Lazy;
use regex::Regex;

static SCHEME: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z][A-Za-z0-9+.\-]*:(.*)$").unwrap());

// `host:8080` and `host:8080/path` name a port, not a scheme.
static PORT_ONLY: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[0-9]+(?:/.*)?$").unwrap());

/// Returns true when `url` starts with a scheme such as `https:` or `mailto:`.
pub fn has_scheme(url: &str) -> bool {
    match SCHEME.captures(url) {
        Some(caps) => !PORT_ONLY.is_match(&caps[1]),
        None => false,
    }
}

/// Prefixes `http://` when the URL has no scheme. Empty input stays empty.
pub fn prep_url(url: &str) -> String {
    if url.is_empty() {
        return String::new();
    }
    if has_scheme(url) {
        url.to_string()
    } else {
        format!("http://{}", url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prep_url() {
        assert_eq!(prep_url("www.test.com"), "http://www.test.com");
    }

    #[test]
    fn test_url_only_prepped_if_not_empty() {
        assert_eq!(prep_url(""), "");
    }

    #[test]
    fn test_existing_scheme_is_kept() {
        assert_eq!(prep_url("https://example.org"), "https://example.org");
        assert_eq!(prep_url("mailto:someone@example.org"), "mailto:someone@example.org");
    }

    #[test]
    fn test_host_with_port_is_not_a_scheme() {
        assert_eq!(prep_url("localhost:8080/api"), "http://localhost:8080/api");
    }
}
