//! Identifier case conversion.
//!
//! These are chain filters in their own right and also the normalization the
//! engine applies to filter names before lookup.
//!
//! License: MIT OR APACHE 2.0

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

use super::text::{lcfirst, ucwords};

static UPPER_AFTER_ANY: Lazy<Regex> = Lazy::new(|| Regex::new(r"(.)([A-Z])").unwrap());

/// `testSnakeCase` becomes `test_snake_case`.
///
/// A value made only of lowercase ASCII letters is returned as is. Otherwise
/// the delimiter is inserted before every uppercase ASCII letter that follows
/// another character, and the result is lowercased.
pub fn snake_case(input: &str, delimiter: &str) -> String {
    if !input.is_empty() && input.bytes().all(|b| b.is_ascii_lowercase()) {
        return input.to_string();
    }
    UPPER_AFTER_ANY
        .replace_all(input, |caps: &Captures| {
            format!("{}{}{}", &caps[1], delimiter, &caps[2])
        })
        .to_lowercase()
}

/// `test_studly_case` becomes `TestStudlyCase`.
pub fn studly_case(input: &str) -> String {
    ucwords(&input.replace(['-', '_'], " ")).replace(' ', "")
}

/// `test_camel_case` becomes `testCamelCase`.
pub fn camel_case(input: &str) -> String {
    lcfirst(&studly_case(input))
}
