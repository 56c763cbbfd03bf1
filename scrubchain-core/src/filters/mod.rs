//! The built-in transformer library.
//!
//! Each transformer is a plain function over `&str`, usable on its own. The
//! [`BuiltinFilter`] enum is the closed set of those functions reachable by
//! name from a filter chain; the engine consults it before falling back to
//! registered extensions.
//!
//! License: MIT OR APACHE 2.0

pub mod ascii_fold;
pub mod case;
pub mod slug;
pub mod text;
pub mod url;

use once_cell::sync::Lazy;
use std::collections::HashMap;

use crate::errors::ScrubError;
use ascii_fold::AsciiFold;

pub use ascii_fold::{ascii, DefaultAsciiFold};
pub use case::{camel_case, snake_case, studly_case};
pub use slug::{slug, DEFAULT_SLUG_SEPARATOR};
pub use text::{
    lower, ltrim, remove_whitespace, replace, rtrim, strip_dashes, strip_whitespaces,
    stripslashes, trim, ucfirst, ucwords, upper, xss_clean, DEFAULT_TRIM_CHARS,
};
pub use url::prep_url;

/// Identifies one built-in transformer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BuiltinFilter {
    Trim,
    Ltrim,
    Rtrim,
    Lower,
    Upper,
    Ucfirst,
    Ucwords,
    Stripslashes,
    Replace,
    SnakeCase,
    CamelCase,
    StudlyCase,
    XssClean,
    RemoveWhitespace,
    StripWhitespaces,
    StripDashes,
    Slug,
    PrepUrl,
    Ascii,
}

impl BuiltinFilter {
    pub const ALL: [BuiltinFilter; 19] = [
        BuiltinFilter::Trim,
        BuiltinFilter::Ltrim,
        BuiltinFilter::Rtrim,
        BuiltinFilter::Lower,
        BuiltinFilter::Upper,
        BuiltinFilter::Ucfirst,
        BuiltinFilter::Ucwords,
        BuiltinFilter::Stripslashes,
        BuiltinFilter::Replace,
        BuiltinFilter::SnakeCase,
        BuiltinFilter::CamelCase,
        BuiltinFilter::StudlyCase,
        BuiltinFilter::XssClean,
        BuiltinFilter::RemoveWhitespace,
        BuiltinFilter::StripWhitespaces,
        BuiltinFilter::StripDashes,
        BuiltinFilter::Slug,
        BuiltinFilter::PrepUrl,
        BuiltinFilter::Ascii,
    ];

    /// Canonical snake_case name, as written in chains.
    pub fn name(self) -> &'static str {
        match self {
            BuiltinFilter::Trim => "trim",
            BuiltinFilter::Ltrim => "ltrim",
            BuiltinFilter::Rtrim => "rtrim",
            BuiltinFilter::Lower => "lower",
            BuiltinFilter::Upper => "upper",
            BuiltinFilter::Ucfirst => "ucfirst",
            BuiltinFilter::Ucwords => "ucwords",
            BuiltinFilter::Stripslashes => "stripslashes",
            BuiltinFilter::Replace => "replace",
            BuiltinFilter::SnakeCase => "snake_case",
            BuiltinFilter::CamelCase => "camel_case",
            BuiltinFilter::StudlyCase => "studly_case",
            BuiltinFilter::XssClean => "xss_clean",
            BuiltinFilter::RemoveWhitespace => "remove_whitespace",
            BuiltinFilter::StripWhitespaces => "strip_whitespaces",
            BuiltinFilter::StripDashes => "strip_dashes",
            BuiltinFilter::Slug => "slug",
            BuiltinFilter::PrepUrl => "prep_url",
            BuiltinFilter::Ascii => "ascii",
        }
    }

    /// Parameter synopsis for help output. Optional parameters are bracketed.
    pub fn params_synopsis(self) -> &'static str {
        match self {
            BuiltinFilter::Trim | BuiltinFilter::Ltrim | BuiltinFilter::Rtrim => "[charlist]",
            BuiltinFilter::Replace => "search,replace",
            BuiltinFilter::SnakeCase => "[delimiter]",
            BuiltinFilter::Slug => "[separator]",
            _ => "",
        }
    }

    pub fn summary(self) -> &'static str {
        match self {
            BuiltinFilter::Trim => "Strip characters (default: spaces) from both ends",
            BuiltinFilter::Ltrim => "Strip characters (default: spaces) from the start",
            BuiltinFilter::Rtrim => "Strip characters (default: spaces) from the end",
            BuiltinFilter::Lower => "Lowercase",
            BuiltinFilter::Upper => "Uppercase",
            BuiltinFilter::Ucfirst => "Uppercase the first character",
            BuiltinFilter::Ucwords => "Uppercase the first character of each word",
            BuiltinFilter::Stripslashes => "Remove backslash escapes",
            BuiltinFilter::Replace => "Replace every occurrence of a substring",
            BuiltinFilter::SnakeCase => "Convert camelCase to snake_case",
            BuiltinFilter::CamelCase => "Convert snake_case or kebab-case to camelCase",
            BuiltinFilter::StudlyCase => "Convert snake_case or kebab-case to StudlyCase",
            BuiltinFilter::XssClean => "Escape HTML special characters",
            BuiltinFilter::RemoveWhitespace => "Remove spaces",
            BuiltinFilter::StripWhitespaces => "Remove spaces",
            BuiltinFilter::StripDashes => "Remove dashes",
            BuiltinFilter::Slug => "Make a lowercase URL slug",
            BuiltinFilter::PrepUrl => "Prefix http:// when the URL has no scheme",
            BuiltinFilter::Ascii => "Transliterate to printable ASCII",
        }
    }

    /// Looks up a built-in by any spelling of its name.
    ///
    /// The name is snake-cased, then camel-cased, and compared without regard
    /// to case, so `xss_clean`, `xssClean` and `XssClean` all find the same
    /// filter.
    pub fn lookup(name: &str) -> Option<BuiltinFilter> {
        BUILTIN_INDEX.get(&builtin_key(name)).copied()
    }

    /// Runs the transformer on one text value.
    pub fn apply(
        self,
        input: &str,
        params: &[String],
        folder: &dyn AsciiFold,
    ) -> Result<String, ScrubError> {
        let out = match self {
            BuiltinFilter::Trim => trim(input, param_or(params, 0, DEFAULT_TRIM_CHARS)),
            BuiltinFilter::Ltrim => ltrim(input, param_or(params, 0, DEFAULT_TRIM_CHARS)),
            BuiltinFilter::Rtrim => rtrim(input, param_or(params, 0, DEFAULT_TRIM_CHARS)),
            BuiltinFilter::Lower => lower(input),
            BuiltinFilter::Upper => upper(input),
            BuiltinFilter::Ucfirst => ucfirst(input),
            BuiltinFilter::Ucwords => ucwords(input),
            BuiltinFilter::Stripslashes => stripslashes(input),
            BuiltinFilter::Replace => {
                require_params(self, params, 2)?;
                replace(input, &params[0], &params[1])
            }
            BuiltinFilter::SnakeCase => snake_case(input, param_or(params, 0, "_")),
            BuiltinFilter::CamelCase => camel_case(input),
            BuiltinFilter::StudlyCase => studly_case(input),
            BuiltinFilter::XssClean => xss_clean(input),
            BuiltinFilter::RemoveWhitespace => remove_whitespace(input),
            BuiltinFilter::StripWhitespaces => strip_whitespaces(input),
            BuiltinFilter::StripDashes => strip_dashes(input),
            BuiltinFilter::Slug => slug(input, param_or(params, 0, DEFAULT_SLUG_SEPARATOR), folder),
            BuiltinFilter::PrepUrl => prep_url(input),
            BuiltinFilter::Ascii => ascii(input, folder),
        };
        Ok(out)
    }
}

/// Canonical registry key for a filter name: its snake_case form.
pub fn canonical_name(name: &str) -> String {
    snake_case(name, "_")
}

fn builtin_key(name: &str) -> String {
    camel_case(&canonical_name(name)).to_lowercase()
}

static BUILTIN_INDEX: Lazy<HashMap<String, BuiltinFilter>> = Lazy::new(|| {
    BuiltinFilter::ALL
        .iter()
        .map(|filter| (builtin_key(filter.name()), *filter))
        .collect()
});

fn param_or<'a>(params: &'a [String], index: usize, default: &'a str) -> &'a str {
    params.get(index).map(String::as_str).unwrap_or(default)
}

fn require_params(
    filter: BuiltinFilter,
    params: &[String],
    expected: usize,
) -> Result<(), ScrubError> {
    if params.len() < expected {
        return Err(ScrubError::MissingParameter {
            filter: filter.name().to_string(),
            expected,
            given: params.len(),
        });
    }
    Ok(())
}
