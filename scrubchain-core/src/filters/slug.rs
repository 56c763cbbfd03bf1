//! URL slugs.
//!
//! License: MIT OR APACHE 2.0

use super::ascii_fold::{ascii, AsciiFold};

/// Separator used by [`slug`] when none is given.
pub const DEFAULT_SLUG_SEPARATOR: &str = "-";

/// Turns arbitrary text into a lowercase, URL-friendly slug.
///
/// The input is folded to ASCII first. Dashes and underscores become the
/// separator, anything that is not a letter, digit, whitespace or separator is
/// dropped, and runs of whitespace and separators collapse into one separator.
pub fn slug(input: &str, separator: &str, folder: &dyn AsciiFold) -> String {
    // Everything past this point is printable ASCII.
    let folded = ascii(input, folder);
    let sep_chars: Vec<char> = separator.chars().collect();
    let flip = if separator == "-" { '_' } else { '-' };

    let mut flipped = String::with_capacity(folded.len());
    let mut in_flip_run = false;
    for c in folded.chars() {
        if c == flip {
            if !in_flip_run {
                flipped.push_str(separator);
            }
            in_flip_run = true;
        } else {
            flipped.push(c);
            in_flip_run = false;
        }
    }

    let mut out = String::with_capacity(flipped.len());
    let mut in_sep_run = false;
    for c in flipped.to_lowercase().chars() {
        if sep_chars.contains(&c) || c.is_ascii_whitespace() {
            if !in_sep_run {
                out.push_str(separator);
            }
            in_sep_run = true;
        } else if c.is_ascii_alphanumeric() {
            out.push(c);
            in_sep_run = false;
        }
    }

    out.trim_matches(|c| sep_chars.contains(&c)).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filters::ascii_fold::DefaultAsciiFold;

    #[test]
    fn test_slug() {
        assert_eq!(slug("test Some MORE", "-", &DefaultAsciiFold), "test-some-more");
    }

    #[test]
    fn test_slug_replaces_swedish_characters() {
        assert_eq!(
            slug("This is a test of åäö and ÅÄÖ", "-", &DefaultAsciiFold),
            "this-is-a-test-of-aao-and-aao"
        );
    }

    #[test]
    fn test_slug_collapses_and_trims_separators() {
        assert_eq!(slug("  --Hello__World!!  ", "-", &DefaultAsciiFold), "hello-world");
    }

    #[test]
    fn test_slug_custom_separator() {
        assert_eq!(slug("Hello big-World", "_", &DefaultAsciiFold), "hello_big_world");
    }

    #[test]
    fn test_slug_empty() {
        assert_eq!(slug("", "-", &DefaultAsciiFold), "");
    }
}
