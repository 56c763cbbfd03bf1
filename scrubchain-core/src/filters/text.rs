//! Plain text transformers: trimming, case, escaping and character removal.
//!
//! License: MIT OR APACHE 2.0

/// Characters stripped by the trim family when no charlist is given.
pub const DEFAULT_TRIM_CHARS: &str = " ";

/// Word boundaries recognized by [`ucwords`].
const WORD_DELIMITERS: [char; 6] = [' ', '\t', '\r', '\n', '\u{0C}', '\u{0B}'];

/// Expands a trim charlist into its characters.
///
/// `a..e` inside the list stands for the inclusive range `a` to `e`. A range
/// whose bounds are reversed is kept literally.
pub fn expand_charlist(charlist: &str) -> Vec<char> {
    let chars: Vec<char> = charlist.chars().collect();
    let mut out = Vec::with_capacity(chars.len());
    let mut i = 0;
    while i < chars.len() {
        let is_range = i + 3 < chars.len() && chars[i + 1] == '.' && chars[i + 2] == '.';
        if is_range && chars[i] <= chars[i + 3] {
            out.extend(chars[i]..=chars[i + 3]);
            i += 4;
        } else {
            out.push(chars[i]);
            i += 1;
        }
    }
    out
}

pub fn trim(input: &str, charlist: &str) -> String {
    let set = expand_charlist(charlist);
    input.trim_matches(|c| set.contains(&c)).to_string()
}

pub fn ltrim(input: &str, charlist: &str) -> String {
    let set = expand_charlist(charlist);
    input.trim_start_matches(|c| set.contains(&c)).to_string()
}

pub fn rtrim(input: &str, charlist: &str) -> String {
    let set = expand_charlist(charlist);
    input.trim_end_matches(|c| set.contains(&c)).to_string()
}

pub fn lower(input: &str) -> String {
    input.to_lowercase()
}

pub fn upper(input: &str) -> String {
    input.to_uppercase()
}

/// Uppercases the first character and leaves the rest untouched.
pub fn ucfirst(input: &str) -> String {
    let mut chars = input.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Lowercases the first character and leaves the rest untouched.
pub fn lcfirst(input: &str) -> String {
    let mut chars = input.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Uppercases the first character of every word.
pub fn ucwords(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut at_word_start = true;
    for c in input.chars() {
        if at_word_start {
            out.extend(c.to_uppercase());
        } else {
            out.push(c);
        }
        at_word_start = WORD_DELIMITERS.contains(&c);
    }
    out
}

/// Removes backslash escapes.
///
/// An escaped backslash becomes a single backslash, `\0` becomes a NUL
/// character, and a lone trailing backslash is dropped.
pub fn stripslashes(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut chars = input.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('0') => out.push('\0'),
            Some(escaped) => out.push(escaped),
            None => {}
        }
    }
    out
}

pub fn replace(input: &str, search: &str, replacement: &str) -> String {
    if search.is_empty() {
        return input.to_string();
    }
    input.replace(search, replacement)
}

/// Escapes the HTML special characters `&`, `"`, `'`, `<` and `>`.
pub fn xss_clean(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#039;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            other => out.push(other),
        }
    }
    out
}

/// Removes every space character.
pub fn strip_whitespaces(input: &str) -> String {
    input.replace(' ', "")
}

pub fn remove_whitespace(input: &str) -> String {
    strip_whitespaces(input)
}

pub fn strip_dashes(input: &str) -> String {
    input.replace('-', "")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trim() {
        assert_eq!(trim(" test ", DEFAULT_TRIM_CHARS), "test");
    }

    #[test]
    fn test_trim_default_keeps_tabs() {
        assert_eq!(trim("\t test \t", DEFAULT_TRIM_CHARS), "\t test \t");
    }

    #[test]
    fn test_trim_with_charlist_range() {
        assert_eq!(trim("abcHELLOcba", "a..c"), "HELLO");
        assert_eq!(trim("xxhixx", "x"), "hi");
    }

    #[test]
    fn test_ltrim_and_rtrim() {
        assert_eq!(ltrim(" test", DEFAULT_TRIM_CHARS), "test");
        assert_eq!(rtrim("test ", DEFAULT_TRIM_CHARS), "test");
        assert_eq!(ltrim("--a--", "-"), "a--");
        assert_eq!(rtrim("--a--", "-"), "--a");
    }

    #[test]
    fn test_case_helpers() {
        assert_eq!(lower("TEST"), "test");
        assert_eq!(upper("test"), "TEST");
        assert_eq!(ucfirst("test"), "Test");
        assert_eq!(lcfirst("Test"), "test");
        assert_eq!(ucfirst(""), "");
        assert_eq!(upper("åäö"), "ÅÄÖ");
    }

    #[test]
    fn test_ucwords() {
        assert_eq!(ucwords("test some more"), "Test Some More");
        assert_eq!(ucwords("one\ttwo\nthree"), "One\tTwo\nThree");
    }

    #[test]
    fn test_stripslashes() {
        assert_eq!(stripslashes("\\test"), "test");
        assert_eq!(stripslashes("a\\\\b"), "a\\b");
        assert_eq!(stripslashes("x\\0y"), "x\0y");
        assert_eq!(stripslashes("end\\"), "end");
    }

    #[test]
    fn test_replace() {
        assert_eq!(replace("a-b-c", "-", "+"), "a+b+c");
        assert_eq!(replace("abc", "", "x"), "abc");
    }

    #[test]
    fn test_xss_clean() {
        assert_eq!(
            xss_clean("<script>eval(\"test\");</script>"),
            "&lt;script&gt;eval(&quot;test&quot;);&lt;/script&gt;"
        );
        assert_eq!(xss_clean("Tom & 'Jerry'"), "Tom &amp; &#039;Jerry&#039;");
    }

    #[test]
    fn test_whitespace_and_dash_removal() {
        assert_eq!(remove_whitespace("test some more"), "testsomemore");
        assert_eq!(strip_whitespaces("test some more"), "testsomemore");
        assert_eq!(strip_dashes("test-some-more"), "testsomemore");
    }
}
