//! Gatekeeping for field values in debug logs.
//!
//! Field values are user input and may carry personal data, so they only reach
//! the log when `SCRUBCHAIN_ALLOW_DEBUG_VALUES=true` is set in the environment.
//!
//! License: MIT OR APACHE 2.0

use once_cell::sync::Lazy;

use crate::value::Value;

/// Environment variable that allows raw values in debug logs.
pub const ALLOW_DEBUG_VALUES_ENV: &str = "SCRUBCHAIN_ALLOW_DEBUG_VALUES";

static VALUE_DEBUG_ALLOWED: Lazy<bool> = Lazy::new(|| {
    std::env::var(ALLOW_DEBUG_VALUES_ENV)
        .map(|s| s.eq_ignore_ascii_case("true"))
        .unwrap_or(false)
});

/// Renders a value for a debug log line, or a size-only placeholder.
pub fn loggable(value: &Value) -> String {
    if *VALUE_DEBUG_ALLOWED {
        format!("'{}'", value)
    } else {
        placeholder(value)
    }
}

fn placeholder(value: &Value) -> String {
    match value {
        Value::Text(s) => format!("[text: {} chars]", s.chars().count()),
        Value::List(items) => format!("[list: {} items]", items.len()),
        Value::Map(map) => format!("[map: {} keys]", map.len()),
        Value::Scalar(_) => format!("[{}]", value.kind()),
    }
}
