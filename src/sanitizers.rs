//! Input sanitization functions
//!
//! This module provides functions to neutralize markup and script fragments
//! in untrusted text before it is stored or redisplayed.
//!
//! Detection is denylist-based and intentionally matches the patterns the
//! rest of the crate validates against. It is not a substitute for output
//! encoding at render time.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// `javascript:` scheme, any case
    static ref JS_SCHEME: Regex = Regex::new(r"(?i)javascript:").unwrap();

    /// Inline event-handler attribute (onclick=, onload=, ...)
    static ref EVENT_HANDLER: Regex = Regex::new(r"(?i)on\w+=").unwrap();

    /// Pattern to match multiple whitespace characters
    static ref MULTI_WHITESPACE: Regex = Regex::new(r"\s+").unwrap();

    /// Pattern to match control characters (except newline, carriage return
    /// and tab)
    static ref CONTROL_CHARS: Regex = Regex::new(r"[\x00-\x08\x0B\x0C\x0E-\x1F\x7F]").unwrap();
}

/// Sanitize a piece of user-supplied text:
///
/// 1. Trim leading/trailing whitespace.
/// 2. Escape `<`, `>`, `"`, `'` and `&` to their HTML entities.
/// 3. Strip any `javascript:` substring, case-insensitively.
/// 4. Strip any inline event-handler attribute (`on<word>=`), case-insensitively.
///
/// Sanitizing is idempotent for text whose first pass produced no entities.
/// Text already containing `&`-entities gets double-escaped on a second pass;
/// known limitation, callers sanitize raw input exactly once.
pub fn sanitize_text(input: &str) -> String {
    let trimmed = input.trim();
    let mut escaped = String::with_capacity(trimmed.len());
    for c in trimmed.chars() {
        match c {
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#x27;"),
            '&' => escaped.push_str("&amp;"),
            _ => escaped.push(c),
        }
    }
    let no_scheme = JS_SCHEME.replace_all(&escaped, "");
    EVENT_HANDLER.replace_all(&no_scheme, "").into_owned()
}

/// Sanitize a JSON value recursively. Strings run through [`sanitize_text`];
/// arrays keep order and length; objects keep every key; null, numbers and
/// booleans pass through unchanged.
pub fn sanitize_value(value: &mut serde_json::Value) {
    match value {
        serde_json::Value::String(s) => {
            *s = sanitize_text(s);
        }
        serde_json::Value::Array(arr) => {
            for item in arr {
                sanitize_value(item);
            }
        }
        serde_json::Value::Object(obj) => {
            for (_, v) in obj {
                sanitize_value(v);
            }
        }
        _ => {}
    }
}

/// Remove control characters from a string, preserving newlines and tabs.
pub fn remove_control_chars(value: &str) -> String {
    CONTROL_CHARS.replace_all(value, "").into_owned()
}

/// Normalize whitespace: collapse runs of whitespace into single spaces and
/// trim the ends.
pub fn normalize_whitespace(value: &str) -> String {
    MULTI_WHITESPACE.replace_all(value.trim(), " ").into_owned()
}
