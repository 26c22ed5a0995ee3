//! Escaping of literal text embedded in generated source.

use std::borrow::Cow;

/// Escape text for a double-quoted JSX attribute (`key="..."`).
///
/// JSX attribute strings decode HTML entities and cannot contain a raw `"`.
pub fn jsx_attribute(s: &str) -> Cow<'_, str> {
    if !s.contains(['&', '"']) {
        return Cow::Borrowed(s);
    }

    let mut out = String::with_capacity(s.len() + 8);
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    Cow::Owned(out)
}

/// Escape text for a single-quoted JavaScript string literal (`'...'`).
pub fn js_single_quoted(s: &str) -> Cow<'_, str> {
    if !s.contains(['\\', '\'', '\n', '\r', '\u{2028}', '\u{2029}']) {
        return Cow::Borrowed(s);
    }

    let mut out = String::with_capacity(s.len() + 8);
    for c in s.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\'' => out.push_str("\\'"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\u{2028}' => out.push_str("\\u2028"),
            '\u{2029}' => out.push_str("\\u2029"),
            _ => out.push(c),
        }
    }
    Cow::Owned(out)
}
