//! YAML-safe rendering of navigation labels and paths.
//!
//! A nav line looks like `- Label: path/to/doc.md`. Plain YAML scalars cannot
//! contain `: ` or ` #`, and leading or trailing whitespace is dropped, so
//! any value outside a conservative allowlist is written as a double-quoted
//! string instead:
//!
//! ```text
//! Getting Started         →  Getting Started
//! guide/setup.md          →  guide/setup.md
//! Setup: Linux            →  "Setup: Linux"
//! C# Tips                 →  "C# Tips"
//! (empty)                 →  ""
//! ```
//!
//! Values outside the allowlist are quoted even when YAML would have accepted
//! them bare.

use std::borrow::Cow;
use std::fmt::Write;

/// Render a value as a YAML scalar, quoting it unless it is plainly safe.
pub fn yaml_scalar(value: &str) -> Cow<'_, str> {
    if is_plain_safe(value) {
        Cow::Borrowed(value)
    } else {
        Cow::Owned(quote(value))
    }
}

/// Whether a value can be written without quotes.
pub fn is_plain_safe(value: &str) -> bool {
    !value.is_empty()
        && !value.starts_with(' ')
        && !value.ends_with(' ')
        && value.chars().all(is_safe_char)
}

fn is_safe_char(c: char) -> bool {
    match c {
        '\n' | '\r' | '#' | ':' => false,
        'a'..='z' | 'A'..='Z' | '0'..='9' | '_' | '-' | '.' | '/' | '!' | '(' | ')' => true,
        '\u{80}'..=char::MAX => true,
        _ => c.is_whitespace(),
    }
}

/// Write a value as a double-quoted string with backslash escapes.
pub fn quote(value: &str) -> String {
    let mut out = String::with_capacity(value.len() + 2);
    out.push('"');
    for c in value.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            '\u{8}' => out.push_str("\\b"),
            '\u{c}' => out.push_str("\\f"),
            c if (c as u32) < 0x20 => {
                let _ = write!(out, "\\u{:04x}", c as u32);
            }
            c => out.push(c),
        }
    }
    out.push('"');
    out
}
