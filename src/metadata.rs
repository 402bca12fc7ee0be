//! Document metadata extraction and resolution.
//!
//! Each document contributes two values to the navigation tree: a display
//! title and an optional explicit order.
//!
//! ## Front matter
//!
//! A document may open with a `---` delimited block of `key: value` lines:
//!
//! ```text
//! ---
//! title: "Getting Started"
//! nav_order: 2
//! ---
//! # Ignored when front matter has a title
//! ```
//!
//! Only two keys are read. `title` sets the display title when its value is
//! non-empty, and `nav_order` sets the order when its value is numeric. Matching
//! single or double quotes around a value are stripped. Anything else in the
//! block is ignored, and a block without a closing `---` is not front matter.
//!
//! ## Resolution priority
//!
//! The first non-empty value wins:
//!
//! - **Title**: front matter `title` → first `# heading` → base filename
//! - **Order**: front matter `nav_order` → none
//!
//! Extraction never fails. Malformed front matter, a non-numeric order or a
//! missing heading all degrade to the next fallback.

use crate::naming;
use crate::types::{DocumentRecord, SourceDocument};

const FRONT_MATTER_MARKER: &str = "---";

/// Title and order resolved for a single document.
#[derive(Debug, Clone, PartialEq)]
pub struct Metadata {
    pub title: String,
    pub order: Option<f64>,
}

/// Values read from a document's front matter block.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FrontMatter {
    pub title: Option<String>,
    pub nav_order: Option<f64>,
}

/// Resolve a metadata field from multiple sources.
///
/// Takes a list of optional values in priority order and returns the first
/// non-None, non-empty value, trimmed.
///
/// ```text
/// title: resolve(&[front_matter_title, first_heading, base_name])
/// ```
pub fn resolve(sources: &[Option<&str>]) -> Option<String> {
    sources
        .iter()
        .filter_map(|opt| {
            opt.map(str::trim)
                .filter(|s| !s.is_empty())
                .map(String::from)
        })
        .next()
}

/// Extract the title and order of a document.
pub fn extract_metadata(text: &str, relative_path: &str) -> Metadata {
    let front_matter = parse_front_matter(text).unwrap_or_default();
    let base_name = naming::base_name(relative_path);

    let title = resolve(&[
        front_matter.title.as_deref(),
        first_heading(text),
        Some(base_name),
    ])
    .unwrap_or_else(|| base_name.to_string());

    Metadata {
        title,
        order: front_matter.nav_order,
    }
}

/// Turn a source document into its navigation record.
pub fn extract_record(source: &SourceDocument) -> DocumentRecord {
    let Metadata { title, order } = extract_metadata(&source.text, &source.relative_path);
    DocumentRecord {
        title,
        relative_path: source.relative_path.clone(),
        order,
    }
}

/// Parse the front matter block at the very start of `text`.
///
/// Returns `None` when the text does not start with `---` or the block is
/// never closed. The block closes at the first line that starts with `---`.
pub fn parse_front_matter(text: &str) -> Option<FrontMatter> {
    let rest = text.strip_prefix(FRONT_MATTER_MARKER)?;
    let end = rest.find("\n---")?;

    let mut front_matter = FrontMatter::default();
    for line in rest[..end].split('\n') {
        let line = line.strip_suffix('\r').unwrap_or(line);
        let Some((key, raw)) = split_key_value(line) else {
            continue;
        };
        let value = clean_value(raw);
        match key {
            "title" if !value.is_empty() => front_matter.title = Some(value.to_string()),
            "nav_order" => {
                if let Some(order) = parse_order(value) {
                    front_matter.nav_order = Some(order);
                }
            }
            _ => {}
        }
    }
    Some(front_matter)
}

/// Split a `key: value` line. Keys are `[A-Za-z0-9_-]+` starting at column 0;
/// whitespace may surround the colon; the value must be non-empty.
fn split_key_value(line: &str) -> Option<(&str, &str)> {
    let key_len = line
        .find(|c: char| !(c.is_ascii_alphanumeric() || c == '_' || c == '-'))
        .unwrap_or(line.len());
    if key_len == 0 {
        return None;
    }
    let (key, rest) = line.split_at(key_len);
    let value = rest.trim_start().strip_prefix(':')?;
    if value.is_empty() {
        return None;
    }
    Some((key, value))
}

/// Trim a raw value and strip one pair of matching surrounding quotes.
fn clean_value(raw: &str) -> &str {
    let value = raw.trim();
    for quote in ['"', '\''] {
        if value.starts_with(quote) && value.ends_with(quote) {
            return value.get(1..value.len() - 1).unwrap_or("").trim();
        }
    }
    value
}

/// Parse a numeric `nav_order` value.
///
/// Accepts integers, decimals, exponent forms, `Infinity` and unsigned
/// `0x`/`0o`/`0b` integers. Rejects empty values, signed radix forms and the
/// Rust-only spellings `inf` and `NaN`.
fn parse_order(value: &str) -> Option<f64> {
    match value {
        "Infinity" | "+Infinity" => return Some(f64::INFINITY),
        "-Infinity" => return Some(f64::NEG_INFINITY),
        _ => {}
    }
    if let Some(order) = parse_radix_integer(value) {
        return Some(order);
    }
    if value
        .chars()
        .any(|c| c.is_ascii_alphabetic() && !matches!(c, 'e' | 'E'))
    {
        return None;
    }
    value.parse::<f64>().ok().filter(|n| !n.is_nan())
}

fn parse_radix_integer(value: &str) -> Option<f64> {
    const RADIX_PREFIXES: [(&str, u32); 3] = [("0x", 16), ("0o", 8), ("0b", 2)];

    let head = value.get(..2)?;
    let digits = &value[2..];
    let (_, radix) = RADIX_PREFIXES
        .into_iter()
        .find(|(prefix, _)| head.eq_ignore_ascii_case(prefix))?;
    digits
        .chars()
        .try_fold(0.0, |acc, c| Some(acc * f64::from(radix) + f64::from(c.to_digit(radix)?)))
        .filter(|_| !digits.is_empty())
}

/// Text of the first top-level `# heading` line, trimmed.
fn first_heading(text: &str) -> Option<&str> {
    text.lines().find_map(|line| {
        let rest = line.strip_prefix('#')?;
        if !rest.starts_with(char::is_whitespace) {
            return None;
        }
        Some(rest.trim()).filter(|title| !title.is_empty())
    })
}
