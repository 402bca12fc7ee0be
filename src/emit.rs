//! Renders the sorted navigation tree as the lines of a `nav:` block.
//!
//! # Output Format
//!
//! ```text
//! nav:
//!     - Alpha:
//!         - Alpha: a/index.md
//!         - Beta: a/b.md
//!     - Gamma: c.md
//! ```
//!
//! Root entries are indented by [`BASE_INDENT`] spaces and every nesting level
//! adds another [`INDENT_STEP`]. A folder renders as `- Label:` followed by
//! its own block; a document renders as `- Label: path`. Labels and paths
//! pass through [`yaml_scalar`].
//!
//! # Merged Ordering
//!
//! Within a folder, subfolders and documents are merged into one list and
//! ordered by explicit order (missing last), then label, then a tie key (the
//! document path or the folder's segment name).
//!
//! # Numbering
//!
//! With numbering enabled every label gets a prefix built from its position
//! at each level. Root entries count from 1, deeper levels count from 0:
//!
//! ```text
//! - 1. Alpha:
//!     - 1-0. Alpha: a/index.md
//!     - 1-1. Beta: a/b.md
//! - 2. Gamma: c.md
//! ```
//!
//! A root entry's number is its 1-based position. A nested entry appends its
//! 0-based position to its parent's prefix, joined by `-`.

use crate::collate::locale_cmp;
use crate::config::NAV_MARKER;
use crate::escape::yaml_scalar;
use crate::sort::{SortedNode, compare_orders};
use crate::types::DocumentRecord;
use std::cmp::Ordering;

/// Indent of root-level entries.
pub const BASE_INDENT: usize = 4;

/// Additional indent per nesting level.
pub const INDENT_STEP: usize = 4;

/// A folder or document as it appears in a folder's merged entry list.
#[derive(Debug, Clone, Copy)]
pub enum Entry<'a> {
    Folder(&'a SortedNode),
    Document(&'a DocumentRecord),
}

impl<'a> Entry<'a> {
    pub fn label(&self) -> &'a str {
        match self {
            Entry::Folder(node) => node.display_label(),
            Entry::Document(doc) => &doc.title,
        }
    }

    pub fn order(&self) -> Option<f64> {
        match self {
            Entry::Folder(node) => node.order,
            Entry::Document(doc) => doc.order,
        }
    }

    /// Final tie-break: the document path, or the folder's segment name.
    pub fn tie_key(&self) -> &'a str {
        match self {
            Entry::Folder(node) => &node.name,
            Entry::Document(doc) => &doc.relative_path,
        }
    }
}

fn compare_entries(a: &Entry<'_>, b: &Entry<'_>) -> Ordering {
    compare_orders(a.order(), b.order())
        .then_with(|| locale_cmp(a.label(), b.label()))
        .then_with(|| locale_cmp(a.tie_key(), b.tie_key()))
}

/// Merge a folder's subfolders and documents into navigation order.
pub fn merged_entries(node: &SortedNode) -> Vec<Entry<'_>> {
    let mut entries: Vec<Entry<'_>> = node
        .folders
        .iter()
        .map(Entry::Folder)
        .chain(node.documents.iter().map(Entry::Document))
        .collect();
    entries.sort_by(compare_entries);
    entries
}

/// Position of an entry at every level from the root down.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NumberingPath(Vec<usize>);

impl NumberingPath {
    pub fn root() -> Self {
        Self::default()
    }

    /// Path of the entry at `index` (0-based) among this path's children.
    pub fn child(&self, index: usize) -> Self {
        let number = if self.0.is_empty() { index + 1 } else { index };
        let mut path = self.0.clone();
        path.push(number);
        Self(path)
    }

    /// Label prefix: `"3. "` for a root entry, `"3-0-2. "` for nested ones.
    pub fn prefix(&self) -> String {
        if self.0.is_empty() {
            return String::new();
        }
        let numbers: Vec<String> = self.0.iter().map(ToString::to_string).collect();
        format!("{}. ", numbers.join("-"))
    }
}

/// Render the `nav:` block for a sorted tree, marker line included.
pub fn emit_nav(root: &SortedNode, numbered: bool) -> Vec<String> {
    let mut lines = vec![NAV_MARKER.to_string()];
    let numbering = numbered.then(NumberingPath::root);
    append_node_lines(root, BASE_INDENT, numbering.as_ref(), &mut lines);
    lines
}

fn append_node_lines(
    node: &SortedNode,
    indent: usize,
    numbering: Option<&NumberingPath>,
    lines: &mut Vec<String>,
) {
    let pad = " ".repeat(indent);

    for (index, entry) in merged_entries(node).into_iter().enumerate() {
        let path = numbering.map(|parent| parent.child(index));
        let label = match &path {
            Some(path) => format!("{}{}", path.prefix(), entry.label()),
            None => entry.label().to_string(),
        };

        match entry {
            Entry::Folder(child) => {
                lines.push(format!("{pad}- {}:", yaml_scalar(&label)));
                append_node_lines(child, indent + INDENT_STEP, path.as_ref(), lines);
            }
            Entry::Document(doc) => {
                lines.push(format!(
                    "{pad}- {}: {}",
                    yaml_scalar(&label),
                    yaml_scalar(&doc.relative_path)
                ));
            }
        }
    }
}
