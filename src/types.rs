//! Shared types passed between pipeline stages.
//!
//! ```text
//! SourceDocument  →  DocumentRecord  →  TreeNode  →  SortedNode  →  lines
//!   (scan)            (metadata)         (tree)       (sort)         (emit)
//! ```

/// A markdown file as read from disk, before any metadata is extracted.
#[derive(Debug, Clone, PartialEq)]
pub struct SourceDocument {
    /// Slash-separated path relative to the docs root, e.g. `guide/setup.md`.
    pub relative_path: String,
    /// Full file contents.
    pub text: String,
}

impl SourceDocument {
    pub fn new(relative_path: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            relative_path: relative_path.into(),
            text: text.into(),
        }
    }
}

/// One document's navigation metadata.
///
/// Produced once per document by [`crate::metadata::extract_record`]. The
/// order is `None` when the document expresses no preference; such documents
/// sort after every document with an explicit order.
#[derive(Debug, Clone, PartialEq)]
pub struct DocumentRecord {
    /// Display title: front matter `title`, first `# heading`, or base filename.
    pub title: String,
    /// Slash-separated path relative to the docs root.
    pub relative_path: String,
    /// Front matter `nav_order`, if numeric.
    pub order: Option<f64>,
}
