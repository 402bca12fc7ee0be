//! Folds a flat list of document records into a folder-shaped tree.
//!
//! Every path segment but the last becomes a [`TreeNode`]; the record itself
//! is attached to the node of its containing folder:
//!
//! ```text
//! guide/index.md          root
//! guide/setup.md    →     ├── documents: [faq.md]
//! guide/api/auth.md       └── guide          (label/order from guide/index.md)
//! faq.md                      ├── documents: [index.md, setup.md]
//!                             └── api
//!                                 └── documents: [auth.md]
//! ```
//!
//! ## Index documents
//!
//! A document named `index` (any case, any extension) stands for its folder.
//! Its title becomes the folder's label and its order, when present, the
//! folder's order. The index document still appears among the folder's
//! documents, but with its order forced to `0` so it leads the folder's list.
//!
//! Folders without an index keep `label == None` and are labelled with their
//! segment name downstream. Duplicate paths and empty folders are not errors.

use crate::naming;
use crate::types::DocumentRecord;
use std::collections::BTreeMap;

/// Segment name used for the docs root.
pub const ROOT_NAME: &str = "root";

/// Order assigned to an index document within its own folder.
pub const INDEX_DOCUMENT_ORDER: f64 = 0.0;

/// One folder level of the unsorted navigation tree.
#[derive(Debug, Clone, PartialEq)]
pub struct TreeNode {
    /// Folder segment name, or [`ROOT_NAME`] for the root.
    pub name: String,
    /// Subfolders keyed by segment name.
    pub children: BTreeMap<String, TreeNode>,
    /// Documents directly in this folder, in insertion order.
    pub documents: Vec<DocumentRecord>,
    /// Title of this folder's index document.
    pub label: Option<String>,
    /// Order of this folder's index document.
    pub order: Option<f64>,
}

impl TreeNode {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            children: BTreeMap::new(),
            documents: Vec::new(),
            label: None,
            order: None,
        }
    }

    /// Label shown for this folder: the index title, or the segment name.
    pub fn display_label(&self) -> &str {
        self.label
            .as_deref()
            .filter(|label| !label.is_empty())
            .unwrap_or(&self.name)
    }

    /// Attach a record at its path, creating intermediate folders.
    pub fn insert(&mut self, record: DocumentRecord) {
        let mut segments: Vec<&str> = record.relative_path.split('/').collect();
        let file = segments.pop().unwrap_or_default();

        let mut current = self;
        for segment in segments {
            current = current
                .children
                .entry(segment.to_string())
                .or_insert_with(|| TreeNode::new(segment));
        }

        if naming::is_index(file) {
            current.label = Some(record.title.clone());
            if record.order.is_some() {
                current.order = record.order;
            }
            current.documents.push(DocumentRecord {
                order: Some(INDEX_DOCUMENT_ORDER),
                ..record
            });
        } else {
            current.documents.push(record);
        }
    }
}

/// Build the navigation tree from a flat list of records.
pub fn build_tree(records: impl IntoIterator<Item = DocumentRecord>) -> TreeNode {
    let mut root = TreeNode::new(ROOT_NAME);
    for record in records {
        root.insert(record);
    }
    root
}
