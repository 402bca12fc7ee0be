//! Deterministic ordering of the navigation tree.
//!
//! Siblings are ordered by a layered comparison:
//!
//! 1. **Explicit order**: `nav_order` ascending. A missing order counts as
//!    positive infinity, so unordered entries always follow ordered ones.
//! 2. **Label**: locale-aware comparison of the folder label or document
//!    title (see [`crate::collate`]).
//!
//! Folders and documents are sorted separately here; the emitter merges the
//! two lists with the same policy plus a final path tie-break. All sorts are
//! stable, so entries equal on both keys keep their insertion order.

use crate::collate::locale_cmp;
use crate::tree::TreeNode;
use crate::types::DocumentRecord;
use std::cmp::Ordering;

/// A folder level with its subfolders and documents in navigation order.
#[derive(Debug, Clone, PartialEq)]
pub struct SortedNode {
    pub name: String,
    pub label: Option<String>,
    pub order: Option<f64>,
    pub folders: Vec<SortedNode>,
    pub documents: Vec<DocumentRecord>,
}

impl SortedNode {
    /// Label shown for this folder: the index title, or the segment name.
    pub fn display_label(&self) -> &str {
        self.label
            .as_deref()
            .filter(|label| !label.is_empty())
            .unwrap_or(&self.name)
    }

    /// Sort an already sorted tree again. Sorting is idempotent, so this
    /// returns an identical tree.
    pub fn resort(mut self) -> SortedNode {
        self.folders = self.folders.into_iter().map(SortedNode::resort).collect();
        sort_folders(&mut self.folders);
        sort_documents(&mut self.documents);
        self
    }
}

/// Compare two optional orders, treating `None` as positive infinity.
pub fn compare_orders(a: Option<f64>, b: Option<f64>) -> Ordering {
    let a = a.unwrap_or(f64::INFINITY);
    let b = b.unwrap_or(f64::INFINITY);
    a.partial_cmp(&b).unwrap_or(Ordering::Equal)
}

/// Sort a tree depth-first, consuming the unsorted nodes.
pub fn sort_tree(node: TreeNode) -> SortedNode {
    let TreeNode {
        name,
        children,
        mut documents,
        label,
        order,
    } = node;

    let mut folders: Vec<SortedNode> = children.into_values().map(sort_tree).collect();
    sort_folders(&mut folders);
    sort_documents(&mut documents);

    SortedNode {
        name,
        label,
        order,
        folders,
        documents,
    }
}

fn sort_folders(folders: &mut [SortedNode]) {
    folders.sort_by(|a, b| {
        compare_orders(a.order, b.order)
            .then_with(|| locale_cmp(a.display_label(), b.display_label()))
    });
}

fn sort_documents(documents: &mut [DocumentRecord]) {
    documents.sort_by(|a, b| {
        compare_orders(a.order, b.order).then_with(|| locale_cmp(&a.title, &b.title))
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::record;
    use crate::tree::build_tree;
    use proptest::prelude::*;

    fn titles(node: &SortedNode) -> Vec<&str> {
        node.documents.iter().map(|d| d.title.as_str()).collect()
    }

    fn folder_labels(node: &SortedNode) -> Vec<&str> {
        node.folders.iter().map(SortedNode::display_label).collect()
    }

    #[test]
    fn missing_order_sorts_last() {
        assert_eq!(compare_orders(Some(100.0), None), Ordering::Less);
        assert_eq!(compare_orders(None, Some(-1.0)), Ordering::Greater);
        assert_eq!(compare_orders(None, None), Ordering::Equal);
        assert_eq!(compare_orders(Some(2.0), Some(2.0)), Ordering::Equal);
    }

    #[test]
    fn documents_sorted_by_order_then_title() {
        let sorted = sort_tree(build_tree([
            record("zeta.md", "Zeta", Some(1.0)),
            record("beta.md", "beta", None),
            record("alpha.md", "Alpha", None),
            record("omega.md", "Omega", Some(0.5)),
        ]));

        assert_eq!(titles(&sorted), vec!["Omega", "Zeta", "Alpha", "beta"]);
    }

    #[test]
    fn index_document_leads_its_folder() {
        let sorted = sort_tree(build_tree([
            record("a/early.md", "Early", Some(0.5)),
            record("a/index.md", "Alpha", Some(9.0)),
            record("a/aardvark.md", "Aardvark", None),
        ]));

        let a = &sorted.folders[0];
        assert_eq!(titles(a), vec!["Alpha", "Early", "Aardvark"]);
    }

    #[test]
    fn folders_sorted_by_index_order_then_label() {
        let sorted = sort_tree(build_tree([
            record("zoo/index.md", "Zoo", Some(1.0)),
            record("misc/notes.md", "Notes", None),
            record("guide/index.md", "Guide", None),
            record("api/index.md", "API", Some(2.0)),
        ]));

        assert_eq!(folder_labels(&sorted), vec!["Zoo", "API", "Guide", "misc"]);
    }

    #[test]
    fn folder_label_beats_segment_name() {
        let sorted = sort_tree(build_tree([
            record("a/index.md", "Zebra", None),
            record("z/index.md", "Aardvark", None),
        ]));

        assert_eq!(folder_labels(&sorted), vec!["Aardvark", "Zebra"]);
        assert_eq!(sorted.folders[0].name, "z");
    }

    #[test]
    fn nested_levels_are_sorted() {
        let sorted = sort_tree(build_tree([
            record("guide/b/two.md", "Two", None),
            record("guide/a/one.md", "One", None),
            record("guide/a/first.md", "First", Some(1.0)),
        ]));

        let guide = &sorted.folders[0];
        assert_eq!(folder_labels(guide), vec!["a", "b"]);
        assert_eq!(titles(&guide.folders[0]), vec!["First", "One"]);
    }

    #[test]
    fn equal_entries_keep_insertion_order() {
        let sorted = sort_tree(build_tree([
            record("x.md", "Same", None),
            record("y.md", "Same", None),
        ]));

        let paths: Vec<&str> = sorted
            .documents
            .iter()
            .map(|d| d.relative_path.as_str())
            .collect();
        assert_eq!(paths, vec!["x.md", "y.md"]);
    }

    #[test]
    fn resort_is_identity() {
        let sorted = sort_tree(build_tree([
            record("c.md", "Gamma", None),
            record("a/index.md", "Alpha", Some(2.0)),
            record("a/b.md", "Beta", None),
        ]));

        assert_eq!(sorted.clone().resort(), sorted);
    }

    fn arb_record() -> impl Strategy<Value = DocumentRecord> {
        (
            prop::collection::vec("[a-c]{1,2}", 1..4),
            "[A-Za-z ]{0,6}",
            prop::option::of(-3i32..3),
        )
            .prop_map(|(segments, title, order)| {
                let relative_path = format!("{}.md", segments.join("/"));
                record(&relative_path, &title, order.map(f64::from))
            })
    }

    proptest! {
        #[test]
        fn sorting_is_idempotent(records in prop::collection::vec(arb_record(), 0..24)) {
            let sorted = sort_tree(build_tree(records));
            prop_assert_eq!(sorted.clone().resort(), sorted);
        }
    }
}
