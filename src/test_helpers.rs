//! Shared test utilities for the docs-nav test suite.
//!
//! Provides record builders, docs-tree fixtures on disk, and a line-by-line
//! assertion for generated nav blocks.
//!
//! # Usage
//!
//! ```rust
//! use crate::test_helpers::*;
//!
//! let tmp = setup_project(
//!     &[("a/index.md", "# Alpha"), ("c.md", "# Gamma")],
//!     "site_name: Docs\nnav:\n",
//! );
//! let lines = emit_nav(&sort_tree(build_tree(records)), false);
//! assert_lines(&lines, &["nav:", "    - Alpha:", ...]);
//! ```

use std::fs;
use std::path::Path;
use tempfile::TempDir;

use crate::types::DocumentRecord;

// =========================================================================
// Record builders
// =========================================================================

/// Build a record without going through metadata extraction.
pub fn record(relative_path: &str, title: &str, order: Option<f64>) -> DocumentRecord {
    DocumentRecord {
        title: title.to_string(),
        relative_path: relative_path.to_string(),
        order,
    }
}

// =========================================================================
// Fixture setup
// =========================================================================

/// Write `(relative_path, contents)` pairs below `root`, creating folders.
pub fn write_docs(root: &Path, docs: &[(&str, &str)]) {
    for (relative_path, contents) in docs {
        let path = root.join(relative_path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(&path, contents).unwrap();
    }
}

/// Create a project root with `docs/` populated and `mkdocs.yml` written.
pub fn setup_project(docs: &[(&str, &str)], mkdocs: &str) -> TempDir {
    let tmp = TempDir::new().unwrap();
    fs::create_dir_all(tmp.path().join("docs")).unwrap();
    write_docs(&tmp.path().join("docs"), docs);
    fs::write(tmp.path().join("mkdocs.yml"), mkdocs).unwrap();
    tmp
}

// =========================================================================
// Assertions
// =========================================================================

/// Assert generated lines match, reporting the first differing line.
pub fn assert_lines(actual: &[String], expected: &[&str]) {
    for (i, (a, e)) in actual.iter().zip(expected).enumerate() {
        assert_eq!(a, e, "line {i} differs.\nactual:\n{}", actual.join("\n"));
    }
    assert_eq!(
        actual.len(),
        expected.len(),
        "line count differs.\nactual:\n{}",
        actual.join("\n")
    );
}
