//! # docs-nav
//!
//! Regenerates the `nav:` block of an MkDocs site from its `docs/` folder.
//! The folder tree is the table of contents: folders become sections,
//! markdown files become pages, and front matter decides labels and order.
//!
//! # Architecture: One-Way Pipeline
//!
//! ```text
//! 1. Scan      docs/**/*.md    →  SourceDocument   (path + text)
//! 2. Extract   SourceDocument  →  DocumentRecord   (title + nav_order)
//! 3. Build     records         →  TreeNode         (folders own documents)
//! 4. Sort      TreeNode        →  SortedNode       (order, then label)
//! 5. Emit      SortedNode      →  nav: lines       (optionally numbered)
//! 6. Patch     lines           →  mkdocs.yml       (block replaced in place)
//! ```
//!
//! Each stage consumes the previous stage's value and produces a new one.
//! Stages 2–5 are pure and exposed together as [`generate_nav`]; [`run`] adds
//! the filesystem at both ends.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`scan`] | Walks the docs directory and reads markdown files |
//! | [`metadata`] | Front matter, first heading and filename fallbacks |
//! | [`tree`] | Folds records into a folder tree; index documents label folders |
//! | [`sort`] | Orders folders and documents at every level |
//! | [`emit`] | Renders the sorted tree as YAML nav lines, with numbering |
//! | [`escape`] | Quotes labels and paths that are unsafe as plain YAML |
//! | [`patch`] | Replaces the nav block in the site config |
//! | [`collate`] | Locale-aware string comparison used by every sort |
//! | [`naming`] | Base names, extensions and index detection |
//! | [`config`] | Explicit run configuration |
//! | [`output`] | CLI output formatting |
//!
//! # Ordering Rules
//!
//! - `nav_order` in front matter sorts ascending; pages without one come last.
//! - Ties are broken by label, compared the way a reader would alphabetize.
//! - An `index.md` names its folder and lends it its `nav_order`; inside the
//!   folder the index page always comes first.
//!
//! # Idempotence
//!
//! The same docs tree always produces byte-identical output, and rewriting a
//! config file with the block it already contains leaves it unchanged. Runs
//! can be wired into pre-commit hooks or CI checks without churn.

pub mod collate;
pub mod config;
pub mod emit;
pub mod escape;
pub mod metadata;
pub mod naming;
pub mod output;
pub mod patch;
pub mod scan;
pub mod sort;
pub mod tree;
pub mod types;

#[cfg(test)]
pub(crate) mod test_helpers;

use config::{DOC_EXTENSION, NAV_MARKER, NavConfig};
use patch::PatchError;
use scan::ScanError;
use thiserror::Error;
use tracing::{info, warn};
use types::SourceDocument;

#[derive(Error, Debug)]
pub enum NavError {
    #[error(transparent)]
    Scan(#[from] ScanError),
    #[error(transparent)]
    Patch(#[from] PatchError),
}

/// What a run did.
#[derive(Debug, Clone, PartialEq)]
pub enum RunOutcome {
    /// The docs tree held no documents; the config file was not touched.
    NoDocuments,
    /// The nav block was written to the config file.
    Updated,
    /// The nav block was generated but not written.
    DryRun { lines: Vec<String> },
}

/// Generate the nav block for a set of documents.
///
/// Input order does not matter. The first line is the `nav:` marker.
pub fn generate_nav(sources: &[SourceDocument], numbered: bool) -> Vec<String> {
    let records = scan::read_records(sources);
    let tree = tree::build_tree(records);
    let sorted = sort::sort_tree(tree);
    emit::emit_nav(&sorted, numbered)
}

/// Scan the docs directory and rewrite the config file's nav block.
pub fn run(config: &NavConfig) -> Result<RunOutcome, NavError> {
    let docs_path = config.docs_path();
    let sources = scan::scan_documents(&docs_path, DOC_EXTENSION)?;
    if sources.is_empty() {
        warn!("No markdown files found. nav section not updated.");
        return Ok(RunOutcome::NoDocuments);
    }
    info!(
        documents = sources.len(),
        numbered = config.numbered,
        "generating nav from {}",
        docs_path.display()
    );

    let lines = generate_nav(&sources, config.numbered);
    if config.dry_run {
        return Ok(RunOutcome::DryRun { lines });
    }

    patch::update_config_file(&config.config_path(), &lines, NAV_MARKER)?;
    Ok(RunOutcome::Updated)
}
