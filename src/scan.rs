//! Document discovery and metadata extraction.
//!
//! Walks the docs directory recursively and reads every markdown file into a
//! [`SourceDocument`]. Paths are recorded relative to the docs root with `/`
//! separators on every platform, since they are written verbatim into the
//! nav block.
//!
//! ## What counts as a document
//!
//! - Regular files whose name ends in `.md`, any case (`README.MD` included)
//! - Symlinks are not followed, neither to files nor to directories
//! - Hidden files and directories are scanned like any other
//!
//! Files are decoded as UTF-8, with invalid sequences replaced rather than
//! failing the run.

use crate::collate::locale_cmp;
use crate::metadata;
use crate::naming;
use crate::types::{DocumentRecord, SourceDocument};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;
use walkdir::WalkDir;

#[derive(Error, Debug)]
pub enum ScanError {
    #[error("docs directory not found at {}", .0.display())]
    DocsDirNotFound(PathBuf),
    #[error("Failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Directory walk error: {0}")]
    Walk(#[from] walkdir::Error),
}

/// Read every document with the given extension below `docs_dir`.
///
/// The result is ordered by relative path.
pub fn scan_documents(docs_dir: &Path, extension: &str) -> Result<Vec<SourceDocument>, ScanError> {
    if !docs_dir.is_dir() {
        return Err(ScanError::DocsDirNotFound(docs_dir.to_path_buf()));
    }

    let mut documents = Vec::new();
    for entry in WalkDir::new(docs_dir).sort_by_file_name() {
        let entry = entry?;
        if !entry.file_type().is_file() {
            continue;
        }
        if !naming::has_extension(&entry.file_name().to_string_lossy(), extension) {
            continue;
        }

        let bytes = fs::read(entry.path()).map_err(|source| ScanError::Read {
            path: entry.path().to_path_buf(),
            source,
        })?;
        let relative_path = relative_path(docs_dir, entry.path());
        debug!(path = %relative_path, bytes = bytes.len(), "found document");

        documents.push(SourceDocument {
            relative_path,
            text: String::from_utf8_lossy(&bytes).into_owned(),
        });
    }

    documents.sort_by(|a, b| locale_cmp(&a.relative_path, &b.relative_path));
    Ok(documents)
}

/// Extract metadata from every source, ordered by relative path.
pub fn read_records(sources: &[SourceDocument]) -> Vec<DocumentRecord> {
    let mut records: Vec<DocumentRecord> = sources
        .iter()
        .map(|source| {
            let record = metadata::extract_record(source);
            debug!(
                path = %record.relative_path,
                title = %record.title,
                order = ?record.order,
                "extracted metadata"
            );
            record
        })
        .collect();
    records.sort_by(|a, b| locale_cmp(&a.relative_path, &b.relative_path));
    records
}

/// Slash-separated path of `path` relative to `root`.
fn relative_path(root: &Path, path: &Path) -> String {
    let relative = path.strip_prefix(root).unwrap_or(path);
    relative
        .components()
        .map(|component| component.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}
