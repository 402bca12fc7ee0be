//! Splices a generated nav block into the site config.
//!
//! The block starts at the first line whose trimmed text is the marker and
//! runs over every following line that is blank or indented:
//!
//! ```text
//! site_name: Docs
//! nav:                      ┐
//!     - Home: index.md      │ replaced
//!                           │
//!     - Guide: guide.md     ┘
//! theme:
//!   name: material
//! ```
//!
//! Everything before and after the block is preserved. The result always ends
//! with exactly one newline, so splicing the same block twice gives identical
//! bytes.

use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::info;

#[derive(Error, Debug)]
pub enum PatchError {
    #[error("{} not found at {}", file_name(.0), .0.display())]
    ConfigNotFound(PathBuf),
    #[error("nav section not found in {}", file_name(.0))]
    MarkerNotFound(PathBuf),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

/// Replace the nav block of `content` with `nav_lines`.
///
/// Returns `None` when no line matches the marker.
pub fn splice_nav(content: &str, nav_lines: &[String], marker: &str) -> Option<String> {
    let lines: Vec<&str> = content.lines().collect();
    let start = lines.iter().position(|line| line.trim() == marker)?;
    let end = start
        + 1
        + lines[start + 1..]
            .iter()
            .take_while(|line| line.trim().is_empty() || line.starts_with([' ', '\t']))
            .count();

    let mut spliced: Vec<&str> = Vec::with_capacity(lines.len() + nav_lines.len());
    spliced.extend_from_slice(&lines[..start]);
    spliced.extend(nav_lines.iter().map(String::as_str));
    spliced.extend_from_slice(&lines[end..]);

    let mut output = spliced.join("\n");
    output.push('\n');
    Some(output)
}

/// Rewrite the nav block of the config file at `path`.
pub fn update_config_file(path: &Path, nav_lines: &[String], marker: &str) -> Result<(), PatchError> {
    if !path.is_file() {
        return Err(PatchError::ConfigNotFound(path.to_path_buf()));
    }
    let content = fs::read_to_string(path)?;
    let updated = splice_nav(&content, nav_lines, marker)
        .ok_or_else(|| PatchError::MarkerNotFound(path.to_path_buf()))?;
    fs::write(path, updated)?;
    info!(path = %path.display(), lines = nav_lines.len(), "nav block written");
    Ok(())
}
