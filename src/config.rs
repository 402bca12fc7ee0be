//! Run configuration.
//!
//! Everything a run needs is carried in an explicit [`NavConfig`] value built
//! by the CLI and passed to [`crate::run`]. Nothing is read from the process
//! environment or derived from the binary's location.
//!
//! ## Layout
//!
//! Paths are resolved against the project root:
//!
//! ```text
//! <root>/
//! ├── mkdocs.yml          # config_file: nav block is rewritten in place
//! └── docs/               # docs_dir: scanned recursively for *.md
//!     ├── index.md
//!     └── guide/
//!         ├── index.md    # labels and orders the "guide" folder
//!         └── setup.md
//! ```
//!
//! Absolute `docs_dir` or `config_file` values replace the root entirely.

use std::path::PathBuf;

/// Extension of documents included in the navigation (case-insensitive).
pub const DOC_EXTENSION: &str = "md";

/// Line that opens the navigation block in the site config.
pub const NAV_MARKER: &str = "nav:";

pub const DEFAULT_DOCS_DIR: &str = "docs";

pub const DEFAULT_CONFIG_FILE: &str = "mkdocs.yml";

/// Configuration for one navigation update.
#[derive(Debug, Clone, PartialEq)]
pub struct NavConfig {
    /// Project root holding the docs directory and the site config.
    pub root: PathBuf,
    /// Docs directory, relative to `root`.
    pub docs_dir: PathBuf,
    /// Site config file, relative to `root`.
    pub config_file: PathBuf,
    /// Prefix labels with hierarchical numbers.
    pub numbered: bool,
    /// Produce the nav block without writing the config file.
    pub dry_run: bool,
}

impl Default for NavConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            docs_dir: PathBuf::from(DEFAULT_DOCS_DIR),
            config_file: PathBuf::from(DEFAULT_CONFIG_FILE),
            numbered: false,
            dry_run: false,
        }
    }
}

impl NavConfig {
    /// Default layout under the given project root.
    pub fn for_root(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            ..Self::default()
        }
    }

    pub fn with_numbered(mut self, numbered: bool) -> Self {
        self.numbered = numbered;
        self
    }

    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    pub fn docs_path(&self) -> PathBuf {
        self.root.join(&self.docs_dir)
    }

    pub fn config_path(&self) -> PathBuf {
        self.root.join(&self.config_file)
    }

    /// File name of the site config, for user-facing messages.
    pub fn config_name(&self) -> String {
        self.config_file
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| DEFAULT_CONFIG_FILE.to_string())
    }
}

/// Parse the value of `--numbered=<value>`.
///
/// Accepts `true`/`1` and `false`/`0`.
pub fn parse_flag_value(value: &str) -> Result<bool, String> {
    match value {
        "true" | "1" => Ok(true),
        "false" | "0" => Ok(false),
        _ => Err(format!(
            "Invalid value '{}'. Valid values: true, 1, false, 0",
            value
        )),
    }
}
