//! CLI output formatting.
//!
//! # Output Format
//!
//! ## Update
//!
//! ```text
//! mkdocs.yml nav updated successfully.
//! ```
//!
//! ## Dry run
//!
//! The generated block is printed as it would be written:
//!
//! ```text
//! nav:
//!     - Alpha:
//!         - Alpha: a/index.md
//!     - Gamma: c.md
//! ```
//!
//! An empty docs tree prints nothing; the warning goes through the log.
//!
//! # Architecture
//!
//! [`format_run_output`] returns the lines for testability and
//! [`print_run_output`] writes them to stdout.

use crate::RunOutcome;
use crate::config::NavConfig;

/// Format the result of a run.
pub fn format_run_output(outcome: &RunOutcome, config: &NavConfig) -> Vec<String> {
    match outcome {
        RunOutcome::NoDocuments => Vec::new(),
        RunOutcome::Updated => {
            vec![format!("{} nav updated successfully.", config.config_name())]
        }
        RunOutcome::DryRun { lines } => lines.clone(),
    }
}

pub fn print_run_output(outcome: &RunOutcome, config: &NavConfig) {
    for line in format_run_output(outcome, config) {
        println!("{}", line);
    }
}
