use clap::{ArgAction, Parser};
use docs_nav::config::{self, DEFAULT_CONFIG_FILE, DEFAULT_DOCS_DIR, NavConfig};
use docs_nav::output;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "docs-nav")]
#[command(version, about = "Regenerate the MkDocs nav block from the docs tree")]
#[command(long_about = "\
Regenerate the MkDocs nav block from the docs tree

Folders become sections and markdown files become pages. Front matter
controls labels and order; everything else follows the filesystem.

Docs structure:

  docs/
  ├── index.md                 # Home page
  ├── guide/
  │   ├── index.md             # Names the section and sets its nav_order
  │   ├── setup.md
  │   └── advanced/            # No index.md: labelled \"advanced\"
  │       └── tuning.md
  └── faq.md

Metadata resolution (first available wins):
  Label:  front matter title → first '# heading' → filename
  Order:  front matter nav_order → after all ordered entries

The block after the 'nav:' line in mkdocs.yml is replaced in place.")]
#[command(args_override_self = true)]
struct Cli {
    /// Project root containing the docs directory and mkdocs.yml
    #[arg(long, default_value = ".")]
    root: PathBuf,

    /// Docs directory, relative to the root
    #[arg(long, default_value = DEFAULT_DOCS_DIR)]
    docs_dir: PathBuf,

    /// Site config file, relative to the root
    #[arg(long, default_value = DEFAULT_CONFIG_FILE)]
    config: PathBuf,

    /// Prefix labels with hierarchical numbers (1., 1-0., ...)
    #[arg(
        short = 'n',
        long,
        action = ArgAction::Set,
        num_args = 0..=1,
        require_equals = true,
        default_value = "false",
        default_missing_value = "true",
        value_parser = config::parse_flag_value,
        overrides_with = "no_numbered"
    )]
    numbered: bool,

    /// Disable numbering
    #[arg(long, overrides_with = "numbered")]
    no_numbered: bool,

    /// Print the generated nav block instead of writing it
    #[arg(long)]
    dry_run: bool,

    /// Log every document and its resolved metadata
    #[arg(long, short)]
    verbose: bool,

    /// Only log errors
    #[arg(long, short)]
    quiet: bool,
}

impl Cli {
    fn nav_config(&self) -> NavConfig {
        NavConfig {
            root: self.root.clone(),
            docs_dir: self.docs_dir.clone(),
            config_file: self.config.clone(),
            numbered: self.numbered && !self.no_numbered,
            dry_run: self.dry_run,
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose, cli.quiet);

    let config = cli.nav_config();
    match docs_nav::run(&config) {
        Ok(outcome) => {
            output::print_run_output(&outcome, &config);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("{}", e);
            ExitCode::FAILURE
        }
    }
}

/// Log to stderr so `--dry-run` output on stdout stays a clean YAML block.
fn init_logging(verbose: bool, quiet: bool) {
    let filter = if verbose {
        "debug"
    } else if quiet {
        "error"
    } else {
        "info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .without_time()
                .with_writer(std::io::stderr),
        )
        .init();
}
