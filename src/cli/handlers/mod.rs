//! Command handlers for the CLI.

mod list;
mod new;
mod scan;
mod tags;

use anyhow::{Context, Result};
use std::path::Path;

use crate::cli::config::Config;
use crate::infra::fs::scan_vault;
use crate::vault::{self, ScanOutcome};

pub use list::handle_list;
pub use new::handle_new;
pub use scan::handle_scan;
pub use tags::handle_tags;

/// Scans the vault directory and classifies every markdown file.
pub(crate) fn load_outcome(vault_dir: &Path, config: &Config) -> Result<ScanOutcome> {
    let files = scan_vault(vault_dir)
        .with_context(|| format!("failed to scan vault at {}", vault_dir.display()))?;
    Ok(vault::scan(files, &config.schema()))
}

/// Prints classification errors to stderr, one per line.
pub(crate) fn report_classify_errors(outcome: &ScanOutcome, verbose: bool) {
    if verbose {
        for error in &outcome.errors {
            eprintln!("  unclassified: {error}");
        }
    }
}

/// Generates shell completions to stdout.
pub fn handle_completions(args: &crate::cli::CompletionsArgs) -> Result<()> {
    use clap::CommandFactory;
    let mut cmd = crate::cli::Cli::command();
    let name = cmd.get_name().to_string();
    clap_complete::generate(args.shell, &mut cmd, name, &mut std::io::stdout());
    Ok(())
}
