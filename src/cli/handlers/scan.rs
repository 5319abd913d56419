//! Scan command handler.

use anyhow::Result;
use std::path::Path;

use super::{load_outcome, report_classify_errors};
use crate::cli::ScanArgs;
use crate::cli::config::Config;
use crate::cli::output::{OutputFormat, ScanListing};

pub fn handle_scan(args: &ScanArgs, vault_dir: &Path, config: &Config, verbose: bool) -> Result<()> {
    let outcome = load_outcome(vault_dir, config)?;

    match args.format {
        OutputFormat::Human => {
            if verbose {
                for note in &outcome.unique {
                    println!("  unique:   {}", note.path().display());
                }
                for note in &outcome.periodic {
                    println!("  periodic: {}", note.path().display());
                }
            }
            report_classify_errors(&outcome, true);
            println!(
                "{} unique, {} periodic, {} unclassified",
                outcome.unique.len(),
                outcome.periodic.len(),
                outcome.errors.len()
            );
        }
        OutputFormat::Json => {
            let listing = ScanListing {
                unique: outcome.unique.len(),
                periodic: outcome.periodic.len(),
                errors: outcome.errors.iter().map(|e| e.to_string()).collect(),
            };
            println!("{}", serde_json::to_string_pretty(&listing)?);
        }
        OutputFormat::Paths => {
            for note in outcome.all_notes() {
                println!("{}", note.path().display());
            }
        }
    }

    Ok(())
}
