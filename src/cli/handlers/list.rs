//! List command handler.

use anyhow::{Context, Result};
use std::path::Path;

use super::{load_outcome, report_classify_errors};
use crate::cli::ListArgs;
use crate::cli::config::Config;
use crate::cli::output::{NoteListing, OutputFormat, QueryListing, truncate_str};
use crate::domain::{MetadataSource, Note, Presence, TagFilter, TagPath};
use crate::infra::FileMetadataSource;
use crate::vault::{self, Query};

/// Maps a pair of opposing CLI flags onto a tri-state filter.
fn presence(on: bool, off: bool) -> Presence {
    match (on, off) {
        (true, _) => Presence::On,
        (_, true) => Presence::Off,
        _ => Presence::Maybe,
    }
}

/// Builds the query specification from CLI arguments.
pub(crate) fn build_query(args: &ListArgs) -> Result<Query> {
    let tag = if let Some(tag_str) = &args.tag {
        let tag = TagPath::new(tag_str).with_context(|| format!("invalid tag: {tag_str}"))?;
        TagFilter::Path(tag)
    } else if args.tagged {
        TagFilter::Any
    } else if args.untagged {
        TagFilter::None
    } else {
        TagFilter::All
    };

    let mut query = Query::new()
        .tag(tag)
        .title(presence(args.titled, args.untitled))
        .todos(presence(args.todos, args.no_todos))
        .date(presence(args.dated, args.undated))
        .invalid(presence(args.invalid, args.valid))
        .order_key(args.order)
        .order_dir(args.direction);
    if let Some(page) = args.page {
        query = query.page(page);
    }
    Ok(query)
}

fn listing_for(note: &Note, src: &dyn MetadataSource) -> NoteListing {
    NoteListing {
        path: note.path().display().to_string(),
        kind: note
            .period()
            .map_or_else(|| "unique".to_string(), |p| p.name().to_string()),
        date: note.date().map(|d| d.format("%Y-%m-%d").to_string()),
        title: note.title(src),
    }
}

pub fn handle_list(args: &ListArgs, vault_dir: &Path, config: &Config, verbose: bool) -> Result<()> {
    let outcome = load_outcome(vault_dir, config)?;
    report_classify_errors(&outcome, verbose);

    let src = FileMetadataSource::new(vault_dir);
    let query = build_query(args)?;
    let notes = outcome.all_notes();
    let result = vault::run(&notes, &query, &src, config.results_per_page);

    match args.format {
        OutputFormat::Human => {
            if result.notes.is_empty() {
                println!("No notes found.");
            } else {
                println!("{:<40}  {:<8}  {:<30}", "Path", "Kind", "Title");
                println!("{:<40}  {:<8}  {:<30}", "-".repeat(40), "-".repeat(8), "-".repeat(30));
                for note in &result.notes {
                    let listing = listing_for(note, &src);
                    println!(
                        "{:<40}  {:<8}  {:<30}",
                        truncate_str(&listing.path, 40),
                        listing.kind,
                        truncate_str(listing.title.as_deref().unwrap_or("-"), 30)
                    );
                }
                println!();
                println!("{} note(s), {} matched", result.notes.len(), result.found);
            }
        }
        OutputFormat::Json => {
            let listing = QueryListing {
                notes: result.notes.iter().map(|n| listing_for(n, &src)).collect(),
                found: result.found,
            };
            println!("{}", serde_json::to_string_pretty(&listing)?);
        }
        OutputFormat::Paths => {
            for note in &result.notes {
                println!("{}", note.path().display());
            }
        }
    }

    Ok(())
}
