//! Tags command handler.

use anyhow::Result;
use serde::Serialize;
use std::path::Path;

use super::{load_outcome, report_classify_errors};
use crate::cli::TagsArgs;
use crate::cli::config::Config;
use crate::cli::output::OutputFormat;
use crate::infra::FileMetadataSource;
use crate::vault::{RootConflict, TagTree, build_tag_map, build_tag_tree};

/// A tag with counts in flat listing output.
#[derive(Debug, Serialize)]
struct TagListing {
    path: String,
    count: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    root: Option<String>,
}

/// A node of the tag tree in nested listing output.
#[derive(Debug, Serialize)]
struct TreeListing {
    name: String,
    count: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    root: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    subtags: Vec<TreeListing>,
}

fn tree_listing(tree: &TagTree) -> Vec<TreeListing> {
    tree.iter()
        .map(|(name, node)| TreeListing {
            name: name.clone(),
            count: node.notes.len(),
            root: node
                .note_root
                .as_ref()
                .map(|n| n.path().display().to_string()),
            subtags: tree_listing(&node.subtags),
        })
        .collect()
}

fn print_tree(nodes: &[TreeListing], depth: usize) {
    for node in nodes {
        let root = node
            .root
            .as_deref()
            .map(|p| format!("  [root: {p}]"))
            .unwrap_or_default();
        println!(
            "{}{} ({}){}",
            "  ".repeat(depth),
            node.name,
            node.count,
            root
        );
        print_tree(&node.subtags, depth + 1);
    }
}

fn report_root_conflicts(conflicts: &[RootConflict], verbose: bool) {
    if verbose {
        for conflict in conflicts {
            eprintln!(
                "  root conflict on '{}': kept {}, ignored {}",
                conflict.tag,
                conflict.kept.display(),
                conflict.ignored.display()
            );
        }
    }
}

pub fn handle_tags(args: &TagsArgs, vault_dir: &Path, config: &Config, verbose: bool) -> Result<()> {
    let outcome = load_outcome(vault_dir, config)?;
    report_classify_errors(&outcome, verbose);

    let src = FileMetadataSource::new(vault_dir);
    let notes = outcome.all_notes();
    let (map, conflicts) = build_tag_map(&notes, &src);
    report_root_conflicts(&conflicts, verbose);

    if args.flat {
        let listings: Vec<TagListing> = map
            .iter()
            .map(|(tag, entry)| TagListing {
                path: tag.to_string(),
                count: entry.notes.len(),
                root: entry
                    .note_root
                    .as_ref()
                    .map(|n| n.path().display().to_string()),
            })
            .collect();

        match args.format {
            OutputFormat::Human => {
                if listings.is_empty() {
                    println!("No tags found.");
                } else {
                    for listing in &listings {
                        let root = listing
                            .root
                            .as_deref()
                            .map(|p| format!("  [root: {p}]"))
                            .unwrap_or_default();
                        println!("{} ({}){}", listing.path, listing.count, root);
                    }
                    println!();
                    println!("{} tag(s)", listings.len());
                }
            }
            OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&listings)?),
            OutputFormat::Paths => {
                for listing in &listings {
                    println!("{}", listing.path);
                }
            }
        }
        return Ok(());
    }

    let tree = build_tag_tree(&map);
    let listings = tree_listing(&tree);

    match args.format {
        OutputFormat::Human => {
            if listings.is_empty() {
                println!("No tags found.");
            } else {
                print_tree(&listings, 0);
            }
        }
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&listings)?),
        OutputFormat::Paths => {
            for (tag, _) in &map {
                println!("{tag}");
            }
        }
    }

    Ok(())
}
