//! CLI command definitions and handlers

pub mod config;
pub mod handlers;
pub mod output;

use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use clap_complete::Shell;
use std::path::PathBuf;

use crate::vault::{OrderDir, OrderKey};
use output::OutputFormat;

/// almanac - periodic notes over a markdown vault
#[derive(Parser, Debug)]
#[command(name = "almanac", version, about, long_about = None)]
pub struct Cli {
    /// Vault directory (overrides config file)
    #[arg(short = 'd', long, global = true)]
    pub dir: Option<PathBuf>,

    /// Increase verbosity (-v, -vv)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Classify the vault and report the result
    Scan(ScanArgs),

    /// List notes with filters, ordering, and paging
    #[command(name = "ls")]
    List(ListArgs),

    /// Show the tag hierarchy
    Tags(TagsArgs),

    /// Create a note from its template
    New(NewArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the `scan` command
#[derive(Parser, Debug)]
pub struct ScanArgs {
    /// Output format
    #[arg(short = 'f', long, value_enum, default_value_t = OutputFormat::Human)]
    pub format: OutputFormat,
}

/// Arguments for the `ls` (list) command
#[derive(Parser, Debug)]
pub struct ListArgs {
    /// Filter by tag path (matches the tag and its descendants)
    #[arg(short, long, conflicts_with_all = ["tagged", "untagged"])]
    pub tag: Option<String>,

    /// Keep only notes with at least one tag
    #[arg(long, conflicts_with = "untagged")]
    pub tagged: bool,

    /// Keep only notes with no tags
    #[arg(long)]
    pub untagged: bool,

    /// Keep only notes with a title
    #[arg(long, conflicts_with = "untitled")]
    pub titled: bool,

    /// Keep only notes without a title
    #[arg(long)]
    pub untitled: bool,

    /// Keep only notes containing open task items
    #[arg(long, conflicts_with = "no_todos")]
    pub todos: bool,

    /// Keep only notes without task items
    #[arg(long)]
    pub no_todos: bool,

    /// Keep only notes with a calendar date
    #[arg(long, conflicts_with = "undated")]
    pub dated: bool,

    /// Keep only notes without a calendar date
    #[arg(long)]
    pub undated: bool,

    /// Keep only invalid notes
    #[arg(long, conflicts_with = "valid")]
    pub invalid: bool,

    /// Keep only valid notes
    #[arg(long)]
    pub valid: bool,

    /// Sort key
    #[arg(long, value_enum, default_value_t = OrderKey::Date)]
    pub order: OrderKey,

    /// Sort direction
    #[arg(long, value_enum, default_value_t = OrderDir::Desc)]
    pub direction: OrderDir,

    /// Zero-based page of results (omit for all results)
    #[arg(short, long)]
    pub page: Option<usize>,

    /// Output format
    #[arg(short = 'f', long, value_enum, default_value_t = OutputFormat::Human)]
    pub format: OutputFormat,
}

/// Arguments for the `tags` command
#[derive(Parser, Debug)]
pub struct TagsArgs {
    /// Print the flat tag map instead of the nested tree
    #[arg(long)]
    pub flat: bool,

    /// Output format
    #[arg(short = 'f', long, value_enum, default_value_t = OutputFormat::Human)]
    pub format: OutputFormat,
}

/// The kind of note to create.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum NewKind {
    Unique,
    Date,
    Week,
    Month,
    Quarter,
    Year,
}

/// Arguments for the `new` command
#[derive(Parser, Debug)]
pub struct NewArgs {
    /// Kind of note to create
    #[arg(value_enum)]
    pub kind: NewKind,

    /// Date the note covers, YYYY-MM-DD (defaults to today; ignored for unique)
    pub date: Option<String>,
}

/// Arguments for the `completions` command
#[derive(Parser, Debug)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}
