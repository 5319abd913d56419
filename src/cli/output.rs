//! Output format types for CLI commands.

use clap::ValueEnum;
use serde::Serialize;

/// Output format for command results.
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output for programmatic consumption
    Json,
    /// Plain file paths, one per line
    Paths,
}

/// A single note in listing output.
#[derive(Debug, Serialize)]
pub struct NoteListing {
    pub path: String,
    pub kind: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

/// Listing payload for a filtered query.
#[derive(Debug, Serialize)]
pub struct QueryListing {
    pub notes: Vec<NoteListing>,
    pub found: usize,
}

/// Scan summary payload.
#[derive(Debug, Serialize)]
pub struct ScanListing {
    pub unique: usize,
    pub periodic: usize,
    pub errors: Vec<String>,
}

/// Truncates a string to a maximum width, appending `...` when cut.
pub fn truncate_str(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let cut: String = s.chars().take(max.saturating_sub(3)).collect();
        format!("{cut}...")
    }
}
