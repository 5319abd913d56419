//! Note metadata extraction: frontmatter, headings, and task markers.

use crate::domain::{MetadataSource, NoteMetadata, TagPath};
use crate::infra::fs;
use pulldown_cmark::{Event, HeadingLevel, Options, Parser, Tag};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Raw YAML frontmatter fields recognized by the engine.
///
/// Unknown fields are ignored. `tags` accepts either a single string or a
/// list of strings, matching what vaults write in practice.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RawFrontmatter {
    tags: Option<serde_yaml::Value>,
    root: bool,
}

/// Splits an optional frontmatter block off the top of a document.
///
/// Returns `(yaml, body)` when the document opens with a `---` fence, or
/// `(None, content)` when there is no frontmatter. A missing closing fence
/// is an error (the note is malformed, not frontmatter-free).
fn split_frontmatter(content: &str) -> Result<(Option<&str>, &str), String> {
    let after_opening = if let Some(rest) = content.strip_prefix("---\r\n") {
        rest
    } else if let Some(rest) = content.strip_prefix("---\n") {
        rest
    } else {
        return Ok((None, content));
    };

    let mut offset = 0;
    for line in after_opening.split_inclusive('\n') {
        if line.trim_end_matches(['\r', '\n']) == "---" {
            let yaml = &after_opening[..offset];
            let body = &after_opening[offset + line.len()..];
            return Ok((Some(yaml), body));
        }
        offset += line.len();
    }
    Err("missing closing frontmatter delimiter '---'".to_string())
}

fn parse_tags(value: &serde_yaml::Value) -> Vec<TagPath> {
    let raw: Vec<&str> = match value {
        serde_yaml::Value::String(s) => vec![s.as_str()],
        serde_yaml::Value::Sequence(seq) => seq.iter().filter_map(|v| v.as_str()).collect(),
        _ => Vec::new(),
    };
    // Unparseable tags are dropped, not fatal: metadata extraction never fails.
    raw.iter().filter_map(|s| TagPath::new(s).ok()).collect()
}

/// Extracts note metadata from markdown content.
///
/// Pure: malformed frontmatter marks the result `invalid` with a reason
/// instead of failing, and the body is still scanned for title and tasks.
pub fn extract(content: &str) -> NoteMetadata {
    let mut meta = NoteMetadata::default();

    let body = match split_frontmatter(content) {
        Ok((yaml, body)) => {
            if let Some(yaml) = yaml {
                match serde_yaml::from_str::<RawFrontmatter>(yaml) {
                    Ok(raw) => {
                        if let Some(tags) = &raw.tags {
                            meta.tags = parse_tags(tags);
                        }
                        meta.root = raw.root;
                    }
                    Err(e) => meta.invalid = Some(format!("invalid frontmatter: {e}")),
                }
            }
            body
        }
        Err(reason) => {
            meta.invalid = Some(reason);
            content
        }
    };

    let mut options = Options::empty();
    options.insert(Options::ENABLE_TASKLISTS);
    let parser = Parser::new_ext(body, options);

    let mut in_h1 = false;
    let mut title = String::new();
    for event in parser {
        match event {
            Event::Start(Tag::Heading(HeadingLevel::H1, _, _)) if meta.title.is_none() => {
                in_h1 = true;
                title.clear();
            }
            Event::End(Tag::Heading(HeadingLevel::H1, _, _)) if in_h1 => {
                in_h1 = false;
                let text = title.trim().to_string();
                if !text.is_empty() {
                    meta.title = Some(text);
                }
            }
            Event::Text(text) | Event::Code(text) if in_h1 => title.push_str(&text),
            Event::TaskListMarker(_) => meta.has_todos = true,
            _ => {}
        }
    }

    meta
}

/// Metadata source that reads note files from the vault on every lookup.
///
/// Nothing is cached: each call re-reads and re-parses the file so derived
/// properties always reflect the file's live state. Unreadable files yield
/// metadata with `invalid` set.
pub struct FileMetadataSource {
    vault_dir: PathBuf,
}

impl FileMetadataSource {
    /// Creates a source rooted at the vault directory.
    pub fn new(vault_dir: impl Into<PathBuf>) -> Self {
        Self {
            vault_dir: vault_dir.into(),
        }
    }
}

impl MetadataSource for FileMetadataSource {
    fn metadata(&self, path: &Path) -> NoteMetadata {
        match fs::read_to_string(&self.vault_dir.join(path)) {
            Ok(content) => extract(&content),
            Err(e) => NoteMetadata {
                invalid: Some(e.to_string()),
                ..Default::default()
            },
        }
    }
}
