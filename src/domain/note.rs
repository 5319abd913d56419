//! Note entity: a vault file classified as unique or periodic.

use crate::domain::{Period, TagPath};
use chrono::{NaiveDate, NaiveDateTime};
use serde::Serialize;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Basename pattern that encodes a unique note's creation timestamp.
const UNIQUE_STAMP_FORMAT: &str = "%Y%m%d-%H%M%S";

/// The classification of a note.
///
/// Every vault file that survives classification is exactly one of these:
/// a unique note (free-form, keyed by a timestamped filename) or a periodic
/// note keyed by a period and a calendar date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum NoteKind {
    /// A free-form note, identified by its `YYYYMMDD-HHmmss` filename.
    Unique,
    /// A calendar-keyed note.
    Periodic {
        /// The period this note covers.
        period: Period,
        /// The date keying the note, truncated to midnight.
        date: NaiveDate,
    },
}

/// A classified note in the vault.
///
/// A `Note` is identified by its vault-relative path plus its classification.
/// Everything else (`tags`, `title`, `has_todos`, `invalid`) is derived from
/// the current metadata of the underlying file on every access through a
/// [`MetadataSource`] — nothing derived is cached on the entity, so reads
/// always reflect live state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Note {
    path: PathBuf,
    #[serde(flatten)]
    kind: NoteKind,
}

impl Note {
    /// Creates a unique note for a vault-relative path.
    pub fn unique(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            kind: NoteKind::Unique,
        }
    }

    /// Creates a periodic note for a vault-relative path.
    pub fn periodic(path: impl Into<PathBuf>, period: Period, date: NaiveDate) -> Self {
        Self {
            path: path.into(),
            kind: NoteKind::Periodic { period, date },
        }
    }

    /// Returns the vault-relative path of the note file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Returns the filename without the `.md` extension.
    pub fn basename(&self) -> &str {
        self.path
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or_default()
    }

    /// Returns the note's classification.
    pub fn kind(&self) -> &NoteKind {
        &self.kind
    }

    /// Returns the period for periodic notes, `None` for unique notes.
    pub fn period(&self) -> Option<Period> {
        match self.kind {
            NoteKind::Unique => None,
            NoteKind::Periodic { period, .. } => Some(period),
        }
    }

    /// Returns the note's calendar date, if it has one.
    ///
    /// Periodic notes always have a date (at midnight). Unique notes have
    /// one only when their basename strictly matches `YYYYMMDD-HHmmss`.
    pub fn date(&self) -> Option<NaiveDateTime> {
        match self.kind {
            NoteKind::Periodic { date, .. } => date.and_hms_opt(0, 0, 0),
            NoteKind::Unique => {
                NaiveDateTime::parse_from_str(self.basename(), UNIQUE_STAMP_FORMAT).ok()
            }
        }
    }

    /// Returns the note's tags, in metadata order.
    pub fn tags(&self, src: &dyn MetadataSource) -> Vec<TagPath> {
        src.metadata(&self.path).tags
    }

    /// Returns the note's title: the first level-1 heading, if any.
    pub fn title(&self, src: &dyn MetadataSource) -> Option<String> {
        src.metadata(&self.path).title
    }

    /// Returns whether the note body contains any task-list items.
    pub fn has_todos(&self, src: &dyn MetadataSource) -> bool {
        src.metadata(&self.path).has_todos
    }

    /// Returns the reason this note is invalid, or `None` if it is valid.
    pub fn invalid(&self, src: &dyn MetadataSource) -> Option<String> {
        src.metadata(&self.path).invalid
    }

    /// Returns whether the note is flagged as the root note for its tags.
    pub fn is_root(&self, src: &dyn MetadataSource) -> bool {
        src.metadata(&self.path).root
    }
}

/// Metadata derived from a note file's current content.
///
/// Produced fresh by a [`MetadataSource`] on every lookup; never stored on
/// a [`Note`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NoteMetadata {
    /// Tags declared in the note's frontmatter, in declaration order.
    pub tags: Vec<TagPath>,
    /// Text of the first level-1 heading, if any.
    pub title: Option<String>,
    /// Whether the body contains at least one task-list item.
    pub has_todos: bool,
    /// Whether the note claims to be the root note for its tags.
    pub root: bool,
    /// Reason the note is invalid (e.g. malformed frontmatter), if any.
    pub invalid: Option<String>,
}

/// Source of live note metadata.
///
/// The boundary between the note entity and whatever holds the vault's
/// metadata. The production implementation reads files from disk
/// ([`FileMetadataSource`](crate::infra::FileMetadataSource)); tests use a
/// plain map.
pub trait MetadataSource {
    /// Returns the current metadata for a vault-relative path.
    ///
    /// Lookups for unknown or unreadable paths return metadata with
    /// `invalid` set rather than failing.
    fn metadata(&self, path: &Path) -> NoteMetadata;
}

/// Fixed in-memory metadata, keyed by vault-relative path.
///
/// Paths absent from the map resolve to empty (valid) metadata. Used by
/// tests and anywhere a pre-computed snapshot is convenient.
impl MetadataSource for HashMap<PathBuf, NoteMetadata> {
    fn metadata(&self, path: &Path) -> NoteMetadata {
        self.get(path).cloned().unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn jan15() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, 15).unwrap()
    }

    // ===========================================
    // Construction & identity
    // ===========================================

    #[test]
    fn periodic_note_exposes_period_and_date() {
        let note = Note::periodic("periodic/2024/20240115.md", Period::Date, jan15());
        assert_eq!(note.period(), Some(Period::Date));
        assert_eq!(note.date(), jan15().and_hms_opt(0, 0, 0));
        assert_eq!(note.basename(), "20240115");
    }

    #[test]
    fn periodic_date_is_midnight() {
        let note = Note::periodic("periodic/2024/2024-W03.md", Period::Week, jan15());
        let date = note.date().unwrap();
        assert_eq!(date.time(), chrono::NaiveTime::from_hms_opt(0, 0, 0).unwrap());
    }

    #[test]
    fn unique_note_has_no_period() {
        let note = Note::unique("projects/x.md");
        assert_eq!(note.period(), None);
    }

    // ===========================================
    // Unique filename timestamps
    // ===========================================

    #[test]
    fn unique_note_derives_date_from_stamped_filename() {
        let note = Note::unique("20240115-093000.md");
        let date = note.date().unwrap();
        assert_eq!(date.date(), jan15());
        assert_eq!(date.time(), chrono::NaiveTime::from_hms_opt(9, 30, 0).unwrap());
    }

    #[test]
    fn unique_note_without_stamp_has_no_date() {
        assert_eq!(Note::unique("projects/x.md").date(), None);
        // Partial or padded stamps must not match.
        assert_eq!(Note::unique("20240115.md").date(), None);
        assert_eq!(Note::unique("20240115-093000-extra.md").date(), None);
    }

    #[test]
    fn unique_note_rejects_invalid_stamp_values() {
        // Hour 25 is not a valid time.
        assert_eq!(Note::unique("20240115-250000.md").date(), None);
    }

    // ===========================================
    // Derived metadata via MetadataSource
    // ===========================================

    #[test]
    fn derived_properties_read_through_source() {
        let note = Note::unique("projects/x.md");
        let mut src: HashMap<PathBuf, NoteMetadata> = HashMap::new();
        src.insert(
            PathBuf::from("projects/x.md"),
            NoteMetadata {
                tags: vec![TagPath::new("a/b").unwrap()],
                title: Some("Project X".to_string()),
                has_todos: true,
                root: true,
                invalid: None,
            },
        );

        assert_eq!(note.tags(&src), vec![TagPath::new("a/b").unwrap()]);
        assert_eq!(note.title(&src), Some("Project X".to_string()));
        assert!(note.has_todos(&src));
        assert!(note.is_root(&src));
        assert_eq!(note.invalid(&src), None);
    }

    #[test]
    fn unknown_path_resolves_to_empty_metadata() {
        let note = Note::unique("missing.md");
        let src: HashMap<PathBuf, NoteMetadata> = HashMap::new();
        assert!(note.tags(&src).is_empty());
        assert_eq!(note.title(&src), None);
        assert!(!note.has_todos(&src));
    }
}
