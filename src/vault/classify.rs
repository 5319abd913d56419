//! Vault classification: bucketing every file as unique or periodic.

use crate::domain::Note;
use crate::vault::PathSchema;
use std::fmt;
use std::path::{Component, Path, PathBuf};

/// A non-fatal classification failure.
///
/// Raised for files under the periodic folder whose path matches no
/// period's pattern. The file is excluded from both caches; the error is
/// carried in [`ScanOutcome::errors`] for diagnostic reporting, never
/// returned as a `Result::Err`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassifyError {
    /// Vault-relative path of the offending file.
    pub path: PathBuf,
    /// Why the file could not be classified.
    pub reason: String,
}

impl fmt::Display for ClassifyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.path.display(), self.reason)
    }
}

impl std::error::Error for ClassifyError {}

/// The result of classifying a full vault file listing.
///
/// Every input file lands in exactly one place: `unique`, `periodic`, a
/// recorded error, or silently skipped (hidden `_` namespace).
#[derive(Debug, Clone, Default)]
pub struct ScanOutcome {
    /// Notes not tied to a calendar period, in input order.
    pub unique: Vec<Note>,
    /// Calendar-keyed notes, in input order.
    pub periodic: Vec<Note>,
    /// Files under the periodic folder that matched no period pattern.
    pub errors: Vec<ClassifyError>,
}

impl ScanOutcome {
    /// Returns all classified notes, unique first, preserving input order
    /// within each bucket.
    pub fn all_notes(&self) -> Vec<Note> {
        let mut notes = Vec::with_capacity(self.unique.len() + self.periodic.len());
        notes.extend(self.unique.iter().cloned());
        notes.extend(self.periodic.iter().cloned());
        notes
    }
}

/// Returns whether a path's top-level segment starts with `_`.
///
/// The underscore namespace holds vault-internal files (templates and the
/// like); classification skips it entirely.
fn in_hidden_namespace(path: &Path) -> bool {
    match path.components().next() {
        Some(Component::Normal(seg)) => seg.to_str().is_some_and(|s| s.starts_with('_')),
        _ => false,
    }
}

/// Classifies a vault file listing into unique and periodic notes.
///
/// For each vault-relative path:
/// 1. under the schema's periodic folder → strict pattern classification;
///    no match is recorded as a [`ClassifyError`] and the file is dropped;
/// 2. top-level segment starting with `_` → skipped;
/// 3. anything else → a unique note.
///
/// Pure and infallible: bad inputs degrade to errors in the outcome.
pub fn scan<I, P>(files: I, schema: &PathSchema) -> ScanOutcome
where
    I: IntoIterator<Item = P>,
    P: Into<PathBuf>,
{
    let mut outcome = ScanOutcome::default();

    for file in files {
        let path = file.into();
        if path.starts_with(schema.periodic_folder()) {
            match schema.classify(&path) {
                Some((period, date)) => {
                    outcome.periodic.push(Note::periodic(path, period, date));
                }
                None => outcome.errors.push(ClassifyError {
                    reason: format!(
                        "does not match any periodic note pattern under {}",
                        schema.periodic_folder().display()
                    ),
                    path,
                }),
            }
        } else if in_hidden_namespace(&path) {
            // Vault-internal file, not a note.
        } else {
            outcome.unique.push(Note::unique(path));
        }
    }

    outcome
}

/// Freshness-versioned holder of the latest scan.
///
/// Rebuilds replace the snapshot wholesale and bump the version, so a
/// reader holding a reference observes either the old or the fully new
/// outcome, never a partial one. Staleness is a pull model: an external
/// change marks the cache stale and consumers rebuild on their next read.
#[derive(Debug, Default)]
pub struct NoteCache {
    outcome: ScanOutcome,
    version: u64,
    stale: bool,
}

impl NoteCache {
    /// Creates an empty, stale cache.
    pub fn new() -> Self {
        Self {
            outcome: ScanOutcome::default(),
            version: 0,
            stale: true,
        }
    }

    /// Returns the current snapshot.
    pub fn outcome(&self) -> &ScanOutcome {
        &self.outcome
    }

    /// Returns the snapshot version, bumped on every rebuild.
    pub fn version(&self) -> u64 {
        self.version
    }

    /// Returns whether a rebuild is pending.
    pub fn is_stale(&self) -> bool {
        self.stale
    }

    /// Marks the cache stale; the next consumer should rebuild.
    pub fn mark_stale(&mut self) {
        self.stale = true;
    }

    /// Replaces the snapshot with a fresh scan of the given file listing.
    pub fn rebuild<I, P>(&mut self, files: I, schema: &PathSchema)
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        self.outcome = scan(files, schema);
        self.version += 1;
        self.stale = false;
    }
}
