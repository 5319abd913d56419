//! Core types: Period, Note, NoteKind, TagPath, filters

mod note;
mod period;
mod tag;

pub use note::{MetadataSource, Note, NoteKind, NoteMetadata};
pub use period::{ParsePeriodError, Period};
pub use tag::{ParseTagPathError, Presence, TagFilter, TagPath};
