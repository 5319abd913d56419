//! File I/O, metadata extraction, template expansion

pub mod fs;
mod metadata;
mod template;

pub use fs::FsError;
pub use metadata::{FileMetadataSource, extract};
pub use template::{NoteContext, expand};
