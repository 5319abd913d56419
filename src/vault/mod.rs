//! Classification, tag indices, queries, and note creation

mod classify;
mod create;
mod format;
mod query;
mod tag_index;

pub use classify::{ClassifyError, NoteCache, ScanOutcome, scan};
pub use create::{CreateError, NewNote, NoteCreator};
pub use format::{FormatTable, PathSchema, PeriodFormat};
pub use query::{OrderDir, OrderKey, Query, QueryResult, run};
pub use tag_index::{
    RootConflict, TagEntry, TagMap, TagNode, TagTree, build_tag_map, build_tag_tree,
};
