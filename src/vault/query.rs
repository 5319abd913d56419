//! Filter, sort, and paginate notes.

use crate::domain::{MetadataSource, Note, Presence, TagFilter};
use clap::ValueEnum;

/// Sort key for query results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OrderKey {
    /// Sort by basename; periodic basenames order chronologically.
    #[default]
    Date,
    /// Sort by title, falling back to basename for untitled notes.
    Title,
}

/// Sort direction for query results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OrderDir {
    /// Ascending.
    Asc,
    /// Descending (default): the ascending order reversed wholesale.
    #[default]
    Desc,
}

/// A declarative filter/sort/page specification.
///
/// Defaults apply no filter: tag `All`, every presence filter `Maybe`,
/// descending date order, unpaginated. Built fluently:
///
/// ```
/// use almanac::vault::{OrderDir, Query};
/// use almanac::domain::TagFilter;
///
/// let query = Query::new()
///     .tag(TagFilter::Any)
///     .order_dir(OrderDir::Asc)
///     .page(0);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Query {
    tag: TagFilter,
    title: Presence,
    todos: Presence,
    date: Presence,
    invalid: Presence,
    order_key: OrderKey,
    order_dir: OrderDir,
    page: Option<usize>,
}

impl Query {
    /// Creates a query with all defaults (no filters, date desc, no paging).
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the tag filter.
    pub fn tag(mut self, tag: TagFilter) -> Self {
        self.tag = tag;
        self
    }

    /// Sets the title-presence filter.
    pub fn title(mut self, title: Presence) -> Self {
        self.title = title;
        self
    }

    /// Sets the task-presence filter.
    pub fn todos(mut self, todos: Presence) -> Self {
        self.todos = todos;
        self
    }

    /// Sets the date-presence filter.
    pub fn date(mut self, date: Presence) -> Self {
        self.date = date;
        self
    }

    /// Sets the validity filter (`On` keeps invalid notes, `Off` valid ones).
    pub fn invalid(mut self, invalid: Presence) -> Self {
        self.invalid = invalid;
        self
    }

    /// Sets the sort key.
    pub fn order_key(mut self, key: OrderKey) -> Self {
        self.order_key = key;
        self
    }

    /// Sets the sort direction.
    pub fn order_dir(mut self, dir: OrderDir) -> Self {
        self.order_dir = dir;
        self
    }

    /// Requests one zero-based page of results.
    pub fn page(mut self, page: usize) -> Self {
        self.page = Some(page);
        self
    }
}

/// A filtered, ordered, possibly paginated slice of a note collection.
#[derive(Debug, Clone, PartialEq)]
pub struct QueryResult {
    /// The notes on the requested page (or all matches when unpaginated).
    pub notes: Vec<Note>,
    /// Total match count before paging.
    pub found: usize,
}

/// Runs a query over a note collection.
///
/// Pure: the same inputs always produce the same output. Stages apply in a
/// fixed order — tag, title, todos, date, validity, sort, count, page —
/// with each presence stage skipped when left at `Maybe`. Metadata is read
/// once per note through `src` for the duration of the call.
///
/// Paging slices `[page * page_size, (page + 1) * page_size)`; a page past
/// the end yields an empty `notes` with `found` unchanged.
pub fn run(notes: &[Note], query: &Query, src: &dyn MetadataSource, page_size: usize) -> QueryResult {
    let mut matched: Vec<(Note, crate::domain::NoteMetadata)> = notes
        .iter()
        .map(|note| (note.clone(), src.metadata(note.path())))
        .filter(|(_, meta)| query.tag.accepts(&meta.tags))
        .filter(|(_, meta)| query.title.accepts(meta.title.is_some()))
        .filter(|(_, meta)| query.todos.accepts(meta.has_todos))
        .filter(|(note, _)| query.date.accepts(note.date().is_some()))
        .filter(|(_, meta)| query.invalid.accepts(meta.invalid.is_some()))
        .collect();

    matched.sort_by_key(|(note, meta)| {
        let key = match query.order_key {
            OrderKey::Title => meta
                .title
                .clone()
                .unwrap_or_else(|| note.basename().to_string()),
            OrderKey::Date => note.basename().to_string(),
        };
        key.to_lowercase()
    });

    if query.order_dir == OrderDir::Desc {
        // Whole-sequence reversal, not a re-sort: equal keys come out in
        // reverse input order.
        matched.reverse();
    }

    let found = matched.len();

    let mut result: Vec<Note> = matched.into_iter().map(|(note, _)| note).collect();
    if let Some(page) = query.page {
        let start = page.saturating_mul(page_size).min(result.len());
        let end = start.saturating_add(page_size).min(result.len());
        result = result[start..end].to_vec();
    }

    QueryResult {
        notes: result,
        found,
    }
}
