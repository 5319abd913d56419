//! Hierarchical tag paths and tag-based filter values.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A case-insensitive, `/`-delimited hierarchical tag path.
///
/// Tags like `project/foo/bar` form a hierarchy: `project` is an ancestor of
/// `project/foo` which is an ancestor of `project/foo/bar`. Tags are
/// normalized to lowercase internally, so `Project/Foo` and `project/foo`
/// are equivalent.
///
/// # Validation Rules
/// - Non-empty after normalization
/// - Segments contain only alphanumeric characters, hyphens, and underscores
///
/// # Normalization
/// - A leading `#` is stripped
/// - Leading/trailing slashes are stripped, consecutive slashes collapsed
/// - Surrounding whitespace is trimmed
/// - Converted to lowercase
///
/// # Examples
///
/// ```
/// use almanac::domain::TagPath;
///
/// let tag = TagPath::new("Project/Foo/bar").unwrap();
/// assert_eq!(tag.as_str(), "project/foo/bar");
/// assert_eq!(tag.segments(), &["project", "foo", "bar"]);
///
/// let parent = TagPath::new("project").unwrap();
/// assert!(parent.is_ancestor_of(&tag));
/// ```
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TagPath {
    path: String,
    segments: Vec<String>,
}

/// Error returned when parsing an invalid tag path.
#[derive(Debug, Clone)]
pub struct ParseTagPathError(String);

impl fmt::Display for ParseTagPathError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::error::Error for ParseTagPathError {}

impl TagPath {
    /// Creates a new TagPath from a string.
    ///
    /// The input is normalized (trimmed, lowercased, slashes collapsed) and
    /// validated segment by segment.
    ///
    /// # Errors
    ///
    /// Returns `ParseTagPathError` if:
    /// - The path is empty or normalizes to empty (e.g. `"///"`)
    /// - Any segment contains invalid characters
    pub fn new(s: &str) -> Result<Self, ParseTagPathError> {
        let trimmed = s.trim();
        let trimmed = trimmed.strip_prefix('#').unwrap_or(trimmed).to_lowercase();

        let mut segments: Vec<String> = Vec::new();
        for raw_seg in trimmed.split('/') {
            if raw_seg.is_empty() {
                continue;
            }
            let seg = raw_seg.trim();
            if seg.is_empty() {
                return Err(ParseTagPathError(
                    "invalid tag segment: segments cannot be whitespace-only".to_string(),
                ));
            }
            if !Self::is_valid_segment(seg) {
                return Err(ParseTagPathError(format!(
                    "invalid tag segment '{}': segments must contain only alphanumeric characters, hyphens, and underscores",
                    seg
                )));
            }
            segments.push(seg.to_string());
        }

        if segments.is_empty() {
            return Err(ParseTagPathError("tag path cannot be empty".to_string()));
        }

        let path = segments.join("/");
        Ok(Self { path, segments })
    }

    fn is_valid_segment(segment: &str) -> bool {
        segment
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
    }

    /// Returns the normalized full path as a string slice.
    pub fn as_str(&self) -> &str {
        &self.path
    }

    /// Returns the path components as a slice.
    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// Returns the number of segments in the path.
    pub fn depth(&self) -> usize {
        self.segments.len()
    }

    /// Returns whether this tag is a proper ancestor of another tag.
    ///
    /// Ancestry is a prefix match at segment boundaries: `project` is an
    /// ancestor of `project/foo` but not of `project-foo`.
    pub fn is_ancestor_of(&self, other: &TagPath) -> bool {
        other.segments.len() > self.segments.len()
            && other.segments[..self.segments.len()] == self.segments[..]
    }

    /// Returns whether `other` equals this tag or is a `/`-descendant of it.
    pub fn matches(&self, other: &TagPath) -> bool {
        self == other || self.is_ancestor_of(other)
    }
}

impl fmt::Display for TagPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.path)
    }
}

impl fmt::Debug for TagPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TagPath(\"{}\")", self.path)
    }
}

impl FromStr for TagPath {
    type Err = ParseTagPathError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl Serialize for TagPath {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.path)
    }
}

impl<'de> Deserialize<'de> for TagPath {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// A tag criterion for filtering notes.
///
/// `All` applies no tag filter; `Any` keeps notes with at least one tag;
/// `None` keeps notes with no tags; `Path` keeps notes tagged with the
/// given path or any `/`-descendant of it.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum TagFilter {
    /// No tag filter.
    #[default]
    All,
    /// Notes with at least one tag.
    Any,
    /// Notes with no tags.
    None,
    /// Notes tagged with this path or a descendant of it.
    Path(TagPath),
}

impl TagFilter {
    /// Returns whether a note with the given tags passes this filter.
    pub fn accepts(&self, tags: &[TagPath]) -> bool {
        match self {
            TagFilter::All => true,
            TagFilter::Any => !tags.is_empty(),
            TagFilter::None => tags.is_empty(),
            TagFilter::Path(path) => tags.iter().any(|t| path.matches(t)),
        }
    }
}

/// A tri-state presence filter.
///
/// `Maybe` is the default and means "no filter applied"; `On` requires the
/// property to be present/true and `Off` requires it absent/false.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Presence {
    /// Property must be present.
    On,
    /// Property must be absent.
    Off,
    /// No filter applied.
    #[default]
    Maybe,
}

impl Presence {
    /// Returns whether a boolean property value passes this filter.
    pub fn accepts(&self, value: bool) -> bool {
        match self {
            Presence::On => value,
            Presence::Off => !value,
            Presence::Maybe => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    // ===========================================
    // TagPath: Validation & Normalization
    // ===========================================

    #[test]
    fn new_with_valid_path() {
        let tag = TagPath::new("project/foo/bar").unwrap();
        assert_eq!(tag.as_str(), "project/foo/bar");
        assert_eq!(tag.depth(), 3);
    }

    #[test]
    fn normalizes_to_lowercase() {
        let tag = TagPath::new("Project/Foo").unwrap();
        assert_eq!(tag.as_str(), "project/foo");
    }

    #[test]
    fn strips_hash_prefix() {
        let tag = TagPath::new("#status/active").unwrap();
        assert_eq!(tag.as_str(), "status/active");
    }

    #[test]
    fn collapses_slashes() {
        let tag = TagPath::new("/a//b/").unwrap();
        assert_eq!(tag.as_str(), "a/b");
    }

    #[test]
    fn rejects_empty() {
        assert!(TagPath::new("").is_err());
        assert!(TagPath::new("   ").is_err());
        assert!(TagPath::new("///").is_err());
    }

    #[test]
    fn rejects_invalid_characters() {
        assert!(TagPath::new("a/b c").is_err());
        assert!(TagPath::new("a/b!").is_err());
    }

    #[test]
    fn equality_is_case_insensitive() {
        assert_eq!(
            TagPath::new("DRAFT").unwrap(),
            TagPath::new("draft").unwrap()
        );
    }

    // ===========================================
    // TagPath: Hierarchy
    // ===========================================

    #[test]
    fn ancestor_at_segment_boundary() {
        let parent = TagPath::new("project").unwrap();
        let child = TagPath::new("project/foo").unwrap();
        let sibling = TagPath::new("project-foo").unwrap();

        assert!(parent.is_ancestor_of(&child));
        assert!(!parent.is_ancestor_of(&sibling));
        assert!(!parent.is_ancestor_of(&parent));
    }

    #[test]
    fn matches_self_and_descendants() {
        let tag = TagPath::new("a/b").unwrap();
        assert!(tag.matches(&TagPath::new("a/b").unwrap()));
        assert!(tag.matches(&TagPath::new("a/b/c").unwrap()));
        assert!(!tag.matches(&TagPath::new("a").unwrap()));
    }

    // ===========================================
    // TagFilter
    // ===========================================

    fn tags(strs: &[&str]) -> Vec<TagPath> {
        strs.iter().map(|s| TagPath::new(s).unwrap()).collect()
    }

    #[test]
    fn filter_all_passes_everything() {
        assert!(TagFilter::All.accepts(&[]));
        assert!(TagFilter::All.accepts(&tags(&["a"])));
    }

    #[test]
    fn filter_any_requires_a_tag() {
        assert!(!TagFilter::Any.accepts(&[]));
        assert!(TagFilter::Any.accepts(&tags(&["a"])));
    }

    #[test]
    fn filter_none_requires_no_tags() {
        assert!(TagFilter::None.accepts(&[]));
        assert!(!TagFilter::None.accepts(&tags(&["a"])));
    }

    #[test]
    fn filter_path_matches_descendants() {
        let filter = TagFilter::Path(TagPath::new("a").unwrap());
        assert!(filter.accepts(&tags(&["a/b"])));
        assert!(filter.accepts(&tags(&["other", "a"])));
        assert!(!filter.accepts(&tags(&["ab"])));
    }

    // ===========================================
    // Presence
    // ===========================================

    #[test]
    fn presence_tri_state() {
        assert!(Presence::On.accepts(true));
        assert!(!Presence::On.accepts(false));
        assert!(Presence::Off.accepts(false));
        assert!(!Presence::Off.accepts(true));
        assert!(Presence::Maybe.accepts(true));
        assert!(Presence::Maybe.accepts(false));
    }
}
