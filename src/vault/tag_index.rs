//! Tag indices: flat tag map and recursive tag tree.

use crate::domain::{MetadataSource, Note, TagPath};
use std::collections::BTreeMap;
use std::path::PathBuf;

/// Notes filed under one exact tag path.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TagEntry {
    /// Notes carrying this exact tag, in input order.
    pub notes: Vec<Note>,
    /// The valid note flagged as the root note for this tag, if any.
    pub note_root: Option<Note>,
}

/// Flat mapping from full tag path to its notes.
///
/// `BTreeMap` keeps tag iteration deterministic; note lists preserve the
/// insertion order of the input collection.
pub type TagMap = BTreeMap<TagPath, TagEntry>;

/// A rejected root-note claim.
///
/// When several valid notes claim to be the root note for the same tag the
/// first encountered wins and each later claim is reported as a conflict.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RootConflict {
    /// The contested tag.
    pub tag: TagPath,
    /// Path of the note that kept the root slot.
    pub kept: PathBuf,
    /// Path of the note whose claim was ignored.
    pub ignored: PathBuf,
}

/// Builds the flat tag map for a note collection.
///
/// Single pass over `notes` in order; each note is appended to the entry of
/// every tag it carries. A note flagged as root claims the `note_root` slot
/// of each of its tags, but only if the note is not invalid; competing
/// claims resolve first-wins with a [`RootConflict`] recorded per loser.
pub fn build_tag_map(notes: &[Note], src: &dyn MetadataSource) -> (TagMap, Vec<RootConflict>) {
    let mut map = TagMap::new();
    let mut conflicts = Vec::new();

    for note in notes {
        let meta = src.metadata(note.path());
        let claims_root = meta.root && meta.invalid.is_none();

        for tag in meta.tags {
            let entry = map.entry(tag.clone()).or_default();
            entry.notes.push(note.clone());

            if claims_root {
                match &entry.note_root {
                    None => entry.note_root = Some(note.clone()),
                    Some(kept) => conflicts.push(RootConflict {
                        tag: tag.clone(),
                        kept: kept.path().to_path_buf(),
                        ignored: note.path().to_path_buf(),
                    }),
                }
            }
        }
    }

    (map, conflicts)
}

/// One node of the recursive tag tree.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TagNode {
    /// Notes under this segment, including all descendant segments.
    pub notes: Vec<Note>,
    /// Root note for the tag ending exactly at this node, if any.
    pub note_root: Option<Note>,
    /// Child segments.
    pub subtags: TagTree,
}

/// Recursive mapping from one path segment to its node.
pub type TagTree = BTreeMap<String, TagNode>;

/// Builds the nested tag tree from a flat tag map.
///
/// Each tag path is split on `/` and a node is created or walked for every
/// prefix. An entry's notes are appended to every ancestor node along the
/// path (cumulative aggregation), while `note_root` is assigned only at the
/// terminal node matching the tag's full depth — never inherited upward or
/// downward.
pub fn build_tag_tree(map: &TagMap) -> TagTree {
    let mut tree = TagTree::new();

    for (tag, entry) in map {
        if let Some((last, init)) = tag.segments().split_last() {
            let mut children = &mut tree;
            for segment in init {
                let child = children.entry(segment.clone()).or_default();
                child.notes.extend(entry.notes.iter().cloned());
                children = &mut child.subtags;
            }
            let terminal = children.entry(last.clone()).or_default();
            terminal.notes.extend(entry.notes.iter().cloned());
            terminal.note_root = entry.note_root.clone();
        }
    }

    tree
}
