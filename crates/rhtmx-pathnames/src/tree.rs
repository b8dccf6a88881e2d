//! The route tree root
//!
//! [`PathTree`] owns the origin and the top-level segments. Segments are
//! stored in an arena shared behind an `Arc`, so handing out
//! [`PathNode`]s is cheap and the tree can be read from any thread.

use std::collections::BTreeMap;
use std::fs;
use std::ops::{Index, IndexMut};
use std::path::Path;
use std::sync::Arc;

use serde_json::Value;

use crate::builder::{self, value_kind};
use crate::error::{PathnamesError, Result};
use crate::segment::{Parent, Segment, SegmentIndex};
use crate::PathNode;

/// Arena of segments plus the data owned by the tree root
#[derive(Debug, Clone, Default)]
pub(crate) struct Arena {
    pub(crate) origin: String,
    pub(crate) segments: Vec<Segment>,
    pub(crate) top_level: BTreeMap<String, SegmentIndex>,
}

impl Arena {
    pub(crate) fn push(&mut self, segment: Segment) -> SegmentIndex {
        let index = self.segments.len();
        self.segments.push(segment);
        index
    }

    /// Segments reachable from the top level
    ///
    /// Replaced entries from a merging build stay in `segments` but are
    /// not counted.
    pub(crate) fn reachable_len(&self) -> usize {
        let mut pending: Vec<SegmentIndex> = self.top_level.values().copied().collect();
        let mut count = 0;

        while let Some(index) = pending.pop() {
            count += 1;
            pending.extend(self[index].children.values().copied());
        }

        count
    }

    /// Children declared under `parent`
    pub(crate) fn children_of(&self, parent: Parent) -> &BTreeMap<String, SegmentIndex> {
        match parent {
            Parent::Root => &self.top_level,
            Parent::Segment(index) => &self[index].children,
        }
    }
}

impl Index<SegmentIndex> for Arena {
    type Output = Segment;

    fn index(&self, index: SegmentIndex) -> &Self::Output {
        &self.segments[index]
    }
}

impl IndexMut<SegmentIndex> for Arena {
    fn index_mut(&mut self, index: SegmentIndex) -> &mut Self::Output {
        &mut self.segments[index]
    }
}

/// Root of a declared route tree
///
/// Built once at start-up, then read-only.
///
/// # Examples
///
/// ```
/// use rhtmx_pathnames::PathTree;
/// use serde_json::json;
///
/// let tree = PathTree::from_spec("http://localhost:3000", &json!({
///     "private": { "users": { "root": "", "id_user": { "_path": ":id_user" } } }
/// }));
///
/// let root = tree.find("private.users.root").unwrap();
/// assert_eq!(root.path(), "/private/users");
/// assert_eq!(root.resolve_url(), "http://localhost:3000/private/users");
/// assert!(tree.matches_pathname("/private/users/321", None));
/// ```
#[derive(Debug, Clone)]
pub struct PathTree {
    pub(crate) arena: Arc<Arena>,
}

impl PathTree {
    /// Creates an empty tree for `origin`
    pub fn new(origin: impl Into<String>) -> Self {
        Self {
            arena: Arc::new(Arena {
                origin: origin.into(),
                ..Arena::default()
            }),
        }
    }

    /// Creates a tree for `origin` and builds it from a declarative record
    pub fn from_spec(origin: impl Into<String>, spec: &Value) -> Self {
        let mut tree = Self::new(origin);
        tree.build_from_spec(spec);
        tree
    }

    /// Parses a JSON route definition and builds a tree from it
    ///
    /// Fails on invalid JSON or when the top-level value is not an object.
    pub fn from_json_str(origin: impl Into<String>, json: &str) -> Result<Self> {
        let spec: Value = serde_json::from_str(json)?;

        if !spec.is_object() {
            return Err(PathnamesError::NotAnObject(value_kind(&spec)));
        }

        Ok(Self::from_spec(origin, &spec))
    }

    /// Reads a JSON route definition from disk and builds a tree from it
    pub fn from_json_file(origin: impl Into<String>, path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| PathnamesError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        Self::from_json_str(origin, &content)
    }

    /// Populates the tree from a declarative record
    ///
    /// Entries that are neither strings, nulls nor objects are skipped.
    /// Calling this again merges: later top-level entries replace same-named
    /// ones. A non-object `spec` adds nothing.
    pub fn build_from_spec(&mut self, spec: &Value) -> &mut Self {
        let Some(entries) = spec.as_object() else {
            tracing::debug!(kind = value_kind(spec), "Route definition is not an object, nothing to build");
            return self;
        };

        let arena = Arc::make_mut(&mut self.arena);
        let children = builder::build_children(arena, entries, Parent::Root);
        arena.top_level.extend(children);

        tracing::debug!(
            origin = %arena.origin,
            top_level = arena.top_level.len(),
            segments = arena.reachable_len(),
            "Built path tree"
        );

        self
    }

    /// Returns the origin verbatim
    pub fn resolve_origin(&self) -> &str {
        &self.arena.origin
    }

    /// Looks up a top-level segment by declared name
    pub fn get(&self, name: &str) -> Option<PathNode> {
        self.arena
            .top_level
            .get(name)
            .map(|&index| PathNode::new(Arc::clone(&self.arena), index))
    }

    /// Looks up a segment by dotted declared names (`private.users.root`)
    pub fn find(&self, keys: &str) -> Option<PathNode> {
        let mut names = keys.split('.');
        let first = self.get(names.next()?)?;
        names.try_fold(first, |node, name| node.child(name))
    }

    /// Iterates the top-level segments as `(declared name, node)`
    pub fn children(&self) -> impl Iterator<Item = (&str, PathNode)> + '_ {
        self.arena
            .top_level
            .iter()
            .map(|(name, &index)| (name.as_str(), PathNode::new(Arc::clone(&self.arena), index)))
    }

    /// Number of declared segments reachable from the root
    pub fn len(&self) -> usize {
        self.arena.reachable_len()
    }

    /// Whether the tree declares no segments
    pub fn is_empty(&self) -> bool {
        self.arena.top_level.is_empty()
    }
}
