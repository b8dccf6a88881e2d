//! Pathname matching against the declared tree
//!
//! Recursive descent with backtracking over placeholder segments:
//!
//! 1. An exact literal match at a level commits; placeholders at that level
//!    are not tried if the descent below it fails.
//! 2. Otherwise each `:param` sibling is tried in turn and the first whose
//!    subtree matches the remaining segments wins.
//! 3. When the last runtime segment lands on placeholders, every placeholder
//!    sibling at that level joins the trace.

use std::collections::BTreeMap;
use std::sync::Arc;

use crate::segment::{split_pathname, Parent, SegmentIndex};
use crate::tree::Arena;
use crate::{PathNode, PathTree};

/// Successful match of a pathname: the segments visited, root first
#[derive(Debug, Clone)]
pub struct PathMatch {
    trace: Vec<PathNode>,
}

impl PathMatch {
    pub fn trace(&self) -> &[PathNode] {
        &self.trace
    }

    /// Whether any segment in the trace carries `tag`
    pub fn has_tag(&self, tag: &str) -> bool {
        self.trace.iter().any(|node| node.has_tag(tag))
    }

    /// Last segment of the trace
    pub fn leaf(&self) -> Option<&PathNode> {
        self.trace.last()
    }
}

/// Extra conditions for [`PathTree::matches_pathname`]
///
/// # Examples
///
/// ```
/// use rhtmx_pathnames::{MatchFilter, PathTree};
/// use serde_json::json;
///
/// let tree = PathTree::from_spec("", &json!({
///     "captures": { "id": { "_path": ":id", "_att": ["loggable"] } }
/// }));
///
/// assert!(tree.matches_pathname("/captures/9", Some(&MatchFilter::tag("loggable"))));
/// assert!(!tree.matches_pathname("/captures/9", Some(&MatchFilter::tag("audited"))));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MatchFilter {
    tag: Option<String>,
}

impl MatchFilter {
    /// Requires at least one traced segment to carry `tag`
    ///
    /// An empty tag disables the check.
    pub fn tag(tag: impl Into<String>) -> Self {
        Self {
            tag: Some(tag.into()).filter(|tag| !tag.is_empty()),
        }
    }

    fn accepts(&self, matched: &PathMatch) -> bool {
        self.tag.as_deref().map_or(true, |tag| matched.has_tag(tag))
    }
}

impl PathTree {
    /// Matches a runtime pathname, returning the trace on success
    ///
    /// Empty segments (leading, trailing or doubled `/`) are ignored. A
    /// pathname with no segments never matches.
    pub fn match_pathname(&self, pathname: &str) -> Option<PathMatch> {
        let segments = split_pathname(pathname);
        let trace = recursive_match(&self.arena, &segments, self.arena.children_of(Parent::Root));

        tracing::trace!(pathname, matched = trace.is_some(), "Matched pathname");

        trace.map(|indices| PathMatch {
            trace: indices
                .into_iter()
                .map(|index| PathNode::new(Arc::clone(&self.arena), index))
                .collect(),
        })
    }

    /// Checks whether a runtime pathname is declared, optionally filtered
    ///
    /// # Examples
    ///
    /// ```
    /// use rhtmx_pathnames::PathTree;
    /// use serde_json::json;
    ///
    /// let tree = PathTree::from_spec("", &json!({
    ///     "users": { "new": null, "id": { "_path": ":id" } }
    /// }));
    ///
    /// assert!(tree.matches_pathname("/users/new", None));
    /// assert!(tree.matches_pathname("/users/123/", None));
    /// assert!(!tree.matches_pathname("/users/123/edit", None));
    /// ```
    pub fn matches_pathname(&self, pathname: &str, filter: Option<&MatchFilter>) -> bool {
        self.match_pathname(pathname)
            .map_or(false, |matched| filter.map_or(true, |filter| filter.accepts(&matched)))
    }
}

fn recursive_match(
    arena: &Arena,
    remaining: &[&str],
    children: &BTreeMap<String, SegmentIndex>,
) -> Option<Vec<SegmentIndex>> {
    let (first, rest) = remaining.split_first()?;

    let exact = children
        .values()
        .copied()
        .find(|&index| arena[index].literal == *first);

    if let Some(index) = exact {
        // Declared literals shadow placeholders, even if the descent fails
        return descend(arena, index, rest);
    }

    let placeholders: Vec<SegmentIndex> = children
        .values()
        .copied()
        .filter(|&index| arena[index].is_placeholder())
        .collect();

    if rest.is_empty() {
        return (!placeholders.is_empty()).then_some(placeholders);
    }

    placeholders
        .into_iter()
        .find_map(|index| descend(arena, index, rest))
}

/// Matches `rest` below `index`, prefixing `index` to the sub-trace
fn descend(arena: &Arena, index: SegmentIndex, rest: &[&str]) -> Option<Vec<SegmentIndex>> {
    if rest.is_empty() {
        return Some(vec![index]);
    }

    recursive_match(arena, rest, arena.children_of(Parent::Segment(index))).map(|sub_trace| {
        let mut trace = Vec::with_capacity(sub_trace.len() + 1);
        trace.push(index);
        trace.extend(sub_trace);
        trace
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn literals(matched: &PathMatch) -> Vec<&str> {
        matched.trace().iter().map(PathNode::literal).collect()
    }

    #[test]
    fn test_empty_pathname_never_matches() {
        let tree = PathTree::from_spec("", &json!({ "home": "" }));
        assert!(tree.match_pathname("/").is_none());
        assert!(tree.match_pathname("").is_none());
    }

    #[test]
    fn test_exact_match_trace() {
        let tree = PathTree::from_spec("", &json!({ "a": { "b": null } }));
        let matched = tree.match_pathname("/a/b").unwrap();

        assert_eq!(literals(&matched), vec!["a", "b"]);
        assert_eq!(matched.leaf().map(PathNode::literal), Some("b"));
    }

    #[test]
    fn test_intermediate_segment_matches() {
        let tree = PathTree::from_spec("", &json!({ "a": { "b": null } }));
        assert!(tree.matches_pathname("/a", None));
    }

    #[test]
    fn test_exact_match_commits() {
        // "new" is declared, so "/users/new/edit" must not fall back to ":id/edit"
        let tree = PathTree::from_spec(
            "",
            &json!({ "users": { "new": null, "id": { "_path": ":id", "edit": null } } }),
        );

        assert!(tree.matches_pathname("/users/42/edit", None));
        assert!(!tree.matches_pathname("/users/new/edit", None));
    }

    #[test]
    fn test_placeholder_backtracking() {
        let tree = PathTree::from_spec(
            "",
            &json!({
                "files": {
                    "a": { "_path": ":a", "raw": null },
                    "b": { "_path": ":b", "meta": null }
                }
            }),
        );

        let matched = tree.match_pathname("/files/1/meta").unwrap();
        assert_eq!(literals(&matched), vec!["files", ":b", "meta"]);
    }

    #[test]
    fn test_all_placeholder_siblings_join_trace_at_leaf() {
        let tree = PathTree::from_spec(
            "",
            &json!({
                "items": {
                    "by_id": { "_path": ":id", "_att": ["numeric"] },
                    "by_slug": { "_path": ":slug", "_att": ["text"] }
                }
            }),
        );

        let matched = tree.match_pathname("/items/anything").unwrap();
        assert_eq!(literals(&matched), vec!["items", ":id", ":slug"]);
        assert!(tree.matches_pathname("/items/x", Some(&MatchFilter::tag("numeric"))));
        assert!(tree.matches_pathname("/items/x", Some(&MatchFilter::tag("text"))));
    }

    #[test]
    fn test_empty_tag_filter_is_ignored() {
        let tree = PathTree::from_spec("", &json!({ "a": null }));
        assert_eq!(MatchFilter::tag(""), MatchFilter::default());
        assert!(tree.matches_pathname("/a", Some(&MatchFilter::tag(""))));
    }
}
