//! Path resolution on a single segment
//!
//! A [`PathNode`] is a handle onto one segment of a shared arena. Resolution
//! walks parents upward; derivations ([`PathNode::with_parameter`],
//! [`PathNode::with_truncation`]) copy the arena on write so the shared tree
//! never observes another caller's binding.

use std::fmt;
use std::sync::Arc;

use crate::segment::{Parent, Segment, SegmentIndex, SEPARATOR};
use crate::tree::Arena;

/// Options for [`PathNode::resolve_path`]
///
/// # Examples
///
/// ```
/// use rhtmx_pathnames::ResolveOptions;
///
/// let options = ResolveOptions::new().with_max_ancestors(1).with_resolved_params(true);
/// assert_eq!(options.max_ancestors, Some(1));
/// assert!(options.resolve_params);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ResolveOptions {
    /// How many ancestor levels to include (`None` = all)
    pub max_ancestors: Option<usize>,
    /// Whether bound parameter values replace placeholder literals
    pub resolve_params: bool,
}

impl ResolveOptions {
    /// Unlimited ancestors, placeholders left unresolved
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_max_ancestors(mut self, max_ancestors: usize) -> Self {
        self.max_ancestors = Some(max_ancestors);
        self
    }

    pub fn with_resolved_params(mut self, resolve_params: bool) -> Self {
        self.resolve_params = resolve_params;
        self
    }
}

/// Handle onto one segment of a route tree
///
/// Cloning is cheap (an `Arc` bump). Navigation only goes downward, through
/// [`PathNode::child`], and keeps whatever bindings the handle carries.
///
/// # Examples
///
/// ```
/// use rhtmx_pathnames::{PathTree, ResolveOptions};
/// use serde_json::json;
///
/// let tree = PathTree::from_spec("", &json!({
///     "captures": { "id_capture": { "_path": ":id_capture", "upload": { "files": null } } }
/// }));
///
/// let capture = tree.find("captures.id_capture").unwrap();
/// let files = capture.with_parameter("34").child("upload").unwrap().child("files").unwrap();
///
/// let resolved = ResolveOptions::new().with_resolved_params(true);
/// assert_eq!(files.resolve_path(resolved), "/captures/34/upload/files");
/// assert_eq!(files.path(), "/captures/:id_capture/upload/files");
///
/// // The shared tree never sees the binding
/// assert_eq!(capture.resolve_path(resolved), "/captures/:id_capture");
/// ```
#[derive(Debug, Clone)]
pub struct PathNode {
    arena: Arc<Arena>,
    index: SegmentIndex,
}

impl PathNode {
    pub(crate) fn new(arena: Arc<Arena>, index: SegmentIndex) -> Self {
        Self { arena, index }
    }

    fn segment(&self) -> &Segment {
        &self.arena[self.index]
    }

    /// Static segment text, without separator
    pub fn literal(&self) -> &str {
        &self.segment().literal
    }

    /// Bound parameter value, if this handle was derived with one
    pub fn parameter(&self) -> Option<&str> {
        self.segment().parameter.as_deref()
    }

    /// Whether upward resolution stops at this segment
    pub fn is_truncated(&self) -> bool {
        self.segment().truncated
    }

    /// Whether this segment is a `:param` placeholder
    pub fn is_placeholder(&self) -> bool {
        self.segment().is_placeholder()
    }

    /// Tags attached at declaration, in sorted order
    pub fn tags(&self) -> impl Iterator<Item = &str> + '_ {
        self.segment().tags.iter().map(String::as_str)
    }

    pub fn has_tag(&self, tag: &str) -> bool {
        self.segment().tags.contains(tag)
    }

    /// Looks up a declared child by name
    pub fn child(&self, name: &str) -> Option<PathNode> {
        self.segment()
            .children
            .get(name)
            .map(|&index| PathNode::new(Arc::clone(&self.arena), index))
    }

    /// Iterates declared children as `(declared name, node)`
    pub fn children(&self) -> impl Iterator<Item = (&str, PathNode)> + '_ {
        self.segment()
            .children
            .iter()
            .map(|(name, &index)| (name.as_str(), PathNode::new(Arc::clone(&self.arena), index)))
    }

    /// Separator followed by this segment's text
    ///
    /// With `resolve_param`, a bound parameter value replaces the literal.
    pub fn segment_text(&self, resolve_param: bool) -> String {
        self.segment().text(resolve_param)
    }

    /// Resolves the full path by walking ancestors
    ///
    /// - A top-level segment resolves to its own text.
    /// - `max_ancestors: Some(0)` suppresses the ancestor walk.
    /// - A truncated ancestor contributes nothing and stops the walk.
    /// - One trailing separator is stripped after each join, so empty
    ///   literals (`root: ""`) resolve to their parent's path.
    pub fn resolve_path(&self, options: ResolveOptions) -> String {
        resolve(&self.arena, self.index, options.max_ancestors, options.resolve_params, false)
    }

    /// Full path with default options
    pub fn path(&self) -> String {
        self.resolve_path(ResolveOptions::default())
    }

    /// Origin followed by the full, unresolved path
    ///
    /// Truncation and parameter bindings do not apply to URLs.
    pub fn resolve_url(&self) -> String {
        resolve_url(&self.arena, self.index)
    }

    /// Derives a handle whose segment is bound to `value`
    ///
    /// The binding is only visible through the returned handle and the
    /// children reached from it. The whole arena is copied, so this is
    /// O(tree size). An empty `value` resolves as the literal.
    pub fn with_parameter(&self, value: impl Into<String>) -> PathNode {
        let value = value.into();
        self.derive(|segment| segment.parameter = Some(value))
    }

    /// Derives a handle that stops upward resolution at this segment
    ///
    /// Paths of children reached from the returned handle start right below
    /// this segment. Copies the whole arena, like [`PathNode::with_parameter`].
    pub fn with_truncation(&self) -> PathNode {
        self.derive(|segment| segment.truncated = true)
    }

    fn derive(&self, apply: impl FnOnce(&mut Segment)) -> PathNode {
        let mut arena = Arc::clone(&self.arena);
        // Always shared here (self holds a reference), so the whole arena is copied
        apply(&mut Arc::make_mut(&mut arena)[self.index]);

        PathNode::new(arena, self.index)
    }
}

impl fmt::Display for PathNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}

fn resolve(
    arena: &Arena,
    index: SegmentIndex,
    max_ancestors: Option<usize>,
    resolve_params: bool,
    as_ancestor: bool,
) -> String {
    let segment = &arena[index];

    if segment.truncated && as_ancestor {
        return String::new();
    }

    let text = segment.text(resolve_params);

    match segment.parent {
        _ if segment.truncated => text,
        Parent::Root => text,
        Parent::Segment(_) if max_ancestors == Some(0) => text,
        Parent::Segment(parent) => {
            let remaining = max_ancestors.map(|max| max - 1);
            let mut path = resolve(arena, parent, remaining, resolve_params, true);
            path.push_str(&text);
            strip_trailing_separator(path)
        }
    }
}

fn resolve_url(arena: &Arena, index: SegmentIndex) -> String {
    let segment = &arena[index];

    let mut url = match segment.parent {
        Parent::Root => arena.origin.clone(),
        Parent::Segment(parent) => resolve_url(arena, parent),
    };
    url.push_str(&segment.text(false));

    strip_trailing_separator(url)
}

fn strip_trailing_separator(mut path: String) -> String {
    if path.ends_with(SEPARATOR) {
        path.pop();
    }
    path
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::PathTree;
    use serde_json::json;

    fn tree() -> PathTree {
        PathTree::from_spec(
            "http://localhost:3000",
            &json!({
                "a": { "b": { "n": null, "empty": "" } },
                "top_empty": ""
            }),
        )
    }

    #[test]
    fn test_resolve_path_full() {
        let n = tree().find("a.b.n").unwrap();
        assert_eq!(n.path(), "/a/b/n");
        assert_eq!(n.to_string(), "/a/b/n");
    }

    #[test]
    fn test_empty_literal_collapses_into_parent() {
        let empty = tree().find("a.b.empty").unwrap();
        assert_eq!(empty.path(), "/a/b");
        assert_eq!(empty.resolve_url(), "http://localhost:3000/a/b");
    }

    #[test]
    fn test_top_level_empty_literal_is_separator() {
        let top = tree().get("top_empty").unwrap();
        assert_eq!(top.path(), "/");
        assert_eq!(top.resolve_url(), "http://localhost:3000");
    }

    #[test]
    fn test_max_ancestors() {
        let n = tree().find("a.b.n").unwrap();
        assert_eq!(n.resolve_path(ResolveOptions::new().with_max_ancestors(0)), "/n");
        assert_eq!(n.resolve_path(ResolveOptions::new().with_max_ancestors(1)), "/b/n");
        assert_eq!(n.resolve_path(ResolveOptions::new().with_max_ancestors(2)), "/a/b/n");
        assert_eq!(n.resolve_path(ResolveOptions::new().with_max_ancestors(50)), "/a/b/n");
    }

    #[test]
    fn test_truncated_node_resolves_own_segment() {
        let n = tree().find("a.b.n").unwrap().with_truncation();
        assert!(n.is_truncated());
        assert_eq!(n.path(), "/n");
    }

    #[test]
    fn test_truncated_ancestor_contributes_nothing() {
        let b = tree().find("a.b").unwrap();
        let n = b.with_truncation().child("n").unwrap();

        assert_eq!(n.path(), "/n");
        assert_eq!(b.path(), "/a/b");
        assert!(!b.is_truncated());
    }

    #[test]
    fn test_url_ignores_truncation() {
        let n = tree().find("a.b").unwrap().with_truncation().child("n").unwrap();
        assert_eq!(n.resolve_url(), "http://localhost:3000/a/b/n");
    }

    #[test]
    fn test_parameter_only_resolved_on_request() {
        let n = tree().find("a.b.n").unwrap().with_parameter("7");
        assert_eq!(n.parameter(), Some("7"));
        assert_eq!(n.path(), "/a/b/n");
        assert_eq!(n.resolve_path(ResolveOptions::new().with_resolved_params(true)), "/a/b/7");
        assert_eq!(n.segment_text(true), "/7");
        assert_eq!(n.segment_text(false), "/n");
    }

    #[test]
    fn test_derivations_chain() {
        let a = tree().get("a").unwrap();
        let n = a
            .with_parameter("x")
            .child("b")
            .unwrap()
            .with_parameter("y")
            .child("n")
            .unwrap();

        let resolved = ResolveOptions::new().with_resolved_params(true);
        assert_eq!(n.resolve_path(resolved), "/x/y/n");
        assert_eq!(a.resolve_path(resolved), "/a");
    }
}
