/// Segment storage for the path tree
///
/// A route tree is stored as an arena of [`Segment`]s addressed by
/// [`SegmentIndex`]. Each segment knows its parent (another segment or the
/// tree root) and its children by declared name.
///
/// Segments are plain data. All resolution logic lives on
/// [`PathNode`](crate::PathNode), which pairs an arena with an index.

use std::collections::{BTreeMap, BTreeSet};

pub mod pathname;
pub use pathname::{is_placeholder, split_pathname, PARAM_MARKER, SEPARATOR};

/// Index of a segment in the arena
pub type SegmentIndex = usize;

/// Upward link of a segment
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Parent {
    /// Top-level segment, its parent is the tree root (origin)
    Root,
    /// Nested segment under another segment of the same arena
    Segment(SegmentIndex),
}

/// One path segment of the route tree
#[derive(Debug, Clone, PartialEq)]
pub struct Segment {
    /// Static segment text, without separators
    pub(crate) literal: String,
    /// Value used instead of `literal` when parameters are resolved
    pub(crate) parameter: Option<String>,
    /// Opaque labels attached at declaration
    pub(crate) tags: BTreeSet<String>,
    pub(crate) parent: Parent,
    /// Stops upward resolution when this segment is reached as an ancestor
    pub(crate) truncated: bool,
    pub(crate) children: BTreeMap<String, SegmentIndex>,
}

impl Segment {
    pub(crate) fn new(literal: impl Into<String>, parent: Parent, tags: BTreeSet<String>) -> Self {
        Self {
            literal: literal.into(),
            parameter: None,
            tags,
            parent,
            truncated: false,
            children: BTreeMap::new(),
        }
    }

    /// Separator followed by the bound parameter (when requested and
    /// non-empty) or the literal
    pub(crate) fn text(&self, resolve_param: bool) -> String {
        let value = match (&self.parameter, resolve_param) {
            (Some(parameter), true) if !parameter.is_empty() => parameter.as_str(),
            _ => self.literal.as_str(),
        };

        let mut text = String::with_capacity(value.len() + 1);
        text.push(SEPARATOR);
        text.push_str(value);
        text
    }

    pub(crate) fn is_placeholder(&self) -> bool {
        is_placeholder(&self.literal)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_uses_literal() {
        let segment = Segment::new("users", Parent::Root, BTreeSet::new());
        assert_eq!(segment.text(false), "/users");
        assert_eq!(segment.text(true), "/users");
    }

    #[test]
    fn test_text_uses_parameter_only_when_requested() {
        let mut segment = Segment::new(":id", Parent::Segment(0), BTreeSet::new());
        segment.parameter = Some("42".to_string());

        assert_eq!(segment.text(false), "/:id");
        assert_eq!(segment.text(true), "/42");
    }

    #[test]
    fn test_empty_parameter_falls_back_to_literal() {
        let mut segment = Segment::new(":id", Parent::Segment(0), BTreeSet::new());
        segment.parameter = Some(String::new());

        assert_eq!(segment.text(true), "/:id");
    }

    #[test]
    fn test_empty_literal_is_bare_separator() {
        let segment = Segment::new("", Parent::Segment(3), BTreeSet::new());
        assert_eq!(segment.text(false), "/");
    }

    #[test]
    fn test_placeholder_detection() {
        assert!(Segment::new(":id_user", Parent::Root, BTreeSet::new()).is_placeholder());
        assert!(!Segment::new("users", Parent::Root, BTreeSet::new()).is_placeholder());
    }
}
