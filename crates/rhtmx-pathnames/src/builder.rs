//! Declarative route definition walk
//!
//! Turns a nested JSON record into arena segments, depth-first. Entry kinds:
//!
//! - `"text"` → segment with literal `text`
//! - `null` → segment whose literal is the entry's key
//! - `{ "_path": ..., "_att": [...], ...children }` → segment with optional
//!   literal override and tags, followed by its own children
//!
//! Any other value (number, boolean, array) is skipped and leaves no segment
//! behind for its key.

use std::collections::{BTreeMap, BTreeSet};

use serde_json::{Map, Value};

use crate::segment::{Parent, Segment, SegmentIndex};
use crate::tree::Arena;

/// Reserved key overriding a segment's literal
pub const PATH_KEY: &str = "_path";

/// Reserved key listing a segment's tags
pub const TAGS_KEY: &str = "_att";

/// Checks whether a key is reserved for segment metadata
pub fn is_reserved_key(key: &str) -> bool {
    key == PATH_KEY || key == TAGS_KEY
}

/// Builds every entry of `entries` as a child of `parent`
///
/// Returns the map of declared name → segment index for the entries that
/// produced a segment. The caller attaches it to the parent.
pub(crate) fn build_children(
    arena: &mut Arena,
    entries: &Map<String, Value>,
    parent: Parent,
) -> BTreeMap<String, SegmentIndex> {
    let mut children = BTreeMap::new();

    for (key, value) in entries.iter().filter(|(key, _)| !is_reserved_key(key)) {
        if let Some(index) = build_entry(arena, key, value, parent) {
            children.insert(key.clone(), index);
        }
    }

    children
}

fn build_entry(arena: &mut Arena, key: &str, value: &Value, parent: Parent) -> Option<SegmentIndex> {
    match value {
        Value::String(literal) => Some(arena.push(Segment::new(literal.as_str(), parent, BTreeSet::new()))),
        Value::Null => Some(arena.push(Segment::new(key, parent, BTreeSet::new()))),
        Value::Object(entries) => {
            let literal = entries.get(PATH_KEY).and_then(Value::as_str).unwrap_or(key);
            let tags = entries.get(TAGS_KEY).map(collect_tags).unwrap_or_default();

            // Node first, so its children can point at it
            let index = arena.push(Segment::new(literal, parent, tags));
            let children = build_children(arena, entries, Parent::Segment(index));
            arena[index].children = children;

            Some(index)
        }
        other => {
            tracing::debug!(key, kind = value_kind(other), "Skipping route entry with unsupported value");
            None
        }
    }
}

fn collect_tags(value: &Value) -> BTreeSet<String> {
    match value.as_array() {
        Some(tags) => tags
            .iter()
            .filter_map(Value::as_str)
            .map(str::to_string)
            .collect(),
        None => {
            tracing::debug!(kind = value_kind(value), "Ignoring non-array tag list");
            BTreeSet::new()
        }
    }
}

/// Human-readable JSON type name, used in logs and errors
pub(crate) fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
