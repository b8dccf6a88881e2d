//! # RHTMX Pathnames
//!
//! Declarative route trees with support for:
//! - Static segments (`/about`)
//! - Placeholder segments (`/users/:id_user`)
//! - Literal overrides and empty index segments (`root: ""`)
//! - Tags on segments, queried while matching (`_att: ["loggable"]`)
//!
//! ## Building a Tree
//!
//! A tree is built once at start-up from a nested JSON record. Each key
//! becomes a segment:
//!
//! - `"sign-in"` → segment with that literal
//! - `null` → segment named after its key
//! - `{ "_path": ":id", "_att": [...], ... }` → segment with literal
//!   override, tags and children
//!
//! Other values are skipped; no segment is created for their key.
//!
//! ## Resolving
//!
//! [`PathNode::resolve_path`] walks ancestors upward and joins their
//! literals. Bindings never touch the shared tree:
//! - [`PathNode::with_parameter`] binds a value to a placeholder
//! - [`PathNode::with_truncation`] starts paths right below a segment
//!
//! ## Matching
//!
//! [`PathTree::matches_pathname`] descends from the root, preferring
//! declared literals over placeholders and backtracking across placeholder
//! siblings.
//!
//! ## Example
//!
//! ```
//! use rhtmx_pathnames::{MatchFilter, PathTree, ResolveOptions};
//! use serde_json::json;
//!
//! let tree = PathTree::from_spec("http://localhost:3000", &json!({
//!     "private": {
//!         "users": { "root": "", "id_user": { "_path": ":id_user" } },
//!         "captures": {
//!             "id_capture": { "_path": ":id_capture", "_att": ["loggable"], "upload": { "files": null } }
//!         }
//!     }
//! }));
//!
//! let files = tree.find("private.captures.id_capture.upload.files").unwrap();
//! assert_eq!(files.path(), "/private/captures/:id_capture/upload/files");
//!
//! let bound = tree
//!     .find("private.captures.id_capture")
//!     .unwrap()
//!     .with_parameter("34")
//!     .child("upload")
//!     .unwrap();
//! let resolved = ResolveOptions::new().with_resolved_params(true);
//! assert_eq!(bound.resolve_path(resolved), "/private/captures/34/upload");
//!
//! assert!(tree.matches_pathname("/private/users/321", None));
//! assert!(tree.matches_pathname(
//!     "/private/captures/123/upload/files",
//!     Some(&MatchFilter::tag("loggable")),
//! ));
//! ```

// ============================================================================
// Module Declarations
// ============================================================================

pub mod builder;
mod error;
mod matcher;
mod node;
pub mod segment;
mod tree;

pub use error::{PathnamesError, Result};
pub use matcher::{MatchFilter, PathMatch};
pub use node::{PathNode, ResolveOptions};
pub use segment::{is_placeholder, split_pathname};
pub use tree::PathTree;
