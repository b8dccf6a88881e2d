use anyhow::{Context, Result};
use colored::Colorize;
use rhtmx_pathnames::{PathNode, PathTree, ResolveOptions};
use std::collections::HashMap;

/// What to resolve and how
#[derive(Debug, Clone, Default)]
pub struct ResolveRequest {
    /// Dotted declared names, e.g. `private.captures.id_capture.upload`
    pub keys: String,
    /// Dotted prefix → bound parameter value
    pub bindings: Vec<(String, String)>,
    /// Dotted prefix to truncate at
    pub truncate: Option<String>,
    pub max_ancestors: Option<usize>,
    /// Print the full URL instead of the path
    pub url: bool,
}

pub fn execute(tree: &PathTree, request: &ResolveRequest) -> Result<()> {
    let resolved = resolve(tree, request)?;
    println!("{}", resolved.cyan());
    Ok(())
}

/// Walks `request.keys`, applying bindings and truncation on the way down
pub fn resolve(tree: &PathTree, request: &ResolveRequest) -> Result<String> {
    let mut bindings: HashMap<&str, &str> = request
        .bindings
        .iter()
        .map(|(prefix, value)| (prefix.as_str(), value.as_str()))
        .collect();
    let mut truncate = request.truncate.as_deref();

    let mut prefix = String::new();
    let mut current: Option<PathNode> = None;

    for name in request.keys.split('.') {
        if !prefix.is_empty() {
            prefix.push('.');
        }
        prefix.push_str(name);

        let mut node = match &current {
            None => tree.get(name),
            Some(parent) => parent.child(name),
        }
        .with_context(|| format!("Unknown route '{}'", prefix))?;

        if let Some(value) = bindings.remove(prefix.as_str()) {
            node = node.with_parameter(value);
        }
        if truncate == Some(prefix.as_str()) {
            node = node.with_truncation();
            truncate = None;
        }

        current = Some(node);
    }

    if let Some(prefix) = bindings.keys().next() {
        anyhow::bail!("Binding '{}' is not on the path to '{}'", prefix, request.keys);
    }
    if let Some(prefix) = truncate {
        anyhow::bail!("Truncation '{}' is not on the path to '{}'", prefix, request.keys);
    }

    let node = current.context("No route given")?;

    if request.url {
        return Ok(node.resolve_url());
    }

    let mut options = ResolveOptions::new().with_resolved_params(!request.bindings.is_empty());
    if let Some(max_ancestors) = request.max_ancestors {
        options = options.with_max_ancestors(max_ancestors);
    }

    Ok(node.resolve_path(options))
}

/// Parses `key.path=value` for `--bind`
pub fn parse_binding(raw: &str) -> Result<(String, String), String> {
    raw.split_once('=')
        .filter(|(prefix, _)| !prefix.is_empty())
        .map(|(prefix, value)| (prefix.to_string(), value.to_string()))
        .ok_or_else(|| format!("expected KEY.PATH=VALUE, got '{}'", raw))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn tree() -> PathTree {
        PathTree::from_spec(
            "http://localhost:3000",
            &json!({
                "private": {
                    "captures": {
                        "id_capture": { "_path": ":id_capture", "upload": { "files": null } }
                    }
                }
            }),
        )
    }

    fn request(keys: &str) -> ResolveRequest {
        ResolveRequest {
            keys: keys.to_string(),
            ..ResolveRequest::default()
        }
    }

    #[test]
    fn test_plain_path() {
        let path = resolve(&tree(), &request("private.captures.id_capture.upload.files")).unwrap();
        assert_eq!(path, "/private/captures/:id_capture/upload/files");
    }

    #[test]
    fn test_binding() {
        let mut req = request("private.captures.id_capture.upload");
        req.bindings = vec![("private.captures.id_capture".to_string(), "34".to_string())];

        assert_eq!(resolve(&tree(), &req).unwrap(), "/private/captures/34/upload");
    }

    #[test]
    fn test_truncation_and_max_ancestors() {
        let mut req = request("private.captures.id_capture.upload.files");
        req.truncate = Some("private.captures".to_string());
        assert_eq!(resolve(&tree(), &req).unwrap(), "/:id_capture/upload/files");

        let mut req = request("private.captures.id_capture.upload.files");
        req.max_ancestors = Some(1);
        assert_eq!(resolve(&tree(), &req).unwrap(), "/upload/files");
    }

    #[test]
    fn test_url() {
        let mut req = request("private.captures");
        req.url = true;
        assert_eq!(resolve(&tree(), &req).unwrap(), "http://localhost:3000/private/captures");
    }

    #[test]
    fn test_unknown_route() {
        let err = resolve(&tree(), &request("private.nope")).unwrap_err();
        assert_eq!(err.to_string(), "Unknown route 'private.nope'");
    }

    #[test]
    fn test_binding_off_path() {
        let mut req = request("private.captures");
        req.bindings = vec![("private.other".to_string(), "1".to_string())];
        assert!(resolve(&tree(), &req).is_err());
    }

    #[test]
    fn test_parse_binding() {
        assert_eq!(
            parse_binding("a.b=42"),
            Ok(("a.b".to_string(), "42".to_string()))
        );
        assert_eq!(parse_binding("a.b=x=y").unwrap().1, "x=y");
        assert!(parse_binding("novalue").is_err());
        assert!(parse_binding("=42").is_err());
    }
}
