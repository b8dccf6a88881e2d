use anyhow::Result;
use colored::Colorize;
use rhtmx_pathnames::{PathNode, PathTree};

pub fn execute(tree: &PathTree) -> Result<()> {
    println!("{} {}", "Origin:".bold(), tree.resolve_origin().cyan());
    println!();

    for line in describe(tree) {
        println!("{}", line);
    }

    Ok(())
}

/// One line per declared route: `dotted.key -> /resolved/path [tags]`
pub fn describe(tree: &PathTree) -> Vec<String> {
    let mut lines = Vec::new();
    for (name, node) in tree.children() {
        describe_node(name.to_string(), &node, &mut lines);
    }
    lines
}

fn describe_node(key: String, node: &PathNode, lines: &mut Vec<String>) {
    let tags: Vec<&str> = node.tags().collect();
    let line = if tags.is_empty() {
        format!("{} -> {}", key, node.path())
    } else {
        format!("{} -> {} [{}]", key, node.path(), tags.join(", "))
    };
    lines.push(line);

    for (name, child) in node.children() {
        describe_node(format!("{}.{}", key, name), &child, lines);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_describe() {
        let tree = PathTree::from_spec(
            "",
            &json!({
                "users": { "root": "", "id": { "_path": ":id", "_att": ["loggable"] } },
                "broken": 1
            }),
        );

        assert_eq!(
            describe(&tree),
            vec![
                "users -> /users",
                "users.id -> /users/:id [loggable]",
                "users.root -> /users",
            ]
        );
    }
}
