use anyhow::Result;
use colored::Colorize;
use rhtmx_pathnames::{MatchFilter, PathTree};

/// Prints whether `pathname` is declared and the matched trace
///
/// Returns whether the pathname matched (and passed the tag filter).
pub fn execute(tree: &PathTree, pathname: &str, tag: Option<&str>) -> Result<bool> {
    let filter = tag.map(MatchFilter::tag);
    let matched = tree.matches_pathname(pathname, filter.as_ref());

    if matched {
        println!("  {} {}", "✓".green(), pathname.cyan());
    } else {
        println!("  {} {}", "✗".red(), pathname.cyan());
    }

    if let Some(found) = tree.match_pathname(pathname) {
        println!();
        println!("{}", "Trace:".bold());
        for node in found.trace() {
            let tags: Vec<&str> = node.tags().collect();
            if tags.is_empty() {
                println!("  {}", node.path());
            } else {
                println!("  {} {}", node.path(), format!("[{}]", tags.join(", ")).yellow());
            }
        }
    }

    Ok(matched)
}
