pub mod matching;
pub mod resolve;
pub mod tree;

use anyhow::{Context, Result};
use rhtmx_pathnames::PathTree;

use crate::config::Config;

/// Loads the route tree named by the configuration
pub fn load_tree(config: &Config) -> Result<PathTree> {
    let tree = PathTree::from_json_file(&config.routes.origin, &config.routes.file)
        .with_context(|| format!("Failed to load routes from {}", config.routes.file))?;

    tracing::debug!(
        file = %config.routes.file,
        segments = tree.len(),
        "Loaded route tree"
    );

    Ok(tree)
}
