// File: src/config.rs
// Purpose: Configuration parsing from pathnames.toml

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Default config file name, looked up in the working directory
pub const DEFAULT_CONFIG_FILE: &str = "pathnames.toml";

/// CLI configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub routes: RoutesConfig,
}

/// Where the route definition lives and which origin prefixes its URLs
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoutesConfig {
    /// JSON route definition (default: "routes.json")
    #[serde(default = "default_routes_file")]
    pub file: String,

    /// Origin prepended to resolved URLs (default: "http://localhost:3000")
    #[serde(default = "default_origin")]
    pub origin: String,
}

// Default values
fn default_routes_file() -> String {
    "routes.json".to_string()
}

fn default_origin() -> String {
    "http://localhost:3000".to_string()
}

impl Default for RoutesConfig {
    fn default() -> Self {
        Self {
            file: default_routes_file(),
            origin: default_origin(),
        }
    }
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        // If file doesn't exist, return default config
        if !path.exists() {
            tracing::debug!("No config at {:?}, using defaults", path);
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;

        // If file is empty, return default config
        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        // Parse TOML
        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {:?}", path))?;

        Ok(config)
    }

    /// Applies command-line overrides on top of the file values
    pub fn with_overrides(mut self, routes_file: Option<String>, origin: Option<String>) -> Self {
        if let Some(file) = routes_file {
            self.routes.file = file;
        }
        if let Some(origin) = origin {
            self.routes.origin = origin;
        }
        self
    }
}
