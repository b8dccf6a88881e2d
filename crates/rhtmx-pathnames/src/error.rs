use std::path::PathBuf;

/// Errors raised while loading a route definition
///
/// Building from an in-memory definition never fails; only reading and
/// parsing a definition from text or disk can.
#[derive(Debug, thiserror::Error)]
pub enum PathnamesError {
    #[error("Failed to read route definition {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid route definition JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Route definition must be a JSON object, found {0}")]
    NotAnObject(&'static str),
}

pub type Result<T> = std::result::Result<T, PathnamesError>;
