use thiserror::Error;

/// Errors that can occur while loading or saving a parse tree
#[derive(Error, Debug)]
pub enum TreeError {
    /// Tree document is not valid JSON or does not match the node layout
    #[error("Tree JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for tree operations
pub type TreeResult<T> = Result<T, TreeError>;
