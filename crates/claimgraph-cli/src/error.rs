//! CLI error types.

use thiserror::Error;

/// Errors surfaced by CLI commands
#[derive(Error, Debug)]
pub enum CliError {
    /// Storage failure
    #[error("Store error: {0}")]
    Store(#[from] claimgraph_store::StoreError),

    /// Graph edit rejected
    #[error("Graph error: {0}")]
    Graph(#[from] claimgraph_domain::GraphError),

    /// Extraction pipeline failure
    #[error("Extraction error: {0}")]
    Extract(#[from] claimgraph_extractor::ExtractError),

    /// Filesystem error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Command-level error with a user-facing message
    #[error("{0}")]
    Message(String),
}

/// Result type for CLI operations
pub type Result<T> = std::result::Result<T, CliError>;
