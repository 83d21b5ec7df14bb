//! Error types for the extractor

use thiserror::Error;

/// Errors that can occur preparing or running the pipeline
///
/// The pipeline stages themselves are total functions over their inputs;
/// these errors cover configuration and pattern construction only, and a
/// per-claim pattern failure is isolated to that claim.
#[derive(Error, Debug)]
pub enum ExtractError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Feature alternation pattern could not be compiled
    #[error("Feature pattern error: {0}")]
    Pattern(String),
}
