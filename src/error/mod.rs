//! Error types for registry search operations

use thiserror::Error;

pub type Result<T> = std::result::Result<T, SearchError>;

/// Every failure surfaces as a distinct variant and propagates to the top
/// level; there is no degraded continuation with partial results.
#[derive(Debug, Error)]
pub enum SearchError {
    /// Invalid command-line configuration
    #[error("Configuration error: {0}")]
    Config(String),

    /// Tag pattern failed to compile
    #[error("Invalid tag pattern {pattern:?}: {source}")]
    Pattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    /// A registry call failed
    #[error("{operation} failed for repository {repository:?}: {message}")]
    Registry {
        operation: &'static str,
        repository: String,
        message: String,
    },

    /// Push timestamp could not be rendered
    #[error("Invalid push timestamp: {0}")]
    Timestamp(String),

    /// Results could not be encoded for output
    #[error("Output encoding error: {0}")]
    Encode(#[from] serde_json::Error),
}

impl SearchError {
    pub fn registry(
        operation: &'static str,
        repository: &str,
        message: impl Into<String>,
    ) -> Self {
        SearchError::Registry {
            operation,
            repository: repository.to_string(),
            message: message.into(),
        }
    }
}
