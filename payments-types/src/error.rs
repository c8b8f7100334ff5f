//! Error types for the payment query service.

use std::path::PathBuf;

/// Domain-level errors (invalid value construction).
#[derive(Debug, thiserror::Error)]
pub enum DomainError {
    #[error("Month must be between 1 and 12, got {0}")]
    InvalidMonth(u32),

    #[error("Invalid year-month '{0}', expected YYYY-MM")]
    InvalidYearMonth(String),
}

/// Repository-level errors (snapshot loading failures).
#[derive(Debug, thiserror::Error)]
pub enum RepoError {
    #[error("Failed to read snapshot {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed snapshot: {0}")]
    Parse(#[from] serde_json::Error),
}
