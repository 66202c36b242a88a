//! Error types for the CLI

use std::path::PathBuf;
use thiserror::Error;

/// Result type for CLI operations
pub type CliResult<T> = Result<T, CliError>;

/// Errors that can occur in the CLI
#[derive(Debug, Error)]
pub enum CliError {
    /// Update pipeline error
    #[error(transparent)]
    Tablero(#[from] tablero::TableroError),

    /// Check found the document out of date
    #[error("coverage table in {path} is out of date; run `tablero update`")]
    Stale {
        /// Path to the stale document
        path: PathBuf,
    },

    /// JSON serialization error
    #[error("failed to serialize outcome: {0}")]
    Json(#[from] serde_json::Error),
}

impl CliError {
    /// Create a stale-document error
    #[must_use]
    pub fn stale(path: impl Into<PathBuf>) -> Self {
        Self::Stale { path: path.into() }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn test_stale_message() {
        let err = CliError::stale("README.md");
        let msg = err.to_string();
        assert!(msg.contains("README.md"));
        assert!(msg.contains("out of date"));
    }

    #[test]
    fn test_tablero_error_passes_through() {
        let inner = tablero::TableroError::empty_dataset("data.csv");
        let err: CliError = inner.into();
        assert!(err.to_string().contains("no rows"));
    }
}
