//! Error types for the update pipeline

use std::path::PathBuf;
use thiserror::Error;

/// Result type for tablero operations
pub type TableroResult<T> = Result<T, TableroError>;

/// Errors that can occur while regenerating the coverage report
#[derive(Debug, Error)]
pub enum TableroError {
    /// Data source file could not be read
    #[error("failed to read data file {path}: {source}")]
    DataRead {
        /// Path to the data source
        path: PathBuf,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// Data source is not a well-formed CSV table
    #[error("malformed data in {path} (line {line}): {message}")]
    DataMalformed {
        /// Path to the data source
        path: PathBuf,
        /// 1-based line number of the offending row
        line: usize,
        /// What went wrong
        message: String,
    },

    /// Data source has a header but zero data rows
    #[error("data file {path} contains no rows; refusing to report a coverage percentage")]
    EmptyDataset {
        /// Path to the data source
        path: PathBuf,
    },

    /// Target document could not be read
    #[error("failed to read target document {path}: {source}")]
    DocumentRead {
        /// Path to the target document
        path: PathBuf,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// Target document could not be written
    #[error("failed to write target document {path}: {source}")]
    DocumentWrite {
        /// Path to the target document
        path: PathBuf,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// Start marker line is absent from the target document
    #[error("start marker `{marker}` not found in {path}")]
    StartMarkerMissing {
        /// The marker that was searched for
        marker: String,
        /// Path to the target document
        path: PathBuf,
    },

    /// Start marker was found but no end marker follows it
    #[error("end marker `{marker}` not found in {path}; the replacement region is unbounded")]
    EndMarkerMissing {
        /// The marker that was searched for
        marker: String,
        /// Path to the target document
        path: PathBuf,
    },
}

impl TableroError {
    /// Create a malformed-data error
    #[must_use]
    pub fn malformed(path: impl Into<PathBuf>, line: usize, message: impl Into<String>) -> Self {
        Self::DataMalformed {
            path: path.into(),
            line,
            message: message.into(),
        }
    }

    /// Create an empty-dataset error
    #[must_use]
    pub fn empty_dataset(path: impl Into<PathBuf>) -> Self {
        Self::EmptyDataset { path: path.into() }
    }

    /// Create a start-marker-missing error
    #[must_use]
    pub fn start_marker_missing(marker: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self::StartMarkerMissing {
            marker: marker.into(),
            path: path.into(),
        }
    }

    /// Create an end-marker-missing error
    #[must_use]
    pub fn end_marker_missing(marker: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self::EndMarkerMissing {
            marker: marker.into(),
            path: path.into(),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn test_malformed_error_message() {
        let err = TableroError::malformed("data.csv", 3, "expected 4 fields, got 2");
        let msg = err.to_string();
        assert!(msg.contains("data.csv"));
        assert!(msg.contains("line 3"));
        assert!(msg.contains("expected 4 fields"));
    }

    #[test]
    fn test_empty_dataset_message() {
        let err = TableroError::empty_dataset("data.csv");
        assert!(err.to_string().contains("no rows"));
    }

    #[test]
    fn test_start_marker_missing_message() {
        let err = TableroError::start_marker_missing("<!-- START_TABLE -->", "README.md");
        let msg = err.to_string();
        assert!(msg.contains("start marker"));
        assert!(msg.contains("<!-- START_TABLE -->"));
        assert!(msg.contains("README.md"));
    }

    #[test]
    fn test_end_marker_missing_message() {
        let err = TableroError::end_marker_missing("<!-- END_TABLE -->", "README.md");
        let msg = err.to_string();
        assert!(msg.contains("end marker"));
        assert!(msg.contains("<!-- END_TABLE -->"));
        assert!(msg.contains("README.md"));
    }

    #[test]
    fn test_data_read_wraps_io_error() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "no such file");
        let err = TableroError::DataRead {
            path: PathBuf::from("missing.csv"),
            source: io,
        };
        let msg = err.to_string();
        assert!(msg.contains("missing.csv"));
        assert!(msg.contains("no such file"));
    }
}
