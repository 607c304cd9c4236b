//! Error types for asset ingestion.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading asset records.
#[derive(Debug, Error)]
pub enum IngestError {
    // === File System Errors ===
    /// Input file not found.
    #[error("file not found: {path}")]
    FileNotFound { path: PathBuf },

    /// Failed to read file.
    #[error("failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// File exceeds the size limit.
    #[error("file {path} is too large ({size} bytes, limit {max_size} bytes)")]
    FileTooLarge {
        path: PathBuf,
        size: u64,
        max_size: u64,
    },

    /// File is not UTF-8.
    #[error("unsupported encoding {encoding} in {path}")]
    UnsupportedEncoding {
        path: PathBuf,
        encoding: &'static str,
    },

    /// Extension is neither `.csv` nor `.json`.
    #[error("unsupported file type for {path}: expected .csv or .json")]
    UnsupportedFormat { path: PathBuf },

    // === CSV Errors ===
    /// Malformed CSV content.
    #[error("failed to parse CSV {path} at line {line}: {source}")]
    CsvParse {
        path: PathBuf,
        line: u64,
        #[source]
        source: csv::Error,
    },

    /// CSV has no header row.
    #[error("CSV file is empty: {path}")]
    EmptyCsv { path: PathBuf },

    /// No column maps to the asset tag.
    #[error("no asset tag column found in {path} (headers: {headers})")]
    MissingTagColumn { path: PathBuf, headers: String },

    // === JSON Errors ===
    /// Malformed JSON or asset objects of the wrong shape.
    #[error("failed to parse JSON {path}: {source}")]
    JsonParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// JSON document is neither an asset array nor an object with `assets`.
    #[error("unexpected JSON layout in {path}: {reason}")]
    JsonLayout { path: PathBuf, reason: String },
}

impl IngestError {
    pub(crate) fn read(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        if source.kind() == std::io::ErrorKind::NotFound {
            Self::FileNotFound { path }
        } else {
            Self::FileRead { path, source }
        }
    }
}

/// Result type for ingestion operations.
pub type Result<T> = std::result::Result<T, IngestError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = IngestError::FileNotFound {
            path: PathBuf::from("/path/to/assets.csv"),
        };
        assert_eq!(err.to_string(), "file not found: /path/to/assets.csv");
    }

    #[test]
    fn test_read_maps_not_found() {
        let err = IngestError::read(
            "missing.csv",
            std::io::Error::from(std::io::ErrorKind::NotFound),
        );
        assert!(matches!(err, IngestError::FileNotFound { .. }));

        let err = IngestError::read(
            "locked.csv",
            std::io::Error::from(std::io::ErrorKind::PermissionDenied),
        );
        assert!(matches!(err, IngestError::FileRead { .. }));
    }
}
