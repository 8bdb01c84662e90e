//! Storage-specific error types.

use std::path::PathBuf;

/// Errors that can occur while reading or writing durable records.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// Failed to read a record file
    #[error("Failed to read {path}: {source}")]
    ReadFailed {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Failed to write a record file
    #[error("Failed to write {path}: {source}")]
    WriteFailed {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Failed to create the storage directory
    #[error("Failed to create storage directory {path}: {source}")]
    CreateDirectoryFailed {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Failed to find the platform data directory
    #[error("Failed to find data directory")]
    DataDirectoryNotFound,

    /// Failed to serialize a record
    #[error("Failed to serialize record: {0}")]
    SerializationFailed(String),
}
