//! Storage-specific error types for snapshot loading.
//!
//! These errors are converted to `folio_core::Error` before being returned
//! to callers.

use folio_core::errors::{Error, SnapshotError};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("Failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to deserialize snapshot: {0}")]
    Deserialize(#[from] serde_json::Error),
}

impl From<StorageError> for Error {
    fn from(err: StorageError) -> Self {
        match err {
            StorageError::Io { path, source } => Error::Snapshot(SnapshotError::Io {
                path,
                reason: source.to_string(),
            }),
            StorageError::Deserialize(e) => Error::Snapshot(SnapshotError::Parse(e.to_string())),
        }
    }
}
