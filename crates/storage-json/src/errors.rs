//! Storage-specific error types for the JSON file store.
//!
//! These wrap I/O and JSON errors and are converted to the storage-agnostic
//! `milefolio_core::Error` before being returned to callers.

use milefolio_core::errors::Error;
use thiserror::Error;

/// Errors internal to the storage layer.
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("failed to access namespace file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to serialize namespace contents: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl From<StorageError> for Error {
    fn from(err: StorageError) -> Self {
        match err {
            StorageError::Io(e) => Error::Storage(e.to_string()),
            StorageError::Serialization(e) => Error::Serialization(e.to_string()),
        }
    }
}
