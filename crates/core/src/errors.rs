//! Core error types for the Milefolio back office.
//!
//! This module defines storage-agnostic error types. Storage-specific
//! errors (I/O, JSON) are converted to these types by the storage layer.
//!
//! "Not found" is deliberately not an error anywhere in the core: lookups
//! return `Option` and deletes return `bool`, matching the store contract.

use thiserror::Error;

/// Type alias for Result using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Root error type for the back-office core.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Storage operation failed: {0}")]
    Storage(String),

    #[error("Serialization failed: {0}")]
    Serialization(String),

    #[error("CSV export failed: {0}")]
    Export(#[from] ExportError),

    #[error("Unexpected error: {0}")]
    Unexpected(String),
}

/// Errors raised by the CSV export collaborator.
#[derive(Error, Debug)]
pub enum ExportError {
    /// The caller asked to export an empty collection. Surfaced to the user
    /// as a "nothing to export" notice; no file is produced.
    #[error("there is no data to export")]
    NothingToExport,

    #[error("records could not be serialized for export: {0}")]
    Serialization(String),

    #[error("failed to write CSV output: {0}")]
    Write(String),
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Serialization(err.to_string())
    }
}
