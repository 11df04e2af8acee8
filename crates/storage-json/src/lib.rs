//! JSON file storage implementation for Milefolio.
//!
//! This crate implements the collection-store contract defined in
//! `milefolio-core`. Persistence is deliberately simple, standing in for a
//! future backend: one namespace maps to one `<namespace>.json` file
//! holding that collection's full record array, rewritten wholesale on
//! every mutation. There is no partial persistence, no batching, and no
//! validation of what gets stored.
//!
//! This crate is the only place in the workspace that touches the
//! filesystem; everything else works with the store trait.

pub mod context;
pub mod errors;
pub mod store;

pub use context::open_context;
pub use errors::StorageError;
pub use store::JsonCollectionStore;

// Re-export from milefolio-core for convenience
pub use milefolio_core::errors::{Error, Result};
