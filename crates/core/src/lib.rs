//! Milefolio Core - domain entities, store contract, and report views.
//!
//! This crate contains the business core of the Milefolio loyalty-points
//! brokerage back office. It is storage-agnostic: the collection-store
//! contract defined in [`store`] is implemented by the `storage-json` crate.
//!
//! ```text
//! core (domain, reports, export)
//!        │
//!        ▼
//! storage-json (persistence)
//!        │
//!        ▼
//! one JSON file per entity namespace
//! ```

pub mod clients;
pub mod constants;
pub mod context;
pub mod contracts;
pub mod errors;
pub mod export;
pub mod goals;
pub mod movements;
pub mod partners;
pub mod products;
pub mod programs;
pub mod quotes;
pub mod reports;
pub mod store;

// Re-export the registry and error types
pub use context::ServiceContext;
pub use errors::Error;
pub use errors::Result;
