//! Generic persisted-collection contract shared by every entity collection.

mod store_traits;

pub use store_traits::{CollectionStoreTrait, Record};
