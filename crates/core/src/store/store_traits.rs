use async_trait::async_trait;

use crate::errors::Result;

/// A record held by a collection store.
///
/// Every record carries an opaque string identifier, unique within its
/// collection, assigned at create time and immutable afterwards.
///
/// `Patch` is the all-optional variant of the record used for partial
/// updates: fields present in the patch overwrite, absent fields keep their
/// prior value. This keeps the merge-on-update contract type-checked while
/// staying permissive about which fields a caller sends.
pub trait Record: Clone + Send + Sync {
    /// All-optional update payload for this record type.
    type Patch: Clone + Send + Sync;

    fn id(&self) -> &str;

    fn set_id(&mut self, id: String);

    /// Merges `patch` onto `self`, field by field.
    fn apply(&mut self, patch: Self::Patch);
}

/// Durable CRUD over one homogeneous collection under one storage namespace.
///
/// Reads return synchronous snapshots; mutations are async-signatured but
/// run to completion before returning, so two operations on one store never
/// interleave. Identifier misses are signalled as `None`/`false`, never as
/// errors; the only failures a store may raise come from persistence.
///
/// Stores perform no validation: structurally arbitrary field values are
/// accepted and persisted as-is. Cross-entity references are plain id
/// strings with no integrity enforcement (deleting a client does not touch
/// its contracts, movements, or quotes).
#[async_trait]
pub trait CollectionStoreTrait<T: Record>: Send + Sync {
    /// Returns the full collection snapshot, in insertion order.
    fn list(&self) -> Result<Vec<T>>;

    /// Returns the record whose identifier equals `id`, or `None`.
    fn get(&self, id: &str) -> Result<Option<T>>;

    /// Assigns a fresh identifier to `record`, appends it, and persists the
    /// whole collection. Returns the stored record, id included.
    async fn create(&self, record: T) -> Result<T>;

    /// Merges `patch` onto the record with `id` and persists. Returns
    /// `None` without persisting when no record matches.
    async fn update(&self, id: &str, patch: T::Patch) -> Result<Option<T>>;

    /// Removes the record with `id` and persists the reduced collection.
    /// Returns `false` without persisting when no record matches.
    async fn delete(&self, id: &str) -> Result<bool>;
}
