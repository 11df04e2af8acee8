//! JSON-file-backed implementation of the collection store.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::RwLock;

use async_trait::async_trait;
use log::debug;
use serde::de::DeserializeOwned;
use serde::Serialize;
use uuid::Uuid;

use milefolio_core::errors::Result;
use milefolio_core::store::{CollectionStoreTrait, Record};

use crate::errors::StorageError;

/// Durable CRUD over one entity collection, persisted as a single JSON
/// array under `<data_dir>/<namespace>.json`.
///
/// Every mutation rewrites the file wholesale while holding the write
/// lock, so concurrent callers are serialized per namespace. Mutations
/// persist a candidate collection and only commit it in memory once the
/// write succeeds; a failed write leaves the live collection unchanged.
pub struct JsonCollectionStore<T> {
    namespace: String,
    path: PathBuf,
    records: RwLock<Vec<T>>,
}

impl<T> JsonCollectionStore<T>
where
    T: Record + Serialize + DeserializeOwned,
{
    /// Opens the store for `namespace` under `data_dir`.
    ///
    /// Existing persisted state wins over `seed`; either way the resulting
    /// collection is persisted immediately, so a never-before-seen
    /// namespace becomes durable on first construction.
    pub fn open(data_dir: &Path, namespace: &str, seed: Vec<T>) -> Result<Self> {
        let path = data_dir.join(format!("{namespace}.json"));
        let records = if path.exists() {
            let contents = fs::read_to_string(&path).map_err(StorageError::from)?;
            serde_json::from_str(&contents).map_err(StorageError::from)?
        } else {
            seed
        };

        let store = JsonCollectionStore {
            namespace: namespace.to_string(),
            path,
            records: RwLock::new(records),
        };
        store.persist(&store.records.read().unwrap())?;
        Ok(store)
    }

    /// Serializes the full collection and overwrites the namespace file.
    fn persist(&self, records: &[T]) -> Result<()> {
        let contents = serde_json::to_vec_pretty(records).map_err(StorageError::from)?;
        fs::write(&self.path, contents).map_err(StorageError::from)?;
        debug!(
            "persisted {} records under namespace '{}'",
            records.len(),
            self.namespace
        );
        Ok(())
    }
}

#[async_trait]
impl<T> CollectionStoreTrait<T> for JsonCollectionStore<T>
where
    T: Record + Serialize + DeserializeOwned + 'static,
{
    fn list(&self) -> Result<Vec<T>> {
        Ok(self.records.read().unwrap().clone())
    }

    fn get(&self, id: &str) -> Result<Option<T>> {
        Ok(self
            .records
            .read()
            .unwrap()
            .iter()
            .find(|record| record.id() == id)
            .cloned())
    }

    async fn create(&self, mut record: T) -> Result<T> {
        record.set_id(Uuid::new_v4().to_string());

        let mut records = self.records.write().unwrap();
        let mut candidate = records.clone();
        candidate.push(record.clone());
        self.persist(&candidate)?;
        *records = candidate;
        Ok(record)
    }

    async fn update(&self, id: &str, patch: T::Patch) -> Result<Option<T>> {
        let mut records = self.records.write().unwrap();
        match records.iter().position(|record| record.id() == id) {
            Some(index) => {
                let mut candidate = records.clone();
                candidate[index].apply(patch);
                let updated = candidate[index].clone();
                self.persist(&candidate)?;
                *records = candidate;
                Ok(Some(updated))
            }
            None => Ok(None),
        }
    }

    async fn delete(&self, id: &str) -> Result<bool> {
        let mut records = self.records.write().unwrap();
        let mut candidate = records.clone();
        candidate.retain(|record| record.id() != id);
        if candidate.len() < records.len() {
            self.persist(&candidate)?;
            *records = candidate;
            Ok(true)
        } else {
            Ok(false)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use milefolio_core::clients::{Client, ClientStatus, ClientUpdate, NewClient};
    use tempfile::TempDir;

    fn new_client(name: &str) -> Client {
        Client::from(NewClient {
            name: name.to_string(),
            contract_number: "C001".to_string(),
            start_date: NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(),
            end_date: NaiveDate::from_ymd_opt(2025, 12, 31).unwrap(),
            status: ClientStatus::Active,
            points_balance: 0,
            miles_balance: 0,
        })
    }

    fn open_store(dir: &TempDir, seed: Vec<Client>) -> JsonCollectionStore<Client> {
        JsonCollectionStore::open(dir.path(), "clients", seed).unwrap()
    }

    /// `list()` of a reopened store over the same namespace, used to check
    /// persistence round-trip fidelity.
    fn reloaded(dir: &TempDir) -> Vec<Client> {
        open_store(dir, Vec::new()).list().unwrap()
    }

    #[tokio::test]
    async fn test_create_then_get_returns_equal_record() {
        let dir = TempDir::new().unwrap();
        let store = open_store(&dir, Vec::new());

        let created = store.create(new_client("Ana")).await.unwrap();
        assert!(!created.id.is_empty());

        let fetched = store.get(&created.id).unwrap();
        assert_eq!(fetched, Some(created));
    }

    #[tokio::test]
    async fn test_created_ids_are_unique() {
        let dir = TempDir::new().unwrap();
        let store = open_store(&dir, Vec::new());

        let a = store.create(new_client("Ana")).await.unwrap();
        let b = store.create(new_client("Bruno")).await.unwrap();
        assert_ne!(a.id, b.id);
    }

    #[tokio::test]
    async fn test_persistence_round_trip_after_each_mutation() {
        let dir = TempDir::new().unwrap();
        let store = open_store(&dir, Vec::new());

        let ana = store.create(new_client("Ana")).await.unwrap();
        let bruno = store.create(new_client("Bruno")).await.unwrap();
        assert_eq!(reloaded(&dir), store.list().unwrap());

        store
            .update(
                &ana.id,
                ClientUpdate {
                    status: Some(ClientStatus::Inactive),
                    ..Default::default()
                },
            )
            .await
            .unwrap();
        assert_eq!(reloaded(&dir), store.list().unwrap());

        assert!(store.delete(&bruno.id).await.unwrap());
        assert_eq!(reloaded(&dir), store.list().unwrap());
    }

    #[tokio::test]
    async fn test_list_preserves_insertion_order_across_reload() {
        let dir = TempDir::new().unwrap();
        let store = open_store(&dir, Vec::new());

        for name in ["Ana", "Bruno", "Carla"] {
            store.create(new_client(name)).await.unwrap();
        }

        let names: Vec<_> = reloaded(&dir).into_iter().map(|c| c.name).collect();
        assert_eq!(names, vec!["Ana", "Bruno", "Carla"]);
    }

    #[tokio::test]
    async fn test_empty_patch_leaves_record_unchanged() {
        let dir = TempDir::new().unwrap();
        let store = open_store(&dir, Vec::new());

        let ana = store.create(new_client("Ana")).await.unwrap();
        let updated = store
            .update(&ana.id, ClientUpdate::default())
            .await
            .unwrap();
        assert_eq!(updated, Some(ana));
    }

    #[tokio::test]
    async fn test_update_unknown_id_is_not_found_and_has_no_side_effects() {
        let dir = TempDir::new().unwrap();
        let store = open_store(&dir, Vec::new());
        store.create(new_client("Ana")).await.unwrap();
        let before = store.list().unwrap();

        let result = store
            .update(
                "missing",
                ClientUpdate {
                    name: Some("Nobody".to_string()),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        assert_eq!(result, None);
        assert_eq!(store.list().unwrap(), before);
        assert_eq!(reloaded(&dir), before);
    }

    #[tokio::test]
    async fn test_delete_unknown_id_fails_without_persisting() {
        let dir = TempDir::new().unwrap();
        let store = open_store(&dir, Vec::new());
        store.create(new_client("Ana")).await.unwrap();
        let before = store.list().unwrap();

        assert!(!store.delete("missing").await.unwrap());
        assert_eq!(store.list().unwrap(), before);
        assert_eq!(reloaded(&dir), before);
    }

    #[tokio::test]
    async fn test_seed_is_adopted_and_persisted_on_first_open() {
        let dir = TempDir::new().unwrap();
        let mut seeded = new_client("Ana");
        seeded.id = "seed-1".to_string();

        let store = open_store(&dir, vec![seeded.clone()]);
        assert_eq!(store.list().unwrap(), vec![seeded.clone()]);

        // The seed became durable on construction, before any mutation.
        assert_eq!(reloaded(&dir), vec![seeded]);
    }

    #[tokio::test]
    async fn test_existing_state_wins_over_seed() {
        let dir = TempDir::new().unwrap();
        let store = open_store(&dir, Vec::new());
        let ana = store.create(new_client("Ana")).await.unwrap();
        drop(store);

        let mut other = new_client("Bruno");
        other.id = "seed-1".to_string();
        let reopened = open_store(&dir, vec![other]);
        assert_eq!(reopened.list().unwrap(), vec![ana]);
    }

    #[tokio::test]
    async fn test_failed_persist_rolls_back_the_mutation() {
        let dir = TempDir::new().unwrap();
        let store = open_store(&dir, Vec::new());
        let ana = store.create(new_client("Ana")).await.unwrap();
        let before = store.list().unwrap();

        // Make the namespace file unwritable by turning it into a directory.
        let path = dir.path().join("clients.json");
        fs::remove_file(&path).unwrap();
        fs::create_dir(&path).unwrap();

        assert!(store.create(new_client("Bruno")).await.is_err());
        assert!(store
            .update(
                &ana.id,
                ClientUpdate {
                    status: Some(ClientStatus::Inactive),
                    ..Default::default()
                },
            )
            .await
            .is_err());
        assert!(store.delete(&ana.id).await.is_err());

        // The live collection still matches the last durable state.
        assert_eq!(store.list().unwrap(), before);
        assert_eq!(store.get(&ana.id).unwrap(), Some(ana));
    }

    #[tokio::test]
    async fn test_get_unknown_id_is_none() {
        let dir = TempDir::new().unwrap();
        let store = open_store(&dir, Vec::new());
        assert_eq!(store.get("missing").unwrap(), None);
    }
}
