//! Wires one JSON store per entity namespace into a service context.

use std::path::Path;
use std::sync::Arc;

use milefolio_core::constants::{
    CLIENTS_NAMESPACE, CONTRACTS_NAMESPACE, GOALS_NAMESPACE, MOVEMENTS_NAMESPACE,
    PARTNERS_NAMESPACE, PRODUCTS_NAMESPACE, PROGRAMS_NAMESPACE, QUOTES_NAMESPACE,
};
use milefolio_core::errors::Result;
use milefolio_core::ServiceContext;

use crate::store::JsonCollectionStore;

/// Builds the full service context over `data_dir`: one store per entity
/// namespace, each starting from an empty seed. Meant to be called once at
/// process start; the returned context is shared by reference from there.
pub fn open_context(data_dir: &Path) -> Result<ServiceContext> {
    Ok(ServiceContext {
        programs: Arc::new(JsonCollectionStore::open(
            data_dir,
            PROGRAMS_NAMESPACE,
            Vec::new(),
        )?),
        products: Arc::new(JsonCollectionStore::open(
            data_dir,
            PRODUCTS_NAMESPACE,
            Vec::new(),
        )?),
        partners: Arc::new(JsonCollectionStore::open(
            data_dir,
            PARTNERS_NAMESPACE,
            Vec::new(),
        )?),
        clients: Arc::new(JsonCollectionStore::open(
            data_dir,
            CLIENTS_NAMESPACE,
            Vec::new(),
        )?),
        contracts: Arc::new(JsonCollectionStore::open(
            data_dir,
            CONTRACTS_NAMESPACE,
            Vec::new(),
        )?),
        movements: Arc::new(JsonCollectionStore::open(
            data_dir,
            MOVEMENTS_NAMESPACE,
            Vec::new(),
        )?),
        quotes: Arc::new(JsonCollectionStore::open(
            data_dir,
            QUOTES_NAMESPACE,
            Vec::new(),
        )?),
        goals: Arc::new(JsonCollectionStore::open(
            data_dir,
            GOALS_NAMESPACE,
            Vec::new(),
        )?),
    })
}
