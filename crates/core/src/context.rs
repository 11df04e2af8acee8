//! Explicit service registry, one store per entity namespace.
//!
//! The registry is an explicit struct built once at process start (by the
//! storage crate) and passed to consumers, keeping
//! single-instance-per-namespace semantics without hidden global state.

use std::sync::Arc;

use crate::clients::Client;
use crate::contracts::Contract;
use crate::goals::Goal;
use crate::movements::Movement;
use crate::partners::Partner;
use crate::products::Product;
use crate::programs::Program;
use crate::quotes::Quote;
use crate::store::CollectionStoreTrait;

/// One store per entity collection. Each store exclusively owns its
/// in-memory collection and its persisted twin; all access goes through
/// the store operations.
#[derive(Clone)]
pub struct ServiceContext {
    pub programs: Arc<dyn CollectionStoreTrait<Program>>,
    pub products: Arc<dyn CollectionStoreTrait<Product>>,
    pub partners: Arc<dyn CollectionStoreTrait<Partner>>,
    pub clients: Arc<dyn CollectionStoreTrait<Client>>,
    pub contracts: Arc<dyn CollectionStoreTrait<Contract>>,
    pub movements: Arc<dyn CollectionStoreTrait<Movement>>,
    pub quotes: Arc<dyn CollectionStoreTrait<Quote>>,
    pub goals: Arc<dyn CollectionStoreTrait<Goal>>,
}
