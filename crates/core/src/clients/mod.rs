//! Clients module - domain models.

mod clients_model;

pub use clients_model::{Client, ClientStatus, ClientUpdate, NewClient};
