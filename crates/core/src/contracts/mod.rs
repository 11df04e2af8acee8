//! Service contracts module - domain models.

mod contracts_model;

#[cfg(test)]
mod contracts_model_tests;

pub use contracts_model::{Contract, ContractStatus, ContractUpdate, NewContract, ServiceType};
