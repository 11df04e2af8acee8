//! Point/mile movements module - domain models.

mod movements_model;

#[cfg(test)]
mod movements_model_tests;

pub use movements_model::{CurrencyKind, Movement, MovementUpdate, NewMovement, OperationType};
