//! Product catalog module - domain models.

mod products_model;

pub use products_model::{NewProduct, Product, ProductUpdate};
