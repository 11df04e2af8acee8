//! Shared constants: storage namespaces and display placeholders.

/// Placeholder rendered when a cross-entity reference cannot be resolved.
pub const NOT_AVAILABLE: &str = "N/A";

/// Storage namespace keys, one per entity collection. No two collections
/// share a namespace; each store exclusively owns its persisted array.
pub const PROGRAMS_NAMESPACE: &str = "programs";
pub const PRODUCTS_NAMESPACE: &str = "products";
pub const PARTNERS_NAMESPACE: &str = "partners";
pub const CLIENTS_NAMESPACE: &str = "clients";
pub const CONTRACTS_NAMESPACE: &str = "contracts";
pub const MOVEMENTS_NAMESPACE: &str = "movements";
pub const QUOTES_NAMESPACE: &str = "quotes";
pub const GOALS_NAMESPACE: &str = "goals";
