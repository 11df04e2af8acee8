//! Partner stores module - domain models.

mod partners_model;

pub use partners_model::{NewPartner, Partner, PartnerUpdate};
