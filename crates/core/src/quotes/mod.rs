//! Travel quotes module - domain models.

mod quotes_model;

pub use quotes_model::{NewQuote, Quote, QuoteStatus, QuoteUpdate};
