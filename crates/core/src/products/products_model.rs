//! Product catalog domain models.
//!
//! Products are a standalone catalog; nothing else references them.

use serde::{Deserialize, Serialize};

use crate::store::Record;

/// Domain model representing a redeemable product category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: String,
    pub title: String,
}

/// Input model for registering a new product.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewProduct {
    pub title: String,
}

impl From<NewProduct> for Product {
    fn from(new: NewProduct) -> Self {
        Product {
            id: String::new(),
            title: new.title,
        }
    }
}

/// All-optional update payload for a product.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductUpdate {
    pub title: Option<String>,
}

impl Record for Product {
    type Patch = ProductUpdate;

    fn id(&self) -> &str {
        &self.id
    }

    fn set_id(&mut self, id: String) {
        self.id = id;
    }

    fn apply(&mut self, patch: ProductUpdate) {
        if let Some(title) = patch.title {
            self.title = title;
        }
    }
}
