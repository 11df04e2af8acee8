//! Partner store domain models.

use serde::{Deserialize, Serialize};

use crate::store::Record;

/// Domain model representing a partner store where points are earned or
/// redeemed. Referenced by movements through `partner_id`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Partner {
    pub id: String,
    pub title: String,
}

/// Input model for registering a new partner store.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewPartner {
    pub title: String,
}

impl From<NewPartner> for Partner {
    fn from(new: NewPartner) -> Self {
        Partner {
            id: String::new(),
            title: new.title,
        }
    }
}

/// All-optional update payload for a partner store.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PartnerUpdate {
    pub title: Option<String>,
}

impl Record for Partner {
    type Patch = PartnerUpdate;

    fn id(&self) -> &str {
        &self.id
    }

    fn set_id(&mut self, id: String) {
        self.id = id;
    }

    fn apply(&mut self, patch: PartnerUpdate) {
        if let Some(title) = patch.title {
            self.title = title;
        }
    }
}
