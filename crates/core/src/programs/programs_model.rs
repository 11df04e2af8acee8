//! Loyalty program domain models.

use serde::{Deserialize, Serialize};

use crate::store::Record;

/// What kind of balance a program accumulates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ProgramCategory {
    #[default]
    Miles,
    Points,
    Cashback,
}

/// Market segment the program belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ProgramSubcategory {
    #[default]
    Airline,
    Banking,
    Marketplace,
    Card,
}

/// Domain model representing a loyalty program.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Program {
    pub id: String,
    pub name: String,
    pub category: ProgramCategory,
    pub subcategory: ProgramSubcategory,
    /// Free-text conversion rule, e.g. "1000 miles = R$ 20,00".
    pub conversion_rule: String,
}

/// Input model for registering a new program.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewProgram {
    pub name: String,
    pub category: ProgramCategory,
    pub subcategory: ProgramSubcategory,
    pub conversion_rule: String,
}

impl From<NewProgram> for Program {
    fn from(new: NewProgram) -> Self {
        Program {
            id: String::new(),
            name: new.name,
            category: new.category,
            subcategory: new.subcategory,
            conversion_rule: new.conversion_rule,
        }
    }
}

/// All-optional update payload for a program.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgramUpdate {
    pub name: Option<String>,
    pub category: Option<ProgramCategory>,
    pub subcategory: Option<ProgramSubcategory>,
    pub conversion_rule: Option<String>,
}

impl Record for Program {
    type Patch = ProgramUpdate;

    fn id(&self) -> &str {
        &self.id
    }

    fn set_id(&mut self, id: String) {
        self.id = id;
    }

    fn apply(&mut self, patch: ProgramUpdate) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(category) = patch.category {
            self.category = category;
        }
        if let Some(subcategory) = patch.subcategory {
            self.subcategory = subcategory;
        }
        if let Some(conversion_rule) = patch.conversion_rule {
            self.conversion_rule = conversion_rule;
        }
    }
}
