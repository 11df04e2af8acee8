//! Accumulation goal domain models.

use serde::{Deserialize, Serialize};

use crate::store::Record;

/// Domain model representing an accumulation goal for one program.
///
/// `program_label` is free text matched against program names for display,
/// not a strict reference.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Goal {
    pub id: String,
    pub program_label: String,
    pub required_quantity: i64,
    pub current_quantity: i64,
}

/// Input model for creating a new goal.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewGoal {
    pub program_label: String,
    pub required_quantity: i64,
    pub current_quantity: i64,
}

impl From<NewGoal> for Goal {
    fn from(new: NewGoal) -> Self {
        Goal {
            id: String::new(),
            program_label: new.program_label,
            required_quantity: new.required_quantity,
            current_quantity: new.current_quantity,
        }
    }
}

/// All-optional update payload for a goal.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GoalUpdate {
    pub program_label: Option<String>,
    pub required_quantity: Option<i64>,
    pub current_quantity: Option<i64>,
}

impl Record for Goal {
    type Patch = GoalUpdate;

    fn id(&self) -> &str {
        &self.id
    }

    fn set_id(&mut self, id: String) {
        self.id = id;
    }

    fn apply(&mut self, patch: GoalUpdate) {
        if let Some(program_label) = patch.program_label {
            self.program_label = program_label;
        }
        if let Some(required_quantity) = patch.required_quantity {
            self.required_quantity = required_quantity;
        }
        if let Some(current_quantity) = patch.current_quantity {
            self.current_quantity = current_quantity;
        }
    }
}
