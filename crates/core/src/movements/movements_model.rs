//! Point/mile movement domain models.
//!
//! Movements are tied to a program and optionally a partner store. The
//! derived financial fields (paid value, discount, invested value, total
//! savings) are caller-supplied and may be absent; aggregations treat
//! absent values as zero.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::store::Record;

/// Kind of balance a movement touches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum CurrencyKind {
    #[default]
    Miles,
    Points,
    Cash,
    Coupon,
    Cashback,
}

/// Operation performed by a movement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum OperationType {
    #[default]
    Purchase,
    Sale,
    Transfer,
    Exchange,
    SmartPurchase,
    Bonus,
    Adjustment,
}

impl OperationType {
    /// All operation types, in display order.
    pub const ALL: [OperationType; 7] = [
        OperationType::Purchase,
        OperationType::Sale,
        OperationType::Transfer,
        OperationType::Exchange,
        OperationType::SmartPurchase,
        OperationType::Bonus,
        OperationType::Adjustment,
    ];

    /// Human-readable label, used by search and export.
    pub fn label(&self) -> &'static str {
        match self {
            OperationType::Purchase => "Purchase",
            OperationType::Sale => "Sale",
            OperationType::Transfer => "Transfer",
            OperationType::Exchange => "Exchange",
            OperationType::SmartPurchase => "Smart Purchase",
            OperationType::Bonus => "Bonus",
            OperationType::Adjustment => "Adjustment",
        }
    }
}

/// Domain model representing one point/mile movement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Movement {
    pub id: String,
    pub date: NaiveDate,
    pub currency_kind: CurrencyKind,
    pub quantity: i64,
    /// Plain reference to `Program::id`; not integrity-enforced.
    pub program_id: String,
    pub operation_type: OperationType,
    /// Plain reference to `Partner::id`, when the movement happened at a
    /// partner store.
    pub partner_id: Option<String>,
    /// Label of the product the movement was redeemed against.
    pub product_label: Option<String>,
    pub product_value: Option<Decimal>,
    /// Conversion factor applied at the partner, e.g. "10x1" or "5%".
    pub conversion_factor: Option<String>,
    pub paid_value: Option<Decimal>,
    pub discount_value: Option<Decimal>,
    pub invested_value: Option<Decimal>,
    pub total_savings: Option<Decimal>,
}

/// Input model for recording a new movement.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewMovement {
    pub date: NaiveDate,
    pub currency_kind: CurrencyKind,
    pub quantity: i64,
    pub program_id: String,
    pub operation_type: OperationType,
    pub partner_id: Option<String>,
    pub product_label: Option<String>,
    pub product_value: Option<Decimal>,
    pub conversion_factor: Option<String>,
    pub paid_value: Option<Decimal>,
    pub discount_value: Option<Decimal>,
    pub invested_value: Option<Decimal>,
    pub total_savings: Option<Decimal>,
}

impl From<NewMovement> for Movement {
    fn from(new: NewMovement) -> Self {
        Movement {
            id: String::new(),
            date: new.date,
            currency_kind: new.currency_kind,
            quantity: new.quantity,
            program_id: new.program_id,
            operation_type: new.operation_type,
            partner_id: new.partner_id,
            product_label: new.product_label,
            product_value: new.product_value,
            conversion_factor: new.conversion_factor,
            paid_value: new.paid_value,
            discount_value: new.discount_value,
            invested_value: new.invested_value,
            total_savings: new.total_savings,
        }
    }
}

/// All-optional update payload for a movement.
///
/// Nullable fields use a double `Option`: the outer level distinguishes
/// "leave untouched" from "set", the inner one allows clearing.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MovementUpdate {
    pub date: Option<NaiveDate>,
    pub currency_kind: Option<CurrencyKind>,
    pub quantity: Option<i64>,
    pub program_id: Option<String>,
    pub operation_type: Option<OperationType>,
    #[serde(default)]
    pub partner_id: Option<Option<String>>,
    #[serde(default)]
    pub product_label: Option<Option<String>>,
    #[serde(default)]
    pub product_value: Option<Option<Decimal>>,
    #[serde(default)]
    pub conversion_factor: Option<Option<String>>,
    #[serde(default)]
    pub paid_value: Option<Option<Decimal>>,
    #[serde(default)]
    pub discount_value: Option<Option<Decimal>>,
    #[serde(default)]
    pub invested_value: Option<Option<Decimal>>,
    #[serde(default)]
    pub total_savings: Option<Option<Decimal>>,
}

impl Record for Movement {
    type Patch = MovementUpdate;

    fn id(&self) -> &str {
        &self.id
    }

    fn set_id(&mut self, id: String) {
        self.id = id;
    }

    fn apply(&mut self, patch: MovementUpdate) {
        if let Some(date) = patch.date {
            self.date = date;
        }
        if let Some(currency_kind) = patch.currency_kind {
            self.currency_kind = currency_kind;
        }
        if let Some(quantity) = patch.quantity {
            self.quantity = quantity;
        }
        if let Some(program_id) = patch.program_id {
            self.program_id = program_id;
        }
        if let Some(operation_type) = patch.operation_type {
            self.operation_type = operation_type;
        }
        if let Some(partner_id) = patch.partner_id {
            self.partner_id = partner_id;
        }
        if let Some(product_label) = patch.product_label {
            self.product_label = product_label;
        }
        if let Some(product_value) = patch.product_value {
            self.product_value = product_value;
        }
        if let Some(conversion_factor) = patch.conversion_factor {
            self.conversion_factor = conversion_factor;
        }
        if let Some(paid_value) = patch.paid_value {
            self.paid_value = paid_value;
        }
        if let Some(discount_value) = patch.discount_value {
            self.discount_value = discount_value;
        }
        if let Some(invested_value) = patch.invested_value {
            self.invested_value = invested_value;
        }
        if let Some(total_savings) = patch.total_savings {
            self.total_savings = total_savings;
        }
    }
}
