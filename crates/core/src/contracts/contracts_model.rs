//! Service contract domain models.

use chrono::{NaiveDate, NaiveDateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::store::Record;

/// Lifecycle status of a contract.
///
/// A closed enumeration, but no transition rules are enforced: any status
/// may be set to any other through an update.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ContractStatus {
    #[default]
    Active,
    Inactive,
    Suspended,
    Expired,
}

impl ContractStatus {
    /// All statuses, in display order.
    pub const ALL: [ContractStatus; 4] = [
        ContractStatus::Active,
        ContractStatus::Inactive,
        ContractStatus::Suspended,
        ContractStatus::Expired,
    ];
}

/// Kind of service sold under a contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ServiceType {
    MilesManagement,
    Consulting,
    Premium,
    #[default]
    Basic,
}

/// Domain model representing a service contract with a client.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Contract {
    pub id: String,
    pub contract_number: String,
    /// Plain reference to `Client::id`; not integrity-enforced.
    pub client_id: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub status: ContractStatus,
    pub service_type: ServiceType,
    pub monthly_fee: Decimal,
    /// Commission percentage taken on brokered transactions.
    pub commission_rate: Decimal,
    pub notes: Option<String>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Input model for registering a new contract.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewContract {
    pub contract_number: String,
    pub client_id: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub status: ContractStatus,
    pub service_type: ServiceType,
    pub monthly_fee: Decimal,
    pub commission_rate: Decimal,
    pub notes: Option<String>,
}

impl From<NewContract> for Contract {
    fn from(new: NewContract) -> Self {
        let now = Utc::now().naive_utc();
        Contract {
            id: String::new(),
            contract_number: new.contract_number,
            client_id: new.client_id,
            start_date: new.start_date,
            end_date: new.end_date,
            status: new.status,
            service_type: new.service_type,
            monthly_fee: new.monthly_fee,
            commission_rate: new.commission_rate,
            notes: new.notes,
            created_at: now,
            updated_at: now,
        }
    }
}

/// All-optional update payload for a contract.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContractUpdate {
    pub contract_number: Option<String>,
    pub client_id: Option<String>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub status: Option<ContractStatus>,
    pub service_type: Option<ServiceType>,
    pub monthly_fee: Option<Decimal>,
    pub commission_rate: Option<Decimal>,
    /// `Some(None)` clears the notes, `None` leaves them untouched.
    #[serde(default)]
    pub notes: Option<Option<String>>,
    pub updated_at: Option<NaiveDateTime>,
}

impl Record for Contract {
    type Patch = ContractUpdate;

    fn id(&self) -> &str {
        &self.id
    }

    fn set_id(&mut self, id: String) {
        self.id = id;
    }

    fn apply(&mut self, patch: ContractUpdate) {
        if let Some(contract_number) = patch.contract_number {
            self.contract_number = contract_number;
        }
        if let Some(client_id) = patch.client_id {
            self.client_id = client_id;
        }
        if let Some(start_date) = patch.start_date {
            self.start_date = start_date;
        }
        if let Some(end_date) = patch.end_date {
            self.end_date = end_date;
        }
        if let Some(status) = patch.status {
            self.status = status;
        }
        if let Some(service_type) = patch.service_type {
            self.service_type = service_type;
        }
        if let Some(monthly_fee) = patch.monthly_fee {
            self.monthly_fee = monthly_fee;
        }
        if let Some(commission_rate) = patch.commission_rate {
            self.commission_rate = commission_rate;
        }
        if let Some(notes) = patch.notes {
            self.notes = notes;
        }
        if let Some(updated_at) = patch.updated_at {
            self.updated_at = updated_at;
        }
    }
}
