//! Client domain models.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::store::Record;

/// Lifecycle status of a client relationship.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ClientStatus {
    #[default]
    Active,
    Inactive,
}

/// Domain model representing a brokerage client.
///
/// Referenced by contracts, movements, and quotes through plain id strings;
/// deleting a client does not cascade to any of them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Client {
    pub id: String,
    pub name: String,
    pub contract_number: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub status: ClientStatus,
    pub points_balance: i64,
    pub miles_balance: i64,
}

/// Input model for registering a new client.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewClient {
    pub name: String,
    pub contract_number: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub status: ClientStatus,
    pub points_balance: i64,
    pub miles_balance: i64,
}

impl From<NewClient> for Client {
    fn from(new: NewClient) -> Self {
        Client {
            id: String::new(),
            name: new.name,
            contract_number: new.contract_number,
            start_date: new.start_date,
            end_date: new.end_date,
            status: new.status,
            points_balance: new.points_balance,
            miles_balance: new.miles_balance,
        }
    }
}

/// All-optional update payload for a client.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientUpdate {
    pub name: Option<String>,
    pub contract_number: Option<String>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub status: Option<ClientStatus>,
    pub points_balance: Option<i64>,
    pub miles_balance: Option<i64>,
}

impl Record for Client {
    type Patch = ClientUpdate;

    fn id(&self) -> &str {
        &self.id
    }

    fn set_id(&mut self, id: String) {
        self.id = id;
    }

    fn apply(&mut self, patch: ClientUpdate) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(contract_number) = patch.contract_number {
            self.contract_number = contract_number;
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
        if let Some(points_balance) = patch.points_balance {
            self.points_balance = points_balance;
        }
        if let Some(miles_balance) = patch.miles_balance {
            self.miles_balance = miles_balance;
        }
    }
}
