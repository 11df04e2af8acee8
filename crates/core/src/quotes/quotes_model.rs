//! Travel quote domain models.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::store::Record;

/// Lifecycle status of a travel quote.
///
/// The expected flow is pending -> quoted -> booked or cancelled, but no
/// transition rules are enforced: any status may be set to any other
/// through an update.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum QuoteStatus {
    #[default]
    Pending,
    Quoted,
    Booked,
    Cancelled,
}

/// Domain model representing a travel quote for a client.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Quote {
    pub id: String,
    /// Plain reference to `Client::id`; not integrity-enforced.
    pub client_id: String,
    /// Plain reference to `Contract::id`, when the quote is sold under a
    /// contract.
    pub contract_id: Option<String>,
    pub destination: String,
    pub departure_date: NaiveDate,
    pub return_date: NaiveDate,
    pub adults: u32,
    pub children: u32,
    pub status: QuoteStatus,
    pub estimated_value: Option<Decimal>,
    pub miles_used: Option<i64>,
    pub notes: Option<String>,
}

/// Input model for registering a new quote.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewQuote {
    pub client_id: String,
    pub contract_id: Option<String>,
    pub destination: String,
    pub departure_date: NaiveDate,
    pub return_date: NaiveDate,
    pub adults: u32,
    pub children: u32,
    pub status: QuoteStatus,
    pub estimated_value: Option<Decimal>,
    pub miles_used: Option<i64>,
    pub notes: Option<String>,
}

impl From<NewQuote> for Quote {
    fn from(new: NewQuote) -> Self {
        Quote {
            id: String::new(),
            client_id: new.client_id,
            contract_id: new.contract_id,
            destination: new.destination,
            departure_date: new.departure_date,
            return_date: new.return_date,
            adults: new.adults,
            children: new.children,
            status: new.status,
            estimated_value: new.estimated_value,
            miles_used: new.miles_used,
            notes: new.notes,
        }
    }
}

/// All-optional update payload for a quote.
///
/// Nullable fields use a double `Option`: the outer level distinguishes
/// "leave untouched" from "set", the inner one allows clearing.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteUpdate {
    pub client_id: Option<String>,
    #[serde(default)]
    pub contract_id: Option<Option<String>>,
    pub destination: Option<String>,
    pub departure_date: Option<NaiveDate>,
    pub return_date: Option<NaiveDate>,
    pub adults: Option<u32>,
    pub children: Option<u32>,
    pub status: Option<QuoteStatus>,
    #[serde(default)]
    pub estimated_value: Option<Option<Decimal>>,
    #[serde(default)]
    pub miles_used: Option<Option<i64>>,
    #[serde(default)]
    pub notes: Option<Option<String>>,
}

impl Record for Quote {
    type Patch = QuoteUpdate;

    fn id(&self) -> &str {
        &self.id
    }

    fn set_id(&mut self, id: String) {
        self.id = id;
    }

    fn apply(&mut self, patch: QuoteUpdate) {
        if let Some(client_id) = patch.client_id {
            self.client_id = client_id;
        }
        if let Some(contract_id) = patch.contract_id {
            self.contract_id = contract_id;
        }
        if let Some(destination) = patch.destination {
            self.destination = destination;
        }
        if let Some(departure_date) = patch.departure_date {
            self.departure_date = departure_date;
        }
        if let Some(return_date) = patch.return_date {
            self.return_date = return_date;
        }
        if let Some(adults) = patch.adults {
            self.adults = adults;
        }
        if let Some(children) = patch.children {
            self.children = children;
        }
        if let Some(status) = patch.status {
            self.status = status;
        }
        if let Some(estimated_value) = patch.estimated_value {
            self.estimated_value = estimated_value;
        }
        if let Some(miles_used) = patch.miles_used {
            self.miles_used = miles_used;
        }
        if let Some(notes) = patch.notes {
            self.notes = notes;
        }
    }
}
