//! Derived view models produced by the report service.

use rust_decimal::Decimal;
use serde::Serialize;

use crate::contracts::ContractStatus;
use crate::movements::{Movement, OperationType};

/// Quantity moved per operation type within a period.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OperationVolume {
    pub operation_type: OperationType,
    pub quantity: i64,
}

/// Headline figures for the dashboard screen.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSummary {
    pub total_quantity: i64,
    pub total_invested: Decimal,
    pub total_savings: Decimal,
    /// Invested value per unit moved; zero when either total is zero.
    pub average_conversion: Decimal,
    /// Current-period quantity grouped by operation type.
    pub quantity_by_operation: Vec<OperationVolume>,
    /// Most recent movements, date-descending, capped at five.
    pub latest_movements: Vec<Movement>,
}

/// Figures for the period/program report screen.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PeriodReport {
    pub movement_count: usize,
    pub quote_count: usize,
    pub total_quantity: i64,
    pub total_savings: Decimal,
    pub quoted_value_total: Decimal,
}

/// Per-status contract count.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusCount {
    pub status: ContractStatus,
    pub count: usize,
}

/// Headline figures for the contracts screen.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContractSummary {
    pub active_count: usize,
    /// Sum of monthly fees over active contracts only.
    pub active_monthly_fees: Decimal,
    pub status_counts: Vec<StatusCount>,
}

/// Headline figures for the quotes screen.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteSummary {
    pub booked_count: usize,
    pub pending_count: usize,
    pub estimated_value_total: Decimal,
}

/// Progress of a single goal.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GoalProgress {
    pub id: String,
    pub program_label: String,
    pub required_quantity: i64,
    pub current_quantity: i64,
    /// `current / required * 100`; zero when nothing is required.
    pub progress: f64,
    /// `max(0, required - current)`.
    pub remaining: i64,
}

/// Goal totals plus per-goal progress rows.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GoalOverview {
    pub total_required: i64,
    pub total_current: i64,
    pub overall_progress: f64,
    pub goals: Vec<GoalProgress>,
}
