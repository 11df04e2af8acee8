//! Reports module - aggregation/filter views over collection snapshots.
//!
//! Everything here is recomputed from full snapshots on every call; there
//! is no caching, no incremental maintenance, and no subscription model.

mod filters;
mod reports_model;
mod reports_service;



pub use filters::{
    client_name, goal_progress, movement_matches_search, operation_matches, partner_name,
    period_matches, program_name, sum_by,
};
pub use reports_model::{
    ContractSummary, DashboardSummary, GoalOverview, GoalProgress, OperationVolume, PeriodReport,
    QuoteSummary, StatusCount,
};
pub use reports_service::ReportService;
