use std::collections::HashMap;
use std::sync::Arc;

use log::debug;
use rust_decimal::Decimal;
use serde_json::json;

use crate::context::ServiceContext;
use crate::contracts::ContractStatus;
use crate::errors::Result;
use crate::export::export_records;
use crate::movements::{Movement, OperationType};
use crate::quotes::QuoteStatus;
use crate::reports::filters::{
    client_name, goal_progress, movement_matches_search, operation_matches, partner_name,
    period_matches, program_name, sum_by,
};
use crate::reports::reports_model::{
    ContractSummary, DashboardSummary, GoalOverview, GoalProgress, OperationVolume, PeriodReport,
    QuoteSummary, StatusCount,
};

/// Read-only derived views over the collection stores.
///
/// Every method takes fresh snapshots from the stores it needs and
/// recomputes from scratch; nothing is cached between calls.
pub struct ReportService {
    ctx: Arc<ServiceContext>,
}

impl ReportService {
    pub fn new(ctx: Arc<ServiceContext>) -> Self {
        ReportService { ctx }
    }

    /// Headline dashboard figures. `current_period` is the `YYYY-MM` token
    /// used for the per-operation volume breakdown.
    pub fn dashboard_summary(&self, current_period: &str) -> Result<DashboardSummary> {
        let movements = self.ctx.movements.list()?;

        let total_quantity: i64 = movements.iter().map(|m| m.quantity).sum();
        let total_invested = sum_by(&movements, |m| m.invested_value);
        let total_savings = sum_by(&movements, |m| m.total_savings);
        let average_conversion = if total_invested > Decimal::ZERO && total_quantity > 0 {
            total_invested / Decimal::from(total_quantity)
        } else {
            Decimal::ZERO
        };

        let mut by_operation: HashMap<OperationType, i64> = HashMap::new();
        for movement in movements
            .iter()
            .filter(|m| period_matches(&m.date.to_string(), current_period))
        {
            *by_operation.entry(movement.operation_type).or_default() += movement.quantity;
        }
        let quantity_by_operation = OperationType::ALL
            .iter()
            .filter_map(|op| {
                by_operation.get(op).map(|&quantity| OperationVolume {
                    operation_type: *op,
                    quantity,
                })
            })
            .collect();

        let mut latest_movements = movements;
        latest_movements.sort_by(|a, b| b.date.cmp(&a.date));
        latest_movements.truncate(5);

        debug!(
            "dashboard summary for {}: {} units moved",
            current_period, total_quantity
        );

        Ok(DashboardSummary {
            total_quantity,
            total_invested,
            total_savings,
            average_conversion,
            quantity_by_operation,
            latest_movements,
        })
    }

    /// Movement and quote figures under optional period and program filters.
    pub fn period_report(
        &self,
        period: Option<&str>,
        program_id: Option<&str>,
    ) -> Result<PeriodReport> {
        let movements = self.filtered_movements(period, program_id)?;
        let quotes = self.filtered_quotes(period)?;

        Ok(PeriodReport {
            movement_count: movements.len(),
            quote_count: quotes.len(),
            total_quantity: movements.iter().map(|m| m.quantity).sum(),
            total_savings: sum_by(&movements, |m| m.total_savings),
            quoted_value_total: sum_by(&quotes, |q| q.estimated_value),
        })
    }

    /// Active-contract count, active monthly-fee total, per-status counts.
    pub fn contract_summary(&self) -> Result<ContractSummary> {
        let contracts = self.ctx.contracts.list()?;

        let active: Vec<_> = contracts
            .iter()
            .filter(|c| c.status == ContractStatus::Active)
            .collect();
        let active_monthly_fees = active.iter().map(|c| c.monthly_fee).sum();

        let status_counts = ContractStatus::ALL
            .iter()
            .map(|&status| StatusCount {
                status,
                count: contracts.iter().filter(|c| c.status == status).count(),
            })
            .collect();

        Ok(ContractSummary {
            active_count: active.len(),
            active_monthly_fees,
            status_counts,
        })
    }

    /// Booked/pending counts and the estimated-value total across quotes.
    pub fn quote_summary(&self) -> Result<QuoteSummary> {
        let quotes = self.ctx.quotes.list()?;

        Ok(QuoteSummary {
            booked_count: quotes
                .iter()
                .filter(|q| q.status == QuoteStatus::Booked)
                .count(),
            pending_count: quotes
                .iter()
                .filter(|q| q.status == QuoteStatus::Pending)
                .count(),
            estimated_value_total: sum_by(&quotes, |q| q.estimated_value),
        })
    }

    /// Per-goal progress plus overall totals.
    pub fn goal_overview(&self) -> Result<GoalOverview> {
        let goals = self.ctx.goals.list()?;

        let total_required: i64 = goals.iter().map(|g| g.required_quantity).sum();
        let total_current: i64 = goals.iter().map(|g| g.current_quantity).sum();

        let rows = goals
            .into_iter()
            .map(|goal| {
                let progress = goal_progress(goal.current_quantity, goal.required_quantity);
                GoalProgress {
                    remaining: (goal.required_quantity - goal.current_quantity).max(0),
                    progress,
                    id: goal.id,
                    program_label: goal.program_label,
                    required_quantity: goal.required_quantity,
                    current_quantity: goal.current_quantity,
                }
            })
            .collect();

        Ok(GoalOverview {
            total_required,
            total_current,
            overall_progress: goal_progress(total_current, total_required),
            goals: rows,
        })
    }

    /// Movements matching the free-text query and the active operation
    /// chips, in store order.
    pub fn search_movements(
        &self,
        query: &str,
        active_operations: &[OperationType],
    ) -> Result<Vec<Movement>> {
        let movements = self.ctx.movements.list()?;
        let programs = self.ctx.programs.list()?;
        let partners = self.ctx.partners.list()?;

        Ok(movements
            .into_iter()
            .filter(|movement| {
                movement_matches_search(movement, &programs, &partners, query)
                    && operation_matches(movement, active_operations)
            })
            .collect())
    }

    /// CSV text of the filtered movements with resolved display names.
    pub fn export_movements(
        &self,
        period: Option<&str>,
        program_id: Option<&str>,
    ) -> Result<String> {
        let movements = self.filtered_movements(period, program_id)?;
        let programs = self.ctx.programs.list()?;
        let partners = self.ctx.partners.list()?;

        let rows: Vec<_> = movements
            .iter()
            .map(|m| {
                json!({
                    "Date": m.date.to_string(),
                    "Program": program_name(&programs, &m.program_id),
                    "Operation": m.operation_type.label(),
                    "Quantity": m.quantity,
                    "Currency": m.currency_kind,
                    "Partner": partner_name(&partners, m.partner_id.as_deref()),
                    "Paid Value": m.paid_value,
                    "Invested Value": m.invested_value,
                    "Total Savings": m.total_savings,
                    "Product": m.product_label,
                    "Factor": m.conversion_factor,
                    "Product Value": m.product_value,
                    "Discount": m.discount_value,
                })
            })
            .collect();

        Ok(export_records(&rows, None)?)
    }

    /// CSV text of the filtered quotes with resolved client names.
    pub fn export_quotes(&self, period: Option<&str>) -> Result<String> {
        let quotes = self.filtered_quotes(period)?;
        let clients = self.ctx.clients.list()?;

        let rows: Vec<_> = quotes
            .iter()
            .map(|q| {
                json!({
                    "Client": client_name(&clients, &q.client_id),
                    "Destination": q.destination,
                    "Departure": q.departure_date.to_string(),
                    "Return": q.return_date.to_string(),
                    "Adults": q.adults,
                    "Children": q.children,
                    "Status": q.status,
                    "Estimated Value": q.estimated_value,
                    "Miles Used": q.miles_used,
                    "Notes": q.notes,
                })
            })
            .collect();

        Ok(export_records(&rows, None)?)
    }

    fn filtered_movements(
        &self,
        period: Option<&str>,
        program_id: Option<&str>,
    ) -> Result<Vec<Movement>> {
        Ok(self
            .ctx
            .movements
            .list()?
            .into_iter()
            .filter(|m| {
                period
                    .map(|p| period_matches(&m.date.to_string(), p))
                    .unwrap_or(true)
                    && program_id.map(|id| m.program_id == id).unwrap_or(true)
            })
            .collect())
    }

    fn filtered_quotes(&self, period: Option<&str>) -> Result<Vec<crate::quotes::Quote>> {
        Ok(self
            .ctx
            .quotes
            .list()?
            .into_iter()
            .filter(|q| {
                period
                    .map(|p| period_matches(&q.departure_date.to_string(), p))
                    .unwrap_or(true)
            })
            .collect())
    }
}
