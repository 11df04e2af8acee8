//! Stateless aggregation and filter helpers.
//!
//! Cross-entity lookups are linear scans with no index. That is fine at
//! back-office scale; revisit before pointing these at large datasets.

use rust_decimal::Decimal;

use crate::clients::Client;
use crate::constants::NOT_AVAILABLE;
use crate::movements::{Movement, OperationType};
use crate::partners::Partner;
use crate::programs::Program;

/// Total of a numeric field across a snapshot. Absent values count as zero.
pub fn sum_by<T, F>(items: &[T], field: F) -> Decimal
where
    F: Fn(&T) -> Option<Decimal>,
{
    items
        .iter()
        .map(|item| field(item).unwrap_or_default())
        .sum()
}

/// Whether `date` falls in `period` (a `YYYY-MM` token).
///
/// This is a string-prefix rule anchored at a token boundary, not calendar
/// arithmetic: `2025-09` matches `2025-09-20` and `2025-09` itself, but not
/// `2025-091-01`.
pub fn period_matches(date: &str, period: &str) -> bool {
    if !date.starts_with(period) {
        return false;
    }
    matches!(date.as_bytes().get(period.len()).copied(), None | Some(b'-'))
}

/// Chip-style operation filter. A movement matches when its operation type
/// is one of the active chips; the empty set is the identity filter and
/// matches everything.
pub fn operation_matches(movement: &Movement, active: &[OperationType]) -> bool {
    active.is_empty() || active.contains(&movement.operation_type)
}

/// Resolves a program id to its display name, or `"N/A"`.
pub fn program_name(programs: &[Program], program_id: &str) -> String {
    programs
        .iter()
        .find(|program| program.id == program_id)
        .map(|program| program.name.clone())
        .unwrap_or_else(|| NOT_AVAILABLE.to_string())
}

/// Resolves an optional partner id to its display name, or `"N/A"`.
pub fn partner_name(partners: &[Partner], partner_id: Option<&str>) -> String {
    partner_id
        .and_then(|id| partners.iter().find(|partner| partner.id == id))
        .map(|partner| partner.title.clone())
        .unwrap_or_else(|| NOT_AVAILABLE.to_string())
}

/// Resolves a client id to its display name, or `"N/A"`.
pub fn client_name(clients: &[Client], client_id: &str) -> String {
    clients
        .iter()
        .find(|client| client.id == client_id)
        .map(|client| client.name.clone())
        .unwrap_or_else(|| NOT_AVAILABLE.to_string())
}

/// Free-text search over a movement's derived display fields: resolved
/// program name, resolved partner name, and the operation label. The match
/// is a case-insensitive substring check; an empty query matches everything.
pub fn movement_matches_search(
    movement: &Movement,
    programs: &[Program],
    partners: &[Partner],
    query: &str,
) -> bool {
    if query.is_empty() {
        return true;
    }
    let query = query.to_lowercase();
    program_name(programs, &movement.program_id)
        .to_lowercase()
        .contains(&query)
        || partner_name(partners, movement.partner_id.as_deref())
            .to_lowercase()
            .contains(&query)
        || movement
            .operation_type
            .label()
            .to_lowercase()
            .contains(&query)
}

/// Goal completion as a percentage of the required quantity.
///
/// Defined as `0` when nothing is required, regardless of the current
/// quantity, so the ratio is never undefined or infinite.
pub fn goal_progress(current: i64, required: i64) -> f64 {
    if required == 0 {
        return 0.0;
    }
    current as f64 / required as f64 * 100.0
}
