//! Dashboard metrics - Classification counts over the current orders
//! snapshot.
//!
//! [`compute_metrics`] is a pure function of the snapshot and the reference
//! date; it never touches the store and never errors. Operator data-entry
//! mistakes degrade instead of failing: a snapshot without the status or
//! due-date columns produces all-zero metrics, and rows whose due date does
//! not parse are excluded from the date-based counts while still counting
//! toward the totals.
//!
//! Readiness is a classification over free text, not a stored enum: the
//! status vocabulary is maintained by humans (e.g. "Pronto para retirada"),
//! so a row is ready when its status contains the ready token, case
//! insensitively.

use crate::{
    config::TableNames,
    entities::order::columns,
    errors::Result,
    store::{Record, SheetStore},
};
use chrono::{Local, NaiveDate};
use serde::Serialize;
use std::collections::HashMap;

/// Substring marking a status text as ready.
pub const READY_TOKEN: &str = "Pronto";

/// Storage format of the order and due date cells.
pub const DATE_FORMAT: &str = "%d/%m/%Y";

/// Upper bound (inclusive, in days) of the due-soon window.
pub const DUE_SOON_WINDOW_DAYS: i64 = 7;

/// Classification counts derived from one orders snapshot.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct DashboardMetrics {
    /// Total number of order rows
    pub total: usize,
    /// Rows classified ready
    pub ready: usize,
    /// Rows not classified ready (`total - ready`)
    pub in_production: usize,
    /// Dated, non-ready rows at or past their due date
    pub overdue: usize,
    /// Dated, non-ready rows due within the next 1..=7 days
    pub due_soon: usize,
    /// Open order count per model, non-ready rows only
    pub backlog_by_model: HashMap<String, usize>,
    /// Occurrence count per literal status text, all rows
    pub counts_by_status: HashMap<String, usize>,
}

/// Whether a status text classifies as ready.
#[must_use]
pub fn is_ready(status: &str) -> bool {
    status.to_lowercase().contains(&READY_TOKEN.to_lowercase())
}

fn cell<'a>(record: &'a Record, column: &str) -> &'a str {
    record.get(column).map_or("", String::as_str)
}

/// Computes the dashboard metrics for a snapshot, relative to `today`.
///
/// Pure and deterministic: repeated calls on the same snapshot and date
/// yield identical output.
#[must_use]
pub fn compute_metrics(snapshot: &[Record], today: NaiveDate) -> DashboardMetrics {
    if snapshot.is_empty() {
        return DashboardMetrics::default();
    }
    if snapshot
        .iter()
        .any(|r| !r.contains_key(columns::STATUS) || !r.contains_key(columns::DUE_DATE))
    {
        tracing::warn!("Orders snapshot lacks status or due-date columns, reporting zeros");
        return DashboardMetrics::default();
    }

    let total = snapshot.len();
    let ready = snapshot
        .iter()
        .filter(|r| is_ready(cell(r, columns::STATUS)))
        .count();
    let in_production = total - ready;

    // Rows usable for date math: both date cells present and a parseable due
    // date. Everything else is silently dropped from the date-based counts.
    let dated: Vec<(&Record, i64)> = snapshot
        .iter()
        .filter(|r| !cell(r, columns::ORDER_DATE).is_empty())
        .filter_map(|r| {
            NaiveDate::parse_from_str(cell(r, columns::DUE_DATE), DATE_FORMAT)
                .ok()
                .map(|due| (r, (due - today).num_days()))
        })
        .collect();

    let overdue = dated
        .iter()
        .filter(|(r, days)| !is_ready(cell(r, columns::STATUS)) && *days <= 0)
        .count();
    let due_soon = dated
        .iter()
        .filter(|(r, days)| {
            !is_ready(cell(r, columns::STATUS)) && (1..=DUE_SOON_WINDOW_DAYS).contains(days)
        })
        .count();

    let mut backlog_by_model: HashMap<String, usize> = HashMap::new();
    for record in snapshot
        .iter()
        .filter(|r| !is_ready(cell(r, columns::STATUS)))
    {
        *backlog_by_model
            .entry(cell(record, columns::MODEL).to_string())
            .or_insert(0) += 1;
    }

    let mut counts_by_status: HashMap<String, usize> = HashMap::new();
    for record in snapshot {
        *counts_by_status
            .entry(cell(record, columns::STATUS).to_string())
            .or_insert(0) += 1;
    }

    DashboardMetrics {
        total,
        ready,
        in_production,
        overdue,
        due_soon,
        backlog_by_model,
        counts_by_status,
    }
}

/// Reads the current orders snapshot and computes the metrics at the
/// shop-local current date.
///
/// # Errors
/// Returns a store error when the snapshot cannot be read.
pub async fn dashboard_metrics(
    store: &dyn SheetStore,
    tables: &TableNames,
) -> Result<DashboardMetrics> {
    let snapshot = store.read_all_records(&tables.orders).await?;
    let today = Local::now().date_naive();
    Ok(compute_metrics(&snapshot, today))
}
