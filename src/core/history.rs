//! Status history log - Append-only audit trail of status changes.
//!
//! One row is written per successful status update; rows are never mutated or
//! deleted afterwards. The log is best-effort: a failed append does not undo
//! the status change it was recording (see [`crate::core::order`]).

use crate::{config::TableNames, entities::StatusHistoryEntry, errors::Result, store::SheetStore};
use chrono::NaiveDateTime;

/// Storage format of the shop-local change instant, second precision.
pub const TIMESTAMP_FORMAT: &str = "%d/%m/%Y %H:%M:%S";

/// Appends one audit row recording that `order_id` changed to `new_status`
/// at instant `at`.
///
/// The referenced order is not re-validated to exist.
///
/// # Errors
/// Returns a store error when the append is rejected; nothing is retried.
pub async fn record_status_change(
    store: &dyn SheetStore,
    tables: &TableNames,
    order_id: &str,
    new_status: &str,
    at: NaiveDateTime,
) -> Result<()> {
    let row = [
        order_id.to_string(),
        new_status.to_string(),
        at.format(TIMESTAMP_FORMAT).to_string(),
    ];
    store.append_row(&tables.history, &row).await?;

    tracing::debug!(id = %order_id, status = %new_status, "Recorded status change");
    Ok(())
}

/// Returns every recorded status change for `order_id`, in insertion order.
///
/// # Errors
/// Returns a store error when the history table cannot be read.
pub async fn history_for(
    store: &dyn SheetStore,
    tables: &TableNames,
    order_id: &str,
) -> Result<Vec<StatusHistoryEntry>> {
    let records = store.read_all_records(&tables.history).await?;

    Ok(records
        .iter()
        .map(StatusHistoryEntry::from_record)
        .filter(|entry| entry.order_id == order_id)
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{entities::status_history, test_utils::*};
    use chrono::NaiveDate;

    fn at(h: u32, m: u32, s: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 3, 5)
            .unwrap()
            .and_hms_opt(h, m, s)
            .unwrap()
    }

    #[tokio::test]
    async fn test_record_formats_timestamp() -> Result<()> {
        let (store, tables) = setup_test_store();

        record_status_change(&store, &tables, "F-0001", "Pronto", at(9, 5, 3)).await?;

        let entries = history_for(&store, &tables, "F-0001").await?;
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].status, "Pronto");
        assert_eq!(entries[0].recorded_at, "05/03/2024 09:05:03");
        Ok(())
    }

    #[tokio::test]
    async fn test_history_for_filters_by_order_and_keeps_insertion_order() -> Result<()> {
        let (store, tables) = setup_test_store();

        record_status_change(&store, &tables, "F-0001", "Em produção", at(8, 0, 0)).await?;
        record_status_change(&store, &tables, "F-0002", "Pronto", at(9, 0, 0)).await?;
        record_status_change(&store, &tables, "F-0001", "Pronto", at(10, 0, 0)).await?;

        let entries = history_for(&store, &tables, "F-0001").await?;
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].status, "Em produção");
        assert_eq!(entries[1].status, "Pronto");
        assert!(entries.iter().all(|e| e.order_id == "F-0001"));
        Ok(())
    }

    #[tokio::test]
    async fn test_history_for_unknown_order_is_empty() -> Result<()> {
        let (store, tables) = setup_test_store();
        let entries = history_for(&store, &tables, "F-9999").await?;
        assert!(entries.is_empty());
        Ok(())
    }

    #[tokio::test]
    async fn test_append_column_order_matches_headers() -> Result<()> {
        // The positional append must line up with the canonical History
        // headers seeded by setup_test_store.
        let (store, tables) = setup_test_store();

        record_status_change(&store, &tables, "F-0001", "Pronto", at(12, 0, 0)).await?;

        let records = store.read_all_records(&tables.history).await?;
        assert_eq!(records[0][status_history::columns::ORDER_ID], "F-0001");
        assert_eq!(records[0][status_history::columns::STATUS], "Pronto");
        assert_eq!(
            records[0][status_history::columns::RECORDED_AT],
            "05/03/2024 12:00:00"
        );
        Ok(())
    }
}
