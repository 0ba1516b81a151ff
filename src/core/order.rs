//! Order repository - Validated creation, listing, and status mutation of
//! production orders.
//!
//! Every operation fetches fresh state from the sheet store; there is no
//! in-process cache and no cross-call ordering guarantee. Orders are never
//! deleted: the only mutation this module performs is overwriting a single
//! status cell.

use crate::{
    config::TableNames,
    core::history,
    entities::{Order, OrderInput, order::columns},
    errors::{Error, Result},
    store::SheetStore,
};
use chrono::Local;

/// Resolved positions of the two columns status updates touch.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct OrderColumns {
    /// Zero-based position of the id column
    pub id: usize,
    /// Zero-based position of the status column
    pub status: usize,
}

/// Resolves the id and status column positions from a live header row.
///
/// The id header is matched through [`columns::ID_ALIASES`]; the status
/// header must be the canonical spelling.
///
/// # Errors
/// Returns [`Error::Schema`] when either column is absent. No update is
/// attempted against a table whose shape is not understood.
pub fn resolve_order_columns(headers: &[String], table: &str) -> Result<OrderColumns> {
    let id = headers
        .iter()
        .position(|h| columns::ID_ALIASES.contains(&h.as_str()));
    let status = headers.iter().position(|h| h == columns::STATUS);

    match (id, status) {
        (Some(id), Some(status)) => Ok(OrderColumns { id, status }),
        _ => Err(Error::Schema {
            table: table.to_string(),
        }),
    }
}

/// Validates `input` and appends it to the orders table.
///
/// On success exactly one new row exists, written in the fixed canonical
/// column order, and the stored [`Order`] is returned. No history entry is
/// written for creation; the audit trail begins at the first status update.
///
/// # Errors
/// Returns [`Error::MissingField`] when a required field is empty (nothing
/// is written), or a store error when the append fails.
pub async fn create_order(
    store: &dyn SheetStore,
    tables: &TableNames,
    input: OrderInput,
) -> Result<Order> {
    input.validate()?;

    store.append_row(&tables.orders, &input.to_row()).await?;
    tracing::info!(id = %input.id, name = %input.name, "Created order");

    Ok(Order::from(input))
}

/// Returns the full current snapshot of the orders table.
///
/// Decoding is lenient: the id header is normalized through its historical
/// aliases and absent cells come back as empty strings.
///
/// # Errors
/// Returns a store error when the snapshot cannot be read.
pub async fn list_orders(store: &dyn SheetStore, tables: &TableNames) -> Result<Vec<Order>> {
    let records = store.read_all_records(&tables.orders).await?;
    Ok(records.iter().map(Order::from_record).collect())
}

/// Overwrites the status cell of the order whose id equals `order_id`, then
/// appends the audit entry to the history table.
///
/// The two writes are not transactional: if the audit append fails after the
/// status cell was overwritten, the status change stands (there is no
/// compensating rollback) and the append failure is surfaced to the caller.
///
/// # Errors
/// [`Error::Schema`] when the id or status column is missing,
/// [`Error::OrderNotFound`] when no row carries `order_id`, and store errors
/// for failed reads or writes.
pub async fn update_status(
    store: &dyn SheetStore,
    tables: &TableNames,
    order_id: &str,
    new_status: &str,
) -> Result<()> {
    let headers = store.read_headers(&tables.orders).await?;
    let order_columns = resolve_order_columns(&headers, &tables.orders)?;

    let row = store
        .find_row(&tables.orders, order_columns.id, order_id)
        .await?
        .ok_or_else(|| Error::OrderNotFound {
            id: order_id.to_string(),
        })?;

    store
        .update_cell(&tables.orders, row, order_columns.status, new_status)
        .await?;
    tracing::info!(id = %order_id, status = %new_status, "Updated order status");

    let now = Local::now().naive_local();
    if let Err(e) = history::record_status_change(store, tables, order_id, new_status, now).await {
        tracing::warn!(id = %order_id, error = %e, "Status updated but audit append failed");
        return Err(e);
    }

    Ok(())
}
