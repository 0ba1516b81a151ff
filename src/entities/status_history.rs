//! Status history entity - One immutable audit record per status change.
//!
//! History rows are created exactly once per successful status update and are
//! never mutated or deleted. The `order_id` is a non-enforced foreign key: the
//! referenced order is not re-validated to exist.

use crate::store::Record;
use serde::{Deserialize, Serialize};

/// Canonical column names of the `History` table.
pub mod columns {
    /// Id of the order the change applies to.
    pub const ORDER_ID: &str = "Order Id";
    /// The new status text.
    pub const STATUS: &str = "Status";
    /// Shop-local instant of the change, `dd/mm/yyyy HH:MM:SS` text.
    pub const RECORDED_AT: &str = "Recorded At";

    /// Fixed column order used when appending a history row.
    pub const APPEND_ORDER: [&str; 3] = [ORDER_ID, STATUS, RECORDED_AT];
}

/// One recorded status change, as read back from the `History` table.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusHistoryEntry {
    /// Id of the order whose status changed
    pub order_id: String,
    /// The status the order was changed to
    pub status: String,
    /// Shop-local instant of the change, `dd/mm/yyyy HH:MM:SS` text
    pub recorded_at: String,
}

impl StatusHistoryEntry {
    /// Decodes a history entry from a raw store record. Absent cells decode
    /// as empty strings.
    #[must_use]
    pub fn from_record(record: &Record) -> Self {
        let cell = |column: &str| record.get(column).cloned().unwrap_or_default();

        Self {
            order_id: cell(columns::ORDER_ID),
            status: cell(columns::STATUS),
            recorded_at: cell(columns::RECORDED_AT),
        }
    }
}
