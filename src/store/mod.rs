//! Sheet store port - The narrow contract this crate holds against its
//! external tabular backing store.
//!
//! The store offers no transactions, no locking, and no caching: every call
//! reflects current remote state at call time, and every call may block on
//! the network, fail, or time out. Retry policy belongs to the caller.
//! Remote implementations (e.g. a hosted-spreadsheet client) live outside
//! this crate; [`memory::MemorySheetStore`] is the in-process implementation
//! used by tests and embedders.

pub mod memory;

pub use memory::MemorySheetStore;

use crate::errors::Result;
use async_trait::async_trait;
use std::collections::HashMap;

/// One data row read back from a table, keyed by header text.
///
/// Rows shorter than the header row read as empty cells; cells beyond the
/// header row are dropped.
pub type Record = HashMap<String, String>;

/// Opaque handle to one data row of one table.
///
/// A `RowRef` is only meaningful to the store that issued it, and only until
/// that table is next mutated. Callers obtain one from
/// [`SheetStore::find_row`] and hand it straight back to
/// [`SheetStore::update_cell`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RowRef(pub u64);

/// The sheet store contract: read-all, append, find-cell, update-cell.
///
/// Implementations map errors into [`crate::errors::Error::Store`] (the store
/// cannot be reached or read) or [`crate::errors::Error::UpdateFailed`] (a
/// write was rejected). A single-cell update is assumed store-atomic: a row
/// is left in its prior state or the new state, never torn.
#[async_trait]
pub trait SheetStore: Send + Sync {
    /// Reads the header row of `table`.
    async fn read_headers(&self, table: &str) -> Result<Vec<String>>;

    /// Reads every data row of `table` as header-keyed records.
    async fn read_all_records(&self, table: &str) -> Result<Vec<Record>>;

    /// Appends one row of cell values to the end of `table`.
    async fn append_row(&self, table: &str, values: &[String]) -> Result<()>;

    /// Finds the first data row whose cell in the zero-based `column` equals
    /// `value` exactly. Returns `None` when no row matches (including when
    /// `column` is beyond the table's width).
    async fn find_row(&self, table: &str, column: usize, value: &str) -> Result<Option<RowRef>>;

    /// Overwrites a single cell of the row identified by `row`.
    async fn update_cell(&self, table: &str, row: RowRef, column: usize, value: &str)
    -> Result<()>;
}
