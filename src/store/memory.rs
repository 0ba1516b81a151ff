//! In-process sheet store backed by plain vectors behind an async mutex.
//!
//! This is the standard backing store for tests and the reference
//! implementation of the [`SheetStore`] contract. Each table is a header row
//! plus data rows of string cells, mirroring how a remote spreadsheet reads
//! back through its row/cell API.

use super::{Record, RowRef, SheetStore};
use crate::errors::{Error, Result};
use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::Mutex;

#[derive(Clone, Debug, Default)]
struct Table {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

/// In-memory [`SheetStore`] implementation.
#[derive(Debug, Default)]
pub struct MemorySheetStore {
    tables: Mutex<HashMap<String, Table>>,
}

impl MemorySheetStore {
    /// Creates an empty store with no tables.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an empty table with the given header row. Builder-style, used
    /// before the store is shared.
    #[must_use]
    pub fn with_table<I, S>(mut self, name: &str, headers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let table = Table {
            headers: headers.into_iter().map(Into::into).collect(),
            rows: Vec::new(),
        };
        self.tables.get_mut().insert(name.to_string(), table);
        self
    }

    /// Number of data rows currently in `table`. Test helper for "snapshot
    /// size unchanged" assertions.
    ///
    /// # Errors
    /// Returns [`Error::Store`] when the table does not exist.
    pub async fn row_count(&self, table: &str) -> Result<usize> {
        let tables = self.tables.lock().await;
        Ok(Self::table(&tables, table)?.rows.len())
    }

    fn table<'a>(tables: &'a HashMap<String, Table>, name: &str) -> Result<&'a Table> {
        tables.get(name).ok_or_else(|| Error::Store {
            message: format!("unknown table '{name}'"),
        })
    }

    fn table_mut<'a>(tables: &'a mut HashMap<String, Table>, name: &str) -> Result<&'a mut Table> {
        tables.get_mut(name).ok_or_else(|| Error::Store {
            message: format!("unknown table '{name}'"),
        })
    }
}

#[async_trait]
impl SheetStore for MemorySheetStore {
    async fn read_headers(&self, table: &str) -> Result<Vec<String>> {
        let tables = self.tables.lock().await;
        Ok(Self::table(&tables, table)?.headers.clone())
    }

    async fn read_all_records(&self, table: &str) -> Result<Vec<Record>> {
        let tables = self.tables.lock().await;
        let table = Self::table(&tables, table)?;

        let records = table
            .rows
            .iter()
            .map(|row| {
                table
                    .headers
                    .iter()
                    .enumerate()
                    .map(|(i, header)| {
                        let cell = row.get(i).cloned().unwrap_or_default();
                        (header.clone(), cell)
                    })
                    .collect()
            })
            .collect();

        Ok(records)
    }

    async fn append_row(&self, table: &str, values: &[String]) -> Result<()> {
        let mut tables = self.tables.lock().await;
        Self::table_mut(&mut tables, table)?.rows.push(values.to_vec());
        Ok(())
    }

    async fn find_row(&self, table: &str, column: usize, value: &str) -> Result<Option<RowRef>> {
        let tables = self.tables.lock().await;
        let table = Self::table(&tables, table)?;

        let found = table
            .rows
            .iter()
            .position(|row| row.get(column).is_some_and(|cell| cell == value))
            .map(|index| RowRef(index as u64));

        Ok(found)
    }

    async fn update_cell(
        &self,
        table: &str,
        row: RowRef,
        column: usize,
        value: &str,
    ) -> Result<()> {
        let mut tables = self.tables.lock().await;
        let table = Self::table_mut(&mut tables, table)?;

        let Ok(index) = usize::try_from(row.0) else {
            return Err(Error::UpdateFailed {
                message: format!("row reference {} out of range", row.0),
            });
        };
        let Some(cells) = table.rows.get_mut(index) else {
            return Err(Error::UpdateFailed {
                message: format!("row reference {} does not exist", row.0),
            });
        };

        // Sheets accept writes past the current row width
        if cells.len() <= column {
            cells.resize(column + 1, String::new());
        }
        cells[column] = value.to_string();

        Ok(())
    }
}
