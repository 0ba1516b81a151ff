//! Shared test utilities for `Shopfloor`.
//!
//! Provides the standard in-memory store setup, fixture builders with
//! sensible defaults, and an always-failing store double for exercising the
//! store-unavailable paths.

use crate::{
    config::TableNames,
    entities::{Order, OrderInput, order, status_history},
    errors::{Error, Result},
    store::{MemorySheetStore, Record, RowRef, SheetStore},
};
use async_trait::async_trait;
use tracing_subscriber::EnvFilter;

/// Installs a test-writer tracing subscriber once per process. Safe to call
/// from every test.
pub fn init_test_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_test_writer()
        .try_init();
}

/// Creates an in-memory sheet store with the canonical `Orders` and
/// `History` tables. This is the standard setup for all integration tests.
pub fn setup_test_store() -> (MemorySheetStore, TableNames) {
    init_test_tracing();

    let tables = TableNames::default();
    let store = MemorySheetStore::new()
        .with_table(&tables.orders, order::columns::APPEND_ORDER)
        .with_table(&tables.history, status_history::columns::APPEND_ORDER);

    (store, tables)
}

/// Builds a complete order input with sensible defaults.
///
/// # Defaults
/// * `status`: `"Em produção"`
/// * dates: March 2024, due two weeks after ordering
pub fn sample_order(id: &str) -> OrderInput {
    OrderInput {
        id: id.to_string(),
        name: "Kitchen frames".to_string(),
        model: "MDF-15".to_string(),
        product_details: "15mm MDF, white finish".to_string(),
        layout_link: "https://drive.example/layout/1".to_string(),
        status: "Em produção".to_string(),
        order_date: "01/03/2024".to_string(),
        due_date: "15/03/2024".to_string(),
    }
}

/// Creates a test order with [`sample_order`] defaults.
pub async fn create_test_order(
    store: &dyn SheetStore,
    tables: &TableNames,
    id: &str,
) -> Result<Order> {
    crate::core::order::create_order(store, tables, sample_order(id)).await
}

/// Builds a raw orders-snapshot record with every canonical column present.
/// Used by the dashboard tests, which classify records rather than decoded
/// orders.
pub fn order_record(status: &str, model: &str, order_date: &str, due_date: &str) -> Record {
    let mut record = Record::new();
    record.insert(order::columns::ID.to_string(), "F-0001".to_string());
    record.insert(order::columns::NAME.to_string(), "Test order".to_string());
    record.insert(order::columns::MODEL.to_string(), model.to_string());
    record.insert(
        order::columns::PRODUCT_DETAILS.to_string(),
        "details".to_string(),
    );
    record.insert(
        order::columns::LAYOUT_LINK.to_string(),
        "https://drive.example/layout/1".to_string(),
    );
    record.insert(order::columns::STATUS.to_string(), status.to_string());
    record.insert(
        order::columns::ORDER_DATE.to_string(),
        order_date.to_string(),
    );
    record.insert(order::columns::DUE_DATE.to_string(), due_date.to_string());
    record
}

/// A store double whose every operation fails as unreachable.
pub struct UnavailableStore;

fn unreachable_store() -> Error {
    Error::Store {
        message: "connection refused".to_string(),
    }
}

#[async_trait]
impl SheetStore for UnavailableStore {
    async fn read_headers(&self, _table: &str) -> Result<Vec<String>> {
        Err(unreachable_store())
    }

    async fn read_all_records(&self, _table: &str) -> Result<Vec<Record>> {
        Err(unreachable_store())
    }

    async fn append_row(&self, _table: &str, _values: &[String]) -> Result<()> {
        Err(unreachable_store())
    }

    async fn find_row(&self, _table: &str, _column: usize, _value: &str) -> Result<Option<RowRef>> {
        Err(unreachable_store())
    }

    async fn update_cell(
        &self,
        _table: &str,
        _row: RowRef,
        _column: usize,
        _value: &str,
    ) -> Result<()> {
        Err(unreachable_store())
    }
}
