//! Core business logic - framework-agnostic order lifecycle and metrics
//! operations. Everything here works against the [`crate::store::SheetStore`]
//! port and returns structured data for whatever request layer sits on top.

pub mod dashboard;
pub mod history;
pub mod ids;
pub mod order;

pub use dashboard::{DashboardMetrics, compute_metrics, dashboard_metrics};
pub use history::{history_for, record_status_change};
pub use ids::{generate_id, generate_order_id};
pub use order::{create_order, list_orders, update_status};
