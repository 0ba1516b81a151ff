//! Unified error types for the order lifecycle and metrics engine.
//!
//! Every public operation returns [`Result`]; store failures never panic the
//! process. The only places an error is deliberately absorbed instead of
//! surfaced are the dashboard degrade-to-zero policies documented in
//! [`crate::core::dashboard`].

use thiserror::Error;

/// All failure modes surfaced by this crate.
#[derive(Debug, Error)]
pub enum Error {
    /// Configuration could not be loaded or parsed.
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// The sheet store could not be reached, authenticated, or read.
    /// Fatal for the current operation; never retried internally.
    #[error("Sheet store unavailable: {message}")]
    Store { message: String },

    /// A required order field was missing or empty at creation time.
    /// No partial write occurs.
    #[error("Missing required field: {field}")]
    MissingField { field: &'static str },

    /// An expected column is absent from the live table. The operation is
    /// aborted rather than guessing at positions.
    #[error("Required columns not found in table '{table}'")]
    Schema { table: String },

    /// A status update targeted an order id that does not exist.
    #[error("Order not found: {id}")]
    OrderNotFound { id: String },

    /// The store rejected a write after the target row was located.
    #[error("Update rejected by sheet store: {message}")]
    UpdateFailed { message: String },

    /// I/O error (configuration file reads).
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Environment variable error (store settings).
    #[error("Environment variable error: {0}")]
    EnvVar(#[from] std::env::VarError),
}

/// Convenience `Result` type used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;
