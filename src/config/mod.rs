//! Configuration management for the sheet store connection and table names.

/// Sheet-store connection settings from environment variables
pub mod store;

/// Table-name configuration loading from config.toml
pub mod tables;

pub use store::StoreConfig;
pub use tables::TableNames;

use crate::errors::Result;

/// Everything an embedding application needs to wire the engine up.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Remote store connection settings
    pub store: StoreConfig,
    /// Names of the `Orders` and `History` tables
    pub tables: TableNames,
}

/// Loads the full application configuration.
///
/// Honors a local `.env` file if present (environment variables set
/// externally win), then reads store settings from the environment and table
/// names from an optional `config.toml`.
///
/// # Errors
/// Returns [`crate::errors::Error::Config`] when a required store variable is
/// unset or `config.toml` is present but malformed.
pub fn load_app_configuration() -> Result<AppConfig> {
    dotenvy::dotenv().ok();
    tracing::debug!("Loading application configuration");

    Ok(AppConfig {
        store: StoreConfig::from_env()?,
        tables: tables::load_default_config()?,
    })
}
