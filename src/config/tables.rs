//! Table-name configuration loading from config.toml
//!
//! The engine works against two named tables in the sheet store. Deployments
//! that renamed their sheets (or share one document between shops) can
//! override the defaults through an optional `config.toml`.

use crate::errors::{Error, Result};
use serde::Deserialize;
use std::path::Path;

/// Configuration structure representing the entire config.toml file
#[derive(Debug, Default, Deserialize)]
struct ConfigFile {
    /// Optional `[tables]` section with table-name overrides
    #[serde(default)]
    tables: TableNames,
}

/// Names of the two sheet-store tables the engine reads and writes.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TableNames {
    /// Table holding the current state of every order
    #[serde(default = "default_orders")]
    pub orders: String,
    /// Append-only table holding the status-change audit trail
    #[serde(default = "default_history")]
    pub history: String,
}

fn default_orders() -> String {
    "Orders".to_string()
}

fn default_history() -> String {
    "History".to_string()
}

impl Default for TableNames {
    fn default() -> Self {
        Self {
            orders: default_orders(),
            history: default_history(),
        }
    }
}

/// Loads table names from a TOML file.
///
/// # Arguments
/// * `path` - Path to the config.toml file
///
/// # Errors
/// Returns an error if the file cannot be read or the TOML is invalid.
/// Missing keys fall back to the defaults.
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<TableNames> {
    let contents = std::fs::read_to_string(path.as_ref()).map_err(|e| Error::Config {
        message: format!("Failed to read config file: {e}"),
    })?;

    let config: ConfigFile = toml::from_str(&contents).map_err(|e| Error::Config {
        message: format!("Failed to parse config.toml: {e}"),
    })?;

    Ok(config.tables)
}

/// Loads table names from the default location (./config.toml).
///
/// A missing file is not an error: the defaults apply. A present but
/// malformed file is.
pub fn load_default_config() -> Result<TableNames> {
    let path = Path::new("config.toml");
    if !path.exists() {
        return Ok(TableNames::default());
    }
    load_config(path)
}
