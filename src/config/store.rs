//! Sheet-store connection settings from environment variables.
//!
//! The engine itself never opens the remote document; these values are loaded
//! here so an embedding application can hand them to whatever [`SheetStore`]
//! implementation it wires in. Both values are opaque to this crate.
//!
//! [`SheetStore`]: crate::store::SheetStore

use crate::errors::{Error, Result};

/// Environment variable naming the remote document to open.
pub const DOCUMENT_URL_VAR: &str = "SHEET_STORE_URL";
/// Environment variable carrying the service-account credentials blob.
pub const CREDENTIALS_VAR: &str = "SHEET_STORE_CREDENTIALS";

/// Connection settings for a remote sheet-store client.
#[derive(Debug, Clone)]
pub struct StoreConfig {
    /// URL of the backing document
    pub document_url: String,
    /// Credentials blob, passed through verbatim to the store client
    pub credentials_json: String,
}

impl StoreConfig {
    /// Reads the store settings from the environment.
    ///
    /// # Errors
    /// Returns [`Error::Config`] naming the variable that is not set.
    pub fn from_env() -> Result<Self> {
        let document_url = std::env::var(DOCUMENT_URL_VAR).map_err(|_| Error::Config {
            message: format!("{DOCUMENT_URL_VAR} is not set"),
        })?;
        let credentials_json = std::env::var(CREDENTIALS_VAR).map_err(|_| Error::Config {
            message: format!("{CREDENTIALS_VAR} is not set"),
        })?;

        Ok(Self {
            document_url,
            credentials_json,
        })
    }
}
