//! Order entity - Represents one tracked production job.
//!
//! Orders live in the `Orders` table of the sheet store. Date fields are kept
//! as the stored `dd/mm/yyyy` text and only parsed where classification needs
//! calendar math. Rows are never deleted; only the status cell is mutated.

use crate::{
    errors::{Error, Result},
    store::Record,
};
use serde::{Deserialize, Serialize};

/// Canonical column names of the `Orders` table.
pub mod columns {
    /// Order identifier (`F-` + 4 digits).
    pub const ID: &str = "Id";
    /// Human-readable order name.
    pub const NAME: &str = "Name";
    /// Product model, the backlog grouping key.
    pub const MODEL: &str = "Model";
    /// Free-text product details.
    pub const PRODUCT_DETAILS: &str = "Product Details";
    /// Link to the layout document.
    pub const LAYOUT_LINK: &str = "Layout Link";
    /// Free-text status; readiness is a substring classification, not an enum.
    pub const STATUS: &str = "Status";
    /// Creation date, stored as `dd/mm/yyyy` text.
    pub const ORDER_DATE: &str = "Order Date";
    /// Due date, stored as `dd/mm/yyyy` text; may be absent or malformed.
    pub const DUE_DATE: &str = "Due Date";

    /// Fixed column order used when appending a new order row.
    pub const APPEND_ORDER: [&str; 8] = [
        ID,
        NAME,
        MODEL,
        PRODUCT_DETAILS,
        LAYOUT_LINK,
        STATUS,
        ORDER_DATE,
        DUE_DATE,
    ];

    /// Header spellings the id column has carried on hand-maintained sheets.
    /// Readers resolve the id column through this list, first match wins.
    pub const ID_ALIASES: [&str; 5] = [ID, "ID", "id", "Ids", "ids"];
}

/// A stored production order as read back from the `Orders` table.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    /// Unique identifier, format `F-` + 4 zero-padded digits
    pub id: String,
    /// Human-readable name of the order
    pub name: String,
    /// Product model (e.g. a frame or cabinet model)
    pub model: String,
    /// Free-text description of the product
    pub product_details: String,
    /// Link to the layout document for this order
    pub layout_link: String,
    /// Current status text, maintained by humans
    pub status: String,
    /// Date the order was placed, `dd/mm/yyyy` text
    pub order_date: String,
    /// Date the order is due, `dd/mm/yyyy` text
    pub due_date: String,
}

/// Candidate order supplied by the caller at creation time.
///
/// All fields are required non-empty; [`OrderInput::validate`] enforces this
/// before anything is written.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderInput {
    /// Identifier to store, normally issued by [`crate::core::ids`]
    pub id: String,
    /// Human-readable name of the order
    pub name: String,
    /// Product model
    pub model: String,
    /// Free-text description of the product
    pub product_details: String,
    /// Link to the layout document
    pub layout_link: String,
    /// Initial status text
    pub status: String,
    /// Order date, `dd/mm/yyyy` text
    pub order_date: String,
    /// Due date, `dd/mm/yyyy` text
    pub due_date: String,
}

impl OrderInput {
    /// Checks that every required field is present and non-empty.
    ///
    /// Fields are checked in canonical column order and the first unmet
    /// requirement is reported by column name. Whitespace-only values count
    /// as present; only the empty string is rejected.
    ///
    /// # Errors
    /// Returns [`Error::MissingField`] naming the first empty field.
    pub fn validate(&self) -> Result<()> {
        let fields: [(&'static str, &str); 8] = [
            (columns::ID, &self.id),
            (columns::NAME, &self.name),
            (columns::MODEL, &self.model),
            (columns::PRODUCT_DETAILS, &self.product_details),
            (columns::LAYOUT_LINK, &self.layout_link),
            (columns::STATUS, &self.status),
            (columns::ORDER_DATE, &self.order_date),
            (columns::DUE_DATE, &self.due_date),
        ];

        for (field, value) in fields {
            if value.is_empty() {
                return Err(Error::MissingField { field });
            }
        }

        Ok(())
    }

    /// Serializes the input as a row in the fixed append column order.
    #[must_use]
    pub fn to_row(&self) -> Vec<String> {
        vec![
            self.id.clone(),
            self.name.clone(),
            self.model.clone(),
            self.product_details.clone(),
            self.layout_link.clone(),
            self.status.clone(),
            self.order_date.clone(),
            self.due_date.clone(),
        ]
    }
}

impl From<OrderInput> for Order {
    fn from(input: OrderInput) -> Self {
        Self {
            id: input.id,
            name: input.name,
            model: input.model,
            product_details: input.product_details,
            layout_link: input.layout_link,
            status: input.status,
            order_date: input.order_date,
            due_date: input.due_date,
        }
    }
}

impl Order {
    /// Decodes an order from a raw store record.
    ///
    /// Decoding is deliberately lenient: the id header is resolved through
    /// [`columns::ID_ALIASES`] and absent cells decode as empty strings, so a
    /// sheet with operator-added columns or a renamed id header still lists.
    #[must_use]
    pub fn from_record(record: &Record) -> Self {
        let cell = |column: &str| record.get(column).cloned().unwrap_or_default();

        Self {
            id: id_cell(record).unwrap_or_default().to_string(),
            name: cell(columns::NAME),
            model: cell(columns::MODEL),
            product_details: cell(columns::PRODUCT_DETAILS),
            layout_link: cell(columns::LAYOUT_LINK),
            status: cell(columns::STATUS),
            order_date: cell(columns::ORDER_DATE),
            due_date: cell(columns::DUE_DATE),
        }
    }
}

/// Returns the id cell of a record, resolving the header through
/// [`columns::ID_ALIASES`].
#[must_use]
pub fn id_cell(record: &Record) -> Option<&str> {
    columns::ID_ALIASES
        .iter()
        .find_map(|alias| record.get(*alias).map(String::as_str))
}
