//! Order identifier issuance.
//!
//! Identifiers are drawn at random from a fixed 10,000-value space and checked
//! against the ids already present in the orders table. There is no
//! reservation step: the caller is expected to persist the returned id
//! promptly, and two callers generating concurrently can each be handed an id
//! the other is about to append. The sampling loop has no termination bound
//! other than "keep sampling until free", which degrades as the id space
//! fills up. Both are accepted limitations of the current design.

use crate::{
    config::TableNames,
    entities::order,
    errors::Result,
    store::SheetStore,
};
use rand::Rng;
use std::collections::HashSet;

/// Prefix of every order identifier.
pub const ID_PREFIX: &str = "F-";

/// Upper bound (inclusive) of the numeric id space.
const ID_SPACE_MAX: u16 = 9999;

/// Draws a fresh identifier of the form `F-` + 4 zero-padded digits that is
/// not present in `existing`.
///
/// Pure with respect to the store: the caller supplies both the RNG and a
/// fresh snapshot of the existing ids.
pub fn generate_id<R: Rng>(rng: &mut R, existing: &HashSet<String>) -> String {
    loop {
        let number = rng.random_range(0..=ID_SPACE_MAX);
        let candidate = format!("{ID_PREFIX}{number:04}");
        if !existing.contains(&candidate) {
            return candidate;
        }
    }
}

/// Reads the current set of order ids from the orders table.
///
/// The id column is resolved through the historical header aliases; a table
/// with no recognizable id column yields the empty set rather than an error.
///
/// # Errors
/// Returns [`crate::errors::Error::Store`] when the snapshot cannot be read.
pub async fn existing_order_ids(
    store: &dyn SheetStore,
    tables: &TableNames,
) -> Result<HashSet<String>> {
    let records = store.read_all_records(&tables.orders).await?;

    Ok(records
        .iter()
        .filter_map(order::id_cell)
        .filter(|id| !id.is_empty())
        .map(ToString::to_string)
        .collect())
}

/// Issues a fresh order identifier unique against the current orders table.
///
/// # Errors
/// Returns [`crate::errors::Error::Store`] when the existing-id set cannot be
/// fetched; never returns an id that collides with the set it was given.
pub async fn generate_order_id(store: &dyn SheetStore, tables: &TableNames) -> Result<String> {
    let existing = existing_order_ids(store, tables).await?;
    Ok(generate_id(&mut rand::rng(), &existing))
}
