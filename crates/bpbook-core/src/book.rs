//! Blueprint-book tree flattening.
//!
//! A decoded book is an arbitrary JSON value, but the flattening step expects
//! the game's book shape: a top-level `blueprint_book` object holding a
//! `blueprints` array, each element an entry object whose `blueprint` object
//! carries at minimum a `label`. Nothing else about the entries is validated
//! (schema validation of blueprint contents is out of scope).

use serde_json::Value;

use crate::error::{BookError, Result};

/// Walk a decoded book and emit one `(label, entry)` pair per contained
/// blueprint, preserving the book's original order.
///
/// Order matters downstream: it determines write order, and when two labels
/// sanitize to the same file name the later entry silently overwrites the
/// earlier one. No deduplication happens here; collision handling is the
/// caller's concern.
///
/// Fails with [`BookError::Structure`] when the book shape is wrong: missing
/// `blueprint_book`, missing `blueprints`, an empty blueprint list, or an
/// entry without a string `label`. All of these are terminal, user-facing
/// conditions rather than recoverable ones.
pub fn flatten(book: &Value) -> Result<Vec<(String, &Value)>> {
    let inner = book
        .get("blueprint_book")
        .ok_or_else(|| BookError::Structure("missing 'blueprint_book' key".to_string()))?;

    let blueprints = inner
        .get("blueprints")
        .and_then(Value::as_array)
        .ok_or_else(|| {
            BookError::Structure("missing 'blueprint_book.blueprints' key".to_string())
        })?;

    if blueprints.is_empty() {
        return Err(BookError::Structure("empty blueprint list".to_string()));
    }

    let mut entries = Vec::with_capacity(blueprints.len());
    for (index, entry) in blueprints.iter().enumerate() {
        let label = entry
            .get("blueprint")
            .and_then(|bp| bp.get("label"))
            .and_then(Value::as_str)
            .ok_or_else(|| {
                BookError::Structure(format!(
                    "blueprint {index} has no 'blueprint.label' string"
                ))
            })?;
        entries.push((label.to_string(), entry));
    }

    Ok(entries)
}
