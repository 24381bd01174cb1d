//! # Backup Validation
//!
//! Structural validation for operator-supplied backup files.
//!
//! A backup is a JSON document with two list sections:
//!
//! ```text
//! { "menus": [ ... ], "dishes": [ ... ] }
//! ```
//!
//! [`parse_backup`] checks that shape and decodes the entries. On success the
//! result replaces the current catalog wholesale (full replace, never merge).
//! On failure the caller keeps the current catalog and surfaces the error
//! message to the operator.

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::catalog::{Catalog, Dish, Menu};
use crate::error::{ImportError, ImportResult};

/// Validates and decodes a candidate backup document.
///
/// ## Validation Steps
/// 1. The text must parse as JSON
/// 2. `menus` and `dishes` must both be present and be lists
/// 3. Every entry must decode into its record shape (unknown extra fields
///    are ignored, absent optional fields take their defaults)
///
/// ## Example
/// ```rust
/// use comanda_core::backup::parse_backup;
///
/// let catalog = parse_backup(
///     r#"{"menus": [{"id": "m1", "name": "Lunch"}],
///         "dishes": [{"id": "d1", "menuId": "m1", "name": "Soup", "price": 5000}]}"#,
/// )
/// .unwrap();
/// assert_eq!(catalog.menus.len(), 1);
/// assert_eq!(catalog.dishes.len(), 1);
/// ```
pub fn parse_backup(text: &str) -> ImportResult<Catalog> {
    let value: Value =
        serde_json::from_str(text).map_err(|err| ImportError::NotJson(err.to_string()))?;

    let menus = section_list(&value, "menus")?;
    let dishes = section_list(&value, "dishes")?;

    let menus: Vec<Menu> = decode_entries(menus, "menus")?;
    let dishes: Vec<Dish> = decode_entries(dishes, "dishes")?;

    Ok(Catalog::new(menus, dishes))
}

/// Pulls one required top-level list out of the document.
fn section_list<'a>(value: &'a Value, section: &str) -> ImportResult<&'a [Value]> {
    let field = value.get(section).ok_or_else(|| ImportError::MissingSection {
        section: section.to_string(),
    })?;

    match field.as_array() {
        Some(entries) => Ok(entries),
        None => Err(ImportError::NotASequence {
            section: section.to_string(),
        }),
    }
}

/// Decodes every entry of a section, reporting the first bad one by index.
fn decode_entries<T: DeserializeOwned>(entries: &[Value], section: &str) -> ImportResult<Vec<T>> {
    entries
        .iter()
        .enumerate()
        .map(|(index, entry)| {
            serde_json::from_value(entry.clone()).map_err(|err| ImportError::InvalidEntry {
                section: section.to_string(),
                detail: format!("entry {}: {}", index, err),
            })
        })
        .collect()
}

// =============================================================================
// Unit Tests
// =============================================================================
