//! # Catalog Types
//!
//! The menu catalog: categories (menus), the dishes that belong to them, and
//! the `Catalog` snapshot that aggregation functions read from.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                          Catalog Types                                  │
//! │                                                                         │
//! │  ┌─────────────────┐        ┌─────────────────┐                        │
//! │  │      Menu       │ 1    * │      Dish       │                        │
//! │  │  ─────────────  │◄───────│  ─────────────  │                        │
//! │  │  id (UUID)      │        │  id (UUID)      │                        │
//! │  │  name           │        │  menu_id (FK)   │                        │
//! │  │  is_special     │        │  name           │                        │
//! │  └─────────────────┘        │  price (Money)  │                        │
//! │                             │  description?   │                        │
//! │  ┌──────────────────────┐   └─────────────────┘                        │
//! │  │       Catalog        │                                              │
//! │  │  ──────────────────  │   Snapshot of menus + dishes. Vec order IS   │
//! │  │  menus:  Vec<Menu>   │   display order; every report walks it in   │
//! │  │  dishes: Vec<Dish>   │   insertion order.                           │
//! │  └──────────────────────┘                                              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Regular vs Special
//! A menu flagged `is_special` holds off-menu items (sodas, desserts, extras).
//! Shift reports split lunch revenue from those side sales, so the flag drives
//! the "regular" subtotals in [`crate::tally`].

use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use crate::money::Money;

// =============================================================================
// Menu
// =============================================================================

/// A category of dishes ("Executive Lunch", "Drinks", ...).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Menu {
    /// Unique identifier (UUID v4).
    pub id: String,

    /// Display name shown as the section title on screen and in reports.
    pub name: String,

    /// Marks a side-sales category (excluded from the "regular" subtotals).
    ///
    /// Older snapshots omit the field entirely, so absent means `false`.
    #[serde(default)]
    pub is_special: bool,
}

impl Menu {
    /// Creates a regular menu with a freshly minted id.
    pub fn new(name: impl Into<String>) -> Self {
        Menu {
            id: Uuid::new_v4().to_string(),
            name: name.into(),
            is_special: false,
        }
    }

    /// Creates a special (side sales) menu with a freshly minted id.
    pub fn special(name: impl Into<String>) -> Self {
        Menu {
            id: Uuid::new_v4().to_string(),
            name: name.into(),
            is_special: true,
        }
    }
}

// =============================================================================
// Dish
// =============================================================================

/// A sellable item belonging to exactly one menu.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Dish {
    /// Unique identifier (UUID v4).
    pub id: String,

    /// Menu this dish belongs to.
    pub menu_id: String,

    /// Display name shown on the sales grid and reports.
    pub name: String,

    /// Unit price in whole currency units.
    pub price: Money,

    /// Optional blurb ("includes soup and juice").
    pub description: Option<String>,
}

impl Dish {
    /// Creates a dish with a freshly minted id and no description.
    pub fn new(menu_id: impl Into<String>, name: impl Into<String>, price: Money) -> Self {
        Dish {
            id: Uuid::new_v4().to_string(),
            menu_id: menu_id.into(),
            name: name.into(),
            price,
            description: None,
        }
    }

    /// Attaches a description (builder style).
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

// =============================================================================
// Catalog
// =============================================================================

/// A point-in-time snapshot of the full menu configuration.
///
/// The `Vec` order of both fields is the operator's configured display order.
/// Aggregation walks menus and dishes in this order, never sorted, so reports
/// always mirror the screen layout.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Catalog {
    /// All categories, in display order.
    pub menus: Vec<Menu>,

    /// All dishes, in display order (grouped per menu by filtering).
    pub dishes: Vec<Dish>,
}

impl Catalog {
    /// Creates a catalog from already-built parts.
    pub fn new(menus: Vec<Menu>, dishes: Vec<Dish>) -> Self {
        Catalog { menus, dishes }
    }

    /// Looks up a menu by id.
    pub fn menu(&self, id: &str) -> Option<&Menu> {
        self.menus.iter().find(|m| m.id == id)
    }

    /// Looks up a dish by id.
    pub fn dish(&self, id: &str) -> Option<&Dish> {
        self.dishes.iter().find(|d| d.id == id)
    }

    /// Resolves the menu a dish belongs to.
    ///
    /// Returns `None` for an orphaned dish (its menu was deleted). Orphans
    /// stay out of every money aggregate; see [`crate::tally`].
    pub fn menu_of(&self, dish: &Dish) -> Option<&Menu> {
        self.menu(&dish.menu_id)
    }

    /// Iterates the dishes of one menu, preserving display order.
    pub fn dishes_in<'a>(&'a self, menu_id: &'a str) -> impl Iterator<Item = &'a Dish> + 'a {
        self.dishes.iter().filter(move |d| d.menu_id == menu_id)
    }

    /// True when no menus and no dishes are configured.
    pub fn is_empty(&self) -> bool {
        self.menus.is_empty() && self.dishes.is_empty()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
