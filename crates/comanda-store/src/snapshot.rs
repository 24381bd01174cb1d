//! # Snapshot Store
//!
//! Persistence for the three pieces of app state, one JSON file each.
//!
//! ## Storage Layout
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Snapshot Store                                    │
//! │                                                                         │
//! │  <data dir>/                                                            │
//! │  ├── menus.json    [ {id, name, isSpecial}, ... ]                       │
//! │  ├── dishes.json   [ {id, menuId, name, price, description}, ... ]      │
//! │  └── sales.json    { dishId: qty, ... }                                 │
//! │                                                                         │
//! │  Save:  write <file>.tmp, then rename over <file> (atomic replace)     │
//! │  Load:  absent file  ──► empty default (debug log)                      │
//! │         corrupt file ──► empty default (warn log)                       │
//! │                                                                         │
//! │  Each file falls back INDEPENDENTLY: a corrupt sales.json never        │
//! │  costs the operator their menu configuration.                          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Loads are infallible on purpose: the operator opening the app mid-service
//! gets an empty ledger and a warning in the log, never an error screen.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, info, warn};

use comanda_core::{Catalog, Dish, Menu, SaleLedger};

use crate::error::StoreResult;

/// File name for the menus snapshot.
pub const MENUS_FILE: &str = "menus.json";
/// File name for the dishes snapshot.
pub const DISHES_FILE: &str = "dishes.json";
/// File name for the sale ledger snapshot.
pub const SALES_FILE: &str = "sales.json";

/// Filesystem-backed store for catalog and ledger snapshots.
///
/// ## Usage
/// ```rust,ignore
/// let store = Store::open("/var/lib/comanda")?;
/// let catalog = store.load_catalog();
/// let ledger = store.load_ledger();
///
/// // ... operator taps a dish ...
/// ledger.adjust(&dish_id, 1);
/// store.save_ledger(&ledger)?;
/// ```
#[derive(Debug, Clone)]
pub struct Store {
    dir: PathBuf,
}

impl Store {
    /// Opens a store rooted at `dir`, creating the directory if needed.
    pub fn open(dir: impl Into<PathBuf>) -> StoreResult<Self> {
        let dir = dir.into();
        fs::create_dir_all(&dir)?;
        info!(dir = %dir.display(), "Opened snapshot store");
        Ok(Store { dir })
    }

    /// Directory this store reads and writes.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Loads the catalog, falling back per file.
    ///
    /// `menus.json` and `dishes.json` degrade independently: if one is
    /// corrupt, the other still loads.
    pub fn load_catalog(&self) -> Catalog {
        let menus: Vec<Menu> = self.load_or_default(MENUS_FILE);
        let dishes: Vec<Dish> = self.load_or_default(DISHES_FILE);
        Catalog::new(menus, dishes)
    }

    /// Loads the sale ledger, or an empty one when absent/corrupt.
    pub fn load_ledger(&self) -> SaleLedger {
        self.load_or_default(SALES_FILE)
    }

    /// Persists both catalog snapshots.
    pub fn save_catalog(&self, catalog: &Catalog) -> StoreResult<()> {
        self.write_json(MENUS_FILE, &catalog.menus)?;
        self.write_json(DISHES_FILE, &catalog.dishes)?;
        Ok(())
    }

    /// Persists the sale ledger. Called after every counter adjustment.
    pub fn save_ledger(&self, ledger: &SaleLedger) -> StoreResult<()> {
        self.write_json(SALES_FILE, ledger)
    }

    /// Reads and decodes one snapshot file, degrading to `T::default()`.
    fn load_or_default<T: DeserializeOwned + Default>(&self, file: &str) -> T {
        let path = self.dir.join(file);
        let text = match fs::read_to_string(&path) {
            Ok(text) => text,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                debug!(file = %file, "Snapshot absent, starting empty");
                return T::default();
            }
            Err(err) => {
                warn!(file = %file, error = %err, "Snapshot unreadable, starting empty");
                return T::default();
            }
        };

        match serde_json::from_str(&text) {
            Ok(value) => value,
            Err(err) => {
                warn!(file = %file, error = %err, "Snapshot corrupt, starting empty");
                T::default()
            }
        }
    }

    /// Writes one snapshot file via sibling temp file + rename.
    ///
    /// The rename stays on one filesystem, so a crash mid-save leaves either
    /// the old snapshot or the new one, never a torn file.
    fn write_json<T: Serialize>(&self, file: &str, value: &T) -> StoreResult<()> {
        let text = serde_json::to_string_pretty(value)?;
        let tmp = self.dir.join(format!("{file}.tmp"));
        let path = self.dir.join(file);

        fs::write(&tmp, text)?;
        fs::rename(&tmp, &path)?;
        debug!(file = %file, "Snapshot written");
        Ok(())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
