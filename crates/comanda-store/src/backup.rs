//! # Backup Export / Import
//!
//! Moves the menu configuration in and out of portable backup files.
//!
//! ## Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  EXPORT                                                                 │
//! │    store snapshots ──► {menus, dishes} JSON ──► comanda-menu-DATE.json │
//! │                                                                         │
//! │  IMPORT                                                                 │
//! │    chosen file ──► parse_backup (structural validation, comanda-core)  │
//! │         │                                                               │
//! │         ├── Ok(catalog)  ──► snapshots replaced wholesale, catalog     │
//! │         │                    returned so the shell can show counts     │
//! │         └── Err(import)  ──► current snapshots untouched               │
//! │                                                                         │
//! │  The sale ledger is NEVER part of a backup: backups carry menu         │
//! │  configuration, not shift history.                                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::fs;
use std::path::Path;

use chrono::NaiveDate;
use tracing::info;

use comanda_core::{parse_backup, Catalog};

use crate::error::StoreResult;
use crate::snapshot::Store;

/// Writes the store's current catalog to `path` as a backup document.
pub fn export_backup(store: &Store, path: impl AsRef<Path>) -> StoreResult<()> {
    let path = path.as_ref();
    let catalog = store.load_catalog();
    let text = serde_json::to_string_pretty(&catalog)?;
    fs::write(path, text)?;

    info!(
        path = %path.display(),
        menus = catalog.menus.len(),
        dishes = catalog.dishes.len(),
        "Backup exported"
    );
    Ok(())
}

/// Validates a backup file and replaces the stored catalog with it.
///
/// Validation happens before anything is written, so a rejected file leaves
/// the current snapshots exactly as they were. Returns the imported catalog
/// so the shell can confirm with menu/dish counts.
pub fn import_backup(store: &Store, path: impl AsRef<Path>) -> StoreResult<Catalog> {
    let text = fs::read_to_string(path.as_ref())?;
    let catalog = parse_backup(&text)?;
    store.save_catalog(&catalog)?;

    info!(
        menus = catalog.menus.len(),
        dishes = catalog.dishes.len(),
        "Backup imported, catalog replaced"
    );
    Ok(catalog)
}

/// Default file name for a backup taken on `date`: `comanda-menu-2026-08-25.json`.
pub fn backup_file_name(date: NaiveDate) -> String {
    format!("comanda-menu-{}.json", date.format("%Y-%m-%d"))
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::StoreError;
    use comanda_core::{Dish, Menu, Money};

    fn seeded_store(dir: &Path) -> Store {
        let store = Store::open(dir).unwrap();
        let lunch = Menu::new("Lunch");
        let soup = Dish::new(&lunch.id, "Soup", Money::from_units(5_000));
        store
            .save_catalog(&Catalog::new(vec![lunch], vec![soup]))
            .unwrap();
        store
    }

    #[test]
    fn test_export_then_import_replicates_catalog() {
        let source_dir = tempfile::tempdir().unwrap();
        let target_dir = tempfile::tempdir().unwrap();
        let backup = source_dir.path().join("backup.json");

        let source = seeded_store(source_dir.path());
        export_backup(&source, &backup).unwrap();

        let target = Store::open(target_dir.path()).unwrap();
        let imported = import_backup(&target, &backup).unwrap();

        assert_eq!(imported, source.load_catalog());
        assert_eq!(target.load_catalog(), source.load_catalog());
    }

    #[test]
    fn test_import_replaces_wholesale_not_merge() {
        let dir = tempfile::tempdir().unwrap();
        let store = seeded_store(dir.path());

        let backup = dir.path().join("tiny.json");
        fs::write(
            &backup,
            r#"{"menus": [{"id": "m9", "name": "Dinner"}], "dishes": []}"#,
        )
        .unwrap();

        let imported = import_backup(&store, &backup).unwrap();
        assert_eq!(imported.menus.len(), 1);
        assert_eq!(imported.menus[0].name, "Dinner");

        // nothing of the old catalog survives
        let loaded = store.load_catalog();
        assert_eq!(loaded.menus.len(), 1);
        assert!(loaded.dishes.is_empty());
    }

    #[test]
    fn test_rejected_import_leaves_snapshots_untouched() {
        let dir = tempfile::tempdir().unwrap();
        let store = seeded_store(dir.path());
        let before = store.load_catalog();

        let bad = dir.path().join("bad.json");
        fs::write(&bad, r#"{"menus": "nope", "dishes": []}"#).unwrap();

        let err = import_backup(&store, &bad).unwrap_err();
        assert!(matches!(err, StoreError::Import(_)));
        assert_eq!(store.load_catalog(), before);
    }

    #[test]
    fn test_import_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let store = Store::open(dir.path()).unwrap();

        let err = import_backup(&store, dir.path().join("nowhere.json")).unwrap_err();
        assert!(matches!(err, StoreError::Io(_)));
    }

    #[test]
    fn test_exported_file_passes_core_validation() {
        let dir = tempfile::tempdir().unwrap();
        let store = seeded_store(dir.path());
        let backup = dir.path().join("out.json");

        export_backup(&store, &backup).unwrap();
        let text = fs::read_to_string(&backup).unwrap();
        assert!(parse_backup(&text).is_ok());
    }

    #[test]
    fn test_backup_file_name_format() {
        let date = NaiveDate::from_ymd_opt(2026, 8, 25).unwrap();
        assert_eq!(backup_file_name(date), "comanda-menu-2026-08-25.json");

        let padded = NaiveDate::from_ymd_opt(2026, 1, 5).unwrap();
        assert_eq!(backup_file_name(padded), "comanda-menu-2026-01-05.json");
    }
}
