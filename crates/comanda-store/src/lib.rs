//! # comanda-store: Snapshot Persistence for La Comanda
//!
//! Filesystem layer beneath [`comanda_core`]: keeps the catalog and sale
//! ledger durable across restarts and handles backup files.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                 comanda-core (pure business logic)                      │
//! │                     Catalog, SaleLedger, reports                        │
//! └─────────────────────────────┬───────────────────────────────────────────┘
//! │                             │ plain values in, plain values out
//! ┌─────────────────────────────▼───────────────────────────────────────────┐
//! │                  ★ comanda-store (THIS CRATE) ★                         │
//! │                                                                         │
//! │   ┌──────────────────────────┐   ┌──────────────────────────────────┐  │
//! │   │         snapshot         │   │              backup              │  │
//! │   │  Store: load/save the    │   │  export_backup / import_backup   │  │
//! │   │  menus, dishes and sales │   │  portable {menus, dishes} files  │  │
//! │   │  JSON files atomically   │   │  validated by comanda-core       │  │
//! │   └──────────────────────────┘   └──────────────────────────────────┘  │
//! │                                                                         │
//! │   Loads never fail: absent or corrupt state degrades to empty          │
//! │   defaults with a log line, so the app always starts.                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`snapshot`] - The [`Store`]: per-key JSON files with atomic replace
//! - [`backup`] - Backup file export/import framing
//! - [`error`] - [`StoreError`] and the [`StoreResult`] alias

// =============================================================================
// Module Declarations
// =============================================================================

pub mod backup;
pub mod error;
pub mod snapshot;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use backup::{backup_file_name, export_backup, import_backup};
pub use error::{StoreError, StoreResult};
pub use snapshot::Store;
