//! # Store Error Types
//!
//! Error types for snapshot and backup operations.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Propagation                                    │
//! │                                                                         │
//! │  io::Error / serde_json::Error / ImportError                            │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  StoreError (this module) ← categorized for the host shell             │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Host shell shows the operator a message                               │
//! │                                                                         │
//! │  NOTE: LOADS never produce StoreError. Absent or corrupt snapshots     │
//! │  fall back to empty defaults with a warning log. Only saves, exports   │
//! │  and imports are fallible.                                             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use comanda_core::ImportError;
use thiserror::Error;

/// Snapshot and backup operation errors.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Filesystem operation failed (permissions, disk full, missing file).
    #[error("Storage I/O failed: {0}")]
    Io(#[from] std::io::Error),

    /// Encoding a snapshot to JSON failed.
    #[error("Snapshot encoding failed: {0}")]
    Encode(#[from] serde_json::Error),

    /// A backup file failed validation; the current catalog is untouched.
    #[error(transparent)]
    Import(#[from] ImportError),
}

/// Convenience type alias for Results with StoreError.
pub type StoreResult<T> = Result<T, StoreError>;

// =============================================================================
// Unit Tests
// =============================================================================
