//! # Error Types
//!
//! Domain error types for comanda-core.
//!
//! Almost everything in this crate is a total function: ledger mutation,
//! aggregation and report assembly cannot fail. The one fallible boundary is
//! backup import, where operator-supplied files arrive in arbitrary shapes.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  comanda-core errors (this file)                                        │
//! │  └── ImportError      - Backup file failed structural validation        │
//! │                                                                         │
//! │  comanda-store errors (separate crate)                                  │
//! │  └── StoreError       - Filesystem and encoding failures                │
//! │                                                                         │
//! │  Flow: ImportError → StoreError → host shell → operator message         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (section name, entry index)
//! 3. Errors are enum variants, never String
//! 4. Each error variant maps to a user-facing rejection message

use thiserror::Error;

// =============================================================================
// Import Error
// =============================================================================

/// A candidate backup file failed validation.
///
/// Each variant carries enough context for the host shell to show the
/// operator why their file was rejected. A rejected import never touches the
/// current catalog.
#[derive(Debug, Error)]
pub enum ImportError {
    /// The file content is not parseable JSON at all.
    #[error("Backup is not valid JSON: {0}")]
    NotJson(String),

    /// A required top-level section (`menus` or `dishes`) is absent.
    #[error("Backup is missing the '{section}' section")]
    MissingSection { section: String },

    /// A top-level section is present but is not a list.
    #[error("Backup section '{section}' must be a list")]
    NotASequence { section: String },

    /// An element inside a section does not match the expected record shape.
    #[error("Backup has an invalid entry in '{section}': {detail}")]
    InvalidEntry { section: String, detail: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with ImportError.
pub type ImportResult<T> = Result<T, ImportError>;

// =============================================================================
// Unit Tests
// =============================================================================
