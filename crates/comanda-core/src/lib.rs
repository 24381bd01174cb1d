//! # comanda-core: Pure Business Logic for La Comanda
//!
//! This crate is the **heart** of La Comanda, a lunch-counter point of sale.
//! It contains all business logic as pure functions with zero I/O
//! dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       La Comanda Architecture                           │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                     Web View (host shell)                       │   │
//! │  │   Sales Grid ──► Change Calculator ──► Shift Report ──► Admin   │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ in-process calls                       │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ comanda-core (THIS CRATE) ★                     │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │  catalog  │  │  ledger   │  │   tally   │  │  report   │  │   │
//! │  │   │ Menu/Dish │  │ SaleLedger│  │ subtotals │  │ document  │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐                 │   │
//! │  │   │   money   │  │   cart    │  │  backup   │                 │   │
//! │  │   │   Money   │  │ change due│  │ validation│                 │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘                 │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO FILESYSTEM • NO NETWORK • PURE FUNCTIONS         │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                 comanda-store (Persistence Layer)               │   │
//! │  │            JSON snapshot files, backup import/export            │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`catalog`] - Menu catalog types (Menu, Dish, Catalog)
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`ledger`] - Per-shift sale counters with clamp-at-zero semantics
//! - [`cart`] - Checkout cart and cash change calculation
//! - [`tally`] - Shift aggregation (totals, subtotals, best sellers)
//! - [`report`] - End-of-shift report document assembly
//! - [`backup`] - Structural validation of backup files
//! - [`error`] - Domain error types
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Every aggregate is recomputed from inputs on each
//!    call; nothing is cached, so nothing can go stale
//! 2. **No I/O**: Filesystem, network and storage access is FORBIDDEN here
//! 3. **Integer Money**: All monetary values are whole units (i64), never
//!    floats
//! 4. **Total Operations**: Ledger mutation and aggregation cannot fail;
//!    the only fallible path is backup import, which returns typed errors
//!
//! ## Example Usage
//!
//! ```rust
//! use comanda_core::{Catalog, Dish, Menu, Money, SaleLedger};
//!
//! let lunch = Menu::new("Lunch");
//! let soup = Dish::new(&lunch.id, "Soup of the Day", Money::from_units(5_000));
//! let soup_id = soup.id.clone();
//! let catalog = Catalog::new(vec![lunch], vec![soup]);
//!
//! // Three soups sold
//! let mut ledger = SaleLedger::new();
//! ledger.adjust(&soup_id, 3);
//!
//! let totals = comanda_core::shift_totals(&catalog, &ledger);
//! assert_eq!(totals.total_units, 3);
//! assert_eq!(totals.total_money, Money::from_units(15_000));
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod backup;
pub mod cart;
pub mod catalog;
pub mod error;
pub mod ledger;
pub mod money;
pub mod report;
pub mod tally;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use comanda_core::Money` instead of
// `use comanda_core::money::Money`

pub use backup::parse_backup;
pub use cart::{change_due, parse_tendered, CartLedger, TenderOutcome, TENDER_PRESETS};
pub use catalog::{Catalog, Dish, Menu};
pub use error::{ImportError, ImportResult};
pub use ledger::SaleLedger;
pub use money::Money;
pub use report::{build_report, ReportDocument, ReportFooter, ReportLine, ReportSection};
pub use tally::{
    category_breakdown, grand_total_money, regular_subtotal, shift_totals, top_sellers,
    CategorySales, DishSales, ShiftTotals, Subtotal, TopSeller,
};

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Number of rows on the best-sellers panel.
///
/// The report screen shows a short "top dishes" list next to the totals.
/// Three rows fit the panel; callers pass this to [`top_sellers`] unless a
/// screen needs a different depth.
pub const TOP_SELLER_LIMIT: usize = 3;
