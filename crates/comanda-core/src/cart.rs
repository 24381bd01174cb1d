//! # Checkout Cart and Change Calculator
//!
//! A scratch cart for ringing up one customer, plus the cash-tender math.
//!
//! ## Checkout Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Checkout Flow                                    │
//! │                                                                         │
//! │  Tap dish ────► adjust(id, +1) ──► CartLedger                          │
//! │                                       │                                 │
//! │                                       ▼                                 │
//! │                              total(&catalog) ──► $12,000               │
//! │                                       │                                 │
//! │  Type cash received ──► parse_tendered("20000")                        │
//! │                                       │                                 │
//! │                                       ▼                                 │
//! │                         change_due(total, tendered)                    │
//! │                              │                  │                       │
//! │                              ▼                  ▼                       │
//! │                      ChangeDue($8,000)   InsufficientFunds             │
//! │                                          { short: $3,000 }             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The cart is a helper for counting change. It never writes to the
//! [`crate::ledger::SaleLedger`]; the operator records the sale on the grid
//! separately.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::catalog::Catalog;
use crate::money::Money;

// =============================================================================
// Constants
// =============================================================================

/// Quick-tender buttons offered by the calculator screen, smallest first.
pub const TENDER_PRESETS: [Money; 4] = [
    Money::from_units(10_000),
    Money::from_units(20_000),
    Money::from_units(50_000),
    Money::from_units(100_000),
];

// =============================================================================
// CartLedger
// =============================================================================

/// Quantities per dish id for the sale currently being rung up.
///
/// ## Invariants
/// - No entry ever holds quantity zero: a decrement that reaches zero
///   removes the entry (unlike [`crate::ledger::SaleLedger`], which keeps it)
/// - Unknown dish ids (dish deleted mid-checkout) price at zero in [`total`]
///
/// [`total`]: CartLedger::total
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(transparent)]
pub struct CartLedger(BTreeMap<String, u32>);

impl CartLedger {
    /// Creates an empty cart.
    pub fn new() -> Self {
        CartLedger(BTreeMap::new())
    }

    /// Returns the quantity of a dish in the cart (zero when absent).
    pub fn qty(&self, dish_id: &str) -> u32 {
        self.0.get(dish_id).copied().unwrap_or(0)
    }

    /// Applies a signed correction to one cart line.
    ///
    /// ## Behavior
    /// - `adjust(id, +n)` adds `n` units, creating the line if needed
    /// - `adjust(id, -n)` removes units; at or below zero the line disappears
    pub fn adjust(&mut self, dish_id: &str, delta: i32) {
        let next = self.qty(dish_id) as i64 + delta as i64;
        if next <= 0 {
            self.0.remove(dish_id);
        } else {
            let clamped = next.min(u32::MAX as i64) as u32;
            self.0.insert(dish_id.to_string(), clamped);
        }
    }

    /// Empties the cart after the customer pays.
    pub fn clear(&mut self) {
        self.0.clear();
    }

    /// Prices the cart against the current catalog.
    ///
    /// Lines whose dish id no longer resolves contribute nothing. The stale
    /// line stays in the cart (visible to the operator) but costs zero.
    pub fn total(&self, catalog: &Catalog) -> Money {
        self.0
            .iter()
            .filter_map(|(id, qty)| catalog.dish(id).map(|dish| dish.price.times(*qty)))
            .sum()
    }

    /// True when no lines are present.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of distinct dishes in the cart.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Iterates `(dish_id, qty)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&str, u32)> + '_ {
        self.0.iter().map(|(id, qty)| (id.as_str(), *qty))
    }
}

// =============================================================================
// Tender Math
// =============================================================================

/// Result of comparing cash received against the cart total.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub enum TenderOutcome {
    /// Cash covers the total; hand back this much (zero on exact payment).
    ChangeDue(Money),
    /// Cash does not cover the total; this much is still owed.
    InsufficientFunds { short: Money },
}

impl TenderOutcome {
    /// True when the customer still owes money.
    pub fn is_insufficient(&self) -> bool {
        matches!(self, TenderOutcome::InsufficientFunds { .. })
    }
}

/// Computes change for a cash payment.
///
/// ## Example
/// ```rust
/// use comanda_core::cart::{change_due, TenderOutcome};
/// use comanda_core::money::Money;
///
/// let outcome = change_due(Money::from_units(15_000), Money::from_units(20_000));
/// assert_eq!(outcome, TenderOutcome::ChangeDue(Money::from_units(5_000)));
///
/// let outcome = change_due(Money::from_units(15_000), Money::from_units(10_000));
/// assert_eq!(
///     outcome,
///     TenderOutcome::InsufficientFunds { short: Money::from_units(5_000) }
/// );
/// ```
pub fn change_due(total: Money, tendered: Money) -> TenderOutcome {
    let diff = tendered - total;
    if diff.is_negative() {
        TenderOutcome::InsufficientFunds { short: diff.abs() }
    } else {
        TenderOutcome::ChangeDue(diff)
    }
}

/// Parses the free-text "cash received" field.
///
/// Whole non-negative amounts parse; everything else (blank input, text,
/// fractions, negatives) yields `None` and the calculator shows no verdict.
pub fn parse_tendered(input: &str) -> Option<Money> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return None;
    }
    let units: i64 = trimmed.parse().ok()?;
    if units < 0 {
        return None;
    }
    Some(Money::from_units(units))
}

// =============================================================================
// Unit Tests
// =============================================================================
