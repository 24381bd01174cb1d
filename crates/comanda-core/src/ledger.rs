//! # Sale Ledger
//!
//! The running tally of units sold during the current shift.
//!
//! ## Ledger Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Sale Ledger Operations                              │
//! │                                                                         │
//! │  Frontend Action          Core Call               Ledger Change         │
//! │  ───────────────          ─────────               ─────────────         │
//! │                                                                         │
//! │  Tap dish tile ──────────► adjust(id, +1) ──────► qty += 1             │
//! │                                                                         │
//! │  Tap minus button ───────► adjust(id, -1) ──────► qty -= 1 (floor 0)   │
//! │                                                                         │
//! │  End-of-day reset ───────► reset() ─────────────► all entries removed  │
//! │                                                                         │
//! │  Render counters ────────► qty(id) ─────────────► (read only)          │
//! │                                                                         │
//! │  NOTE: An entry touched down to zero STAYS in the ledger at qty 0.     │
//! │        Aggregation filters on qty > 0, so reports are unaffected.      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Contrast with the Cart
//! The checkout cart ([`crate::cart::CartLedger`]) removes an entry when its
//! quantity reaches zero. The two containers look alike but follow different
//! zero rules, which is why they are separate types.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

// =============================================================================
// SaleLedger
// =============================================================================

/// Units sold per dish id for the current shift.
///
/// ## Invariants
/// - Quantities are never negative (`u32`, decrements clamp at zero)
/// - An entry, once touched, persists even at quantity zero until [`reset`]
/// - Dish ids are plain strings; the ledger does not know the catalog, so
///   entries survive dish deletion (they become orphans, see [`crate::tally`])
///
/// Serializes as a bare `{ dishId: qty }` object, the exact shape the web
/// view keeps in component state.
///
/// [`reset`]: SaleLedger::reset
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(transparent)]
pub struct SaleLedger(BTreeMap<String, u32>);

impl SaleLedger {
    /// Creates an empty ledger.
    pub fn new() -> Self {
        SaleLedger(BTreeMap::new())
    }

    /// Returns the recorded quantity for a dish (zero when never touched).
    pub fn qty(&self, dish_id: &str) -> u32 {
        self.0.get(dish_id).copied().unwrap_or(0)
    }

    /// Applies a signed correction to one dish counter.
    ///
    /// ## Behavior
    /// - `adjust(id, +n)` adds `n` units
    /// - `adjust(id, -n)` removes up to `n` units, clamping at zero
    /// - The entry is written even when the result is zero
    pub fn adjust(&mut self, dish_id: &str, delta: i32) {
        let current = self.qty(dish_id);
        let next = (current as i64 + delta as i64).clamp(0, u32::MAX as i64) as u32;
        self.0.insert(dish_id.to_string(), next);
    }

    /// Removes every entry, starting the next shift from a clean slate.
    pub fn reset(&mut self) {
        self.0.clear();
    }

    /// Total units across all entries, orphaned dish ids included.
    ///
    /// This is the one aggregate that does NOT consult the catalog: it counts
    /// plates that left the kitchen, whether or not the dish still exists.
    /// Every money aggregate lives in [`crate::tally`] and filters orphans.
    pub fn total_units(&self) -> u64 {
        self.0.values().map(|&q| q as u64).sum()
    }

    /// Number of entries, zero-quantity entries included.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True when no entry has ever been touched (or after [`reset`]).
    ///
    /// [`reset`]: SaleLedger::reset
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates `(dish_id, qty)` pairs, zero entries included.
    pub fn iter(&self) -> impl Iterator<Item = (&str, u32)> + '_ {
        self.0.iter().map(|(id, qty)| (id.as_str(), *qty))
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_adjust_accumulates() {
        let mut ledger = SaleLedger::new();
        ledger.adjust("soup", 1);
        ledger.adjust("soup", 1);
        ledger.adjust("soup", 1);
        assert_eq!(ledger.qty("soup"), 3);
        assert_eq!(ledger.total_units(), 3);
    }

    #[test]
    fn test_decrement_clamps_at_zero_and_keeps_entry() {
        let mut ledger = SaleLedger::new();
        ledger.adjust("soup", 2);
        ledger.adjust("soup", -5);

        assert_eq!(ledger.qty("soup"), 0);
        assert_eq!(ledger.len(), 1);
        assert!(!ledger.is_empty());
    }

    #[test]
    fn test_decrement_untouched_dish_creates_zero_entry() {
        let mut ledger = SaleLedger::new();
        ledger.adjust("soup", -1);

        assert_eq!(ledger.qty("soup"), 0);
        assert_eq!(ledger.len(), 1);
        assert_eq!(ledger.total_units(), 0);
    }

    #[test]
    fn test_zero_delta_changes_no_counter() {
        let mut ledger = SaleLedger::new();
        ledger.adjust("soup", 3);

        let before = ledger.clone();
        ledger.adjust("soup", 0);
        assert_eq!(ledger, before);

        // an untouched id gains a visible zero entry but no units
        ledger.adjust("ice", 0);
        assert_eq!(ledger.qty("ice"), 0);
        assert_eq!(ledger.total_units(), before.total_units());
    }

    #[test]
    fn test_mixed_delta_sequence_clamps_midway() {
        let mut ledger = SaleLedger::new();
        for delta in [3, -1, -9, 2, -1, 5] {
            ledger.adjust("soup", delta);
        }
        // 3 -> 2 -> 0 (clamped, not -7) -> 2 -> 1 -> 6
        assert_eq!(ledger.qty("soup"), 6);
    }

    #[test]
    fn test_untouched_dish_reads_zero() {
        let ledger = SaleLedger::new();
        assert_eq!(ledger.qty("never-sold"), 0);
        assert_eq!(ledger.len(), 0);
        assert!(ledger.is_empty());
    }

    #[test]
    fn test_reset_clears_everything() {
        let mut ledger = SaleLedger::new();
        ledger.adjust("soup", 3);
        ledger.adjust("ice", 2);
        ledger.adjust("ghost", -1); // zero entry

        ledger.reset();
        assert!(ledger.is_empty());
        assert_eq!(ledger.total_units(), 0);
        assert_eq!(ledger.qty("soup"), 0);
    }

    #[test]
    fn test_total_units_ignores_catalog() {
        // total_units counts raw entries; "deleted-dish" has no catalog row
        let mut ledger = SaleLedger::new();
        ledger.adjust("soup", 3);
        ledger.adjust("deleted-dish", 4);
        assert_eq!(ledger.total_units(), 7);
    }

    #[test]
    fn test_serializes_as_plain_map() {
        let mut ledger = SaleLedger::new();
        ledger.adjust("a", 2);
        ledger.adjust("b", 0);

        let json = serde_json::to_string(&ledger).unwrap();
        assert_eq!(json, r#"{"a":2,"b":0}"#);

        let parsed: SaleLedger = serde_json::from_str(r#"{"soup":3,"ice":2}"#).unwrap();
        assert_eq!(parsed.qty("soup"), 3);
        assert_eq!(parsed.qty("ice"), 2);
    }

    #[test]
    fn test_iter_includes_zero_entries() {
        let mut ledger = SaleLedger::new();
        ledger.adjust("b", 2);
        ledger.adjust("a", -1);

        let entries: Vec<(&str, u32)> = ledger.iter().collect();
        assert_eq!(entries, vec![("a", 0), ("b", 2)]);
    }
}
