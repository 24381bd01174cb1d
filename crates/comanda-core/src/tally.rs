//! # Shift Aggregation
//!
//! Pure functions that derive every reporting view from a catalog snapshot
//! plus the sale ledger. Nothing here is cached: each call recomputes from
//! scratch, which is linear in dish count and always cheap at this scale.
//!
//! ## Aggregate Views
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │               (Catalog, SaleLedger)  ──►  derived views                 │
//! │                                                                         │
//! │  grand_total_money ──► one number, revenue across every category        │
//! │  regular_subtotal ───► units + money for non-special categories only    │
//! │  shift_totals ───────► the report header block (both of the above)      │
//! │  category_breakdown ─► per-category sections with per-dish lines        │
//! │  top_sellers ────────► best sellers, ties keep catalog order            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Orphan Rules
//! Two kinds of dangling reference can appear after catalog edits:
//!
//! - a ledger entry whose dish id was deleted
//! - a dish whose menu id was deleted
//!
//! Both are excluded from every view below. The single exception is
//! [`SaleLedger::total_units`], which counts raw ledger entries without
//! consulting the catalog at all; [`ShiftTotals`] carries that number as
//! `total_units`, so the header's unit count and money total can disagree
//! after a deletion. That split is intentional and load-bearing for
//! compatibility with existing shift records.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::catalog::{Catalog, Dish, Menu};
use crate::ledger::SaleLedger;
use crate::money::Money;

// =============================================================================
// Aggregate DTOs
// =============================================================================

/// A units + money pair for one slice of the shift.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Subtotal {
    /// Units sold in this slice.
    pub units: u64,
    /// Revenue for this slice.
    pub money: Money,
}

/// The headline numbers shown at the top of every shift report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct ShiftTotals {
    /// All units in the ledger, deleted dishes included (catalog-blind).
    pub total_units: u64,
    /// Revenue across every catalog-resolvable dish.
    pub total_money: Money,
    /// Units sold from regular (non-special) categories.
    pub regular_units: u64,
    /// Revenue from regular (non-special) categories.
    pub regular_money: Money,
}

/// One dish line inside a category section.
///
/// Carries a frozen copy of the dish so downstream rendering stays stable
/// even if the catalog is edited right after aggregation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct DishSales {
    pub dish: Dish,
    pub qty: u32,
    pub subtotal: Money,
}

/// One category section of the breakdown: its dishes sold plus subtotals.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct CategorySales {
    pub menu: Menu,
    /// Dishes with at least one unit sold, in catalog order.
    pub lines: Vec<DishSales>,
    pub units: u64,
    pub money: Money,
}

/// One row of the best-sellers view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct TopSeller {
    pub dish: Dish,
    pub qty: u32,
}

// =============================================================================
// Aggregation Functions
// =============================================================================
// All functions here are total: empty or mismatched inputs yield zero-valued
// aggregates and empty collections, never errors.

/// Revenue across the whole catalog: `Σ price × qty` per resolvable dish.
///
/// Walks the catalog (not the ledger), so ledger entries for deleted dishes
/// contribute nothing, and dishes whose menu was deleted are skipped.
pub fn grand_total_money(catalog: &Catalog, ledger: &SaleLedger) -> Money {
    catalog
        .dishes
        .iter()
        .filter(|dish| catalog.menu_of(dish).is_some())
        .map(|dish| dish.price.times(ledger.qty(&dish.id)))
        .sum()
}

/// Units and revenue restricted to regular (non-special) categories.
///
/// "Regular" means the dish's menu exists and is not flagged special. This
/// is the "how many lunches went out" number the operator checks first.
pub fn regular_subtotal(catalog: &Catalog, ledger: &SaleLedger) -> Subtotal {
    let mut units = 0u64;
    let mut money = Money::zero();

    for dish in &catalog.dishes {
        if let Some(menu) = catalog.menu_of(dish) {
            if !menu.is_special {
                let qty = ledger.qty(&dish.id);
                units += qty as u64;
                money += dish.price.times(qty);
            }
        }
    }

    Subtotal { units, money }
}

/// Assembles the report header block.
///
/// Note the asymmetry: `total_units` comes straight from the ledger
/// (catalog-blind), while the three other numbers filter through the catalog.
pub fn shift_totals(catalog: &Catalog, ledger: &SaleLedger) -> ShiftTotals {
    let regular = regular_subtotal(catalog, ledger);
    ShiftTotals {
        total_units: ledger.total_units(),
        total_money: grand_total_money(catalog, ledger),
        regular_units: regular.units,
        regular_money: regular.money,
    }
}

/// Per-category sections in catalog order.
///
/// ## Rules
/// - Only dishes with `qty > 0` produce lines
/// - Categories with no qualifying dish are omitted outright
/// - Line order inside a section follows catalog dish order
pub fn category_breakdown(catalog: &Catalog, ledger: &SaleLedger) -> Vec<CategorySales> {
    let mut sections = Vec::new();

    for menu in &catalog.menus {
        let mut lines = Vec::new();
        let mut units = 0u64;
        let mut money = Money::zero();

        for dish in catalog.dishes_in(&menu.id) {
            let qty = ledger.qty(&dish.id);
            if qty == 0 {
                continue;
            }
            let subtotal = dish.price.times(qty);
            units += qty as u64;
            money += subtotal;
            lines.push(DishSales {
                dish: dish.clone(),
                qty,
                subtotal,
            });
        }

        if !lines.is_empty() {
            sections.push(CategorySales {
                menu: menu.clone(),
                lines,
                units,
                money,
            });
        }
    }

    sections
}

/// The `limit` best-selling dishes, descending by units sold.
///
/// ## Tie-Breaking
/// `Vec::sort_by` is stable, so dishes with equal quantities keep their
/// relative catalog order. Two runs over the same state always return the
/// same list.
pub fn top_sellers(catalog: &Catalog, ledger: &SaleLedger, limit: usize) -> Vec<TopSeller> {
    let mut ranked: Vec<TopSeller> = catalog
        .dishes
        .iter()
        .filter(|dish| catalog.menu_of(dish).is_some())
        .filter_map(|dish| {
            let qty = ledger.qty(&dish.id);
            if qty > 0 {
                Some(TopSeller {
                    dish: dish.clone(),
                    qty,
                })
            } else {
                None
            }
        })
        .collect();

    ranked.sort_by(|a, b| b.qty.cmp(&a.qty));
    ranked.truncate(limit);
    ranked
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn menu(id: &str, name: &str, special: bool) -> Menu {
        Menu {
            id: id.to_string(),
            name: name.to_string(),
            is_special: special,
        }
    }

    fn dish(id: &str, menu_id: &str, name: &str, price: i64) -> Dish {
        Dish {
            id: id.to_string(),
            menu_id: menu_id.to_string(),
            name: name.to_string(),
            price: Money::from_units(price),
            description: None,
        }
    }

    /// One regular category (Lunch / Soup $5,000) and one special category
    /// (Other / Ice $2,000), with Soup=3 and Ice=2 sold.
    fn shift_fixture() -> (Catalog, SaleLedger) {
        let catalog = Catalog::new(
            vec![menu("lunch", "Lunch", false), menu("other", "Other", true)],
            vec![
                dish("soup", "lunch", "Soup", 5_000),
                dish("ice", "other", "Ice", 2_000),
            ],
        );
        let mut ledger = SaleLedger::new();
        ledger.adjust("soup", 3);
        ledger.adjust("ice", 2);
        (catalog, ledger)
    }

    #[test]
    fn test_shift_scenario() {
        let (catalog, ledger) = shift_fixture();

        assert_eq!(grand_total_money(&catalog, &ledger), Money::from_units(19_000));

        let regular = regular_subtotal(&catalog, &ledger);
        assert_eq!(regular.money, Money::from_units(15_000));
        assert_eq!(regular.units, 3);

        let totals = shift_totals(&catalog, &ledger);
        assert_eq!(totals.total_units, 5);
        assert_eq!(totals.total_money, Money::from_units(19_000));
        assert_eq!(totals.regular_units, 3);
        assert_eq!(totals.regular_money, Money::from_units(15_000));

        let breakdown = category_breakdown(&catalog, &ledger);
        assert_eq!(breakdown.len(), 2);

        let top = top_sellers(&catalog, &ledger, 3);
        let names: Vec<&str> = top.iter().map(|t| t.dish.name.as_str()).collect();
        assert_eq!(names, vec!["Soup", "Ice"]);
        assert_eq!(top[0].qty, 3);
        assert_eq!(top[1].qty, 2);
    }

    #[test]
    fn test_empty_inputs_yield_zero_aggregates() {
        let catalog = Catalog::default();
        let ledger = SaleLedger::new();

        assert!(grand_total_money(&catalog, &ledger).is_zero());
        assert_eq!(regular_subtotal(&catalog, &ledger).units, 0);
        assert!(category_breakdown(&catalog, &ledger).is_empty());
        assert!(top_sellers(&catalog, &ledger, 3).is_empty());

        let totals = shift_totals(&catalog, &ledger);
        assert_eq!(totals.total_units, 0);
        assert!(totals.total_money.is_zero());
    }

    #[test]
    fn test_reset_zeroes_every_view() {
        let (catalog, mut ledger) = shift_fixture();
        ledger.reset();

        assert!(grand_total_money(&catalog, &ledger).is_zero());
        assert!(category_breakdown(&catalog, &ledger).is_empty());
        assert!(top_sellers(&catalog, &ledger, 3).is_empty());
        assert_eq!(shift_totals(&catalog, &ledger).total_units, 0);
    }

    #[test]
    fn test_deleted_dish_entry_excluded_from_money_counted_in_units() {
        let (catalog, mut ledger) = shift_fixture();
        ledger.adjust("deleted-dish", 4);

        // money unchanged, the catalog-blind unit counter moves
        assert_eq!(grand_total_money(&catalog, &ledger), Money::from_units(19_000));
        let totals = shift_totals(&catalog, &ledger);
        assert_eq!(totals.total_units, 9);
        assert_eq!(totals.total_money, Money::from_units(19_000));
    }

    #[test]
    fn test_menu_orphaned_dish_excluded_everywhere_but_unit_count() {
        let catalog = Catalog::new(
            vec![menu("lunch", "Lunch", false)],
            vec![
                dish("soup", "lunch", "Soup", 5_000),
                dish("ghost", "deleted-menu", "Ghost", 9_000),
            ],
        );
        let mut ledger = SaleLedger::new();
        ledger.adjust("soup", 1);
        ledger.adjust("ghost", 2);

        assert_eq!(grand_total_money(&catalog, &ledger), Money::from_units(5_000));
        assert_eq!(regular_subtotal(&catalog, &ledger).units, 1);

        let breakdown = category_breakdown(&catalog, &ledger);
        assert_eq!(breakdown.len(), 1);
        assert_eq!(breakdown[0].menu.name, "Lunch");

        let top = top_sellers(&catalog, &ledger, 3);
        assert_eq!(top.len(), 1);
        assert_eq!(top[0].dish.name, "Soup");

        // the raw counter still sees the ghost's units
        assert_eq!(shift_totals(&catalog, &ledger).total_units, 3);
    }

    #[test]
    fn test_breakdown_omits_empty_categories_and_zero_lines() {
        let catalog = Catalog::new(
            vec![
                menu("lunch", "Lunch", false),
                menu("drinks", "Drinks", false),
            ],
            vec![
                dish("soup", "lunch", "Soup", 5_000),
                dish("rice", "lunch", "Rice", 4_000),
                dish("cola", "drinks", "Cola", 1_500),
            ],
        );
        let mut ledger = SaleLedger::new();
        ledger.adjust("soup", 2);
        ledger.adjust("rice", 1);
        ledger.adjust("rice", -1); // back to zero, entry retained

        let breakdown = category_breakdown(&catalog, &ledger);
        assert_eq!(breakdown.len(), 1); // Drinks never sold, Rice at zero

        let lunch = &breakdown[0];
        assert_eq!(lunch.menu.name, "Lunch");
        assert_eq!(lunch.lines.len(), 1);
        assert_eq!(lunch.lines[0].dish.name, "Soup");
        assert_eq!(lunch.lines[0].subtotal, Money::from_units(10_000));
        assert_eq!(lunch.units, 2);
        assert_eq!(lunch.money, Money::from_units(10_000));
    }

    #[test]
    fn test_breakdown_preserves_catalog_order() {
        let catalog = Catalog::new(
            vec![menu("b", "Second", false), menu("a", "First", false)],
            vec![
                dish("d2", "a", "Late Dish", 1_000),
                dish("d1", "b", "Early Dish", 1_000),
            ],
        );
        let mut ledger = SaleLedger::new();
        ledger.adjust("d1", 1);
        ledger.adjust("d2", 1);

        // section order follows menus vec, not alphabetical ids
        let breakdown = category_breakdown(&catalog, &ledger);
        let titles: Vec<&str> = breakdown.iter().map(|s| s.menu.name.as_str()).collect();
        assert_eq!(titles, vec!["Second", "First"]);
    }

    #[test]
    fn test_grand_total_additivity_over_breakdown() {
        let (catalog, mut ledger) = shift_fixture();
        ledger.adjust("deleted-dish", 7); // must not break the law

        let breakdown_sum: Money = category_breakdown(&catalog, &ledger)
            .iter()
            .map(|section| section.money)
            .sum();
        assert_eq!(grand_total_money(&catalog, &ledger), breakdown_sum);
    }

    #[test]
    fn test_partition_law_regular_plus_special() {
        let (catalog, ledger) = shift_fixture();

        let regular = regular_subtotal(&catalog, &ledger).money;
        let special: Money = category_breakdown(&catalog, &ledger)
            .iter()
            .filter(|section| section.menu.is_special)
            .map(|section| section.money)
            .sum();

        assert_eq!(grand_total_money(&catalog, &ledger), regular + special);
    }

    #[test]
    fn test_top_sellers_stable_tie_break() {
        // catalog order [C, A, B]; A and B tie at 5, C trails at 3
        let catalog = Catalog::new(
            vec![menu("m", "Menu", false)],
            vec![
                dish("c", "m", "C", 1_000),
                dish("a", "m", "A", 1_000),
                dish("b", "m", "B", 1_000),
            ],
        );
        let mut ledger = SaleLedger::new();
        ledger.adjust("a", 5);
        ledger.adjust("b", 5);
        ledger.adjust("c", 3);

        let top = top_sellers(&catalog, &ledger, 2);
        let names: Vec<&str> = top.iter().map(|t| t.dish.name.as_str()).collect();
        assert_eq!(names, vec!["A", "B"]);
    }

    #[test]
    fn test_top_sellers_filters_zero_and_truncates() {
        let catalog = Catalog::new(
            vec![menu("m", "Menu", false)],
            vec![
                dish("a", "m", "A", 1_000),
                dish("b", "m", "B", 1_000),
                dish("c", "m", "C", 1_000),
                dish("d", "m", "D", 1_000),
            ],
        );
        let mut ledger = SaleLedger::new();
        ledger.adjust("a", 1);
        ledger.adjust("b", 4);
        ledger.adjust("c", 2);
        ledger.adjust("d", -1); // zero entry, must not rank

        let top = top_sellers(&catalog, &ledger, 3);
        let names: Vec<&str> = top.iter().map(|t| t.dish.name.as_str()).collect();
        assert_eq!(names, vec!["B", "C", "A"]);

        assert_eq!(top_sellers(&catalog, &ledger, 2).len(), 2);
        assert_eq!(top_sellers(&catalog, &ledger, 0).len(), 0);
    }
}
