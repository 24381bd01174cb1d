//! # Report Assembly
//!
//! Packages the aggregation views into one ordered document that external
//! renderers (the on-screen table, the PDF exporter) walk top to bottom.
//! The core computes every number; renderers only format and draw.
//!
//! ## Document Shape
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  ReportDocument                                                         │
//! │  ├── generated_at                 timestamp of assembly                 │
//! │  ├── totals (ShiftTotals)         header block: all/regular x units/$   │
//! │  ├── sections[] (catalog order)                                         │
//! │  │     ├── title, special flag                                          │
//! │  │     ├── lines[]: name · unit price · qty · subtotal                  │
//! │  │     └── subtotal row (units + money)                                 │
//! │  └── footer: grand total units + grand total money                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::catalog::Catalog;
use crate::ledger::SaleLedger;
use crate::money::Money;
use crate::tally::{category_breakdown, shift_totals, ShiftTotals};

// =============================================================================
// Document Model
// =============================================================================

/// One printable line: a dish with its sold quantity and line subtotal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct ReportLine {
    pub name: String,
    pub unit_price: Money,
    pub qty: u32,
    pub subtotal: Money,
}

/// One category section: its lines followed by a subtotal row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct ReportSection {
    /// Section heading (the menu name).
    pub title: String,
    /// Carried through so renderers can style side-sales sections apart.
    pub special: bool,
    pub lines: Vec<ReportLine>,
    pub subtotal_units: u64,
    pub subtotal_money: Money,
}

/// The closing grand-total row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct ReportFooter {
    pub total_units: u64,
    pub total_money: Money,
}

/// A fully computed end-of-shift report, ready for rendering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct ReportDocument {
    /// When this document was assembled.
    #[ts(as = "String")]
    pub generated_at: DateTime<Utc>,

    /// Header block: total and regular units/money.
    pub totals: ShiftTotals,

    /// Non-empty category sections in catalog order.
    pub sections: Vec<ReportSection>,

    /// Grand-total row repeated at the bottom of the artifact.
    pub footer: ReportFooter,
}

// =============================================================================
// Assembly
// =============================================================================

/// Builds the end-of-shift report from the current catalog and ledger.
///
/// Total function: an empty shift produces a document with zeroed totals and
/// no sections, which renderers show as an empty report rather than an error.
pub fn build_report(catalog: &Catalog, ledger: &SaleLedger) -> ReportDocument {
    let totals = shift_totals(catalog, ledger);

    let sections = category_breakdown(catalog, ledger)
        .into_iter()
        .map(|section| ReportSection {
            title: section.menu.name,
            special: section.menu.is_special,
            lines: section
                .lines
                .into_iter()
                .map(|line| ReportLine {
                    name: line.dish.name,
                    unit_price: line.dish.price,
                    qty: line.qty,
                    subtotal: line.subtotal,
                })
                .collect(),
            subtotal_units: section.units,
            subtotal_money: section.money,
        })
        .collect();

    ReportDocument {
        generated_at: Utc::now(),
        totals,
        sections,
        footer: ReportFooter {
            total_units: totals.total_units,
            total_money: totals.total_money,
        },
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
