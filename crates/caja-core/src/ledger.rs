//! # Line-Item Ledger
//!
//! The ordered, mutable list of sale lines behind the items table.
//!
//! ## Ledger Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Ledger Operations                                    │
//! │                                                                         │
//! │  Form Action              Ledger Call              State Change         │
//! │  ───────────              ───────────              ────────────         │
//! │                                                                         │
//! │  Click Product ──────────► add_product() ────────► items.push(line)     │
//! │                                                                         │
//! │  Add Empty Row ──────────► add_blank() ──────────► items.push(line)     │
//! │                                                                         │
//! │  Edit Qty / Tax ─────────► update_field() ───────► items[i].field = v   │
//! │                                                                         │
//! │  Click ✖ ────────────────► remove() ─────────────► items.retain(..)     │
//! │                                                                         │
//! │  Any of the above ───────► recompute() ──────────► (read only)          │
//! │                                                                         │
//! │  NOTE: recompute() is total, never incremental. Derived amounts are     │
//! │        never stored, so there is no stale cache to invalidate.          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use crate::numeric::parse_lenient;
use crate::DEFAULT_LINE_QUANTITY;

// =============================================================================
// Product Reference
// =============================================================================

/// The product attributes a quick-add click carries into the ledger.
///
/// ## Design Notes
/// These are frozen copies: once the line exists it no longer cares what
/// happens to the product in the catalog.
#[derive(Debug, Clone, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ProductRef {
    pub sku: String,
    pub description: String,
    pub unit_price: f64,
    /// Fractional rate: 0.16 means 16%.
    pub tax_rate: f64,
}

// =============================================================================
// Line Item
// =============================================================================

/// One row of the sale.
///
/// ## Design Notes
/// - `sku`, `description`, `unit_price`: read-only once added
/// - `quantity`, `tax_rate`: user-editable, stored exactly as entered
///   (a negative quantity is stored negative; only the derived line
///   amount is floored at zero)
/// - `id`: UUID v4 handle used for removal and edits, stable while rows
///   above it are deleted
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct LineItem {
    /// Line identity (UUID v4).
    pub id: String,

    /// SKU at time of adding (frozen).
    pub sku: String,

    /// Description at time of adding (frozen).
    pub description: String,

    /// Unit price at time of adding (frozen).
    pub unit_price: f64,

    /// Quantity, user-editable.
    pub quantity: f64,

    /// Fractional tax rate (0.16 = 16%), user-editable.
    pub tax_rate: f64,

    /// When this line was added.
    #[ts(as = "String")]
    pub added_at: DateTime<Utc>,
}

impl LineItem {
    fn new(sku: String, description: String, unit_price: f64, tax_rate: f64) -> Self {
        LineItem {
            id: Uuid::new_v4().to_string(),
            sku,
            description,
            unit_price,
            quantity: DEFAULT_LINE_QUANTITY,
            tax_rate,
            added_at: Utc::now(),
        }
    }

    /// Creates a line from a quick-add product, quantity defaulted to 1.
    pub fn from_product(product: &ProductRef) -> Self {
        LineItem::new(
            product.sku.clone(),
            product.description.clone(),
            product.unit_price,
            product.tax_rate,
        )
    }

    /// Creates an empty, hand-fillable line.
    pub fn blank() -> Self {
        LineItem::new(String::new(), String::new(), 0.0, 0.0)
    }

    /// Raw pre-tax amount: `quantity × unit_price`. Sign-preserving.
    #[inline]
    pub fn gross(&self) -> f64 {
        self.quantity * self.unit_price
    }

    /// Raw tax amount: `quantity × unit_price × tax_rate`. Sign-preserving.
    #[inline]
    pub fn tax(&self) -> f64 {
        self.gross() * self.tax_rate
    }

    /// Tax-inclusive display amount, floored at zero.
    ///
    /// The floor applies ONLY here: the raw `gross()`/`tax()` values flow
    /// sign-correct into the subtotal and tax sums.
    #[inline]
    pub fn line_amount(&self) -> f64 {
        (self.gross() * (1.0 + self.tax_rate)).max(0.0)
    }

    /// True when the line carries neither a SKU nor a description.
    pub fn is_blank(&self) -> bool {
        self.sku.trim().is_empty() && self.description.trim().is_empty()
    }
}

// =============================================================================
// Editable Fields
// =============================================================================

/// The two line fields the cashier may edit after a row exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum LineField {
    Quantity,
    TaxRate,
}

// =============================================================================
// Ledger
// =============================================================================

/// The ordered collection of line items composing a sale.
///
/// ## Invariants
/// - Insertion order is display order; order never affects totals
/// - Derived amounts are recomputed from current fields, never cached
/// - Removal is idempotent: removing an absent id is a no-op
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Ledger {
    /// Lines in display order.
    pub items: Vec<LineItem>,

    /// When the ledger was created.
    #[ts(as = "String")]
    pub created_at: DateTime<Utc>,
}

impl Ledger {
    /// Creates a new empty ledger.
    pub fn new() -> Self {
        Ledger {
            items: Vec::new(),
            created_at: Utc::now(),
        }
    }

    /// Appends a line built from a quick-add product; returns it.
    ///
    /// Never fails: missing payload fields were already defaulted to
    /// empty string / 0 upstream.
    pub fn add_product(&mut self, product: &ProductRef) -> &LineItem {
        self.items.push(LineItem::from_product(product));
        self.items.last().expect("just pushed")
    }

    /// Appends an empty row for hand-typed lines; returns it.
    pub fn add_blank(&mut self) -> &LineItem {
        self.items.push(LineItem::blank());
        self.items.last().expect("just pushed")
    }

    /// Removes a line by id. Idempotent: absent ids are a no-op.
    ///
    /// Returns whether a line was actually removed.
    pub fn remove(&mut self, id: &str) -> bool {
        let before = self.items.len();
        self.items.retain(|item| item.id != id);
        self.items.len() != before
    }

    /// Applies a user edit to a line field.
    ///
    /// The raw string goes through the lenient policy (parse failure ⇒ 0)
    /// and the result is stored as entered, negatives included. Unknown
    /// ids are a no-op: the row may have been removed mid-edit.
    pub fn update_field(&mut self, id: &str, field: LineField, raw: &str) {
        let value = parse_lenient(raw);
        if let Some(item) = self.items.iter_mut().find(|item| item.id == id) {
            match field {
                LineField::Quantity => item.quantity = value,
                LineField::TaxRate => item.tax_rate = value,
            }
        }
    }

    /// Looks up a line by id.
    pub fn get(&self, id: &str) -> Option<&LineItem> {
        self.items.iter().find(|item| item.id == id)
    }

    /// Number of lines.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Checks if the ledger has no lines.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Recomputes every derived amount in one O(n) pass.
    ///
    /// Pure with respect to the ledger: call it after any mutation,
    /// before totals are read.
    pub fn recompute(&self) -> LedgerTotals {
        let mut subtotal = 0.0;
        let mut tax_total = 0.0;
        let mut lines = Vec::with_capacity(self.items.len());

        for item in &self.items {
            subtotal += item.gross();
            tax_total += item.tax();
            lines.push(LineAmount {
                id: item.id.clone(),
                line_amount: item.line_amount(),
            });
        }

        LedgerTotals {
            subtotal,
            tax_total,
            total: subtotal + tax_total,
            lines,
        }
    }
}

impl Default for Ledger {
    fn default() -> Self {
        Ledger::new()
    }
}

// =============================================================================
// Derived Totals
// =============================================================================

/// Per-line derived display amount.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct LineAmount {
    pub id: String,
    pub line_amount: f64,
}

/// The fully derived totals of a ledger.
///
/// `total` is defined as `subtotal + tax_total`; the per-line floor never
/// leaks into these sums.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct LedgerTotals {
    pub subtotal: f64,
    pub tax_total: f64,
    pub total: f64,
    pub lines: Vec<LineAmount>,
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    fn widget() -> ProductRef {
        ProductRef {
            sku: "A1".to_string(),
            description: "Widget".to_string(),
            unit_price: 10.0,
            tax_rate: 0.1,
        }
    }

    #[test]
    fn test_add_product_defaults_quantity_to_one() {
        let mut ledger = Ledger::new();
        let line = ledger.add_product(&widget());

        assert_eq!(line.quantity, 1.0);
        assert!((line.line_amount() - 11.0).abs() < EPS);

        let totals = ledger.recompute();
        assert!((totals.subtotal - 10.0).abs() < EPS);
        assert!((totals.tax_total - 1.0).abs() < EPS);
        assert!((totals.total - 11.0).abs() < EPS);
    }

    #[test]
    fn test_add_blank_row() {
        let mut ledger = Ledger::new();
        let line = ledger.add_blank();

        assert!(line.is_blank());
        assert_eq!(line.quantity, 1.0);
        assert_eq!(line.unit_price, 0.0);
        assert_eq!(line.tax_rate, 0.0);
        assert!((ledger.recompute().total).abs() < EPS);
    }

    #[test]
    fn test_two_line_scenario() {
        // (qty=2, price=5, tax=0) and (qty=1, price=3, tax=0.2)
        let mut ledger = Ledger::new();
        let a = ledger
            .add_product(&ProductRef {
                sku: "A".into(),
                description: "a".into(),
                unit_price: 5.0,
                tax_rate: 0.0,
            })
            .id
            .clone();
        ledger.add_product(&ProductRef {
            sku: "B".into(),
            description: "b".into(),
            unit_price: 3.0,
            tax_rate: 0.2,
        });
        ledger.update_field(&a, LineField::Quantity, "2");

        let totals = ledger.recompute();
        assert!((totals.subtotal - 13.0).abs() < EPS);
        assert!((totals.tax_total - 0.6).abs() < EPS);
        assert!((totals.total - 13.6).abs() < EPS);
    }

    #[test]
    fn test_total_equals_subtotal_plus_tax() {
        let mut ledger = Ledger::new();
        for (price, tax) in [(9.99, 0.16), (3.5, 0.0), (120.0, 0.08)] {
            ledger.add_product(&ProductRef {
                sku: "X".into(),
                description: "x".into(),
                unit_price: price,
                tax_rate: tax,
            });
        }
        let totals = ledger.recompute();
        assert!((totals.total - (totals.subtotal + totals.tax_total)).abs() < EPS);
    }

    #[test]
    fn test_update_field_lenient_parse() {
        let mut ledger = Ledger::new();
        let id = ledger.add_product(&widget()).id.clone();

        ledger.update_field(&id, LineField::Quantity, "3");
        assert_eq!(ledger.get(&id).unwrap().quantity, 3.0);

        // A typo never blocks the edit; it stores 0.
        ledger.update_field(&id, LineField::Quantity, "3x");
        assert_eq!(ledger.get(&id).unwrap().quantity, 0.0);

        ledger.update_field(&id, LineField::TaxRate, "0.16");
        assert_eq!(ledger.get(&id).unwrap().tax_rate, 0.16);
    }

    #[test]
    fn test_negative_quantity_floors_line_amount_only() {
        let mut ledger = Ledger::new();
        let id = ledger.add_product(&widget()).id.clone();
        ledger.update_field(&id, LineField::Quantity, "-2");

        // Stored as entered.
        assert_eq!(ledger.get(&id).unwrap().quantity, -2.0);

        // Display amount floors at zero...
        assert_eq!(ledger.get(&id).unwrap().line_amount(), 0.0);

        // ...while the sums stay sign-correct and reconciled.
        let totals = ledger.recompute();
        assert!((totals.subtotal - (-20.0)).abs() < EPS);
        assert!((totals.tax_total - (-2.0)).abs() < EPS);
        assert!((totals.total - (totals.subtotal + totals.tax_total)).abs() < EPS);
        assert_eq!(totals.lines[0].line_amount, 0.0);
    }

    #[test]
    fn test_negative_tax_rate_floors_line_amount() {
        let mut ledger = Ledger::new();
        let id = ledger.add_product(&widget()).id.clone();

        // 1 × 10 × (1 + (-2)) = -10 → floored at 0
        ledger.update_field(&id, LineField::TaxRate, "-2");
        assert_eq!(ledger.get(&id).unwrap().line_amount(), 0.0);
    }

    #[test]
    fn test_remove_is_idempotent() {
        let mut ledger = Ledger::new();
        let id = ledger.add_product(&widget()).id.clone();

        assert!(ledger.remove(&id));
        assert!(!ledger.remove(&id));
        assert!(ledger.is_empty());
    }

    #[test]
    fn test_remove_then_recompute_matches_never_added() {
        let mut ledger = Ledger::new();
        ledger.add_product(&ProductRef {
            sku: "KEEP".into(),
            description: "keep".into(),
            unit_price: 7.0,
            tax_rate: 0.16,
        });
        let baseline = ledger.recompute();

        let id = ledger.add_product(&widget()).id.clone();
        ledger.remove(&id);
        let totals = ledger.recompute();

        assert!((totals.subtotal - baseline.subtotal).abs() < EPS);
        assert!((totals.tax_total - baseline.tax_total).abs() < EPS);
        assert!((totals.total - baseline.total).abs() < EPS);
        assert_eq!(totals.lines.len(), baseline.lines.len());
    }

    #[test]
    fn test_update_unknown_id_is_noop() {
        let mut ledger = Ledger::new();
        ledger.add_product(&widget());
        ledger.update_field("no-such-id", LineField::Quantity, "99");
        assert_eq!(ledger.items[0].quantity, 1.0);
    }

    #[test]
    fn test_insertion_order_is_preserved() {
        let mut ledger = Ledger::new();
        for sku in ["S1", "S2", "S3"] {
            ledger.add_product(&ProductRef {
                sku: sku.into(),
                description: sku.into(),
                unit_price: 1.0,
                tax_rate: 0.0,
            });
        }
        let skus: Vec<&str> = ledger.items.iter().map(|i| i.sku.as_str()).collect();
        assert_eq!(skus, vec!["S1", "S2", "S3"]);
    }
}
