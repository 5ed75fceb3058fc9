//! # Payment Preview
//!
//! Payment state and the derived change/balance preview shown under the
//! totals before the form is submitted.
//!
//! ## Preview Semantics
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Payment Preview                                      │
//! │                                                                         │
//! │  Total: 80.00        Method: CASH        Tendered: 100.00               │
//! │                                                                         │
//! │  applied = min(tendered, total)     = 80.00                             │
//! │  change  = max(0, tendered-applied) = 20.00  ◄── cash only              │
//! │  balance = max(0, total-applied)    =  0.00                             │
//! │                                                                         │
//! │  Partial apply (checkbox + amount) caps the applied portion instead:    │
//! │  applied = min(max(0, partial), total)   then, for cash,                │
//! │  applied = min(applied, tendered)                                       │
//! │                                                                         │
//! │  Change only has meaning for cash: the customer may overpay in bills.   │
//! │  Balance applies to any method when the sale is under-covered.          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::CASH_LABELS;

// =============================================================================
// Payment Method
// =============================================================================

/// How the customer pays.
///
/// The form only distinguishes cash from everything else: change is a
/// cash concept, and non-cash tenders are assumed to pay exactly the
/// applied amount.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum PaymentMethod {
    /// Physical cash payment ("cash" / "efectivo").
    Cash,
    /// Any other tender (card, transfer, …).
    Other,
}

impl PaymentMethod {
    /// Resolves a form label into a method, case-insensitively.
    ///
    /// ## Example
    /// ```rust
    /// use caja_core::payment::PaymentMethod;
    ///
    /// assert_eq!(PaymentMethod::from_label("EFECTIVO"), PaymentMethod::Cash);
    /// assert_eq!(PaymentMethod::from_label("cash"), PaymentMethod::Cash);
    /// assert_eq!(PaymentMethod::from_label("card"), PaymentMethod::Other);
    /// ```
    pub fn from_label(label: &str) -> Self {
        let label = label.trim();
        if CASH_LABELS
            .iter()
            .any(|cash| label.eq_ignore_ascii_case(cash))
        {
            PaymentMethod::Cash
        } else {
            PaymentMethod::Other
        }
    }

    /// Checks whether this is a cash tender.
    #[inline]
    pub const fn is_cash(&self) -> bool {
        matches!(self, PaymentMethod::Cash)
    }
}

impl Default for PaymentMethod {
    /// Counter sales default to cash.
    fn default() -> Self {
        PaymentMethod::Cash
    }
}

// =============================================================================
// Payment State
// =============================================================================

/// The payment inputs of the form session.
///
/// ## Design Notes
/// - `partial_apply_amount` is `None` when the partial-apply control is
///   absent or untouched; an absent collaborator means "feature
///   disabled", not an error
/// - `reference` rides along untouched for non-cash tenders (auth code,
///   transfer folio); the preview never reads it
#[derive(Debug, Clone, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct PaymentState {
    pub method: PaymentMethod,

    /// What the customer handed over.
    pub amount_tendered: f64,

    /// Whether the partial-apply checkbox is ticked.
    pub partial_apply_enabled: bool,

    /// The partial amount, when one was typed.
    pub partial_apply_amount: Option<f64>,

    /// Free-text external reference.
    pub reference: Option<String>,
}

impl PaymentState {
    /// Derives the change/balance preview for a given sale total.
    ///
    /// All clamping policy lives here and nowhere else: a partial amount
    /// exceeding the total (or, for cash, the tendered amount) is
    /// silently capped rather than rejected.
    pub fn preview(&self, total: f64) -> PaymentPreview {
        let is_cash = self.method.is_cash();

        let applied = match (self.partial_apply_enabled, self.partial_apply_amount) {
            (true, Some(partial)) => {
                let requested = partial.max(0.0);
                let capped = requested.min(total);
                if is_cash {
                    capped.min(self.amount_tendered)
                } else {
                    capped
                }
            }
            // Simple flow: the tender covers as much of the total as it can,
            // regardless of method.
            _ => self.amount_tendered.min(total),
        };

        let change = if is_cash {
            (self.amount_tendered - applied).max(0.0)
        } else {
            0.0
        };
        let balance = (total - applied).max(0.0);

        PaymentPreview {
            applied,
            change,
            balance,
            show_change_row: is_cash && self.amount_tendered > 0.0,
            show_balance_row: balance > 0.0,
        }
    }
}

// =============================================================================
// Payment Preview
// =============================================================================

/// The derived payment figures, plus row-visibility flags for the view.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct PaymentPreview {
    /// Portion of the payment counted against the total.
    pub applied: f64,

    /// Excess cash handed back to the customer.
    pub change: f64,

    /// Amount still owed after the applied portion.
    pub balance: f64,

    pub show_change_row: bool,
    pub show_balance_row: bool,
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    fn cash(tendered: f64) -> PaymentState {
        PaymentState {
            method: PaymentMethod::Cash,
            amount_tendered: tendered,
            ..PaymentState::default()
        }
    }

    #[test]
    fn test_method_labels() {
        assert_eq!(PaymentMethod::from_label("cash"), PaymentMethod::Cash);
        assert_eq!(PaymentMethod::from_label("CASH"), PaymentMethod::Cash);
        assert_eq!(PaymentMethod::from_label("Efectivo"), PaymentMethod::Cash);
        assert_eq!(PaymentMethod::from_label(" EFECTIVO "), PaymentMethod::Cash);
        assert_eq!(PaymentMethod::from_label("card"), PaymentMethod::Other);
        assert_eq!(PaymentMethod::from_label(""), PaymentMethod::Other);
    }

    #[test]
    fn test_cash_overpay() {
        // tendered 100 against total 80: applied 80, change 20, no balance
        let preview = cash(100.0).preview(80.0);
        assert!((preview.applied - 80.0).abs() < EPS);
        assert!((preview.change - 20.0).abs() < EPS);
        assert!(preview.balance.abs() < EPS);
        assert!(preview.show_change_row);
        assert!(!preview.show_balance_row);
    }

    #[test]
    fn test_cash_underpay_leaves_balance() {
        let preview = cash(30.0).preview(80.0);
        assert!((preview.applied - 30.0).abs() < EPS);
        assert!(preview.change.abs() < EPS);
        assert!((preview.balance - 50.0).abs() < EPS);
        assert!(preview.show_change_row);
        assert!(preview.show_balance_row);
    }

    #[test]
    fn test_non_cash_never_has_change() {
        let state = PaymentState {
            method: PaymentMethod::Other,
            amount_tendered: 500.0,
            ..PaymentState::default()
        };
        let preview = state.preview(80.0);
        assert!(preview.change.abs() < EPS);
        assert!(!preview.show_change_row);
        assert!((preview.applied - 80.0).abs() < EPS);
    }

    #[test]
    fn test_partial_apply_cash() {
        // tendered 50, partial 30, total 100: applied 30, change 20, balance 70
        let state = PaymentState {
            method: PaymentMethod::Cash,
            amount_tendered: 50.0,
            partial_apply_enabled: true,
            partial_apply_amount: Some(30.0),
            ..PaymentState::default()
        };
        let preview = state.preview(100.0);
        assert!((preview.applied - 30.0).abs() < EPS);
        assert!((preview.change - 20.0).abs() < EPS);
        assert!((preview.balance - 70.0).abs() < EPS);
    }

    #[test]
    fn test_partial_apply_clamps_to_total() {
        let state = PaymentState {
            method: PaymentMethod::Other,
            amount_tendered: 0.0,
            partial_apply_enabled: true,
            partial_apply_amount: Some(250.0),
            ..PaymentState::default()
        };
        let preview = state.preview(100.0);
        assert!((preview.applied - 100.0).abs() < EPS);
        assert!(preview.balance.abs() < EPS);
    }

    #[test]
    fn test_partial_apply_cash_clamps_to_tendered() {
        let state = PaymentState {
            method: PaymentMethod::Cash,
            amount_tendered: 20.0,
            partial_apply_enabled: true,
            partial_apply_amount: Some(60.0),
            ..PaymentState::default()
        };
        let preview = state.preview(100.0);
        assert!((preview.applied - 20.0).abs() < EPS);
        assert!(preview.change.abs() < EPS);
        assert!((preview.balance - 80.0).abs() < EPS);
    }

    #[test]
    fn test_partial_negative_amount_floors_to_zero() {
        let state = PaymentState {
            method: PaymentMethod::Cash,
            amount_tendered: 50.0,
            partial_apply_enabled: true,
            partial_apply_amount: Some(-10.0),
            ..PaymentState::default()
        };
        let preview = state.preview(100.0);
        assert!(preview.applied.abs() < EPS);
        assert!((preview.change - 50.0).abs() < EPS);
        assert!((preview.balance - 100.0).abs() < EPS);
    }

    #[test]
    fn test_partial_enabled_without_amount_uses_simple_flow() {
        let state = PaymentState {
            method: PaymentMethod::Cash,
            amount_tendered: 100.0,
            partial_apply_enabled: true,
            partial_apply_amount: None,
            ..PaymentState::default()
        };
        let preview = state.preview(80.0);
        assert!((preview.applied - 80.0).abs() < EPS);
        assert!((preview.change - 20.0).abs() < EPS);
    }

    #[test]
    fn test_nothing_tendered_hides_change_row() {
        let preview = cash(0.0).preview(80.0);
        assert!(!preview.show_change_row);
        assert!(preview.show_balance_row);
        assert!((preview.balance - 80.0).abs() < EPS);
    }
}
