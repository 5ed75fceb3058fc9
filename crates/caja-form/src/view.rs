//! # Render Frame
//!
//! The pure projection of the session into everything the UI layer
//! paints: row views, the `t-*` display fields, visibility flags, the
//! mirrored selection fields and the hidden submission arrays.
//!
//! ## Projection Contract
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  RenderFrame is rebuilt whole on every recompute.                       │
//! │                                                                         │
//! │  lines[i].line_amount ──► the row's importe cell      ("11.00")         │
//! │  subtotal/tax/total   ──► #t-subtotal #t-tax #t-total ("13.60")         │
//! │  change/balance       ──► #t-change #t-balance + row visibility         │
//! │  customer_name etc.   ──► the mirrored output inputs                    │
//! │  payload              ──► #hidden-arrays, regenerated from scratch      │
//! │                                                                         │
//! │  Display strings are fixed two decimals; the UI layer never formats.    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use caja_core::ledger::Ledger;
use caja_core::numeric::format_display;
use caja_core::payment::PaymentState;

use crate::payload::SubmissionPayload;

// =============================================================================
// Line View
// =============================================================================

/// One table row as the UI paints it.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct LineView {
    pub id: String,
    pub sku: String,
    pub description: String,

    /// Raw values feeding the row's input elements.
    pub unit_price: f64,
    pub quantity: f64,
    pub tax_rate: f64,

    /// The importe cell, two decimals, floored at zero.
    pub line_amount: String,
}

// =============================================================================
// Render Frame
// =============================================================================

/// Everything the UI layer needs, consistent with the latest inputs.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct RenderFrame {
    pub lines: Vec<LineView>,

    /// Display fields, fixed two decimals.
    pub subtotal: String,
    pub tax: String,
    pub total: String,
    pub change: String,
    pub balance: String,

    /// Row-visibility flags for the change/balance rows.
    pub show_change_row: bool,
    pub show_balance_row: bool,

    /// Mirrored selection fields; empty when nothing is selected.
    pub customer_name: String,
    pub customer_enrollment: String,
    pub seller_name: String,

    /// The hidden submission arrays, regenerated from scratch.
    pub payload: SubmissionPayload,
}

/// The mirrored output fields, assembled by the model from its selectors.
#[derive(Debug, Clone, Default)]
pub struct MirroredFields {
    pub customer_name: String,
    pub customer_enrollment: String,
    pub seller_name: String,
}

impl RenderFrame {
    /// Projects ledger + payment + mirrored fields into a frame.
    ///
    /// Pure: same inputs, same frame. The model calls this after every
    /// mutation and hands the result to its observers.
    pub fn project(ledger: &Ledger, payment: &PaymentState, mirrored: &MirroredFields) -> Self {
        let totals = ledger.recompute();
        let preview = payment.preview(totals.total);

        let lines = ledger
            .items
            .iter()
            .map(|item| LineView {
                id: item.id.clone(),
                sku: item.sku.clone(),
                description: item.description.clone(),
                unit_price: item.unit_price,
                quantity: item.quantity,
                tax_rate: item.tax_rate,
                line_amount: format_display(item.line_amount()),
            })
            .collect();

        RenderFrame {
            lines,
            subtotal: format_display(totals.subtotal),
            tax: format_display(totals.tax_total),
            total: format_display(totals.total),
            change: format_display(preview.change),
            balance: format_display(preview.balance),
            show_change_row: preview.show_change_row,
            show_balance_row: preview.show_balance_row,
            customer_name: mirrored.customer_name.clone(),
            customer_enrollment: mirrored.customer_enrollment.clone(),
            seller_name: mirrored.seller_name.clone(),
            payload: SubmissionPayload::from_ledger(ledger),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use caja_core::ledger::ProductRef;
    use caja_core::payment::PaymentMethod;

    #[test]
    fn test_projection_formats_two_decimals() {
        let mut ledger = Ledger::new();
        ledger.add_product(&ProductRef {
            sku: "A1".into(),
            description: "Widget".into(),
            unit_price: 10.0,
            tax_rate: 0.1,
        });

        let payment = PaymentState {
            method: PaymentMethod::Cash,
            amount_tendered: 20.0,
            ..PaymentState::default()
        };

        let frame = RenderFrame::project(&ledger, &payment, &MirroredFields::default());
        assert_eq!(frame.subtotal, "10.00");
        assert_eq!(frame.tax, "1.00");
        assert_eq!(frame.total, "11.00");
        assert_eq!(frame.change, "9.00");
        assert_eq!(frame.balance, "0.00");
        assert!(frame.show_change_row);
        assert!(!frame.show_balance_row);
        assert_eq!(frame.lines[0].line_amount, "11.00");
    }

    #[test]
    fn test_projection_payload_matches_lines() {
        let mut ledger = Ledger::new();
        ledger.add_product(&ProductRef {
            sku: "A".into(),
            description: "a".into(),
            unit_price: 5.0,
            tax_rate: 0.0,
        });
        ledger.add_blank();

        let frame =
            RenderFrame::project(&ledger, &PaymentState::default(), &MirroredFields::default());
        assert_eq!(frame.lines.len(), 2);
        assert_eq!(frame.payload.len(), 2);
        assert_eq!(frame.payload.sku[0], "A");
    }

    #[test]
    fn test_projection_empty_session() {
        let frame = RenderFrame::project(
            &Ledger::new(),
            &PaymentState::default(),
            &MirroredFields::default(),
        );
        assert_eq!(frame.total, "0.00");
        assert!(frame.lines.is_empty());
        assert!(frame.payload.is_empty());
        assert!(!frame.show_change_row);
        assert!(!frame.show_balance_row);
        assert_eq!(frame.customer_name, "");
    }
}
