//! # Payloads
//!
//! The two serialized edges of the form session:
//!
//! - **in**: the quick-add product payload a catalog click carries
//!   (`data-payload` JSON on the clicked element)
//! - **out**: the array-style hidden fields the form posts
//!   (`sku[]`, `desc[]`, `qty[]`, `price[]`, `tax[]`)
//!
//! ## Why Rebuild From Scratch?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  The hidden arrays are positional: entry i of every group describes     │
//! │  ledger row i. Patching them incrementally drifts the moment a row      │
//! │  is removed from the middle, so every recompute regenerates the         │
//! │  whole payload from the ledger.                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use caja_core::ledger::{Ledger, ProductRef};
use caja_core::numeric::format_field;

use crate::config::FormConfig;

// =============================================================================
// Quick-Add Product Payload
// =============================================================================

/// The serialized product a quick-add click carries.
///
/// Every field is optional on the wire: missing fields default to empty
/// string / 0, so a malformed catalog entry still adds a usable row.
#[derive(Debug, Clone, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ProductPayload {
    #[serde(default)]
    pub sku: String,

    #[serde(default)]
    pub description: String,

    #[serde(default)]
    pub price: f64,

    /// Absent when the catalog entry predates per-product rates; the
    /// configured business default applies then.
    #[serde(default)]
    pub tax_rate: Option<f64>,
}

impl ProductPayload {
    /// Parses the `data-payload` JSON; malformed input degrades to an
    /// all-defaults payload instead of failing the click.
    pub fn from_json(raw: &str) -> Self {
        serde_json::from_str(raw).unwrap_or_default()
    }

    /// Resolves the payload into a concrete product reference, filling
    /// the tax rate from configuration when the payload has none.
    pub fn resolve(&self, config: &FormConfig) -> ProductRef {
        ProductRef {
            sku: self.sku.clone(),
            description: self.description.clone(),
            unit_price: self.price,
            tax_rate: self.tax_rate.unwrap_or(config.default_tax_rate),
        }
    }
}

// =============================================================================
// Submission Payload
// =============================================================================

/// The array-style hidden fields, one named group per column, one entry
/// per ledger row in ledger order.
///
/// Serializes under the exact field names the form handler reads
/// (`request.form.getlist("sku[]")` and friends).
#[derive(Debug, Clone, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SubmissionPayload {
    #[serde(rename = "sku[]")]
    pub sku: Vec<String>,

    #[serde(rename = "desc[]")]
    pub desc: Vec<String>,

    #[serde(rename = "qty[]")]
    pub qty: Vec<String>,

    #[serde(rename = "price[]")]
    pub price: Vec<String>,

    #[serde(rename = "tax[]")]
    pub tax: Vec<String>,
}

impl SubmissionPayload {
    /// Regenerates the whole payload from the ledger.
    pub fn from_ledger(ledger: &Ledger) -> Self {
        let mut payload = SubmissionPayload::default();
        for item in &ledger.items {
            payload.sku.push(item.sku.clone());
            payload.desc.push(item.description.clone());
            payload.qty.push(format_field(item.quantity));
            payload.price.push(format_field(item.unit_price));
            payload.tax.push(format_field(item.tax_rate));
        }
        payload
    }

    /// Number of rows in the payload (every group has this length).
    pub fn len(&self) -> usize {
        self.sku.len()
    }

    /// Checks if the payload has no rows.
    pub fn is_empty(&self) -> bool {
        self.sku.is_empty()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
