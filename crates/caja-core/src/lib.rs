//! # caja-core: Pure Business Logic for the Caja Sale Form
//!
//! This crate is the **heart** of the Caja sale form. It contains all the
//! math behind the form as pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Caja Architecture                                │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                   Browser Form (collaborator)                   │   │
//! │  │   Search Select ──► Items Table ──► Totals ──► Hidden Arrays    │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ edit / click / change events           │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                    caja-form (session layer)                    │   │
//! │  │    SaleFormModel, RenderFrame, SubmissionPayload, Selector      │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                 ★ caja-core (THIS CRATE) ★                      │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐   │   │
//! │  │   │  ledger   │  │  payment  │  │  numeric  │  │   error   │   │   │
//! │  │   │ LineItem  │  │  Preview  │  │  lenient  │  │  Submit   │   │   │
//! │  │   │  Totals   │  │  Change   │  │  format   │  │  guards   │   │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘   │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO DOM • NO NETWORK • PURE FUNCTIONS                 │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`ledger`] - Line items and the ordered sale ledger with derived totals
//! - [`payment`] - Payment state and the change/balance preview
//! - [`numeric`] - The lenient parsing policy and display formatting
//! - [`error`] - Submission guard errors
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Every recompute is deterministic - same input = same output
//! 2. **No I/O**: DOM, network and file system access is FORBIDDEN here
//! 3. **Permissive Inputs**: User-typed strings never fail - they degrade to `0`
//! 4. **Total Recompute**: Derived values are recomputed whole, never patched
//!
//! ## Example Usage
//!
//! ```rust
//! use caja_core::ledger::{Ledger, ProductRef};
//!
//! let mut ledger = Ledger::new();
//! ledger.add_product(&ProductRef {
//!     sku: "A1".into(),
//!     description: "Widget".into(),
//!     unit_price: 10.0,
//!     tax_rate: 0.1,
//! });
//!
//! let totals = ledger.recompute();
//! assert!((totals.total - 11.0).abs() < 1e-9);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod ledger;
pub mod numeric;
pub mod payment;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use caja_core::Ledger` instead of
// `use caja_core::ledger::Ledger`

pub use error::{SubmitError, SubmitResult};
pub use ledger::{Ledger, LedgerTotals, LineField, LineItem, ProductRef};
pub use payment::{PaymentMethod, PaymentPreview, PaymentState};

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Labels that resolve to [`PaymentMethod::Cash`], compared case-insensitively.
///
/// ## Why Two Labels?
/// The form historically posted either the English or the Spanish label
/// depending on the template variant; both mean a cash tender.
pub const CASH_LABELS: [&str; 2] = ["cash", "efectivo"];

/// Quantity assigned to a freshly added line.
///
/// ## Business Reason
/// A product picked from the search list is almost always sold once;
/// the cashier edits the quantity afterwards when it isn't.
pub const DEFAULT_LINE_QUANTITY: f64 = 1.0;
