//! # Sale Form Model
//!
//! The single mutation surface of the form session. The surrounding UI
//! layer forwards its events here and paints whatever frame comes back;
//! it never computes anything itself.
//!
//! ## Session Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Sale Form Session                                    │
//! │                                                                         │
//! │  ┌──────────┐     ┌──────────┐     ┌──────────┐     ┌──────────┐       │
//! │  │  Empty   │────►│  Lines   │────►│ Payment  │────►│ Submitted│       │
//! │  │  Form    │     │  Added   │     │ Entered  │     │   Form   │       │
//! │  └──────────┘     └──────────┘     └──────────┘     └──────────┘       │
//! │                        │                 │                              │
//! │                  add_product_json   set_amount_tendered                 │
//! │                  add_blank_row      set_payment_method                  │
//! │                  edit_line          set_partial_apply                   │
//! │                  remove_line             │                              │
//! │                        │                 │                              │
//! │                        ▼                 ▼                              │
//! │            every mutation ──► recompute ──► observers                   │
//! │                                                                         │
//! │  submit() re-projects one last time and applies the only validation     │
//! │  the client performs: non-empty ledger, no fully blank lines.           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Why No State Machine?
//! There is nothing between "dirty" and "recomputed": every mutation runs
//! a full synchronous recompute, so the session is never observable in a
//! torn state and no intermediate or error state exists while editing.

use tracing::{debug, info};

use caja_core::error::{SubmitError, SubmitResult};
use caja_core::ledger::{Ledger, LineField};
use caja_core::numeric::parse_lenient;
use caja_core::payment::{PaymentMethod, PaymentState};

use crate::config::FormConfig;
use crate::payload::ProductPayload;
use crate::selection::{SelectOption, Selector};
use crate::view::{MirroredFields, RenderFrame};

/// Render callback registered by the UI layer.
type Observer = Box<dyn FnMut(&RenderFrame)>;

/// The sale-form session: ledger, payment inputs, selections, observers.
///
/// ## Ownership
/// Exclusively owned by the single active form session. All work runs
/// synchronously on the caller's thread; there is nothing to lock.
pub struct SaleFormModel {
    config: FormConfig,
    ledger: Ledger,
    payment: PaymentState,
    customer: Selector,
    seller: Selector,
    observers: Vec<Observer>,
}

impl SaleFormModel {
    /// Creates an empty session with the given configuration.
    pub fn new(config: FormConfig) -> Self {
        SaleFormModel {
            config,
            ledger: Ledger::new(),
            payment: PaymentState::default(),
            customer: Selector::new(),
            seller: Selector::new(),
            observers: Vec::new(),
        }
    }

    // =========================================================================
    // Observers
    // =========================================================================

    /// Registers a render observer and immediately hands it the current
    /// frame (the initial paint).
    pub fn on_render(&mut self, observer: impl FnMut(&RenderFrame) + 'static) {
        let mut observer: Observer = Box::new(observer);
        observer(&self.frame());
        self.observers.push(observer);
    }

    fn notify(&mut self) {
        let frame = self.frame();
        for observer in &mut self.observers {
            observer(&frame);
        }
    }

    // =========================================================================
    // Line Operations
    // =========================================================================

    /// Quick-add from a clicked catalog element's `data-payload` JSON.
    ///
    /// Malformed JSON degrades to an all-defaults payload; the click
    /// still adds a row. Returns the new line's id.
    pub fn add_product_json(&mut self, raw: &str) -> String {
        self.add_product(ProductPayload::from_json(raw))
    }

    /// Appends a line from a quick-add product, quantity defaulted to 1.
    pub fn add_product(&mut self, payload: ProductPayload) -> String {
        let product = payload.resolve(&self.config);
        let id = self.ledger.add_product(&product).id.clone();
        debug!(sku = %product.sku, price = product.unit_price, "line added from product");
        self.notify();
        id
    }

    /// Appends an empty, hand-fillable row.
    pub fn add_blank_row(&mut self) -> String {
        let id = self.ledger.add_blank().id.clone();
        debug!("blank line added");
        self.notify();
        id
    }

    /// Removes a line. Idempotent: removing twice is a no-op.
    pub fn remove_line(&mut self, id: &str) {
        let removed = self.ledger.remove(id);
        debug!(%id, removed, "line removed");
        self.notify();
    }

    /// Applies a user edit to a line's quantity or tax rate.
    pub fn edit_line(&mut self, id: &str, field: LineField, raw: &str) {
        self.ledger.update_field(id, field, raw);
        debug!(%id, ?field, raw, "line edited");
        self.notify();
    }

    // =========================================================================
    // Payment Operations
    // =========================================================================

    /// Sets the payment method from its form label ("cash", "EFECTIVO", …).
    pub fn set_payment_method(&mut self, label: &str) {
        self.payment.method = PaymentMethod::from_label(label);
        debug!(label, method = ?self.payment.method, "payment method set");
        self.notify();
    }

    /// Sets the tendered amount from the raw field text.
    pub fn set_amount_tendered(&mut self, raw: &str) {
        self.payment.amount_tendered = parse_lenient(raw);
        debug!(raw, value = self.payment.amount_tendered, "tendered set");
        self.notify();
    }

    /// Toggles the partial-apply checkbox.
    pub fn set_partial_apply(&mut self, enabled: bool) {
        self.payment.partial_apply_enabled = enabled;
        debug!(enabled, "partial apply toggled");
        self.notify();
    }

    /// Sets the partial amount from the raw field text.
    ///
    /// A blank field means "no amount given" (simple flow), which is not
    /// the same as an explicit 0.
    pub fn set_partial_amount(&mut self, raw: &str) {
        self.payment.partial_apply_amount = if raw.trim().is_empty() {
            None
        } else {
            Some(parse_lenient(raw))
        };
        debug!(raw, value = ?self.payment.partial_apply_amount, "partial amount set");
        self.notify();
    }

    /// Sets the free-text payment reference; blank clears it.
    pub fn set_payment_reference(&mut self, text: &str) {
        self.payment.reference = if text.trim().is_empty() {
            None
        } else {
            Some(text.trim().to_string())
        };
        self.notify();
    }

    // =========================================================================
    // Selection Operations
    // =========================================================================

    /// Loads the customer select's options, applying the default policy
    /// when nothing was pre-selected.
    pub fn set_customer_options(&mut self, options: Vec<SelectOption>) {
        self.customer.set_options(options);
        self.notify();
    }

    /// Loads the seller select's options, applying the default policy
    /// when nothing was pre-selected.
    pub fn set_seller_options(&mut self, options: Vec<SelectOption>) {
        self.seller.set_options(options);
        self.notify();
    }

    /// Applies a customer "selection changed" event.
    pub fn select_customer(&mut self, value: &str) {
        self.customer.select(value);
        debug!(value, "customer selected");
        self.notify();
    }

    /// Applies a seller "selection changed" event.
    pub fn select_seller(&mut self, value: &str) {
        self.seller.select(value);
        debug!(value, "seller selected");
        self.notify();
    }

    // =========================================================================
    // Projection & Submission
    // =========================================================================

    /// The current frame: a pure projection of the session.
    pub fn frame(&self) -> RenderFrame {
        RenderFrame::project(&self.ledger, &self.payment, &self.mirrored())
    }

    fn mirrored(&self) -> MirroredFields {
        MirroredFields {
            customer_name: self.customer.mirrored_name(),
            customer_enrollment: self.customer.mirrored_enrollment(),
            seller_name: self.seller.mirrored_name(),
        }
    }

    /// Final step before the form posts: forces one last mirror and
    /// recompute so the serialized payload matches what is displayed,
    /// then applies the submission guards.
    pub fn submit(&mut self) -> SubmitResult<RenderFrame> {
        if self.ledger.is_empty() {
            debug!("submit rejected: empty ledger");
            return Err(SubmitError::EmptyLedger);
        }
        if let Some(index) = self.ledger.items.iter().position(|item| item.is_blank()) {
            debug!(index, "submit rejected: blank line");
            return Err(SubmitError::BlankLine { index });
        }

        self.notify();
        let frame = self.frame();
        info!(
            lines = self.ledger.len(),
            total = %frame.total,
            "sale form submitted"
        );
        Ok(frame)
    }

    // =========================================================================
    // Read Access
    // =========================================================================

    /// The ledger, read-only.
    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    /// The payment inputs, read-only.
    pub fn payment(&self) -> &PaymentState {
        &self.payment
    }
}

impl Default for SaleFormModel {
    fn default() -> Self {
        SaleFormModel::new(FormConfig::default())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
