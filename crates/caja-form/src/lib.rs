//! # caja-form: The Sale-Form Session
//!
//! Everything between the browser form and the pure math in `caja-core`:
//! one mutable session object, its view projection, and the serialized
//! payload the form posts.
//!
//! ## Module Organization
//! ```text
//! caja_form/
//! ├── lib.rs          ◄─── You are here (exports)
//! ├── model.rs        ◄─── SaleFormModel: the single mutation surface
//! ├── view.rs         ◄─── RenderFrame: pure projection for the UI layer
//! ├── payload.rs      ◄─── Quick-add payload in, submission arrays out
//! ├── selection.rs    ◄─── Searchable-select mirroring
//! └── config.rs       ◄─── Form configuration (defaults + env)
//! ```
//!
//! ## Event Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Session Event Flow                                   │
//! │                                                                         │
//! │  UI event (edit/click/change)                                           │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  SaleFormModel::<operation>()     ◄── the ONLY mutation surface         │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  full synchronous recompute       ◄── total, never incremental          │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  RenderFrame ──► observers        ◄── registered by the UI layer        │
//! │                                                                         │
//! │  By the time the operation returns, totals, mirror fields and the       │
//! │  hidden submission arrays are all consistent with the latest inputs.    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod config;
pub mod model;
pub mod payload;
pub mod selection;
pub mod view;

pub use config::FormConfig;
pub use model::SaleFormModel;
pub use payload::{ProductPayload, SubmissionPayload};
pub use selection::{SelectOption, Selector};
pub use view::{LineView, RenderFrame};
