//! # Error Types
//!
//! Domain errors for caja-core.
//!
//! ## Error Philosophy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  The form has NO fatal errors while editing:                            │
//! │                                                                         │
//! │  • unparseable numbers  → 0          (numeric::parse_lenient)           │
//! │  • missing collaborator → disabled   (never an error)                   │
//! │  • missing selection    → empty mirror fields                           │
//! │                                                                         │
//! │  The ONLY fallible step is submission, which applies the same guards    │
//! │  the sale service applies before accepting a sale: the ledger must      │
//! │  not be empty, and every line needs a SKU or a description.             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (line index)
//! 3. Errors are enum variants, never String

use thiserror::Error;

// =============================================================================
// Submit Error
// =============================================================================

/// Submission guard failures.
///
/// Raised only by the final submit step; every in-flight edit degrades
/// gracefully instead of erroring.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitError {
    /// The sale has no lines at all.
    #[error("sale has no line items")]
    EmptyLedger,

    /// A line carries neither a SKU nor a description.
    ///
    /// ## When This Occurs
    /// A blank row was added and submitted without being filled in.
    #[error("line {index} has neither sku nor description")]
    BlankLine { index: usize },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with SubmitError.
pub type SubmitResult<T> = Result<T, SubmitError>;

// =============================================================================
// Unit Tests
// =============================================================================
