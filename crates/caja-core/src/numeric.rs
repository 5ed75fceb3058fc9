//! # Numeric Policy Module
//!
//! The single home for string↔number conversions in the sale form.
//!
//! ## Why a Named Policy?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  EVERY NUMBER IN THE FORM IS A USER-TYPED STRING                        │
//! │                                                                         │
//! │  quantity field:  "2"      → 2.0                                        │
//! │  tax field:       "0.16"   → 0.16                                       │
//! │  tendered field:  ""       → 0.0   (blank means nothing tendered)       │
//! │  quantity field:  "abc"    → 0.0   (typo must not block the edit)       │
//! │                                                                         │
//! │  Parsing is PERMISSIVE by contract: it never fails, never throws,       │
//! │  never blocks a recompute. The fallback is always 0.                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Scattering `parse().unwrap_or(0.0)` across the codebase hides that this
//! is a deliberate policy; naming it keeps the contract in one place.

/// Parses a user-typed numeric field, never failing.
///
/// ## Rules
/// - Input is trimmed first
/// - Anything `f64` accepts is accepted (`"2"`, `"-3.5"`, `"1e2"`)
/// - Empty, unparseable, or non-finite input (`NaN`, `inf`) becomes `0.0`
///
/// ## Example
/// ```rust
/// use caja_core::numeric::parse_lenient;
///
/// assert_eq!(parse_lenient(" 2.5 "), 2.5);
/// assert_eq!(parse_lenient("-3"), -3.0);
/// assert_eq!(parse_lenient(""), 0.0);
/// assert_eq!(parse_lenient("abc"), 0.0);
/// ```
pub fn parse_lenient(raw: &str) -> f64 {
    match raw.trim().parse::<f64>() {
        Ok(value) if value.is_finite() => value,
        _ => 0.0,
    }
}

/// Formats an amount for the display fields (`t-subtotal`, `t-total`, …).
///
/// Fixed two decimal places, matching what the form shows on screen.
///
/// ## Example
/// ```rust
/// use caja_core::numeric::format_display;
///
/// assert_eq!(format_display(11.0), "11.00");
/// assert_eq!(format_display(13.6), "13.60");
/// ```
pub fn format_display(value: f64) -> String {
    format!("{:.2}", value)
}

/// Formats a stored value for the hidden submission fields.
///
/// Shortest round-trip form: whole numbers lose the trailing `.0`
/// (`2` rather than `2.00`), fractions keep exactly what was stored.
///
/// ## Example
/// ```rust
/// use caja_core::numeric::format_field;
///
/// assert_eq!(format_field(2.0), "2");
/// assert_eq!(format_field(0.16), "0.16");
/// ```
pub fn format_field(value: f64) -> String {
    value.to_string()
}

// =============================================================================
// Unit Tests
// =============================================================================
