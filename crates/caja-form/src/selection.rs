//! # Searchable-Select Mirroring
//!
//! The searchable-select widget is a black box; all this module sees is
//! its option list and "selection changed" events. The selected option's
//! data attributes are mirrored into the designated output fields.
//!
//! ## Mirroring Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Selection Mirroring                                  │
//! │                                                                         │
//! │  <option value="7" data-name="Ana Ruiz" data-enrollment="M-0042">       │
//! │         │                                                               │
//! │         │  change event → select("7")                                   │
//! │         ▼                                                               │
//! │  Selector.selected() ──► customer-name      = "Ana Ruiz"                │
//! │                      ──► customer-enrollment = "M-0042"                 │
//! │                                                                         │
//! │  On initial load, if nothing is pre-selected, the first enabled         │
//! │  option with a non-empty value is picked (a default policy, not a       │
//! │  hard requirement). Nothing selected ⇒ fields mirror as empty.          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use ts_rs::TS;

// =============================================================================
// Select Option
// =============================================================================

/// One option of the searchable select, as read from its attributes.
#[derive(Debug, Clone, Default, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct SelectOption {
    /// The option's form value ("" for placeholder rows).
    pub value: String,

    /// `data-name` attribute.
    pub name: String,

    /// `data-enrollment` attribute (customers only).
    pub enrollment: Option<String>,

    /// Whether the option is disabled in the widget.
    pub disabled: bool,
}

impl SelectOption {
    /// Creates an enabled option.
    pub fn new(value: impl Into<String>, name: impl Into<String>) -> Self {
        SelectOption {
            value: value.into(),
            name: name.into(),
            enrollment: None,
            disabled: false,
        }
    }

    /// Attaches an enrollment attribute.
    pub fn with_enrollment(mut self, enrollment: impl Into<String>) -> Self {
        self.enrollment = Some(enrollment.into());
        self
    }

    /// Marks the option disabled.
    pub fn disabled(mut self) -> Self {
        self.disabled = true;
        self
    }
}

// =============================================================================
// Selector
// =============================================================================

/// The session-side shadow of one searchable select.
///
/// ## Invariants
/// - `selected` always indexes into `options` or is `None`
/// - Replacing the option list re-applies the default policy when the
///   previous selection no longer exists
#[derive(Debug, Clone, Default)]
pub struct Selector {
    options: Vec<SelectOption>,
    selected: Option<usize>,
}

impl Selector {
    /// Creates an empty selector (collaborator absent ⇒ feature disabled).
    pub fn new() -> Self {
        Selector::default()
    }

    /// Replaces the option list, keeping the current selection when its
    /// value survives and falling back to the default policy otherwise.
    pub fn set_options(&mut self, options: Vec<SelectOption>) {
        let kept = self
            .selected()
            .map(|o| o.value.clone())
            .and_then(|value| options.iter().position(|o| o.value == value));
        self.options = options;
        self.selected = kept.or_else(|| self.default_index());
    }

    /// Default-selection policy: the first enabled option with a
    /// non-empty value.
    fn default_index(&self) -> Option<usize> {
        self.options
            .iter()
            .position(|o| !o.disabled && !o.value.is_empty())
    }

    /// Applies a "selection changed" event.
    ///
    /// An empty or unknown value clears the selection (the widget allows
    /// clearing); mirror fields then come out empty, which is not an
    /// error.
    pub fn select(&mut self, value: &str) {
        self.selected = if value.is_empty() {
            None
        } else {
            self.options.iter().position(|o| o.value == value)
        };
    }

    /// The currently selected option, if any.
    pub fn selected(&self) -> Option<&SelectOption> {
        self.selected.and_then(|i| self.options.get(i))
    }

    /// Mirrored `data-name`, empty when nothing is selected.
    pub fn mirrored_name(&self) -> String {
        self.selected().map(|o| o.name.clone()).unwrap_or_default()
    }

    /// Mirrored `data-enrollment`, empty when absent or nothing selected.
    pub fn mirrored_enrollment(&self) -> String {
        self.selected()
            .and_then(|o| o.enrollment.clone())
            .unwrap_or_default()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
