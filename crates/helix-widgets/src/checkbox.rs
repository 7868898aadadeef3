#![forbid(unsafe_code)]

//! Checkbox with tri-state and validation status.
//!
//! The derived status string resolves with a fixed priority —
//! `disabled > indeterminate > error > success > checked/unchecked` — so a
//! disabled checkbox reports `"disabled"` even when it also carries an
//! error. This order is a compatibility contract.

use crate::warn_missing_label;

/// Checkbox widget.
#[derive(Debug, Clone, Default)]
pub struct Checkbox {
    checked: bool,
    indeterminate: bool,
    disabled: bool,
    error: Option<String>,
    success: bool,
    label: Option<String>,
}

impl Checkbox {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn checked(mut self, checked: bool) -> Self {
        self.checked = checked;
        self
    }

    /// Mixed state, e.g. a parent of a partially selected group.
    #[must_use]
    pub fn indeterminate(mut self, indeterminate: bool) -> Self {
        self.indeterminate = indeterminate;
        self
    }

    #[must_use]
    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Validation error message.
    #[must_use]
    pub fn error(mut self, error: impl Into<String>) -> Self {
        self.error = Some(error.into());
        self
    }

    /// Validation success marker.
    #[must_use]
    pub fn success(mut self, success: bool) -> Self {
        self.success = success;
        self
    }

    /// Accessible label.
    #[must_use]
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn is_checked(&self) -> bool {
        self.checked
    }

    pub fn is_indeterminate(&self) -> bool {
        self.indeterminate
    }

    pub fn is_disabled(&self) -> bool {
        self.disabled
    }

    pub fn error_message(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn accessible_name(&self) -> Option<&str> {
        self.label.as_deref()
    }

    /// Flip the checked state from user interaction.
    ///
    /// No-op when disabled. Resolves an indeterminate checkbox to checked
    /// (the mixed state means "some selected"; activating selects all).
    /// Returns whether anything changed.
    pub fn toggle(&mut self) -> bool {
        if self.disabled {
            return false;
        }
        if self.indeterminate {
            self.indeterminate = false;
            self.checked = true;
        } else {
            self.checked = !self.checked;
        }
        true
    }

    /// Derived status string.
    ///
    /// Priority: `disabled > indeterminate > error > success >
    /// checked/unchecked`.
    pub fn status(&self) -> &'static str {
        if self.disabled {
            "disabled"
        } else if self.indeterminate {
            "indeterminate"
        } else if self.error.is_some() {
            "error"
        } else if self.success {
            "success"
        } else if self.checked {
            "checked"
        } else {
            "unchecked"
        }
    }

    /// ARIA checked state: `"mixed"`, `"true"`, or `"false"`.
    pub fn aria_checked(&self) -> &'static str {
        if self.indeterminate {
            "mixed"
        } else if self.checked {
            "true"
        } else {
            "false"
        }
    }

    /// Log a developer warning if the checkbox has no accessible name.
    pub fn validate(&self) {
        if self.label.as_deref().is_none_or(|l| l.trim().is_empty()) {
            warn_missing_label("Checkbox", "set a label");
        }
    }
}
