#![forbid(unsafe_code)]

//! Headless presentational widgets for Helix UI.
//!
//! # Role in Helix
//! Each widget here owns its state machine and derived presentation state —
//! status strings, display text, placement rectangles, themed colors — and
//! leaves painting to the host. The host drives widgets with input events
//! and a clock, reads the derived state back, and renders it however it
//! likes.
//!
//! # This crate provides
//! - [`tooltip::Tooltip`] over the delayed [`visibility`] controller.
//! - [`alert::Alert`], [`avatar::Avatar`], [`badge::Badge`],
//!   [`checkbox::Checkbox`], [`spinner::Spinner`], [`tabs::TabBar`].
//! - [`toast`] type definitions for a host-side notification layer.
//!
//! # Status contract
//! Every widget exposes a derived status string with a fixed priority order
//! (e.g. a disabled checkbox reports `"disabled"` even when it also carries
//! an error). These orders are a compatibility contract.

/// Alert banner with severity and dismissal.
pub mod alert;
/// Avatar with image/initials/placeholder fallback.
pub mod avatar;
/// Numeric/string badge with overflow clamping.
pub mod badge;
/// Checkbox with tri-state and validation status.
pub mod checkbox;
/// Tick-driven spinner frames.
pub mod spinner;
/// Tab bar with disabled-aware selection.
pub mod tabs;
/// Toast notification type definitions.
pub mod toast;
/// Anchored tooltip with debounced show/hide.
pub mod tooltip;
/// Delayed visibility state machine.
pub mod visibility;

pub use tooltip::{Tooltip, TooltipPosition, TooltipVariant};
pub use visibility::{VisibilityController, VisibilityEvent, VisibilityState};

/// An axis-aligned cell rectangle.
///
/// The minimal geometry the placement math needs; `u16` cell coordinates,
/// saturating edges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rect {
    pub x: u16,
    pub y: u16,
    pub width: u16,
    pub height: u16,
}

impl Rect {
    pub const fn new(x: u16, y: u16, width: u16, height: u16) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// One past the right-most column.
    pub const fn right(self) -> u16 {
        self.x.saturating_add(self.width)
    }

    /// One past the bottom-most row.
    pub const fn bottom(self) -> u16 {
        self.y.saturating_add(self.height)
    }

    pub const fn is_empty(self) -> bool {
        self.width == 0 || self.height == 0
    }
}

/// Developer diagnostic for an element without an accessible name.
///
/// Never a failure of function; the widget keeps working.
pub(crate) fn warn_missing_label(widget: &'static str, hint: &'static str) {
    tracing::warn!(widget, hint, "missing accessible label");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rect_edges() {
        let rect = Rect::new(10, 5, 20, 3);
        assert_eq!(rect.right(), 30);
        assert_eq!(rect.bottom(), 8);
        assert!(!rect.is_empty());
    }

    #[test]
    fn rect_zero_dimension_is_empty() {
        assert!(Rect::new(1, 1, 0, 5).is_empty());
        assert!(Rect::new(1, 1, 5, 0).is_empty());
    }

    #[test]
    fn rect_edges_saturate() {
        let rect = Rect::new(u16::MAX, u16::MAX, 10, 10);
        assert_eq!(rect.right(), u16::MAX);
        assert_eq!(rect.bottom(), u16::MAX);
    }
}
