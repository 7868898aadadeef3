#![forbid(unsafe_code)]

//! Anchored tooltip with debounced show/hide.
//!
//! [`Tooltip`] wraps a [`VisibilityController`] with content, a variant, a
//! preferred side, and placement math: given the anchor rectangle and the
//! viewport it computes where the tooltip body goes, flipping to the
//! opposite side when the preferred one lacks room and clamping to the
//! viewport.
//!
//! # Example
//!
//! ```
//! use std::time::Duration;
//! use web_time::Instant;
//! use helix_widgets::{Rect, Tooltip, TooltipPosition};
//!
//! let mut tip = Tooltip::new("Save the current document")
//!     .position(TooltipPosition::Top)
//!     .max_width(24);
//!
//! let now = Instant::now();
//! tip.show(now);
//! tip.tick(now + Duration::from_millis(200));
//! assert!(tip.is_visible());
//!
//! let anchor = Rect::new(10, 10, 6, 1);
//! let viewport = Rect::new(0, 0, 80, 24);
//! let area = tip.compute_area(anchor, viewport).unwrap();
//! assert!(area.bottom() <= anchor.y);
//! ```

use std::time::Duration;

use unicode_width::UnicodeWidthStr;
use web_time::Instant;

use helix_style::Rgb;

use crate::visibility::{VisibilityController, VisibilityEvent, VisibilityState};
use crate::{Rect, warn_missing_label};

/// Default cap on the tooltip body width, in cells.
pub const DEFAULT_MAX_WIDTH: u16 = 40;

/// Gap between the anchor and the tooltip body, in cells.
const ANCHOR_GAP: u16 = 1;

/// Tooltip color scheme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum TooltipVariant {
    Light,
    #[default]
    Dark,
}

impl TooltipVariant {
    /// Background color for this variant.
    pub const fn background(self) -> Rgb {
        match self {
            Self::Light => Rgb::WHITE,
            Self::Dark => Rgb::new(0x21, 0x21, 0x21),
        }
    }

    /// Foreground color: the contrasting text for the background.
    pub fn foreground(self) -> Rgb {
        self.background().contrast_text()
    }
}

/// Preferred side of the anchor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum TooltipPosition {
    #[default]
    Top,
    Right,
    Bottom,
    Left,
}

impl TooltipPosition {
    /// The opposite side, for flip logic.
    fn flip(self) -> Self {
        match self {
            Self::Top => Self::Bottom,
            Self::Bottom => Self::Top,
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }

    fn is_vertical(self) -> bool {
        matches!(self, Self::Top | Self::Bottom)
    }
}

/// Anchored tooltip widget.
#[derive(Debug, Clone)]
pub struct Tooltip {
    content: String,
    variant: TooltipVariant,
    position: TooltipPosition,
    max_width: u16,
    controller: VisibilityController,
}

impl Tooltip {
    /// Create a tooltip with the given content and default configuration.
    ///
    /// Content is the tooltip's accessible description; empty content is
    /// tolerated but logs a developer warning.
    pub fn new(content: impl Into<String>) -> Self {
        let content = content.into();
        if content.trim().is_empty() {
            warn_missing_label("Tooltip", "content is empty");
        }
        Self {
            content,
            variant: TooltipVariant::default(),
            position: TooltipPosition::default(),
            max_width: DEFAULT_MAX_WIDTH,
            controller: VisibilityController::new(),
        }
    }

    /// Set the color variant.
    #[must_use]
    pub fn variant(mut self, variant: TooltipVariant) -> Self {
        self.variant = variant;
        self
    }

    /// Set the preferred side of the anchor.
    #[must_use]
    pub fn position(mut self, position: TooltipPosition) -> Self {
        self.position = position;
        self
    }

    /// Cap the body width in cells (minimum 1).
    #[must_use]
    pub fn max_width(mut self, max_width: u16) -> Self {
        self.max_width = max_width.max(1);
        self
    }

    /// Set the delay before a requested show takes effect.
    #[must_use]
    pub fn show_delay(mut self, delay: Duration) -> Self {
        self.controller.set_show_delay(delay);
        self
    }

    /// Set the delay before a requested hide takes effect.
    #[must_use]
    pub fn hide_delay(mut self, delay: Duration) -> Self {
        self.controller.set_hide_delay(delay);
        self
    }

    /// Suppress show requests without touching hide behavior.
    #[must_use]
    pub fn disabled(mut self, disabled: bool) -> Self {
        self.controller.set_disabled(disabled);
        self
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn variant_kind(&self) -> TooltipVariant {
        self.variant
    }

    pub fn position_kind(&self) -> TooltipPosition {
        self.position
    }

    pub fn is_disabled(&self) -> bool {
        self.controller.is_disabled()
    }

    pub fn set_disabled(&mut self, disabled: bool) {
        self.controller.set_disabled(disabled);
    }

    /// Request the tooltip surface after the show delay.
    pub fn show(&mut self, now: Instant) {
        self.controller.request_show(now);
    }

    /// Request the tooltip clear after the hide delay.
    pub fn hide(&mut self, now: Instant) {
        self.controller.request_hide(now);
    }

    /// Clear immediately; emits `Hidden` only if it was showing.
    pub fn hide_immediate(&mut self) -> Option<VisibilityEvent> {
        self.controller.force_hide()
    }

    /// Advance the debounce state machine; returns a completed transition.
    pub fn tick(&mut self, now: Instant) -> Option<VisibilityEvent> {
        self.controller.tick(now)
    }

    pub fn is_visible(&self) -> bool {
        self.controller.is_visible()
    }

    pub fn visibility(&self) -> VisibilityState {
        self.controller.state()
    }

    /// Derived status string. Priority: `disabled > visible > hidden`.
    pub fn status(&self) -> &'static str {
        if self.controller.is_disabled() {
            "disabled"
        } else if self.is_visible() {
            "visible"
        } else {
            "hidden"
        }
    }

    /// Background/foreground for the current variant.
    pub fn colors(&self) -> (Rgb, Rgb) {
        (self.variant.background(), self.variant.foreground())
    }

    /// Body size in cells: content wrapped at `max_width`, one cell of
    /// horizontal padding each side.
    pub fn body_size(&self) -> (u16, u16) {
        let text_width = self.content.width().min(u16::MAX as usize) as u16;
        let inner = text_width.min(self.max_width.saturating_sub(2).max(1));
        let lines = if text_width == 0 {
            1
        } else {
            text_width.div_ceil(inner)
        };
        (inner.saturating_add(2), lines)
    }

    /// Compute the body rectangle relative to `anchor` within `viewport`.
    ///
    /// Honors the preferred side, flips to the opposite side when there is
    /// not enough room, and clamps into the viewport. Returns `None` when
    /// the tooltip cannot fit at all (empty viewport or zero-width anchor
    /// column outside it).
    pub fn compute_area(&self, anchor: Rect, viewport: Rect) -> Option<Rect> {
        if viewport.is_empty() {
            return None;
        }
        let (width, height) = self.body_size();

        let position = self.resolve_position(anchor, viewport, width, height);
        let area = self.layout(position, anchor, viewport, width, height);
        if area.is_empty() {
            return None;
        }
        Some(area)
    }

    /// Preferred side if it fits, the flipped side if that fits, otherwise
    /// whichever has more room.
    fn resolve_position(
        &self,
        anchor: Rect,
        viewport: Rect,
        width: u16,
        height: u16,
    ) -> TooltipPosition {
        let primary = self.position;
        let needed = if primary.is_vertical() {
            height.saturating_add(ANCHOR_GAP)
        } else {
            width.saturating_add(ANCHOR_GAP)
        };

        let available = available_space(primary, anchor, viewport);
        if available >= needed {
            return primary;
        }
        let flipped = primary.flip();
        let flipped_available = available_space(flipped, anchor, viewport);
        if flipped_available >= needed || flipped_available > available {
            flipped
        } else {
            primary
        }
    }

    fn layout(
        &self,
        position: TooltipPosition,
        anchor: Rect,
        viewport: Rect,
        width: u16,
        height: u16,
    ) -> Rect {
        let (x, y) = match position {
            TooltipPosition::Top => {
                let y = anchor
                    .y
                    .saturating_sub(ANCHOR_GAP)
                    .saturating_sub(height)
                    .max(viewport.y);
                (centered_x(anchor, width, viewport), y)
            }
            TooltipPosition::Bottom => {
                let y = anchor.bottom().saturating_add(ANCHOR_GAP);
                (centered_x(anchor, width, viewport), y)
            }
            TooltipPosition::Left => {
                let x = anchor
                    .x
                    .saturating_sub(ANCHOR_GAP)
                    .saturating_sub(width)
                    .max(viewport.x);
                (x, centered_y(anchor, height, viewport))
            }
            TooltipPosition::Right => {
                let x = anchor.right().saturating_add(ANCHOR_GAP);
                (x, centered_y(anchor, height, viewport))
            }
        };

        // Clamp into the viewport.
        let width = width.min(viewport.right().saturating_sub(x));
        let height = height.min(viewport.bottom().saturating_sub(y));
        Rect::new(x, y, width, height)
    }
}

/// Room between the anchor and the viewport edge on the given side.
fn available_space(position: TooltipPosition, anchor: Rect, viewport: Rect) -> u16 {
    match position {
        TooltipPosition::Top => anchor.y.saturating_sub(viewport.y),
        TooltipPosition::Bottom => viewport.bottom().saturating_sub(anchor.bottom()),
        TooltipPosition::Left => anchor.x.saturating_sub(viewport.x),
        TooltipPosition::Right => viewport.right().saturating_sub(anchor.right()),
    }
}

/// Center horizontally on the anchor, clamped into the viewport.
fn centered_x(anchor: Rect, width: u16, viewport: Rect) -> u16 {
    let center = anchor.x.saturating_add(anchor.width / 2);
    let start = center.saturating_sub(width / 2).max(viewport.x);
    if start.saturating_add(width) > viewport.right() {
        viewport.right().saturating_sub(width).max(viewport.x)
    } else {
        start
    }
}

/// Center vertically on the anchor, clamped into the viewport.
fn centered_y(anchor: Rect, height: u16, viewport: Rect) -> u16 {
    let center = anchor.y.saturating_add(anchor.height / 2);
    let start = center.saturating_sub(height / 2).max(viewport.y);
    if start.saturating_add(height) > viewport.bottom() {
        viewport.bottom().saturating_sub(height).max(viewport.y)
    } else {
        start
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn viewport() -> Rect {
        Rect::new(0, 0, 80, 24)
    }

    #[test]
    fn defaults() {
        let tip = Tooltip::new("hint");
        assert_eq!(tip.variant_kind(), TooltipVariant::Dark);
        assert_eq!(tip.position_kind(), TooltipPosition::Top);
        assert_eq!(tip.status(), "hidden");
        assert!(!tip.is_disabled());
    }

    #[test]
    fn dark_variant_has_white_text() {
        let (bg, fg) = Tooltip::new("x").colors();
        assert_eq!(bg, Rgb::new(0x21, 0x21, 0x21));
        assert_eq!(fg, Rgb::WHITE);
    }

    #[test]
    fn light_variant_has_black_text() {
        let (bg, fg) = Tooltip::new("x").variant(TooltipVariant::Light).colors();
        assert_eq!(bg, Rgb::WHITE);
        assert_eq!(fg, Rgb::BLACK);
    }

    #[test]
    fn status_priority_disabled_wins() {
        let tip = Tooltip::new("x").disabled(true);
        assert_eq!(tip.status(), "disabled");
    }

    #[test]
    fn show_then_tick_transitions_status() {
        let mut tip = Tooltip::new("x");
        let t0 = Instant::now();
        tip.show(t0);
        assert_eq!(tip.status(), "hidden");
        assert_eq!(
            tip.tick(t0 + Duration::from_millis(200)),
            Some(VisibilityEvent::Shown)
        );
        assert_eq!(tip.status(), "visible");
    }

    #[test]
    fn hide_immediate_reports_once() {
        let mut tip = Tooltip::new("x");
        let t0 = Instant::now();
        tip.show(t0);
        tip.tick(t0 + Duration::from_millis(200));
        assert_eq!(tip.hide_immediate(), Some(VisibilityEvent::Hidden));
        assert_eq!(tip.hide_immediate(), None);
    }

    #[test]
    fn body_size_wraps_at_max_width() {
        let tip = Tooltip::new("abcdefghij").max_width(7); // inner width 5
        assert_eq!(tip.body_size(), (7, 2));
    }

    #[test]
    fn body_size_short_content_shrinks_to_fit() {
        let tip = Tooltip::new("abc").max_width(40);
        assert_eq!(tip.body_size(), (5, 1));
    }

    #[test]
    fn top_placement_sits_above_anchor() {
        let tip = Tooltip::new("hint text");
        let anchor = Rect::new(30, 10, 8, 1);
        let area = tip.compute_area(anchor, viewport()).unwrap();
        assert!(area.bottom() <= anchor.y);
    }

    #[test]
    fn bottom_placement_sits_below_anchor() {
        let tip = Tooltip::new("hint text").position(TooltipPosition::Bottom);
        let anchor = Rect::new(30, 10, 8, 1);
        let area = tip.compute_area(anchor, viewport()).unwrap();
        assert!(area.y >= anchor.bottom());
    }

    #[test]
    fn right_placement_sits_right_of_anchor() {
        let tip = Tooltip::new("hint").position(TooltipPosition::Right);
        let anchor = Rect::new(10, 10, 8, 1);
        let area = tip.compute_area(anchor, viewport()).unwrap();
        assert!(area.x >= anchor.right());
    }

    #[test]
    fn left_placement_sits_left_of_anchor() {
        let tip = Tooltip::new("hint").position(TooltipPosition::Left);
        let anchor = Rect::new(40, 10, 8, 1);
        let area = tip.compute_area(anchor, viewport()).unwrap();
        assert!(area.right() <= anchor.x);
    }

    #[test]
    fn top_flips_to_bottom_when_no_room_above() {
        let tip = Tooltip::new("hint text");
        let anchor = Rect::new(30, 0, 8, 1);
        let area = tip.compute_area(anchor, viewport()).unwrap();
        assert!(area.y >= anchor.bottom());
    }

    #[test]
    fn bottom_flips_to_top_when_no_room_below() {
        let tip = Tooltip::new("hint text").position(TooltipPosition::Bottom);
        let anchor = Rect::new(30, 23, 8, 1);
        let area = tip.compute_area(anchor, viewport()).unwrap();
        assert!(area.bottom() <= anchor.y);
    }

    #[test]
    fn area_stays_inside_viewport() {
        let tip = Tooltip::new("a rather long tooltip body that wraps").max_width(20);
        let vp = viewport();
        for (x, y) in [(0, 0), (78, 0), (0, 23), (78, 23), (40, 12)] {
            let anchor = Rect::new(x, y, 2, 1);
            if let Some(area) = tip.compute_area(anchor, vp) {
                assert!(area.right() <= vp.right(), "anchor at ({x},{y})");
                assert!(area.bottom() <= vp.bottom(), "anchor at ({x},{y})");
            }
        }
    }

    #[test]
    fn empty_viewport_yields_none() {
        let tip = Tooltip::new("hint");
        assert!(
            tip.compute_area(Rect::new(0, 0, 5, 1), Rect::new(0, 0, 0, 0))
                .is_none()
        );
    }

    #[test]
    fn custom_delays_apply() {
        let mut tip = Tooltip::new("x")
            .show_delay(Duration::from_millis(10))
            .hide_delay(Duration::from_millis(5));
        let t0 = Instant::now();
        tip.show(t0);
        assert_eq!(
            tip.tick(t0 + Duration::from_millis(10)),
            Some(VisibilityEvent::Shown)
        );
        tip.hide(t0 + Duration::from_millis(20));
        assert_eq!(
            tip.tick(t0 + Duration::from_millis(25)),
            Some(VisibilityEvent::Hidden)
        );
    }
}
