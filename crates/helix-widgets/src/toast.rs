#![forbid(unsafe_code)]

//! Toast notification type definitions.
//!
//! The queueing, stacking, and painting of toasts belong to the host; this
//! module defines the shared vocabulary: identifiers, anchor positions,
//! severities with their glyphs, content, and configuration, plus the
//! dimension math a host needs to reserve space.

use std::time::Duration;

use unicode_width::UnicodeWidthStr;
use web_time::Instant;

/// Unique identifier for a toast notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ToastId(pub u64);

impl ToastId {
    pub const fn new(id: u64) -> Self {
        Self(id)
    }
}

/// Anchor position for a toast within the viewport.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ToastPosition {
    TopLeft,
    TopCenter,
    #[default]
    TopRight,
    BottomLeft,
    BottomCenter,
    BottomRight,
}

impl ToastPosition {
    /// Top-left origin for a toast of the given size within a viewport.
    pub fn calculate_position(
        self,
        viewport_width: u16,
        viewport_height: u16,
        toast_width: u16,
        toast_height: u16,
        margin: u16,
    ) -> (u16, u16) {
        let x = match self {
            Self::TopLeft | Self::BottomLeft => margin,
            Self::TopCenter | Self::BottomCenter => {
                viewport_width.saturating_sub(toast_width) / 2
            }
            Self::TopRight | Self::BottomRight => viewport_width
                .saturating_sub(toast_width)
                .saturating_sub(margin),
        };

        let y = match self {
            Self::TopLeft | Self::TopCenter | Self::TopRight => margin,
            Self::BottomLeft | Self::BottomCenter | Self::BottomRight => viewport_height
                .saturating_sub(toast_height)
                .saturating_sub(margin),
        };

        (x, y)
    }
}

/// Toast severity, mapped to an icon glyph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum ToastSeverity {
    Success,
    Error,
    Warning,
    #[default]
    Info,
}

impl ToastSeverity {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Error => "error",
            Self::Warning => "warning",
            Self::Info => "info",
        }
    }

    /// Icon glyph for this severity.
    pub const fn icon(self) -> char {
        match self {
            Self::Success => '✓',
            Self::Error => '✗',
            Self::Warning => '!',
            Self::Info => 'i',
        }
    }

    /// ASCII fallback for hosts without Unicode glyphs.
    pub const fn icon_ascii(self) -> char {
        match self {
            Self::Success => '+',
            Self::Error => 'x',
            Self::Warning => '!',
            Self::Info => 'i',
        }
    }
}

/// Content of a toast notification.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ToastContent {
    /// Main message text.
    pub message: String,
    /// Optional title line above the message.
    pub title: Option<String>,
    /// Optional severity icon.
    pub severity: Option<ToastSeverity>,
}

impl ToastContent {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            title: None,
            severity: None,
        }
    }

    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    #[must_use]
    pub fn with_severity(mut self, severity: ToastSeverity) -> Self {
        self.severity = Some(severity);
        self
    }
}

/// Configuration for a toast notification.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ToastConfig {
    /// Anchor position in the viewport.
    pub position: ToastPosition,
    /// Auto-dismiss duration. `None` means persistent until dismissed.
    pub duration: Option<Duration>,
    /// Maximum width in cells.
    pub max_width: u16,
    /// Margin from the viewport edges.
    pub margin: u16,
    /// Whether the user may dismiss the toast.
    pub dismissable: bool,
}

impl Default for ToastConfig {
    fn default() -> Self {
        Self {
            position: ToastPosition::default(),
            duration: Some(Duration::from_secs(5)),
            max_width: 50,
            margin: 1,
            dismissable: true,
        }
    }
}

/// A toast notification.
#[derive(Debug, Clone)]
pub struct Toast {
    pub id: ToastId,
    pub content: ToastContent,
    pub config: ToastConfig,
    created_at: Instant,
    dismissed: bool,
}

impl Toast {
    /// Create a toast with the given identifier and message; creation time
    /// is stamped now.
    pub fn new(id: ToastId, message: impl Into<String>) -> Self {
        Self {
            id,
            content: ToastContent::new(message),
            config: ToastConfig::default(),
            created_at: Instant::now(),
            dismissed: false,
        }
    }

    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.content.title = Some(title.into());
        self
    }

    #[must_use]
    pub fn severity(mut self, severity: ToastSeverity) -> Self {
        self.content.severity = Some(severity);
        self
    }

    #[must_use]
    pub fn position(mut self, position: ToastPosition) -> Self {
        self.config.position = position;
        self
    }

    /// Auto-dismiss after `duration`.
    #[must_use]
    pub fn duration(mut self, duration: Duration) -> Self {
        self.config.duration = Some(duration);
        self
    }

    /// Never auto-dismiss.
    #[must_use]
    pub fn persistent(mut self) -> Self {
        self.config.duration = None;
        self
    }

    #[must_use]
    pub fn max_width(mut self, max_width: u16) -> Self {
        self.config.max_width = max_width;
        self
    }

    #[must_use]
    pub fn dismissable(mut self, dismissable: bool) -> Self {
        self.config.dismissable = dismissable;
        self
    }

    pub fn created_at(&self) -> Instant {
        self.created_at
    }

    pub fn is_dismissed(&self) -> bool {
        self.dismissed
    }

    /// Mark the toast dismissed. No-op when `dismissable` is false.
    pub fn dismiss(&mut self) -> bool {
        if !self.config.dismissable || self.dismissed {
            return false;
        }
        self.dismissed = true;
        true
    }

    /// Whether the auto-dismiss duration has elapsed at `now`.
    pub fn is_expired(&self, now: Instant) -> bool {
        match self.config.duration {
            Some(duration) => now.duration_since(self.created_at) >= duration,
            None => false,
        }
    }

    /// Whether the toast should still be on screen at `now`.
    pub fn is_visible(&self, now: Instant) -> bool {
        !self.dismissed && !self.is_expired(now)
    }

    /// Time left before auto-dismiss, if one is configured.
    pub fn remaining_time(&self, now: Instant) -> Option<Duration> {
        self.config
            .duration
            .map(|d| d.saturating_sub(now.duration_since(self.created_at)))
    }

    /// Size in cells the host should reserve: content width plus padding
    /// and border, clamped to `max_width`; one row per line plus chrome.
    pub fn calculate_dimensions(&self) -> (u16, u16) {
        let icon_width = if self.content.severity.is_some() { 2 } else { 0 }; // icon + space
        let message_width = self.content.message.width();
        let title_width = self
            .content
            .title
            .as_deref()
            .map(UnicodeWidthStr::width)
            .unwrap_or(0);

        let content_width = (icon_width + message_width).max(title_width);
        // Padding (1 each side) + border (1 each side).
        let total_width = content_width
            .saturating_add(4)
            .min(self.config.max_width as usize) as u16;

        // Border rows + message row + optional title row.
        let height = if self.content.title.is_some() { 4 } else { 3 };
        (total_width, height)
    }
}
