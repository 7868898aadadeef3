#![forbid(unsafe_code)]

//! Tick-driven spinner frames.

use crate::warn_missing_label;

/// Braille-dot frame set (default).
pub const DOTS: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// ASCII line frame set.
pub const LINE: &[&str] = &["|", "/", "-", "\\"];

/// Spinner configuration.
#[derive(Debug, Clone)]
pub struct Spinner {
    frames: &'static [&'static str],
    label: Option<String>,
}

impl Default for Spinner {
    fn default() -> Self {
        Self::new()
    }
}

impl Spinner {
    pub fn new() -> Self {
        Self {
            frames: DOTS,
            label: None,
        }
    }

    /// Use a custom frame set. An empty set is replaced with [`DOTS`].
    #[must_use]
    pub fn frames(mut self, frames: &'static [&'static str]) -> Self {
        self.frames = if frames.is_empty() { DOTS } else { frames };
        self
    }

    /// Accessible label describing what is loading.
    #[must_use]
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn label_text(&self) -> Option<&str> {
        self.label.as_deref()
    }

    pub fn frame_count(&self) -> usize {
        self.frames.len()
    }

    /// The frame to display for the given state.
    pub fn current_frame(&self, state: &SpinnerState) -> &'static str {
        self.frames[state.current_frame % self.frames.len()]
    }

    /// Like [`current_frame`](Self::current_frame) but ASCII-safe: a
    /// non-ASCII frame degrades to `"*"`.
    pub fn current_frame_ascii(&self, state: &SpinnerState) -> &'static str {
        let frame = self.current_frame(state);
        if frame.is_ascii() { frame } else { "*" }
    }

    /// Derived status string; a spinner is always `"spinning"`.
    pub fn status(&self) -> &'static str {
        "spinning"
    }

    /// Log a developer warning when the spinner has no label (assistive
    /// technology needs something to announce for a busy indicator).
    pub fn validate(&self) {
        if self.label.as_deref().is_none_or(|l| l.trim().is_empty()) {
            warn_missing_label("Spinner", "set a label describing what is loading");
        }
    }
}

/// Animation state, advanced by the host loop.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SpinnerState {
    pub current_frame: usize,
}

impl SpinnerState {
    /// Advance to the next frame, wrapping on overflow.
    pub fn tick(&mut self) {
        self.current_frame = self.current_frame.wrapping_add(1);
    }
}
