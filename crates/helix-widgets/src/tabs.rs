#![forbid(unsafe_code)]

//! Tab bar with disabled-aware selection.
//!
//! Selection never lands on a disabled tab: `select` rejects it,
//! `next`/`previous` skip over it, and construction seats the selection on
//! the first enabled tab. Movement clamps at the ends rather than wrapping.

use unicode_width::UnicodeWidthStr;

/// One tab in a [`TabBar`].
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tab {
    label: String,
    disabled: bool,
    badge: Option<u32>,
}

impl Tab {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            disabled: false,
            badge: None,
        }
    }

    #[must_use]
    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Attach a count badge to the tab.
    #[must_use]
    pub fn badge(mut self, count: u32) -> Self {
        self.badge = Some(count);
        self
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn is_disabled(&self) -> bool {
        self.disabled
    }

    pub fn badge_count(&self) -> Option<u32> {
        self.badge
    }

    /// Display width of the label in cells.
    pub fn label_width(&self) -> u16 {
        self.label.width().min(u16::MAX as usize) as u16
    }
}

/// Tab bar widget.
#[derive(Debug, Clone, Default)]
pub struct TabBar {
    tabs: Vec<Tab>,
    selected: usize,
}

impl TabBar {
    /// Create a tab bar; the selection seats on the first enabled tab
    /// (index 0 when every tab is disabled or the bar is empty).
    pub fn new(tabs: impl IntoIterator<Item = Tab>) -> Self {
        let tabs: Vec<Tab> = tabs.into_iter().collect();
        let selected = tabs.iter().position(|t| !t.disabled).unwrap_or(0);
        Self { tabs, selected }
    }

    pub fn tabs(&self) -> &[Tab] {
        &self.tabs
    }

    pub fn len(&self) -> usize {
        self.tabs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tabs.is_empty()
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn selected_tab(&self) -> Option<&Tab> {
        self.tabs.get(self.selected)
    }

    /// Select the tab at `index`.
    ///
    /// Out-of-range indices, disabled targets, and re-selecting the current
    /// tab are no-ops. Returns whether the selection changed.
    pub fn select(&mut self, index: usize) -> bool {
        match self.tabs.get(index) {
            Some(tab) if !tab.disabled && index != self.selected => {
                tracing::debug!(from = self.selected, to = index, "tab switch");
                self.selected = index;
                true
            }
            _ => false,
        }
    }

    /// Move selection right to the next enabled tab, if any.
    pub fn next(&mut self) -> bool {
        let candidate = self
            .tabs
            .iter()
            .enumerate()
            .skip(self.selected + 1)
            .find(|(_, t)| !t.disabled)
            .map(|(i, _)| i);
        match candidate {
            Some(index) => self.select(index),
            None => false,
        }
    }

    /// Move selection left to the previous enabled tab, if any.
    pub fn previous(&mut self) -> bool {
        let candidate = self
            .tabs
            .iter()
            .enumerate()
            .take(self.selected)
            .rev()
            .find(|(_, t)| !t.disabled)
            .map(|(i, _)| i);
        match candidate {
            Some(index) => self.select(index),
            None => false,
        }
    }

    /// Derived status of the tab at `index`.
    ///
    /// Priority: `disabled > selected > idle`. `None` when out of range.
    pub fn tab_status(&self, index: usize) -> Option<&'static str> {
        let tab = self.tabs.get(index)?;
        Some(if tab.disabled {
            "disabled"
        } else if index == self.selected {
            "selected"
        } else {
            "idle"
        })
    }
}
