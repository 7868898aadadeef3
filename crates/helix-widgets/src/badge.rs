#![forbid(unsafe_code)]

//! Numeric/string badge with overflow clamping.
//!
//! [`Badge`] derives the text a count bubble displays. The precedence is a
//! compatibility contract:
//!
//! 1. a configured formatter, when a value is present;
//! 2. `"{max}+"` when a numeric value exceeds `max`;
//! 3. zero suppressed unless `show_zero` (falling back to `content`);
//! 4. the raw stringified value;
//! 5. the fallback `content`;
//! 6. empty.

use std::fmt;

/// A badge's value: a count or a free-form string.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BadgeValue {
    Number(i64),
    Text(String),
}

impl From<i64> for BadgeValue {
    fn from(value: i64) -> Self {
        Self::Number(value)
    }
}

impl From<&str> for BadgeValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for BadgeValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

/// Default numeric clamp.
pub const DEFAULT_MAX: i64 = 99;

type Formatter = Box<dyn Fn(&BadgeValue) -> String>;

/// Badge widget.
pub struct Badge {
    value: Option<BadgeValue>,
    max: i64,
    show_zero: bool,
    content: Option<String>,
    formatter: Option<Formatter>,
}

impl fmt::Debug for Badge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Badge")
            .field("value", &self.value)
            .field("max", &self.max)
            .field("show_zero", &self.show_zero)
            .field("content", &self.content)
            .field("formatter", &self.formatter.is_some())
            .finish()
    }
}

impl Default for Badge {
    fn default() -> Self {
        Self::new()
    }
}

impl Badge {
    pub fn new() -> Self {
        Self {
            value: None,
            max: DEFAULT_MAX,
            show_zero: false,
            content: None,
            formatter: None,
        }
    }

    /// Set the badge value.
    #[must_use]
    pub fn value(mut self, value: impl Into<BadgeValue>) -> Self {
        self.value = Some(value.into());
        self
    }

    /// Clear the badge value.
    #[must_use]
    pub fn no_value(mut self) -> Self {
        self.value = None;
        self
    }

    /// Numeric clamp; values above display as `"{max}+"`.
    #[must_use]
    pub fn max(mut self, max: i64) -> Self {
        self.max = max;
        self
    }

    /// Display a numeric zero instead of suppressing it.
    #[must_use]
    pub fn show_zero(mut self, show_zero: bool) -> Self {
        self.show_zero = show_zero;
        self
    }

    /// Fallback content when no displayable value exists.
    #[must_use]
    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.content = Some(content.into());
        self
    }

    /// Custom display formatter, applied whenever a value is present.
    #[must_use]
    pub fn formatter(mut self, formatter: impl Fn(&BadgeValue) -> String + 'static) -> Self {
        self.formatter = Some(Box::new(formatter));
        self
    }

    /// The text this badge displays.
    pub fn display_text(&self) -> String {
        if let Some(value) = &self.value {
            if let Some(format) = &self.formatter {
                return format(value);
            }
            return match value {
                BadgeValue::Number(n) if *n > self.max => format!("{}+", self.max),
                BadgeValue::Number(0) if !self.show_zero => self.fallback(),
                BadgeValue::Number(n) => n.to_string(),
                BadgeValue::Text(text) => text.clone(),
            };
        }
        self.fallback()
    }

    /// Derived status: `"count"` when something displays, else `"dot"`.
    pub fn status(&self) -> &'static str {
        if self.display_text().is_empty() {
            "dot"
        } else {
            "count"
        }
    }

    fn fallback(&self) -> String {
        self.content.clone().unwrap_or_default()
    }
}
