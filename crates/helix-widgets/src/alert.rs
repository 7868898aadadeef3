#![forbid(unsafe_code)]

//! Alert banner with severity and dismissal.

use helix_style::Rgb;

/// Alert severity, in increasing order of urgency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum AlertSeverity {
    #[default]
    Info,
    Success,
    Warning,
    Error,
}

impl AlertSeverity {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Info => "info",
            Self::Success => "success",
            Self::Warning => "warning",
            Self::Error => "error",
        }
    }

    /// Icon glyph for this severity.
    pub const fn icon(self) -> char {
        match self {
            Self::Info => 'ℹ',
            Self::Success => '✓',
            Self::Warning => '⚠',
            Self::Error => '✗',
        }
    }

    /// ASCII fallback for hosts without Unicode glyphs.
    pub const fn icon_ascii(self) -> char {
        match self {
            Self::Info => 'i',
            Self::Success => '+',
            Self::Warning => '!',
            Self::Error => 'x',
        }
    }

    /// The severity's accent color.
    pub const fn color(self) -> Rgb {
        match self {
            Self::Info => Rgb::new(0x21, 0x96, 0xf3),
            Self::Success => Rgb::new(0x4c, 0xaf, 0x50),
            Self::Warning => Rgb::new(0xff, 0x98, 0x00),
            Self::Error => Rgb::new(0xf4, 0x43, 0x36),
        }
    }

    /// Foreground that contrasts with the accent color.
    pub fn text_color(self) -> Rgb {
        self.color().contrast_text()
    }
}

/// Alert widget.
#[derive(Debug, Clone)]
pub struct Alert {
    severity: AlertSeverity,
    message: String,
    title: Option<String>,
    dismissible: bool,
    dismissed: bool,
}

impl Alert {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            severity: AlertSeverity::default(),
            message: message.into(),
            title: None,
            dismissible: false,
            dismissed: false,
        }
    }

    #[must_use]
    pub fn severity(mut self, severity: AlertSeverity) -> Self {
        self.severity = severity;
        self
    }

    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Allow the user to dismiss this alert.
    #[must_use]
    pub fn dismissible(mut self, dismissible: bool) -> Self {
        self.dismissible = dismissible;
        self
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn title_text(&self) -> Option<&str> {
        self.title.as_deref()
    }

    pub fn severity_kind(&self) -> AlertSeverity {
        self.severity
    }

    pub fn is_dismissed(&self) -> bool {
        self.dismissed
    }

    /// Dismiss the alert. Returns whether anything changed — false when the
    /// alert is not dismissible or already dismissed.
    pub fn dismiss(&mut self) -> bool {
        if !self.dismissible || self.dismissed {
            return false;
        }
        self.dismissed = true;
        true
    }

    /// Derived status string. Priority: `dismissed > severity`.
    pub fn status(&self) -> &'static str {
        if self.dismissed {
            "dismissed"
        } else {
            self.severity.as_str()
        }
    }

    /// Accent/foreground color pair for the current severity.
    pub fn colors(&self) -> (Rgb, Rgb) {
        (self.severity.color(), self.severity.text_color())
    }
}
