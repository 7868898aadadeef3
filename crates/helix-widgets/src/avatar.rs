#![forbid(unsafe_code)]

//! Avatar with image/initials/placeholder fallback.
//!
//! Initials are grapheme-correct: the first grapheme cluster of the first
//! and last words, so combining marks and multi-scalar emoji stay intact.

use unicode_segmentation::UnicodeSegmentation;

use crate::warn_missing_label;

/// Avatar dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum AvatarSize {
    Small,
    #[default]
    Medium,
    Large,
}

impl AvatarSize {
    /// Edge length in pixels for the styling layer.
    pub const fn px(self) -> u16 {
        match self {
            Self::Small => 24,
            Self::Medium => 32,
            Self::Large => 40,
        }
    }
}

/// Avatar outline shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum AvatarShape {
    #[default]
    Circle,
    Square,
}

/// Avatar widget.
#[derive(Debug, Clone, Default)]
pub struct Avatar {
    image_src: Option<String>,
    name: Option<String>,
    size: AvatarSize,
    shape: AvatarShape,
}

impl Avatar {
    pub fn new() -> Self {
        Self::default()
    }

    /// Image source for the styling layer.
    #[must_use]
    pub fn image_src(mut self, src: impl Into<String>) -> Self {
        self.image_src = Some(src.into());
        self
    }

    /// Display name; also the accessible name and the initials source.
    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    #[must_use]
    pub fn size(mut self, size: AvatarSize) -> Self {
        self.size = size;
        self
    }

    #[must_use]
    pub fn shape(mut self, shape: AvatarShape) -> Self {
        self.shape = shape;
        self
    }

    pub fn size_kind(&self) -> AvatarSize {
        self.size
    }

    pub fn shape_kind(&self) -> AvatarShape {
        self.shape
    }

    pub fn image(&self) -> Option<&str> {
        self.image_src.as_deref().filter(|s| !s.is_empty())
    }

    pub fn accessible_name(&self) -> Option<&str> {
        self.name.as_deref().filter(|n| !n.trim().is_empty())
    }

    /// Uppercased initials from the name: the first grapheme of the first
    /// word plus the first grapheme of the last word (a single word yields
    /// one grapheme). Empty when no usable name is set.
    pub fn initials(&self) -> String {
        let Some(name) = self.accessible_name() else {
            return String::new();
        };
        let words: Vec<&str> = name.split_whitespace().collect();
        let first = words.first().and_then(|w| w.graphemes(true).next());
        let last = match words.len() {
            0 | 1 => None,
            _ => words.last().and_then(|w| w.graphemes(true).next()),
        };
        first
            .into_iter()
            .chain(last)
            .map(str::to_uppercase)
            .collect()
    }

    /// Derived status string. Priority: `image > initials > placeholder`.
    pub fn status(&self) -> &'static str {
        if self.image().is_some() {
            "image"
        } else if !self.initials().is_empty() {
            "initials"
        } else {
            "placeholder"
        }
    }

    /// Log a developer warning when the avatar has no accessible name.
    pub fn validate(&self) {
        if self.accessible_name().is_none() {
            warn_missing_label("Avatar", "set a name even when an image is shown");
        }
    }
}
