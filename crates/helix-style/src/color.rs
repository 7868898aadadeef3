#![forbid(unsafe_code)]

//! Color parsing and palette derivation.
//!
//! [`Rgb`] is a plain 24-bit value type: parse it from hex, transform it,
//! encode it back. [`Palette`] derives the full set of tints and shades a
//! themed surface needs from one base color.
//!
//! The lighten/darken interpolation and the luminance heuristic are
//! deliberately linear rather than perceptual. Downstream themes were tuned
//! against these exact formulas, so the coefficients and the `0.5` threshold
//! are a compatibility contract.

use crate::error::ColorError;

/// A 24-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const BLACK: Self = Self::new(0, 0, 0);
    pub const WHITE: Self = Self::new(255, 255, 255);

    /// Create a color from channel values.
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse a hex color string.
    ///
    /// Accepts 6-digit (`#1a2b3c`) and shorthand 3-digit (`#abc`) forms,
    /// with or without the leading `#`. Shorthand expands by doubling each
    /// digit, so `abc` parses identically to `aabbcc`.
    pub fn parse(input: &str) -> Result<Self, ColorError> {
        let hex = input.strip_prefix('#').unwrap_or(input);
        let digits: Vec<u8> = hex
            .chars()
            .map(|c| c.to_digit(16).map(|d| d as u8))
            .collect::<Option<_>>()
            .ok_or_else(|| ColorError::InvalidFormat(input.to_string()))?;

        match digits.as_slice() {
            &[r, g, b] => Ok(Self::new(r * 17, g * 17, b * 17)),
            &[r1, r0, g1, g0, b1, b0] => {
                Ok(Self::new(r1 * 16 + r0, g1 * 16 + g0, b1 * 16 + b0))
            }
            _ => Err(ColorError::InvalidFormat(input.to_string())),
        }
    }

    /// Encode as a lowercase 6-digit `#rrggbb` string.
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Move each channel toward 255 by `percent` of its remaining distance.
    ///
    /// `lighten(0)` is the identity; `lighten(100)` is white.
    #[must_use]
    pub fn lighten(self, percent: f32) -> Self {
        self.map_channels(|c| c + (255.0 - c) * percent / 100.0)
    }

    /// Move each channel toward 0 by `percent` of its current value.
    ///
    /// `darken(0)` is the identity; `darken(100)` is black.
    #[must_use]
    pub fn darken(self, percent: f32) -> Self {
        self.map_channels(|c| c * (1.0 - percent / 100.0))
    }

    /// Relative luminance in `[0, 1]`: `(0.299 R + 0.587 G + 0.114 B) / 255`.
    pub fn luminance(self) -> f32 {
        (0.299 * f32::from(self.r) + 0.587 * f32::from(self.g) + 0.114 * f32::from(self.b)) / 255.0
    }

    /// Black or white, whichever contrasts with this color as a background.
    ///
    /// Black when luminance exceeds `0.5`, white otherwise (a luminance of
    /// exactly `0.5` yields white).
    #[must_use]
    pub fn contrast_text(self) -> Self {
        if self.luminance() > 0.5 {
            Self::BLACK
        } else {
            Self::WHITE
        }
    }

    /// Decimal `"r, g, b"` triple for translucency contexts
    /// (e.g. `rgba(var(--x-rgb), 0.4)` in a CSS layer).
    pub fn css_triple(self) -> String {
        format!("{}, {}, {}", self.r, self.g, self.b)
    }

    /// Apply `f` per channel, then round and clamp back into `[0, 255]`.
    fn map_channels(self, f: impl Fn(f32) -> f32) -> Self {
        let channel = |c: u8| f(f32::from(c)).round().clamp(0.0, 255.0) as u8;
        Self::new(channel(self.r), channel(self.g), channel(self.b))
    }
}

/// The set of variants derived from one base color.
///
/// Recomputed synchronously whenever the base changes; never cached.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Palette {
    /// The base color itself.
    pub base: Rgb,
    /// Base lightened by 20%.
    pub light: Rgb,
    /// Base lightened by 40%.
    pub lighter: Rgb,
    /// Base darkened by 20%.
    pub dark: Rgb,
    /// Base darkened by 40%.
    pub darker: Rgb,
    /// Contrasting foreground (black or white).
    pub text: Rgb,
}

impl Palette {
    /// Derive the full palette from a base color.
    pub fn derive(base: Rgb) -> Self {
        Self {
            base,
            light: base.lighten(20.0),
            lighter: base.lighten(40.0),
            dark: base.darken(20.0),
            darker: base.darken(40.0),
            text: base.contrast_text(),
        }
    }

    /// The base color's decimal `"r, g, b"` triple.
    pub fn rgb_triple(&self) -> String {
        self.base.css_triple()
    }
}
