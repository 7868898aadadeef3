#![forbid(unsafe_code)]

//! Color derivation and theme state for Helix UI.
//!
//! # Role in Helix
//! `helix-style` is the shared vocabulary for colors and theming. Widgets
//! consume these types to map variants to concrete colors without dragging
//! in any host rendering dependency.
//!
//! # This crate provides
//! - [`Rgb`] parsing, encoding, and the linear lighten/darken transforms.
//! - [`Palette`] derivation: tints, shades, and a contrasting foreground.
//! - [`ThemeService`] for the process-wide theme name/dark flag, persisted
//!   preference, and published brand variables.
//! - The style-layer error types.
//!
//! # How it fits in the system
//! The host constructs one [`ThemeService`] over its durable store and
//! (optionally) a deployment brand-color source, initializes it at startup,
//! and feeds the published variables to its styling layer. `helix-widgets`
//! uses the color types to derive per-variant presentation colors. This
//! crate keeps that layer deterministic and free of ambient globals.

/// Color types, hex parsing, and palette derivation.
pub mod color;
/// Error types for the style layer.
pub mod error;
/// Theme state, preference persistence, and variable publication.
pub mod theme;

pub use color::{Palette, Rgb};
pub use error::{ColorError, StorageError};
pub use theme::{
    BrandColorSource, BrandColors, MemoryStore, PREFERENCE_KEY, PreferenceStore, StaticBrandColors,
    ThemeName, ThemeService,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn palette_text_tracks_contrast() {
        let light_base = Rgb::parse("#fafafa").unwrap();
        let dark_base = Rgb::parse("#101010").unwrap();
        assert_eq!(Palette::derive(light_base).text, Rgb::BLACK);
        assert_eq!(Palette::derive(dark_base).text, Rgb::WHITE);
    }

    #[test]
    fn service_round_trips_engine_hex() {
        let mut service = ThemeService::with_brand_source(
            Box::new(MemoryStore::new()),
            Some(Box::new(StaticBrandColors(BrandColors {
                primary: "#abc".to_string(),
                secondary: "#abcdef".to_string(),
            }))),
        );
        service.initialize();
        // Shorthand input is published in canonical 6-digit form.
        assert_eq!(service.variable("insurer-primary-color"), Some("#aabbcc"));
    }
}
