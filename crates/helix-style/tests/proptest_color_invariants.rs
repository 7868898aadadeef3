//! Property tests for the color engine.

use helix_style::{Palette, Rgb};
use proptest::prelude::*;

fn any_rgb() -> impl Strategy<Value = Rgb> {
    (any::<u8>(), any::<u8>(), any::<u8>()).prop_map(|(r, g, b)| Rgb::new(r, g, b))
}

proptest! {
    #[test]
    fn hex_round_trip_is_identity(color in any_rgb()) {
        prop_assert_eq!(Rgb::parse(&color.to_hex()).unwrap(), color);
    }

    #[test]
    fn shorthand_equals_doubled_form(r in 0u32..16, g in 0u32..16, b in 0u32..16) {
        let short = format!("{r:x}{g:x}{b:x}");
        let long = format!("{r:x}{r:x}{g:x}{g:x}{b:x}{b:x}");
        prop_assert_eq!(Rgb::parse(&short).unwrap(), Rgb::parse(&long).unwrap());
    }

    #[test]
    fn lighten_never_darkens_any_channel(color in any_rgb(), percent in 0.0f32..=100.0) {
        let out = color.lighten(percent);
        prop_assert!(out.r >= color.r);
        prop_assert!(out.g >= color.g);
        prop_assert!(out.b >= color.b);
    }

    #[test]
    fn darken_never_lightens_any_channel(color in any_rgb(), percent in 0.0f32..=100.0) {
        let out = color.darken(percent);
        prop_assert!(out.r <= color.r);
        prop_assert!(out.g <= color.g);
        prop_assert!(out.b <= color.b);
    }

    #[test]
    fn contrast_text_is_black_or_white(color in any_rgb()) {
        let text = color.contrast_text();
        prop_assert!(text == Rgb::BLACK || text == Rgb::WHITE);
    }

    #[test]
    fn luminance_stays_in_unit_range(color in any_rgb()) {
        let lum = color.luminance();
        prop_assert!((0.0..=1.0).contains(&lum));
    }

    #[test]
    fn palette_is_deterministic(color in any_rgb()) {
        prop_assert_eq!(Palette::derive(color), Palette::derive(color));
    }

    #[test]
    fn garbage_input_never_panics(input in "\\PC{0,12}") {
        let _ = Rgb::parse(&input);
    }
}
