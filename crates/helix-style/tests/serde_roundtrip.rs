#![cfg(feature = "serde")]

//! Serde round-trips for the style data types.

use helix_style::{Palette, Rgb, ThemeName};

#[test]
fn rgb_round_trips() {
    let color = Rgb::new(51, 102, 153);
    let json = serde_json::to_string(&color).unwrap();
    assert_eq!(serde_json::from_str::<Rgb>(&json).unwrap(), color);
}

#[test]
fn palette_round_trips() {
    let palette = Palette::derive(Rgb::parse("#336699").unwrap());
    let json = serde_json::to_string(&palette).unwrap();
    assert_eq!(serde_json::from_str::<Palette>(&json).unwrap(), palette);
}

#[test]
fn theme_name_uses_lowercase_literals() {
    assert_eq!(serde_json::to_string(&ThemeName::Dark).unwrap(), "\"dark\"");
    assert_eq!(
        serde_json::from_str::<ThemeName>("\"light\"").unwrap(),
        ThemeName::Light
    );
}
