//! Theme presets and class colors

use std::collections::BTreeMap;

use ratatui::style::Color;
use termynal::theme::{ClassColors, Theme};

#[test]
fn every_preset_name_resolves() {
    for name in Theme::NAMES {
        assert!(Theme::by_name(name).is_some(), "{} should resolve", name);
    }
    assert_eq!(Theme::by_name("OCEAN"), Some(Theme::ocean()));
    assert!(Theme::by_name("neon").is_none());
    assert_eq!(Theme::default(), Theme::classic());
}

#[test]
fn class_colors_accept_names_and_hex() {
    let mut classes = BTreeMap::new();
    classes.insert("comment".to_string(), "darkgray".to_string());
    classes.insert("ok".to_string(), "#00ff00".to_string());
    classes.insert("bad".to_string(), "not-a-color".to_string());

    let colors = ClassColors::parse(&classes);
    assert_eq!(colors.get(Some("comment")), Some(Color::DarkGray));
    assert_eq!(colors.get(Some("ok")), Some(Color::Rgb(0, 255, 0)));
    assert_eq!(colors.get(Some("bad")), None);
    assert_eq!(colors.get(None), None);
}
