use super::*;
use crate::store::MemoryStore;

const KEY: &str = "portfolio-theme";

// =============================================================
// Theme
// =============================================================

#[test]
fn parse_accepts_only_exact_literals() {
    assert_eq!(Theme::parse("light"), Some(Theme::Light));
    assert_eq!(Theme::parse("dark"), Some(Theme::Dark));
    assert_eq!(Theme::parse("pink"), None);
    assert_eq!(Theme::parse("Dark"), None);
    assert_eq!(Theme::parse(""), None);
}

#[test]
fn as_str_round_trips_through_parse() {
    for theme in [Theme::Light, Theme::Dark] {
        assert_eq!(Theme::parse(theme.as_str()), Some(theme));
    }
}

#[test]
fn default_theme_is_dark() {
    assert_eq!(Theme::default(), Theme::Dark);
}

#[test]
fn toggled_twice_returns_original() {
    assert_eq!(Theme::Dark.toggled(), Theme::Light);
    assert_eq!(Theme::Light.toggled(), Theme::Dark);
    assert_eq!(Theme::Dark.toggled().toggled(), Theme::Dark);
}

#[test]
fn icon_is_moon_for_light_and_sun_for_dark() {
    assert_eq!(Theme::Light.icon(), ThemeIcon::Moon);
    assert_eq!(Theme::Dark.icon(), ThemeIcon::Sun);
}

#[test]
fn from_dark_flag_maps_presence() {
    assert_eq!(Theme::from_dark_flag(true), Theme::Dark);
    assert_eq!(Theme::from_dark_flag(false), Theme::Light);
}

// =============================================================
// Preference
// =============================================================

#[test]
fn missing_preference_falls_back_to_dark() {
    let store = MemoryStore::new();
    assert_eq!(read_preference(&store, KEY, Theme::Dark), Theme::Dark);
}

#[test]
fn stored_light_is_used() {
    let store = MemoryStore::with_value(KEY, "light");
    assert_eq!(read_preference(&store, KEY, Theme::Dark), Theme::Light);
}

#[test]
fn invalid_stored_value_falls_back() {
    let store = MemoryStore::with_value(KEY, "pink");
    assert_eq!(read_preference(&store, KEY, Theme::Dark), Theme::Dark);
}

#[test]
fn unreadable_store_falls_back() {
    let store = MemoryStore::unavailable();
    assert_eq!(read_preference(&store, KEY, Theme::Light), Theme::Light);
}

#[test]
fn persist_writes_literal() {
    let mut store = MemoryStore::new();
    persist(&mut store, KEY, Theme::Light);
    assert_eq!(store.value(KEY), Some("light"));
    persist(&mut store, KEY, Theme::Dark);
    assert_eq!(store.value(KEY), Some("dark"));
}

#[test]
fn persist_to_unavailable_store_is_silent() {
    let mut store = MemoryStore::unavailable();
    persist(&mut store, KEY, Theme::Light);
    assert_eq!(store.value(KEY), None);
}
