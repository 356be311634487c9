#![cfg(not(feature = "csr"))]

use super::*;

#[test]
fn only_literal_light_selects_light() {
    assert_eq!(Theme::from_stored(Some("light")), Theme::Light);
    assert_eq!(Theme::from_stored(Some("dark")), Theme::Dark);
    assert_eq!(Theme::from_stored(Some("Light")), Theme::Dark);
    assert_eq!(Theme::from_stored(Some("true")), Theme::Dark);
    assert_eq!(Theme::from_stored(None), Theme::Dark);
}

#[test]
fn default_theme_is_dark() {
    assert_eq!(Theme::default(), Theme::Dark);
}

#[test]
fn toggled_flips_between_variants() {
    assert_eq!(Theme::Light.toggled(), Theme::Dark);
    assert_eq!(Theme::Dark.toggled(), Theme::Light);
}

#[test]
fn stored_value_round_trips_through_from_stored() {
    for theme in [Theme::Light, Theme::Dark] {
        assert_eq!(Theme::from_stored(Some(theme.as_str())), theme);
    }
}

#[test]
fn each_variant_owns_a_distinct_class() {
    assert_eq!(Theme::Light.class(), LIGHT_CLASS);
    assert_eq!(Theme::Dark.class(), DARK_CLASS);
    assert_ne!(Theme::Light.class(), Theme::Dark.class());
}

#[test]
fn toggle_sequence_keeps_persisted_value_in_step() {
    let config = SiteConfig::default();
    init(&config);
    assert_eq!(active(), Theme::Dark);
    for _ in 0..5 {
        let before = active();
        let next = toggle(&config, before);
        assert_ne!(next, before);
        assert_eq!(active(), next);
        assert_eq!(storage::load(&config.theme_storage_key).as_deref(), Some(active().as_str()));
    }
    assert_eq!(active(), Theme::Light);
    assert_eq!(read_preference(&config), Theme::Light);
}

#[test]
fn init_applies_stored_preference() {
    let config = SiteConfig::default();
    storage::save(&config.theme_storage_key, "light");
    init(&config);
    assert_eq!(active(), Theme::Light);
}

#[test]
fn init_without_stored_value_shows_dark() {
    let config = SiteConfig::default();
    init(&config);
    assert_eq!(active(), Theme::Dark);
    assert_eq!(storage::load(&config.theme_storage_key), None);
}
