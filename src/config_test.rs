use super::*;

#[test]
fn defaults_match_shipped_site() {
    let config = SiteConfig::default();
    assert_eq!(config.theme_storage_key, "theme");
    assert_eq!(config.nav_breakpoint_px, 800.0);
    assert_eq!(config.reveal_threshold, 0.12);
    assert_eq!(config.featured_limit, 4);
    assert_eq!(config.print_delay_ms, 10);
    assert_eq!(config.projects_data_path, "data/projects.json");
    assert_eq!(config.sprite_candidates[0], "assets/icons/icons-sprite.svg");
    assert_eq!(config.sprite_candidates.len(), 3);
}

#[test]
fn override_replaces_only_given_fields() {
    let config = SiteConfig::from_json(r#"{ "featured_limit": 6, "contact_recipient": "me@example.com" }"#)
        .expect("override should parse");
    assert_eq!(config.featured_limit, 6);
    assert_eq!(config.contact_recipient, "me@example.com");
    assert_eq!(config.theme_storage_key, DEFAULT_THEME_STORAGE_KEY);
    assert_eq!(config.nav_breakpoint_px, DEFAULT_NAV_BREAKPOINT_PX);
}

#[test]
fn empty_object_yields_defaults() {
    let config = SiteConfig::from_json("{}").expect("empty object should parse");
    assert_eq!(config, SiteConfig::default());
}

#[test]
fn malformed_override_is_an_error() {
    assert!(SiteConfig::from_json("{ featured_limit: 6 }").is_err());
    assert!(SiteConfig::from_json(r#"{ "featured_limit": "six" }"#).is_err());
}

#[test]
fn reveal_selector_joins_all_classes() {
    assert_eq!(SiteConfig::default().reveal_selector(), ".card, .chip, .hero-left");
}

#[test]
fn log_level_falls_back_to_info() {
    let mut config = SiteConfig::default();
    assert_eq!(config.log_level(), log::Level::Info);
    config.log_level = "debug".to_owned();
    assert_eq!(config.log_level(), log::Level::Debug);
    config.log_level = "chatty".to_owned();
    assert_eq!(config.log_level(), log::Level::Info);
}

#[test]
fn load_without_browser_uses_defaults() {
    let (config, err) = SiteConfig::load();
    assert_eq!(config, SiteConfig::default());
    assert!(err.is_none());
}
