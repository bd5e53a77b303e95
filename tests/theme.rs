//! Theme and configuration tests

use std::io::Write;

use swipe::config::CarouselConfig;
use swipe::config_paths;
use swipe::theme::{from_file, Color, Theme, BUILTIN_THEMES, MIDNIGHT_YAML, PASTEL_YAML};

// ========================================================================
// Color parsing
// ========================================================================

#[test]
fn test_color_from_hex() {
    let color = Color::from_hex("#F08080").unwrap();
    assert_eq!(color.r, 0xF0);
    assert_eq!(color.g, 0x80);
    assert_eq!(color.b, 0x80);
}

#[test]
fn test_color_from_hex_without_hash() {
    let color = Color::from_hex("20B2AA").unwrap();
    assert_eq!(color.r, 0x20);
    assert_eq!(color.g, 0xB2);
    assert_eq!(color.b, 0xAA);
}

#[test]
fn test_color_from_hex_rejects_bad_input() {
    assert!(Color::from_hex("#FFF").is_err());
    assert!(Color::from_hex("#GGGGGG").is_err());
    assert!(Color::from_hex("").is_err());
}

#[test]
fn test_color_to_pixel() {
    let color = Color {
        r: 0x12,
        g: 0x34,
        b: 0x56,
    };
    assert_eq!(color.to_pixel(), 0x0012_3456);
}

// ========================================================================
// Theme loading
// ========================================================================

#[test]
fn test_default_theme_has_five_panels() {
    let theme = Theme::default();
    assert_eq!(theme.name, "Pastel");
    assert_eq!(theme.panels.len(), 5);
    assert_eq!(theme.panels[0], Color::from_hex("#F08080").unwrap());
}

#[test]
fn test_all_builtin_themes_parse() {
    for builtin in BUILTIN_THEMES {
        let theme = Theme::from_yaml(builtin.yaml)
            .unwrap_or_else(|e| panic!("builtin '{}' failed to parse: {}", builtin.id, e));
        assert!(!theme.panels.is_empty(), "builtin '{}' has no panels", builtin.id);
    }
}

#[test]
fn test_midnight_yaml_parses() {
    let theme = Theme::from_yaml(MIDNIGHT_YAML).unwrap();
    assert_eq!(theme.name, "Midnight");
}

#[test]
fn test_from_builtin_unknown_id_errors() {
    assert!(Theme::from_builtin("no-such-theme").is_err());
}

#[test]
fn test_theme_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(PASTEL_YAML.as_bytes()).unwrap();

    let theme = from_file(file.path()).unwrap();
    assert_eq!(theme.name, "Pastel");
    assert_eq!(theme.panels.len(), 5);
}

#[test]
fn test_theme_from_missing_file_errors() {
    assert!(from_file(std::path::Path::new("/nonexistent/theme.yaml")).is_err());
}

#[test]
fn test_theme_with_empty_palette_parses_but_is_rejected_at_startup() {
    // Parsing succeeds; panel-count validation happens at startup
    let theme = Theme::from_yaml(
        "name: Empty\nbackground: \"#000000\"\npanels: []\nindicator:\n  active: \"#FFFFFF\"\n  inactive: \"#888888\"\n",
    )
    .unwrap();
    assert!(theme.panels.is_empty());
}

// ========================================================================
// Config paths
// ========================================================================

#[test]
fn test_config_dir_returns_some() {
    assert!(config_paths::config_dir().is_some());
}

#[test]
fn test_config_dir_contains_app_dir() {
    let dir = config_paths::config_dir().unwrap();
    assert!(dir.to_string_lossy().contains("swipe-carousel"));
}

#[test]
fn test_config_file_ends_with_yaml() {
    let path = config_paths::config_file().unwrap();
    assert!(path.to_string_lossy().ends_with("config.yaml"));
}

#[test]
fn test_themes_dir_is_subdir_of_config() {
    let config = config_paths::config_dir().unwrap();
    let themes = config_paths::themes_dir().unwrap();
    assert!(themes.starts_with(&config));
}

// ========================================================================
// Config defaults
// ========================================================================

#[test]
fn test_config_default_theme_is_pastel() {
    let config = CarouselConfig::default();
    assert_eq!(config.theme, "pastel");
}

#[test]
fn test_config_roundtrips_through_yaml() {
    let config = CarouselConfig {
        theme: "midnight".to_string(),
    };
    let yaml = serde_yaml::to_string(&config).unwrap();
    let parsed: CarouselConfig = serde_yaml::from_str(&yaml).unwrap();
    assert_eq!(parsed.theme, "midnight");
}
