//! Theme system for the carousel
//!
//! Provides YAML-based panel palettes with compile-time embedded themes and
//! user-defined themes from the config directory. The palette doubles as the
//! panel list: its length is the panel count.
//!
//! Theme loading priority:
//! 1. User config: `~/.config/swipe-carousel/themes/{id}.yaml`
//! 2. Embedded: Built-in themes compiled into binary

use std::path::Path;

use serde::Deserialize;

// Embed theme YAML files at compile time
pub const PASTEL_YAML: &str = include_str!("../themes/pastel.yaml");
pub const MIDNIGHT_YAML: &str = include_str!("../themes/midnight.yaml");

/// A built-in theme entry
pub struct BuiltinTheme {
    /// Stable identifier for config (e.g. "pastel", "midnight")
    pub id: &'static str,
    /// Embedded YAML content
    pub yaml: &'static str,
}

/// Registry of all built-in themes
pub const BUILTIN_THEMES: &[BuiltinTheme] = &[
    BuiltinTheme {
        id: "pastel",
        yaml: PASTEL_YAML,
    },
    BuiltinTheme {
        id: "midnight",
        yaml: MIDNIGHT_YAML,
    },
];

/// Where the theme came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemeSource {
    /// User-defined theme in ~/.config/swipe-carousel/themes/
    User,
    /// Built-in theme embedded in binary
    Builtin,
}

/// Information about an available theme
#[derive(Debug, Clone)]
pub struct ThemeInfo {
    /// Stable identifier (e.g., "pastel", "my-custom-theme")
    pub id: String,
    /// Display name from YAML (e.g., "Pastel")
    pub name: String,
    /// Where this theme is loaded from
    pub source: ThemeSource,
}

/// An RGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    /// Parse from a "#RRGGBB" hex string
    pub fn from_hex(s: &str) -> Result<Self, String> {
        let hex = s.strip_prefix('#').unwrap_or(s);
        if hex.len() != 6 || !hex.is_ascii() {
            return Err(format!("Invalid color '{}': expected #RRGGBB", s));
        }
        let parse = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&hex[range], 16)
                .map_err(|e| format!("Invalid color '{}': {}", s, e))
        };
        Ok(Self {
            r: parse(0..2)?,
            g: parse(2..4)?,
            b: parse(4..6)?,
        })
    }

    /// Pack into a 0x00RRGGBB pixel for the softbuffer surface
    pub fn to_pixel(self) -> u32 {
        (u32::from(self.r) << 16) | (u32::from(self.g) << 8) | u32::from(self.b)
    }
}

/// Raw theme structure as deserialized from YAML
#[derive(Debug, Clone, Deserialize)]
struct ThemeData {
    name: String,
    background: String,
    panels: Vec<String>,
    indicator: IndicatorData,
}

#[derive(Debug, Clone, Deserialize)]
struct IndicatorData {
    active: String,
    inactive: String,
}

/// Colors for the panel-index indicator dots
#[derive(Debug, Clone, Copy)]
pub struct IndicatorColors {
    /// Dot for the active panel
    pub active: Color,
    /// Dots for the other panels
    pub inactive: Color,
}

/// A resolved theme with parsed colors
#[derive(Debug, Clone)]
pub struct Theme {
    /// Display name
    pub name: String,
    /// Fill behind and around the panel strip
    pub background: Color,
    /// One color per panel; the length of this list is the panel count
    pub panels: Vec<Color>,
    /// Indicator dot colors
    pub indicator: IndicatorColors,
}

impl Theme {
    /// Parse a theme from YAML content
    pub fn from_yaml(content: &str) -> Result<Self, String> {
        let data: ThemeData =
            serde_yaml::from_str(content).map_err(|e| format!("Failed to parse theme: {}", e))?;

        Ok(Self {
            name: data.name,
            background: Color::from_hex(&data.background)?,
            panels: data
                .panels
                .iter()
                .map(|s| Color::from_hex(s))
                .collect::<Result<Vec<_>, _>>()?,
            indicator: IndicatorColors {
                active: Color::from_hex(&data.indicator.active)?,
                inactive: Color::from_hex(&data.indicator.inactive)?,
            },
        })
    }

    /// Load a built-in theme by id
    pub fn from_builtin(id: &str) -> Result<Self, String> {
        BUILTIN_THEMES
            .iter()
            .find(|t| t.id == id)
            .ok_or_else(|| format!("Unknown builtin theme: {}", id))
            .and_then(|t| Self::from_yaml(t.yaml))
    }
}

impl Default for Theme {
    fn default() -> Self {
        // The embedded default must parse; a failure here is a build defect
        Self::from_yaml(PASTEL_YAML).expect("builtin pastel theme must parse")
    }
}

/// Load a theme from a YAML file
pub fn from_file(path: &Path) -> Result<Theme, String> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| format!("Failed to read theme file {}: {}", path.display(), e))?;
    Theme::from_yaml(&content)
}

/// Load theme by id with priority: user → builtin
///
/// Searches in order:
/// 1. `~/.config/swipe-carousel/themes/{id}.yaml`
/// 2. Embedded builtin themes
pub fn load_theme(id: &str) -> Result<Theme, String> {
    if let Some(user_dir) = crate::config_paths::themes_dir() {
        let user_path = user_dir.join(format!("{}.yaml", id));
        if user_path.exists() {
            tracing::info!("Loading user theme from {}", user_path.display());
            return from_file(&user_path);
        }
    }

    tracing::info!("Loading builtin theme: {}", id);
    Theme::from_builtin(id)
}

/// List all available themes from all sources
///
/// User themes override builtins with the same id.
pub fn list_available_themes() -> Vec<ThemeInfo> {
    let mut themes = Vec::new();
    let mut seen_ids = std::collections::HashSet::new();

    if let Some(user_dir) = crate::config_paths::themes_dir() {
        if let Ok(entries) = std::fs::read_dir(&user_dir) {
            for entry in entries.filter_map(|e| e.ok()) {
                let path = entry.path();
                if path
                    .extension()
                    .is_some_and(|ext| ext == "yaml" || ext == "yml")
                {
                    if let Some(id) = path.file_stem().and_then(|s| s.to_str()) {
                        if seen_ids.insert(id.to_string()) {
                            let name = from_file(&path)
                                .map(|t| t.name)
                                .unwrap_or_else(|_| id.to_string());
                            themes.push(ThemeInfo {
                                id: id.to_string(),
                                name,
                                source: ThemeSource::User,
                            });
                        }
                    }
                }
            }
        }
    }

    for builtin in BUILTIN_THEMES {
        if seen_ids.insert(builtin.id.to_string()) {
            let name = Theme::from_yaml(builtin.yaml)
                .map(|t| t.name)
                .unwrap_or_else(|_| builtin.id.to_string());
            themes.push(ThemeInfo {
                id: builtin.id.to_string(),
                name,
                source: ThemeSource::Builtin,
            });
        }
    }

    themes
}
