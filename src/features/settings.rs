//! Application settings persistence
//!
//! Holds the button's configurable surface (fill color, symbol color,
//! animation duration) plus display preferences, stored as JSON.

use std::path::{Path, PathBuf};

use iced::Color;
use iced::time::Duration;
use serde::{Deserialize, Serialize};

use crate::ui::primitives::progress_button::DEFAULT_ANIMATION_DURATION;

/// Application settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Fill color of the button circle
    #[serde(with = "hex_color", default = "default_button_color")]
    pub button_color: Color,
    /// Stroke color of the plus glyph
    #[serde(with = "hex_color", default = "default_symbol_color")]
    pub symbol_color: Color,
    /// Progress animation duration in seconds
    #[serde(default = "default_animation_duration")]
    pub animation_duration: f32,
    /// Dark window theme
    #[serde(default = "default_true")]
    pub dark_mode: bool,
}

fn default_button_color() -> Color {
    Color::WHITE
}

fn default_symbol_color() -> Color {
    Color::BLACK
}

fn default_animation_duration() -> f32 {
    DEFAULT_ANIMATION_DURATION.as_secs_f32()
}

fn default_true() -> bool {
    true
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            button_color: default_button_color(),
            symbol_color: default_symbol_color(),
            animation_duration: default_animation_duration(),
            dark_mode: true,
        }
    }
}

impl Settings {
    /// Get the settings file path
    pub fn file_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("com", "progress-button", "ProgressButton")
            .map(|dirs| dirs.config_dir().join("settings.json"))
    }

    /// Load settings from file, or return defaults if not found
    pub fn load() -> Self {
        let Some(path) = Self::file_path() else {
            return Self::default();
        };

        match Self::load_from_file(&path) {
            Ok(settings) => settings,
            Err(e) => {
                tracing::debug!("Using default settings ({}): {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Load settings from a specific file
    pub fn load_from_file(path: &Path) -> Result<Self, SettingsError> {
        let content =
            std::fs::read_to_string(path).map_err(|e| SettingsError::Io(e.to_string()))?;
        serde_json::from_str(&content).map_err(|e| SettingsError::Parse(e.to_string()))
    }

    /// Save settings to the default file
    pub fn save(&self) -> Result<(), SettingsError> {
        if let Some(path) = Self::file_path() {
            self.save_to_file(&path)
        } else {
            Err(SettingsError::Io(
                "Could not determine config directory".to_string(),
            ))
        }
    }

    /// Save settings to a specific file
    pub fn save_to_file(&self, path: &Path) -> Result<(), SettingsError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| SettingsError::Io(e.to_string()))?;
        }

        let content =
            serde_json::to_string_pretty(self).map_err(|e| SettingsError::Parse(e.to_string()))?;
        std::fs::write(path, content).map_err(|e| SettingsError::Io(e.to_string()))?;
        Ok(())
    }

    /// Animation duration, falling back to the default when the stored
    /// value is negative, NaN or too large
    pub fn animation_duration(&self) -> Duration {
        Duration::try_from_secs_f32(self.animation_duration).unwrap_or_else(|_| {
            tracing::warn!(
                "Invalid animation duration {}, using {:?}",
                self.animation_duration,
                DEFAULT_ANIMATION_DURATION
            );
            DEFAULT_ANIMATION_DURATION
        })
    }
}

/// Errors that can occur with settings
#[derive(Debug, Clone)]
pub enum SettingsError {
    Io(String),
    Parse(String),
}

impl std::fmt::Display for SettingsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SettingsError::Io(e) => write!(f, "IO error: {}", e),
            SettingsError::Parse(e) => write!(f, "Parse error: {}", e),
        }
    }
}

impl std::error::Error for SettingsError {}

/// `#rrggbb` / `#rrggbbaa` (de)serialization for colors
mod hex_color {
    use iced::Color;
    use serde::{Deserialize, Deserializer, Serializer, de};

    pub fn serialize<S: Serializer>(color: &Color, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&to_hex(*color))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Color, D::Error> {
        let value = String::deserialize(deserializer)?;
        parse(&value).ok_or_else(|| de::Error::custom(format!("invalid color: {value}")))
    }

    pub fn to_hex(color: Color) -> String {
        let [r, g, b, a] = color.into_rgba8();
        if a == u8::MAX {
            format!("#{r:02x}{g:02x}{b:02x}")
        } else {
            format!("#{r:02x}{g:02x}{b:02x}{a:02x}")
        }
    }

    pub fn parse(value: &str) -> Option<Color> {
        let hex = value.strip_prefix('#')?;
        if !hex.is_ascii() {
            return None;
        }

        let channel = |i: usize| u8::from_str_radix(hex.get(i..i + 2)?, 16).ok();
        match hex.len() {
            6 => Some(Color::from_rgb8(channel(0)?, channel(2)?, channel(4)?)),
            8 => Some(Color::from_rgba8(
                channel(0)?,
                channel(2)?,
                channel(4)?,
                f32::from(channel(6)?) / 255.0,
            )),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();

        assert_eq!(settings.button_color, Color::WHITE);
        assert_eq!(settings.symbol_color, Color::BLACK);
        assert_eq!(settings.animation_duration(), Duration::from_secs(1));
        assert!(settings.dark_mode);
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let settings: Settings = serde_json::from_str("{}").unwrap();
        assert_eq!(settings, Settings::default());

        let settings: Settings =
            serde_json::from_str(r##"{"symbol_color": "#ff0000", "dark_mode": false}"##)
                .unwrap();
        assert_eq!(settings.symbol_color, Color::from_rgb8(255, 0, 0));
        assert!(!settings.dark_mode);
        assert_eq!(settings.button_color, Color::WHITE);
    }

    #[test]
    fn test_save_and_load() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("settings.json");
        let settings = Settings {
            button_color: Color::from_rgb8(255, 0, 255),
            symbol_color: Color::TRANSPARENT,
            animation_duration: 0.25,
            dark_mode: false,
        };

        settings.save_to_file(&path).unwrap();
        let loaded = Settings::load_from_file(&path).unwrap();

        assert_eq!(loaded, settings);
    }

    #[test]
    fn test_colors_stored_as_hex() {
        let json = serde_json::to_string(&Settings::default()).unwrap();

        assert!(json.contains(r##""button_color":"#ffffff""##));
        assert!(json.contains(r##""symbol_color":"#000000""##));
    }

    #[test]
    fn test_load_missing_file_is_io_error() {
        let dir = TempDir::new().unwrap();
        let result = Settings::load_from_file(&dir.path().join("absent.json"));

        assert!(matches!(result, Err(SettingsError::Io(_))));
    }

    #[test]
    fn test_load_bad_color_is_parse_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("settings.json");
        std::fs::write(&path, r#"{"button_color": "white"}"#).unwrap();

        let result = Settings::load_from_file(&path);

        assert!(matches!(result, Err(SettingsError::Parse(_))));
    }

    #[test]
    fn test_invalid_duration_falls_back() {
        for bad in [-1.0, f32::NAN, f32::INFINITY] {
            let settings = Settings {
                animation_duration: bad,
                ..Default::default()
            };
            assert_eq!(settings.animation_duration(), DEFAULT_ANIMATION_DURATION);
        }

        let settings = Settings {
            animation_duration: 0.0,
            ..Default::default()
        };
        assert_eq!(settings.animation_duration(), Duration::ZERO);
    }

    #[test]
    fn test_hex_parse() {
        assert_eq!(hex_color::parse("#ffffff"), Some(Color::WHITE));
        assert_eq!(hex_color::parse("#00000000"), Some(Color::TRANSPARENT));
        assert_eq!(hex_color::parse("ffffff"), None);
        assert_eq!(hex_color::parse("#fff"), None);
        assert_eq!(hex_color::parse("#gggggg"), None);
        assert_eq!(hex_color::parse("#ffé000"), None);
    }

    #[test]
    fn test_hex_format() {
        assert_eq!(hex_color::to_hex(Color::from_rgb8(255, 0, 255)), "#ff00ff");
        assert_eq!(hex_color::to_hex(Color::TRANSPARENT), "#00000000");
    }
}
