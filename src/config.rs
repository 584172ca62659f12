//! Configuration file support for reaction-picker.
//!
//! Configuration is loaded from `~/.config/reaction-picker/config.toml` with the
//! following precedence:
//! 1. CLI arguments (highest priority)
//! 2. Environment variables (`REACTION_PICKER_CONFIG` overrides the file path)
//! 3. Configuration file
//! 4. Default values (lowest priority)
//!
//! # Example Configuration
//!
//! ```toml
//! # ~/.config/reaction-picker/config.toml
//! long_press_ms = 400
//! default_index = 1
//! icon_size = 2
//!
//! [strip]
//! icon_width = 4
//! padding_x = 2
//!
//! [unselected]
//! id = 0
//! icon = "👍"
//! label = "Like"
//! color = "gray"
//!
//! [[reactions]]
//! id = 1
//! icon = "❤️"
//! label = "Love"
//! color = "red"
//! payload = { weight = 2 }
//! ```

use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::time::Duration;

use ratatui::style::Color;
use serde::Deserialize;

use crate::error::{PickerError, Result};
use crate::gesture::{DEFAULT_ALLOWABLE_MOVEMENT, DEFAULT_MIN_PRESS};
use crate::log;
use crate::picker::PickerStyle;
use crate::reaction::Reaction;

/// Default redraw interval while the demo is running.
const DEFAULT_FRAME_MS: u64 = 16;

/// Main configuration structure.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    /// Hold time before a press becomes a long press
    pub long_press_ms: Option<u64>,

    /// Cells the pointer may move before the long press begins
    pub allowable_movement: Option<u16>,

    /// Redraw interval in milliseconds
    pub frame_ms: Option<u64>,

    /// Index of the reaction a plain tap selects
    pub default_index: Option<usize>,

    /// Width of the current icon in the control
    pub icon_size: Option<u16>,

    /// Strip geometry
    pub strip: StripConfig,

    /// Reaction set; the built-in set is used when empty
    pub reactions: Vec<ReactionConfig>,

    /// Placeholder shown while nothing is selected
    pub unselected: Option<ReactionConfig>,
}

/// Strip geometry overrides.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct StripConfig {
    pub icon_width: Option<u16>,
    pub icon_height: Option<u16>,
    pub padding_x: Option<u16>,
    pub padding_y: Option<u16>,
    pub inset: Option<u16>,
}

/// One reaction as written in the config file.
#[derive(Debug, Clone, Deserialize)]
pub struct ReactionConfig {
    pub id: i64,

    #[serde(default)]
    pub icon: Option<String>,

    #[serde(default)]
    pub label: Option<String>,

    /// Color name or `#rrggbb`
    #[serde(default)]
    pub color: Option<String>,

    #[serde(default)]
    pub payload: Option<toml::Value>,
}

impl ReactionConfig {
    pub fn to_reaction(&self) -> Result<Reaction> {
        let mut reaction = Reaction::new(self.id);
        if let Some(icon) = &self.icon {
            reaction = reaction.with_icon(icon.as_str());
        }
        if let Some(label) = &self.label {
            reaction = reaction.with_label(label.clone());
        }
        if let Some(color) = &self.color {
            let parsed =
                Color::from_str(color).map_err(|_| PickerError::InvalidColor(color.clone()))?;
            reaction = reaction.with_color(parsed);
        }
        if let Some(payload) = &self.payload {
            let value = serde_json::to_value(payload)
                .map_err(|e| PickerError::InvalidPayload(e.to_string()))?;
            reaction = reaction.with_payload(value);
        }
        Ok(reaction)
    }
}

impl Config {
    /// Load configuration from the default config file path.
    ///
    /// Returns default configuration if file doesn't exist or can't be parsed.
    pub fn load() -> Self {
        let config_path = Self::config_path();

        if !config_path.exists() {
            return Self::default();
        }

        Self::load_or_default(&config_path)
    }

    /// Load configuration from `path`.
    ///
    /// Returns default configuration with a warning if the file is missing or
    /// can't be parsed.
    pub fn load_or_default(path: &Path) -> Self {
        match Self::load_from(path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("Warning: {}", e);
                log::log_warning(&format!("config {}: {}", path.display(), e));
                Self::default()
            }
        }
    }

    /// Load configuration from an explicit path.
    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        toml::from_str(&contents).map_err(|source| PickerError::ConfigParse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Get the configuration file path, honoring `REACTION_PICKER_CONFIG`.
    pub fn config_path() -> PathBuf {
        std::env::var("REACTION_PICKER_CONFIG")
            .ok()
            .map(PathBuf::from)
            .unwrap_or_else(|| Self::config_dir().join("config.toml"))
    }

    /// Get the configuration directory path.
    pub fn config_dir() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("reaction-picker")
    }

    /// Merge with CLI overrides.
    ///
    /// CLI arguments take precedence over config file values.
    pub fn with_overrides(
        mut self,
        default_index: Option<usize>,
        long_press_ms: Option<u64>,
    ) -> Self {
        if default_index.is_some() {
            self.default_index = default_index;
        }
        if long_press_ms.is_some() {
            self.long_press_ms = long_press_ms;
        }
        self
    }

    pub fn long_press(&self) -> Duration {
        self.long_press_ms
            .map(Duration::from_millis)
            .unwrap_or(DEFAULT_MIN_PRESS)
    }

    pub fn allowable_movement(&self) -> u16 {
        self.allowable_movement.unwrap_or(DEFAULT_ALLOWABLE_MOVEMENT)
    }

    pub fn frame_interval(&self) -> Duration {
        Duration::from_millis(self.frame_ms.unwrap_or(DEFAULT_FRAME_MS).max(1))
    }

    /// Picker presentation with config overrides applied.
    pub fn picker_style(&self) -> PickerStyle {
        let defaults = PickerStyle::default();
        PickerStyle {
            icon_width: self.strip.icon_width.unwrap_or(defaults.icon_width).max(1),
            icon_height: self.strip.icon_height.unwrap_or(defaults.icon_height).max(1),
            padding_x: self.strip.padding_x.unwrap_or(defaults.padding_x),
            padding_y: self.strip.padding_y.unwrap_or(defaults.padding_y),
            strip_inset: self.strip.inset.unwrap_or(defaults.strip_inset),
            current_icon_width: self.icon_size.unwrap_or(defaults.current_icon_width),
            ..defaults
        }
    }

    /// Configured reaction set (empty when the file defines none).
    pub fn reactions(&self) -> Result<Vec<Reaction>> {
        self.reactions.iter().map(ReactionConfig::to_reaction).collect()
    }

    /// Configured placeholder, if any.
    pub fn unselected(&self) -> Result<Option<Reaction>> {
        self.unselected.as_ref().map(ReactionConfig::to_reaction).transpose()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert!(config.long_press_ms.is_none());
        assert!(config.reactions.is_empty());
        assert_eq!(config.long_press(), DEFAULT_MIN_PRESS);
        assert_eq!(config.picker_style(), PickerStyle::default());
        assert_eq!(config.frame_interval(), Duration::from_millis(16));
    }

    #[test]
    fn test_parse_config() {
        let toml = r##"
            long_press_ms = 400
            default_index = 1
            icon_size = 3

            [strip]
            icon_width = 6
            padding_y = 0

            [unselected]
            id = 0
            icon = "👍"
            label = "Like"
            color = "gray"

            [[reactions]]
            id = 1
            icon = "❤️"
            label = "Love"
            color = "red"
            payload = { weight = 2 }

            [[reactions]]
            id = 2
            label = "Insightful"
            color = "#27B3F9"
        "##;

        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.long_press(), Duration::from_millis(400));
        assert_eq!(config.default_index, Some(1));

        let style = config.picker_style();
        assert_eq!(style.icon_width, 6);
        assert_eq!(style.padding_y, 0);
        assert_eq!(style.padding_x, PickerStyle::default().padding_x);
        assert_eq!(style.current_icon_width, 3);

        let reactions = config.reactions().unwrap();
        assert_eq!(reactions.len(), 2);
        assert_eq!(reactions[0].label_text(), "Love");
        assert_eq!(reactions[0].color, Some(Color::Red));
        assert_eq!(reactions[0].payload, Some(serde_json::json!({ "weight": 2 })));
        assert_eq!(reactions[1].color, Some(Color::Rgb(0x27, 0xB3, 0xF9)));
        assert!(reactions[1].icon.is_none());

        let unselected = config.unselected().unwrap().unwrap();
        assert_eq!(unselected.id, 0);
        assert_eq!(unselected.glyph(), "👍");
    }

    #[test]
    fn test_invalid_color_is_reported() {
        let toml = r#"
            [[reactions]]
            id = 1
            color = "not-a-color"
        "#;

        let config: Config = toml::from_str(toml).unwrap();
        assert!(matches!(
            config.reactions(),
            Err(PickerError::InvalidColor(color)) if color == "not-a-color"
        ));
    }

    #[test]
    fn test_cli_overrides_win() {
        let config: Config = toml::from_str("default_index = 3\nlong_press_ms = 900").unwrap();
        let config = config.with_overrides(Some(0), None);
        assert_eq!(config.default_index, Some(0));
        assert_eq!(config.long_press(), Duration::from_millis(900));
    }

    fn temp_config(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("reaction-picker-{}-{}.toml", name, std::process::id()))
    }

    #[test]
    fn test_load_from_reports_parse_errors() {
        let path = temp_config("parse-error");
        std::fs::write(&path, "long_press_ms = \"soon\"").unwrap();

        let result = Config::load_from(&path);
        let _ = std::fs::remove_file(&path);
        assert!(matches!(result, Err(PickerError::ConfigParse { .. })));
    }

    #[test]
    fn test_load_or_default_falls_back_on_bad_file() {
        let path = temp_config("fallback");
        std::fs::write(&path, "long_press_ms = \"soon\"").unwrap();

        let config = Config::load_or_default(&path);
        let _ = std::fs::remove_file(&path);
        assert!(config.long_press_ms.is_none());
        assert_eq!(config.long_press(), DEFAULT_MIN_PRESS);
    }

    #[test]
    fn test_load_or_default_falls_back_on_missing_file() {
        let path = temp_config("missing");
        let _ = std::fs::remove_file(&path);

        let config = Config::load_or_default(&path);
        assert!(config.reactions.is_empty());
        assert_eq!(config.picker_style(), PickerStyle::default());
    }

    #[test]
    fn test_load_or_default_reads_good_file() {
        let path = temp_config("good");
        std::fs::write(&path, "long_press_ms = 250").unwrap();

        let config = Config::load_or_default(&path);
        let _ = std::fs::remove_file(&path);
        assert_eq!(config.long_press(), Duration::from_millis(250));
    }
}
