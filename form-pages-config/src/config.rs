//! The [`Config`] struct and its load/save/validate methods.

use crate::defaults;
use crate::error::ConfigError;
use crate::types::{LogLevel, PageSeed, TabBarPosition};
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

/// Application configuration, persisted as YAML.
///
/// Every field has a serde default so partial files load cleanly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    // ── Window ─────────────────────────────────────────────────────────────
    #[serde(default = "defaults::window_title")]
    pub window_title: String,
    #[serde(default = "defaults::window_width")]
    pub window_width: u32,
    #[serde(default = "defaults::window_height")]
    pub window_height: u32,
    #[serde(default = "defaults::background_color")]
    pub background_color: [u8; 3],

    // ── Tab bar layout ─────────────────────────────────────────────────────
    #[serde(default)]
    pub tab_bar_position: TabBarPosition,
    #[serde(default = "defaults::tab_bar_height")]
    pub tab_bar_height: f32,
    /// Width of a single page tab in pixels
    #[serde(default = "defaults::tab_min_width")]
    pub tab_min_width: f32,
    /// Titles longer than this are truncated with an ellipsis
    #[serde(default = "defaults::tab_max_title_chars")]
    pub tab_max_title_chars: usize,

    // ── Tab bar colours ────────────────────────────────────────────────────
    #[serde(default = "defaults::tab_bar_background")]
    pub tab_bar_background: [u8; 3],
    #[serde(default = "defaults::tab_active_background")]
    pub tab_active_background: [u8; 3],
    #[serde(default = "defaults::tab_inactive_background")]
    pub tab_inactive_background: [u8; 3],
    #[serde(default = "defaults::tab_active_border")]
    pub tab_active_border: [u8; 3],
    #[serde(default = "defaults::tab_inactive_border")]
    pub tab_inactive_border: [u8; 3],
    #[serde(default = "defaults::tab_active_text")]
    pub tab_active_text: [u8; 3],
    #[serde(default = "defaults::tab_inactive_text")]
    pub tab_inactive_text: [u8; 3],
    #[serde(default = "defaults::tab_active_icon")]
    pub tab_active_icon: [u8; 3],
    #[serde(default = "defaults::tab_inactive_icon")]
    pub tab_inactive_icon: [u8; 3],
    #[serde(default = "defaults::tab_drop_indicator")]
    pub tab_drop_indicator: [u8; 3],
    #[serde(default = "defaults::menu_accent_color")]
    pub menu_accent_color: [u8; 3],
    #[serde(default = "defaults::menu_danger_color")]
    pub menu_danger_color: [u8; 3],

    // ── Interaction ────────────────────────────────────────────────────────
    /// Pixels scrolled by the left/right arrow buttons
    #[serde(default = "defaults::scroll_amount")]
    pub scroll_amount: f32,
    /// Pointer travel (logical px) before a press on a tab becomes a drag
    #[serde(default = "defaults::drag_threshold")]
    pub drag_threshold: f32,
    /// Gap between the context menu and its anchor
    #[serde(default = "defaults::menu_offset")]
    pub menu_offset: f32,
    /// Minimum margin kept between the context menu and the viewport edge
    #[serde(default = "defaults::menu_padding")]
    pub menu_padding: f32,

    // ── Logging ────────────────────────────────────────────────────────────
    #[serde(default)]
    pub log_level: LogLevel,

    // ── Pages ──────────────────────────────────────────────────────────────
    /// Page list shown on startup; the first entry starts active
    #[serde(default = "defaults::pages")]
    pub pages: Vec<PageSeed>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            window_title: defaults::window_title(),
            window_width: defaults::window_width(),
            window_height: defaults::window_height(),
            background_color: defaults::background_color(),
            tab_bar_position: TabBarPosition::default(),
            tab_bar_height: defaults::tab_bar_height(),
            tab_min_width: defaults::tab_min_width(),
            tab_max_title_chars: defaults::tab_max_title_chars(),
            tab_bar_background: defaults::tab_bar_background(),
            tab_active_background: defaults::tab_active_background(),
            tab_inactive_background: defaults::tab_inactive_background(),
            tab_active_border: defaults::tab_active_border(),
            tab_inactive_border: defaults::tab_inactive_border(),
            tab_active_text: defaults::tab_active_text(),
            tab_inactive_text: defaults::tab_inactive_text(),
            tab_active_icon: defaults::tab_active_icon(),
            tab_inactive_icon: defaults::tab_inactive_icon(),
            tab_drop_indicator: defaults::tab_drop_indicator(),
            menu_accent_color: defaults::menu_accent_color(),
            menu_danger_color: defaults::menu_danger_color(),
            scroll_amount: defaults::scroll_amount(),
            drag_threshold: defaults::drag_threshold(),
            menu_offset: defaults::menu_offset(),
            menu_padding: defaults::menu_padding(),
            log_level: LogLevel::default(),
            pages: defaults::pages(),
        }
    }
}

impl Config {
    /// Load configuration from the default path, or return defaults if the file is absent.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path())
    }

    /// Load configuration from `path`, or return defaults if the file is absent.
    ///
    /// A missing file is not an error and nothing is written to disk.
    pub fn load_from(path: &Path) -> Result<Self> {
        log::info!("Config path: {:?}", path);

        if !path.exists() {
            log::info!("No config file found, using defaults");
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(path).map_err(ConfigError::from)?;
        let config = Self::from_yaml(&contents)?;
        log::info!("Loaded config from {:?}", path);
        Ok(config)
    }

    /// Parse and validate configuration from a YAML string.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let config: Config = serde_yaml_ng::from_str(yaml).map_err(ConfigError::from)?;
        config.validate()?;
        Ok(config)
    }

    /// Save configuration to the default path.
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path())
    }

    /// Save configuration to `path`.
    ///
    /// Writes to a sibling temp file then renames it over the target.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(ConfigError::from)?;
        }

        let yaml = self.to_yaml()?;
        let temp_path = path.with_extension("yaml.tmp");
        fs::write(&temp_path, &yaml).map_err(ConfigError::from)?;
        fs::rename(&temp_path, path).map_err(ConfigError::from)?;

        log::info!("Saved config to {:?}", path);
        Ok(())
    }

    /// Serialize to YAML.
    pub fn to_yaml(&self) -> Result<String> {
        Ok(serde_yaml_ng::to_string(self).map_err(ConfigError::from)?)
    }

    /// Check field values that serde cannot express.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let positive = [
            ("tab_bar_height", self.tab_bar_height),
            ("tab_min_width", self.tab_min_width),
            ("scroll_amount", self.scroll_amount),
        ];
        for (name, value) in positive {
            if value.is_nan() || value <= 0.0 {
                return Err(ConfigError::Validation(format!(
                    "{name} must be positive (got {value})"
                )));
            }
        }

        let non_negative = [
            ("drag_threshold", self.drag_threshold),
            ("menu_offset", self.menu_offset),
            ("menu_padding", self.menu_padding),
        ];
        for (name, value) in non_negative {
            if value.is_nan() || value < 0.0 {
                return Err(ConfigError::Validation(format!(
                    "{name} must not be negative (got {value})"
                )));
            }
        }

        if self.window_width == 0 || self.window_height == 0 {
            return Err(ConfigError::Validation(
                "window_width and window_height must be non-zero".to_string(),
            ));
        }

        if self.tab_max_title_chars == 0 {
            return Err(ConfigError::Validation(
                "tab_max_title_chars must be at least 1".to_string(),
            ));
        }

        if self.pages.is_empty() {
            return Err(ConfigError::Validation(
                "pages must contain at least one page".to_string(),
            ));
        }

        let mut seen = HashSet::with_capacity(self.pages.len());
        for page in &self.pages {
            if !seen.insert(page.id) {
                return Err(ConfigError::Validation(format!(
                    "duplicate page id {} in pages",
                    page.id
                )));
            }
        }

        Ok(())
    }

    /// Get the configuration file path (XDG convention outside Windows)
    pub fn config_path() -> PathBuf {
        Self::config_dir().join("config.yaml")
    }

    /// Get the configuration directory
    pub fn config_dir() -> PathBuf {
        #[cfg(target_os = "windows")]
        {
            if let Some(config_dir) = dirs::config_dir() {
                config_dir.join("form-pages")
            } else {
                PathBuf::from(".")
            }
        }
        #[cfg(not(target_os = "windows"))]
        {
            if let Some(home_dir) = dirs::home_dir() {
                home_dir.join(".config").join("form-pages")
            } else {
                PathBuf::from(".")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        assert!(Config::default().validate().is_ok());
    }

    #[test]
    fn default_seed_matches_demo_pages() {
        let config = Config::default();
        let titles: Vec<&str> = config
            .pages
            .iter()
            .map(|p| p.title.as_str())
            .collect();
        assert_eq!(titles, vec!["Info", "Details", "Other", "Ending"]);
    }

    #[test]
    fn partial_yaml_fills_defaults() {
        let config = Config::from_yaml("scroll_amount: 200.0\n").unwrap();
        assert_eq!(config.scroll_amount, 200.0);
        assert_eq!(config.drag_threshold, 8.0);
        assert_eq!(config.pages.len(), 4);
    }

    #[test]
    fn duplicate_seed_ids_rejected() {
        let yaml = "pages:\n  - { id: 1, title: A }\n  - { id: 1, title: B }\n";
        let err = Config::from_yaml(yaml).unwrap_err();
        let cfg_err = err.downcast_ref::<ConfigError>().unwrap();
        assert!(matches!(cfg_err, ConfigError::Validation(msg) if msg.contains("duplicate")));
    }

    #[test]
    fn empty_seed_rejected() {
        assert!(Config::from_yaml("pages: []\n").is_err());
    }

    #[test]
    fn negative_threshold_rejected() {
        assert!(Config::from_yaml("drag_threshold: -1.0\n").is_err());
    }

    #[test]
    fn nan_sizes_and_thresholds_rejected() {
        let config = Config {
            tab_min_width: f32::NAN,
            ..Config::default()
        };
        assert!(matches!(config.validate(), Err(ConfigError::Validation(_))));

        let config = Config {
            menu_padding: f32::NAN,
            ..Config::default()
        };
        assert!(matches!(config.validate(), Err(ConfigError::Validation(_))));

        let config = Config {
            drag_threshold: 0.0,
            ..Config::default()
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn invalid_yaml_is_parse_error() {
        let err = Config::from_yaml("tab_bar_height: [not, a, number]\n").unwrap_err();
        assert!(matches!(
            err.downcast_ref::<ConfigError>(),
            Some(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn position_uses_snake_case() {
        let config = Config::from_yaml("tab_bar_position: top\n").unwrap();
        assert_eq!(config.tab_bar_position, TabBarPosition::Top);
    }
}
