// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, including loading and saving
//! user preferences to a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! The configuration is organized into logical sections:
//! - `[general]` - Language and theme mode
//! - `[gallery]` - Gallery directory, sorting, layout metrics and thumbnails
//! - `[animation]` - View transition timing
//!
//! The active view mode is not stored here: it is application state kept in
//! the preference store (see [`crate::app::persisted_state`]).
//!
//! # Path Resolution
//!
//! The config file location can be customized for testing or portable deployments:
//! 1. Use `load_from_path()`/`save_to_path()` with explicit path
//! 2. Set `ICED_GALLERY_CONFIG_DIR` environment variable
//! 3. Falls back to platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use iced_gallery::config::{self, Config};
//!
//! // Load existing configuration (returns tuple with optional warning)
//! let (mut config, _warning) = config::load();
//!
//! // Modify a setting
//! config.general.language = Some("fr".to_string());
//!
//! // Save the modified configuration
//! config::save(&config).expect("Failed to save config");
//! ```

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::error::{Error, Result};
use crate::gallery::easing::CubicBezier;
use crate::gallery::layout::LayoutMetrics;
use crate::gallery::transition::TransitionTiming;
use crate::ui::theming::ThemeMode;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

const CONFIG_FILE: &str = "settings.toml";

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum SortOrder {
    #[default]
    Alphabetical,
    ModifiedDate,
    CreatedDate,
}

// =============================================================================
// Section Structs
// =============================================================================

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GeneralConfig {
    /// UI language code (e.g., "en-US", "fr").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,

    /// Application theme mode (light, dark, or system).
    #[serde(
        default = "default_theme_mode",
        deserialize_with = "deserialize_theme_mode"
    )]
    pub theme_mode: ThemeMode,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            language: None,
            theme_mode: default_theme_mode(),
        }
    }
}

/// Gallery content and layout settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GalleryConfig {
    /// Directory shown when no directory is given on the command line.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub directory: Option<PathBuf>,

    /// Image sorting order.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sort_order: Option<SortOrder>,

    /// Longest edge of decoded thumbnails.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumbnail_max_edge: Option<u32>,

    /// Edge length of a square grid cell.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub grid_cell_size: Option<f32>,

    /// Gap between grid cells.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub grid_gap: Option<f32>,

    /// Row height in list mode.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub list_row_height: Option<f32>,

    /// Thumbnail width in list mode.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub list_thumbnail_width: Option<f32>,

    /// Caption strip height under grid images.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub caption_height: Option<f32>,

    /// Padding around the gallery content.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub padding: Option<f32>,

    /// Number of full-size images kept decoded for the lightbox.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lightbox_cache_size: Option<usize>,
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self {
            directory: None,
            sort_order: Some(SortOrder::default()),
            thumbnail_max_edge: Some(DEFAULT_THUMBNAIL_MAX_EDGE),
            grid_cell_size: Some(DEFAULT_GRID_CELL_SIZE),
            grid_gap: Some(DEFAULT_GRID_GAP),
            list_row_height: Some(DEFAULT_LIST_ROW_HEIGHT),
            list_thumbnail_width: Some(DEFAULT_LIST_THUMBNAIL_WIDTH),
            caption_height: Some(DEFAULT_CAPTION_HEIGHT),
            padding: Some(DEFAULT_PADDING),
            lightbox_cache_size: Some(DEFAULT_LIGHTBOX_CACHE_SIZE),
        }
    }
}

impl GalleryConfig {
    /// Builds layout metrics, clamping every value into its supported range.
    #[must_use]
    pub fn layout_metrics(&self) -> LayoutMetrics {
        let list_row_height = self
            .list_row_height
            .unwrap_or(DEFAULT_LIST_ROW_HEIGHT)
            .clamp(MIN_LIST_ROW_HEIGHT, MAX_LIST_ROW_HEIGHT);
        LayoutMetrics {
            grid_cell_size: self
                .grid_cell_size
                .unwrap_or(DEFAULT_GRID_CELL_SIZE)
                .clamp(MIN_GRID_CELL_SIZE, MAX_GRID_CELL_SIZE),
            grid_gap: self
                .grid_gap
                .unwrap_or(DEFAULT_GRID_GAP)
                .clamp(0.0, MAX_GRID_GAP),
            list_row_height,
            list_thumbnail_width: self
                .list_thumbnail_width
                .unwrap_or(DEFAULT_LIST_THUMBNAIL_WIDTH)
                .clamp(MIN_LIST_ROW_HEIGHT, MAX_GRID_CELL_SIZE),
            list_inset: LIST_INSET,
            caption_height: self
                .caption_height
                .unwrap_or(DEFAULT_CAPTION_HEIGHT)
                .clamp(0.0, list_row_height),
            padding: self
                .padding
                .unwrap_or(DEFAULT_PADDING)
                .clamp(0.0, MAX_GRID_GAP),
        }
    }

    #[must_use]
    pub fn thumbnail_max_edge(&self) -> u32 {
        self.thumbnail_max_edge
            .unwrap_or(DEFAULT_THUMBNAIL_MAX_EDGE)
            .clamp(MIN_THUMBNAIL_MAX_EDGE, MAX_THUMBNAIL_MAX_EDGE)
    }

    #[must_use]
    pub fn lightbox_cache_size(&self) -> usize {
        self.lightbox_cache_size
            .unwrap_or(DEFAULT_LIGHTBOX_CACHE_SIZE)
            .clamp(1, MAX_LIGHTBOX_CACHE_SIZE)
    }
}

/// View transition timing, in milliseconds.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AnimationConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration_ms: Option<u64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stagger_ms: Option<u64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub settle_buffer_ms: Option<u64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub caption_offset_ms: Option<u64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub caption_fade_ms: Option<u64>,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            duration_ms: Some(DEFAULT_TRANSITION_DURATION_MS),
            stagger_ms: Some(DEFAULT_STAGGER_MS),
            settle_buffer_ms: Some(DEFAULT_SETTLE_BUFFER_MS),
            caption_offset_ms: Some(DEFAULT_CAPTION_OFFSET_MS),
            caption_fade_ms: Some(DEFAULT_CAPTION_FADE_MS),
        }
    }
}

impl AnimationConfig {
    /// Builds the transition timing. Each value is capped at
    /// [`MAX_ANIMATION_MS`] and the caption fade is shortened so it never
    /// outlasts the transform transition.
    #[must_use]
    pub fn timing(&self) -> TransitionTiming {
        let ms = |value: Option<u64>, default: u64| value.unwrap_or(default).min(MAX_ANIMATION_MS);

        let duration = ms(self.duration_ms, DEFAULT_TRANSITION_DURATION_MS);
        let caption_offset = ms(self.caption_offset_ms, DEFAULT_CAPTION_OFFSET_MS).min(duration);
        let caption_fade =
            ms(self.caption_fade_ms, DEFAULT_CAPTION_FADE_MS).min(duration - caption_offset);
        let (x1, y1, x2, y2) = TRANSITION_EASING;

        TransitionTiming {
            duration: Duration::from_millis(duration),
            stagger: Duration::from_millis(ms(self.stagger_ms, DEFAULT_STAGGER_MS)),
            settle_buffer: Duration::from_millis(ms(
                self.settle_buffer_ms,
                DEFAULT_SETTLE_BUFFER_MS,
            )),
            caption_offset: Duration::from_millis(caption_offset),
            caption_fade: Duration::from_millis(caption_fade),
            easing: CubicBezier::new(x1, y1, x2, y2),
        }
    }
}

// =============================================================================
// Main Config Struct (Sectioned)
// =============================================================================

/// Application configuration with logical sections.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    /// General application settings.
    #[serde(default)]
    pub general: GeneralConfig,

    /// Gallery content and layout settings.
    #[serde(default)]
    pub gallery: GalleryConfig,

    /// View transition timing.
    #[serde(default)]
    pub animation: AnimationConfig,
}

// =============================================================================
// Default Value Functions
// =============================================================================

fn default_theme_mode() -> ThemeMode {
    ThemeMode::System
}

fn deserialize_theme_mode<'de, D>(deserializer: D) -> std::result::Result<ThemeMode, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::de::Error;

    let raw = String::deserialize(deserializer)?;
    match raw.to_lowercase().as_str() {
        "light" => Ok(ThemeMode::Light),
        "dark" => Ok(ThemeMode::Dark),
        "system" => Ok(ThemeMode::System),
        other => Err(D::Error::custom(format!("invalid theme_mode: {}", other))),
    }
}

// =============================================================================
// Config Path Resolution
// =============================================================================

/// Returns the config file path with an optional override.
fn get_config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::get_app_config_dir_with_override(base_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

// =============================================================================
// Load Functions
// =============================================================================

/// Loads the configuration from the default path.
///
/// Returns a tuple of (config, optional_warning). If loading fails, returns
/// default config with a warning message key explaining what went wrong.
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    if let Some(path) = get_config_path_with_override(base_dir) {
        if path.exists() {
            match load_from_path(&path) {
                Ok(config) => return (config, None),
                Err(error) => {
                    tracing::warn!(path = %path.display(), %error, "falling back to default config");
                    return (
                        Config::default(),
                        Some("notification-config-load-error".to_string()),
                    );
                }
            }
        }
    }
    (Config::default(), None)
}

/// Loads configuration from a specific path.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    Ok(config)
}

// =============================================================================
// Save Functions
// =============================================================================

/// Saves the configuration to the default path.
pub fn save(config: &Config) -> Result<()> {
    save_with_override(config, None)
}

/// Saves the configuration to a custom directory.
pub fn save_with_override(config: &Config, base_dir: Option<PathBuf>) -> Result<()> {
    if let Some(path) = get_config_path_with_override(base_dir) {
        return save_to_path(config, &path);
    }
    Ok(())
}

/// Saves configuration to a specific path.
pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config).map_err(Error::from)?;
    fs::write(path, content)?;
    Ok(())
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use tempfile::tempdir;

    #[test]
    fn save_and_load_round_trip_preserves_settings() {
        let config = Config {
            general: GeneralConfig {
                language: Some("fr".to_string()),
                theme_mode: ThemeMode::Light,
            },
            gallery: GalleryConfig {
                directory: Some(PathBuf::from("/srv/photos")),
                sort_order: Some(SortOrder::ModifiedDate),
                grid_cell_size: Some(160.0),
                ..GalleryConfig::default()
            },
            animation: AnimationConfig {
                duration_ms: Some(300),
                ..AnimationConfig::default()
            },
        };
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("nested").join("settings.toml");

        save_to_path(&config, &config_path).expect("failed to save config");
        let loaded = load_from_path(&config_path).expect("failed to load config");

        assert_eq!(loaded, config);
    }

    #[test]
    fn load_from_path_invalid_toml_errors() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "[gallery\ngrid_gap = 3").expect("write");

        match load_from_path(&config_path) {
            Err(Error::Config(_)) => {}
            other => panic!("expected config error, got {:?}", other),
        }
    }

    #[test]
    fn load_with_override_falls_back_with_warning() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        fs::write(temp_dir.path().join(CONFIG_FILE), "general = 3").expect("write");

        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));

        assert_eq!(config, Config::default());
        assert_eq!(warning.as_deref(), Some("notification-config-load-error"));
    }

    #[test]
    fn missing_file_yields_defaults_without_warning() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));
        assert_eq!(config, Config::default());
        assert!(warning.is_none());
    }

    #[test]
    fn partial_sections_use_defaults() {
        let config: Config = toml::from_str("[animation]\nstagger_ms = 45\n").expect("parse");
        assert_eq!(config.animation.stagger_ms, Some(45));
        assert_eq!(config.animation.duration_ms, None);
        assert_eq!(config.gallery, GalleryConfig::default());
        assert_eq!(
            config.animation.timing().duration,
            Duration::from_millis(DEFAULT_TRANSITION_DURATION_MS)
        );
    }

    #[test]
    fn theme_mode_parsing_is_case_insensitive() {
        let config: Config = toml::from_str("[general]\ntheme_mode = \"LIGHT\"\n").expect("parse");
        assert_eq!(config.general.theme_mode, ThemeMode::Light);
    }

    #[test]
    fn layout_metrics_are_clamped() {
        let gallery = GalleryConfig {
            grid_cell_size: Some(4.0),
            list_row_height: Some(10_000.0),
            grid_gap: Some(-3.0),
            ..GalleryConfig::default()
        };
        let metrics = gallery.layout_metrics();
        assert_eq!(metrics.grid_cell_size, MIN_GRID_CELL_SIZE);
        assert_eq!(metrics.list_row_height, MAX_LIST_ROW_HEIGHT);
        assert_eq!(metrics.grid_gap, 0.0);
    }

    #[test]
    fn default_timing_matches_defaults() {
        let timing = AnimationConfig::default().timing();
        assert_eq!(timing.duration, Duration::from_millis(500));
        assert_eq!(timing.stagger, Duration::from_millis(30));
        assert_eq!(timing.settle_buffer, Duration::from_millis(100));
    }

    #[test]
    fn caption_fade_never_outlasts_transition() {
        let animation = AnimationConfig {
            duration_ms: Some(200),
            caption_offset_ms: Some(150),
            caption_fade_ms: Some(300),
            ..AnimationConfig::default()
        };
        let timing = animation.timing();
        assert!(timing.caption_offset + timing.caption_fade <= timing.duration);
    }
}
