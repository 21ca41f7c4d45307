//! # Skin Configuration
//!
//! Where themes live, which one to start with and how controls react to the
//! pointer. A [SkinConfig] can come from environment variables, a TOML file
//! or builder calls.
//!
//! ## Environment Variables
//!
//! - `JUKEBOX_THEMES_DIR`: directory holding one subdirectory per theme
//! - `JUKEBOX_THEME`: theme used when no preference has been persisted
//! - `JUKEBOX_SKIN_CONFIG`: path to a TOML configuration file
//!
//! ## Configuration File Format
//!
//! ```toml
//! [skin]
//! themes_dir = "./themes"
//! default_theme = "dark"
//! hover_factor = 1.3
//! text_cache_capacity = 100
//! ```
//!
//! Every key is optional.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::cache::DEFAULT_TEXT_CAPACITY;
use crate::compositor::HOVER_BRIGHTNESS;
use crate::error::{ThemeError, ThemeResult};

/// Environment variable naming the themes directory.
pub const THEMES_DIR_ENV: &str = "JUKEBOX_THEMES_DIR";
/// Environment variable naming the default theme.
pub const THEME_ENV: &str = "JUKEBOX_THEME";
/// Environment variable pointing at a TOML configuration file.
pub const CONFIG_ENV: &str = "JUKEBOX_SKIN_CONFIG";

/// Configuration for a [Skin](crate::skin::Skin).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SkinConfig {
    /// Directory scanned for themes.
    pub themes_dir: PathBuf,
    /// Theme activated when no preference has been persisted.
    pub default_theme: Option<String>,
    /// Brightness factor applied to hovered images.
    pub hover_factor: f32,
    /// Capacity of the rasterized text cache.
    pub text_cache_capacity: usize,
}

#[derive(Debug, Default, Deserialize)]
struct SkinFile {
    #[serde(default)]
    skin: SkinConfig,
}

impl SkinConfig {
    /// Create a configuration with default settings.
    pub fn new() -> Self {
        Self {
            themes_dir: PathBuf::from("themes"),
            default_theme: Some("dark".to_string()),
            hover_factor: HOVER_BRIGHTNESS,
            text_cache_capacity: DEFAULT_TEXT_CAPACITY,
        }
    }

    /// Create a configuration from environment variables or use defaults.
    ///
    /// `JUKEBOX_SKIN_CONFIG` is applied first; the more specific variables
    /// override what the file says. An unreadable file is logged and ignored.
    pub fn from_env_or_default() -> Self {
        let mut config = Self::new();

        if let Ok(config_path) = env::var(CONFIG_ENV) {
            match Self::from_file(&config_path) {
                Ok(file_config) => config = file_config,
                Err(e) => log::warn!("Ignoring skin configuration: {}", e),
            }
        }

        if let Ok(dir) = env::var(THEMES_DIR_ENV) {
            config.themes_dir = PathBuf::from(dir);
        }

        if let Ok(theme) = env::var(THEME_ENV) {
            if !theme.trim().is_empty() {
                config.default_theme = Some(theme.trim().to_string());
            }
        }

        config
    }

    /// Load a configuration from a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> ThemeResult<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => ThemeError::file_not_found(path),
            _ => ThemeError::Io(e),
        })?;
        Self::from_toml(&content).map_err(|e| match e {
            ThemeError::ThemeParseError { details, .. } => ThemeError::parse_error(path, details),
            other => other,
        })
    }

    /// Load a configuration from TOML content.
    pub fn from_toml(content: &str) -> ThemeResult<Self> {
        let file: SkinFile =
            toml::from_str(content).map_err(|e| ThemeError::parse_error("<toml>", e.to_string()))?;
        Ok(file.skin)
    }

    /// Set the themes directory.
    pub fn with_themes_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.themes_dir = dir.into();
        self
    }

    /// Set the default theme.
    pub fn with_default_theme(mut self, name: impl Into<String>) -> Self {
        self.default_theme = Some(name.into());
        self
    }

    /// Set the hover brightness factor.
    pub fn with_hover_factor(mut self, factor: f32) -> Self {
        self.hover_factor = factor;
        self
    }

    /// Set the text cache capacity.
    pub fn with_text_cache_capacity(mut self, capacity: usize) -> Self {
        self.text_cache_capacity = capacity;
        self
    }
}

impl Default for SkinConfig {
    fn default() -> Self {
        Self::new()
    }
}
