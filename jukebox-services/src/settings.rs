// SPDX-License-Identifier: LGPL-3.0-only
use anyhow::{Context, Result};
use serde_json::{Map, Value};
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

/// A flat string key-value store the skin reads its preferred theme from
/// and writes the active theme name to.
///
/// Implementations own their file format and location. Failures are their
/// own business: `set` never reports an error back to the caller.
pub trait SettingsStore {
    /// Read the value stored under `key`, if any.
    fn get(&self, key: &str) -> Option<String>;

    /// Store `value` under `key`, persisting it if the store is durable.
    fn set(&mut self, key: &str, value: &str);
}

/// Settings kept only in memory.
#[derive(Debug, Clone, Default)]
pub struct MemorySettings {
    values: HashMap<String, String>,
    writes: usize,
}

impl MemorySettings {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store with a single preset entry.
    pub fn with_value(key: impl Into<String>, value: impl Into<String>) -> Self {
        let mut settings = Self::new();
        settings.values.insert(key.into(), value.into());
        settings
    }

    /// Number of `set` calls received so far.
    pub fn writes(&self) -> usize {
        self.writes
    }
}

impl SettingsStore for MemorySettings {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.values.insert(key.to_string(), value.to_string());
        self.writes += 1;
    }
}

/// Settings persisted as a flat JSON object.
///
/// The file is shared with the rest of the jukebox application, so keys this
/// crate does not know about are kept untouched and written back on save.
#[derive(Debug, Clone)]
pub struct JsonSettings {
    path: PathBuf,
    values: Map<String, Value>,
}

impl JsonSettings {
    /// File name used under the user's home directory.
    pub const FILE_NAME: &'static str = ".jukebox_config.json";

    /// Open the settings file in the user's home directory.
    ///
    /// Falls back to the working directory when no home directory is known.
    pub fn open_default() -> Self {
        let dir = dirs::home_dir().unwrap_or_else(|| PathBuf::from("."));
        Self::open(dir.join(Self::FILE_NAME))
    }

    /// Open (or prepare to create) the settings file at `path`.
    ///
    /// Values missing from the file keep their defaults. A missing or
    /// unreadable file leaves the defaults in place.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let mut settings = Self {
            path: path.into(),
            values: default_values(),
        };

        if settings.path.exists() {
            match settings.load() {
                Ok(()) => log::info!("Configuration loaded from: {:?}", settings.path),
                Err(e) => log::warn!("Error loading config {:?}: {:#}", settings.path, e),
            }
        }

        settings
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reset every value to its default and write the file.
    pub fn reset_to_defaults(&mut self) -> Result<()> {
        self.values = default_values();
        self.save()
    }

    /// Write all values to the backing file.
    pub fn save(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent)
                    .with_context(|| format!("Failed to create {:?}", parent))?;
            }
        }

        let content = serde_json::to_string_pretty(&Value::Object(self.values.clone()))?;
        fs::write(&self.path, content)
            .with_context(|| format!("Failed to write config file {:?}", self.path))?;
        log::debug!("Configuration saved to: {:?}", self.path);
        Ok(())
    }

    fn load(&mut self) -> Result<()> {
        let content = fs::read_to_string(&self.path)
            .with_context(|| format!("Failed to read config file {:?}", self.path))?;
        let loaded: Value = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse config file {:?}", self.path))?;

        match loaded {
            Value::Object(map) => {
                self.values.extend(map);
                Ok(())
            },
            other => Err(anyhow::anyhow!(
                "Expected a JSON object in {:?}, found {}",
                self.path,
                other
            )),
        }
    }
}

impl SettingsStore for JsonSettings {
    fn get(&self, key: &str) -> Option<String> {
        self.values
            .get(key)
            .and_then(Value::as_str)
            .map(str::to_string)
    }

    fn set(&mut self, key: &str, value: &str) {
        self.values
            .insert(key.to_string(), Value::String(value.to_string()));
        if let Err(e) = self.save() {
            log::error!("Error saving config: {:#}", e);
        }
    }
}

fn default_values() -> Map<String, Value> {
    let mut values = Map::new();
    values.insert("auto_play_next".into(), Value::Bool(true));
    values.insert("shuffle_enabled".into(), Value::Bool(false));
    values.insert("repeat_mode".into(), Value::String("off".into()));
    values.insert("volume".into(), serde_json::json!(0.7));
    values.insert("max_albums".into(), serde_json::json!(50));
    values.insert("show_album_art".into(), Value::Bool(true));
    values.insert("export_format".into(), Value::String("csv".into()));
    values.insert("theme".into(), Value::String("dark".into()));
    values.insert("music_dir".into(), Value::Null);
    values.insert("keyboard_shortcut_enabled".into(), Value::Bool(true));
    values
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_settings_round_trip() {
        let mut settings = MemorySettings::new();
        assert_eq!(settings.get("theme"), None);

        settings.set("theme", "light");
        assert_eq!(settings.get("theme").as_deref(), Some("light"));
        assert_eq!(settings.writes(), 1);
    }

    #[test]
    fn test_json_settings_defaults_without_file() {
        let dir = tempfile::tempdir().unwrap();
        let settings = JsonSettings::open(dir.path().join("missing.json"));

        assert_eq!(settings.get("theme").as_deref(), Some("dark"));
        assert_eq!(settings.get("repeat_mode").as_deref(), Some("off"));
        // Non-string values are not exposed through the string interface.
        assert_eq!(settings.get("volume"), None);
    }

    #[test]
    fn test_json_settings_malformed_file_keeps_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, "{ not json").unwrap();

        let settings = JsonSettings::open(&path);
        assert_eq!(settings.get("theme").as_deref(), Some("dark"));
    }
}
