use std::fs;
use std::path::{Path, PathBuf};

use indexmap::IndexMap;
use jukebox_services::SettingsStore;

use crate::theme::Theme;

/// Settings key the active theme name is persisted under.
pub const THEME_SETTING_KEY: &str = "theme";

/// The set of discovered themes and the active selection.
///
/// Every immediate subdirectory of the themes root is a theme; nothing is
/// required inside it. Themes are kept in lexicographic directory order,
/// which is also the order [Self::list] reports.
///
/// Each successful [Self::activate], [Self::discover] or [Self::reload]
/// bumps the theme generation so render caches keyed on it go stale.
pub struct ThemeCatalog {
    root: Option<PathBuf>,
    themes: IndexMap<String, Theme>,
    current: Option<String>,
    generation: u64,
    settings: Box<dyn SettingsStore>,
}

impl ThemeCatalog {
    /// Create an empty catalog persisting its selection to `settings`.
    pub fn new(settings: impl SettingsStore + 'static) -> Self {
        Self::with_settings(Box::new(settings))
    }

    /// Create an empty catalog from a boxed settings store.
    pub fn with_settings(settings: Box<dyn SettingsStore>) -> Self {
        Self {
            root: None,
            themes: IndexMap::new(),
            current: None,
            generation: 0,
            settings,
        }
    }

    /// Scan `root` for themes, replacing whatever was known before.
    ///
    /// Returns the discovered names in catalog order. A missing or unreadable
    /// root yields an empty catalog (theme-less mode). The active theme stays
    /// selected if a directory with its name still exists.
    pub fn discover(&mut self, root: impl AsRef<Path>) -> Vec<String> {
        let root = root.as_ref().to_path_buf();
        let mut dirs = Vec::new();

        match fs::read_dir(&root) {
            Ok(entries) => {
                for entry in entries.flatten() {
                    let path = entry.path();
                    if !path.is_dir() {
                        continue;
                    }
                    match entry.file_name().into_string() {
                        Ok(name) => dirs.push((name, path)),
                        Err(name) => log::warn!("Skipping theme with non UTF-8 name: {:?}", name),
                    }
                }
            },
            Err(e) => log::warn!("Themes directory {:?} not readable: {}", root, e),
        }

        dirs.sort_by(|a, b| a.0.cmp(&b.0));

        self.themes = dirs
            .into_iter()
            .map(|(name, path)| {
                log::info!("Found theme: {}", name);
                let theme = Theme::load(name.clone(), path);
                (name, theme)
            })
            .collect();
        self.root = Some(root);

        if let Some(current) = &self.current {
            if !self.themes.contains_key(current) {
                log::warn!("Active theme '{}' disappeared; no theme selected", current);
                self.current = None;
            }
        }
        self.generation += 1;

        self.themes.keys().cloned().collect()
    }

    /// Re-read every theme from disk (new [Theme] values, fresh `theme.conf`).
    ///
    /// Returns `false` when the catalog was never pointed at a root.
    pub fn reload(&mut self) -> bool {
        match self.root.clone() {
            Some(root) => {
                self.discover(root);
                true
            },
            None => false,
        }
    }

    /// Register a theme directly, replacing one with the same name.
    pub fn insert(&mut self, theme: Theme) {
        let replaces_current = self.current.as_deref() == Some(theme.name());
        self.themes.insert(theme.name().to_string(), theme);
        self.themes.sort_keys();
        if replaces_current {
            self.generation += 1;
        }
    }

    /// Make `name` the active theme and persist the choice.
    ///
    /// Returns `false`, leaving the current theme unchanged, if `name` is not
    /// in the catalog. Callers must handle that case.
    pub fn activate(&mut self, name: &str) -> bool {
        if !self.select(name) {
            return false;
        }
        self.settings.set(THEME_SETTING_KEY, name);
        true
    }

    /// Restore the startup selection without persisting it.
    ///
    /// Tries the persisted name, then `default`, then the first theme in
    /// catalog order. Returns `false` when the catalog is empty.
    pub fn activate_preferred(&mut self, default: Option<&str>) -> bool {
        let mut candidates: Vec<String> = Vec::new();
        candidates.extend(self.preferred());
        candidates.extend(default.map(str::to_string));
        candidates.extend(self.themes.keys().next().cloned());

        for candidate in candidates {
            if self.themes.contains_key(&candidate) {
                return self.select(&candidate);
            }
            log::info!("Preferred theme '{}' not available", candidate);
        }

        log::warn!("No themes available; running unthemed");
        false
    }

    /// The active theme, `None` in theme-less mode.
    pub fn current(&self) -> Option<&Theme> {
        self.current
            .as_ref()
            .and_then(|name| self.themes.get(name))
    }

    /// Name of the active theme.
    pub fn current_name(&self) -> Option<&str> {
        self.current.as_deref()
    }

    /// Look a theme up by name.
    pub fn get(&self, name: &str) -> Option<&Theme> {
        self.themes.get(name)
    }

    /// Theme names in catalog order.
    pub fn list(&self) -> Vec<&str> {
        self.themes.keys().map(String::as_str).collect()
    }

    /// Number of known themes.
    pub fn len(&self) -> usize {
        self.themes.len()
    }

    /// Whether no theme is known.
    pub fn is_empty(&self) -> bool {
        self.themes.is_empty()
    }

    /// Current theme generation.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// The persisted theme name, if any.
    pub fn preferred(&self) -> Option<String> {
        self.settings.get(THEME_SETTING_KEY)
    }

    /// Directory the catalog was last discovered from.
    pub fn root(&self) -> Option<&Path> {
        self.root.as_deref()
    }

    fn select(&mut self, name: &str) -> bool {
        if !self.themes.contains_key(name) {
            log::warn!("Theme not found: {}", name);
            return false;
        }
        self.current = Some(name.to_string());
        self.generation += 1;
        log::info!("Theme changed to: {}", name);
        true
    }
}

impl std::fmt::Debug for ThemeCatalog {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ThemeCatalog")
            .field("root", &self.root)
            .field("themes", &self.list())
            .field("current", &self.current)
            .field("generation", &self.generation)
            .finish()
    }
}
