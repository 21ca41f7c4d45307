use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};

use crate::asset::{AssetFormat, AssetKey};
use crate::overrides::ColorOverrideTable;

static NEXT_THEME_ID: AtomicU64 = AtomicU64::new(1);

/// Process-unique identity of a [Theme] value.
///
/// Reloading a theme from disk produces a new id even when name and
/// directory are unchanged, so anything memoized against the old value is
/// recognisably stale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ThemeId(u64);

impl ThemeId {
    fn next() -> Self {
        Self(NEXT_THEME_ID.fetch_add(1, Ordering::Relaxed))
    }
}

/// A named directory of visual assets with optional color overrides.
#[derive(Debug, Clone)]
pub struct Theme {
    id: ThemeId,
    name: String,
    root: PathBuf,
    colors: ColorOverrideTable,
}

impl Theme {
    /// Build a theme from its directory, reading `theme.conf` if present.
    pub fn load(name: impl Into<String>, root: impl Into<PathBuf>) -> Self {
        let root = root.into();
        let colors = ColorOverrideTable::load(&root);
        Self::with_colors(name, root, colors)
    }

    /// Build a theme with an explicit color table.
    pub fn with_colors(
        name: impl Into<String>,
        root: impl Into<PathBuf>,
        colors: ColorOverrideTable,
    ) -> Self {
        Self {
            id: ThemeId::next(),
            name: name.into(),
            root: root.into(),
            colors,
        }
    }

    /// Identity of this value.
    pub fn id(&self) -> ThemeId {
        self.id
    }

    /// The theme's name (its directory name).
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The theme's directory.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Parsed color overrides.
    pub fn colors(&self) -> &ColorOverrideTable {
        &self.colors
    }

    /// Conventional path of `key` in `format`. The file may not exist.
    pub fn asset_path(&self, key: AssetKey, format: AssetFormat) -> PathBuf {
        self.root.join(key.file_name(format))
    }
}

impl PartialEq for Theme {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Theme {}
