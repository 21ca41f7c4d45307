//! # Render Cache
//!
//! Memoizes expensive render output: rasterized text, the scaled window
//! background and scaled theme images. Every key carries the exact pixel
//! size and the theme generation it was rendered for, so nothing rendered
//! for an earlier theme or an earlier window size is ever served.
//!
//! Text surfaces live in a bounded LRU. Image surfaces are unbounded since
//! only one theme's images are resident at a time; they are dropped
//! wholesale when the generation moves on or the viewport changes.

use std::collections::HashMap;
use std::num::NonZeroUsize;
use std::sync::Arc;

use image::RgbaImage;
use lru::LruCache;

use crate::asset::AssetKey;
use crate::color::Rgb;

/// A decoded, ready-to-blit image. Cloning shares the pixels.
pub type Surface = Arc<RgbaImage>;

/// Default capacity of the text-surface LRU.
pub const DEFAULT_TEXT_CAPACITY: usize = 100;

/// What a cached surface depicts.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum SurfaceContent {
    /// The window background.
    Background,
    /// A theme asset scaled to the key's size.
    Asset(AssetKey),
    /// A rasterized text run.
    Text {
        /// The text itself.
        text: String,
        /// Caller-chosen font identity (family + size).
        font: u32,
        /// Text color.
        color: Rgb,
    },
}

impl SurfaceContent {
    fn is_text(&self) -> bool {
        matches!(self, SurfaceContent::Text { .. })
    }
}

/// Full cache key: content, exact pixel size and theme generation.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SurfaceKey {
    /// What is depicted.
    pub content: SurfaceContent,
    /// Exact target size in pixels.
    pub size: (u32, u32),
    /// Theme generation the surface belongs to.
    pub generation: u64,
}

/// Hit/miss counters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CacheStats {
    /// Lookups served from the cache.
    pub hits: u64,
    /// Lookups that had to render.
    pub misses: u64,
    /// Renders for a generation other than the current one (never stored).
    pub stale: u64,
}

/// Generation-tagged surface cache.
pub struct RenderCache {
    generation: u64,
    images: HashMap<SurfaceKey, Surface>,
    text: LruCache<SurfaceKey, Surface>,
    stats: CacheStats,
}

impl RenderCache {
    /// Create a cache with the default text capacity.
    pub fn new() -> Self {
        Self::with_text_capacity(DEFAULT_TEXT_CAPACITY)
    }

    /// Create a cache holding at most `capacity` text surfaces (minimum 1).
    pub fn with_text_capacity(capacity: usize) -> Self {
        let capacity = NonZeroUsize::new(capacity).unwrap_or(NonZeroUsize::MIN);
        Self {
            generation: 0,
            images: HashMap::new(),
            text: LruCache::new(capacity),
            stats: CacheStats::default(),
        }
    }

    /// The generation entries are currently accepted for.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Move to `generation`, evicting every entry tagged otherwise.
    pub fn set_generation(&mut self, generation: u64) {
        if generation == self.generation {
            return;
        }
        log::debug!(
            "Render cache generation {} -> {}",
            self.generation,
            generation
        );
        self.generation = generation;
        self.invalidate(|key| key.generation != generation);
    }

    /// Build a key for `content` at `size` stamped with the current generation.
    pub fn key(&self, content: SurfaceContent, size: (u32, u32)) -> SurfaceKey {
        SurfaceKey {
            content,
            size,
            generation: self.generation,
        }
    }

    /// Return the cached surface for `key`, rendering and storing it on a miss.
    ///
    /// A key from another generation is rendered but not stored.
    pub fn get_or_render<F>(&mut self, key: SurfaceKey, render: F) -> Surface
    where
        F: FnOnce() -> RgbaImage,
    {
        if let Some(surface) = self.get(&key) {
            return surface;
        }

        let surface: Surface = Arc::new(render());
        if key.generation == self.generation {
            self.stats.misses += 1;
            self.store(key, surface.clone());
        } else {
            self.stats.stale += 1;
        }
        surface
    }

    /// Look `key` up without rendering.
    pub fn get(&mut self, key: &SurfaceKey) -> Option<Surface> {
        if key.generation != self.generation {
            return None;
        }

        let hit = if key.content.is_text() {
            self.text.get(key).cloned()
        } else {
            self.images.get(key).cloned()
        };
        if hit.is_some() {
            self.stats.hits += 1;
        }
        hit
    }

    /// Store a surface rendered elsewhere.
    ///
    /// Returns `false` (and drops the surface) when the key's generation is
    /// not the current one.
    pub fn insert(&mut self, key: SurfaceKey, surface: Surface) -> bool {
        if key.generation != self.generation {
            self.stats.stale += 1;
            return false;
        }
        self.store(key, surface);
        true
    }

    /// Drop every entry.
    pub fn invalidate_all(&mut self) {
        self.images.clear();
        self.text.clear();
    }

    /// Drop every entry whose key matches `predicate`.
    pub fn invalidate<P>(&mut self, mut predicate: P)
    where
        P: FnMut(&SurfaceKey) -> bool,
    {
        self.images.retain(|key, _| !predicate(key));

        let doomed: Vec<SurfaceKey> = self
            .text
            .iter()
            .filter(|(key, _)| predicate(key))
            .map(|(key, _)| key.clone())
            .collect();
        for key in doomed {
            self.text.pop(&key);
        }
    }

    /// Number of cached surfaces.
    pub fn len(&self) -> usize {
        self.images.len() + self.text.len()
    }

    /// Whether the cache holds nothing.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Hit/miss counters since construction.
    pub fn stats(&self) -> CacheStats {
        self.stats
    }

    fn store(&mut self, key: SurfaceKey, surface: Surface) {
        if key.content.is_text() {
            self.text.put(key, surface);
        } else {
            self.images.insert(key, surface);
        }
    }
}

impl Default for RenderCache {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for RenderCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RenderCache")
            .field("generation", &self.generation)
            .field("images", &self.images.len())
            .field("text", &self.text.len())
            .field("stats", &self.stats)
            .finish()
    }
}
