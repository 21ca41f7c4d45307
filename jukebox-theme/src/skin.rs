//! # Skin
//!
//! The object the UI shell builds once and hands to every draw call. It owns
//! the [ThemeCatalog], the [AssetResolver] and the [RenderCache] and keeps
//! them consistent: switching themes, reloading and resizing the window all
//! invalidate what they must.
//!
//! ```rust,no_run
//! use jukebox_services::JsonSettings;
//! use jukebox_theme::asset::{AssetKey, IconKind, VisualState};
//! use jukebox_theme::config::SkinConfig;
//! use jukebox_theme::skin::Skin;
//!
//! let mut skin = Skin::from_config(&SkinConfig::from_env_or_default(), JsonSettings::open_default());
//! skin.set_viewport(1000, 700);
//!
//! let background = skin.background();
//! let play = skin.skinned_surface(AssetKey::Icon(IconKind::Play, VisualState::Hover), (50, 50));
//! ```

use std::sync::Arc;

use image::RgbaImage;
use jukebox_services::SettingsStore;

use crate::asset::{AssetKey, VisualState};
use crate::cache::{RenderCache, Surface, SurfaceContent};
use crate::catalog::ThemeCatalog;
use crate::color::Rgb;
use crate::compositor::{brighten, HOVER_BRIGHTNESS};
use crate::config::SkinConfig;
use crate::error::{ThemeError, ThemeResult};
use crate::overrides::{ColorOverrideTable, GeneralColor};
use crate::resolver::{AssetResolver, ResolvedAsset};
use crate::theme::Theme;

/// Identifies a font (family and size) chosen by the shell.
pub type FontId = u32;

/// Turns text into pixels. Supplied by the UI shell.
pub trait TextRasterizer {
    /// Render `text` in `font` and `color` onto a transparent image sized
    /// to fit the text.
    fn rasterize(&self, text: &str, font: FontId, color: Rgb) -> RgbaImage;
}

/// Themes, asset resolution and render caching behind one handle.
pub struct Skin {
    catalog: ThemeCatalog,
    resolver: AssetResolver,
    cache: RenderCache,
    viewport: (u32, u32),
    hover_factor: f32,
    text: Option<Box<dyn TextRasterizer>>,
    defaults: ColorOverrideTable,
}

impl Skin {
    /// Wrap an already discovered catalog.
    pub fn new(catalog: ThemeCatalog) -> Self {
        let mut skin = Self {
            catalog,
            resolver: AssetResolver::new(),
            cache: RenderCache::new(),
            viewport: (1000, 700),
            hover_factor: HOVER_BRIGHTNESS,
            text: None,
            defaults: ColorOverrideTable::new(),
        };
        skin.sync();
        skin
    }

    /// Discover themes from `config` and restore the startup selection.
    ///
    /// An empty or missing themes directory yields a theme-less skin; every
    /// draw then uses the built-in colors.
    pub fn from_config(config: &SkinConfig, settings: impl SettingsStore + 'static) -> Self {
        let mut catalog = ThemeCatalog::new(settings);
        catalog.discover(&config.themes_dir);
        catalog.activate_preferred(config.default_theme.as_deref());

        let mut skin = Self::new(catalog);
        skin.cache = RenderCache::with_text_capacity(config.text_cache_capacity);
        skin.hover_factor = config.hover_factor;
        skin.sync();
        skin
    }

    /// Replace the asset resolver (e.g. one without SVG support).
    pub fn with_resolver(mut self, resolver: AssetResolver) -> Self {
        self.resolver = resolver;
        self
    }

    /// Install the text rasterizer used by [Self::text_surface].
    pub fn with_text_rasterizer(mut self, rasterizer: impl TextRasterizer + 'static) -> Self {
        self.text = Some(Box::new(rasterizer));
        self
    }

    /// Set the hover brightness factor.
    pub fn with_hover_factor(mut self, factor: f32) -> Self {
        self.hover_factor = factor;
        self
    }

    /// The theme catalog.
    pub fn catalog(&self) -> &ThemeCatalog {
        &self.catalog
    }

    /// The active theme, `None` in theme-less mode.
    pub fn theme(&self) -> Option<&Theme> {
        self.catalog.current()
    }

    /// The render cache, for diagnostics.
    pub fn cache(&self) -> &RenderCache {
        &self.cache
    }

    /// Current theme generation.
    pub fn generation(&self) -> u64 {
        self.catalog.generation()
    }

    /// Brightness factor applied to hovered images.
    pub fn hover_factor(&self) -> f32 {
        self.hover_factor
    }

    /// Switch to theme `name`. Returns `false` and changes nothing when the
    /// theme does not exist.
    pub fn activate(&mut self, name: &str) -> bool {
        if !self.catalog.activate(name) {
            return false;
        }
        self.sync();
        true
    }

    /// Like [Self::activate] but reports an unknown theme as an error.
    pub fn try_activate(&mut self, name: &str) -> ThemeResult<()> {
        if self.activate(name) {
            Ok(())
        } else {
            Err(ThemeError::not_found(name))
        }
    }

    /// Re-read every theme from disk.
    pub fn reload(&mut self) -> bool {
        let reloaded = self.catalog.reload();
        self.sync();
        reloaded
    }

    /// Window size in pixels.
    pub fn viewport(&self) -> (u32, u32) {
        self.viewport
    }

    /// Update the window size. A change drops every cached surface.
    pub fn set_viewport(&mut self, width: u32, height: u32) {
        let viewport = (width.max(1), height.max(1));
        if viewport == self.viewport {
            return;
        }
        log::debug!("Viewport {:?} -> {:?}", self.viewport, viewport);
        self.viewport = viewport;
        self.cache.invalidate_all();
    }

    /// Colors of the active theme, built-in defaults when theme-less.
    pub fn colors(&self) -> &ColorOverrideTable {
        self.catalog
            .current()
            .map(Theme::colors)
            .unwrap_or(&self.defaults)
    }

    /// The window background at the viewport size.
    ///
    /// SVG backgrounds are rasterized at the viewport size, raster ones are
    /// scaled. Without a background image this is a solid fill of the theme's
    /// background color.
    pub fn background(&mut self) -> Surface {
        let key = self.cache.key(SurfaceContent::Background, self.viewport);
        if let Some(surface) = self.cache.get(&key) {
            return surface;
        }

        let viewport = self.viewport;
        let fill = self.colors().general(GeneralColor::Background);
        let asset = self.resolver.lookup(self.catalog.current(), AssetKey::Background);
        let resolver = &self.resolver;
        self.cache.get_or_render(key, || match asset {
            Some(asset) => resolver.render(&asset, viewport),
            None => RgbaImage::from_pixel(viewport.0, viewport.1, fill.to_rgba()),
        })
    }

    /// The image for exactly `key` at `size`, brightened when `hovered`.
    ///
    /// The sized image is cached; brightening is applied on every call.
    pub fn asset_surface(&mut self, key: AssetKey, size: (u32, u32), hovered: bool) -> Option<Surface> {
        let asset = self.resolver.lookup(self.catalog.current(), key)?;
        let scaled = self.scaled(key, asset, size);
        Some(self.highlight(scaled, hovered))
    }

    /// The image for a stateful `key`, scaled to `size`.
    ///
    /// When the theme lacks the requested state's image the normal one stands
    /// in; a stand-in for [VisualState::Hover] is brightened, a stand-in for
    /// [VisualState::Pressed] is drawn as is.
    pub fn skinned_surface(&mut self, key: AssetKey, size: (u32, u32)) -> Option<Surface> {
        let resolved = self.resolver.resolve_state(self.catalog.current(), key)?;
        let drawn = if resolved.substituted {
            key.with_state(VisualState::Normal)
        } else {
            key
        };
        let hovered = resolved.substituted && key.state() == Some(VisualState::Hover);
        let scaled = self.scaled(drawn, resolved, size);
        Some(self.highlight(scaled, hovered))
    }

    /// Rasterized `text`, served from the bounded text cache.
    ///
    /// Returns `None` when no text rasterizer is installed.
    pub fn text_surface(&mut self, text: &str, font: FontId, color: Rgb) -> Option<Surface> {
        let rasterizer = self.text.as_ref()?;
        let key = self.cache.key(
            SurfaceContent::Text {
                text: text.to_string(),
                font,
                color,
            },
            (0, 0),
        );
        Some(
            self.cache
                .get_or_render(key, || rasterizer.rasterize(text, font, color)),
        )
    }

    fn scaled(&mut self, key: AssetKey, asset: ResolvedAsset, size: (u32, u32)) -> Surface {
        if asset.surface.dimensions() == size {
            return asset.surface;
        }
        let cache_key = self.cache.key(SurfaceContent::Asset(key), size);
        let resolver = &self.resolver;
        self.cache.get_or_render(cache_key, || resolver.render(&asset, size))
    }

    fn highlight(&self, surface: Surface, hovered: bool) -> Surface {
        if hovered {
            Arc::new(brighten(&surface, self.hover_factor))
        } else {
            surface
        }
    }

    fn sync(&mut self) {
        self.cache.set_generation(self.catalog.generation());
        self.resolver.clear();
    }
}

impl std::fmt::Debug for Skin {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Skin")
            .field("catalog", &self.catalog)
            .field("resolver", &self.resolver)
            .field("cache", &self.cache)
            .field("viewport", &self.viewport)
            .field("hover_factor", &self.hover_factor)
            .field("text", &self.text.is_some())
            .finish()
    }
}
