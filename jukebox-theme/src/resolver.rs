//! # Asset Resolver
//!
//! Maps a theme and a logical [AssetKey] to a decoded image, walking the
//! fixed fallback chain:
//!
//! 1. `<stem>.png`, decoded.
//! 2. `<stem>.svg`, rasterized at the key's expected size (only when a
//!    rasterizer is installed). The document is kept so callers can
//!    re-rasterize it at the size they actually draw with.
//! 3. nothing; the caller draws a color or procedural fallback.
//!
//! Missing files are the normal "try the next step" case. Corrupt files are
//! logged and treated exactly like missing ones.

use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::Path;
use std::sync::Arc;

use image::{ImageFormat, RgbaImage};

use crate::asset::{AssetFormat, AssetKey, VisualState};
use crate::cache::Surface;
use crate::compositor::scale;
use crate::error::{ThemeError, ThemeResult};
use crate::svg::{default_rasterizer, SvgRasterizer};
use crate::theme::{Theme, ThemeId};

/// Outcome of a lookup.
#[derive(Debug, Clone)]
pub struct ResolvedAsset {
    /// The decoded image; SVG sources are rendered at the key's expected size.
    pub surface: Surface,
    /// The SVG document when the image came from one.
    pub svg: Option<Arc<[u8]>>,
    /// `true` when the normal-state image stands in for the requested state.
    pub substituted: bool,
}

/// Resolves theme assets and memoizes the results for the current theme.
pub struct AssetResolver {
    rasterizer: Option<Box<dyn SvgRasterizer>>,
    theme: Option<ThemeId>,
    store: HashMap<AssetKey, Option<ResolvedAsset>>,
}

impl AssetResolver {
    /// Create a resolver using the rasterizer compiled into this build.
    pub fn new() -> Self {
        Self {
            rasterizer: default_rasterizer(),
            theme: None,
            store: HashMap::new(),
        }
    }

    /// Create a resolver that never looks at SVG files.
    pub fn without_svg() -> Self {
        Self {
            rasterizer: None,
            ..Self::new()
        }
    }

    /// Create a resolver with a custom rasterizer.
    pub fn with_rasterizer(rasterizer: impl SvgRasterizer + 'static) -> Self {
        Self {
            rasterizer: Some(Box::new(rasterizer)),
            ..Self::new()
        }
    }

    /// Whether the SVG step of the chain is available.
    pub fn svg_enabled(&self) -> bool {
        self.rasterizer.is_some()
    }

    /// Resolve `key` for `theme`.
    ///
    /// Returns `None` in theme-less mode or when neither a usable PNG nor a
    /// usable SVG exists. Results are memoized until the theme changes or
    /// [Self::clear] is called.
    pub fn resolve(&mut self, theme: Option<&Theme>, key: AssetKey) -> Option<Surface> {
        self.lookup(theme, key).map(|asset| asset.surface)
    }

    /// Like [Self::resolve] but also hands out the SVG document, if any.
    pub fn lookup(&mut self, theme: Option<&Theme>, key: AssetKey) -> Option<ResolvedAsset> {
        let theme = theme?;

        if self.theme != Some(theme.id()) {
            if self.theme.is_some() {
                log::debug!("Asset store reset for theme '{}'", theme.name());
            }
            self.store.clear();
            self.theme = Some(theme.id());
        }

        if let Some(known) = self.store.get(&key) {
            return known.clone();
        }

        let asset = self.load(theme, key);
        self.store.insert(key, asset.clone());
        asset
    }

    /// Resolve a stateful key, falling back to its normal-state image.
    ///
    /// A theme that ships only `play_button.png` still skins the hovered and
    /// pressed play button; `substituted` tells the caller it may want to
    /// brighten the stand-in.
    pub fn resolve_state(&mut self, theme: Option<&Theme>, key: AssetKey) -> Option<ResolvedAsset> {
        if let Some(asset) = self.lookup(theme, key) {
            return Some(asset);
        }

        match key.state() {
            Some(state) if state != VisualState::Normal => self
                .lookup(theme, key.with_state(VisualState::Normal))
                .map(|asset| ResolvedAsset {
                    substituted: true,
                    ..asset
                }),
            _ => None,
        }
    }

    /// Render `asset` at exactly `size`.
    ///
    /// SVG sources are rasterized afresh at `size`; raster sources, and SVGs
    /// the rasterizer rejects, are resampled.
    pub fn render(&self, asset: &ResolvedAsset, size: (u32, u32)) -> RgbaImage {
        if let (Some(svg), Some(rasterizer)) = (&asset.svg, &self.rasterizer) {
            match rasterizer.rasterize(svg, size.0, size.1) {
                Ok(image) => return image,
                Err(e) => log::warn!("Re-rasterizing SVG at {:?} failed: {}", size, e),
            }
        }
        scale(&asset.surface, size)
    }

    /// Forget every memoized result.
    pub fn clear(&mut self) {
        self.store.clear();
        self.theme = None;
    }

    /// Number of memoized lookups (hits and misses).
    pub fn memoized(&self) -> usize {
        self.store.len()
    }

    fn load(&self, theme: &Theme, key: AssetKey) -> Option<ResolvedAsset> {
        for &format in key.format_preference() {
            let path = theme.asset_path(key, format);
            let result = match format {
                AssetFormat::Png => load_png(&path).map(|image| image.map(|image| (image, None))),
                AssetFormat::Svg => match &self.rasterizer {
                    Some(rasterizer) => load_svg_document(rasterizer.as_ref(), &path, key.expected_size())
                        .map(|loaded| loaded.map(|(image, svg)| (image, Some(svg)))),
                    None => continue,
                },
            };

            match result {
                Ok(Some((image, svg))) => {
                    log::debug!("Resolved {:?} for theme '{}' from {:?}", key, theme.name(), path);
                    return Some(ResolvedAsset {
                        surface: Arc::new(image),
                        svg,
                        substituted: false,
                    });
                },
                Ok(None) => {},
                Err(e) => log::warn!("Skipping theme asset: {}", e),
            }
        }
        None
    }
}

impl Default for AssetResolver {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for AssetResolver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AssetResolver")
            .field("svg", &self.svg_enabled())
            .field("theme", &self.theme)
            .field("memoized", &self.store.len())
            .finish()
    }
}

/// Read a file, mapping "not found" to `Ok(None)`.
fn read_optional(path: &Path) -> ThemeResult<Option<Vec<u8>>> {
    match fs::read(path) {
        Ok(bytes) => Ok(Some(bytes)),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
        Err(e) => Err(ThemeError::Io(e)),
    }
}

/// Decode a PNG asset. Missing files are `Ok(None)`.
pub fn load_png(path: &Path) -> ThemeResult<Option<RgbaImage>> {
    let Some(bytes) = read_optional(path)? else {
        return Ok(None);
    };
    let decoded = image::load_from_memory_with_format(&bytes, ImageFormat::Png)
        .map_err(|e| ThemeError::decode_error(path, e))?;
    Ok(Some(decoded.to_rgba8()))
}

/// Rasterize an SVG asset at `size`. Missing files are `Ok(None)`.
pub fn load_svg(
    rasterizer: &dyn SvgRasterizer,
    path: &Path,
    size: (u32, u32),
) -> ThemeResult<Option<RgbaImage>> {
    Ok(load_svg_document(rasterizer, path, size)?.map(|(image, _)| image))
}

/// Rasterize an SVG asset at `size`, keeping the document.
fn load_svg_document(
    rasterizer: &dyn SvgRasterizer,
    path: &Path,
    (width, height): (u32, u32),
) -> ThemeResult<Option<(RgbaImage, Arc<[u8]>)>> {
    let Some(bytes) = read_optional(path)? else {
        return Ok(None);
    };
    let image = rasterizer
        .rasterize(&bytes, width, height)
        .map_err(|e| ThemeError::svg_error(path, e.to_string()))?;
    Ok(Some((image, Arc::from(bytes))))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::asset::IconKind;
    use crate::overrides::ColorOverrideTable;
    use crate::svg::SvgError;
    use image::Rgba;
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;

    /// Fills the target with a fixed color and counts invocations.
    struct SolidRasterizer {
        calls: Rc<Cell<usize>>,
    }

    impl SvgRasterizer for SolidRasterizer {
        fn rasterize(&self, data: &[u8], width: u32, height: u32) -> Result<RgbaImage, SvgError> {
            self.calls.set(self.calls.get() + 1);
            if !data.starts_with(b"<svg") {
                return Err(SvgError::Parse("not svg".into()));
            }
            Ok(RgbaImage::from_pixel(width, height, Rgba([0, 0, 255, 255])))
        }
    }

    fn theme_in(dir: &Path) -> Theme {
        Theme::with_colors("test", dir, ColorOverrideTable::new())
    }

    fn write_png(path: &Path, color: [u8; 4]) {
        RgbaImage::from_pixel(4, 4, Rgba(color)).save(path).unwrap();
    }

    #[test]
    fn test_png_wins_over_svg() {
        let dir = tempfile::tempdir().unwrap();
        write_png(&dir.path().join("background.png"), [255, 0, 0, 255]);
        fs::write(dir.path().join("background.svg"), "<svg/>").unwrap();

        let calls = Rc::new(Cell::new(0));
        let mut resolver = AssetResolver::with_rasterizer(SolidRasterizer { calls: calls.clone() });
        let theme = theme_in(dir.path());

        let surface = resolver.resolve(Some(&theme), AssetKey::Background).unwrap();
        assert_eq!(surface.get_pixel(0, 0), &Rgba([255, 0, 0, 255]));
        assert_eq!(calls.get(), 0);
    }

    #[test]
    fn test_svg_used_when_png_missing() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("stop_button.svg"), "<svg/>").unwrap();

        let calls = Rc::new(Cell::new(0));
        let mut resolver = AssetResolver::with_rasterizer(SolidRasterizer { calls: calls.clone() });
        let theme = theme_in(dir.path());
        let key = AssetKey::Icon(IconKind::Stop, VisualState::Normal);

        let surface = resolver.resolve(Some(&theme), key).unwrap();
        assert_eq!(surface.dimensions(), (50, 50));
        assert_eq!(surface.get_pixel(0, 0), &Rgba([0, 0, 255, 255]));

        // Memoized: no second rasterization.
        resolver.resolve(Some(&theme), key).unwrap();
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn test_corrupt_png_falls_through_to_svg() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("slider_knob.png"), b"garbage").unwrap();
        fs::write(dir.path().join("slider_knob.svg"), "<svg/>").unwrap();

        let calls = Rc::new(Cell::new(0));
        let mut resolver = AssetResolver::with_rasterizer(SolidRasterizer { calls });
        let theme = theme_in(dir.path());

        let surface = resolver.resolve(Some(&theme), AssetKey::SliderKnob).unwrap();
        assert_eq!(surface.dimensions(), AssetKey::SliderKnob.expected_size());
    }

    #[test]
    fn test_svg_skipped_without_rasterizer() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("background.svg"), "<svg/>").unwrap();

        let mut resolver = AssetResolver::without_svg();
        assert!(!resolver.svg_enabled());
        assert!(resolver.resolve(Some(&theme_in(dir.path())), AssetKey::Background).is_none());
    }

    /// Records every size it is asked to rasterize at.
    struct SizeRecorder {
        sizes: Rc<RefCell<Vec<(u32, u32)>>>,
    }

    impl SvgRasterizer for SizeRecorder {
        fn rasterize(&self, _data: &[u8], width: u32, height: u32) -> Result<RgbaImage, SvgError> {
            self.sizes.borrow_mut().push((width, height));
            Ok(RgbaImage::from_pixel(width, height, Rgba([0, 255, 0, 255])))
        }
    }

    #[test]
    fn test_png_only_for_every_key() {
        for key in AssetKey::all() {
            let dir = tempfile::tempdir().unwrap();
            write_png(&dir.path().join(key.file_name(AssetFormat::Png)), [9, 8, 7, 255]);

            let calls = Rc::new(Cell::new(0));
            let mut resolver = AssetResolver::with_rasterizer(SolidRasterizer { calls: calls.clone() });
            let asset = resolver.lookup(Some(&theme_in(dir.path())), key).unwrap();
            assert_eq!(asset.surface.get_pixel(0, 0), &Rgba([9, 8, 7, 255]), "{key:?}");
            assert!(asset.svg.is_none(), "{key:?}");
            assert_eq!(calls.get(), 0, "{key:?}");
        }
    }

    #[test]
    fn test_svg_only_for_every_key() {
        for key in AssetKey::all() {
            let dir = tempfile::tempdir().unwrap();
            fs::write(dir.path().join(key.file_name(AssetFormat::Svg)), "<svg/>").unwrap();

            let calls = Rc::new(Cell::new(0));
            let mut resolver = AssetResolver::with_rasterizer(SolidRasterizer { calls: calls.clone() });
            let asset = resolver.lookup(Some(&theme_in(dir.path())), key).unwrap();
            assert_eq!(asset.surface.dimensions(), key.expected_size(), "{key:?}");
            assert_eq!(asset.surface.get_pixel(0, 0), &Rgba([0, 0, 255, 255]), "{key:?}");
            assert!(asset.svg.is_some(), "{key:?}");
            assert_eq!(calls.get(), 1, "{key:?}");
        }
    }

    #[test]
    fn test_no_file_for_any_key() {
        let dir = tempfile::tempdir().unwrap();
        let theme = theme_in(dir.path());
        let mut resolver = AssetResolver::with_rasterizer(SolidRasterizer {
            calls: Rc::new(Cell::new(0)),
        });
        for key in AssetKey::all() {
            assert!(resolver.resolve(Some(&theme), key).is_none(), "{key:?}");
        }
        assert_eq!(resolver.memoized(), AssetKey::all().count());
    }

    #[test]
    fn test_render_rasterizes_svg_at_target_size() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("background.svg"), "<svg/>").unwrap();
        write_png(&dir.path().join("slider_knob.png"), [1, 1, 1, 255]);

        let sizes = Rc::new(RefCell::new(Vec::new()));
        let mut resolver = AssetResolver::with_rasterizer(SizeRecorder { sizes: sizes.clone() });
        let theme = theme_in(dir.path());

        let background = resolver.lookup(Some(&theme), AssetKey::Background).unwrap();
        let rendered = resolver.render(&background, (1920, 1080));
        assert_eq!(rendered.dimensions(), (1920, 1080));
        assert_eq!(*sizes.borrow(), vec![(1000, 700), (1920, 1080)]);

        // Raster sources are resampled without touching the rasterizer.
        let knob = resolver.lookup(Some(&theme), AssetKey::SliderKnob).unwrap();
        assert_eq!(resolver.render(&knob, (20, 20)).dimensions(), (20, 20));
        assert_eq!(sizes.borrow().len(), 2);
    }

    #[test]
    fn test_theme_less_mode() {
        let mut resolver = AssetResolver::new();
        assert!(resolver.resolve(None, AssetKey::Background).is_none());
        assert_eq!(resolver.memoized(), 0);
    }

    #[test]
    fn test_switching_theme_resets_store() {
        let dark = tempfile::tempdir().unwrap();
        let light = tempfile::tempdir().unwrap();
        write_png(&dark.path().join("background.png"), [0, 0, 0, 255]);
        write_png(&light.path().join("background.png"), [255, 255, 255, 255]);

        let mut resolver = AssetResolver::without_svg();
        let dark = theme_in(dark.path());
        let light = theme_in(light.path());

        let a = resolver.resolve(Some(&dark), AssetKey::Background).unwrap();
        let b = resolver.resolve(Some(&light), AssetKey::Background).unwrap();
        assert_eq!(a.get_pixel(0, 0), &Rgba([0, 0, 0, 255]));
        assert_eq!(b.get_pixel(0, 0), &Rgba([255, 255, 255, 255]));
        assert_eq!(resolver.memoized(), 1);
    }

    #[test]
    fn test_state_falls_back_to_normal() {
        let dir = tempfile::tempdir().unwrap();
        write_png(&dir.path().join("play_button.png"), [10, 20, 30, 255]);
        write_png(&dir.path().join("play_button_pressed.png"), [1, 2, 3, 255]);

        let mut resolver = AssetResolver::without_svg();
        let theme = theme_in(dir.path());

        let hover = resolver
            .resolve_state(Some(&theme), AssetKey::Icon(IconKind::Play, VisualState::Hover))
            .unwrap();
        assert!(hover.substituted);
        assert_eq!(hover.surface.get_pixel(0, 0), &Rgba([10, 20, 30, 255]));

        let pressed = resolver
            .resolve_state(Some(&theme), AssetKey::Icon(IconKind::Play, VisualState::Pressed))
            .unwrap();
        assert!(!pressed.substituted);
        assert_eq!(pressed.surface.get_pixel(0, 0), &Rgba([1, 2, 3, 255]));

        assert!(resolver
            .resolve_state(Some(&theme), AssetKey::Icon(IconKind::Pause, VisualState::Hover))
            .is_none());
    }
}
