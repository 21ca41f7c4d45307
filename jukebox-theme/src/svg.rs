//! Vector rasterization for theme SVG assets.
//!
//! The skin only needs "SVG bytes in, RGBA pixels out at a given size". The
//! [SvgRasterizer] trait is that seam; [ResvgRasterizer] implements it when
//! the `svg` feature is enabled. Without a rasterizer the asset resolver
//! skips its SVG step.

use image::RgbaImage;
use thiserror::Error;

/// Errors produced while rasterizing an SVG document.
#[derive(Error, Debug)]
pub enum SvgError {
    /// The document could not be parsed.
    #[error("Invalid SVG document: {0}")]
    Parse(String),

    /// A zero-sized target or document.
    #[error("Cannot rasterize SVG at {width}x{height}")]
    EmptySize {
        /// Requested width.
        width: u32,
        /// Requested height.
        height: u32,
    },
}

/// Turns SVG documents into raster images.
pub trait SvgRasterizer {
    /// Rasterize `data` stretched to exactly `width` x `height` pixels.
    fn rasterize(&self, data: &[u8], width: u32, height: u32) -> Result<RgbaImage, SvgError>;
}

/// [SvgRasterizer] backed by `resvg`.
#[cfg(feature = "svg")]
#[derive(Debug, Default, Clone, Copy)]
pub struct ResvgRasterizer;

#[cfg(feature = "svg")]
impl SvgRasterizer for ResvgRasterizer {
    fn rasterize(&self, data: &[u8], width: u32, height: u32) -> Result<RgbaImage, SvgError> {
        use resvg::{tiny_skia, usvg};

        let tree = usvg::Tree::from_data(data, &usvg::Options::default())
            .map_err(|e| SvgError::Parse(e.to_string()))?;

        let size = tree.size();
        if size.width() <= 0.0 || size.height() <= 0.0 {
            return Err(SvgError::EmptySize { width, height });
        }

        let mut pixmap =
            tiny_skia::Pixmap::new(width, height).ok_or(SvgError::EmptySize { width, height })?;
        let transform = tiny_skia::Transform::from_scale(
            width as f32 / size.width(),
            height as f32 / size.height(),
        );
        resvg::render(&tree, transform, &mut pixmap.as_mut());

        // tiny-skia stores premultiplied alpha; image expects straight alpha.
        let mut image = RgbaImage::new(width, height);
        for (dst, src) in image.pixels_mut().zip(pixmap.pixels()) {
            let color = src.demultiply();
            *dst = image::Rgba([color.red(), color.green(), color.blue(), color.alpha()]);
        }
        Ok(image)
    }
}

/// The rasterizer compiled into this build, if any.
pub fn default_rasterizer() -> Option<Box<dyn SvgRasterizer>> {
    #[cfg(feature = "svg")]
    {
        Some(Box::new(ResvgRasterizer))
    }
    #[cfg(not(feature = "svg"))]
    {
        None
    }
}

#[cfg(all(test, feature = "svg"))]
mod tests {
    use super::*;

    const RED_SQUARE: &str = r##"<svg xmlns="http://www.w3.org/2000/svg" width="10" height="10">
        <rect width="10" height="10" fill="#ff0000"/>
    </svg>"##;

    #[test]
    fn test_rasterize_scales_to_target() {
        let image = ResvgRasterizer
            .rasterize(RED_SQUARE.as_bytes(), 40, 20)
            .unwrap();
        assert_eq!(image.dimensions(), (40, 20));
        assert_eq!(image.get_pixel(20, 10), &image::Rgba([255, 0, 0, 255]));
    }

    #[test]
    fn test_rasterize_rejects_garbage() {
        assert!(matches!(
            ResvgRasterizer.rasterize(b"definitely not svg", 10, 10),
            Err(SvgError::Parse(_))
        ));
    }
}
