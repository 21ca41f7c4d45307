use std::path::Path;

use image::imageops;
use image::{ImageResult, Rgba, RgbaImage};
use jukebox_theme::Rgb;
use tiny_skia::{FillRule, Paint, PathBuilder, Pixmap, Stroke, Transform};

/// An axis-aligned rectangle in frame pixels.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Rect {
    /// Left edge.
    pub x: i32,
    /// Top edge.
    pub y: i32,
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl Rect {
    /// Create a new rectangle.
    pub const fn new(x: i32, y: i32, width: u32, height: u32) -> Self {
        Self { x, y, width, height }
    }

    /// A `width` x `height` rectangle centered on `(cx, cy)`.
    pub fn centered(cx: i32, cy: i32, width: u32, height: u32) -> Self {
        Self::new(cx - width as i32 / 2, cy - height as i32 / 2, width, height)
    }

    /// Exclusive right edge.
    pub fn right(&self) -> i32 {
        self.x + self.width as i32
    }

    /// Exclusive bottom edge.
    pub fn bottom(&self) -> i32 {
        self.y + self.height as i32
    }

    /// Center point.
    pub fn center(&self) -> (i32, i32) {
        (self.x + self.width as i32 / 2, self.y + self.height as i32 / 2)
    }

    /// Size as `(width, height)`.
    pub fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Whether the point lies inside.
    pub fn contains(&self, (x, y): (i32, i32)) -> bool {
        x >= self.x && x < self.right() && y >= self.y && y < self.bottom()
    }

    /// Shrink by `amount` on every side.
    pub fn inset(&self, amount: u32) -> Self {
        Self::new(
            self.x + amount as i32,
            self.y + amount as i32,
            self.width.saturating_sub(amount * 2),
            self.height.saturating_sub(amount * 2),
        )
    }
}

/// A CPU frame buffer the widgets paint into.
///
/// The shell owns one per window and presents it after the draw pass.
/// Everything is clipped to the frame; drawing outside is a no-op.
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    image: RgbaImage,
}

impl Frame {
    /// A transparent frame.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            image: RgbaImage::new(width, height),
        }
    }

    /// Wrap an existing image.
    pub fn from_image(image: RgbaImage) -> Self {
        Self { image }
    }

    /// Frame width.
    pub fn width(&self) -> u32 {
        self.image.width()
    }

    /// Frame height.
    pub fn height(&self) -> u32 {
        self.image.height()
    }

    /// Frame bounds.
    pub fn bounds(&self) -> Rect {
        Rect::new(0, 0, self.width(), self.height())
    }

    /// The painted pixels.
    pub fn image(&self) -> &RgbaImage {
        &self.image
    }

    /// Take the painted pixels.
    pub fn into_image(self) -> RgbaImage {
        self.image
    }

    /// Read one pixel. Out of bounds reads are `None`.
    pub fn pixel(&self, x: i32, y: i32) -> Option<Rgba<u8>> {
        if x < 0 || y < 0 {
            return None;
        }
        self.image.get_pixel_checked(x as u32, y as u32).copied()
    }

    /// Fill the whole frame.
    pub fn clear(&mut self, color: Rgb) {
        let color = color.to_rgba();
        for pixel in self.image.pixels_mut() {
            *pixel = color;
        }
    }

    /// Fill `rect` with an opaque color.
    pub fn fill_rect(&mut self, rect: Rect, color: Rgb) {
        let color = color.to_rgba();
        let (x0, y0, x1, y1) = self.clip(rect);
        for y in y0..y1 {
            for x in x0..x1 {
                self.image.put_pixel(x, y, color);
            }
        }
    }

    /// Outline `rect` with a border `width` pixels thick drawn inside it.
    pub fn stroke_rect(&mut self, rect: Rect, color: Rgb, width: u32) {
        let w = width.min(rect.width / 2 + 1).min(rect.height / 2 + 1);
        if w == 0 {
            return;
        }
        self.fill_rect(Rect::new(rect.x, rect.y, rect.width, w), color);
        self.fill_rect(Rect::new(rect.x, rect.bottom() - w as i32, rect.width, w), color);
        self.fill_rect(Rect::new(rect.x, rect.y, w, rect.height), color);
        self.fill_rect(Rect::new(rect.right() - w as i32, rect.y, w, rect.height), color);
    }

    /// Alpha-composite `image` with its top-left corner at `(x, y)`.
    pub fn blit(&mut self, image: &RgbaImage, x: i32, y: i32) {
        imageops::overlay(&mut self.image, image, x as i64, y as i64);
    }

    /// Alpha-composite `image` centered in `rect`.
    pub fn blit_centered(&mut self, image: &RgbaImage, rect: Rect) {
        let (cx, cy) = rect.center();
        self.blit(
            image,
            cx - image.width() as i32 / 2,
            cy - image.height() as i32 / 2,
        );
    }

    /// Fill a disc.
    pub fn fill_circle(&mut self, (cx, cy): (i32, i32), radius: u32, color: Rgb) {
        if let Some(path) = PathBuilder::from_circle(cx as f32, cy as f32, radius as f32) {
            self.fill_path(&path, color);
        }
    }

    /// Draw a ring `width` pixels thick whose outer edge has `radius`.
    pub fn stroke_circle(&mut self, (cx, cy): (i32, i32), radius: u32, color: Rgb, width: u32) {
        let width = width.min(radius) as f32;
        let middle = radius as f32 - width / 2.0;
        if let Some(path) = PathBuilder::from_circle(cx as f32, cy as f32, middle) {
            self.stroke_path(&path, color, &Stroke { width, ..Stroke::default() });
        }
    }

    /// Fill `path` (non-zero winding) with anti-aliased edges.
    pub fn fill_path(&mut self, path: &tiny_skia::Path, color: Rgb) {
        self.paint_path(path, color, None);
    }

    /// Stroke `path` with anti-aliased edges.
    pub fn stroke_path(&mut self, path: &tiny_skia::Path, color: Rgb, stroke: &Stroke) {
        self.paint_path(path, color, Some(stroke));
    }

    /// Write the frame as an image file; the format follows the extension.
    pub fn save(&self, path: impl AsRef<Path>) -> ImageResult<()> {
        self.image.save(path)
    }

    /// Rasterize `path` into a scratch pixmap covering its bounds, then
    /// composite that over the frame.
    fn paint_path(&mut self, path: &tiny_skia::Path, color: Rgb, stroke: Option<&Stroke>) {
        let pad = stroke.map_or(0.0, |stroke| stroke.width) + 1.0;
        let bounds = path.bounds();
        let area = Rect::new(
            (bounds.left() - pad).floor() as i32,
            (bounds.top() - pad).floor() as i32,
            (bounds.width() + pad * 2.0).ceil() as u32 + 1,
            (bounds.height() + pad * 2.0).ceil() as u32 + 1,
        );
        let (x0, y0, x1, y1) = self.clip(area);
        let Some(mut pixmap) = Pixmap::new(x1.saturating_sub(x0), y1.saturating_sub(y0)) else {
            return;
        };

        let mut paint = Paint::default();
        paint.set_color_rgba8(color.0, color.1, color.2, 255);
        paint.anti_alias = true;
        let transform = Transform::from_translate(-(x0 as f32), -(y0 as f32));
        match stroke {
            Some(stroke) => pixmap.stroke_path(path, &paint, stroke, transform, None),
            None => pixmap.fill_path(path, &paint, FillRule::Winding, transform, None),
        }

        // tiny-skia stores premultiplied alpha; image expects straight alpha.
        let mut layer = RgbaImage::new(pixmap.width(), pixmap.height());
        for (dst, src) in layer.pixels_mut().zip(pixmap.pixels()) {
            let color = src.demultiply();
            *dst = Rgba([color.red(), color.green(), color.blue(), color.alpha()]);
        }
        imageops::overlay(&mut self.image, &layer, x0 as i64, y0 as i64);
    }

    fn clip(&self, rect: Rect) -> (u32, u32, u32, u32) {
        let x0 = rect.x.clamp(0, self.width() as i32) as u32;
        let y0 = rect.y.clamp(0, self.height() as i32) as u32;
        let x1 = rect.right().clamp(0, self.width() as i32) as u32;
        let y1 = rect.bottom().clamp(0, self.height() as i32) as u32;
        (x0, y0, x1, y1)
    }
}
