//! Rollover highlight compositing and image scaling.

use image::imageops::{self, FilterType};
use image::{Pixel, Rgba, RgbaImage};

/// Brightness factor used for every hovered control.
pub const HOVER_BRIGHTNESS: f32 = 1.3;

/// Coverage of the white overlay for `factor`, in `0..=255`.
pub fn overlay_alpha(factor: f32) -> u8 {
    ((factor - 1.0) * 255.0 * 0.3).clamp(0.0, 255.0) as u8
}

/// Return a brightened copy of `image`.
///
/// A uniform white layer with [overlay_alpha] coverage is blended over every
/// pixel. `factor <= 1.0` returns an identical copy; the source is never
/// modified. Applying it twice stacks two layers.
pub fn brighten(image: &RgbaImage, factor: f32) -> RgbaImage {
    let mut bright = image.clone();
    let alpha = overlay_alpha(factor);
    if alpha == 0 {
        return bright;
    }

    let overlay = Rgba([255, 255, 255, alpha]);
    for pixel in bright.pixels_mut() {
        pixel.blend(&overlay);
    }
    bright
}

/// Smoothly scale `image` to exactly `width` x `height`.
///
/// Zero dimensions are raised to one pixel.
pub fn scale(image: &RgbaImage, (width, height): (u32, u32)) -> RgbaImage {
    let target = (width.max(1), height.max(1));
    if image.dimensions() == target {
        return image.clone();
    }
    imageops::resize(image, target.0, target.1, FilterType::Triangle)
}
