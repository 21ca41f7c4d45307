//! Procedural icon art for buttons whose theme ships no image.

use jukebox_theme::{IconKind, Rgb};
use tiny_skia::{LineCap, PathBuilder, Stroke};

use crate::frame::{Frame, Rect};

/// Draw the glyph for `icon` centered in `rect`.
pub fn draw_glyph(frame: &mut Frame, icon: IconKind, rect: Rect, color: Rgb) {
    let (cx, cy) = rect.center();
    let (cx, cy) = (cx as f32, cy as f32);
    // Glyphs occupy the inner ~40% of the shorter side.
    let s = rect.width.min(rect.height) as f32 * 0.2;

    match icon {
        IconKind::Play => {
            let mut pb = PathBuilder::new();
            pb.move_to(cx - s * 0.8, cy - s);
            pb.line_to(cx + s, cy);
            pb.line_to(cx - s * 0.8, cy + s);
            pb.close();
            if let Some(path) = pb.finish() {
                frame.fill_path(&path, color);
            }
        },
        IconKind::Pause => {
            let bar = (s * 0.6).max(1.0) as u32;
            let height = (s * 2.0) as u32;
            let gap = (s * 0.4) as i32;
            let top = (cy - s) as i32;
            frame.fill_rect(Rect::new(cx as i32 - gap - bar as i32, top, bar, height), color);
            frame.fill_rect(Rect::new(cx as i32 + gap, top, bar, height), color);
        },
        IconKind::Stop => {
            let side = (s * 1.8) as u32;
            frame.fill_rect(Rect::centered(cx as i32, cy as i32, side, side), color);
        },
        IconKind::Exit | IconKind::Close => {
            let mut pb = PathBuilder::new();
            pb.move_to(cx - s, cy - s);
            pb.line_to(cx + s, cy + s);
            pb.move_to(cx + s, cy - s);
            pb.line_to(cx - s, cy + s);
            stroke(frame, pb, s * 0.35, LineCap::Square, color);
        },
        IconKind::Config => draw_gear(frame, (cx, cy), s, color),
        IconKind::LeftNav => draw_chevron(frame, (cx, cy), s, -1.0, color),
        IconKind::RightNav => draw_chevron(frame, (cx, cy), s, 1.0, color),
        IconKind::Credits => {
            frame.fill_circle((cx as i32, cy as i32), (s * 0.4).max(2.0) as u32, color);
        },
    }
}

fn draw_gear(frame: &mut Frame, (cx, cy): (f32, f32), s: f32, color: Rgb) {
    let thickness = (s * 0.35).max(2.0);
    let mut pb = PathBuilder::new();
    for tooth in 0..8 {
        let angle = tooth as f32 * std::f32::consts::FRAC_PI_4;
        let (sin, cos) = angle.sin_cos();
        pb.move_to(cx + cos * s * 0.6, cy + sin * s * 0.6);
        pb.line_to(cx + cos * s * 1.1, cy + sin * s * 1.1);
    }
    pb.push_circle(cx, cy, s * 0.8 - thickness / 2.0);
    stroke(frame, pb, thickness, LineCap::Butt, color);
}

fn draw_chevron(frame: &mut Frame, (cx, cy): (f32, f32), s: f32, direction: f32, color: Rgb) {
    let mut pb = PathBuilder::new();
    pb.move_to(cx - direction * s * 0.4, cy - s);
    pb.line_to(cx + direction * s * 0.6, cy);
    pb.line_to(cx - direction * s * 0.4, cy + s);
    stroke(frame, pb, s * 0.4, LineCap::Square, color);
}

fn stroke(frame: &mut Frame, pb: PathBuilder, width: f32, line_cap: LineCap, color: Rgb) {
    let stroke = Stroke {
        width: width.max(2.0),
        line_cap,
        ..Stroke::default()
    };
    if let Some(path) = pb.finish() {
        frame.stroke_path(&path, color, &stroke);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;

    fn painted(frame: &Frame) -> usize {
        frame.image().pixels().filter(|p| p[3] != 0).count()
    }

    #[test]
    fn test_every_icon_paints_inside_rect() {
        let rect = Rect::new(10, 10, 50, 50);
        for icon in IconKind::ALL {
            let mut frame = Frame::new(70, 70);
            draw_glyph(&mut frame, icon, rect, Rgb::WHITE);
            assert!(painted(&frame) > 0, "{icon} drew nothing");

            for (x, y, pixel) in frame.image().enumerate_pixels() {
                if pixel[3] != 0 {
                    assert!(rect.contains((x as i32, y as i32)), "{icon} spilled at {x},{y}");
                }
            }
        }
    }

    #[test]
    fn test_play_points_right() {
        let mut frame = Frame::new(50, 50);
        let bounds = frame.bounds();
        draw_glyph(&mut frame, IconKind::Play, bounds, Rgb::WHITE);
        // Left part of the triangle is tall, the tip is thin.
        assert_eq!(frame.pixel(19, 20), Some(Rgba([255, 255, 255, 255])));
        assert_eq!(frame.pixel(33, 20), Some(Rgba([0, 0, 0, 0])));
    }

    #[test]
    fn test_chevrons_mirror() {
        let bounds = Rect::new(0, 0, 60, 80);
        let mut left = Frame::new(60, 80);
        let mut right = Frame::new(60, 80);
        draw_glyph(&mut left, IconKind::LeftNav, bounds, Rgb::WHITE);
        draw_glyph(&mut right, IconKind::RightNav, bounds, Rgb::WHITE);
        assert_ne!(left, right);
        // The left chevron's tip sits left of center, the right one's to the right.
        assert!(left.pixel(23, 40).is_some_and(|p| p[3] != 0));
        assert!(right.pixel(36, 40).is_some_and(|p| p[3] != 0));
    }
}
