use std::fs;

use image::{Rgba, RgbaImage};
use jukebox_services::MemorySettings;
use jukebox_theme::resolver::AssetResolver;
use jukebox_theme::{IconKind, Rgb, Skin, ThemeCatalog};
use jukebox_widgets::{ButtonWidget, Frame, PointerEvent, Rect, SliderWidget};

fn themed_skin() -> (tempfile::TempDir, Skin) {
    let root = tempfile::tempdir().unwrap();
    for name in ["dark", "light"] {
        fs::create_dir(root.path().join(name)).unwrap();
    }
    RgbaImage::from_pixel(10, 10, Rgba([0, 0, 0, 255]))
        .save(root.path().join("dark").join("play_button.png"))
        .unwrap();
    fs::write(root.path().join("light").join("theme.conf"), "[colors]\naccent = 0,0,255\n").unwrap();

    let mut catalog = ThemeCatalog::new(MemorySettings::new());
    catalog.discover(root.path());
    (root, Skin::new(catalog).with_resolver(AssetResolver::without_svg()))
}

#[test]
fn test_hovered_play_button_brightens_normal_art() {
    let (_root, mut skin) = themed_skin();
    assert!(skin.activate("dark"));

    let mut play = ButtonWidget::icon(IconKind::Play, Rect::new(0, 0, 50, 50));
    let mut frame = Frame::new(50, 50);
    play.draw(&mut frame, &mut skin);
    assert_eq!(frame.pixel(25, 25), Some(Rgba([0, 0, 0, 255])));

    play.handle(PointerEvent::Moved(25, 25));
    let mut hovered = Frame::new(50, 50);
    play.draw(&mut hovered, &mut skin);
    let pixel = hovered.pixel(25, 25).unwrap();
    assert!(pixel[0] > 0 && pixel[0] == pixel[1] && pixel[1] == pixel[2]);
}

#[test]
fn test_widgets_follow_theme_switch() {
    let (_root, mut skin) = themed_skin();
    let play = ButtonWidget::icon(IconKind::Play, Rect::new(0, 0, 50, 50));
    let slider = SliderWidget::horizontal(Rect::new(0, 60, 200, 40), 0.0, 1.0).with_value(1.0);

    skin.activate("dark");
    let mut frame = Frame::new(200, 100);
    play.draw(&mut frame, &mut skin);
    slider.draw(&mut frame, &mut skin);
    assert_eq!(frame.pixel(0, 0), Some(Rgba([0, 0, 0, 255])));
    assert_eq!(frame.pixel(10, 80), Some(Rgb(100, 200, 100).to_rgba()));

    // The light theme has no play art but a blue accent.
    skin.activate("light");
    let mut frame = Frame::new(200, 100);
    play.draw(&mut frame, &mut skin);
    slider.draw(&mut frame, &mut skin);
    assert_eq!(frame.pixel(0, 0), Some(Rgb::WHITE.to_rgba()));
    assert_eq!(frame.pixel(10, 80), Some(Rgb(0, 0, 255).to_rgba()));
}
