//! Renders the jukebox control strip for one theme into a PNG.
//!
//! ```bash
//! JUKEBOX_THEMES_DIR=./themes cargo run -p theme-preview -- light preview.png
//! ```
//!
//! With no theme argument the persisted or configured default is used.

use anyhow::{Context, Result};
use jukebox::prelude::*;

fn main() -> Result<()> {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let theme = args.next();
    let output = args.next().unwrap_or_else(|| "theme-preview.png".to_string());

    let config = SkinConfig::from_env_or_default();
    let mut skin = Skin::from_config(&config, MemorySettings::new());
    log::info!("Themes in {:?}: {:?}", config.themes_dir, skin.catalog().list());

    if let Some(theme) = theme {
        skin.try_activate(&theme)
            .with_context(|| format!("cannot preview theme '{}'", theme))?;
    }

    let (width, height) = (560, 220);
    skin.set_viewport(width, height);
    let mut frame = Frame::from_image((*skin.background()).clone());

    let mut controls: Vec<ButtonWidget> = [IconKind::Play, IconKind::Pause, IconKind::Stop, IconKind::Config, IconKind::Exit]
        .into_iter()
        .enumerate()
        .map(|(i, kind)| ButtonWidget::icon(kind, Rect::new(20 + i as i32 * 70, 20, 50, 50)))
        .collect();
    controls.push(ButtonWidget::icon(IconKind::LeftNav, Rect::new(380, 10, 60, 80)));
    controls.push(ButtonWidget::icon(IconKind::RightNav, Rect::new(460, 10, 60, 80)));
    controls.push(ButtonWidget::text("CLR", Rect::new(20, 110, 100, 50)));
    controls.push(ButtonWidget::text("Close", Rect::new(140, 110, 100, 50)));

    // Show the rollover look on the first button.
    let (x, y) = controls[0].rect().center();
    controls[0].handle(PointerEvent::Moved(x, y));

    for control in &controls {
        control.draw(&mut frame, &mut skin);
    }

    let volume = SliderWidget::horizontal(Rect::new(260, 120, 200, 30), 0.0, 100.0).with_value(70.0);
    let balance = SliderWidget::vertical(Rect::new(500, 100, 30, 110), 0.0, 1.0).with_value(0.5);
    volume.draw(&mut frame, &mut skin);
    balance.draw(&mut frame, &mut skin);

    frame
        .save(&output)
        .with_context(|| format!("failed to write {}", output))?;
    println!(
        "Rendered theme '{}' to {}",
        skin.catalog().current_name().unwrap_or("<none>"),
        output
    );
    Ok(())
}
