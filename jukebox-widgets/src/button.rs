use jukebox_theme::rendering::{icon_button_visual, text_button_visual, ButtonVisual, InteractionState};
use jukebox_theme::{AssetKey, FontId, IconKind, Skin, VisualState};

use crate::frame::{Frame, Rect};
use crate::glyph::draw_glyph;
use crate::pointer::PointerEvent;

/// What a button shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ButtonContent {
    /// Theme icon art, with a procedural glyph when the theme has none.
    Icon {
        /// Which icon.
        kind: IconKind,
        /// Label used for color lookups; defaults to the icon stem.
        label: Option<String>,
    },
    /// A text label on a colored plate.
    Text(String),
}

/// A clickable control drawn through the [Skin].
///
/// ### Theming
/// - icon buttons use `<stem>_button[_hover|_pressed].png|svg`; without any
///   image they fall back to the `[button_colors]` entry for their label
/// - text buttons use their label's `[button_colors]` entry, the generic
///   `button[_hover|_pressed]` image if present and always a white border
#[derive(Debug, Clone)]
pub struct ButtonWidget {
    rect: Rect,
    content: ButtonContent,
    state: InteractionState,
    font: FontId,
}

impl ButtonWidget {
    /// Create an icon button.
    pub fn icon(kind: IconKind, rect: Rect) -> Self {
        Self::new(ButtonContent::Icon { kind, label: None }, rect)
    }

    /// Create a text button.
    pub fn text(label: impl Into<String>, rect: Rect) -> Self {
        Self::new(ButtonContent::Text(label.into()), rect)
    }

    /// Create a button with explicit content.
    pub fn new(content: ButtonContent, rect: Rect) -> Self {
        Self {
            rect,
            content,
            state: InteractionState::Idle,
            font: 0,
        }
    }

    /// Set the label an icon button uses for color lookups.
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        if let ButtonContent::Icon { label: slot, .. } = &mut self.content {
            *slot = Some(label.into());
        }
        self
    }

    /// Set the font text buttons render their label with.
    pub fn with_font(mut self, font: FontId) -> Self {
        self.font = font;
        self
    }

    /// Current interaction state.
    pub fn state(&self) -> InteractionState {
        self.state
    }

    /// Button bounds.
    pub fn rect(&self) -> Rect {
        self.rect
    }

    /// Move or resize the button.
    pub fn set_rect(&mut self, rect: Rect) {
        self.rect = rect;
    }

    /// What the button shows.
    pub fn content(&self) -> &ButtonContent {
        &self.content
    }

    /// Feed a pointer event. Returns `true` when it completed a click.
    pub fn handle(&mut self, event: PointerEvent) -> bool {
        let inside = self.rect.contains(event.position());
        match event {
            PointerEvent::Moved(..) => {
                self.state = self.state.on_move(inside);
                false
            },
            PointerEvent::Pressed(..) => {
                self.state = self.state.on_press(inside);
                false
            },
            PointerEvent::Released(..) => {
                let (state, clicked) = self.state.on_release(inside);
                self.state = state;
                if clicked {
                    log::trace!("Button {:?} clicked", self.content);
                }
                clicked
            },
        }
    }

    /// Paint the button for the skin's active theme.
    pub fn draw(&self, frame: &mut Frame, skin: &mut Skin) {
        let state = self.state.visual_state();
        match &self.content {
            ButtonContent::Icon { kind, label } => self.draw_icon(frame, skin, *kind, label.as_deref(), state),
            ButtonContent::Text(label) => self.draw_text(frame, skin, label, state),
        }
    }

    fn draw_icon(&self, frame: &mut Frame, skin: &mut Skin, kind: IconKind, label: Option<&str>, state: VisualState) {
        let image = skin.skinned_surface(AssetKey::Icon(kind, state), self.rect.size());
        let visual = icon_button_visual(skin.colors(), kind, label, state, image.is_some());
        self.paint_plate(frame, &visual);

        match image {
            Some(image) => frame.blit(&image, self.rect.x, self.rect.y),
            None => draw_glyph(frame, kind, self.rect, visual.foreground),
        }
        if let Some(border) = visual.border {
            frame.stroke_rect(self.rect, border.color, border.width);
        }
    }

    fn draw_text(&self, frame: &mut Frame, skin: &mut Skin, label: &str, state: VisualState) {
        let visual = text_button_visual(skin.colors(), label, state);
        self.paint_plate(frame, &visual);

        let size = self.rect.size();
        let skin_image = if label.trim().eq_ignore_ascii_case("close") {
            skin.skinned_surface(AssetKey::Icon(IconKind::Close, state), size)
                .or_else(|| skin.skinned_surface(AssetKey::Button(state), size))
        } else {
            skin.skinned_surface(AssetKey::Button(state), size)
        };
        if let Some(image) = skin_image {
            frame.blit(&image, self.rect.x, self.rect.y);
        }

        if let Some(border) = visual.border {
            frame.stroke_rect(self.rect, border.color, border.width);
        }

        if let Some(text) = skin.text_surface(label, self.font, visual.foreground) {
            frame.blit_centered(&text, self.rect);
        }
    }

    fn paint_plate(&self, frame: &mut Frame, visual: &ButtonVisual) {
        if let Some(fill) = visual.fill {
            frame.fill_rect(self.rect, fill);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgba, RgbaImage};
    use jukebox_services::MemorySettings;
    use jukebox_theme::resolver::AssetResolver;
    use jukebox_theme::{GeneralColor, Rgb, ThemeCatalog};
    use std::fs;

    fn skin(theme_files: &[(&str, [u8; 4])], conf: Option<&str>) -> (tempfile::TempDir, Skin) {
        let root = tempfile::tempdir().unwrap();
        let dir = root.path().join("test");
        fs::create_dir(&dir).unwrap();
        for (file, color) in theme_files {
            RgbaImage::from_pixel(10, 10, Rgba(*color)).save(dir.join(file)).unwrap();
        }
        if let Some(conf) = conf {
            fs::write(dir.join("theme.conf"), conf).unwrap();
        }
        let mut catalog = ThemeCatalog::new(MemorySettings::new());
        catalog.discover(root.path());
        let mut skin = Skin::new(catalog).with_resolver(AssetResolver::without_svg());
        assert!(skin.activate("test"));
        (root, skin)
    }

    #[test]
    fn test_click_sequence() {
        let mut button = ButtonWidget::icon(IconKind::Play, Rect::new(0, 0, 50, 50));
        assert!(!button.handle(PointerEvent::Moved(10, 10)));
        assert_eq!(button.state(), InteractionState::Hovered);
        assert!(!button.handle(PointerEvent::Pressed(10, 10)));
        assert_eq!(button.state(), InteractionState::Pressed);
        assert!(button.handle(PointerEvent::Released(10, 10)));
        assert_eq!(button.state(), InteractionState::Hovered);
        button.handle(PointerEvent::Moved(100, 100));
        assert_eq!(button.state(), InteractionState::Idle);
    }

    #[test]
    fn test_release_outside_does_not_click() {
        let mut button = ButtonWidget::text("Shuffle", Rect::new(0, 0, 100, 50));
        button.handle(PointerEvent::Moved(10, 10));
        button.handle(PointerEvent::Pressed(10, 10));
        button.handle(PointerEvent::Moved(200, 10));
        assert!(!button.handle(PointerEvent::Released(200, 10)));
        assert_eq!(button.state(), InteractionState::Idle);
    }

    #[test]
    fn test_icon_image_has_no_border() {
        let (_root, mut skin) = skin(&[("play_button.png", [0, 0, 255, 255])], None);
        let button = ButtonWidget::icon(IconKind::Play, Rect::new(0, 0, 50, 50));
        let mut frame = Frame::new(50, 50);
        button.draw(&mut frame, &mut skin);

        // Edge pixel is image, not a white border.
        assert_eq!(frame.pixel(0, 0), Some(Rgba([0, 0, 255, 255])));
        assert_eq!(frame.pixel(25, 25), Some(Rgba([0, 0, 255, 255])));
    }

    #[test]
    fn test_icon_image_with_transparency_has_no_plate() {
        let (_root, mut skin) = skin(
            &[("play_button.png", [0, 0, 0, 0])],
            Some("[button_colors]\nplay = 10,20,30\n"),
        );
        let button = ButtonWidget::icon(IconKind::Play, Rect::new(0, 0, 50, 50));
        let mut frame = Frame::new(50, 50);
        button.draw(&mut frame, &mut skin);

        // The image is the whole visual: no fill, border or glyph behind it.
        assert!(frame.image().pixels().all(|p| p[3] == 0));
    }

    #[test]
    fn test_icon_without_image_gets_plate_and_border() {
        let (_root, mut skin) = skin(&[], Some("[button_colors]\nstop = 10,20,30\n"));
        let button = ButtonWidget::icon(IconKind::Stop, Rect::new(0, 0, 50, 50));
        let mut frame = Frame::new(50, 50);
        button.draw(&mut frame, &mut skin);

        assert_eq!(frame.pixel(0, 0), Some(Rgb::WHITE.to_rgba()));
        assert_eq!(frame.pixel(4, 4), Some(Rgb(10, 20, 30).to_rgba()));
        // Stop glyph in the middle.
        assert_eq!(frame.pixel(25, 25), Some(GeneralColor::ButtonText.builtin().to_rgba()));
    }

    #[test]
    fn test_text_button_border_even_with_skin_image() {
        let (_root, mut skin) = skin(&[("button.png", [0, 128, 0, 255])], None);
        let button = ButtonWidget::text("Shuffle", Rect::new(0, 0, 100, 50));
        let mut frame = Frame::new(100, 50);
        button.draw(&mut frame, &mut skin);

        assert_eq!(frame.pixel(0, 0), Some(Rgb::WHITE.to_rgba()));
        assert_eq!(frame.pixel(1, 49), Some(Rgb::WHITE.to_rgba()));
        assert_eq!(frame.pixel(50, 25), Some(Rgba([0, 128, 0, 255])));
    }

    #[test]
    fn test_text_button_hover_color() {
        let (_root, mut skin) = skin(&[], Some("[button_colors]\nclr = 200,50,50\nclr_hover = 255,100,100\n"));
        let mut button = ButtonWidget::text("CLR", Rect::new(0, 0, 100, 50));
        button.handle(PointerEvent::Moved(50, 25));

        let mut frame = Frame::new(100, 50);
        button.draw(&mut frame, &mut skin);
        assert_eq!(frame.pixel(50, 25), Some(Rgb(255, 100, 100).to_rgba()));
    }

    #[test]
    fn test_close_label_prefers_close_art() {
        let (_root, mut skin) = skin(
            &[("close_button.png", [200, 0, 0, 255]), ("button.png", [0, 128, 0, 255])],
            None,
        );
        let button = ButtonWidget::text("Close", Rect::new(0, 0, 100, 50));
        let mut frame = Frame::new(100, 50);
        button.draw(&mut frame, &mut skin);

        assert_eq!(frame.pixel(50, 25), Some(Rgba([200, 0, 0, 255])));
        assert_eq!(frame.pixel(0, 0), Some(Rgb::WHITE.to_rgba()));
    }
}
