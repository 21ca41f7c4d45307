use crate::asset::{IconKind, VisualState};
use crate::color::Rgb;
use crate::overrides::{ColorOverrideTable, GeneralColor};

/// Width of the outline drawn around unskinned and text buttons.
pub const BUTTON_BORDER_WIDTH: u32 = 2;

/// An outline around a control.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Border {
    /// Outline color.
    pub color: Rgb,
    /// Outline width in pixels.
    pub width: u32,
}

impl Border {
    /// The white outline every text button gets.
    pub const BUTTON: Border = Border {
        color: Rgb::WHITE,
        width: BUTTON_BORDER_WIDTH,
    };
}

/// Aggregated styling information required to paint a button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ButtonVisual {
    /// Fill color, `None` when a theme image covers the button.
    pub fill: Option<Rgb>,
    /// Label or glyph color.
    pub foreground: Rgb,
    /// Outline, `None` for image-skinned icon buttons.
    pub border: Option<Border>,
}

/// Colors for a text button.
///
/// Text buttons always get a fill from the override chain and a border, even
/// when a generic button image is drawn on top of the fill.
pub fn text_button_visual(colors: &ColorOverrideTable, label: &str, state: VisualState) -> ButtonVisual {
    ButtonVisual {
        fill: Some(colors.button(label, state)),
        foreground: colors.general(GeneralColor::ButtonText),
        border: Some(Border::BUTTON),
    }
}

/// Colors for an icon button.
///
/// With a resolved image the image is the whole visual: no fill, no border.
/// Without one the button falls back to the override chain keyed by `label`
/// (or the icon stem) plus a border and a procedural glyph.
pub fn icon_button_visual(
    colors: &ColorOverrideTable,
    icon: IconKind,
    label: Option<&str>,
    state: VisualState,
    has_image: bool,
) -> ButtonVisual {
    let foreground = colors.general(GeneralColor::ButtonText);
    if has_image {
        return ButtonVisual {
            fill: None,
            foreground,
            border: None,
        };
    }

    ButtonVisual {
        fill: Some(colors.button(label.unwrap_or(icon.stem()), state)),
        foreground,
        border: Some(Border::BUTTON),
    }
}
