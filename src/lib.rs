#![warn(missing_docs)]

//! Skinnable theming and rendering for the jukebox player.

pub use image;

pub use jukebox_services as services;
pub use jukebox_theme as theme;
pub use jukebox_widgets as widgets;

/// A "prelude" for users of the jukebox skin.
///
/// Importing this module brings into scope the most common types
/// needed to skin and draw the player's controls.
///
/// ```rust
/// use jukebox::prelude::*;
/// ```
pub mod prelude {
    // Settings
    pub use crate::services::{JsonSettings, MemorySettings, SettingsStore};

    // Theme
    pub use crate::theme::asset::{AssetKey, IconKind, VisualState};
    pub use crate::theme::color::Rgb;
    pub use crate::theme::config::SkinConfig;
    pub use crate::theme::error::{ThemeError, ThemeResult};
    pub use crate::theme::overrides::{ColorOverrideTable, ColorScope, GeneralColor};
    pub use crate::theme::rendering::InteractionState;
    pub use crate::theme::skin::{FontId, Skin, TextRasterizer};
    pub use crate::theme::{Surface, Theme, ThemeCatalog};

    // Widgets
    pub use crate::widgets::button::{ButtonContent, ButtonWidget};
    pub use crate::widgets::frame::{Frame, Rect};
    pub use crate::widgets::pointer::PointerEvent;
    pub use crate::widgets::slider::{Orientation, SliderWidget};
}
