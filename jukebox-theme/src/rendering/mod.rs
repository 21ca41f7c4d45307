//! # Widget Visuals
//!
//! Pure helpers that turn a theme's [ColorOverrideTable](crate::overrides::ColorOverrideTable)
//! and a control's [InteractionState] into the colors and outlines to paint.
//! The widgets crate does the actual drawing; keeping the derivation here
//! means every control follows the same rules:
//!
//! - an icon button with a theme image draws the image only
//! - an icon button without one draws fill, border and a glyph
//! - a text button always draws fill and border

pub mod components;
mod state;

pub use components::button::{icon_button_visual, text_button_visual, Border, ButtonVisual, BUTTON_BORDER_WIDTH};
pub use components::slider::{knob_radius, slider_visual, SliderVisual, KNOB_RING_WIDTH, TRACK_BORDER_WIDTH};
pub use state::InteractionState;
