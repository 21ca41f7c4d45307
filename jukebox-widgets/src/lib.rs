#![warn(missing_docs)]

//! Widget library for the jukebox skin => See `jukebox` crate.
//!
//! Buttons and sliders that keep their own pointer state and ask a
//! [Skin](jukebox_theme::Skin) for every visual on each draw, painting into a
//! CPU [Frame](frame::Frame).

pub use tiny_skia;

/// Contains the [button::ButtonWidget] widget.
pub mod button;

/// Contains the [frame::Frame] frame buffer and [frame::Rect].
pub mod frame;

/// Procedural icon glyphs.
pub mod glyph;

/// Contains [pointer::PointerEvent].
pub mod pointer;

/// Contains the [slider::SliderWidget] widget.
pub mod slider;

pub use button::{ButtonContent, ButtonWidget};
pub use frame::{Frame, Rect};
pub use pointer::PointerEvent;
pub use slider::{Orientation, SliderWidget};
