use crate::color::Rgb;
use crate::overrides::{ColorOverrideTable, GeneralColor};

/// Width of the outline around an unskinned track.
pub const TRACK_BORDER_WIDTH: u32 = 1;
/// Width of the ring around an unskinned knob.
pub const KNOB_RING_WIDTH: u32 = 2;

/// Visual description of slider track and knob colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SliderVisual {
    /// Unskinned track fill.
    pub track: Rgb,
    /// Filled portion up to the current value.
    pub fill: Rgb,
    /// Unskinned knob fill.
    pub knob: Rgb,
    /// Track border and knob ring.
    pub outline: Rgb,
}

/// Derive a [SliderVisual] from the theme's colors.
pub fn slider_visual(colors: &ColorOverrideTable) -> SliderVisual {
    SliderVisual {
        track: colors.general(GeneralColor::SliderTrack),
        fill: colors.general(GeneralColor::Accent),
        knob: colors.general(GeneralColor::SliderKnob),
        outline: Rgb::WHITE,
    }
}

/// Knob radius for a track `extent` pixels thick.
pub fn knob_radius(extent: u32) -> u32 {
    ((extent as f32 * 0.9) as u32).clamp(8, 20)
}
