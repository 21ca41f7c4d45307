use jukebox_theme::rendering::{
    knob_radius, slider_visual, InteractionState, SliderVisual, KNOB_RING_WIDTH, TRACK_BORDER_WIDTH,
};
use jukebox_theme::{AssetKey, Skin};

use crate::frame::{Frame, Rect};
use crate::pointer::PointerEvent;

/// Thickness of the slider track in pixels.
pub const TRACK_THICKNESS: u32 = 18;

/// Largest knob image edge.
const MAX_KNOB_IMAGE: u32 = 48;

/// Direction a slider runs in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Orientation {
    /// Minimum on the left.
    #[default]
    Horizontal,
    /// Minimum at the bottom.
    Vertical,
}

/// A draggable value control drawn through the [Skin].
///
/// ### Theming
/// - `slider_track` / `slider_track_vertical` images, else the `slider_track`
///   color with a white outline
/// - `slider_knob` image (brightened while hovered or dragged), else a `slider_knob`
///   colored disc with a white ring
/// - the filled portion uses `accent`
#[derive(Debug, Clone)]
pub struct SliderWidget {
    rect: Rect,
    orientation: Orientation,
    min: f32,
    max: f32,
    value: f32,
    knob: InteractionState,
}

impl SliderWidget {
    /// Create a slider over `min..=max` starting at `min`.
    ///
    /// Swapped bounds are reordered. A non-finite bound is replaced by `0.0`
    /// (min) or `1.0` (max).
    pub fn new(rect: Rect, orientation: Orientation, min: f32, max: f32) -> Self {
        if !min.is_finite() || !max.is_finite() {
            log::warn!("Slider range {}..{} is not finite, using defaults", min, max);
        }
        let min = if min.is_finite() { min } else { 0.0 };
        let max = if max.is_finite() { max } else { 1.0 };
        let (min, max) = if min <= max { (min, max) } else { (max, min) };
        Self {
            rect,
            orientation,
            min,
            max,
            value: min,
            knob: InteractionState::Idle,
        }
    }

    /// Create a horizontal slider.
    pub fn horizontal(rect: Rect, min: f32, max: f32) -> Self {
        Self::new(rect, Orientation::Horizontal, min, max)
    }

    /// Create a vertical slider.
    pub fn vertical(rect: Rect, min: f32, max: f32) -> Self {
        Self::new(rect, Orientation::Vertical, min, max)
    }

    /// Set the initial value (clamped).
    pub fn with_value(mut self, value: f32) -> Self {
        self.set_value(value);
        self
    }

    /// Current value.
    pub fn value(&self) -> f32 {
        self.value
    }

    /// Set the value, clamped to the range. `NaN` is ignored.
    pub fn set_value(&mut self, value: f32) {
        if !value.is_nan() {
            self.value = value.clamp(self.min, self.max);
        }
    }

    /// Value as a fraction of the range.
    pub fn fraction(&self) -> f32 {
        if self.max == self.min {
            0.0
        } else {
            (self.value - self.min) / (self.max - self.min)
        }
    }

    /// Slider bounds.
    pub fn rect(&self) -> Rect {
        self.rect
    }

    /// Move or resize the slider.
    pub fn set_rect(&mut self, rect: Rect) {
        self.rect = rect;
    }

    /// Slider orientation.
    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Pointer state of the knob.
    pub fn state(&self) -> InteractionState {
        self.knob
    }

    /// Whether the pointer is over the knob.
    pub fn is_hovered(&self) -> bool {
        self.knob.is_hovered()
    }

    /// Whether the knob is being dragged.
    pub fn is_dragging(&self) -> bool {
        self.knob.is_pressed()
    }

    /// The track, [TRACK_THICKNESS] thick and centered across the slider.
    pub fn track_rect(&self) -> Rect {
        let (cx, cy) = self.rect.center();
        match self.orientation {
            Orientation::Horizontal => Rect::new(
                self.rect.x,
                cy - TRACK_THICKNESS as i32 / 2,
                self.rect.width,
                TRACK_THICKNESS,
            ),
            Orientation::Vertical => Rect::new(
                cx - TRACK_THICKNESS as i32 / 2,
                self.rect.y,
                TRACK_THICKNESS,
                self.rect.height,
            ),
        }
    }

    /// Knob radius, derived from the slider's cross-axis extent.
    pub fn knob_radius(&self) -> u32 {
        knob_radius(match self.orientation {
            Orientation::Horizontal => self.rect.height,
            Orientation::Vertical => self.rect.width,
        })
    }

    /// Knob center for the current value.
    pub fn knob_center(&self) -> (i32, i32) {
        let (cx, cy) = self.rect.center();
        let fraction = self.fraction();
        match self.orientation {
            Orientation::Horizontal => (self.rect.x + (fraction * self.rect.width as f32) as i32, cy),
            Orientation::Vertical => (cx, self.rect.bottom() - (fraction * self.rect.height as f32) as i32),
        }
    }

    /// The square the knob occupies; also its hit area.
    pub fn knob_rect(&self) -> Rect {
        let (x, y) = self.knob_center();
        let diameter = self.knob_radius() * 2;
        Rect::centered(x, y, diameter, diameter)
    }

    /// Value the pointer position maps to, clamped to the range.
    pub fn value_at(&self, (x, y): (i32, i32)) -> f32 {
        let fraction = match self.orientation {
            Orientation::Horizontal if self.rect.width > 0 => {
                (x - self.rect.x) as f32 / self.rect.width as f32
            },
            Orientation::Vertical if self.rect.height > 0 => {
                (self.rect.bottom() - y) as f32 / self.rect.height as f32
            },
            _ => 0.0,
        };
        self.min + fraction.clamp(0.0, 1.0) * (self.max - self.min)
    }

    /// Feed a pointer event. Returns the new value when it changed.
    ///
    /// Pressing on the knob starts a drag and jumps to the pointer; moving
    /// while dragging follows the pointer; releasing ends the drag.
    pub fn handle(&mut self, event: PointerEvent) -> Option<f32> {
        let position = event.position();
        let before = self.value;

        match event {
            PointerEvent::Pressed(..) => {
                self.knob = self.knob.on_press(self.knob_rect().contains(position));
                if self.knob.is_pressed() {
                    log::trace!("Slider drag started at {:?}", position);
                    self.set_value(self.value_at(position));
                }
            },
            PointerEvent::Moved(..) => {
                if self.knob.is_pressed() {
                    self.set_value(self.value_at(position));
                } else {
                    self.knob = self.knob.on_move(self.knob_rect().contains(position));
                }
            },
            PointerEvent::Released(..) => {
                self.knob = self.knob.on_release(self.knob_rect().contains(position)).0;
            },
        }

        (self.value != before).then_some(self.value)
    }

    /// Paint the slider for the skin's active theme.
    pub fn draw(&self, frame: &mut Frame, skin: &mut Skin) {
        let visual = slider_visual(skin.colors());
        self.draw_track(frame, skin, &visual);
        self.draw_fill(frame, &visual);
        self.draw_knob(frame, skin, &visual);
    }

    fn draw_track(&self, frame: &mut Frame, skin: &mut Skin, visual: &SliderVisual) {
        let track = self.track_rect();
        let image = match self.orientation {
            Orientation::Horizontal => skin.asset_surface(AssetKey::SliderTrack, track.size(), false),
            Orientation::Vertical => skin
                .asset_surface(AssetKey::SliderTrackVertical, track.size(), false)
                .or_else(|| skin.asset_surface(AssetKey::SliderTrack, track.size(), false)),
        };

        match image {
            Some(image) => frame.blit(&image, track.x, track.y),
            None => {
                frame.fill_rect(track, visual.track);
                frame.stroke_rect(track, visual.outline, TRACK_BORDER_WIDTH);
            },
        }
    }

    fn draw_fill(&self, frame: &mut Frame, visual: &SliderVisual) {
        let track = self.track_rect();
        let (kx, ky) = self.knob_center();
        let fill = match self.orientation {
            Orientation::Horizontal => Rect::new(track.x, track.y, (kx - track.x).max(0) as u32, track.height),
            Orientation::Vertical => Rect::new(track.x, ky, track.width, (track.bottom() - ky).max(0) as u32),
        };
        frame.fill_rect(fill, visual.fill);
    }

    fn draw_knob(&self, frame: &mut Frame, skin: &mut Skin, visual: &SliderVisual) {
        let radius = self.knob_radius();
        let center = self.knob_center();
        let size = match self.orientation {
            Orientation::Horizontal => {
                let edge = (radius * 2).min(MAX_KNOB_IMAGE);
                (edge, edge)
            },
            Orientation::Vertical => (32, MAX_KNOB_IMAGE),
        };

        let highlighted = self.knob != InteractionState::Idle;
        match skin.asset_surface(AssetKey::SliderKnob, size, highlighted) {
            Some(image) => frame.blit_centered(&image, Rect::centered(center.0, center.1, size.0, size.1)),
            None => {
                frame.fill_circle(center, radius, visual.knob);
                frame.stroke_circle(center, radius, visual.outline, KNOB_RING_WIDTH);
            },
        }
    }
}
