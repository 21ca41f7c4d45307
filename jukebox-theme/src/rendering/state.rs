use crate::asset::VisualState;

/// Pointer interaction state of a control.
///
/// `Idle -> Hovered` on enter, `Hovered -> Idle` on leave, `Hovered ->
/// Pressed` on button-down, `Pressed -> Hovered` (or `Idle` if the pointer
/// left meanwhile) on button-up.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum InteractionState {
    /// Pointer elsewhere.
    #[default]
    Idle,
    /// Pointer over the control.
    Hovered,
    /// Button held down after pressing inside the control.
    Pressed,
}

impl InteractionState {
    /// Which asset/color variant to draw.
    pub fn visual_state(self) -> VisualState {
        match self {
            InteractionState::Idle => VisualState::Normal,
            InteractionState::Hovered => VisualState::Hover,
            InteractionState::Pressed => VisualState::Pressed,
        }
    }

    /// Whether the pointer is over an unpressed control.
    pub fn is_hovered(self) -> bool {
        matches!(self, InteractionState::Hovered)
    }

    /// Whether the control is held down.
    pub fn is_pressed(self) -> bool {
        matches!(self, InteractionState::Pressed)
    }

    /// Pointer moved; `inside` tells whether it is over the control.
    pub fn on_move(self, inside: bool) -> Self {
        match (self, inside) {
            (InteractionState::Idle, true) => InteractionState::Hovered,
            (InteractionState::Hovered, false) => InteractionState::Idle,
            (state, _) => state,
        }
    }

    /// Button went down at a point `inside` the control or not.
    pub fn on_press(self, inside: bool) -> Self {
        if inside {
            InteractionState::Pressed
        } else {
            self
        }
    }

    /// Button went up. Returns the next state and whether this completed a click.
    pub fn on_release(self, inside: bool) -> (Self, bool) {
        match self {
            InteractionState::Pressed if inside => (InteractionState::Hovered, true),
            InteractionState::Pressed => (InteractionState::Idle, false),
            state => (state.on_move(inside), false),
        }
    }
}
