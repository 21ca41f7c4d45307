/// A pointer event in frame coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerEvent {
    /// The pointer moved to a point.
    Moved(i32, i32),
    /// The primary button went down at a point.
    Pressed(i32, i32),
    /// The primary button went up at a point.
    Released(i32, i32),
}

impl PointerEvent {
    /// Where the event happened.
    pub fn position(self) -> (i32, i32) {
        match self {
            PointerEvent::Moved(x, y) | PointerEvent::Pressed(x, y) | PointerEvent::Released(x, y) => {
                (x, y)
            },
        }
    }
}
