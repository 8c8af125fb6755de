use super::hand::Handedness;

/// A component added to an entity that should follow one of the tracked pinches.
/// Requires `pinch_pointers_system`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PinchPointer {
    /// Which hand's pinch is this pointer following?
    pub handedness: Handedness,
    /// Is that hand pinching right now?
    pub is_pinching: bool,
}

impl PinchPointer {
    /// Shortcut helper to create a pointer following the left pinch
    pub fn left() -> PinchPointer {
        PinchPointer {
            handedness: Handedness::Left,
            is_pinching: false,
        }
    }

    /// Shortcut helper to create a pointer following the right pinch
    pub fn right() -> PinchPointer {
        PinchPointer {
            handedness: Handedness::Right,
            is_pinching: false,
        }
    }
}
