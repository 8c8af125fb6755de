use serde::{Deserialize, Serialize};

/// A component that represents the "side" or "handedness" that an entity is on
/// Used by `PinchContext` to name its slots and by `PinchPointer` to pick which slot to follow
#[derive(Debug, PartialEq, Clone, Copy, Eq, Hash, Serialize, Deserialize)]
pub enum Handedness {
    /// Left hand side
    Left,
    /// Right hand side
    Right,
}
