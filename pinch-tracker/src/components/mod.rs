#![allow(missing_docs)]
pub mod hand;
pub mod local_transform;
pub mod pinch_pointer;

pub use hand::Handedness;
pub use local_transform::LocalTransform;
pub use pinch_pointer::PinchPointer;
