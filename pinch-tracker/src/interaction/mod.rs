/// Decides what an event means, without looking at tracker state
pub mod classifier;
/// Event records delivered by the host
pub mod event;
/// Coordinate conversion into a target's parent frame
pub mod space;

pub use classifier::{classify, PinchDecision};
pub use event::{
    DevicePose, InteractionEvent, InteractionId, InteractionKind, InteractionPhase, SelectionRay,
};
pub use space::{resolve_device_pose, resolve_selection_ray, SpaceConverter};
