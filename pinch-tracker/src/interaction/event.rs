use glam::{Quat, Vec3};
use serde::{Deserialize, Serialize};

use super::SpaceConverter;

/// Opaque identifier the host assigns to one ongoing interaction.
///
/// Stable for the lifetime of that interaction. Ids can be compared for equality but carry no
/// ordering, so there is intentionally no `Ord` implementation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct InteractionId(pub u64);

/// The kinds of interaction a host can report. Only [`InteractionKind::IndirectPinch`] is tracked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum InteractionKind {
    /// A finger touching a surface directly
    Touch,
    /// A pinch performed on top of the target
    DirectPinch,
    /// A pinch performed away from the target, aimed with gaze or a pointer
    IndirectPinch,
    /// A pointing device such as a trackpad or mouse
    Pointer,
}

/// Where an interaction is in its lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum InteractionPhase {
    /// Started or still ongoing
    Active,
    /// Finished normally
    Ended,
    /// Abandoned by the host
    Cancelled,
}

/// Where a hand, eye or pointer is aiming.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct SelectionRay {
    /// Start of the ray
    pub origin: Vec3,
    /// Aim direction. Not necessarily unit length.
    pub direction: Vec3,
}

impl SelectionRay {
    /// Shortcut helper to create a ray
    pub fn new(origin: Vec3, direction: Vec3) -> Self {
        Self { origin, direction }
    }
}

/// The anchor transform of a pinch
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DevicePose {
    /// Position of the pinch
    pub position: Vec3,
    /// Orientation of the pinch
    pub rotation: Quat,
}

impl Default for DevicePose {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            rotation: Quat::IDENTITY,
        }
    }
}

impl DevicePose {
    /// Shortcut helper to create a pose
    pub fn new(position: Vec3, rotation: Quat) -> Self {
        Self { position, rotation }
    }
}

/// A single interaction event as delivered by the host.
///
/// Rays and poses are expressed in the caller's local space. If the host can anchor the event to
/// a parent frame it supplies `target`, and the tracker converts everything into that frame.
#[derive(Clone, Copy)]
pub struct InteractionEvent<'a> {
    /// Which interaction this event belongs to
    pub id: InteractionId,
    /// What sort of interaction it is
    pub kind: InteractionKind,
    /// Where the interaction is in its lifecycle
    pub phase: InteractionPhase,
    /// Where the interaction is aiming, if known
    pub selection_ray: Option<SelectionRay>,
    /// Where the pinch itself is, if known
    pub device_pose: Option<DevicePose>,
    /// Conversion into the parent frame of whatever the event targeted
    pub target: Option<&'a dyn SpaceConverter>,
}

impl<'a> InteractionEvent<'a> {
    /// Create an event with no ray, pose or target
    pub fn new(id: InteractionId, kind: InteractionKind, phase: InteractionPhase) -> Self {
        Self {
            id,
            kind,
            phase,
            selection_ray: None,
            device_pose: None,
            target: None,
        }
    }

    /// Attach a selection ray
    pub fn with_selection_ray(mut self, selection_ray: SelectionRay) -> Self {
        self.selection_ray = Some(selection_ray);
        self
    }

    /// Attach a device pose
    pub fn with_device_pose(mut self, device_pose: DevicePose) -> Self {
        self.device_pose = Some(device_pose);
        self
    }

    /// Attach a conversion context
    pub fn with_target(mut self, target: &'a dyn SpaceConverter) -> Self {
        self.target = Some(target);
        self
    }
}

impl std::fmt::Debug for InteractionEvent<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InteractionEvent")
            .field("id", &self.id)
            .field("kind", &self.kind)
            .field("phase", &self.phase)
            .field("selection_ray", &self.selection_ray)
            .field("device_pose", &self.device_pose)
            .field("targeted", &self.target.is_some())
            .finish()
    }
}
