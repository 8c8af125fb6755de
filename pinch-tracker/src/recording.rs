//! Recorded event streams, stored as JSON Lines with one [`EventRecord`] per line.
//!
//! ```text
//! {"id": 1, "kind": "indirectPinch", "phase": "active", "selection_ray": {"origin": [0, 1, 0], "direction": [0, 0, -1]}}
//! {"id": 1, "kind": "indirectPinch", "phase": "ended"}
//! ```

use std::{
    fs::File,
    io::{BufRead, BufReader, Write},
    path::Path,
};

use glam::{Affine3A, Quat, Vec3};
use serde::{Deserialize, Serialize};

use crate::{
    interaction::{
        DevicePose, InteractionEvent, InteractionId, InteractionKind, InteractionPhase,
        SelectionRay, SpaceConverter,
    },
    PinchError, PinchResult,
};

/// The parent frame an event was anchored to when it was recorded
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TargetFrame {
    /// Translation of the parent from local transform
    pub translation: Vec3,
    /// Rotation of the parent from local transform
    #[serde(default = "identity")]
    pub rotation: Quat,
    /// Scale of the parent from local transform
    #[serde(default = "one")]
    pub scale: Vec3,
}

impl TargetFrame {
    /// The `parent_from_local` transform this frame describes
    pub fn parent_from_local(&self) -> Affine3A {
        Affine3A::from_scale_rotation_translation(self.scale, self.rotation, self.translation)
    }
}

// Composed directly from the parts, so converting never decomposes a matrix.
impl SpaceConverter for TargetFrame {
    fn convert_point(&self, point: Vec3) -> Vec3 {
        self.rotation * (self.scale * point) + self.translation
    }

    fn convert_rotation(&self, rotation: Quat) -> Quat {
        self.rotation * rotation
    }
}

/// An owned, serializable copy of an [`InteractionEvent`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventRecord {
    /// See [`InteractionEvent::id`]
    pub id: InteractionId,
    /// See [`InteractionEvent::kind`]
    pub kind: InteractionKind,
    /// See [`InteractionEvent::phase`]
    pub phase: InteractionPhase,
    /// See [`InteractionEvent::selection_ray`]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selection_ray: Option<SelectionRay>,
    /// See [`InteractionEvent::device_pose`]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub device_pose: Option<DevicePose>,
    /// The frame standing in for [`InteractionEvent::target`]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target: Option<TargetFrame>,
}

impl EventRecord {
    /// Borrow this record as an event the tracker can process
    pub fn to_event(&self) -> InteractionEvent<'_> {
        InteractionEvent {
            id: self.id,
            kind: self.kind,
            phase: self.phase,
            selection_ray: self.selection_ray,
            device_pose: self.device_pose,
            target: self
                .target
                .as_ref()
                .map(|target| target as &dyn SpaceConverter),
        }
    }

    /// Record an event. A target can't be recovered from an arbitrary converter, so the caller
    /// supplies the frame it stands for.
    pub fn from_event(event: &InteractionEvent<'_>, target: Option<TargetFrame>) -> Self {
        Self {
            id: event.id,
            kind: event.kind,
            phase: event.phase,
            selection_ray: event.selection_ray,
            device_pose: event.device_pose,
            target,
        }
    }
}

/// Parse a recording from anything that can be read line by line
pub fn read_recording(reader: impl BufRead) -> PinchResult<Vec<EventRecord>> {
    let mut records = Vec::new();
    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        let record = serde_json::from_str(&line).map_err(|source| PinchError::InvalidRecord {
            line: index + 1,
            source,
        })?;
        records.push(record);
    }

    if records.is_empty() {
        return Err(PinchError::EmptyRecording);
    }

    Ok(records)
}

/// Load a recording from disk
pub fn load_recording(path: impl AsRef<Path>) -> PinchResult<Vec<EventRecord>> {
    let file = File::open(path)?;
    read_recording(BufReader::new(file))
}

/// Write records out in the format [`read_recording`] expects
pub fn write_recording(mut writer: impl Write, records: &[EventRecord]) -> PinchResult<()> {
    for record in records {
        serde_json::to_writer(&mut writer, record).map_err(std::io::Error::from)?;
        writeln!(writer)?;
    }
    Ok(())
}

fn identity() -> Quat {
    Quat::IDENTITY
}

fn one() -> Vec3 {
    Vec3::ONE
}
