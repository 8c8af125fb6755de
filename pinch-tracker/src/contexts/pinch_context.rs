use glam::{Quat, Vec3};
use log::{debug, trace, warn};
use serde::Serialize;

use crate::{
    components::Handedness,
    interaction::{
        classify, resolve_device_pose, resolve_selection_ray, DevicePose, InteractionEvent,
        InteractionId, PinchDecision,
    },
};

/// Everything we know about one hand's pinch.
///
/// A slot is only meaningful while it is assigned. Once released, the ray and pose fields keep
/// whatever they last held, so use [`HandSlot::current_selection_ray`] or check
/// [`HandSlot::is_assigned`] before trusting them.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HandSlot {
    assigned_event_id: Option<InteractionId>,
    is_pinching: bool,
    selection_ray_origin: Vec3,
    selection_ray_direction: Vec3,
    pinch_start_position: Vec3,
    pinch_current_position: Vec3,
    pinch_start_angle: Quat,
    pinch_current_angle: Quat,
}

impl Default for HandSlot {
    fn default() -> Self {
        Self {
            assigned_event_id: None,
            is_pinching: false,
            selection_ray_origin: Vec3::ZERO,
            selection_ray_direction: Vec3::ZERO,
            pinch_start_position: Vec3::ZERO,
            pinch_current_position: Vec3::ZERO,
            pinch_start_angle: Quat::IDENTITY,
            pinch_current_angle: Quat::IDENTITY,
        }
    }
}

impl HandSlot {
    /// The interaction currently occupying this slot
    pub fn assigned_event_id(&self) -> Option<InteractionId> {
        self.assigned_event_id
    }

    /// Is an interaction occupying this slot?
    pub fn is_assigned(&self) -> bool {
        self.assigned_event_id.is_some()
    }

    /// Is this hand pinching right now?
    pub fn is_pinching(&self) -> bool {
        self.is_pinching
    }

    /// Last known ray origin. May be stale if the slot is unassigned.
    pub fn selection_ray_origin(&self) -> Vec3 {
        self.selection_ray_origin
    }

    /// Last known ray direction, unit length once populated. May be stale if the slot is unassigned.
    pub fn selection_ray_direction(&self) -> Vec3 {
        self.selection_ray_direction
    }

    /// The ray as `(origin, direction)`, but only while the slot is assigned and has seen a ray
    pub fn current_selection_ray(&self) -> Option<(Vec3, Vec3)> {
        if !self.is_assigned() || self.selection_ray_direction == Vec3::ZERO {
            return None;
        }

        Some((self.selection_ray_origin, self.selection_ray_direction))
    }

    /// Where the pinch started
    pub fn pinch_start_position(&self) -> Vec3 {
        self.pinch_start_position
    }

    /// Where the pinch is now
    pub fn pinch_current_position(&self) -> Vec3 {
        self.pinch_current_position
    }

    /// Orientation when the pinch started
    pub fn pinch_start_angle(&self) -> Quat {
        self.pinch_start_angle
    }

    /// Orientation now
    pub fn pinch_current_angle(&self) -> Quat {
        self.pinch_current_angle
    }

    fn assign(&mut self, id: InteractionId, pose: DevicePose) {
        self.assigned_event_id = Some(id);
        self.is_pinching = true;
        self.pinch_start_position = pose.position;
        self.pinch_current_position = pose.position;
        self.pinch_start_angle = pose.rotation;
        self.pinch_current_angle = pose.rotation;
    }

    fn update_current(&mut self, pose: DevicePose) {
        self.pinch_current_position = pose.position;
        self.pinch_current_angle = pose.rotation;
    }

    fn set_selection_ray(&mut self, origin: Vec3, direction: Vec3) {
        self.selection_ray_origin = origin;
        self.selection_ray_direction = direction;
    }

    fn release(&mut self) {
        self.assigned_event_id = None;
        self.is_pinching = false;
    }
}

/// Counts of everything the tracker has seen, including the anomalies it quietly recovered from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct PinchDiagnostics {
    /// Every event passed in, pinch or not
    pub events_processed: u64,
    /// Events that were not indirect pinches
    pub ignored_events: u64,
    /// New pinches that were given a slot
    pub pinch_starts: u64,
    /// Active events for a pinch that already had a slot
    pub continuations: u64,
    /// End events that released a slot
    pub pinch_ends: u64,
    /// Times a third pinch showed up and both slots were dropped
    pub overflow_resets: u64,
    /// End events for ids we weren't tracking
    pub stale_ends: u64,
    /// Selection rays whose direction could not be normalized
    pub degenerate_rays: u64,
    /// Device poses that came out of conversion with non-finite values
    pub degenerate_poses: u64,
}

/// Context that resolves interaction events into at most two tracked pinches.
///
/// Create one per session and feed it every event in the order the host delivered them. `left` is
/// always filled first; `right` is only used while `left` is occupied. If a third distinct pinch
/// arrives while both are occupied, both slots are dropped and the event is discarded, so the
/// next pinches start from a clean slate.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PinchContext {
    left: HandSlot,
    right: HandSlot,
    last_observed_position: Vec3,
    pinches_are_targeted: bool,
    diagnostics: PinchDiagnostics,
}

impl PinchContext {
    /// Process a single event. Never fails; anomalies are recovered from and counted in
    /// [`PinchContext::diagnostics`].
    pub fn process_event(&mut self, event: &InteractionEvent<'_>) {
        self.diagnostics.events_processed += 1;
        self.pinches_are_targeted = event.target.is_some();

        match classify(event) {
            PinchDecision::Ignore => {
                trace!("[PINCH_CONTEXT] Ignoring {:?} event {:?}", event.kind, event.id);
                self.diagnostics.ignored_events += 1;
            }
            PinchDecision::Active(id) => self.pinch_active(id, event),
            PinchDecision::Ended(id) => self.pinch_ended(id),
        }
    }

    /// Process a batch of events in order, exactly as if each were passed to
    /// [`PinchContext::process_event`].
    pub fn process_events(&mut self, events: &[InteractionEvent<'_>]) {
        for event in events {
            self.process_event(event);
        }
    }

    /// The left hand's slot
    pub fn left(&self) -> &HandSlot {
        &self.left
    }

    /// The right hand's slot
    pub fn right(&self) -> &HandSlot {
        &self.right
    }

    /// Get a slot by handedness
    pub fn slot(&self, handedness: Handedness) -> &HandSlot {
        match handedness {
            Handedness::Left => &self.left,
            Handedness::Right => &self.right,
        }
    }

    /// Which slot, if any, is tracking this interaction?
    pub fn handedness_of(&self, id: InteractionId) -> Option<Handedness> {
        if self.left.assigned_event_id == Some(id) {
            Some(Handedness::Left)
        } else if self.right.assigned_event_id == Some(id) {
            Some(Handedness::Right)
        } else {
            None
        }
    }

    /// The tip of the most recently resolved selection ray, ie. `origin + direction`
    pub fn last_observed_position(&self) -> Vec3 {
        self.last_observed_position
    }

    /// Did the most recent event carry a conversion context?
    ///
    /// When `true`, slot coordinates are in the target's parent frame; otherwise they are the raw
    /// local values the host delivered.
    pub fn pinches_are_targeted(&self) -> bool {
        self.pinches_are_targeted
    }

    /// Counters describing everything processed so far
    pub fn diagnostics(&self) -> PinchDiagnostics {
        self.diagnostics
    }

    fn slot_mut(&mut self, handedness: Handedness) -> &mut HandSlot {
        match handedness {
            Handedness::Left => &mut self.left,
            Handedness::Right => &mut self.right,
        }
    }

    fn pinch_active(&mut self, id: InteractionId, event: &InteractionEvent<'_>) {
        let (handedness, is_new_pinch) = match self.handedness_of(id) {
            Some(handedness) => (handedness, false),
            None if !self.left.is_assigned() => (Handedness::Left, true),
            None if !self.right.is_assigned() => (Handedness::Right, true),
            None => {
                self.reset_after_overflow(id);
                return;
            }
        };

        let selection_ray = event.selection_ray.and_then(|ray| {
            let resolved = resolve_selection_ray(&ray, event.target);
            if resolved.is_none() {
                debug!(
                    "[PINCH_CONTEXT] Selection ray for {:?} has no usable direction: {:?}",
                    id, ray
                );
                self.diagnostics.degenerate_rays += 1;
            }
            resolved
        });
        let device_pose = event.device_pose.and_then(|pose| {
            let resolved = resolve_device_pose(&pose, event.target);
            if !resolved.position.is_finite() || !resolved.rotation.is_finite() {
                debug!(
                    "[PINCH_CONTEXT] Device pose for {:?} resolved to {:?}, skipping",
                    id, resolved
                );
                self.diagnostics.degenerate_poses += 1;
                return None;
            }
            Some(resolved)
        });

        if let Some((origin, direction)) = selection_ray {
            self.last_observed_position = origin + direction;
        }

        if is_new_pinch {
            debug!("[PINCH_CONTEXT] {:?} assigned to {:?}", id, handedness);
            self.diagnostics.pinch_starts += 1;
        } else {
            trace!("[PINCH_CONTEXT] {:?} continuing on {:?}", id, handedness);
            self.diagnostics.continuations += 1;
        }

        let slot = self.slot_mut(handedness);
        if is_new_pinch {
            slot.assign(id, device_pose.unwrap_or_default());
        } else {
            slot.is_pinching = true;
            if let Some(device_pose) = device_pose {
                slot.update_current(device_pose);
            }
        }

        if let Some((origin, direction)) = selection_ray {
            slot.set_selection_ray(origin, direction);
        }
    }

    fn pinch_ended(&mut self, id: InteractionId) {
        match self.handedness_of(id) {
            Some(handedness) => {
                debug!("[PINCH_CONTEXT] {:?} released from {:?}", id, handedness);
                self.slot_mut(handedness).release();
                self.diagnostics.pinch_ends += 1;
            }
            None => {
                debug!("[PINCH_CONTEXT] Ignoring end for untracked {:?}", id);
                self.diagnostics.stale_ends += 1;
            }
        }
    }

    fn reset_after_overflow(&mut self, id: InteractionId) {
        warn!(
            "[PINCH_CONTEXT] Third pinch {:?} while left is {:?} and right is {:?}, dropping both",
            id, self.left.assigned_event_id, self.right.assigned_event_id
        );
        self.left.release();
        self.right.release();
        self.diagnostics.overflow_resets += 1;
    }
}
