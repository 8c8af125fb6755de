use super::{InteractionEvent, InteractionId, InteractionKind, InteractionPhase};

/// What a single event means for the tracker, before looking at any tracker state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PinchDecision {
    /// Not a pinch; nothing to do
    Ignore,
    /// A pinch with this id is starting or still going
    Active(InteractionId),
    /// A pinch with this id has stopped
    Ended(InteractionId),
}

/// Classify an event. Pure, stateless and infallible.
///
/// Only indirect pinches count. An active phase keeps the pinch alive; every other phase ends it.
pub fn classify(event: &InteractionEvent<'_>) -> PinchDecision {
    match (event.kind, event.phase) {
        (InteractionKind::IndirectPinch, InteractionPhase::Active) => {
            PinchDecision::Active(event.id)
        }
        (InteractionKind::IndirectPinch, _) => PinchDecision::Ended(event.id),
        _ => PinchDecision::Ignore,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    pub fn test_classify_indirect_pinch() {
        let id = InteractionId(42);
        let pinch = |phase| InteractionEvent::new(id, InteractionKind::IndirectPinch, phase);

        assert_eq!(
            classify(&pinch(InteractionPhase::Active)),
            PinchDecision::Active(id)
        );
        assert_eq!(
            classify(&pinch(InteractionPhase::Ended)),
            PinchDecision::Ended(id)
        );
        assert_eq!(
            classify(&pinch(InteractionPhase::Cancelled)),
            PinchDecision::Ended(id)
        );
    }

    #[test]
    pub fn test_classify_ignores_other_kinds() {
        let kinds = [
            InteractionKind::Touch,
            InteractionKind::DirectPinch,
            InteractionKind::Pointer,
        ];
        let phases = [
            InteractionPhase::Active,
            InteractionPhase::Ended,
            InteractionPhase::Cancelled,
        ];

        for kind in kinds {
            for phase in phases {
                let event = InteractionEvent::new(InteractionId(1), kind, phase);
                assert_eq!(classify(&event), PinchDecision::Ignore, "{kind:?} {phase:?}");
            }
        }
    }
}
