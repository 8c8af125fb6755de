use std::sync::{Arc, Mutex, MutexGuard};

use crate::interaction::InteractionEvent;

use super::PinchContext;

/// A [`PinchContext`] that can be fed from more than one thread.
///
/// Slot assignment has to be atomic with the two-slot capacity check, otherwise two new pinches
/// racing each other could both claim `left`. Every operation here holds one lock for its whole
/// duration. Cloning is cheap and shares the same tracker.
#[derive(Debug, Clone, Default)]
pub struct SharedPinchContext {
    inner: Arc<Mutex<PinchContext>>,
}

impl SharedPinchContext {
    /// Wrap an existing context
    pub fn new(pinch_context: PinchContext) -> Self {
        Self {
            inner: Arc::new(Mutex::new(pinch_context)),
        }
    }

    /// See [`PinchContext::process_event`]
    pub fn process_event(&self, event: &InteractionEvent<'_>) {
        self.lock().process_event(event);
    }

    /// See [`PinchContext::process_events`]. The whole batch is processed under one lock.
    pub fn process_events(&self, events: &[InteractionEvent<'_>]) {
        self.lock().process_events(events);
    }

    /// Copy out the current state, eg. once per frame for the renderer
    pub fn snapshot(&self) -> PinchContext {
        self.lock().clone()
    }

    /// Run `f` against the context while holding the lock
    pub fn with<R>(&self, f: impl FnOnce(&PinchContext) -> R) -> R {
        f(&self.lock())
    }

    // Processing never panics halfway through a mutation, so a poisoned lock still holds a
    // consistent context.
    fn lock(&self) -> MutexGuard<'_, PinchContext> {
        self.inner
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}
