//! Gesture-scoped routing of move/end/cancel events.
//!
//! The target surface always hears `Down`. Everything after that is only
//! routed while a gesture holds a [`TrackingGuard`], so hosts pay nothing for
//! pointer motion while no gesture is active.

use std::cell::Cell;
use std::rc::Rc;

/// Where move/end/cancel listeners get attached for the length of a gesture.
pub trait EventScope {
    fn attach_tracking(&self);
    fn detach_tracking(&self);
}

/// Holds the tracking subscription; dropping it detaches exactly once.
pub struct TrackingGuard {
    scope: Rc<dyn EventScope>,
}

impl TrackingGuard {
    pub fn acquire(scope: Rc<dyn EventScope>) -> Self {
        scope.attach_tracking();
        Self { scope }
    }
}

impl Drop for TrackingGuard {
    fn drop(&mut self) {
        self.scope.detach_tracking();
    }
}

impl std::fmt::Debug for TrackingGuard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TrackingGuard").finish_non_exhaustive()
    }
}

/// In-process [`EventScope`] that records whether tracking is attached.
#[derive(Debug, Default)]
pub struct TrackingRegistry {
    attached: Cell<bool>,
    attach_count: Cell<u32>,
    detach_count: Cell<u32>,
}

impl TrackingRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_attached(&self) -> bool {
        self.attached.get()
    }

    pub fn attach_count(&self) -> u32 {
        self.attach_count.get()
    }

    pub fn detach_count(&self) -> u32 {
        self.detach_count.get()
    }
}

impl EventScope for TrackingRegistry {
    fn attach_tracking(&self) {
        if self.attached.replace(true) {
            log::warn!("tracking attached twice without a detach");
        }
        self.attach_count.set(self.attach_count.get() + 1);
    }

    fn detach_tracking(&self) {
        self.attached.set(false);
        self.detach_count.set(self.detach_count.get() + 1);
    }
}
