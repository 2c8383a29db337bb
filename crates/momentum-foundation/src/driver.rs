//! Wires a [`Scrollable`] to a surface, an animator and an event scope.
//!
//! The state machine only describes what should happen; [`ScrollDriver`]
//! applies those effects. Momentum completions come back asynchronously
//! through the animator, so the scrollable lives behind `Rc<RefCell<_>>` and
//! completion callbacks hold a `Weak` handle to it.

use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

use momentum_animation::{Animator, TransitionEnd};
use momentum_ui_graphics::Point;

use crate::bounds::ScrollBounds;
use crate::config::{ScrollConfig, ScrollConfigError};
use crate::nodes::input::tracking::{EventScope, TrackingGuard};
use crate::nodes::input::types::{PointerEvent, PointerEventKind};
use crate::scrollable::{AnimationCommand, Effect, GestureOutcome, GesturePhase, Scrollable};
use crate::surface::{ScrollSurface, SurfaceMetrics};

/// Incremented on every press. A completion issued under an older gesture is
/// stale and must not advance the state machine.
type GestureGeneration = Rc<Cell<u64>>;

pub struct ScrollDriver<S, A>
where
    S: ScrollSurface,
    A: Animator + Clone + 'static,
{
    scrollable: Rc<RefCell<Scrollable>>,
    surface: S,
    animator: A,
    scope: Rc<dyn EventScope>,
    tracking: Option<TrackingGuard>,
    generation: GestureGeneration,
}

impl<S, A> ScrollDriver<S, A>
where
    S: ScrollSurface,
    A: Animator + Clone + 'static,
{
    pub fn new(
        surface: S,
        animator: A,
        scope: Rc<dyn EventScope>,
        config: ScrollConfig,
    ) -> Result<Self, ScrollConfigError> {
        Ok(Self {
            scrollable: Rc::new(RefCell::new(Scrollable::try_new(config)?)),
            surface,
            animator,
            scope,
            tracking: None,
            generation: Rc::new(Cell::new(0)),
        })
    }

    /// Feeds one pointer event through the state machine and applies the
    /// resulting effects.
    ///
    /// Presses are always handled. Moves, releases and cancels are only routed
    /// while a gesture holds tracking, mirroring listeners that exist only for
    /// the length of a gesture.
    pub fn dispatch(&mut self, event: &PointerEvent) -> Option<GestureOutcome> {
        if event.kind != PointerEventKind::Down && self.tracking.is_none() {
            log::trace!("{:?} dropped: no gesture is tracking", event.kind);
            return None;
        }
        if event.kind == PointerEventKind::Down {
            self.generation.set(self.generation.get().wrapping_add(1));
            log::debug!(
                "{:?} press {} at {:?}",
                event.pointer_type,
                event.id,
                event.position
            );
        }

        let transition = {
            let surface = &self.surface;
            self.scrollable
                .borrow_mut()
                .handle(event, || SurfaceMetrics::read(surface))
        };

        for effect in transition.effects {
            match effect {
                Effect::AcquireTracking => {
                    if self.tracking.is_none() {
                        self.tracking = Some(TrackingGuard::acquire(Rc::clone(&self.scope)));
                    }
                }
                Effect::ReleaseTracking => {
                    self.tracking = None;
                }
                Effect::SuppressDefault => event.consume(),
                Effect::Animate(command) => {
                    issue(&self.animator, &self.scrollable, &self.generation, command)
                }
            }
        }

        if let Some(outcome) = &transition.outcome {
            log::debug!("gesture ended: {:?}", outcome);
        }
        transition.outcome
    }

    /// Logical offset of the content.
    pub fn offset(&self) -> Point {
        self.scrollable.borrow().current()
    }

    pub fn phase(&self) -> GesturePhase {
        self.scrollable.borrow().phase()
    }

    pub fn bounds(&self) -> ScrollBounds {
        self.scrollable.borrow().bounds()
    }

    pub fn is_at_rest(&self) -> bool {
        self.scrollable.borrow().is_at_rest()
    }

    pub fn is_tracking(&self) -> bool {
        self.tracking.is_some()
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    pub fn animator(&self) -> &A {
        &self.animator
    }
}

/// Hands `command` to the animator. Commands that await completion get a
/// callback that reports back to the scrollable and issues whatever follows.
fn issue<A>(
    animator: &A,
    scrollable: &Rc<RefCell<Scrollable>>,
    generation: &GestureGeneration,
    command: AnimationCommand,
) where
    A: Animator + Clone + 'static,
{
    animator.set_transition_duration(command.duration_secs);
    let on_complete = command.await_completion.then(|| {
        completion(
            animator.clone(),
            Rc::downgrade(scrollable),
            Rc::clone(generation),
        )
    });
    animator.set_offset(command.target, on_complete);
}

fn completion<A>(
    animator: A,
    scrollable: Weak<RefCell<Scrollable>>,
    generation: GestureGeneration,
) -> TransitionEnd
where
    A: Animator + Clone + 'static,
{
    let issued_under = generation.get();
    Box::new(move || {
        if generation.get() != issued_under {
            log::trace!("stale transition end ignored");
            return;
        }
        let Some(scrollable) = scrollable.upgrade() else {
            return;
        };
        let transition = scrollable.borrow_mut().transition_finished();
        for command in transition.animations() {
            issue(&animator, &scrollable, &generation, *command);
        }
    })
}

#[cfg(test)]
#[path = "tests/driver_tests.rs"]
mod tests;
