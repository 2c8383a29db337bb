//! The animator seam and a frame-driven reference implementation.

use std::cell::RefCell;
use std::rc::Rc;

use momentum_ui_graphics::Point;

use crate::animation::{Easing, Lerp};

/// One-shot callback fired when the transition it was registered with ends.
pub type TransitionEnd = Box<dyn FnOnce()>;

/// The rendering collaborator that actually moves the surface.
///
/// Handles are shared between the gesture driver and completion callbacks,
/// so every method takes `&self`.
pub trait Animator {
    /// Configures the duration, in seconds, used by the next [`Animator::set_offset`].
    fn set_transition_duration(&self, seconds: f32);

    /// Moves the surface to `target` over the most recently configured duration.
    ///
    /// `on_complete` fires exactly once when this transition finishes. If the
    /// transition is superseded by another `set_offset` first, it never fires.
    fn set_offset(&self, target: Point, on_complete: Option<TransitionEnd>);

    /// The offset the surface is rendered at right now, mid-transition included.
    fn rendered_offset(&self) -> Point;
}

struct ActiveTransition {
    from: Point,
    target: Point,
    duration_nanos: u64,
    start_time_nanos: Option<u64>,
    on_complete: Option<TransitionEnd>,
}

struct TransitionInner {
    rendered: Point,
    duration_secs: f32,
    easing: Easing,
    active: Option<ActiveTransition>,
}

/// Interpolates the surface offset on frame ticks, the way a compositor
/// transition would.
///
/// A zero (or negative) duration moves immediately and completes in the same
/// call. Retargeting mid-flight restarts from the rendered position and drops
/// the superseded completion callback.
#[derive(Clone)]
pub struct TransitionAnimator {
    inner: Rc<RefCell<TransitionInner>>,
}

impl TransitionAnimator {
    pub fn new(initial: Point) -> Self {
        Self::with_easing(initial, Easing::default())
    }

    pub fn with_easing(initial: Point, easing: Easing) -> Self {
        Self {
            inner: Rc::new(RefCell::new(TransitionInner {
                rendered: initial,
                duration_secs: 0.0,
                easing,
                active: None,
            })),
        }
    }

    /// Duration the next `set_offset` will use.
    pub fn transition_duration(&self) -> f32 {
        self.inner.borrow().duration_secs
    }

    /// Final offset of the in-flight transition, or the rendered offset when idle.
    pub fn target(&self) -> Point {
        let inner = self.inner.borrow();
        inner
            .active
            .as_ref()
            .map_or(inner.rendered, |active| active.target)
    }

    pub fn is_running(&self) -> bool {
        self.inner.borrow().active.is_some()
    }

    /// Advances the in-flight transition to `frame_time_nanos`.
    ///
    /// The first frame after a transition starts anchors its start time.
    /// Returns `true` when a transition finished on this frame.
    pub fn advance(&self, frame_time_nanos: u64) -> bool {
        let finished = {
            let mut inner = self.inner.borrow_mut();
            let easing = inner.easing;
            let Some(active) = inner.active.as_mut() else {
                return false;
            };

            let start_time = *active.start_time_nanos.get_or_insert(frame_time_nanos);
            let elapsed = frame_time_nanos.saturating_sub(start_time);
            let duration = active.duration_nanos.max(1);
            let linear_progress = (elapsed as f32 / duration as f32).clamp(0.0, 1.0);
            let value = active.from.lerp(&active.target, easing.transform(linear_progress));

            if linear_progress >= 1.0 {
                let target = active.target;
                let on_complete = active.on_complete.take();
                inner.rendered = target;
                inner.active = None;
                Some(on_complete)
            } else {
                inner.rendered = value;
                None
            }
        };

        match finished {
            Some(on_complete) => {
                log::trace!("transition finished at {:?}", self.rendered_offset());
                if let Some(callback) = on_complete {
                    callback();
                }
                true
            }
            None => false,
        }
    }
}

impl Animator for TransitionAnimator {
    fn set_transition_duration(&self, seconds: f32) {
        self.inner.borrow_mut().duration_secs = seconds;
    }

    fn set_offset(&self, target: Point, on_complete: Option<TransitionEnd>) {
        let immediate = {
            let mut inner = self.inner.borrow_mut();
            let duration_secs = inner.duration_secs;
            if let Some(superseded) = inner.active.take() {
                log::trace!(
                    "transition to {:?} superseded by {:?}",
                    superseded.target,
                    target
                );
            }

            if duration_secs > 0.0 && duration_secs.is_finite() && inner.rendered != target {
                let from = inner.rendered;
                inner.active = Some(ActiveTransition {
                    from,
                    target,
                    duration_nanos: (duration_secs as f64 * 1_000_000_000.0) as u64,
                    start_time_nanos: None,
                    on_complete,
                });
                None
            } else {
                inner.rendered = target;
                Some(on_complete)
            }
        };

        // Nothing to interpolate: complete now, outside the borrow so the
        // callback may issue the next transition.
        if let Some(Some(callback)) = immediate {
            callback();
        }
    }

    fn rendered_offset(&self) -> Point {
        self.inner.borrow().rendered
    }
}
