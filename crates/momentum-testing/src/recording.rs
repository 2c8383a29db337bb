//! An [`Animator`] that records what it is asked to do.
//!
//! Nothing moves until the test says so: completions are held until
//! [`RecordingAnimator::complete`] fires them.

use std::cell::RefCell;
use std::rc::Rc;

use momentum_animation::{Animator, TransitionEnd};
use momentum_ui_graphics::Point;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum AnimatorCall {
    Duration(f32),
    Offset { target: Point, awaits: bool },
}

#[derive(Default)]
struct RecordingInner {
    calls: Vec<AnimatorCall>,
    rendered: Point,
    pending: Option<TransitionEnd>,
}

#[derive(Clone, Default)]
pub struct RecordingAnimator {
    inner: Rc<RefCell<RecordingInner>>,
}

impl RecordingAnimator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn calls(&self) -> Vec<AnimatorCall> {
        self.inner.borrow().calls.clone()
    }

    /// Every `set_offset` target, in order.
    pub fn offsets(&self) -> Vec<Point> {
        self.inner
            .borrow()
            .calls
            .iter()
            .filter_map(|call| match call {
                AnimatorCall::Offset { target, .. } => Some(*target),
                AnimatorCall::Duration(_) => None,
            })
            .collect()
    }

    /// The most recent `set_transition_duration`, if any.
    pub fn last_duration(&self) -> Option<f32> {
        self.inner
            .borrow()
            .calls
            .iter()
            .rev()
            .find_map(|call| match call {
                AnimatorCall::Duration(seconds) => Some(*seconds),
                AnimatorCall::Offset { .. } => None,
            })
    }

    pub fn clear(&self) {
        self.inner.borrow_mut().calls.clear();
    }

    pub fn has_pending_completion(&self) -> bool {
        self.inner.borrow().pending.is_some()
    }

    /// Overrides what the surface reports as drawn, as if a transition had
    /// been interrupted part way.
    pub fn set_rendered(&self, offset: Point) {
        self.inner.borrow_mut().rendered = offset;
    }

    /// Fires the pending completion. Returns `false` when none was pending.
    pub fn complete(&self) -> bool {
        let pending = self.inner.borrow_mut().pending.take();
        match pending {
            Some(callback) => {
                callback();
                true
            }
            None => false,
        }
    }
}

impl Animator for RecordingAnimator {
    fn set_transition_duration(&self, seconds: f32) {
        self.inner
            .borrow_mut()
            .calls
            .push(AnimatorCall::Duration(seconds));
    }

    fn set_offset(&self, target: Point, on_complete: Option<TransitionEnd>) {
        let mut inner = self.inner.borrow_mut();
        inner.calls.push(AnimatorCall::Offset {
            target,
            awaits: on_complete.is_some(),
        });
        inner.rendered = target;
        // A new transition supersedes the old one and its completion.
        inner.pending = on_complete;
    }

    fn rendered_offset(&self) -> Point {
        self.inner.borrow().rendered
    }
}
