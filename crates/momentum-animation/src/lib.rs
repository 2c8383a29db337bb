//! Offset transition primitives for Momentum
//!
//! The gesture state machine never moves pixels itself. It hands a target
//! offset and a duration to an [`Animator`]; this crate defines that seam and
//! ships [`TransitionAnimator`], a frame-driven implementation used by the
//! replay app and the test harness.

mod animation;
mod animator;

pub use animation::*;
pub use animator::*;

pub mod prelude {
    pub use crate::animation::{Easing, Lerp};
    pub use crate::animator::{Animator, TransitionAnimator, TransitionEnd};
}
