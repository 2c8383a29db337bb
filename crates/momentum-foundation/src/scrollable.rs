//! Gesture-to-motion state machine for a single scrollable surface.
//!
//! [`Scrollable`] turns press/move/release samples into target offsets. It
//! never touches the animator or the event source: every transition returns a
//! [`Transition`] listing the [`Effect`]s the caller must apply, in order.
//!
//! ```text
//!           start                      end (flick)
//!   Idle ──────────▶ Dragging ───────────────────────▶ Releasing
//!    ▲                 │  ▲ move                          │
//!    │  end (tap/drag) │  └──┘                            │ transition_finished
//!    └─────────────────┘ cancel                           │
//!    └────────────────────────────────────────────────────┘
//! ```
//!
//! A `start` is accepted from every phase and abandons whatever the previous
//! gesture left behind, including a pending snap-back.

use momentum_ui_graphics::{Point, Size};
use smallvec::SmallVec;

use crate::bounds::ScrollBounds;
use crate::config::{ScrollConfig, ScrollConfigError};
use crate::nodes::input::types::{PointerEvent, PointerEventKind, PointerId, PointerSample};
use crate::surface::SurfaceMetrics;

/// Instruction for the animator: move to `target` over `duration_secs`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AnimationCommand {
    pub target: Point,
    pub duration_secs: f32,
    /// The caller must report the end of this transition back through
    /// [`Scrollable::transition_finished`].
    pub await_completion: bool,
}

impl AnimationCommand {
    /// Positional set with no easing.
    pub fn immediate(target: Point) -> Self {
        Self::timed(target, 0.0)
    }

    pub fn timed(target: Point, duration_secs: f32) -> Self {
        Self {
            target,
            duration_secs,
            await_completion: false,
        }
    }

    pub fn awaiting_completion(mut self) -> Self {
        self.await_completion = true;
        self
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Effect {
    /// Start routing move/end/cancel events to this scrollable.
    AcquireTracking,
    /// Stop routing move/end/cancel events.
    ReleaseTracking,
    /// The native default action of the current event must not run.
    SuppressDefault,
    Animate(AnimationCommand),
}

/// How a gesture ended.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum GestureOutcome {
    /// Released without a single move.
    Tap { stop: Point },
    /// Released with too little recent motion for momentum.
    Drag { stop: Point },
    /// Released with momentum. `speed` is the per-axis speed in px/ms over
    /// the last move interval, `None` when that interval had zero length.
    Flick { stop: Point, speed: Option<Point> },
    Cancelled,
}

/// Result of feeding one event to a [`Scrollable`].
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Transition {
    pub effects: SmallVec<[Effect; 3]>,
    pub outcome: Option<GestureOutcome>,
}

impl Transition {
    fn push(&mut self, effect: Effect) {
        self.effects.push(effect);
    }

    /// True when the event did not apply to the current phase.
    pub fn is_ignored(&self) -> bool {
        self.effects.is_empty() && self.outcome.is_none()
    }

    pub fn animations(&self) -> impl Iterator<Item = &AnimationCommand> {
        self.effects.iter().filter_map(|effect| match effect {
            Effect::Animate(command) => Some(command),
            _ => None,
        })
    }
}

/// Public view of the state machine's phase.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GesturePhase {
    Idle,
    Dragging,
    Releasing,
}

#[derive(Clone, Copy, Debug, PartialEq)]
struct DragState {
    pointer: PointerId,
    /// Gesture-start touch adjusted so `current = touch_current - start`.
    start: Point,
    /// Offset as of the previous move.
    last: Point,
    touch_start: Point,
    touch_current: Point,
    touch_last: Point,
    /// Time of the most recent move; `None` until the first one.
    moved: Option<f64>,
    viewport: Size,
}

#[derive(Clone, Copy, Debug, PartialEq)]
struct ReleaseState {
    snap_back: bool,
}

#[derive(Clone, Copy, Debug, PartialEq)]
enum Phase {
    Idle,
    Dragging(DragState),
    Releasing(ReleaseState),
}

pub struct Scrollable {
    config: ScrollConfig,
    bounds: ScrollBounds,
    current: Point,
    phase: Phase,
}

impl Default for Scrollable {
    fn default() -> Self {
        Self::new(ScrollConfig::default())
    }
}

impl Scrollable {
    pub fn new(config: ScrollConfig) -> Self {
        Self {
            config,
            bounds: ScrollBounds::default(),
            current: Point::ZERO,
            phase: Phase::Idle,
        }
    }

    pub fn try_new(config: ScrollConfig) -> Result<Self, ScrollConfigError> {
        config.validate()?;
        Ok(Self::new(config))
    }

    pub fn config(&self) -> &ScrollConfig {
        &self.config
    }

    /// The logical offset; may be out of bounds mid-gesture.
    pub fn current(&self) -> Point {
        self.current
    }

    pub fn bounds(&self) -> ScrollBounds {
        self.bounds
    }

    pub fn phase(&self) -> GesturePhase {
        match self.phase {
            Phase::Idle => GesturePhase::Idle,
            Phase::Dragging(_) => GesturePhase::Dragging,
            Phase::Releasing(_) => GesturePhase::Releasing,
        }
    }

    /// Offset at the most recent move, while dragging.
    pub fn last(&self) -> Option<Point> {
        match &self.phase {
            Phase::Dragging(drag) => Some(drag.last),
            _ => None,
        }
    }

    /// Raw pointer position where the active gesture started.
    pub fn touch_start(&self) -> Option<Point> {
        match &self.phase {
            Phase::Dragging(drag) => Some(drag.touch_start),
            _ => None,
        }
    }

    pub fn is_at_rest(&self) -> bool {
        matches!(self.phase, Phase::Idle) && !self.bounds.is_out_of_bounds(&self.current)
    }

    /// Dispatches `event` on its kind. `metrics` is only read for `Down`.
    pub fn handle<F>(&mut self, event: &PointerEvent, metrics: F) -> Transition
    where
        F: FnOnce() -> SurfaceMetrics,
    {
        let sample = event.sample();
        match event.kind {
            PointerEventKind::Down => self.start(sample, &metrics()),
            PointerEventKind::Move => self.drag(sample),
            PointerEventKind::Up => self.end(sample),
            PointerEventKind::Cancel => self.cancel(),
        }
    }

    /// Begins a gesture, abandoning whatever the previous one left behind.
    pub fn start(&mut self, sample: PointerSample, metrics: &SurfaceMetrics) -> Transition {
        let mut transition = Transition::default();
        let already_tracking = match self.phase {
            Phase::Dragging(_) => {
                log::debug!("start while dragging; restarting gesture");
                true
            }
            Phase::Releasing(ReleaseState { snap_back: true }) => {
                log::debug!("start abandons pending snap-back");
                false
            }
            _ => false,
        };

        self.bounds = ScrollBounds::from_extents(metrics.content, metrics.viewport);

        // An interrupted transition leaves the surface short of `current`;
        // continue from where it is actually drawn.
        if metrics.rendered_offset != self.current {
            log::debug!(
                "reconciling offset {:?} -> rendered {:?}",
                self.current,
                metrics.rendered_offset
            );
            self.current = metrics.rendered_offset;
            transition.push(Effect::Animate(AnimationCommand::immediate(self.current)));
        }

        let touch_start = sample.position;
        let mut start = touch_start;
        start.subtract(&self.current);

        self.phase = Phase::Dragging(DragState {
            pointer: sample.pointer,
            start,
            last: self.current,
            touch_start,
            touch_current: touch_start,
            touch_last: touch_start,
            moved: None,
            viewport: metrics.viewport,
        });

        if !already_tracking {
            transition.push(Effect::AcquireTracking);
        }
        transition
    }

    /// Follows the pointer 1:1, with resistance past the bounds.
    pub fn drag(&mut self, sample: PointerSample) -> Transition {
        let Phase::Dragging(drag) = &mut self.phase else {
            log::trace!("move ignored outside a drag");
            return Transition::default();
        };
        if drag.pointer != sample.pointer {
            log::trace!("move from untracked pointer {} ignored", sample.pointer);
            return Transition::default();
        }

        drag.moved = Some(sample.time_millis);
        drag.touch_last = drag.touch_current;
        drag.touch_current = sample.position;
        drag.last = self.current;

        let mut current = drag.touch_current;
        current.subtract(&drag.start);
        self.bounds.pin_fixed_axes(&mut current);
        if self.bounds.is_out_of_bounds(&current) {
            self.bounds.apply_resistance(
                &mut current,
                self.config.resistance_divisor,
                self.config.overage_divisor,
            );
        }
        self.current = current;
        log::trace!(
            "drag {:?} -> offset {:?} (touch step {:?})",
            sample.position,
            current,
            drag.touch_current - drag.touch_last
        );

        let mut transition = Transition::default();
        transition.push(Effect::SuppressDefault);
        transition.push(Effect::Animate(AnimationCommand::immediate(current)));
        transition
    }

    /// Ends the gesture: snap back, settle, or project momentum.
    pub fn end(&mut self, sample: PointerSample) -> Transition {
        let drag = match self.phase {
            Phase::Dragging(drag) if drag.pointer == sample.pointer => drag,
            Phase::Dragging(_) => {
                log::trace!("release from untracked pointer {} ignored", sample.pointer);
                return Transition::default();
            }
            _ => {
                log::trace!("release ignored outside a drag");
                return Transition::default();
            }
        };
        self.phase = Phase::Idle;

        let mut transition = Transition::default();
        transition.push(Effect::ReleaseTracking);
        let stop = sample.position;

        let Some(moved_at) = drag.moved else {
            transition.outcome = Some(GestureOutcome::Tap { stop });
            self.push_snap_back_if_needed(&mut transition);
            return transition;
        };

        let point_diff = self.current - drag.last;
        // Out-of-order timestamps count as no elapsed time.
        let time_diff = (sample.time_millis - moved_at).max(0.0) as f32;
        let mut touch_distance = point_diff;
        touch_distance.abs();
        let speed = (time_diff > 0.0)
            .then(|| Point::new(touch_distance.x / time_diff, touch_distance.y / time_diff));

        let threshold = self.config.flick_threshold;
        if touch_distance.x <= threshold && touch_distance.y <= threshold {
            transition.outcome = Some(GestureOutcome::Drag { stop });
            self.push_snap_back_if_needed(&mut transition);
            return transition;
        }

        self.current += point_diff * time_diff;
        self.bounds.keep_on_screen(
            &mut self.current,
            &drag.last,
            drag.viewport,
            self.config.overscroll_fraction,
        );

        let duration = self.momentum_duration(&drag.last, speed);
        let snap_back = self.bounds.is_out_of_bounds(&self.current);
        log::debug!(
            "flick: diff {:?} over {}ms -> {:?} in {:.3}s{}",
            point_diff,
            time_diff,
            self.current,
            duration,
            if snap_back { ", then snap back" } else { "" }
        );

        transition.push(Effect::Animate(
            AnimationCommand::timed(self.current, duration).awaiting_completion(),
        ));
        transition.outcome = Some(GestureOutcome::Flick { stop, speed });
        self.phase = Phase::Releasing(ReleaseState { snap_back });
        transition
    }

    /// Abandons the gesture without moving the surface.
    pub fn cancel(&mut self) -> Transition {
        if !matches!(self.phase, Phase::Dragging(_)) {
            log::trace!("cancel ignored outside a drag");
            return Transition::default();
        }
        self.phase = Phase::Idle;

        let mut transition = Transition::default();
        transition.push(Effect::ReleaseTracking);
        transition.outcome = Some(GestureOutcome::Cancelled);
        transition
    }

    /// Reports that the momentum transition issued by [`Scrollable::end`]
    /// finished. Returns the chained snap-back when the flick overshot.
    pub fn transition_finished(&mut self) -> Transition {
        let Phase::Releasing(release) = self.phase else {
            log::trace!("transition end ignored outside a release");
            return Transition::default();
        };
        self.phase = Phase::Idle;

        let mut transition = Transition::default();
        if release.snap_back {
            self.push_snap_back_if_needed(&mut transition);
        }
        transition
    }

    fn push_snap_back_if_needed(&mut self, transition: &mut Transition) {
        if !self.bounds.is_out_of_bounds(&self.current) {
            return;
        }
        self.current = self.bounds.clamp(self.current);
        log::debug!("snap back to {:?}", self.current);
        transition.push(Effect::Animate(AnimationCommand::timed(
            self.current,
            self.config.snap_back_duration,
        )));
    }

    /// Duration of the momentum transition from `last` to `current`.
    fn momentum_duration(&self, last: &Point, speed: Option<Point>) -> f32 {
        let fallback = self.config.snap_back_duration;
        if self.bounds.is_out_of_bounds(last) {
            return fallback;
        }
        let Some(speed) = speed else {
            return fallback;
        };

        let mut adjusted = Point::ZERO;
        adjusted.set_difference(&self.current, last).abs();
        let (delta, axis_speed) = if speed.y > speed.x {
            (adjusted.y, speed.y)
        } else {
            (adjusted.x, speed.x)
        };

        let duration = (delta / (axis_speed / 2.0) * self.config.momentum_duration_scale) / 1000.0;
        if duration.is_finite() && duration >= 0.0 {
            duration
        } else {
            log::warn!(
                "momentum duration {} from delta {} at speed {}; using {}s",
                duration,
                delta,
                axis_speed,
                fallback
            );
            fallback
        }
    }
}

#[cfg(test)]
#[path = "tests/scrollable_tests.rs"]
mod tests;
