//! Robot-style driver for end-to-end gesture tests
//!
//! [`ScrollRobot`] owns a [`ScrollDriver`] wired to an in-memory surface and
//! a [`TransitionAnimator`]. Tests press, move and release like a finger
//! would, then pump frames until the surface settles.
//!
//! # Example
//!
//! ```
//! use momentum_testing::ScrollRobot;
//! use momentum_ui_graphics::Size;
//!
//! let mut robot = ScrollRobot::new(Size::new(400.0, 2000.0), Size::new(400.0, 600.0));
//! robot.flick((200.0, 500.0), (200.0, 300.0), 5);
//! robot.wait_for_idle();
//! assert!(robot.offset().y < 0.0);
//! ```

use std::rc::Rc;

use momentum_animation::{Animator, Easing, TransitionAnimator};
use momentum_foundation::{
    GestureOutcome, GesturePhase, PointerEvent, ScrollConfig, ScrollConfigError, ScrollDriver,
    ScrollSurface, TrackingRegistry,
};
use momentum_ui_graphics::{Point, Size};

/// Frame interval used by [`ScrollRobot::advance_frames`].
pub const FRAME_MILLIS: f64 = 16.0;

/// Interval between the synthetic moves of a drag or flick.
pub const STEP_MILLIS: f64 = 16.0;

/// Upper bound on frames pumped by [`ScrollRobot::wait_for_idle`].
const MAX_IDLE_FRAMES: usize = 2_000;

/// In-memory surface whose rendered offset is whatever the animator drew last.
#[derive(Clone)]
pub struct FakeSurface {
    pub content: Size,
    pub viewport: Size,
    animator: TransitionAnimator,
}

impl FakeSurface {
    pub fn new(content: Size, viewport: Size, animator: TransitionAnimator) -> Self {
        Self {
            content,
            viewport,
            animator,
        }
    }
}

impl ScrollSurface for FakeSurface {
    fn content_size(&self) -> Size {
        self.content
    }

    fn viewport_size(&self) -> Size {
        self.viewport
    }

    fn rendered_offset(&self) -> Point {
        self.animator.rendered_offset()
    }
}

pub struct ScrollRobot {
    driver: ScrollDriver<FakeSurface, TransitionAnimator>,
    registry: Rc<TrackingRegistry>,
    animator: TransitionAnimator,
    time_millis: f64,
    pointer: Point,
    last_outcome: Option<GestureOutcome>,
}

impl ScrollRobot {
    /// Robot with the default configuration and linear easing.
    pub fn new(content: Size, viewport: Size) -> Self {
        match Self::with_config(content, viewport, ScrollConfig::default()) {
            Ok(robot) => robot,
            Err(err) => panic!("default scroll config rejected: {err}"),
        }
    }

    pub fn with_config(
        content: Size,
        viewport: Size,
        config: ScrollConfig,
    ) -> Result<Self, ScrollConfigError> {
        Self::build(content, viewport, config, Point::ZERO)
    }

    /// Robot whose surface is already drawn at `offset`.
    pub fn starting_at(content: Size, viewport: Size, offset: Point) -> Self {
        match Self::build(content, viewport, ScrollConfig::default(), offset) {
            Ok(robot) => robot,
            Err(err) => panic!("default scroll config rejected: {err}"),
        }
    }

    fn build(
        content: Size,
        viewport: Size,
        config: ScrollConfig,
        offset: Point,
    ) -> Result<Self, ScrollConfigError> {
        let animator = TransitionAnimator::with_easing(offset, Easing::Linear);
        let registry = Rc::new(TrackingRegistry::new());
        let surface = FakeSurface::new(content, viewport, animator.clone());
        let driver = ScrollDriver::new(surface, animator.clone(), registry.clone(), config)?;
        Ok(Self {
            driver,
            registry,
            animator,
            time_millis: 0.0,
            pointer: Point::ZERO,
            last_outcome: None,
        })
    }

    /// Current robot clock, in milliseconds.
    pub fn now(&self) -> f64 {
        self.time_millis
    }

    /// Logical offset held by the state machine.
    pub fn offset(&self) -> Point {
        self.driver.offset()
    }

    /// Offset the surface is drawn at right now.
    pub fn rendered_offset(&self) -> Point {
        self.animator.rendered_offset()
    }

    pub fn phase(&self) -> GesturePhase {
        self.driver.phase()
    }

    pub fn is_tracking(&self) -> bool {
        self.driver.is_tracking()
    }

    pub fn is_animating(&self) -> bool {
        self.animator.is_running()
    }

    pub fn is_at_rest(&self) -> bool {
        self.driver.is_at_rest() && !self.animator.is_running()
    }

    pub fn registry(&self) -> &TrackingRegistry {
        &self.registry
    }

    pub fn last_outcome(&self) -> Option<GestureOutcome> {
        self.last_outcome
    }

    /// Changes the content extent, as if the surface relaid out.
    pub fn set_content_size(&mut self, content: Size) {
        self.driver.surface_mut().content = content;
    }

    /// Sends `event` through the driver and reports whether it was consumed.
    pub fn send(&mut self, event: PointerEvent) -> bool {
        if let Some(outcome) = self.driver.dispatch(&event) {
            self.last_outcome = Some(outcome);
        }
        event.is_consumed()
    }

    pub fn press(&mut self, x: f32, y: f32) {
        self.pointer = Point::new(x, y);
        self.send(PointerEvent::down(self.pointer, self.time_millis));
    }

    /// Moves the pointer `STEP_MILLIS` after the previous event.
    pub fn move_to(&mut self, x: f32, y: f32) -> bool {
        self.time_millis += STEP_MILLIS;
        self.pointer = Point::new(x, y);
        self.send(PointerEvent::moved(self.pointer, self.time_millis))
    }

    /// Releases where the pointer is, `after_millis` after the last event.
    pub fn release_after(&mut self, after_millis: f64) -> Option<GestureOutcome> {
        self.time_millis += after_millis;
        self.last_outcome = None;
        self.send(PointerEvent::up(self.pointer, self.time_millis));
        self.last_outcome
    }

    pub fn release(&mut self) -> Option<GestureOutcome> {
        self.release_after(STEP_MILLIS)
    }

    pub fn cancel(&mut self) -> Option<GestureOutcome> {
        self.last_outcome = None;
        self.send(PointerEvent::cancel(self.time_millis));
        self.last_outcome
    }

    /// Presses at `from` and moves to `to` in `steps` even moves without
    /// releasing.
    pub fn drag_to(&mut self, from: (f32, f32), to: (f32, f32), steps: usize) {
        self.press(from.0, from.1);
        let steps = steps.max(1);
        for i in 1..=steps {
            let t = i as f32 / steps as f32;
            let x = from.0 + (to.0 - from.0) * t;
            let y = from.1 + (to.1 - from.1) * t;
            self.move_to(x, y);
        }
    }

    /// A full drag released one step after the last move.
    pub fn flick(
        &mut self,
        from: (f32, f32),
        to: (f32, f32),
        steps: usize,
    ) -> Option<GestureOutcome> {
        self.drag_to(from, to, steps);
        self.release()
    }

    /// Renders `frames` frames, one every `FRAME_MILLIS`.
    pub fn advance_frames(&mut self, frames: usize) {
        for _ in 0..frames {
            self.animator.advance(self.frame_time_nanos());
            self.time_millis += FRAME_MILLIS;
        }
    }

    /// Renders frames until no transition is running, chained ones included.
    ///
    /// Returns the rendered offset of every frame, in order.
    pub fn wait_for_idle(&mut self) -> Vec<Point> {
        let mut trail = Vec::new();
        for _ in 0..MAX_IDLE_FRAMES {
            if !self.animator.is_running() {
                return trail;
            }
            self.advance_frames(1);
            trail.push(self.animator.rendered_offset());
        }
        log::warn!(
            "surface still animating after {} frames at {:?}",
            MAX_IDLE_FRAMES,
            self.animator.rendered_offset()
        );
        trail
    }

    fn frame_time_nanos(&self) -> u64 {
        (self.time_millis * 1_000_000.0) as u64
    }
}
