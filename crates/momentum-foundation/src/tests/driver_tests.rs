use super::*;
use crate::nodes::input::tracking::TrackingRegistry;
use momentum_animation::{Easing, TransitionAnimator};
use momentum_ui_graphics::Size;

struct TestSurface {
    content: Size,
    viewport: Size,
    animator: TransitionAnimator,
}

impl ScrollSurface for TestSurface {
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

fn driver(
    initial: Point,
) -> (
    ScrollDriver<TestSurface, TransitionAnimator>,
    Rc<TrackingRegistry>,
) {
    let animator = TransitionAnimator::with_easing(initial, Easing::Linear);
    let surface = TestSurface {
        content: Size::new(2000.0, 300.0),
        viewport: Size::new(500.0, 300.0),
        animator: animator.clone(),
    };
    let registry = Rc::new(TrackingRegistry::new());
    let driver = ScrollDriver::new(
        surface,
        animator,
        registry.clone(),
        ScrollConfig::default(),
    )
    .expect("default config is valid");
    (driver, registry)
}

fn point(x: f32, y: f32) -> Point {
    Point::new(x, y)
}

/// Presses at x=100, moves to 110 then 140, releases 16ms after the last
/// move: a (30, 0) diff that overshoots max from an offset of -300.
fn flick_past_max(driver: &mut ScrollDriver<TestSurface, TransitionAnimator>) {
    driver.dispatch(&PointerEvent::down(point(100.0, 50.0), 0.0));
    driver.dispatch(&PointerEvent::moved(point(110.0, 50.0), 84.0));
    driver.dispatch(&PointerEvent::moved(point(140.0, 50.0), 100.0));
    driver.dispatch(&PointerEvent::up(point(140.0, 50.0), 116.0));
}

#[test]
fn tracking_lives_for_the_gesture_only() {
    let (mut driver, registry) = driver(Point::ZERO);

    let early = PointerEvent::moved(point(10.0, 10.0), 0.0);
    assert_eq!(driver.dispatch(&early), None);
    assert!(!early.is_consumed());
    assert!(!registry.is_attached());

    driver.dispatch(&PointerEvent::down(point(100.0, 50.0), 10.0));
    assert!(registry.is_attached());
    assert!(driver.is_tracking());

    let outcome = driver.dispatch(&PointerEvent::up(point(100.0, 50.0), 20.0));
    assert!(matches!(outcome, Some(GestureOutcome::Tap { .. })));
    assert!(!registry.is_attached());
    assert_eq!(registry.attach_count(), 1);
    assert_eq!(registry.detach_count(), 1);

    let late = PointerEvent::up(point(100.0, 50.0), 30.0);
    assert_eq!(driver.dispatch(&late), None);
}

#[test]
fn moves_are_consumed_and_rendered_immediately() {
    let (mut driver, _registry) = driver(Point::ZERO);
    let down = PointerEvent::down(point(300.0, 50.0), 0.0);
    driver.dispatch(&down);
    assert!(!down.is_consumed());

    let moved = PointerEvent::moved(point(220.0, 80.0), 16.0);
    driver.dispatch(&moved);
    assert!(moved.is_consumed());
    assert_eq!(driver.offset(), point(-80.0, 0.0));
    assert_eq!(driver.animator().rendered_offset(), point(-80.0, 0.0));
    assert!(!driver.animator().is_running());
}

#[test]
fn untracked_pointer_move_is_not_consumed() {
    let (mut driver, _registry) = driver(Point::ZERO);
    driver.dispatch(&PointerEvent::down(point(300.0, 50.0), 0.0));

    let stray = PointerEvent::moved(point(100.0, 50.0), 16.0).with_id(4);
    driver.dispatch(&stray);
    assert!(!stray.is_consumed());
    assert_eq!(driver.offset(), Point::ZERO);
}

#[test]
fn overshooting_flick_snaps_back_after_momentum_ends() {
    let (mut driver, registry) = driver(point(-300.0, 0.0));
    flick_past_max(&mut driver);

    assert!(!registry.is_attached());
    assert_eq!(driver.phase(), GesturePhase::Releasing);
    assert_eq!(driver.animator().target(), point(100.0, 0.0));
    assert!((driver.animator().transition_duration() - 1.248).abs() < 1e-4);

    let animator = driver.animator().clone();
    animator.advance(0);
    animator.advance(600_000_000);
    assert_eq!(driver.phase(), GesturePhase::Releasing);

    // Momentum ends; the snap-back is issued from the completion callback.
    assert!(animator.advance(1_500_000_000));
    assert_eq!(driver.phase(), GesturePhase::Idle);
    assert_eq!(animator.target(), Point::ZERO);
    assert!((animator.transition_duration() - 0.3).abs() < 1e-6);
    assert_eq!(animator.rendered_offset(), point(100.0, 0.0));

    animator.advance(1_600_000_000);
    assert!(animator.advance(2_000_000_000));
    assert_eq!(animator.rendered_offset(), Point::ZERO);
    assert!(driver.is_at_rest());
    assert!(!animator.is_running());
}

#[test]
fn press_during_momentum_catches_the_surface() {
    let (mut driver, registry) = driver(point(-300.0, 0.0));
    flick_past_max(&mut driver);

    let animator = driver.animator().clone();
    animator.advance(0);
    animator.advance(500_000_000);
    let caught = animator.rendered_offset();
    assert!(caught.x > -260.0 && caught.x < 0.0, "caught at {:?}", caught);

    driver.dispatch(&PointerEvent::down(point(200.0, 50.0), 700.0));
    assert_eq!(driver.offset(), caught);
    assert!(!animator.is_running());
    assert_eq!(registry.attach_count(), 2);

    driver.dispatch(&PointerEvent::up(point(200.0, 50.0), 720.0));
    animator.advance(5_000_000_000);
    assert_eq!(animator.rendered_offset(), caught);
    assert_eq!(driver.phase(), GesturePhase::Idle);
}

#[test]
fn cancel_releases_tracking_in_place() {
    let (mut driver, registry) = driver(Point::ZERO);
    driver.dispatch(&PointerEvent::down(point(300.0, 50.0), 0.0));
    driver.dispatch(&PointerEvent::moved(point(250.0, 50.0), 16.0));

    let outcome = driver.dispatch(&PointerEvent::cancel(20.0).with_id(3));
    assert_eq!(outcome, Some(GestureOutcome::Cancelled));
    assert!(!registry.is_attached());
    assert_eq!(driver.offset(), point(-50.0, 0.0));
    assert_eq!(driver.animator().rendered_offset(), point(-50.0, 0.0));
}

#[test]
fn dropping_the_driver_detaches_tracking() {
    let (mut driver, registry) = driver(Point::ZERO);
    driver.dispatch(&PointerEvent::down(point(300.0, 50.0), 0.0));
    assert!(registry.is_attached());

    drop(driver);
    assert!(!registry.is_attached());
    assert_eq!(registry.detach_count(), 1);
}

#[test]
fn completion_after_driver_drop_is_harmless() {
    let (mut driver, _registry) = driver(point(-300.0, 0.0));
    flick_past_max(&mut driver);
    let animator = driver.animator().clone();
    drop(driver);

    animator.advance(0);
    assert!(animator.advance(2_000_000_000));
    assert_eq!(animator.rendered_offset(), point(100.0, 0.0));
    assert!(!animator.is_running());
}

#[test]
fn invalid_config_is_rejected() {
    let animator = TransitionAnimator::new(Point::ZERO);
    let surface = TestSurface {
        content: Size::new(100.0, 100.0),
        viewport: Size::new(100.0, 100.0),
        animator: animator.clone(),
    };
    let result = ScrollDriver::new(
        surface,
        animator,
        Rc::new(TrackingRegistry::new()),
        ScrollConfig::default().with_snap_back_duration(0.0),
    );
    assert!(result.is_err());
}
