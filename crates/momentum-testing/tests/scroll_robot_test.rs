//! End-to-end gestures against a vertical list: 400x3000 content seen
//! through a 400x800 viewport, so the y range is [-2200, 0] and x is pinned.

use momentum_foundation::{GestureOutcome, GesturePhase};
use momentum_testing::robot_assertions::{
    assert_approx_eq, assert_non_decreasing, assert_point_approx_eq, assert_within,
};
use momentum_testing::ScrollRobot;
use momentum_ui_graphics::{Point, Size};

const CONTENT: Size = Size::new(400.0, 3000.0);
const VIEWPORT: Size = Size::new(400.0, 800.0);

fn list_robot() -> ScrollRobot {
    ScrollRobot::new(CONTENT, VIEWPORT)
}

#[test]
fn flick_glides_and_settles_inside_content() {
    let mut robot = list_robot();
    let outcome = robot.flick((200.0, 600.0), (200.0, 400.0), 5);
    assert!(matches!(outcome, Some(GestureOutcome::Flick { .. })));
    assert!(!robot.is_tracking());
    assert_eq!(robot.phase(), GesturePhase::Releasing);

    // Last step was 40px in 16ms: -200 - 40 * 16.
    assert_eq!(robot.offset(), Point::new(0.0, -840.0));

    let trail = robot.wait_for_idle();
    assert!(trail.len() > 10, "momentum should take many frames");
    let ys: Vec<f32> = trail.iter().map(|p| -p.y).collect();
    assert_non_decreasing(&ys, "glide never reverses");
    assert_eq!(robot.rendered_offset(), Point::new(0.0, -840.0));
    assert!(robot.is_at_rest());
    assert_eq!(robot.registry().detach_count(), 1);
}

#[test]
fn overshooting_flick_springs_back_to_the_top() {
    let mut robot = ScrollRobot::starting_at(CONTENT, VIEWPORT, Point::new(0.0, -100.0));
    robot.flick((200.0, 300.0), (200.0, 360.0), 3);

    // -40 + 20 * 16 = 280, capped at a fifth of the viewport past the top.
    assert_eq!(robot.offset(), Point::new(0.0, 160.0));

    let trail = robot.wait_for_idle();
    let peak = trail.iter().map(|p| p.y).fold(f32::MIN, f32::max);
    assert_approx_eq(peak, 160.0, 0.01, "overshoot peak");
    assert_eq!(robot.rendered_offset(), Point::ZERO);
    assert_eq!(robot.offset(), Point::ZERO);
    assert_eq!(robot.phase(), GesturePhase::Idle);
    assert!(robot.is_at_rest());
}

#[test]
fn dragging_past_the_top_is_resisted() {
    let mut robot = list_robot();
    robot.drag_to((200.0, 300.0), (200.0, 450.0), 5);

    assert_approx_eq(robot.offset().y, 50.0, 1e-3, "150px pull shows a third");
    assert_eq!(robot.rendered_offset(), robot.offset());
    assert!(robot.is_tracking());

    robot.release();
    robot.wait_for_idle();
    assert_eq!(robot.rendered_offset(), Point::ZERO);
    assert!(robot.is_at_rest());
}

#[test]
fn tap_catches_a_gliding_surface() {
    let mut robot = list_robot();
    robot.flick((200.0, 600.0), (200.0, 400.0), 5);
    robot.advance_frames(20);
    let caught = robot.rendered_offset();
    assert!(caught.y < -200.0 && caught.y > -840.0, "caught at {:?}", caught);

    robot.press(200.0, 500.0);
    assert!(!robot.is_animating());
    let outcome = robot.release();
    assert!(matches!(outcome, Some(GestureOutcome::Tap { .. })));

    assert!(robot.wait_for_idle().is_empty());
    assert_eq!(robot.rendered_offset(), caught);
    assert_eq!(robot.offset(), caught);
}

#[test]
fn diagonal_flick_only_scrolls_the_free_axis() {
    let mut robot = list_robot();
    robot.flick((200.0, 600.0), (320.0, 400.0), 6);
    let trail = robot.wait_for_idle();
    for point in trail {
        assert_eq!(point.x, 0.0);
    }
    assert_eq!(robot.offset().x, 0.0);
    assert!(robot.offset().y < -200.0);
}

#[test]
fn slow_release_settles_where_the_finger_left_it() {
    let mut robot = list_robot();
    robot.drag_to((200.0, 600.0), (200.0, 597.0), 3);
    let outcome = robot.release();

    assert!(matches!(outcome, Some(GestureOutcome::Drag { .. })));
    assert!(!robot.is_animating());
    assert_eq!(robot.offset(), Point::new(0.0, -3.0));
    assert!(robot.is_at_rest());
}

#[test]
fn cancel_leaves_the_surface_in_place() {
    let mut robot = list_robot();
    robot.drag_to((200.0, 600.0), (200.0, 500.0), 4);
    let outcome = robot.cancel();

    assert_eq!(outcome, Some(GestureOutcome::Cancelled));
    assert!(!robot.is_tracking());
    assert_eq!(robot.offset(), Point::new(0.0, -100.0));
    assert!(robot.wait_for_idle().is_empty());
}

#[test]
fn moves_without_a_press_pass_through() {
    let mut robot = list_robot();
    assert!(!robot.move_to(200.0, 100.0));
    assert_eq!(robot.release(), None);
    assert_eq!(robot.registry().attach_count(), 0);
    assert_eq!(robot.offset(), Point::ZERO);
}

#[test]
fn content_that_fits_never_scrolls() {
    let mut robot = ScrollRobot::new(Size::new(400.0, 500.0), VIEWPORT);
    robot.flick((200.0, 600.0), (200.0, 100.0), 5);
    robot.wait_for_idle();
    assert_eq!(robot.rendered_offset(), Point::ZERO);

    robot.set_content_size(CONTENT);
    robot.flick((200.0, 600.0), (200.0, 100.0), 5);
    robot.wait_for_idle();
    assert!(robot.rendered_offset().y < 0.0);
    assert_within(
        robot.rendered_offset(),
        Point::new(0.0, -2200.0),
        Point::ZERO,
        "settled inside the new bounds",
    );
}

#[test]
fn hard_flick_to_the_bottom_springs_back_to_the_end() {
    let mut robot = ScrollRobot::starting_at(CONTENT, VIEWPORT, Point::new(0.0, -2000.0));
    robot.flick((200.0, 700.0), (200.0, 550.0), 3);
    assert_eq!(robot.offset(), Point::new(0.0, -2360.0));

    robot.wait_for_idle();
    assert_point_approx_eq(
        robot.rendered_offset(),
        Point::new(0.0, -2200.0),
        1e-3,
        "snapped to the end",
    );
}
