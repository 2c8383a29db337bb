//! Assertion utilities for robot testing
//!
//! Offsets come out of eased transitions and float arithmetic, so most checks
//! compare within a tolerance.

use momentum_ui_graphics::Point;

/// Assert that a value is within `tolerance` of `expected`.
pub fn assert_approx_eq(actual: f32, expected: f32, tolerance: f32, msg: &str) {
    let diff = (actual - expected).abs();
    assert!(
        diff <= tolerance,
        "{}: expected {} (±{}), got {} (diff: {})",
        msg,
        expected,
        tolerance,
        actual,
        diff
    );
}

/// Assert that both coordinates of a point are within `tolerance`.
pub fn assert_point_approx_eq(actual: Point, expected: Point, tolerance: f32, msg: &str) {
    assert_approx_eq(actual.x, expected.x, tolerance, &format!("{} - x", msg));
    assert_approx_eq(actual.y, expected.y, tolerance, &format!("{} - y", msg));
}

/// Assert that `point` lies inside the box spanned by `min` and `max`.
pub fn assert_within(point: Point, min: Point, max: Point, msg: &str) {
    assert!(
        point.x >= min.x && point.x <= max.x && point.y >= min.y && point.y <= max.y,
        "{}: {:?} outside [{:?}, {:?}]",
        msg,
        point,
        min,
        max
    );
}

/// Assert that a sequence of values never decreases.
pub fn assert_non_decreasing(values: &[f32], msg: &str) {
    for pair in values.windows(2) {
        assert!(
            pair[1] >= pair[0],
            "{}: {} followed by {} in {:?}",
            msg,
            pair[0],
            pair[1],
            values
        );
    }
}
