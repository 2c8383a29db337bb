use super::*;

#[test]
fn easing_linear_is_identity() {
    assert_eq!(Easing::Linear.transform(0.0), 0.0);
    assert_eq!(Easing::Linear.transform(0.5), 0.5);
    assert_eq!(Easing::Linear.transform(1.0), 1.0);
}

#[test]
fn easing_bounds_are_correct() {
    let easings = [
        Easing::Linear,
        Easing::Ease,
        Easing::EaseIn,
        Easing::EaseOut,
        Easing::EaseInOut,
        Easing::CubicBezier(0.1, 0.7, 0.1, 1.0),
    ];

    for easing in easings {
        let start = easing.transform(0.0);
        let end = easing.transform(1.0);
        assert!(
            (start - 0.0).abs() < 0.01,
            "Start should be ~0 for {:?}",
            easing
        );
        assert!(
            (end - 1.0).abs() < 0.01,
            "End should be ~1 for {:?}",
            easing
        );
    }
}

#[test]
fn easing_is_monotonic() {
    for easing in [Easing::Ease, Easing::EaseIn, Easing::EaseOut, Easing::EaseInOut] {
        let mut prev = 0.0;
        for i in 0..=50 {
            let value = easing.transform(i as f32 / 50.0);
            assert!(
                value + 1e-4 >= prev,
                "{:?} decreased at step {}: {} < {}",
                easing,
                i,
                value,
                prev
            );
            prev = value;
        }
    }
}

#[test]
fn default_easing_is_ease() {
    assert_eq!(Easing::default(), Easing::Ease);
    // `ease` front-loads progress.
    assert!(Easing::Ease.transform(0.5) > 0.5);
}

#[test]
fn point_lerp_interpolates_both_axes() {
    let from = Point::new(0.0, -100.0);
    let to = Point::new(50.0, 100.0);
    assert_eq!(from.lerp(&to, 0.5), Point::new(25.0, 0.0));
    assert_eq!(from.lerp(&to, 1.0), to);
}
