//! Easing curves and interpolation used by offset transitions.

use momentum_ui_graphics::Point;

/// Trait for types that can be linearly interpolated.
pub trait Lerp {
    fn lerp(&self, target: &Self, fraction: f32) -> Self;
}

impl Lerp for f32 {
    fn lerp(&self, target: &Self, fraction: f32) -> Self {
        self + (target - self) * fraction
    }
}

impl Lerp for Point {
    fn lerp(&self, target: &Self, fraction: f32) -> Self {
        Point::new(self.x.lerp(&target.x, fraction), self.y.lerp(&target.y, fraction))
    }
}

/// Timing functions for offset transitions.
///
/// These are the keyword curves a compositor transition understands; `Ease`
/// is what a transition uses when nothing else is configured.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Easing {
    /// Linear interpolation (no easing).
    Linear,
    /// cubic-bezier(0.25, 0.1, 0.25, 1.0)
    #[default]
    Ease,
    /// cubic-bezier(0.42, 0.0, 1.0, 1.0)
    EaseIn,
    /// cubic-bezier(0.0, 0.0, 0.58, 1.0)
    EaseOut,
    /// cubic-bezier(0.42, 0.0, 0.58, 1.0)
    EaseInOut,
    /// Arbitrary control points `(x1, y1, x2, y2)`.
    CubicBezier(f32, f32, f32, f32),
}

impl Easing {
    /// Apply the easing function to a linear fraction [0, 1].
    pub fn transform(&self, fraction: f32) -> f32 {
        match *self {
            Easing::Linear => fraction.clamp(0.0, 1.0),
            Easing::Ease => cubic_bezier(0.25, 0.1, 0.25, 1.0, fraction),
            Easing::EaseIn => cubic_bezier(0.42, 0.0, 1.0, 1.0, fraction),
            Easing::EaseOut => cubic_bezier(0.0, 0.0, 0.58, 1.0, fraction),
            Easing::EaseInOut => cubic_bezier(0.42, 0.0, 0.58, 1.0, fraction),
            Easing::CubicBezier(x1, y1, x2, y2) => cubic_bezier(x1, y1, x2, y2, fraction),
        }
    }
}

/// Evaluates the unit cubic bezier with control points `(x1, y1)` and
/// `(x2, y2)` at the given x fraction.
fn cubic_bezier(x1: f32, y1: f32, x2: f32, y2: f32, fraction: f32) -> f32 {
    if fraction <= 0.0 {
        return 0.0;
    }
    if fraction >= 1.0 {
        return 1.0;
    }

    let cx = 3.0 * x1;
    let bx = 3.0 * (x2 - x1) - cx;
    let ax = 1.0 - cx - bx;

    let cy = 3.0 * y1;
    let by = 3.0 * (y2 - y1) - cy;
    let ay = 1.0 - cy - by;

    fn sample_curve(a: f32, b: f32, c: f32, t: f32) -> f32 {
        ((a * t + b) * t + c) * t
    }

    fn sample_derivative(a: f32, b: f32, c: f32, t: f32) -> f32 {
        (3.0 * a * t + 2.0 * b) * t + c
    }

    // Newton-Raphson for the parametric t matching x, kept inside [0, 1].
    let mut t = fraction;
    let mut converged = false;
    for _ in 0..8 {
        let x = sample_curve(ax, bx, cx, t) - fraction;
        if x.abs() < 1e-6 {
            converged = true;
            break;
        }
        let dx = sample_derivative(ax, bx, cx, t);
        if dx.abs() < 1e-6 {
            break;
        }
        t = (t - x / dx).clamp(0.0, 1.0);
    }

    if !converged {
        let mut t0 = 0.0;
        let mut t1 = 1.0;
        t = fraction;
        for _ in 0..16 {
            let delta = sample_curve(ax, bx, cx, t) - fraction;
            if delta.abs() < 1e-6 {
                break;
            }
            if delta > 0.0 {
                t1 = t;
            } else {
                t0 = t;
            }
            t = 0.5 * (t0 + t1);
        }
    }

    sample_curve(ay, by, cy, t)
}

#[cfg(test)]
#[path = "tests/animation_tests.rs"]
mod tests;
