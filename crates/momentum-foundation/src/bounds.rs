//! Scroll bounds and the per-axis rules that act on them.

use momentum_ui_graphics::{Point, Size};

/// Valid offset range for a surface.
///
/// Offsets are translations of the content, so scrolling towards the end of
/// the content moves them negative: `max` is always the origin and `min` is
/// `-(content - viewport)` per axis.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct ScrollBounds {
    pub min: Point,
    pub max: Point,
}

impl ScrollBounds {
    /// Derives bounds from content and viewport extents.
    ///
    /// Content that fits the viewport yields `min == max` on that axis, which
    /// pins the axis during drags.
    pub fn from_extents(content: Size, viewport: Size) -> Self {
        Self {
            min: Point::new(
                -(content.width - viewport.width).max(0.0),
                -(content.height - viewport.height).max(0.0),
            ),
            max: Point::ZERO,
        }
    }

    pub fn is_x_out_of_bounds(&self, point: &Point) -> bool {
        point.x < self.min.x || point.x > self.max.x
    }

    pub fn is_y_out_of_bounds(&self, point: &Point) -> bool {
        point.y < self.min.y || point.y > self.max.y
    }

    pub fn is_out_of_bounds(&self, point: &Point) -> bool {
        self.is_y_out_of_bounds(point) || self.is_x_out_of_bounds(point)
    }

    pub fn is_x_fixed(&self) -> bool {
        self.min.x == self.max.x
    }

    pub fn is_y_fixed(&self) -> bool {
        self.min.y == self.max.y
    }

    pub fn clamp(&self, point: Point) -> Point {
        point.clamped(&self.min, &self.max)
    }

    /// Collapses axes without scrollable range onto their only valid value.
    pub fn pin_fixed_axes(&self, point: &mut Point) {
        if self.is_x_fixed() {
            point.x = self.min.x;
        }
        if self.is_y_fixed() {
            point.y = self.min.y;
        }
    }

    /// Dampens how far an out-of-bounds drag offset strays past its bound.
    ///
    /// Axes inside the range are left alone. Positive overshoot is divided by
    /// `resistance_divisor`; overshoot past `min` gives back
    /// `overage / overage_divisor`.
    pub fn apply_resistance(
        &self,
        point: &mut Point,
        resistance_divisor: f32,
        overage_divisor: f32,
    ) {
        if self.is_y_out_of_bounds(point) {
            point.y = resist(point.y, self.min.y, resistance_divisor, overage_divisor);
        }
        if self.is_x_out_of_bounds(point) {
            point.x = resist(point.x, self.min.x, resistance_divisor, overage_divisor);
        }
    }

    /// Limits a momentum projection so it cannot leave the screen.
    ///
    /// Per axis, `extra = viewport * overscroll_fraction`. Crossing
    /// `max + extra` (or `min - extra`) from inside the range stops exactly at
    /// that limit; every other projection is clamped into `[min, max]`.
    pub fn keep_on_screen(
        &self,
        point: &mut Point,
        last: &Point,
        viewport: Size,
        overscroll_fraction: f32,
    ) {
        let extra = viewport.scale(overscroll_fraction);
        point.y = keep_axis_on_screen(point.y, last.y, self.min.y, self.max.y, extra.height);
        point.x = keep_axis_on_screen(point.x, last.x, self.min.x, self.max.x, extra.width);
    }
}

fn resist(value: f32, min: f32, resistance_divisor: f32, overage_divisor: f32) -> f32 {
    if value > 0.0 {
        value / resistance_divisor
    } else {
        let overage = min - value;
        value + overage / overage_divisor
    }
}

fn keep_axis_on_screen(value: f32, last: f32, min: f32, max: f32, extra: f32) -> f32 {
    if value > max + extra && last <= max {
        max + extra
    } else if value < min - extra && last >= min {
        min - extra
    } else {
        value.max(min).min(max)
    }
}
