//! Geometric primitives: Point, Size

use std::ops::{Add, AddAssign, Mul, Sub, SubAssign};

/// A 2D offset or position in logical pixels.
///
/// The mutating helpers return `&mut Self` so updates can be chained:
///
/// ```
/// use momentum_ui_graphics::Point;
///
/// let mut offset = Point::new(-40.0, 12.0);
/// offset
///     .subtract(&Point::new(10.0, 2.0))
///     .keep_in_bounds(&Point::new(-30.0, 0.0), &Point::ZERO);
/// assert_eq!(offset, Point::new(-30.0, 0.0));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub const ZERO: Point = Point { x: 0.0, y: 0.0 };

    pub fn set(&mut self, x: f32, y: f32) -> &mut Self {
        self.x = x;
        self.y = y;
        self
    }

    pub fn copy_from(&mut self, other: &Point) -> &mut Self {
        self.x = other.x;
        self.y = other.y;
        self
    }

    /// `self -= other`
    pub fn subtract(&mut self, other: &Point) -> &mut Self {
        self.x -= other.x;
        self.y -= other.y;
        self
    }

    /// `self = a - b`, overwriting whatever `self` held.
    pub fn set_difference(&mut self, a: &Point, b: &Point) -> &mut Self {
        self.x = a.x - b.x;
        self.y = a.y - b.y;
        self
    }

    pub fn abs(&mut self) -> &mut Self {
        self.x = self.x.abs();
        self.y = self.y.abs();
        self
    }

    /// Clamps each component into `[min, max]` independently.
    ///
    /// `max` wins when a bound pair is inverted, matching `min(max(v, lo), hi)`.
    pub fn keep_in_bounds(&mut self, min: &Point, max: &Point) -> &mut Self {
        self.x = self.x.max(min.x).min(max.x);
        self.y = self.y.max(min.y).min(max.y);
        self
    }

    /// Non-mutating form of [`Point::keep_in_bounds`].
    pub fn clamped(mut self, min: &Point, max: &Point) -> Self {
        self.keep_in_bounds(min, max);
        self
    }
}

impl Add for Point {
    type Output = Point;

    fn add(self, rhs: Point) -> Point {
        Point::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl AddAssign for Point {
    fn add_assign(&mut self, rhs: Point) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

impl Sub for Point {
    type Output = Point;

    fn sub(self, rhs: Point) -> Point {
        Point::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl SubAssign for Point {
    fn sub_assign(&mut self, rhs: Point) {
        self.subtract(&rhs);
    }
}

impl Mul<f32> for Point {
    type Output = Point;

    fn mul(self, rhs: f32) -> Point {
        Point::new(self.x * rhs, self.y * rhs)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub const ZERO: Size = Size {
        width: 0.0,
        height: 0.0,
    };

    /// Scales both extents by `factor`.
    pub fn scale(&self, factor: f32) -> Self {
        Self {
            width: self.width * factor,
            height: self.height * factor,
        }
    }
}
