use crate::float_types::Real;
use crate::geometry::point::{Point, PointExt, lerp};

/// A directed line segment from `p0` to `p1`.
///
/// Lines are plain values: every structure that stores one owns its own copy.
/// Direction matters, `(a, b)` and `(b, a)` are different lines.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Line {
    pub p0: Point,
    pub p1: Point,
}

impl Line {
    #[inline]
    pub const fn new(p0: Point, p1: Point) -> Self {
        Line { p0, p1 }
    }

    /// Same segment, opposite direction.
    #[inline]
    pub const fn reversed(&self) -> Self {
        Line {
            p0: self.p1,
            p1: self.p0,
        }
    }

    #[inline]
    pub fn length(&self) -> Real {
        self.p0.distance_to(&self.p1)
    }

    #[inline]
    pub fn midpoint(&self) -> Point {
        lerp(&self.p0, &self.p1, 0.5)
    }

    /// Both endpoints are pairwise near, in order.
    #[inline]
    pub fn is_near(&self, other: &Line) -> bool {
        self.p0.is_near(&other.p0) && self.p1.is_near(&other.p1)
    }
}
