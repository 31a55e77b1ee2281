//! `Point` and the planar helpers used throughout the crate.

use crate::float_types::{Real, collision_threshold};
use nalgebra::{Point2, Rotation2, Vector2};

/// A position in some 2D coordinate space.
///
/// Equality is nalgebra's exact component-wise equality. The approximate
/// "same point" test used for curve closure lives in [`PointExt::is_near`]
/// and is never used as a general equality.
pub type Point = Point2<Real>;

/// Planar helpers on [`Point`].
pub trait PointExt {
    /// Direction from `self` towards `other`, in radians.
    fn angle_to(&self, other: &Point) -> Real;

    /// Euclidean distance.
    fn distance_to(&self, other: &Point) -> Real;

    /// This point rotated by `angle` around `pivot`.
    fn rotated(&self, pivot: &Point, angle: Real) -> Point;

    /// Proximity test: the points are closer than the collision threshold.
    ///
    /// This is not transitive. A chain of points each near its neighbour can
    /// span well beyond the threshold, so it must only be used at the
    /// explicit closure and merge points of a curve.
    fn is_near(&self, other: &Point) -> bool;
}

impl PointExt for Point {
    #[inline]
    fn angle_to(&self, other: &Point) -> Real {
        let d = other - self;
        d.y.atan2(d.x)
    }

    #[inline]
    fn distance_to(&self, other: &Point) -> Real {
        nalgebra::distance(self, other)
    }

    #[inline]
    fn rotated(&self, pivot: &Point, angle: Real) -> Point {
        let offset: Vector2<Real> = self - pivot;
        pivot + Rotation2::new(angle) * offset
    }

    #[inline]
    fn is_near(&self, other: &Point) -> bool {
        self.distance_to(other) < collision_threshold()
    }
}

/// Linear interpolation: `s = 0` gives `a`, `s = 1` gives `b`.
#[inline]
pub fn lerp(a: &Point, b: &Point, s: Real) -> Point {
    a + (b - a) * s
}
