use crate::curve::Curve;
use crate::float_types::{FRAC_PI_2, PI, Real, TAU};
use crate::geometry::{Point, PointExt, lerp};
use crate::geospace::GeoSpace;

pub const DEFAULT_SINE_SUBDIVISIONS: usize = 15;
pub const DEFAULT_SINE_AMPLITUDE: Real = 0.2;
pub const DEFAULT_LINE_SUBDIVISIONS: usize = 0;
pub const DEFAULT_ARC_SUBDIVISIONS: usize = 7;

/// Fraction of the way along a segment of `sub_divs` interior points.
#[inline]
fn step(i: usize, sub_divs: usize) -> Real {
    (i + 1) as Real / (sub_divs + 1) as Real
}

impl Curve {
    /// Points along a straight line from the current end to `end`:
    /// `sub_divs` evenly spaced interior points, then `end` itself.
    pub fn line(&self, end: &Point, sub_divs: usize) -> Vec<Point> {
        let start = self.end();
        (0..sub_divs)
            .map(|i| lerp(&start, end, step(i, sub_divs)))
            .chain(std::iter::once(*end))
            .collect()
    }

    /// One full sine period from the current end to `end`.
    ///
    /// The wave is laid out in the frame between the two points, where the
    /// segment spans local x∈[−1, 1], so `amplitude` is relative to half the
    /// segment length.
    pub fn sine(&self, end: &Point, sub_divs: usize, amplitude: Real) -> Vec<Point> {
        let space = GeoSpace::between(&self.end(), end);
        (0..sub_divs)
            .map(|i| {
                let p = step(i, sub_divs);
                let phase = TAU * p;
                space.external_pos(&Point::new(2.0 * p - 1.0, phase.sin() * amplitude))
            })
            .chain(std::iter::once(*end))
            .collect()
    }

    /// A circular arc from the current end to `end`.
    ///
    /// `amplitude` is clamped to [−1, 1]. At 1 the circle's center sits
    /// halfway between the endpoints and the arc is a half circle; 0 is a
    /// straight line; negative values mirror the arc to the other side.
    ///
    /// ```
    /// use mandala::curve::Curve;
    /// use mandala::geometry::Point;
    /// let curve = Curve::new(Point::new(-1.0, 0.0), false);
    /// let arc = curve.arc(&Point::new(1.0, 0.0), 1.0, 1);
    /// // the midpoint of a half circle of radius 1
    /// assert!((arc[0] - Point::new(0.0, 1.0)).norm() < 1e-9);
    /// ```
    pub fn arc(&self, end: &Point, amplitude: Real, sub_divs: usize) -> Vec<Point> {
        if amplitude == 0.0 {
            return self.line(end, sub_divs);
        }
        let mut curvature = amplitude.clamp(-1.0, 1.0);

        let mut space = GeoSpace::between(&self.end(), end);
        if curvature < 0.0 {
            curvature = -curvature;
            space.scale_y_by(-1.0);
        }

        let half_angle = (1.0 / curvature).atan();
        let pivot = Point::new(0.0, -(2.0 * half_angle - FRAC_PI_2).tan());
        let omega = 2.0 * (PI - 2.0 * half_angle);
        let unit = Point::new(1.0, 0.0);

        (0..sub_divs)
            .map(|i| {
                let phi = (1.0 - step(i, sub_divs)) * omega;
                space.external_pos(&unit.rotated(&pivot, phi))
            })
            .chain(std::iter::once(*end))
            .collect()
    }
}
