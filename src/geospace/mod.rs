//! Local→external coordinate transforms.
//!
//! A [`GeoSpace`] maps points authored in a local frame, where a riblet's
//! pattern occupies x∈[−1, 1], onto the external frame. The transforms are
//! always applied in the same order:
//!
//! ```text
//! scale → perspective shear → rotation → translation
//! ```
//!
//! The perspective step is a linear approximation: the local y axis is tilted
//! by an angle interpolated from `start_angle` at x = −1 to `end_angle` at
//! x = +1, and scaled by a factor interpolated from `start_scale` to
//! `end_scale`. Adjacent riblets share their guide angle at the common edge,
//! which is what makes a ribbon look continuous instead of faceted.

mod stack;

pub use stack::GeoSpaceStack;

use crate::float_types::{PERSPECTIVE_SHIFT_LIMIT, PI, Real};
use crate::geometry::{Point, PointExt, lerp, shorter_angular_distance, wrap};
use crate::traits::PointMap;
use nalgebra::{Rotation2, Translation2, Vector2};
use std::fmt;

/// A transformed coordinate space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoSpace {
    angle: Real,
    scale: Vector2<Real>,
    origin: Point,
    start_angle: Real,
    end_angle: Real,
    start_scale: Real,
    end_scale: Real,
}

impl Default for GeoSpace {
    /// The identity transform.
    fn default() -> Self {
        GeoSpace::new(0.0, 1.0, 1.0, Point::origin())
    }
}

impl GeoSpace {
    /// A space rotated by `angle`, scaled by `(x_scale, y_scale)` and moved to
    /// `origin`, with no perspective and no taper.
    pub fn new(angle: Real, x_scale: Real, y_scale: Real, origin: Point) -> Self {
        GeoSpace {
            angle,
            scale: Vector2::new(x_scale, y_scale),
            origin,
            start_angle: 0.0,
            end_angle: 0.0,
            start_scale: 1.0,
            end_scale: 1.0,
        }
    }

    /// Set the y axis tilt at local x = −1 and x = +1.
    pub fn with_guides(mut self, start_angle: Real, end_angle: Real) -> Self {
        self.start_angle = start_angle;
        self.end_angle = end_angle;
        self
    }

    /// Set the y scale factor at local x = −1 and x = +1.
    pub fn with_taper(mut self, start_scale: Real, end_scale: Real) -> Self {
        self.start_scale = start_scale;
        self.end_scale = end_scale;
        self
    }

    /// A uniformly scaled space whose local x∈[−1, 1] runs from `p0` to `p1`.
    ///
    /// ```
    /// use mandala::geometry::Point;
    /// use mandala::geospace::GeoSpace;
    /// let space = GeoSpace::between(&Point::new(0.0, 0.0), &Point::new(0.0, 2.0));
    /// let end = space.external_pos(&Point::new(1.0, 0.0));
    /// assert!((end.y - 2.0).abs() < 1e-9 && end.x.abs() < 1e-9);
    /// ```
    pub fn between(p0: &Point, p1: &Point) -> Self {
        let scale = p0.distance_to(p1) / 2.0;
        GeoSpace::new(p0.angle_to(p1), scale, scale, lerp(p0, p1, 0.5))
    }

    pub const fn angle(&self) -> Real {
        self.angle
    }

    /// `(x_scale, y_scale)`
    pub fn scale(&self) -> (Real, Real) {
        (self.scale.x, self.scale.y)
    }

    pub const fn origin(&self) -> Point {
        self.origin
    }

    pub const fn start_angle(&self) -> Real {
        self.start_angle
    }

    pub const fn end_angle(&self) -> Real {
        self.end_angle
    }

    pub const fn start_scale(&self) -> Real {
        self.start_scale
    }

    pub const fn end_scale(&self) -> Real {
        self.end_scale
    }

    pub fn set_y_scale(&mut self, scale: Real) {
        self.scale.y = scale;
    }

    /// Scale both axes by `factor`.
    pub fn scale_by(&mut self, factor: Real) {
        self.scale *= factor;
    }

    pub fn scale_x_by(&mut self, factor: Real) {
        self.scale.x *= factor;
    }

    pub fn scale_y_by(&mut self, factor: Real) {
        self.scale.y *= factor;
    }

    /// Rotate the space around its local origin.
    ///
    /// A mirrored space turns the other way in external coordinates, so the
    /// applied angle is adjusted for the sign of each scale.
    pub fn rotate(&mut self, theta: Real) {
        let theta = match (self.scale.x < 0.0, self.scale.y < 0.0) {
            (true, true) => theta + PI,
            (false, true) => -theta,
            (true, false) => PI - theta,
            (false, false) => theta,
        };
        self.angle = wrap(self.angle + theta);
    }

    /// Move the origin to the external position of the local point `pos`.
    pub fn set_origin(&mut self, pos: &Point) {
        self.origin = self.external_pos(pos);
    }

    /// Apply all transformations to a local point and return the external
    /// equivalent.
    pub fn external_pos(&self, pos: &Point) -> Point {
        let scaled = Point::new(pos.x * self.scale.x, pos.y * self.scale.y);
        // Interpolation parameter comes from the unscaled x, so an x scale of
        // zero collapses the space instead of dividing by zero.
        let s = (pos.x + 1.0) / 2.0;
        let sheared = self.apply_perspective(&scaled, s);
        Translation2::from(self.origin.coords) * (Rotation2::new(self.angle) * sheared)
    }

    /// Linear approximation of a perspective transform at interpolation
    /// parameter `s` (0 at local x = −1, 1 at local x = +1).
    fn apply_perspective(&self, point: &Point, s: Real) -> Point {
        let y_scale = self.start_scale + (self.end_scale - self.start_scale) * s;
        let angle = Self::angle_gradient(self.start_angle, self.end_angle, s);
        let shift = (y_scale * point.y * -angle.tan())
            .clamp(-PERSPECTIVE_SHIFT_LIMIT, PERSPECTIVE_SHIFT_LIMIT);
        Point::new(point.x + shift, point.y * y_scale)
    }

    /// Angle `p` of the way from `angle1` to `angle2`, travelling along the
    /// shorter arc. The result is wrapped into (−π, π].
    ///
    /// Both inputs must already be wrapped; the guide angles of a ribbon are
    /// half of a wrapped angle, so they always are.
    ///
    /// ```
    /// use mandala::float_types::{PI, Real};
    /// use mandala::geospace::GeoSpace;
    /// let a = GeoSpace::angle_gradient((179.0 as Real).to_radians(), (-179.0 as Real).to_radians(), 0.5);
    /// assert!((a.abs() - PI).abs() < 1e-5);
    /// ```
    pub fn angle_gradient(angle1: Real, angle2: Real, p: Real) -> Real {
        debug_assert!(
            angle1.abs() <= PI && angle2.abs() <= PI,
            "gradient angles not within [-pi, pi]: {angle1}, {angle2}"
        );
        let delta = shorter_angular_distance(angle1, angle2);
        wrap(angle1 + p * delta)
    }
}

impl PointMap for GeoSpace {
    #[inline]
    fn map_point(&self, point: &Point) -> Point {
        self.external_pos(point)
    }
}

impl fmt::Display for GeoSpace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({:.2},{:.2}), {:.0}°, [{:.2}, {:.2}], [{:.0}°,{:.0}°]",
            self.origin.x,
            self.origin.y,
            self.angle.to_degrees(),
            self.scale.x,
            self.scale.y,
            self.start_angle.to_degrees(),
            self.end_angle.to_degrees()
        )
    }
}
