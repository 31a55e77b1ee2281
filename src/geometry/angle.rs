//! Angle helpers. Angles are radians, kept in (−π, π] by [`wrap`].

use crate::float_types::{PI, Real, TAU};
use crate::geometry::point::{Point, PointExt};

/// Wrap an angle into (−π, π].
#[inline]
pub fn wrap(angle: Real) -> Real {
    let wrapped = (angle + PI).rem_euclid(TAU) - PI;
    if wrapped <= -PI { wrapped + TAU } else { wrapped }
}

/// Radians to degrees.
#[inline]
pub fn degrees(angle: Real) -> Real {
    angle.to_degrees()
}

/// Signed distance from `a1` to `a2` along the shorter arc.
///
/// Both angles are wrapped first. When their plain difference exceeds π
/// (opposite signs, e.g. +179° and −179°) the shorter arc crosses ±π and its
/// length is `2π − |a1| − |a2|`; it is positive when `a1` is the larger angle,
/// since travelling forward from `a1` then passes through π.
///
/// ```
/// use mandala::float_types::Real;
/// use mandala::geometry::shorter_angular_distance;
/// let d = shorter_angular_distance((179.0 as Real).to_radians(), (-179.0 as Real).to_radians());
/// assert!((d - (2.0 as Real).to_radians()).abs() < 1e-5);
/// ```
pub fn shorter_angular_distance(a1: Real, a2: Real) -> Real {
    let angle1 = wrap(a1);
    let angle2 = wrap(a2);
    let dist = (angle2 - angle1).abs();

    if dist > PI {
        let dist = TAU - angle1.abs() - angle2.abs();
        if angle1 > angle2 {
            return dist;
        }
        return -dist;
    }

    angle2 - angle1
}

/// Inner angle at `corner` in the triangle `p1`-`corner`-`p2`.
///
/// Near 0 the two edges fold back onto each other (a spike); near ±π the
/// path runs straight through `corner`.
#[inline]
pub fn corner_angle(p1: &Point, corner: &Point, p2: &Point) -> Real {
    shorter_angular_distance(corner.angle_to(p1), corner.angle_to(p2))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::float_types::FRAC_PI_2;

    #[test]
    fn wrap_keeps_half_open_range() {
        assert!((wrap(PI) - PI).abs() < 1e-12);
        assert!((wrap(-PI) - PI).abs() < 1e-12);
        assert!((wrap(3.0 * PI / 2.0) + FRAC_PI_2).abs() < 1e-12);
        assert!((wrap(0.25) - 0.25).abs() < 1e-12);
    }

    #[test]
    fn shorter_distance_same_sign() {
        assert!((shorter_angular_distance(0.1, 0.4) - 0.3).abs() < 1e-12);
        assert!((shorter_angular_distance(0.4, 0.1) + 0.3).abs() < 1e-12);
    }

    #[test]
    fn shorter_distance_across_pi() {
        let a = 170.0_f64.to_radians() as Real;
        let b = (-170.0_f64).to_radians() as Real;
        let expected = 20.0_f64.to_radians() as Real;
        assert!((shorter_angular_distance(a, b) - expected).abs() < 1e-6);
        assert!((shorter_angular_distance(b, a) + expected).abs() < 1e-6);
    }

    #[test]
    fn corner_angle_straight_and_spike() {
        let straight = corner_angle(
            &Point::new(-1.0, 0.0),
            &Point::new(0.0, 0.0),
            &Point::new(1.0, 0.0),
        );
        assert!((straight.abs() - PI).abs() < 1e-6);

        let spike = corner_angle(
            &Point::new(1.0, 0.0),
            &Point::new(0.0, 0.0),
            &Point::new(1.0, 0.01),
        );
        assert!(spike.abs() < 0.02);
    }
}
