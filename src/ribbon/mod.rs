//! `Ribbon`: a pattern tiled along a curve.
//!
//! Every curve segment becomes a [`Riblet`]: a [`GeoSpace`] spanning the
//! segment plus the slice of the tiled pattern that falls on it. The guide
//! angles of two neighbouring riblets agree at their shared point, so the
//! sheared slices meet without a visible seam.

mod riblet;

pub use riblet::Riblet;

use crate::canvas::Canvas;
use crate::curve::Curve;
use crate::errors::GeometryError;
use crate::float_types::Real;
use crate::geometry::{Point, PointExt, lerp, shorter_angular_distance};
use crate::geospace::GeoSpace;
use crate::pattern::Pattern;
use std::fmt;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// A repeating pattern stretched along a curve.
#[derive(Debug, Clone, PartialEq)]
pub struct Ribbon {
    curve: Curve,
    pattern: Pattern,
    closed: bool,
    width: Real,
    taper_length: Real,
    repeats: usize,
    taper_index: usize,
    length: Real,
    riblets: Vec<Riblet>,
}

/// Inputs shared by every riblet of one ribbon.
struct Layout<'a> {
    points: &'a [Point],
    closed: bool,
    width: Real,
    taper_index: usize,
    tiled: Pattern,
}

impl Ribbon {
    /// Build a ribbon of `repeats` copies of `pattern` along `curve`.
    ///
    /// `pattern` is expected to span local x∈[−1, 1]. `taper_length` is the
    /// fraction of the curve's points over which an open ribbon narrows to
    /// zero at each end; it has no effect on a closed ribbon. `closed` decides
    /// whether the edge from the last point back to the first is covered.
    ///
    /// Fails if the curve has too few points for `closed`, if `repeats` is
    /// zero, or if two consecutive points coincide.
    pub fn new(
        curve: Curve,
        pattern: Pattern,
        closed: bool,
        width: Real,
        taper_length: Real,
        repeats: usize,
    ) -> Result<Self, GeometryError> {
        if repeats == 0 {
            return Err(GeometryError::InvalidRepeats(repeats));
        }
        let points = curve.points();
        let minimum = if closed { 3 } else { 2 };
        if points.len() < minimum {
            return Err(GeometryError::TooFewPoints {
                found: points.len(),
                minimum,
                closed,
            });
        }

        let segments = if closed { points.len() } else { points.len() - 1 };
        // cumulative arc length at the start of every segment, plus the total
        let mut offsets = Vec::with_capacity(segments + 1);
        offsets.push(0.0);
        for i in 0..segments {
            let segment = points[i].distance_to(&points[(i + 1) % points.len()]);
            if segment <= Real::EPSILON {
                return Err(GeometryError::DegenerateSegment {
                    index: i,
                    point: points[i],
                });
            }
            offsets.push(offsets[i] + segment);
        }
        let length = offsets[segments];

        let mut tiled = pattern.clone();
        tiled.repeat(repeats + 2);
        tiled.offset_x(-1.0);
        tiled.scale_x(length / repeats as Real / 2.0);

        let taper_index = (taper_length * (points.len() - 1) as Real).floor().max(0.0) as usize;
        let riblets = Layout {
            points,
            closed,
            width,
            taper_index,
            tiled,
        }
        .riblets(&offsets);

        tracing::debug!(
            riblets = riblets.len(),
            length,
            repeats,
            closed,
            width,
            "built ribbon"
        );

        Ok(Ribbon {
            curve,
            pattern,
            closed,
            width,
            taper_length,
            repeats,
            taper_index,
            length,
            riblets,
        })
    }

    pub fn riblets(&self) -> &[Riblet] {
        &self.riblets
    }

    pub const fn width(&self) -> Real {
        self.width
    }

    /// Arc length covered by the riblets.
    pub const fn length(&self) -> Real {
        self.length
    }

    pub const fn repeats(&self) -> usize {
        self.repeats
    }

    pub const fn is_closed(&self) -> bool {
        self.closed
    }

    pub const fn curve(&self) -> &Curve {
        &self.curve
    }

    /// The untiled pattern the ribbon was built from.
    pub const fn pattern(&self) -> &Pattern {
        &self.pattern
    }

    pub const fn taper_length(&self) -> Real {
        self.taper_length
    }

    /// Width factor at curve point `index`: 1 on a closed or untapered
    /// ribbon, otherwise ramping from 0 at either end up to 1.
    pub fn taper_scale(&self, index: usize) -> Real {
        taper_scale(self.curve.len(), self.closed, self.taper_index, index)
    }

    /// Shrink the width, uniformly over all riblets, to the smallest width at
    /// which any riblet's edges would cross. Returns the resulting width,
    /// which is never larger than before.
    pub fn un_collide_width(&mut self) -> Real {
        let collision_width = self
            .riblets
            .iter()
            .map(Riblet::collision_height)
            .filter(|&height| height != 0.0)
            .fold(self.width, |width, height| width.min(height.abs()));

        if collision_width != self.width {
            tracing::debug!(
                from = self.width,
                to = collision_width,
                "shrinking ribbon width to avoid edge collision"
            );
            for riblet in &mut self.riblets {
                riblet.set_width(collision_width);
            }
            self.width = collision_width;
        }
        self.width
    }

    /// A copy of this ribbon with its curve mapped through `geo_space`.
    ///
    /// A mirroring space also mirrors the pattern vertically, so the copy
    /// keeps facing the same way relative to its curve.
    pub fn reshaped(&self, geo_space: &GeoSpace) -> Result<Ribbon, GeometryError> {
        let mut curve = self.curve.clone();
        curve.reshape(geo_space);
        let mut pattern = self.pattern.clone();
        let (x_scale, y_scale) = geo_space.scale();
        if x_scale * y_scale < 0.0 {
            pattern.flip_y();
        }
        Ribbon::new(
            curve,
            pattern,
            self.closed,
            self.width,
            self.taper_length,
            self.repeats,
        )
    }

    /// Draw every riblet on `canvas`.
    pub fn render<C: Canvas + ?Sized>(&self, canvas: &mut C) {
        for riblet in &self.riblets {
            riblet.render(canvas);
        }
    }

    /// All riblets' lines in external coordinates.
    pub fn to_pattern(&self) -> Pattern {
        self.riblets.iter().flat_map(|r| r.to_pattern()).collect()
    }
}

impl fmt::Display for Ribbon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Ribbon({} points, {} riblets, closed={}, width={})",
            self.curve.len(),
            self.riblets.len(),
            self.closed,
            self.width
        )
    }
}

fn taper_scale(count: usize, closed: bool, taper_index: usize, index: usize) -> Real {
    if taper_index < 1 || closed {
        return 1.0;
    }
    let taper = taper_index as Real;
    let from_start = index as Real / taper;
    let from_end = (count as Real - 1.0 - index as Real) / taper;
    from_start.clamp(0.0, 1.0).min(from_end.clamp(0.0, 1.0))
}

impl Layout<'_> {
    /// One riblet per segment; `offsets` holds the arc length at the start of
    /// every segment followed by the total.
    fn riblets(&self, offsets: &[Real]) -> Vec<Riblet> {
        let segments = offsets.len() - 1;

        #[cfg(not(feature = "parallel"))]
        let riblets = (0..segments)
            .map(|i| self.riblet(i, offsets[i], offsets[i + 1]))
            .collect();

        #[cfg(feature = "parallel")]
        let riblets = (0..segments)
            .into_par_iter()
            .map(|i| self.riblet(i, offsets[i], offsets[i + 1]))
            .collect();

        riblets
    }

    /// The riblet for the segment starting at point `i`, covering arc length
    /// `[x0, x1)` of the tiled pattern (`[x0, x1]` for the last segment of an
    /// open ribbon).
    fn riblet(&self, i: usize, x0: Real, x1: Real) -> Riblet {
        let count = self.points.len();
        let p2 = self.points[i];
        let p3 = self.points[(i + 1) % count];
        let previous = (i > 0 || self.closed).then(|| self.points[(i + count - 1) % count]);
        let next = (i + 2 < count || self.closed).then(|| self.points[(i + 2) % count]);

        let current_angle = p2.angle_to(&p3);
        let previous_angle = previous.map_or(current_angle, |p1| p1.angle_to(&p2));
        let next_angle = next.map_or(current_angle, |p4| p3.angle_to(&p4));

        let geo_space = GeoSpace::new(
            current_angle,
            p2.distance_to(&p3) / 2.0,
            self.width,
            lerp(&p2, &p3, 0.5),
        )
        .with_guides(
            shorter_angular_distance(current_angle, previous_angle) / 2.0,
            shorter_angular_distance(current_angle, next_angle) / 2.0,
        )
        .with_taper(
            taper_scale(count, self.closed, self.taper_index, i),
            taper_scale(count, self.closed, self.taper_index, i + 1),
        );

        // an open ribbon's last window has no neighbour to hand its end to
        let last = !self.closed && i + 2 == count;
        let slice = if last {
            self.tiled.slice_inclusive(x0, x1)
        } else {
            self.tiled.slice(x0, x1)
        };
        Riblet::new(geo_space, slice)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Line;

    fn flat_pattern() -> Pattern {
        Pattern::from_lines(vec![Line::new(Point::new(-1.0, 0.0), Point::new(1.0, 0.0))])
    }

    fn straight_curve(points: usize) -> Curve {
        let mut curve = Curve::new(Point::new(0.0, 0.0), false);
        curve.extend(curve.line(&Point::new((points - 1) as Real, 0.0), points - 2));
        curve
    }

    #[test]
    fn taper_ramps_from_both_ends() {
        assert_eq!(taper_scale(11, false, 5, 0), 0.0);
        assert!((taper_scale(11, false, 5, 2) - 0.4).abs() < 1e-12);
        assert_eq!(taper_scale(11, false, 5, 5), 1.0);
        assert!((taper_scale(11, false, 5, 8) - 0.4).abs() < 1e-12);
        assert_eq!(taper_scale(11, false, 5, 10), 0.0);
    }

    #[test]
    fn taper_is_ignored_when_closed_or_short() {
        assert_eq!(taper_scale(11, true, 5, 0), 1.0);
        assert_eq!(taper_scale(11, false, 0, 0), 1.0);
    }

    #[test]
    fn open_ribbon_has_one_riblet_per_edge() {
        let ribbon = Ribbon::new(straight_curve(5), flat_pattern(), false, 0.1, 0.0, 2).unwrap();
        assert_eq!(ribbon.riblets().len(), 4);
        assert!((ribbon.length() - 4.0).abs() < 1e-12);
    }

    #[test]
    fn straight_ribbon_has_no_guides() {
        let ribbon = Ribbon::new(straight_curve(4), flat_pattern(), false, 0.1, 0.0, 1).unwrap();
        for riblet in ribbon.riblets() {
            assert_eq!(riblet.geo_space().start_angle(), 0.0);
            assert_eq!(riblet.geo_space().end_angle(), 0.0);
            assert_eq!(riblet.collision_height(), 0.0);
        }
    }

    #[test]
    fn zero_repeats_rejected() {
        let err = Ribbon::new(straight_curve(3), flat_pattern(), false, 0.1, 0.0, 0).unwrap_err();
        assert_eq!(err, GeometryError::InvalidRepeats(0));
    }
}
