use crate::canvas::Canvas;
use crate::float_types::Real;
use crate::geometry::{Point, PointExt};
use crate::geospace::GeoSpace;
use crate::pattern::Pattern;
use crate::traits::PointMap;

/// Local y offset used to probe how fast the riblet edges converge.
const COLLISION_PROBE_Y: Real = 0.01;

/// Changes in edge distance below this mean the edges never meet in practice.
const COLLISION_DELTA_THRESHOLD: Real = 0.001;

/// One curve segment's piece of a ribbon: a coordinate space and the slice
/// of the pattern drawn in it.
#[derive(Debug, Clone, PartialEq)]
pub struct Riblet {
    geo_space: GeoSpace,
    pattern: Pattern,
}

impl Riblet {
    pub const fn new(geo_space: GeoSpace, pattern: Pattern) -> Self {
        Riblet { geo_space, pattern }
    }

    pub const fn geo_space(&self) -> &GeoSpace {
        &self.geo_space
    }

    /// The pattern slice, in local x∈[−1, 1].
    pub const fn pattern(&self) -> &Pattern {
        &self.pattern
    }

    pub(crate) fn set_width(&mut self, width: Real) {
        self.geo_space.set_y_scale(width);
    }

    /// The external y at which the guide-angle shear makes the riblet's edges
    /// at x = −1 and x = +1 meet, or 0 when they (practically) never do.
    ///
    /// Only the shear matters for where the edges meet, so the distance is
    /// probed in a space carrying just the guide angles, extrapolated
    /// linearly to zero, and converted to external units through the x scale.
    /// The sign tells on which side of the curve the collision happens.
    pub fn collision_height(&self) -> Real {
        let shear = GeoSpace::default()
            .with_guides(self.geo_space.start_angle(), self.geo_space.end_angle());
        let edge_distance = |y: Real| {
            let left = shear.external_pos(&Point::new(-1.0, y));
            let right = shear.external_pos(&Point::new(1.0, y));
            left.distance_to(&right)
        };
        let d0 = edge_distance(0.0);
        let d1 = edge_distance(COLLISION_PROBE_Y);
        let dd = d1 - d0;
        if dd.abs() < COLLISION_DELTA_THRESHOLD {
            return 0.0;
        }
        d0 / dd * COLLISION_PROBE_Y * self.geo_space.scale().0
    }

    /// The pattern slice mapped to external coordinates.
    pub fn to_pattern(&self) -> Pattern {
        self.geo_space.map_pattern(&self.pattern)
    }

    /// Draw the pattern slice inside this riblet's space.
    pub fn render<C: Canvas + ?Sized>(&self, canvas: &mut C) {
        canvas.push_geo_space(&self.geo_space);
        for line in &self.pattern {
            canvas.draw_line(line);
        }
        canvas.pop_geo_space();
    }
}
