use crate::curve::Curve;
use crate::errors::GeometryError;
use crate::float_types::{FRAC_PI_2, PI, ROUNDING_FRACTION, Real};
use crate::geometry::{Point, PointExt, corner_angle, lerp};

/// Default rounding threshold: turns sharper than a right angle get rounded.
pub const DEFAULT_ROUNDING_ANGLE: Real = FRAC_PI_2;

/// Rounding passes after which a curve that still has sharp corners is given
/// up on.
pub const MAX_ROUNDING_PASSES: usize = 16;

impl Curve {
    /// How far the path turns at `corner`: 0 when it runs straight through,
    /// π when it folds back on itself.
    fn turning_angle(&self, previous: usize, corner: usize, next: usize) -> Real {
        let inner = corner_angle(
            &self.points[previous],
            &self.points[corner],
            &self.points[next],
        );
        PI - inner.abs()
    }

    /// Indices of the points where the curve turns by more than `max_turn`.
    ///
    /// The first and last points of an open curve are never corners.
    pub fn sharp_corners(&self, max_turn: Real) -> Vec<usize> {
        let count = self.points.len();
        if count < 3 {
            return Vec::new();
        }
        let is_sharp = |corner: usize| {
            let previous = (corner + count - 1) % count;
            let next = (corner + 1) % count;
            self.turning_angle(previous, corner, next) > max_turn
        };
        let corners = if self.closed { 0..count } else { 1..count - 1 };
        corners.filter(|&corner| is_sharp(corner)).collect()
    }

    /// Replace sharp corners with pairs of gentler ones.
    ///
    /// Each point where the curve turns by more than `max_turn` is replaced by
    /// two points placed along its two edges. The pass repeats until no sharp
    /// corner is left, merging points that end up on top of each other after
    /// every pass.
    ///
    /// Fails with [`GeometryError::NotRoundable`] if the curve drops below its
    /// minimum point count or still has sharp corners after
    /// [`MAX_ROUNDING_PASSES`] passes. The curve is left in its partially
    /// rounded state and should be discarded.
    pub fn round(&mut self, max_turn: Real) -> Result<(), GeometryError> {
        let mut corners = self.sharp_corners(max_turn);
        let mut passes = 0;
        while !corners.is_empty() {
            if passes == MAX_ROUNDING_PASSES {
                return Err(self.not_roundable(passes));
            }
            passes += 1;

            let rounds: Vec<(usize, (Point, Point))> = corners
                .iter()
                .map(|&corner| (corner, self.round_point(corner)))
                .collect();
            for (inserted, (corner, (before, after))) in rounds.into_iter().enumerate() {
                let index = corner + inserted;
                self.points[index] = after;
                self.points.insert(index, before);
            }

            self.merge_near_duplicates();
            if self.points.len() < self.min_points() {
                return Err(self.not_roundable(passes));
            }
            corners = self.sharp_corners(max_turn);
        }
        Ok(())
    }

    /// The two points that replace the corner at `corner`, each at the
    /// rounding fraction of the shorter adjacent edge from the corner.
    fn round_point(&self, corner: usize) -> (Point, Point) {
        let count = self.points.len();
        let p1 = self.points[(corner + count - 1) % count];
        let p2 = self.points[corner];
        let p3 = self.points[(corner + 1) % count];
        let d1 = p2.distance_to(&p1);
        let d2 = p2.distance_to(&p3);
        let d = d1.min(d2);
        if d <= 0.0 {
            // coincident neighbour; the merge after this pass removes it
            return (p2, p2);
        }
        (
            lerp(&p2, &p1, ROUNDING_FRACTION * (d / d1)),
            lerp(&p2, &p3, ROUNDING_FRACTION * (d / d2)),
        )
    }

    fn not_roundable(&self, passes: usize) -> GeometryError {
        tracing::debug!(
            points = self.points.len(),
            passes,
            closed = self.closed,
            "curve not roundable"
        );
        GeometryError::NotRoundable {
            points: self.points.len(),
            passes,
        }
    }
}
