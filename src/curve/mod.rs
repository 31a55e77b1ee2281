//! `Curve`: an ordered, optionally closed run of points.
//!
//! Curves are grown in two steps. A generator ([`Curve::line`],
//! [`Curve::sine`], [`Curve::arc`]) computes the points of a new segment from
//! the current end without touching the curve, and [`Curve::extend`] commits
//! them. A rejected draw can therefore be thrown away without any cleanup.

mod generators;
mod rounding;

pub use generators::{
    DEFAULT_ARC_SUBDIVISIONS, DEFAULT_LINE_SUBDIVISIONS, DEFAULT_SINE_AMPLITUDE,
    DEFAULT_SINE_SUBDIVISIONS,
};
pub use rounding::{DEFAULT_ROUNDING_ANGLE, MAX_ROUNDING_PASSES};

use crate::errors::GeometryError;
use crate::float_types::Real;
use crate::geometry::{Line, Point, PointExt};
use crate::pattern::Pattern;
use crate::traits::{PointMap, Transformable};
use geo::{Coord, LineString};

/// A continuous series of points.
///
/// Points are addressed by index; [`Curve::start`] and [`Curve::end`] are the
/// first and last entries. A closed curve has an implicit edge from the last
/// point back to the first.
#[derive(Debug, Clone, PartialEq)]
pub struct Curve {
    points: Vec<Point>,
    closed: bool,
}

impl Curve {
    /// A curve holding only its starting point.
    pub fn new(start: Point, closed: bool) -> Self {
        Curve {
            points: vec![start],
            closed,
        }
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub const fn is_closed(&self) -> bool {
        self.closed
    }

    pub fn start(&self) -> Point {
        self.points[0]
    }

    pub fn end(&self) -> Point {
        self.points[self.points.len() - 1]
    }

    /// Smallest valid point count: 2 for an open curve, 3 for a closed one.
    pub const fn min_points(&self) -> usize {
        if self.closed { 3 } else { 2 }
    }

    /// Check the point count against [`Curve::min_points`].
    pub fn validate(&self) -> Result<(), GeometryError> {
        if self.points.len() < self.min_points() {
            return Err(GeometryError::TooFewPoints {
                found: self.points.len(),
                minimum: self.min_points(),
                closed: self.closed,
            });
        }
        Ok(())
    }

    /// Append a generated run of points.
    ///
    /// If the run ends near the start of the curve, the curve closes itself
    /// and the duplicate closing point is dropped.
    ///
    /// ```
    /// use mandala::curve::Curve;
    /// use mandala::geometry::Point;
    /// let mut curve = Curve::new(Point::new(0.0, 0.0), false);
    /// curve.extend(curve.line(&Point::new(1.0, 0.0), 0));
    /// curve.extend(curve.line(&Point::new(0.0, 1.0), 0));
    /// curve.extend(curve.line(&Point::new(0.0, 0.0), 0));
    /// assert!(curve.is_closed());
    /// assert_eq!(curve.len(), 3);
    /// ```
    pub fn extend(&mut self, points: Vec<Point>) {
        if points.is_empty() {
            return;
        }
        self.points.extend(points);
        if self.points.len() > 1 && self.end().is_near(&self.start()) {
            self.closed = true;
            self.points.pop();
        }
    }

    /// Proximity merge: drop every point that is near the last point kept
    /// before it. On a closed curve the last point is also dropped when it is
    /// near the first. The first point always survives.
    pub fn merge_near_duplicates(&mut self) {
        let mut kept: Vec<Point> = Vec::with_capacity(self.points.len());
        for point in self.points.drain(..) {
            if kept.last().is_none_or(|last| !last.is_near(&point)) {
                kept.push(point);
            }
        }
        if self.closed && kept.len() > 1 && kept[kept.len() - 1].is_near(&kept[0]) {
            kept.pop();
        }
        self.points = kept;
    }

    /// Total length, including the closing edge of a closed curve.
    pub fn length(&self) -> Real {
        let open: Real = self
            .points
            .windows(2)
            .map(|pair| pair[0].distance_to(&pair[1]))
            .sum();
        if self.closed && self.points.len() > 1 {
            open + self.end().distance_to(&self.start())
        } else {
            open
        }
    }

    /// Apply `map` to every point in place.
    pub fn reshape<M: PointMap + ?Sized>(&mut self, map: &M) {
        for point in &mut self.points {
            *point = map.map_point(point);
        }
    }

    /// One line per edge, including the closing edge of a closed curve.
    pub fn to_pattern(&self) -> Pattern {
        let mut result: Pattern = self
            .points
            .windows(2)
            .map(|pair| Line::new(pair[0], pair[1]))
            .collect();
        if self.closed && self.points.len() > 1 {
            result.add(Line::new(self.end(), self.start()));
        }
        result
    }
}

impl Transformable for Curve {
    fn transform<M: PointMap + ?Sized>(&mut self, map: &M) {
        self.reshape(map);
    }
}

impl From<&Curve> for LineString<Real> {
    /// Closed curves produce a closed line string.
    fn from(curve: &Curve) -> Self {
        let mut coords: Vec<Coord<Real>> = curve
            .points
            .iter()
            .map(|p| Coord { x: p.x, y: p.y })
            .collect();
        if curve.closed && !coords.is_empty() {
            coords.push(coords[0]);
        }
        LineString::new(coords)
    }
}
