use crate::geometry::{Line, Point};
use crate::pattern::Pattern;

/// Anything that maps a local point to an external one.
///
/// Implementors only provide [`PointMap::map_point`]; lines and patterns are
/// mapped endpoint by endpoint.
pub trait PointMap {
    fn map_point(&self, point: &Point) -> Point;

    /// Returns the line with both endpoints mapped.
    fn map_line(&self, line: &Line) -> Line {
        Line::new(self.map_point(&line.p0), self.map_point(&line.p1))
    }

    /// Returns a new pattern with every line mapped.
    fn map_pattern(&self, pattern: &Pattern) -> Pattern {
        pattern.iter().map(|line| self.map_line(line)).collect()
    }
}

/// Geometry that accepts a point transform in place.
pub trait Transformable: Sized + Clone {
    fn transform<M: PointMap + ?Sized>(&mut self, map: &M);

    /// Returns a transformed copy, leaving `self` untouched.
    fn transformed<M: PointMap + ?Sized>(&self, map: &M) -> Self {
        let mut copy = self.clone();
        copy.transform(map);
        copy
    }
}

impl Transformable for Point {
    fn transform<M: PointMap + ?Sized>(&mut self, map: &M) {
        *self = map.map_point(self);
    }
}

impl Transformable for Line {
    fn transform<M: PointMap + ?Sized>(&mut self, map: &M) {
        *self = map.map_line(self);
    }
}
