//! `Pattern`: an ordered collection of lines in a local, roughly unit-sized
//! space.
//!
//! Patterns are values. Combining, repeating or slicing always copies lines,
//! so two patterns never share state.

mod compose;
pub mod library;
mod slice;

use crate::float_types::Real;
use crate::geometry::{Line, Point};
use crate::traits::{PointMap, Transformable};
use geo::{BoundingRect, Coord, LineString, MultiLineString, Rect};

/// A collection of lines.
///
/// Lines keep their insertion order and duplicates are kept; call
/// [`Pattern::dedup_near`] when duplicates must go.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Pattern {
    lines: Vec<Line>,
}

impl Pattern {
    pub const fn new() -> Self {
        Pattern { lines: Vec::new() }
    }

    pub fn from_lines(lines: Vec<Line>) -> Self {
        Pattern { lines }
    }

    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Line> {
        self.lines.iter()
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Add a copy of `line`.
    pub fn add(&mut self, line: Line) {
        self.lines.push(line);
    }

    /// Copy all lines from another pattern into this one.
    pub fn combine(&mut self, other: &Pattern) {
        self.lines.extend_from_slice(&other.lines);
    }

    /// Drop every line that is near (pairwise, in order) an earlier line.
    pub fn dedup_near(&mut self) {
        let mut kept: Vec<Line> = Vec::with_capacity(self.lines.len());
        for line in self.lines.drain(..) {
            if !kept.iter().any(|k| k.is_near(&line)) {
                kept.push(line);
            }
        }
        self.lines = kept;
    }

    /// Bounding box over every endpoint, or `None` for an empty pattern.
    pub fn bounds(&self) -> Option<Rect<Real>> {
        MultiLineString::from(self).bounding_rect()
    }

    /// Extent along the x axis.
    pub fn width(&self) -> Real {
        self.bounds().map_or(0.0, |rect| rect.width())
    }

    /// Extent along the y axis.
    pub fn height(&self) -> Real {
        self.bounds().map_or(0.0, |rect| rect.height())
    }

    pub fn offset_x(&mut self, delta_x: Real) {
        self.for_each_point(|p| p.x += delta_x);
    }

    pub fn offset_y(&mut self, delta_y: Real) {
        self.for_each_point(|p| p.y += delta_y);
    }

    pub fn scale_x(&mut self, scale_x: Real) {
        self.for_each_point(|p| p.x *= scale_x);
    }

    pub fn scale_y(&mut self, scale_y: Real) {
        self.for_each_point(|p| p.y *= scale_y);
    }

    /// Mirror across the x axis.
    pub fn flip_y(&mut self) {
        self.scale_y(-1.0);
    }

    /// Center the pattern on x = 0 and scale it along x to a width of 2.
    ///
    /// Patterns without horizontal extent are left alone.
    pub fn normalize_x(&mut self) {
        let Some(rect) = self.bounds() else {
            return;
        };
        let width = rect.width();
        if width <= Real::EPSILON {
            return;
        }
        let middle = (rect.min().x + rect.max().x) / 2.0;
        self.offset_x(-middle);
        self.scale_x(2.0 / width);
    }

    /// Lay `n - 1` copies of this pattern next to it in the positive x
    /// direction, each shifted by a further 2 units.
    ///
    /// ```
    /// use mandala::geometry::{Line, Point};
    /// use mandala::pattern::Pattern;
    /// let mut pattern = Pattern::from_lines(vec![Line::new(Point::new(-1.0, 0.0), Point::new(1.0, 0.0))]);
    /// pattern.repeat(3);
    /// assert_eq!(pattern.len(), 3);
    /// assert!((pattern.width() - 6.0).abs() < 1e-9);
    /// ```
    pub fn repeat(&mut self, n: usize) {
        let original = self.lines.clone();
        for i in 1..n {
            let offset = 2.0 * i as Real;
            self.lines.extend(original.iter().map(|line| {
                let mut copy = *line;
                copy.p0.x += offset;
                copy.p1.x += offset;
                copy
            }));
        }
    }

    fn for_each_point(&mut self, mut f: impl FnMut(&mut Point)) {
        for line in &mut self.lines {
            f(&mut line.p0);
            f(&mut line.p1);
        }
    }
}

impl Transformable for Pattern {
    fn transform<M: PointMap + ?Sized>(&mut self, map: &M) {
        for line in &mut self.lines {
            *line = map.map_line(line);
        }
    }
}

impl FromIterator<Line> for Pattern {
    fn from_iter<I: IntoIterator<Item = Line>>(iter: I) -> Self {
        Pattern {
            lines: iter.into_iter().collect(),
        }
    }
}

impl Extend<Line> for Pattern {
    fn extend<I: IntoIterator<Item = Line>>(&mut self, iter: I) {
        self.lines.extend(iter);
    }
}

impl IntoIterator for Pattern {
    type Item = Line;
    type IntoIter = std::vec::IntoIter<Line>;

    fn into_iter(self) -> Self::IntoIter {
        self.lines.into_iter()
    }
}

impl<'a> IntoIterator for &'a Pattern {
    type Item = &'a Line;
    type IntoIter = std::slice::Iter<'a, Line>;

    fn into_iter(self) -> Self::IntoIter {
        self.lines.iter()
    }
}

impl From<&Pattern> for MultiLineString<Real> {
    fn from(pattern: &Pattern) -> Self {
        MultiLineString::new(
            pattern
                .iter()
                .map(|line| {
                    LineString::new(vec![
                        Coord { x: line.p0.x, y: line.p0.y },
                        Coord { x: line.p1.x, y: line.p1.y },
                    ])
                })
                .collect(),
        )
    }
}
