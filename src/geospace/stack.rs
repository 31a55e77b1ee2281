use crate::geometry::Point;
use crate::geospace::GeoSpace;
use crate::traits::PointMap;

/// Nested coordinate spaces.
///
/// The bottom of the stack is the outermost frame. A point in the local frame
/// of the top space is resolved by applying the top space first, then each
/// space below it in turn.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GeoSpaceStack {
    stack: Vec<GeoSpace>,
}

impl GeoSpaceStack {
    pub const fn new() -> Self {
        GeoSpaceStack { stack: Vec::new() }
    }

    /// Push a copy of `geo_space` as the new innermost frame.
    pub fn push(&mut self, geo_space: &GeoSpace) {
        self.stack.push(*geo_space);
    }

    /// Remove and return the innermost frame.
    pub fn pop(&mut self) -> Option<GeoSpace> {
        self.stack.pop()
    }

    pub fn top(&self) -> Option<&GeoSpace> {
        self.stack.last()
    }

    pub fn len(&self) -> usize {
        self.stack.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stack.is_empty()
    }

    /// Resolve a point in the innermost frame to the global frame.
    pub fn global_pos(&self, pos: &Point) -> Point {
        self.stack
            .iter()
            .rev()
            .fold(*pos, |acc, geo_space| geo_space.external_pos(&acc))
    }
}

impl PointMap for GeoSpaceStack {
    #[inline]
    fn map_point(&self, point: &Point) -> Point {
        self.global_pos(point)
    }
}
