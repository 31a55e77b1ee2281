//! Geometry errors

use crate::geometry::Point;

/// All the recoverable conditions a curve or ribbon build can run into.
///
/// None of these are fatal: a generator that hits one is expected to throw the
/// offending curve away and draw a new one.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GeometryError {
    /// (NotRoundable) Corner rounding collapsed the curve or never settled
    #[error("(NotRoundable) Curve not roundable: {points} point(s) left after {passes} pass(es)")]
    NotRoundable { points: usize, passes: usize },
    /// (TooFewPoints) A curve has fewer than the minimal #points
    #[error("(TooFewPoints) Curve needs at least {minimum} points, found {found} (closed: {closed})")]
    TooFewPoints {
        found: usize,
        minimum: usize,
        closed: bool,
    },
    /// (DegenerateSegment) Two consecutive curve points coincide exactly
    #[error("(DegenerateSegment) Segment {index} has zero length at: {point}")]
    DegenerateSegment { index: usize, point: Point },
    /// (InvalidRepeats) A ribbon needs at least one pattern repeat
    #[error("(InvalidRepeats) A ribbon needs at least one pattern repeat, got {0}")]
    InvalidRepeats(usize),
}
