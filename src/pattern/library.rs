//! Stock patterns in the local unit square x, y ∈ [−1, 1].
//!
//! These are the building blocks generators pick from; each call returns a
//! fresh pattern.

use crate::float_types::Real;
use crate::geometry::{Line, Point};
use crate::pattern::Pattern;

fn segment(x0: Real, y0: Real, x1: Real, y1: Real) -> Line {
    Line::new(Point::new(x0, y0), Point::new(x1, y1))
}

/// A vertical line at `x`, from top to bottom.
pub fn vertical_line(x: Real) -> Pattern {
    Pattern::from_lines(vec![segment(x, 1.0, x, -1.0)])
}

/// A horizontal line at `y`, from left to right.
pub fn horizontal_line(y: Real) -> Pattern {
    Pattern::from_lines(vec![segment(-1.0, y, 1.0, y)])
}

/// A corner-to-corner diagonal from (1, 1) to (−1, −1), mirrored along x
/// when `flipped`.
pub fn diagonal(flipped: bool) -> Pattern {
    let mut pattern = Pattern::from_lines(vec![segment(1.0, 1.0, -1.0, -1.0)]);
    if flipped {
        pattern.scale_x(-1.0);
    }
    pattern
}

pub fn left_and_right() -> Pattern {
    let mut pattern = vertical_line(1.0);
    pattern.combine(&vertical_line(-1.0));
    pattern
}

pub fn top_and_bottom() -> Pattern {
    let mut pattern = horizontal_line(1.0);
    pattern.combine(&horizontal_line(-1.0));
    pattern
}

/// The outline of the unit square.
pub fn boxed() -> Pattern {
    let mut pattern = top_and_bottom();
    pattern.combine(&left_and_right());
    pattern
}

/// The unit square with both diagonals.
pub fn crossed_box() -> Pattern {
    let mut pattern = boxed();
    pattern.combine(&diagonal(false));
    pattern.combine(&diagonal(true));
    pattern
}

pub fn center_line() -> Pattern {
    horizontal_line(0.0)
}

/// Top and bottom edges joined by a diagonal.
pub fn zed() -> Pattern {
    let mut pattern = top_and_bottom();
    pattern.combine(&diagonal(true));
    pattern
}

/// Top and bottom edges with three parallel strands between them; tiled
/// along a ribbon the strands read as a twisted rope.
pub fn rope() -> Pattern {
    let mut pattern = top_and_bottom();
    pattern.add(segment(1.0, 1.0, -1.0, -1.0));
    pattern.add(segment(0.0, 1.0, -1.0, 0.0));
    pattern.add(segment(1.0, 0.0, 0.0, -1.0));
    pattern
}
