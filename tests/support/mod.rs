//! Test support library
//! Provides various helper functions & utilities for tests.

use mandala::{
    float_types::Real,
    geometry::{Line, Point},
    pattern::Pattern,
};

/// Quick helper to compare floating-point results with an acceptable tolerance.
pub fn approx_eq(a: Real, b: Real, eps: Real) -> bool {
    (a - b).abs() < eps
}

/// Both coordinates within `eps`.
pub fn point_near(a: &Point, b: &Point, eps: Real) -> bool {
    approx_eq(a.x, b.x, eps) && approx_eq(a.y, b.y, eps)
}

/// Endpoints pairwise within `eps`, in order.
pub fn line_near(a: &Line, b: &Line, eps: Real) -> bool {
    point_near(&a.p0, &b.p0, eps) && point_near(&a.p1, &b.p1, eps)
}

/// Panics with both patterns printed if they differ beyond `eps`, line by line.
pub fn assert_patterns_near(actual: &Pattern, expected: &Pattern, eps: Real) {
    assert_eq!(
        actual.len(),
        expected.len(),
        "line counts differ:\n{actual:?}\n{expected:?}"
    );
    for (i, (a, e)) in actual.iter().zip(expected).enumerate() {
        assert!(line_near(a, e, eps), "line {i} differs: {a:?} vs {e:?}");
    }
}

/// Sum of all line lengths.
pub fn total_length(pattern: &Pattern) -> Real {
    pattern.iter().map(Line::length).sum()
}

/// A line from `(x0, y0)` to `(x1, y1)`.
pub fn line(x0: Real, y0: Real, x1: Real, y1: Real) -> Line {
    Line::new(Point::new(x0, y0), Point::new(x1, y1))
}
