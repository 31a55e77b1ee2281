use mandala::{
    curve::{Curve, DEFAULT_ROUNDING_ANGLE, MAX_ROUNDING_PASSES},
    errors::GeometryError,
    float_types::{PI, Real},
    geometry::{Point, PointExt},
    geospace::GeoSpace,
};
use geo::{CoordsIter, LineString};

mod support;
use support::{approx_eq, point_near};

fn square() -> Curve {
    let mut curve = Curve::new(Point::new(0.0, 0.0), false);
    curve.extend(curve.line(&Point::new(1.0, 0.0), 0));
    curve.extend(curve.line(&Point::new(1.0, 1.0), 0));
    curve.extend(curve.line(&Point::new(0.0, 1.0), 0));
    curve.extend(curve.line(&Point::new(0.0, 0.0), 0));
    curve
}

fn zigzag() -> Curve {
    let mut curve = Curve::new(Point::new(0.0, 0.0), false);
    for (i, y) in [1.0, 0.0, 1.0, 0.0].into_iter().enumerate() {
        curve.extend(curve.line(&Point::new((i + 1) as Real, y), 0));
    }
    curve
}

#[test]
fn line_subdivides_evenly() {
    let curve = Curve::new(Point::new(0.0, 0.0), false);
    let points = curve.line(&Point::new(4.0, 2.0), 3);
    assert_eq!(points.len(), 4);
    assert!(point_near(&points[0], &Point::new(1.0, 0.5), 1e-12));
    assert!(point_near(&points[1], &Point::new(2.0, 1.0), 1e-12));
    assert!(point_near(&points[2], &Point::new(3.0, 1.5), 1e-12));
    assert_eq!(points[3], Point::new(4.0, 2.0));
    // generators never touch the curve
    assert_eq!(curve.len(), 1);
}

#[test]
fn flat_arc_is_a_line() {
    let mut curve = Curve::new(Point::new(0.3, -0.2), false);
    curve.extend(curve.sine(&Point::new(1.0, 1.0), 5, 0.3));
    for sub_divs in [0, 1, 7] {
        let end = Point::new(-2.0, 0.5);
        assert_eq!(curve.arc(&end, 0.0, sub_divs), curve.line(&end, sub_divs));
    }
}

#[test]
fn full_arc_is_a_half_circle() {
    let curve = Curve::new(Point::new(2.0, 0.0), false);
    let points = curve.arc(&Point::new(-2.0, 0.0), 1.0, 7);
    assert_eq!(points.len(), 8);
    for p in &points {
        assert!(approx_eq(p.distance_to(&Point::origin()), 2.0, 1e-9), "{p}");
    }
    assert_eq!(points[7], Point::new(-2.0, 0.0));
}

#[test]
fn arc_amplitude_is_clamped() {
    let curve = Curve::new(Point::new(-1.0, 0.0), false);
    let end = Point::new(1.0, 0.0);
    assert_eq!(curve.arc(&end, 3.0, 5), curve.arc(&end, 1.0, 5));
    assert_eq!(curve.arc(&end, -3.0, 5), curve.arc(&end, -1.0, 5));
}

#[test]
fn sine_ends_on_target() {
    let curve = Curve::new(Point::new(1.0, 1.0), false);
    let points = curve.sine(&Point::new(1.0, 5.0), 15, 0.2);
    assert_eq!(points.len(), 16);
    assert_eq!(points[15], Point::new(1.0, 5.0));
    // the wave stays within amplitude · half length of the chord
    for p in &points {
        assert!((p.x - 1.0).abs() <= 0.4 + 1e-9);
    }
}

#[test]
fn returning_to_start_closes_the_curve() {
    let curve = square();
    assert!(curve.is_closed());
    assert_eq!(curve.len(), 4);
    assert_eq!(curve.start(), Point::new(0.0, 0.0));
    assert_eq!(curve.end(), Point::new(0.0, 1.0));
}

#[test]
fn ending_near_start_closes_the_curve() {
    let mut curve = Curve::new(Point::new(0.0, 0.0), false);
    curve.extend(curve.line(&Point::new(1.0, 0.0), 0));
    curve.extend(curve.line(&Point::new(0.5, 1.0), 0));
    curve.extend(curve.line(&Point::new(0.001, -0.001), 2));
    assert!(curve.is_closed());
    assert_eq!(curve.len(), 5);
    assert!(!curve.end().is_near(&curve.start()));
}

#[test]
fn open_curve_stays_open() {
    let curve = zigzag();
    assert!(!curve.is_closed());
    assert_eq!(curve.len(), 5);
}

#[test]
fn closed_length_includes_closing_edge() {
    assert!(approx_eq(square().length(), 4.0, 1e-12));
    assert!(approx_eq(zigzag().length(), 4.0 * (2.0 as Real).sqrt(), 1e-12));
}

#[test]
fn closed_curve_converts_to_closed_line_string() {
    let line_string = LineString::from(&square());
    assert!(line_string.is_closed());
    assert_eq!(line_string.coords_count(), 5);

    let open = LineString::from(&zigzag());
    assert!(!open.is_closed());
    assert_eq!(open.coords_count(), 5);
}

#[test]
fn pattern_has_one_line_per_edge() {
    let closed = square().to_pattern();
    assert_eq!(closed.len(), 4);
    assert_eq!(closed.lines()[3].p1, Point::new(0.0, 0.0));
    assert_eq!(zigzag().to_pattern().len(), 4);
}

#[test]
fn validate_counts_points() {
    let single = Curve::new(Point::origin(), false);
    assert_eq!(
        single.validate(),
        Err(GeometryError::TooFewPoints {
            found: 1,
            minimum: 2,
            closed: false
        })
    );

    let mut pair = Curve::new(Point::origin(), true);
    pair.extend(pair.line(&Point::new(1.0, 0.0), 0));
    assert!(matches!(
        pair.validate(),
        Err(GeometryError::TooFewPoints { minimum: 3, .. })
    ));
    assert!(square().validate().is_ok());
}

#[test]
fn merge_drops_near_neighbours() {
    let mut curve = Curve::new(Point::new(0.0, 0.0), true);
    curve.extend(vec![
        Point::new(0.001, 0.0),
        Point::new(1.0, 0.0),
        Point::new(1.0, 0.002),
        Point::new(1.0, 1.0),
        Point::new(0.0, 0.5),
    ]);
    curve.merge_near_duplicates();
    assert_eq!(
        curve.points(),
        &[
            Point::new(0.0, 0.0),
            Point::new(1.0, 0.0),
            Point::new(1.0, 1.0),
            Point::new(0.0, 0.5)
        ]
    );
}

#[test]
fn permissive_rounding_is_a_no_op() {
    for curve in [square(), zigzag()] {
        let mut rounded = curve.clone();
        assert_eq!(rounded.round(PI), Ok(()));
        assert_eq!(rounded, curve);
    }
}

#[test]
fn spike_is_rounded_away() {
    let mut curve = Curve::new(Point::new(0.0, 0.0), false);
    curve.extend(curve.line(&Point::new(1.0, 0.0), 0));
    curve.extend(curve.line(&Point::new(0.0, 0.1), 0));
    assert_eq!(curve.sharp_corners(DEFAULT_ROUNDING_ANGLE), vec![1]);

    curve.round(DEFAULT_ROUNDING_ANGLE).unwrap();
    assert!(curve.sharp_corners(DEFAULT_ROUNDING_ANGLE).is_empty());
    assert_eq!(curve.len(), 4);
    // the end points are never moved
    assert_eq!(curve.start(), Point::new(0.0, 0.0));
    assert_eq!(curve.end(), Point::new(0.0, 0.1));
}

#[test]
fn gentle_corners_survive_default_rounding() {
    let mut curve = Curve::new(Point::new(0.0, 0.0), false);
    curve.extend(curve.line(&Point::new(1.0, 0.0), 0));
    curve.extend(curve.line(&Point::new(2.0, 0.5), 0));
    curve.extend(curve.line(&Point::new(3.0, 0.5), 0));
    let original = curve.clone();
    curve.round(DEFAULT_ROUNDING_ANGLE).unwrap();
    assert_eq!(curve, original);
}

#[test]
fn strict_rounding_of_a_triangle_gives_up() {
    let mut curve = Curve::new(Point::new(0.0, 0.0), true);
    curve.extend(vec![Point::new(1.0, 0.0), Point::new(0.5, 0.8)]);
    match curve.round(0.0) {
        Err(GeometryError::NotRoundable { passes, .. }) => {
            assert!(passes >= 1 && passes <= MAX_ROUNDING_PASSES);
        }
        other => panic!("expected NotRoundable, got {other:?}"),
    }
}

#[test]
fn reshape_maps_every_point() {
    let mut curve = square();
    let space = GeoSpace::new(0.0, 2.0, -1.0, Point::new(5.0, 5.0));
    curve.reshape(&space);
    assert!(curve.is_closed());
    assert_eq!(curve.points()[2], Point::new(7.0, 4.0));
}
