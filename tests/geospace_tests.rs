use mandala::{
    float_types::{FRAC_PI_2, PI, Real},
    geometry::{Point, wrap},
    geospace::{GeoSpace, GeoSpaceStack},
    pattern::Pattern,
    traits::{PointMap, Transformable},
};

mod support;
use support::{approx_eq, line, point_near};

#[test]
fn identity_space_is_a_no_op() {
    let space = GeoSpace::default();
    for x in -4..=4 {
        for y in -4..=4 {
            let p = Point::new(x as Real * 0.37, y as Real * -1.3);
            assert_eq!(space.external_pos(&p), p);
        }
    }
}

#[test]
fn between_maps_unit_span_to_endpoints() {
    let p0 = Point::new(1.0, 2.0);
    let p1 = Point::new(-3.0, 5.0);
    let space = GeoSpace::between(&p0, &p1);
    assert!(point_near(&space.external_pos(&Point::new(-1.0, 0.0)), &p0, 1e-9));
    assert!(point_near(&space.external_pos(&Point::new(1.0, 0.0)), &p1, 1e-9));
    assert!(point_near(&space.external_pos(&Point::origin()), &space.origin(), 1e-12));
}

#[test]
fn angle_gradient_hits_both_ends() {
    let pairs = [(0.3, 2.9), (-2.5, 2.5), (3.0, -3.0), (-1.0, 0.5), (PI, -FRAC_PI_2)];
    for (a1, a2) in pairs {
        assert!(approx_eq(GeoSpace::angle_gradient(a1, a2, 0.0), wrap(a1), 1e-12));
        assert!(approx_eq(
            wrap(GeoSpace::angle_gradient(a1, a2, 1.0) - a2),
            0.0,
            1e-9
        ));
    }
}

#[test]
fn angle_gradient_takes_the_shorter_arc() {
    let a1 = (179.0 as Real).to_radians();
    let a2 = (-179.0 as Real).to_radians();
    let mid = GeoSpace::angle_gradient(a1, a2, 0.5);
    assert!(approx_eq(mid.abs(), PI, 1e-9), "{mid}");

    // every step stays within the 2° arc through π
    for i in 0..=10 {
        let a = GeoSpace::angle_gradient(a1, a2, i as Real / 10.0);
        assert!(a.abs() >= a1 - 1e-9, "{a}");
    }
}

#[test]
fn taper_scales_y_across_the_space() {
    let space = GeoSpace::default().with_taper(0.0, 1.0);
    let left = space.external_pos(&Point::new(-1.0, 1.0));
    let middle = space.external_pos(&Point::new(0.0, 1.0));
    let right = space.external_pos(&Point::new(1.0, 1.0));
    assert!(approx_eq(left.y, 0.0, 1e-12));
    assert!(approx_eq(middle.y, 0.5, 1e-12));
    assert!(approx_eq(right.y, 1.0, 1e-12));
}

#[test]
fn guides_shear_opposite_edges_opposite_ways() {
    let tilt: Real = 0.25;
    let space = GeoSpace::default().with_guides(tilt, -tilt);
    let left = space.external_pos(&Point::new(-1.0, 1.0));
    let right = space.external_pos(&Point::new(1.0, 1.0));
    assert!(approx_eq(left.x, -1.0 - tilt.tan(), 1e-12));
    assert!(approx_eq(right.x, 1.0 + tilt.tan(), 1e-12));
}

#[test]
fn set_origin_moves_to_external_position() {
    let mut space = GeoSpace::new(FRAC_PI_2, 2.0, 2.0, Point::new(1.0, 1.0));
    let target = space.external_pos(&Point::new(1.0, 0.0));
    space.set_origin(&Point::new(1.0, 0.0));
    assert_eq!(space.origin(), target);
    assert!(point_near(&target, &Point::new(1.0, 3.0), 1e-12));
}

#[test]
fn stack_applies_innermost_first() {
    let outer = GeoSpace::new(0.0, 10.0, 10.0, Point::new(100.0, 0.0));
    let inner = GeoSpace::new(FRAC_PI_2, 1.0, 1.0, Point::new(1.0, 0.0));

    let mut stack = GeoSpaceStack::new();
    assert!(stack.is_empty());
    stack.push(&outer);
    stack.push(&inner);
    assert_eq!(stack.len(), 2);

    let p = Point::new(1.0, 0.0);
    let expected = outer.external_pos(&inner.external_pos(&p));
    assert_eq!(stack.global_pos(&p), expected);
    // (1,0) -> rotate (0,1) -> (1,1) -> scale (10,10) -> (110,10)
    assert!(point_near(&expected, &Point::new(110.0, 10.0), 1e-9));

    assert_eq!(stack.pop(), Some(inner));
    assert_eq!(stack.top(), Some(&outer));
    assert_eq!(stack.global_pos(&p), outer.external_pos(&p));
}

#[test]
fn empty_stack_is_identity() {
    let stack = GeoSpaceStack::new();
    let p = Point::new(-2.5, 7.0);
    assert_eq!(stack.global_pos(&p), p);
    assert_eq!(stack.map_point(&p), p);
}

#[test]
fn pattern_maps_line_by_line() {
    let space = GeoSpace::new(0.7, 1.5, -0.5, Point::new(3.0, -1.0)).with_guides(0.2, -0.1);
    let pattern = Pattern::from_lines(vec![line(-1.0, 0.0, 1.0, 0.0), line(0.0, -1.0, 0.5, 1.0)]);

    let mapped = space.map_pattern(&pattern);
    assert_eq!(mapped.len(), 2);
    for (original, mapped) in pattern.iter().zip(&mapped) {
        assert_eq!(space.map_line(original), *mapped);
    }

    let transformed = pattern.transformed(&space);
    assert_eq!(transformed, mapped);
    // the source is untouched
    assert_eq!(pattern.lines()[0], line(-1.0, 0.0, 1.0, 0.0));
}

#[test]
fn display_shows_degrees() {
    let space = GeoSpace::new(FRAC_PI_2, 1.0, 2.0, Point::new(0.5, -0.5));
    let text = space.to_string();
    assert!(text.contains("90°"), "{text}");
    assert!(text.contains("(0.50,-0.50)"), "{text}");
}
