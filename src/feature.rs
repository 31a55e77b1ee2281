//! `Feature`: ribbons copied into mirrored halves or quadrants of the unit
//! square.

use crate::canvas::Canvas;
use crate::errors::GeometryError;
use crate::geometry::Point;
use crate::geospace::GeoSpace;
use crate::pattern::Pattern;
use crate::ribbon::Ribbon;

/// A set of ribbons, each stored once per mirror space.
///
/// | mirror_x | mirror_y | spaces |
/// |----------|----------|--------|
/// | no       | no       | identity |
/// | yes      | no       | left, right halves |
/// | no       | yes      | top, bottom halves |
/// | yes      | yes      | NE, SE, SW, NW quadrants |
///
/// Every space maps the unit square onto its half or quadrant. Neighbouring
/// spaces differ in the sign of one scale, so each copy is the reflection of
/// the one next to it.
#[derive(Debug, Clone, PartialEq)]
pub struct Feature {
    mirror_x: bool,
    mirror_y: bool,
    geo_spaces: Vec<GeoSpace>,
    ribbons: Vec<Ribbon>,
}

impl Feature {
    pub fn new(mirror_x: bool, mirror_y: bool) -> Self {
        let space = |x_scale, y_scale, x, y| GeoSpace::new(0.0, x_scale, y_scale, Point::new(x, y));
        let geo_spaces = match (mirror_x, mirror_y) {
            (false, false) => vec![GeoSpace::default()],
            (true, false) => vec![space(-0.5, 1.0, -0.5, 0.0), space(0.5, 1.0, 0.5, 0.0)],
            (false, true) => vec![space(1.0, 0.5, 0.0, 0.5), space(1.0, -0.5, 0.0, -0.5)],
            (true, true) => vec![
                space(0.5, 0.5, 0.5, 0.5),
                space(0.5, -0.5, 0.5, -0.5),
                space(-0.5, -0.5, -0.5, -0.5),
                space(-0.5, 0.5, -0.5, 0.5),
            ],
        };
        Feature {
            mirror_x,
            mirror_y,
            geo_spaces,
            ribbons: Vec::new(),
        }
    }

    pub const fn mirror_x(&self) -> bool {
        self.mirror_x
    }

    pub const fn mirror_y(&self) -> bool {
        self.mirror_y
    }

    pub fn geo_spaces(&self) -> &[GeoSpace] {
        &self.geo_spaces
    }

    /// Every stored copy, grouped by source ribbon in insertion order.
    pub fn ribbons(&self) -> &[Ribbon] {
        &self.ribbons
    }

    /// Store one copy of `ribbon` per mirror space.
    ///
    /// Nothing is stored if any copy fails to build.
    pub fn add(&mut self, ribbon: &Ribbon) -> Result<(), GeometryError> {
        let copies = self
            .geo_spaces
            .iter()
            .map(|space| ribbon.reshaped(space))
            .collect::<Result<Vec<_>, _>>()?;
        self.ribbons.extend(copies);
        Ok(())
    }

    pub fn render<C: Canvas + ?Sized>(&self, canvas: &mut C) {
        for ribbon in &self.ribbons {
            ribbon.render(canvas);
        }
    }

    pub fn to_pattern(&self) -> Pattern {
        self.ribbons.iter().flat_map(|r| r.to_pattern()).collect()
    }
}

impl Default for Feature {
    fn default() -> Self {
        Feature::new(false, false)
    }
}
