//! `Layer`: a ring of pattern around the origin.

use crate::canvas::Canvas;
use crate::curve::Curve;
use crate::errors::GeometryError;
use crate::float_types::Real;
use crate::geometry::Point;
use crate::pattern::Pattern;
use crate::ribbon::Ribbon;

/// Fewest points on a layer's circle, however small the radius.
const MIN_CIRCLE_POINTS: usize = 64;

/// A closed circular ribbon centered on the origin.
#[derive(Debug, Clone, PartialEq)]
pub struct Layer {
    radius: Real,
    ribbon: Ribbon,
}

impl Layer {
    /// A ring of `pattern` at `radius`.
    ///
    /// The circle is two half-circle arcs with a point count growing with the
    /// radius. Without an explicit `repeats` count the pattern is repeated
    /// `4 + 16 · radius` times.
    pub fn new(
        radius: Real,
        width: Real,
        pattern: Pattern,
        repeats: Option<usize>,
    ) -> Result<Self, GeometryError> {
        let repeats = repeats.unwrap_or((4.0 + 16.0 * radius) as usize);
        let points = MIN_CIRCLE_POINTS.max((radius * 16.0 + 48.0) as usize);

        let mut curve = Curve::new(Point::new(radius, 0.0), true);
        curve.extend(curve.arc(&Point::new(-radius, 0.0), 1.0, points / 2));
        curve.extend(curve.arc(&Point::new(radius, 0.0), 1.0, points / 2));

        let ribbon = Ribbon::new(curve, pattern, true, width, 0.0, repeats)?;
        tracing::debug!(radius, points, repeats, "built layer");
        Ok(Layer { radius, ribbon })
    }

    pub const fn radius(&self) -> Real {
        self.radius
    }

    pub const fn ribbon(&self) -> &Ribbon {
        &self.ribbon
    }

    pub fn ribbon_mut(&mut self) -> &mut Ribbon {
        &mut self.ribbon
    }

    pub fn render<C: Canvas + ?Sized>(&self, canvas: &mut C) {
        self.ribbon.render(canvas);
    }

    pub fn to_pattern(&self) -> Pattern {
        self.ribbon.to_pattern()
    }
}
