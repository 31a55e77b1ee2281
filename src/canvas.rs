//! The drawing boundary.
//!
//! Ribbons do not draw anything themselves: they push their riblets'
//! coordinate spaces onto a [`Canvas`] and hand it lines in the innermost
//! local frame. A real display resolves those lines through its own
//! [`GeoSpaceStack`] and rasterizes them; [`LineCanvas`] just records them.

use crate::geometry::Line;
use crate::geospace::{GeoSpace, GeoSpaceStack};
use crate::pattern::Pattern;

/// Something lines can be drawn on.
pub trait Canvas {
    /// Enter a nested coordinate space.
    fn push_geo_space(&mut self, geo_space: &GeoSpace);

    /// Leave the innermost coordinate space.
    fn pop_geo_space(&mut self) -> Option<GeoSpace>;

    /// Draw a line given in the innermost coordinate space.
    fn draw_line(&mut self, line: &Line);
}

/// A headless canvas that records every drawn line in global coordinates.
#[derive(Debug, Clone, Default)]
pub struct LineCanvas {
    stack: GeoSpaceStack,
    lines: Pattern,
    disabled: bool,
}

impl LineCanvas {
    /// A canvas whose outermost space is `root`, e.g. the mapping from the
    /// unit drawing area onto screen pixels.
    pub fn new(root: &GeoSpace) -> Self {
        let mut stack = GeoSpaceStack::new();
        stack.push(root);
        LineCanvas {
            stack,
            lines: Pattern::new(),
            disabled: false,
        }
    }

    /// Ignore drawn lines until [`LineCanvas::enable`] is called.
    pub fn disable(&mut self) {
        self.disabled = true;
    }

    pub fn enable(&mut self) {
        self.disabled = false;
    }

    pub fn lines(&self) -> &Pattern {
        &self.lines
    }

    /// Hand over the recorded lines, leaving the canvas empty.
    pub fn take_pattern(&mut self) -> Pattern {
        std::mem::take(&mut self.lines)
    }

    pub fn depth(&self) -> usize {
        self.stack.len()
    }
}

impl Canvas for LineCanvas {
    fn push_geo_space(&mut self, geo_space: &GeoSpace) {
        self.stack.push(geo_space);
    }

    fn pop_geo_space(&mut self) -> Option<GeoSpace> {
        self.stack.pop()
    }

    fn draw_line(&mut self, line: &Line) {
        if self.disabled {
            return;
        }
        self.lines.add(Line::new(
            self.stack.global_pos(&line.p0),
            self.stack.global_pos(&line.p1),
        ));
    }
}
