use crate::float_types::Real;
use crate::geometry::{Line, lerp};
use crate::pattern::Pattern;

impl Pattern {
    /// Cut out the part of the pattern in the half-open window `[x0, x1)` and
    /// stretch it so the window maps onto local x∈[−1, 1].
    ///
    /// Every line falls in one of four cases:
    /// - outside the window, or touching it with a single endpoint: dropped
    /// - inside the window: copied unchanged
    /// - crossing the whole window: clipped at both edges
    /// - one endpoint inside: the outside endpoint is clipped to the edge
    ///
    /// A vertical line standing exactly on `x1` belongs to the next window, so
    /// slicing adjacent windows emits it once. Clipped lines keep the
    /// direction of the original line. The window must have a positive width.
    pub fn slice(&self, x0: Real, x1: Real) -> Pattern {
        self.slice_window(x0, x1, false)
    }

    /// Like [`Pattern::slice`], but over the closed window `[x0, x1]`: a
    /// vertical line on `x1` is kept. Use it for the last window of a
    /// partition that has no window after it.
    pub fn slice_inclusive(&self, x0: Real, x1: Real) -> Pattern {
        self.slice_window(x0, x1, true)
    }

    fn slice_window(&self, x0: Real, x1: Real, inclusive_end: bool) -> Pattern {
        debug_assert!(x1 > x0, "empty slice window [{x0}, {x1}]");
        let mut result: Pattern = self
            .iter()
            .filter_map(|line| clip_to_window(line, x0, x1, inclusive_end))
            .collect();

        result.offset_x(-x0);
        result.scale_x(2.0 / (x1 - x0));
        result.offset_x(-1.0);
        result
    }
}

fn clip_to_window(line: &Line, x0: Real, x1: Real, inclusive_end: bool) -> Option<Line> {
    let lx0 = line.p0.x;
    let lx1 = line.p1.x;
    let left = lx0.min(lx1);
    let right = lx0.max(lx1);

    // vertical on the open end, owned by the next window
    if !inclusive_end && left == x1 && right == x1 {
        return None;
    }

    // only one point at the limit
    if (right == x0 && left < right) || (left == x1 && left < right) {
        return None;
    }
    // entire line outside limits
    if (lx0 < x0 && lx1 < x0) || (lx0 > x1 && lx1 > x1) {
        return None;
    }
    // entire line inside limits
    if lx0 >= x0 && lx1 >= x0 && lx0 <= x1 && lx1 <= x1 {
        return Some(*line);
    }

    let ascending = lx0 < lx1;
    let (left_p, right_p) = if ascending {
        (line.p0, line.p1)
    } else {
        (line.p1, line.p0)
    };
    let span = right - left;

    let (start, end) = if left <= x0 && right >= x1 {
        // both points outside limits but the line crosses the window
        let underflow = (x0 - left) / span;
        let overflow = (right - x1) / span;
        (
            lerp(&left_p, &right_p, underflow),
            lerp(&right_p, &left_p, overflow),
        )
    } else if left < x0 {
        let inside = (right - x0) / span;
        (lerp(&right_p, &left_p, inside), right_p)
    } else {
        let inside = (x1 - left) / span;
        (left_p, lerp(&left_p, &right_p, inside))
    };

    Some(if ascending {
        Line::new(start, end)
    } else {
        Line::new(end, start)
    })
}
