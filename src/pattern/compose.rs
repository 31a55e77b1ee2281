use crate::float_types::Real;
use crate::pattern::Pattern;

impl Pattern {
    /// Combine an unscaled x-mirrored copy into this pattern.
    ///
    /// The original moves one unit left, the mirror one unit right, so a
    /// pattern spanning x∈[−1, 1] becomes a symmetric pair spanning x∈[−2, 2].
    pub fn mirror_x(&mut self) {
        let mut mirrored = self.clone();
        mirrored.scale_x(-1.0);
        mirrored.offset_x(1.0);

        self.offset_x(-1.0);
        self.combine(&mirrored);
    }

    /// Place `edges` to the left of this pattern and its x-mirror to the
    /// right.
    ///
    /// `center_width` is the current width of this pattern, which is assumed
    /// to be centered on x = 0; `edges` is assumed to span x∈[−1, 1].
    pub fn surround(&mut self, center_width: Real, edges: &Pattern) {
        let offset = center_width / 2.0 + 1.0;

        let mut left = edges.clone();
        left.offset_x(-offset);

        let mut right = edges.clone();
        right.scale_x(-1.0);
        right.offset_x(offset);

        self.combine(&left);
        self.combine(&right);
    }
}
