use super::Vec3i;

/// An axis-aligned box given by its low and high corners, both inclusive.
///
/// A part of dimensions `d` at corner `p` spans `p ..= p + d - 1` on every
/// axis, so parts that merely touch do not intersect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Region {
    pub low: Vec3i,
    pub high: Vec3i,
}

impl Region {
    /// Region occupied by a box of `dimensions` placed at `corner`.
    pub fn from_corner(corner: Vec3i, dimensions: Vec3i) -> Self {
        Self {
            low: corner,
            high: corner + dimensions - Vec3i::new(1, 1, 1),
        }
    }

    /// Grows the region by `margin` on the X and Y axes only.
    pub fn expanded_xy(&self, margin: i32) -> Self {
        let m = Vec3i::new(margin, margin, 0);
        Self {
            low: self.low - m,
            high: self.high + m,
        }
    }

    /// Closed-interval rectangle intersection on the X/Y plane.
    pub fn intersects_xy(&self, other: &Region) -> bool {
        self.low.x() <= other.high.x()
            && self.high.x() >= other.low.x()
            && self.low.y() <= other.high.y()
            && self.high.y() >= other.low.y()
    }

    /// Area of the X/Y intersection, `(right - left) * (front - back)` over
    /// exclusive right/front bounds; zero when the rectangles are disjoint.
    pub fn overlap_area_xy(&self, other: &Region) -> i64 {
        if !self.intersects_xy(other) {
            return 0;
        }
        let left = self.low.x().max(other.low.x()) as i64;
        let right = self.high.x().min(other.high.x()) as i64 + 1;
        let back = self.low.y().max(other.low.y()) as i64;
        let front = self.high.y().min(other.high.y()) as i64 + 1;
        (right - left) * (front - back)
    }
}
