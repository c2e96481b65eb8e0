//! Geometry primitives: points and straight line segments.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Sentinel slope for vertical segments.
///
/// Using a large finite value instead of `f64::INFINITY` keeps slopes
/// totally ordered for sorting and binning: two vertical segments compare
/// equal, and the difference between two sentinels is exactly zero.
pub const VERTICAL_SLOPE: f64 = f64::MAX;

/// A 2D coordinate in source (SVG) space.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    /// Creates a new point.
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another point.
    pub fn distance(&self, other: Point) -> f64 {
        self.distance_squared(other).sqrt()
    }

    /// Squared Euclidean distance to another point.
    pub fn distance_squared(&self, other: Point) -> f64 {
        let dx = other.x - self.x;
        let dy = other.y - self.y;
        dx * dx + dy * dy
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self { x, y }
    }
}

/// A straight stroke between two endpoints.
///
/// Canonicalized at construction so that `p0.x <= p1.x`; endpoints from
/// the source geometry are swapped if they arrive right-to-left. Segments
/// are immutable value data — consolidation replaces segments with new
/// ones rather than mutating in place.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Segment {
    p0: Point,
    p1: Point,
}

impl Segment {
    /// Creates a segment, swapping endpoints if needed so `p0.x <= p1.x`.
    pub fn new(a: Point, b: Point) -> Self {
        if a.x <= b.x {
            Self { p0: a, p1: b }
        } else {
            Self { p0: b, p1: a }
        }
    }

    /// Creates a segment from raw coordinates.
    pub fn from_coords(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Self::new(Point::new(x1, y1), Point::new(x2, y2))
    }

    /// The leftmost endpoint (lowest x).
    pub fn p0(&self) -> Point {
        self.p0
    }

    /// The rightmost endpoint (highest x).
    pub fn p1(&self) -> Point {
        self.p1
    }

    /// Slope of the segment; [`VERTICAL_SLOPE`] when `p1.x == p0.x`.
    pub fn slope(&self) -> f64 {
        slope_between(self.p0, self.p1)
    }

    /// Euclidean length.
    pub fn length(&self) -> f64 {
        self.p0.distance(self.p1)
    }

    /// True if both endpoints coincide exactly.
    pub fn is_degenerate(&self) -> bool {
        self.p0 == self.p1
    }
}

/// Slope between two arbitrary points, with the vertical sentinel.
pub fn slope_between(a: Point, b: Point) -> f64 {
    let dx = b.x - a.x;
    if dx == 0.0 {
        return VERTICAL_SLOPE;
    }
    (b.y - a.y) / dx
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canonical_ordering() {
        let seg = Segment::from_coords(10.0, 1.0, 0.0, 2.0);
        assert_eq!(seg.p0(), Point::new(0.0, 2.0));
        assert_eq!(seg.p1(), Point::new(10.0, 1.0));

        // Already left-to-right: unchanged
        let seg = Segment::from_coords(0.0, 2.0, 10.0, 1.0);
        assert_eq!(seg.p0(), Point::new(0.0, 2.0));
    }

    #[test]
    fn test_slope() {
        let seg = Segment::from_coords(0.0, 0.0, 10.0, 5.0);
        assert!((seg.slope() - 0.5).abs() < 1e-12);

        // Canonicalization makes slope independent of input order
        let rev = Segment::from_coords(10.0, 5.0, 0.0, 0.0);
        assert_eq!(seg.slope(), rev.slope());
    }

    #[test]
    fn test_vertical_slope_sentinel() {
        let seg = Segment::from_coords(3.0, 0.0, 3.0, 10.0);
        assert_eq!(seg.slope(), VERTICAL_SLOPE);

        // Two verticals bin together: sentinel difference is exactly zero
        let other = Segment::from_coords(7.0, -5.0, 7.0, 5.0);
        assert_eq!(seg.slope() - other.slope(), 0.0);
    }

    #[test]
    fn test_length_and_distance() {
        let seg = Segment::from_coords(0.0, 0.0, 3.0, 4.0);
        assert!((seg.length() - 5.0).abs() < 1e-12);
        assert_eq!(Point::new(0.0, 0.0).distance_squared(Point::new(3.0, 4.0)), 25.0);
    }

    #[test]
    fn test_degenerate_segment() {
        let seg = Segment::from_coords(2.0, 2.0, 2.0, 2.0);
        assert!(seg.is_degenerate());
        assert_eq!(seg.length(), 0.0);
        // Degenerate counts as vertical for slope binning
        assert_eq!(seg.slope(), VERTICAL_SLOPE);
    }
}
