//! Foundation types: integer points and line segments.
//!
//! Every clipper works in logical coordinates (origin at the centre, y-axis
//! pointing up). Intermediate arithmetic is widened to `i64` so that segments
//! spanning the full `i32` range never overflow.

use core::fmt;

// ============================================================================
// Point
// ============================================================================

/// A 2D point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct PointBase<T: Copy> {
    pub x: T,
    pub y: T,
}

impl<T: Copy> PointBase<T> {
    pub fn new(x: T, y: T) -> Self {
        Self { x, y }
    }
}

/// Point with `i32` coordinates, the coordinate type of the clip window and
/// of every stored segment.
pub type PointI = PointBase<i32>;

impl PointI {
    /// Integer midpoint of `self` and `other`, truncated toward zero.
    #[inline]
    pub fn midpoint(self, other: Self) -> Self {
        Self::new(
            ((self.x as i64 + other.x as i64) / 2) as i32,
            ((self.y as i64 + other.y as i64) / 2) as i32,
        )
    }

    /// Chebyshev (chessboard) distance to `other`.
    #[inline]
    pub fn chebyshev(self, other: Self) -> u64 {
        let dx = (other.x as i64 - self.x as i64).unsigned_abs();
        let dy = (other.y as i64 - self.y as i64).unsigned_abs();
        dx.max(dy)
    }
}

impl fmt::Display for PointI {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

// ============================================================================
// Segment
// ============================================================================

/// An ordered line segment `p1 -> p2`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Segment {
    pub p1: PointI,
    pub p2: PointI,
}

impl Segment {
    pub fn new(p1: PointI, p2: PointI) -> Self {
        Self { p1, p2 }
    }

    /// Build a segment from raw endpoint coordinates.
    pub fn from_coords(x1: i32, y1: i32, x2: i32, y2: i32) -> Self {
        Self::new(PointI::new(x1, y1), PointI::new(x2, y2))
    }

    /// Endpoint coordinates as `(x1, y1, x2, y2)`.
    pub fn coords(&self) -> (i32, i32, i32, i32) {
        (self.p1.x, self.p1.y, self.p2.x, self.p2.y)
    }

    /// Direction vector `(x2 - x1, y2 - y1)`.
    #[inline]
    pub fn delta(&self) -> (i64, i64) {
        (
            self.p2.x as i64 - self.p1.x as i64,
            self.p2.y as i64 - self.p1.y as i64,
        )
    }

    #[inline]
    pub fn midpoint(&self) -> PointI {
        self.p1.midpoint(self.p2)
    }

    /// Chebyshev length of the segment.
    #[inline]
    pub fn chebyshev_len(&self) -> u64 {
        self.p1.chebyshev(self.p2)
    }
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.p1, self.p2)
    }
}

// ============================================================================
// Tests
// ============================================================================
