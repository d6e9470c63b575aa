//! Cohen-Sutherland region codes.
//!
//! ```text
//!        |        |
//!  1001  |  1000  | 1010
//!        |        |
//! -------+--------+-------- ymax
//!        |        |
//!  0001  |  0000  | 0010
//!        |        |
//! -------+--------+-------- ymin
//!        |        |
//!  0101  |  0100  | 0110
//!        |        |
//!      xmin     xmax
//! ```

use core::ops::{BitAnd, BitOr};

use crate::basics::PointI;
use crate::clip_window::ClipWindow;

/// 4-bit region code of a point relative to a [`ClipWindow`].
///
/// LEFT and RIGHT are never both set, nor BOTTOM and TOP.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Outcode(u8);

impl Outcode {
    pub const INSIDE: Outcode = Outcode(0);
    pub const LEFT: Outcode = Outcode(1);
    pub const RIGHT: Outcode = Outcode(2);
    pub const BOTTOM: Outcode = Outcode(4);
    pub const TOP: Outcode = Outcode(8);

    /// Classify `p` against `window`.
    #[inline]
    pub fn of(p: PointI, window: &ClipWindow) -> Self {
        let mut code = 0;
        if p.x < window.xmin() {
            code |= Self::LEFT.0;
        } else if p.x > window.xmax() {
            code |= Self::RIGHT.0;
        }
        if p.y < window.ymin() {
            code |= Self::BOTTOM.0;
        } else if p.y > window.ymax() {
            code |= Self::TOP.0;
        }
        Outcode(code)
    }

    #[inline]
    pub fn bits(self) -> u8 {
        self.0
    }

    #[inline]
    pub fn is_inside(self) -> bool {
        self.0 == 0
    }

    /// Returns `true` if every bit of `flag` is set in `self`.
    #[inline]
    pub fn contains(self, flag: Outcode) -> bool {
        self.0 & flag.0 == flag.0 && flag.0 != 0
    }

    /// Returns `true` if `self` and `other` share a violated boundary.
    #[inline]
    pub fn intersects(self, other: Outcode) -> bool {
        self.0 & other.0 != 0
    }
}

impl BitOr for Outcode {
    type Output = Outcode;

    fn bitor(self, rhs: Self) -> Self::Output {
        Outcode(self.0 | rhs.0)
    }
}

impl BitAnd for Outcode {
    type Output = Outcode;

    fn bitand(self, rhs: Self) -> Self::Output {
        Outcode(self.0 & rhs.0)
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn window() -> ClipWindow {
        ClipWindow::new(10, 10, 100, 100).unwrap()
    }

    #[test]
    fn test_inside() {
        assert_eq!(Outcode::of(PointI::new(50, 50), &window()), Outcode::INSIDE);
        // Bounds are inclusive.
        assert!(Outcode::of(PointI::new(10, 100), &window()).is_inside());
    }

    #[test]
    fn test_single_sides() {
        let w = window();
        assert_eq!(Outcode::of(PointI::new(5, 50), &w), Outcode::LEFT);
        assert_eq!(Outcode::of(PointI::new(110, 50), &w), Outcode::RIGHT);
        assert_eq!(Outcode::of(PointI::new(50, 5), &w), Outcode::BOTTOM);
        assert_eq!(Outcode::of(PointI::new(50, 110), &w), Outcode::TOP);
    }

    #[test]
    fn test_corners() {
        let w = window();
        assert_eq!(
            Outcode::of(PointI::new(110, 110), &w),
            Outcode::RIGHT | Outcode::TOP
        );
        assert_eq!(Outcode::of(PointI::new(5, 5), &w).bits(), 0b0101);
        assert_eq!(Outcode::of(PointI::new(5, 110), &w).bits(), 0b1001);
        assert_eq!(Outcode::of(PointI::new(110, 5), &w).bits(), 0b0110);
    }

    #[test]
    fn test_contains_and_intersects() {
        let c = Outcode::LEFT | Outcode::TOP;
        assert!(c.contains(Outcode::TOP));
        assert!(!c.contains(Outcode::RIGHT));
        assert!(!c.contains(Outcode::INSIDE));
        assert!(c.intersects(Outcode::LEFT | Outcode::BOTTOM));
        assert!(!c.intersects(Outcode::RIGHT | Outcode::BOTTOM));
        assert_eq!((c & Outcode::LEFT), Outcode::LEFT);
    }
}
