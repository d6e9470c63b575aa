//! Logical-to-display coordinate transform.
//!
//! Logical space has its origin at the centre of the viewport with the
//! y-axis pointing up; display space has its origin at the top-left corner
//! with y pointing down. The transform is only applied when handing accepted
//! segments to a renderer, never inside the clip math.

use crate::basics::{PointI, Segment};
use crate::clip_window::ClipWindow;

/// Default viewport width in pixels.
pub const DEFAULT_VIEWPORT_WIDTH: i32 = 800;
/// Default viewport height in pixels.
pub const DEFAULT_VIEWPORT_HEIGHT: i32 = 600;

/// Viewport transformer for a `width` x `height` display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplayTransform {
    width: i32,
    height: i32,
}

impl Default for DisplayTransform {
    fn default() -> Self {
        Self::new(DEFAULT_VIEWPORT_WIDTH, DEFAULT_VIEWPORT_HEIGHT)
    }
}

impl DisplayTransform {
    pub fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    #[inline]
    pub fn to_display_x(&self, x: i32) -> i32 {
        x.saturating_add(self.width / 2)
    }

    #[inline]
    pub fn to_display_y(&self, y: i32) -> i32 {
        (self.height / 2).saturating_sub(y)
    }

    pub fn to_display_point(&self, p: PointI) -> PointI {
        PointI::new(self.to_display_x(p.x), self.to_display_y(p.y))
    }

    pub fn to_display_segment(&self, seg: &Segment) -> Segment {
        Segment::new(self.to_display_point(seg.p1), self.to_display_point(seg.p2))
    }

    /// Outline of `window` in display space as `(x, y, width, height)`,
    /// anchored at its top-left corner.
    pub fn window_outline(&self, window: &ClipWindow) -> (i32, i32, i64, i64) {
        (
            self.to_display_x(window.xmin()),
            self.to_display_y(window.ymax()),
            window.width(),
            window.height(),
        )
    }
}

// ============================================================================
// Tests
// ============================================================================
