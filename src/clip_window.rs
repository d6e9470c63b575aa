//! Axis-aligned clip window.
//!
//! The window is immutable for the duration of a clip call and replaced
//! wholesale when reconfigured. Construction validates `xmin <= xmax` and
//! `ymin <= ymax`; depending on [`WindowPolicy`] an inverted window is either
//! rejected or normalized by swapping the offending bounds.

use crate::basics::{PointI, Segment};
use crate::clip_config::WindowPolicy;
use crate::error::{ClipError, Result};

// ============================================================================
// ClipWindow
// ============================================================================

/// Rectangle in logical coordinates. Bounds are inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ClipWindow {
    xmin: i32,
    ymin: i32,
    xmax: i32,
    ymax: i32,
}

impl ClipWindow {
    /// Create a window, failing with [`ClipError::DegenerateWindow`] if
    /// either axis is inverted.
    pub fn new(xmin: i32, ymin: i32, xmax: i32, ymax: i32) -> Result<Self> {
        if xmin > xmax || ymin > ymax {
            return Err(ClipError::DegenerateWindow {
                xmin,
                ymin,
                xmax,
                ymax,
            });
        }
        Ok(Self {
            xmin,
            ymin,
            xmax,
            ymax,
        })
    }

    /// Create a window, swapping inverted bounds so that min <= max.
    pub fn normalized(xmin: i32, ymin: i32, xmax: i32, ymax: i32) -> Self {
        Self {
            xmin: xmin.min(xmax),
            ymin: ymin.min(ymax),
            xmax: xmin.max(xmax),
            ymax: ymin.max(ymax),
        }
    }

    /// Create a window according to `policy`.
    pub fn with_policy(
        xmin: i32,
        ymin: i32,
        xmax: i32,
        ymax: i32,
        policy: WindowPolicy,
    ) -> Result<Self> {
        match policy {
            WindowPolicy::Reject => Self::new(xmin, ymin, xmax, ymax),
            WindowPolicy::Normalize => {
                let w = Self::normalized(xmin, ymin, xmax, ymax);
                if w.xmin != xmin || w.ymin != ymin {
                    log::debug!(
                        "normalized clip window ({}, {})-({}, {}) to {}",
                        xmin,
                        ymin,
                        xmax,
                        ymax,
                        w
                    );
                }
                Ok(w)
            }
        }
    }

    #[inline]
    pub fn xmin(&self) -> i32 {
        self.xmin
    }

    #[inline]
    pub fn ymin(&self) -> i32 {
        self.ymin
    }

    #[inline]
    pub fn xmax(&self) -> i32 {
        self.xmax
    }

    #[inline]
    pub fn ymax(&self) -> i32 {
        self.ymax
    }

    /// Horizontal extent `xmax - xmin`.
    pub fn width(&self) -> i64 {
        self.xmax as i64 - self.xmin as i64
    }

    /// Vertical extent `ymax - ymin`.
    pub fn height(&self) -> i64 {
        self.ymax as i64 - self.ymin as i64
    }

    /// Returns `true` if `p` lies within the closed rectangle.
    #[inline]
    pub fn hit_test(&self, p: PointI) -> bool {
        p.x >= self.xmin && p.x <= self.xmax && p.y >= self.ymin && p.y <= self.ymax
    }

    /// Returns `true` if both endpoints of `seg` lie within the window.
    #[inline]
    pub fn contains_segment(&self, seg: &Segment) -> bool {
        self.hit_test(seg.p1) && self.hit_test(seg.p2)
    }
}

impl core::fmt::Display for ClipWindow {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "({}, {})-({}, {})",
            self.xmin, self.ymin, self.xmax, self.ymax
        )
    }
}

// ============================================================================
// Tests
// ============================================================================
