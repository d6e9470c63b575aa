//! Liang-Barsky line clipping.
//!
//! Parametric clipping: the segment is written as `P(u) = P1 + u * (P2 - P1)`
//! for `u` in `[0, 1]`, and each of the four boundaries narrows the interval
//! of `u` that stays inside the window. Boundaries are visited in the fixed
//! order left, right, bottom, top.

use crate::basics::{PointI, Segment};
use crate::clip_window::ClipWindow;

// ============================================================================
// Parametric interval
// ============================================================================

/// Compute the parametric interval `(u1, u2)` of `seg` inside `window`.
///
/// Returns `None` if the segment is rejected: either it runs parallel to a
/// boundary while lying outside it, or the entry parameter exceeds the exit
/// parameter.
pub fn liang_barsky_interval(seg: &Segment, window: &ClipWindow) -> Option<(f64, f64)> {
    let (dx, dy) = seg.delta();
    let dx = dx as f64;
    let dy = dy as f64;
    let x1 = seg.p1.x as f64;
    let y1 = seg.p1.y as f64;

    let p = [-dx, dx, -dy, dy];
    let q = [
        x1 - window.xmin() as f64,
        window.xmax() as f64 - x1,
        y1 - window.ymin() as f64,
        window.ymax() as f64 - y1,
    ];

    let mut u1 = 0.0_f64;
    let mut u2 = 1.0_f64;

    for (&pi, &qi) in p.iter().zip(q.iter()) {
        if pi == 0.0 {
            // Parallel to this boundary.
            if qi < 0.0 {
                return None;
            }
        } else {
            let u = qi / pi;
            if pi < 0.0 {
                u1 = u1.max(u);
            } else {
                u2 = u2.min(u);
            }
        }
    }

    if u1 > u2 {
        return None;
    }
    Some((u1, u2))
}

// ============================================================================
// Segment clipping
// ============================================================================

/// Clip `seg` against `window` using the Liang-Barsky algorithm.
///
/// The accepted endpoints are evaluated in floating point and truncated
/// toward zero. Returns `None` if the segment is rejected.
pub fn clip_liang_barsky(seg: &Segment, window: &ClipWindow) -> Option<Segment> {
    let Some((u1, u2)) = liang_barsky_interval(seg, window) else {
        log::trace!("liang-barsky: {} rejected", seg);
        return None;
    };
    log::trace!("liang-barsky: {} interval [{}, {}]", seg, u1, u2);
    Some(Segment::new(point_at(seg, u1), point_at(seg, u2)))
}

/// Evaluate `P(u)`, truncating toward zero.
#[inline]
fn point_at(seg: &Segment, u: f64) -> PointI {
    let (dx, dy) = seg.delta();
    let x = seg.p1.x as f64 + u * dx as f64;
    let y = seg.p1.y as f64 + u * dy as f64;
    PointI::new(x as i32, y as i32)
}

// ============================================================================
// Tests
// ============================================================================
