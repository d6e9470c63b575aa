//! Sutherland-Cohen line clipping.
//!
//! Iterative boundary walking driven by [`Outcode`]s. Each step moves one
//! outside endpoint onto the boundary it violates, using integer arithmetic
//! with truncating division, until the segment is trivially accepted or
//! trivially rejected.
//!
//! Intersections are always computed on the line through the *input*
//! endpoints, so truncation error from one step does not feed into the next.
//! The region code of a moved endpoint is taken from the exact rational
//! intersection, not from its truncated coordinate: a crossing just outside
//! a corner stays outside even when truncation lands it on the edge.
//!
//! When an endpoint violates two boundaries, the one intersected first is
//! chosen in the fixed priority order TOP, BOTTOM, RIGHT, LEFT. Endpoint 1 is
//! moved before endpoint 2.

use crate::basics::{PointI, Segment};
use crate::clip_window::ClipWindow;
use crate::error::{ClipError, Result};
use crate::outcode::Outcode;

/// Clip `seg` against `window`.
///
/// Returns `Ok(None)` if the segment is rejected. `max_iterations` bounds the
/// number of boundary intersections; exceeding it yields
/// [`ClipError::IterationLimit`]. A boundary intersection along an axis with
/// zero delta yields [`ClipError::DegenerateSegment`] instead of dividing by
/// zero.
pub fn clip_sutherland_cohen(
    seg: &Segment,
    window: &ClipWindow,
    max_iterations: u32,
) -> Result<Option<Segment>> {
    let mut cur = *seg;
    let mut code1 = Outcode::of(cur.p1, window);
    let mut code2 = Outcode::of(cur.p2, window);
    let mut iterations = 0;

    loop {
        if (code1 | code2).is_inside() {
            return Ok(Some(cur));
        }
        if code1.intersects(code2) {
            log::trace!("sutherland-cohen: {} rejected ({:?} & {:?})", seg, code1, code2);
            return Ok(None);
        }
        if iterations >= max_iterations {
            return Err(ClipError::IterationLimit {
                segment: *seg,
                iterations,
            });
        }
        iterations += 1;

        let first = !code1.is_inside();
        let code_out = if first { code1 } else { code2 };
        let (p, code) = boundary_intersection(seg, code_out, window)?;
        log::trace!("sutherland-cohen: {} moved {:?} endpoint to {}", seg, code_out, p);

        if first {
            cur.p1 = p;
            code1 = code;
        } else {
            cur.p2 = p;
            code2 = code;
        }
    }
}

/// Intersection of the line through `line` with the highest-priority
/// boundary set in `code`, together with the region code of the exact
/// intersection.
fn boundary_intersection(
    line: &Segment,
    code: Outcode,
    window: &ClipWindow,
) -> Result<(PointI, Outcode)> {
    let x1 = line.p1.x as i128;
    let y1 = line.p1.y as i128;
    let (dx, dy) = line.delta();
    let (dx, dy) = (dx as i128, dy as i128);

    let horizontal_bound = if code.contains(Outcode::TOP) {
        Some(window.ymax())
    } else if code.contains(Outcode::BOTTOM) {
        Some(window.ymin())
    } else {
        None
    };

    // The boundary lies between the endpoints, so the result fits in i32.
    if let Some(bound) = horizontal_bound {
        if dy == 0 {
            return Err(ClipError::DegenerateSegment { segment: *line });
        }
        let num = dx * (bound as i128 - y1);
        let x = x1 + num / dy;
        let region = exact_region(
            x1,
            num,
            dy,
            (window.xmin(), window.xmax()),
            (Outcode::LEFT, Outcode::RIGHT),
        );
        return Ok((PointI::new(x as i32, bound), region));
    }

    let bound = if code.contains(Outcode::RIGHT) {
        window.xmax()
    } else {
        window.xmin()
    };
    if dx == 0 {
        return Err(ClipError::DegenerateSegment { segment: *line });
    }
    let num = dy * (bound as i128 - x1);
    let y = y1 + num / dx;
    let region = exact_region(
        y1,
        num,
        dx,
        (window.ymin(), window.ymax()),
        (Outcode::BOTTOM, Outcode::TOP),
    );
    Ok((PointI::new(bound, y as i32), region))
}

/// Classify the exact coordinate `base + num / den` against the closed range
/// `lo..=hi`. `den` is nonzero.
fn exact_region(
    base: i128,
    num: i128,
    den: i128,
    (lo, hi): (i32, i32),
    (below, above): (Outcode, Outcode),
) -> Outcode {
    let (num, den) = if den < 0 { (-num, -den) } else { (num, den) };
    let scaled = base * den + num;
    if scaled < lo as i128 * den {
        below
    } else if scaled > hi as i128 * den {
        above
    } else {
        Outcode::INSIDE
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn clip(x1: i32, y1: i32, x2: i32, y2: i32, w: &ClipWindow) -> Option<Segment> {
        clip_sutherland_cohen(&Segment::from_coords(x1, y1, x2, y2), w, 8).unwrap()
    }

    fn window() -> ClipWindow {
        ClipWindow::new(10, 10, 100, 100).unwrap()
    }

    #[test]
    fn test_fully_inside_is_unchanged() {
        let s = clip(20, 20, 80, 30, &window());
        assert_eq!(s, Some(Segment::from_coords(20, 20, 80, 30)));
    }

    #[test]
    fn test_fully_outside_shared_boundary() {
        assert_eq!(clip(20, 110, 80, 110, &window()), None);
        assert_eq!(clip(0, 0, 5, 5, &window()), None);
    }

    #[test]
    fn test_crossing_horizontal() {
        let s = clip(0, 50, 120, 50, &window());
        assert_eq!(s, Some(Segment::from_coords(10, 50, 100, 50)));
    }

    #[test]
    fn test_second_endpoint_moved() {
        let s = clip(50, 50, 200, 50, &window());
        assert_eq!(s, Some(Segment::from_coords(50, 50, 100, 50)));
    }

    #[test]
    fn test_vertical_line_uses_only_top_bottom() {
        let w = ClipWindow::new(0, 0, 10, 10).unwrap();
        assert_eq!(clip(5, -5, 5, 15, &w), Some(Segment::from_coords(5, 0, 5, 10)));
    }

    #[test]
    fn test_corner_endpoint_priority() {
        // Endpoint 1 violates LEFT|BOTTOM; BOTTOM is intersected first.
        let w = ClipWindow::new(-50, -50, 50, 50).unwrap();
        let s = clip(-100, -100, 100, 100, &w);
        assert_eq!(s, Some(Segment::from_coords(-50, -50, 50, 50)));
    }

    #[test]
    fn test_integer_truncation() {
        // True intersection with y = 10 is at x = 10.303.
        let s = clip(10, 0, 13, 99, &window()).unwrap();
        assert_eq!(s.p1, PointI::new(10, 10));
    }

    #[test]
    fn test_truncation_onto_edge_keeps_exact_region() {
        // The TOP crossing is at x = -50.93; truncated it would sit on the
        // LEFT edge. The exact region is still LEFT, so the LEFT crossing at
        // y = 13.75 is taken next.
        let w = ClipWindow::new(-50, -50, 50, 50).unwrap();
        let s = clip(-49, -25, -53, 130, &w);
        assert_eq!(s, Some(Segment::from_coords(-49, -25, -50, 13)));
    }

    #[test]
    fn test_intersections_use_input_line() {
        // Endpoint 1 moves to TOP at (-45, 50), then endpoint 2 to BOTTOM and
        // LEFT. Recomputing BOTTOM from the moved (-45, 50) would stop at
        // (-50, -50); the true LEFT crossing is at y = -28.33.
        let w = ClipWindow::new(-50, -50, 50, 50).unwrap();
        let s = clip(-43, 100, -55, -120, &w);
        assert_eq!(s, Some(Segment::from_coords(-45, 50, -50, -28)));
    }

    #[test]
    fn test_exact_region_sign_of_denominator() {
        let bounds = (-50, 50);
        let codes = (Outcode::LEFT, Outcode::RIGHT);
        // -49 + 7 / -4 = -50.75
        assert_eq!(exact_region(-49, 7, -4, bounds, codes), Outcode::LEFT);
        // -49 + -4 / 4 = -50, on the edge
        assert_eq!(exact_region(-49, -4, 4, bounds, codes), Outcode::INSIDE);
        // 49 + 5 / 4 = 50.25
        assert_eq!(exact_region(49, 5, 4, bounds, codes), Outcode::RIGHT);
        assert_eq!(exact_region(49, -5, -4, bounds, codes), Outcode::RIGHT);
    }

    #[test]
    fn test_outside_not_sharing_code() {
        // Passes above the top-right corner.
        assert_eq!(clip(60, 170, 170, 60, &window()), None);
    }

    #[test]
    fn test_extreme_coordinates_do_not_overflow() {
        let w = ClipWindow::new(-10, -10, 10, 10).unwrap();
        let s = clip(i32::MIN, 0, i32::MAX, 0, &w);
        assert_eq!(s, Some(Segment::from_coords(-10, 0, 10, 0)));
    }

    #[test]
    fn test_iteration_limit() {
        let seg = Segment::from_coords(-100, -100, 100, 100);
        let w = ClipWindow::new(-50, -50, 50, 50).unwrap();
        let err = clip_sutherland_cohen(&seg, &w, 1).unwrap_err();
        assert_eq!(
            err,
            ClipError::IterationLimit {
                segment: seg,
                iterations: 1
            }
        );
    }

    #[test]
    fn test_zero_delta_guard() {
        // A horizontal segment never reaches the TOP branch through the
        // public entry point; exercise the guard directly.
        let seg = Segment::from_coords(0, 20, 10, 20);
        let w = window();
        let err = boundary_intersection(&seg, Outcode::TOP, &w).unwrap_err();
        assert_eq!(err, ClipError::DegenerateSegment { segment: seg });
        let seg = Segment::from_coords(5, 0, 5, 50);
        assert!(boundary_intersection(&seg, Outcode::LEFT, &w).is_err());
    }
}
