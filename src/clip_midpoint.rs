//! Midpoint subdivision line clipping.
//!
//! Approximates the clip boundary by repeated integer bisection. Pending
//! pieces live on an explicit work list instead of the call stack, and every
//! piece carries its subdivision depth, so the algorithm terminates for any
//! input geometry:
//!
//! - both endpoints inside: the piece is accepted as-is;
//! - one endpoint inside: the outside endpoint is walked to the boundary by
//!   bisection until the inside/outside pair is at most one unit apart;
//! - both endpoints outside: the piece is rejected if the endpoints share a
//!   violated boundary or are at most one unit apart, otherwise it is split
//!   at its midpoint and both halves are queued.
//!
//! Accepted pieces are emitted in order from the segment's first endpoint to
//! its second, and pieces that meet end to end are merged.

use crate::basics::{PointI, Segment};
use crate::clip_window::ClipWindow;
use crate::error::{ClipError, Result};
use crate::outcode::Outcode;

/// Clip `seg` against `window` by midpoint subdivision.
///
/// Returns the accepted pieces, possibly none. If a piece would need more
/// than `max_depth` bisections, the whole segment is reported as
/// [`ClipError::SubdivisionLimit`].
pub fn clip_midpoint(seg: &Segment, window: &ClipWindow, max_depth: u32) -> Result<Vec<Segment>> {
    let limit = || ClipError::SubdivisionLimit {
        segment: *seg,
        max_depth,
    };

    let mut pieces: Vec<Segment> = Vec::new();
    let mut work: Vec<(Segment, u32)> = vec![(*seg, 0)];

    while let Some((s, depth)) = work.pop() {
        if depth > max_depth {
            return Err(limit());
        }

        let piece = if window.contains_segment(&s) {
            s
        } else if window.hit_test(s.p1) {
            let p2 = walk_to_boundary(s.p1, s.p2, window, max_depth - depth).ok_or_else(limit)?;
            Segment::new(s.p1, p2)
        } else if window.hit_test(s.p2) {
            let p1 = walk_to_boundary(s.p2, s.p1, window, max_depth - depth).ok_or_else(limit)?;
            Segment::new(p1, s.p2)
        } else {
            if Outcode::of(s.p1, window).intersects(Outcode::of(s.p2, window))
                || s.chebyshev_len() <= 1
            {
                continue;
            }
            let m = s.midpoint();
            // LIFO: the first half is processed first.
            work.push((Segment::new(m, s.p2), depth + 1));
            work.push((Segment::new(s.p1, m), depth + 1));
            continue;
        };

        log::trace!("midpoint: {} accepted piece {} at depth {}", seg, piece, depth);
        push_merged(&mut pieces, piece);
    }

    Ok(pieces)
}

/// Bisect between an inside point and an outside point until they are at
/// most one unit apart, returning the last inside point.
///
/// Returns `None` if that takes more than `budget` bisections.
fn walk_to_boundary(
    mut inside: PointI,
    mut outside: PointI,
    window: &ClipWindow,
    budget: u32,
) -> Option<PointI> {
    let mut steps = 0;
    while inside.chebyshev(outside) > 1 {
        if steps >= budget {
            return None;
        }
        steps += 1;
        let m = inside.midpoint(outside);
        if window.hit_test(m) {
            inside = m;
        } else {
            outside = m;
        }
    }
    Some(inside)
}

/// Append `piece`, extending the previous piece instead when they meet.
fn push_merged(pieces: &mut Vec<Segment>, piece: Segment) {
    if let Some(last) = pieces.last_mut() {
        if last.p2 == piece.p1 {
            last.p2 = piece.p2;
            return;
        }
    }
    pieces.push(piece);
}

// ============================================================================
// Tests
// ============================================================================
