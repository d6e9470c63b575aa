//! Error types for line clipping.
//!
//! A segment lying outside the window is *not* an error: the clippers report
//! that as an empty result. These variants cover invalid configuration and
//! the resource bounds placed on the iterative algorithms.

use thiserror::Error;

use crate::basics::Segment;

pub type Result<T> = std::result::Result<T, ClipError>;

/// Main error type for clipping operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClipError {
    #[error("Degenerate clip window: ({xmin}, {ymin})-({xmax}, {ymax}) has min > max")]
    DegenerateWindow {
        xmin: i32,
        ymin: i32,
        xmax: i32,
        ymax: i32,
    },

    #[error("Degenerate segment {segment}: zero delta along the boundary axis")]
    DegenerateSegment { segment: Segment },

    #[error("Segment {segment} did not converge after {iterations} boundary intersections")]
    IterationLimit { segment: Segment, iterations: u32 },

    #[error("Segment {segment} rejected after exceeding subdivision depth {max_depth}")]
    SubdivisionLimit { segment: Segment, max_depth: u32 },

    #[error("Unknown clipping algorithm index: {0}")]
    UnknownAlgorithm(i32),

    #[error("Unknown clipping algorithm name: {0}")]
    UnknownAlgorithmName(String),
}
