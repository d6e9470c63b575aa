//! Algorithm selection and dispatch.
//!
//! Each clip call is independent: the window, the configuration and the
//! segment are passed in explicitly and no state is shared between the
//! clippers.

use core::fmt;
use core::str::FromStr;

use crate::basics::Segment;
use crate::clip_config::ClipConfig;
use crate::clip_liang_barsky::clip_liang_barsky;
use crate::clip_midpoint::clip_midpoint;
use crate::clip_sutherland_cohen::clip_sutherland_cohen;
use crate::clip_window::ClipWindow;
use crate::error::{ClipError, Result};

/// The three mutually exclusive clipping strategies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Algorithm {
    #[default]
    SutherlandCohen,
    LiangBarsky,
    Midpoint,
}

impl Algorithm {
    pub const ALL: [Algorithm; 3] = [
        Algorithm::SutherlandCohen,
        Algorithm::LiangBarsky,
        Algorithm::Midpoint,
    ];

    /// Map a selector index (0, 1 or 2) to an algorithm.
    pub fn from_index(index: i32) -> Result<Self> {
        match index {
            0 => Ok(Algorithm::SutherlandCohen),
            1 => Ok(Algorithm::LiangBarsky),
            2 => Ok(Algorithm::Midpoint),
            _ => Err(ClipError::UnknownAlgorithm(index)),
        }
    }

    pub fn index(self) -> i32 {
        match self {
            Algorithm::SutherlandCohen => 0,
            Algorithm::LiangBarsky => 1,
            Algorithm::Midpoint => 2,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Algorithm::SutherlandCohen => "sutherland-cohen",
            Algorithm::LiangBarsky => "liang-barsky",
            Algorithm::Midpoint => "midpoint",
        }
    }

    /// Clip one segment with this algorithm.
    ///
    /// Sutherland-Cohen and Liang-Barsky yield at most one piece; midpoint
    /// subdivision may yield several. An empty vector means the segment was
    /// rejected.
    pub fn clip(
        self,
        seg: &Segment,
        window: &ClipWindow,
        config: &ClipConfig,
    ) -> Result<Vec<Segment>> {
        match self {
            Algorithm::SutherlandCohen => {
                clip_sutherland_cohen(seg, window, config.max_boundary_iterations)
                    .map(|s| s.into_iter().collect())
            }
            Algorithm::LiangBarsky => Ok(clip_liang_barsky(seg, window).into_iter().collect()),
            Algorithm::Midpoint => clip_midpoint(seg, window, config.max_subdivision_depth),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Algorithm {
    type Err = ClipError;

    /// Accepts an index, a full name or a short name
    /// (`sc`, `lb`, `mid`), case-insensitively.
    fn from_str(s: &str) -> Result<Self> {
        if let Ok(index) = s.parse::<i32>() {
            return Self::from_index(index);
        }
        match s.to_ascii_lowercase().as_str() {
            "sutherland-cohen" | "sutherland_cohen" | "sc" => Ok(Algorithm::SutherlandCohen),
            "liang-barsky" | "liang_barsky" | "lb" => Ok(Algorithm::LiangBarsky),
            "midpoint" | "mid" => Ok(Algorithm::Midpoint),
            _ => Err(ClipError::UnknownAlgorithmName(s.to_string())),
        }
    }
}

impl TryFrom<i32> for Algorithm {
    type Error = ClipError;

    fn try_from(index: i32) -> Result<Self> {
        Self::from_index(index)
    }
}

// ============================================================================
// Tests
// ============================================================================
