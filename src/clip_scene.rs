//! The clip controller.
//!
//! `ClipScene` owns the only mutable clipping state: the window, the line
//! store, the active algorithm and the configuration. It is mutated through
//! discrete operations (select algorithm, set window, clear lines, add line)
//! and every render pass re-clips all stored lines from scratch.

use crate::basics::Segment;
use crate::clip_algorithm::Algorithm;
use crate::clip_config::ClipConfig;
use crate::clip_window::ClipWindow;
use crate::error::{ClipError, Result};
use crate::line_store::LineStore;

// ============================================================================
// ClippedLine
// ============================================================================

/// Result of clipping one stored segment during a render pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClippedLine {
    /// Position of the segment in the line store.
    pub index: usize,
    /// The unclipped input segment.
    pub source: Segment,
    /// Accepted pieces, empty if the segment was rejected.
    pub accepted: Vec<Segment>,
    /// Set when the segment was dropped by a resource bound rather than
    /// rejected geometrically.
    pub error: Option<ClipError>,
}

impl ClippedLine {
    pub fn is_rejected(&self) -> bool {
        self.accepted.is_empty()
    }
}

// ============================================================================
// ClipScene
// ============================================================================

#[derive(Debug, Clone)]
pub struct ClipScene {
    window: ClipWindow,
    lines: LineStore,
    algorithm: Algorithm,
    config: ClipConfig,
}

impl ClipScene {
    pub fn new(window: ClipWindow, config: ClipConfig) -> Self {
        Self {
            window,
            lines: LineStore::new(),
            algorithm: Algorithm::default(),
            config,
        }
    }

    pub fn window(&self) -> &ClipWindow {
        &self.window
    }

    pub fn lines(&self) -> &LineStore {
        &self.lines
    }

    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    pub fn config(&self) -> &ClipConfig {
        &self.config
    }

    pub fn set_algorithm(&mut self, algorithm: Algorithm) {
        log::debug!("algorithm: {} -> {}", self.algorithm, algorithm);
        self.algorithm = algorithm;
    }

    /// Select the algorithm by selector index (0, 1 or 2).
    pub fn set_algorithm_index(&mut self, index: i32) -> Result<()> {
        self.set_algorithm(Algorithm::from_index(index)?);
        Ok(())
    }

    /// Replace the window wholesale, validated per the configured
    /// [`WindowPolicy`](crate::clip_config::WindowPolicy). On error the
    /// previous window is kept.
    pub fn set_window(&mut self, xmin: i32, ymin: i32, xmax: i32, ymax: i32) -> Result<()> {
        let window = ClipWindow::with_policy(xmin, ymin, xmax, ymax, self.config.window_policy)?;
        log::debug!("window: {} -> {}", self.window, window);
        self.window = window;
        Ok(())
    }

    pub fn clear_lines(&mut self) {
        self.lines.clear();
    }

    pub fn add_line(&mut self, x1: i32, y1: i32, x2: i32, y2: i32) {
        self.lines.add_line(x1, y1, x2, y2);
    }

    pub fn add_segment(&mut self, seg: Segment) {
        self.lines.add(seg);
    }

    /// Run a render pass: clip every stored segment, in store order, with the
    /// active algorithm.
    ///
    /// A segment that hits a resource bound is reported in its `error` field
    /// and the pass continues.
    pub fn clip_lines(&self) -> Vec<ClippedLine> {
        log::debug!(
            "clipping {} lines against {} with {}",
            self.lines.len(),
            self.window,
            self.algorithm
        );
        self.lines
            .iter()
            .enumerate()
            .map(|(index, seg)| {
                match self.algorithm.clip(seg, &self.window, &self.config) {
                    Ok(accepted) => ClippedLine {
                        index,
                        source: *seg,
                        accepted,
                        error: None,
                    },
                    Err(e) => {
                        log::warn!("line {} dropped: {}", index, e);
                        ClippedLine {
                            index,
                            source: *seg,
                            accepted: Vec::new(),
                            error: Some(e),
                        }
                    }
                }
            })
            .collect()
    }

    /// All accepted pieces of a render pass, flattened in store order.
    pub fn accepted_segments(&self) -> Vec<Segment> {
        self.clip_lines()
            .into_iter()
            .flat_map(|c| c.accepted)
            .collect()
    }
}

// ============================================================================
// Tests
// ============================================================================
