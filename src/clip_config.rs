//! Clipping configuration shared by every render pass.

/// What to do with a window whose min bound exceeds its max bound.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WindowPolicy {
    /// Fail with `ClipError::DegenerateWindow`.
    #[default]
    Reject,
    /// Swap the inverted bounds.
    Normalize,
}

/// Resource bounds and validation policy, passed explicitly into each clip call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClipConfig {
    /// Maximum nesting of midpoint bisection before a segment is reported
    /// as `ClipError::SubdivisionLimit`. 64 levels cover the full `i32` range
    /// twice over.
    pub max_subdivision_depth: u32,
    /// Maximum number of boundary intersections Sutherland-Cohen may compute
    /// for one segment. Each endpoint needs at most two.
    pub max_boundary_iterations: u32,
    pub window_policy: WindowPolicy,
}

impl Default for ClipConfig {
    fn default() -> Self {
        Self {
            max_subdivision_depth: 64,
            max_boundary_iterations: 8,
            window_policy: WindowPolicy::Reject,
        }
    }
}

impl ClipConfig {
    pub fn with_max_subdivision_depth(mut self, depth: u32) -> Self {
        self.max_subdivision_depth = depth;
        self
    }

    pub fn with_max_boundary_iterations(mut self, iterations: u32) -> Self {
        self.max_boundary_iterations = iterations;
        self
    }

    pub fn with_window_policy(mut self, policy: WindowPolicy) -> Self {
        self.window_policy = policy;
        self
    }
}
