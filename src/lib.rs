//! # line-clip
//!
//! Clipping of 2D line segments against an axis-aligned rectangular window,
//! with three classical algorithms:
//!
//! - **Sutherland-Cohen**: outcode-driven boundary walking in integer
//!   arithmetic
//! - **Liang-Barsky**: parametric interval intersection in floating point
//! - **Midpoint subdivision**: bounded integer bisection toward the boundary
//!
//! ## Architecture
//!
//! 1. **Clip Window / Line Store**: the inputs, in logical coordinates
//! 2. **Outcode Classifier**: 4-bit region codes
//! 3. **Clippers**: one module per algorithm, each a pure function
//! 4. **Algorithm Selector**: dispatches a segment to exactly one clipper
//! 5. **Clip Scene**: the controller owning window, lines and selection
//! 6. **Display Transform**: logical to display coordinates for renderers
//!
//! ```
//! use line_clip::{Algorithm, ClipConfig, ClipScene, ClipWindow, Segment};
//!
//! let window = ClipWindow::new(-50, -50, 50, 50).unwrap();
//! let mut scene = ClipScene::new(window, ClipConfig::default());
//! scene.add_line(-100, 0, 100, 0);
//! scene.set_algorithm(Algorithm::LiangBarsky);
//! assert_eq!(
//!     scene.accepted_segments(),
//!     vec![Segment::from_coords(-50, 0, 50, 0)]
//! );
//! ```

// Foundation
pub mod basics;
pub mod error;

// Inputs
pub mod clip_config;
pub mod clip_window;
pub mod line_store;

// Clippers
pub mod clip_liang_barsky;
pub mod clip_midpoint;
pub mod clip_sutherland_cohen;
pub mod outcode;

// Dispatch, control and display
pub mod clip_algorithm;
pub mod clip_scene;
pub mod trans_viewport;

pub use basics::{PointI, Segment};
pub use clip_algorithm::Algorithm;
pub use clip_config::{ClipConfig, WindowPolicy};
pub use clip_scene::{ClipScene, ClippedLine};
pub use clip_window::ClipWindow;
pub use error::{ClipError, Result};
pub use line_store::LineStore;
pub use outcode::Outcode;
pub use trans_viewport::DisplayTransform;
