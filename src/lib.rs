//! # Pixel-Outline
//!
//! Pixel-perfect ellipse outline generation for raster drawing tools.
//!
//! Provides the shape-tool primitive used by pixel-art editors: given an
//! axis-aligned bounding rectangle in integer pixel coordinates, compute the
//! ordered sequence of pixels forming the outline of the inscribed ellipse.
//! The walk is pure integer arithmetic (no floating point, no trigonometry)
//! and emits four symmetric points per step, with a gap-closing pass covering
//! the poles of tall narrow ellipses.
//!
//! ## Quick Start
//!
//! ```
//! use pixel_outline::prelude::*;
//!
//! // Outline of a circle inscribed in a 5x5 box at the origin.
//! let points = ellipse_outline(Point::ORIGIN, Point::new(5, 5));
//! assert!(points.contains(&Point::new(2, 0)));
//!
//! // The host clips and stamps the pixels itself; duplicates are expected.
//! let unique = ellipse_outline_unique(Point::ORIGIN, Point::new(5, 5));
//! assert!(unique.len() <= points.len());
//! ```
//!
//! ## Scope
//!
//! Outline generation only: no fill, no anti-aliasing, no rotation, no
//! clipping. Output points may overscan the bounding box by one pixel
//! horizontally (gap-closing pass) and may fall outside any canvas; callers
//! bounds-check before writing.
//!
//! ## Feature Flags
//!
//! - `serde`: serde derives on the geometry types
//!
//! ## References
//!
//! - Zingl, A. (2012). "A Rasterizing Algorithm for Drawing Curves."
//! - Bresenham, J. E. (1965). Incremental line/curve stepping.

#![warn(missing_docs)]
// Allow unwrap() in tests only - banned in production code
#![cfg_attr(test, allow(clippy::unwrap_used))]
// Allow common patterns in graphics code
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::many_single_char_names)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::similar_names)]

/// Ellipse outline rasterization.
pub mod ellipse;

/// Integer geometric primitives (points, rectangles).
pub mod geometry;

/// Convenience re-exports.
pub mod prelude {
    pub use crate::ellipse::{ellipse_outline, ellipse_outline_rect, ellipse_outline_unique};
    pub use crate::geometry::{Point, Rect};
}
