//! Ellipse outline rasterization.
//!
//! Implements an integer midpoint ellipse walk with four-way symmetry for
//! pixel-art shape tools. The generator is a pure function: it takes a
//! bounding rectangle and returns the outline pixels in emission order.

use crate::geometry::{Point, Rect};
use std::collections::HashSet;

// ============================================================================
// Ellipse Outline Generation
// ============================================================================

/// Compute the outline pixels of the ellipse inscribed in a bounding box.
///
/// `position` is the top-left corner of the bounding rectangle; `size.x` and
/// `size.y` are its width and height in pixels. The output is produced
/// eagerly and ordered: the main symmetric walk emits four points per step as
/// `(right, y0)`, `(left, y0)`, `(left, y1)`, `(right, y1)`, followed by a
/// gap-closing pass that covers the top/bottom poles of tall narrow ellipses.
///
/// Duplicate coordinates are emitted rather than filtered, particularly near
/// the poles and for small sizes; use [`ellipse_outline_unique`] for set
/// semantics. Points are not clipped — callers bounds-check before writing
/// pixels, and the gap-closing pass may overscan the bounding box by one
/// pixel horizontally.
///
/// Degenerate sizes (zero or negative components) are not rejected; the
/// walk runs on whatever extents fall out of the arithmetic and the result
/// is well-defined but degenerate.
///
/// # Algorithm
///
/// Midpoint ellipse stepping over the inclusive corner pair
/// `(x0, y0)..(x1, y1)`, tracking an incremental error term instead of
/// evaluating the ellipse equation. Each step mirrors one computed position
/// into all four quadrants. When the horizontal extent is exhausted before
/// the vertical one (height greater than width), a second loop walks the
/// remaining pole rows at `x0 - 1` / `x1 + 1`.
///
/// # References
///
/// Zingl, A. (2012). "A Rasterizing Algorithm for Drawing Curves."
///
/// # Example
///
/// ```
/// use pixel_outline::ellipse::ellipse_outline;
/// use pixel_outline::geometry::Point;
///
/// let points = ellipse_outline(Point::ORIGIN, Point::new(5, 5));
/// assert!(points.contains(&Point::new(2, 0))); // top of the circle
/// assert!(points.contains(&Point::new(0, 2))); // left
/// ```
#[must_use]
pub fn ellipse_outline(position: Point, size: Point) -> Vec<Point> {
    generate(position, size).0
}

/// Compute the outline pixels of the ellipse inscribed in `rect`.
///
/// Equivalent to [`ellipse_outline`] over the rectangle's position and size.
#[must_use]
pub fn ellipse_outline_rect(rect: Rect) -> Vec<Point> {
    ellipse_outline(rect.position, rect.size)
}

/// Deduplicated variant of [`ellipse_outline`].
///
/// Keeps the first occurrence of each coordinate, preserving emission order
/// otherwise. Useful when stamping with blend modes where double-writes are
/// visible.
#[must_use]
pub fn ellipse_outline_unique(position: Point, size: Point) -> Vec<Point> {
    let points = ellipse_outline(position, size);
    let mut seen = HashSet::with_capacity(points.len());
    points.into_iter().filter(|p| seen.insert(*p)).collect()
}

/// Core walk. Returns the emitted points and the number of gap-closing
/// iterations (the latter only observed by tests).
fn generate(position: Point, size: Point) -> (Vec<Point>, u32) {
    // Inclusive opposite corner of the bounding box.
    let mut x0 = position.x;
    let mut x1 = position.x + (size.x - 1);
    let mut y0 = position.y;
    let mut y1 = position.y + (size.y - 1);

    let a = (x1 - x0).abs();
    let b = (y1 - y0).abs();
    let parity = b & 1;

    let mut dx = 4 * (1 - a) * b * b;
    let mut dy = 4 * (parity + 1) * a * a;
    let mut err = dx + dy + parity * a * a;

    if x0 > x1 {
        x0 = x1;
        x1 += a;
    }
    if y0 > y1 {
        y0 = y1;
    }

    // Center the vertical pair on the middle row(s); odd heights share one.
    y0 += (b + 1) / 2;
    y1 = y0 - parity;

    // Error-term increments for the main loop.
    let y_coeff = 8 * a * a;
    let x_coeff = 8 * b * b;

    let mut points = Vec::with_capacity(4 * (a.max(b) as usize + 1));

    while x0 <= x1 {
        points.push(Point::new(x1, y0));
        points.push(Point::new(x0, y0));
        points.push(Point::new(x0, y1));
        points.push(Point::new(x1, y1));

        let e2 = 2 * err;
        if e2 <= dy {
            y0 += 1;
            y1 -= 1;
            dy += y_coeff;
            err += dy;
        }
        if e2 >= dx || 2 * err > dy {
            x0 += 1;
            x1 -= 1;
            dx += x_coeff;
            err += dx;
        }
    }

    // The main loop terminates on the horizontal extent; for ellipses taller
    // than wide this leaves the poles open. Walk the remaining rows one
    // pixel outside the exhausted x range.
    let mut gap_steps = 0;
    while y0 - y1 < b {
        points.push(Point::new(x0 - 1, y0));
        points.push(Point::new(x1 + 1, y0));
        points.push(Point::new(x0 - 1, y1));
        points.push(Point::new(x1 + 1, y1));
        y0 += 1;
        y1 -= 1;
        gap_steps += 1;
    }

    (points, gap_steps)
}

// ============================================================================
// Tests
// ============================================================================


// ============================================================================
// Property-based tests with proptest
// ============================================================================
