//! Integer geometric primitives for pixel rendering.
//!
//! Provides the basic value types used by the outline generators. All
//! coordinates are signed integer pixel positions.

/// A 2D point with integer pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    /// X coordinate.
    pub x: i32,
    /// Y coordinate.
    pub y: i32,
}

impl Point {
    /// Origin point (0, 0).
    pub const ORIGIN: Self = Self::new(0, 0);

    /// Create a new point.
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Squared Euclidean distance to another point.
    ///
    /// Exact in integer arithmetic, widened to `i64` so the square cannot
    /// overflow for canvas-scale coordinates.
    #[must_use]
    pub fn distance_squared(self, other: Self) -> i64 {
        let dx = i64::from(self.x - other.x);
        let dy = i64::from(self.y - other.y);
        dx * dx + dy * dy
    }
}

impl From<(i32, i32)> for Point {
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

/// A pixel rectangle defined by its top-left corner and size.
///
/// `size.x` is the width and `size.y` the height, both in pixels. The
/// rectangle covers the half-open pixel range `[position, position + size)`.
/// Size components may be zero or negative; no validation is performed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rect {
    /// Top-left corner.
    pub position: Point,
    /// Width (`x`) and height (`y`) in pixels.
    pub size: Point,
}

impl Rect {
    /// Create a new rectangle from its top-left corner and size.
    #[must_use]
    pub const fn new(position: Point, size: Point) -> Self {
        Self { position, size }
    }

    /// Create a rectangle from raw coordinates.
    #[must_use]
    pub const fn from_coords(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self::new(Point::new(x, y), Point::new(width, height))
    }

    /// Create a rectangle spanning two corner points.
    ///
    /// The size is the component-wise difference; a `bottom_right` left of or
    /// above `top_left` yields a negative size, which is preserved.
    #[must_use]
    pub const fn from_corners(top_left: Point, bottom_right: Point) -> Self {
        Self::new(
            top_left,
            Point::new(bottom_right.x - top_left.x, bottom_right.y - top_left.y),
        )
    }

    /// Width of the rectangle in pixels.
    #[must_use]
    pub const fn width(&self) -> i32 {
        self.size.x
    }

    /// Height of the rectangle in pixels.
    #[must_use]
    pub const fn height(&self) -> i32 {
        self.size.y
    }

    /// Center pixel of the rectangle, rounded toward the top-left.
    ///
    /// Integer division truncates, so even-sized rectangles report the pixel
    /// just right/below the geometric center line.
    #[must_use]
    pub const fn center(&self) -> Point {
        Point::new(
            self.position.x + self.size.x / 2,
            self.position.y + self.size.y / 2,
        )
    }

    /// Check if a pixel lies inside the rectangle (half-open range).
    #[must_use]
    pub const fn contains(&self, point: Point) -> bool {
        point.x >= self.position.x
            && point.x < self.position.x + self.size.x
            && point.y >= self.position.y
            && point.y < self.position.y + self.size.y
    }
}
