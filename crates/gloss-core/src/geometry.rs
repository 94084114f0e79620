#![forbid(unsafe_code)]

//! Geometric primitives.
//!
//! Coordinates are signed pixels (origin at top-left, y grows downward).
//! Overlay geometry routinely pads outside the text bounds, so negative
//! intermediate coordinates are legal.

/// A point in canvas pixel space.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct PixelPos {
    pub x: i32,
    pub y: i32,
}

impl PixelPos {
    /// Create a new point.
    #[inline]
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// This point shifted by `(dx, dy)`.
    #[inline]
    #[must_use]
    pub const fn offset(self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// Component-wise midpoint between two points (integer division).
    #[inline]
    #[must_use]
    pub const fn midpoint(self, other: Self) -> Self {
        Self {
            x: (self.x + other.x) / 2,
            y: (self.y + other.y) / 2,
        }
    }
}

/// An axis-aligned rectangle in canvas pixel space.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PixelRect {
    /// Left edge (inclusive).
    pub x: i32,
    /// Top edge (inclusive).
    pub y: i32,
    /// Width in pixels.
    pub width: i32,
    /// Height in pixels.
    pub height: i32,
}

impl PixelRect {
    /// Create a new rectangle.
    #[inline]
    #[must_use]
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Build a rectangle from two corner coordinates.
    ///
    /// Corners may be given in any order; the result is normalized.
    #[must_use]
    pub const fn from_corners(x1: i32, y1: i32, x2: i32, y2: i32) -> Self {
        let (left, right) = if x1 <= x2 { (x1, x2) } else { (x2, x1) };
        let (top, bottom) = if y1 <= y2 { (y1, y2) } else { (y2, y1) };
        Self {
            x: left,
            y: top,
            width: right - left,
            height: bottom - top,
        }
    }

    /// Left edge (inclusive). Alias for `self.x`.
    #[inline]
    #[must_use]
    pub const fn left(&self) -> i32 {
        self.x
    }

    /// Top edge (inclusive). Alias for `self.y`.
    #[inline]
    #[must_use]
    pub const fn top(&self) -> i32 {
        self.y
    }

    /// Right edge (exclusive).
    #[inline]
    #[must_use]
    pub const fn right(&self) -> i32 {
        self.x + self.width
    }

    /// Bottom edge (exclusive).
    #[inline]
    #[must_use]
    pub const fn bottom(&self) -> i32 {
        self.y + self.height
    }

    /// Check if the rectangle has zero area.
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.width <= 0 || self.height <= 0
    }

    /// Check if a point is inside the rectangle.
    #[inline]
    #[must_use]
    pub const fn contains(&self, pos: PixelPos) -> bool {
        pos.x >= self.x && pos.x < self.right() && pos.y >= self.y && pos.y < self.bottom()
    }
}

/// The drawable extent of a canvas, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CanvasBounds {
    pub width: i32,
    pub height: i32,
}

impl CanvasBounds {
    /// Create new bounds.
    #[inline]
    #[must_use]
    pub const fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }

    /// Horizontal center of the canvas.
    #[inline]
    #[must_use]
    pub const fn h_center(&self) -> i32 {
        self.width / 2
    }

    /// Vertical center of the canvas.
    #[inline]
    #[must_use]
    pub const fn v_center(&self) -> i32 {
        self.height / 2
    }
}
