//! Geometry primitives for cell layout.
//!
//! All values are in layout points (f32). A zero-sized rect is the
//! "degenerate" frame used for sub-elements that are omitted from the
//! vertical flow.

use serde::Deserialize;

/// A position in layout points.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    /// Horizontal offset from the cell's left edge.
    pub x: f32,
    /// Vertical offset from the cell's top edge.
    pub y: f32,
}

impl Point {
    /// Create a new point.
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// A size in layout points.
#[derive(Debug, Clone, Copy, PartialEq, Default, Deserialize)]
pub struct Size {
    /// Width in points.
    pub width: f32,
    /// Height in points.
    pub height: f32,
}

impl Size {
    /// Zero size.
    pub const ZERO: Self = Self::new(0.0, 0.0);

    /// Create a new size.
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// A rectangle defined by origin and size.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    /// Origin (top-left corner).
    pub origin: Point,
    /// Extent.
    pub size: Size,
}

impl Rect {
    /// Degenerate rectangle at the origin.
    pub const ZERO: Self = Self {
        origin: Point::new(0.0, 0.0),
        size: Size::ZERO,
    };

    /// Create a rectangle from origin coordinates and a size.
    pub const fn new(x: f32, y: f32, size: Size) -> Self {
        Self {
            origin: Point::new(x, y),
            size,
        }
    }

    /// Right edge.
    pub fn max_x(&self) -> f32 {
        self.origin.x + self.size.width
    }

    /// Bottom edge.
    pub fn max_y(&self) -> f32 {
        self.origin.y + self.size.height
    }

    /// Whether this frame is degenerate (zero area) and thus omitted from
    /// the vertical flow.
    pub fn is_degenerate(&self) -> bool {
        self.size.width == 0.0 || self.size.height == 0.0
    }
}
