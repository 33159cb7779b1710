//! Geometry primitives shared by display topology and window selection.
//!
//! Everything here is pure and side-effect free. Coordinates follow the host
//! convention: origin at the top-left of the primary display, `x` growing
//! right, `y` growing down, negative values allowed (a display arranged to
//! the left of the primary reports a negative `left`).

use serde::{Deserialize, Serialize};

/// A point in global screen coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// An axis-aligned rectangle in global screen coordinates.
///
/// Used for both display bounds/work areas and window geometry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rect {
    pub left: i32,
    pub top: i32,
    pub width: i32,
    pub height: i32,
}

impl Rect {
    pub fn new(left: i32, top: i32, width: i32, height: i32) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    /// The center point: `(left + width/2, top + height/2)`.
    pub fn center(&self) -> Point {
        Point {
            x: self.left + self.width / 2,
            y: self.top + self.height / 2,
        }
    }

    /// Half-open containment test: `left <= x < left + width`, same
    /// vertically.
    ///
    /// A point exactly on the right/bottom edge is *not* contained while a
    /// point on the left/top edge is. The asymmetry is deliberate: adjacent
    /// displays share an edge, and the half-open test assigns a point on the
    /// seam to exactly one of them.
    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.left
            && point.x < self.left + self.width
            && point.y >= self.top
            && point.y < self.top + self.height
    }
}
