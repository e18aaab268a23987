// File: crates/navplot-core/src/geometry.rs
// Summary: Lightweight pixel geometry (points and the viewport rectangle).

use crate::types::MIN_SIZE;

/// Integer pixel coordinate.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// Pixel rectangle the plot is projected into. Edges are inclusive:
/// the right/bottom columns are `x + width - 1` / `y + height - 1`.
/// Width and height never go below `MIN_SIZE`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Viewport {
    pub x: i32,
    pub y: i32,
    width: i32,
    height: i32,
}

impl Viewport {
    pub fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width: width.max(MIN_SIZE),
            height: height.max(MIN_SIZE),
        }
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    pub fn set_size(&mut self, width: i32, height: i32) {
        self.width = width.max(MIN_SIZE);
        self.height = height.max(MIN_SIZE);
    }

    pub fn left(&self) -> i32 {
        self.x
    }

    pub fn right(&self) -> i32 {
        self.x + self.width - 1
    }

    pub fn top(&self) -> i32 {
        self.y
    }

    pub fn bottom(&self) -> i32 {
        self.y + self.height - 1
    }

    pub fn contains(&self, p: Point) -> bool {
        self.left() <= p.x && p.x <= self.right() && self.top() <= p.y && p.y <= self.bottom()
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(0, 0, MIN_SIZE, MIN_SIZE)
    }
}
