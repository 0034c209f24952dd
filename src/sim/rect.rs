//! Axis-aligned rectangle geometry
//!
//! The paddle and every brick are rectangles in canvas coordinates
//! (y grows downward). Collision tests run against bounds expanded by
//! the ball radius, which reduces circle-vs-rectangle to point-in-bounds.

use glam::Vec2;

/// An axis-aligned rectangle anchored at its top-left corner
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.x
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.y
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    /// Edges pushed outward by a ball radius: the region of ball centers
    /// that overlap this rectangle
    pub fn expand(&self, radius: f32) -> Bounds {
        Bounds {
            left: self.left() - radius,
            right: self.right() + radius,
            top: self.top() - radius,
            bottom: self.bottom() + radius,
        }
    }
}

/// Edge positions of a radius-expanded rectangle
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub left: f32,
    pub right: f32,
    pub top: f32,
    pub bottom: f32,
}

impl Bounds {
    /// Strict interior test; a point exactly on an edge does not collide
    #[inline]
    pub fn contains(&self, p: Vec2) -> bool {
        p.x > self.left && p.x < self.right && p.y > self.top && p.y < self.bottom
    }
}
