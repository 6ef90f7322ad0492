//! Axis-aligned bounding boxes for the ball and paddles
//!
//! The field is y-up with the origin at its bottom-left corner. A rect is
//! defined by:
//! - pos: bottom-left corner
//! - size: width and height (extends pos.x..pos.x + w, pos.y..pos.y + h)

use glam::Vec2;

/// An axis-aligned rectangle in field space
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    /// Bottom-left corner
    pub pos: Vec2,
    /// Width and height
    pub size: Vec2,
}

impl Rect {
    pub fn new(pos: Vec2, size: Vec2) -> Self {
        Self { pos, size }
    }

    /// Left edge
    #[inline]
    pub fn x(&self) -> f32 {
        self.pos.x
    }

    /// Bottom edge
    #[inline]
    pub fn y(&self) -> f32 {
        self.pos.y
    }

    /// Right edge
    #[inline]
    pub fn right(&self) -> f32 {
        self.pos.x + self.size.x
    }

    /// Top edge
    #[inline]
    pub fn top(&self) -> f32 {
        self.pos.y + self.size.y
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        self.pos + self.size * 0.5
    }

    /// Check if two rects overlap. Shared edges count as overlap.
    pub fn intersects(&self, other: &Rect) -> bool {
        !(self.right() < other.x()
            || self.x() > other.right()
            || self.top() < other.y()
            || self.y() > other.top())
    }
}
