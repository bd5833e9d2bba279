//! Axis-aligned rectangle geometry for paddles and ball
//!
//! Screen space: origin at the top-left of the field, +y pointing down.
//! A rectangle is stored as its top-left corner plus size.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// An axis-aligned bounding rectangle
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    /// Top-left corner
    pub min: Vec2,
    /// Width and height
    pub size: Vec2,
}

impl Rect {
    pub fn new(min: Vec2, size: Vec2) -> Self {
        Self { min, size }
    }

    /// Build a rectangle of `size` centered on `center`
    pub fn from_center(center: Vec2, size: Vec2) -> Self {
        Self {
            min: center - size / 2.0,
            size,
        }
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.min.x
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.min.x + self.size.x
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.min.y
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.min.y + self.size.y
    }

    #[inline]
    pub fn max(&self) -> Vec2 {
        self.min + self.size
    }

    pub fn center(&self) -> Vec2 {
        self.min + self.size / 2.0
    }

    /// Strict overlap test: rectangles that only share an edge do not intersect
    pub fn intersects(&self, other: &Rect) -> bool {
        self.left() < other.right()
            && other.left() < self.right()
            && self.top() < other.bottom()
            && other.top() < self.bottom()
    }
}
