//! Physics domain: axis-aligned bounding boxes in screen space.
//!
//! Screen space has x growing to the right and y growing downward, so `top()`
//! is the smaller y value and `bottom()` the larger one.

use bevy::prelude::*;

/// Axis-aligned box anchored at its centre.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub center: Vec2,
    pub half_size: Vec2,
}

impl Aabb {
    pub fn from_center_size(center: Vec2, size: Vec2) -> Self {
        Self {
            center,
            half_size: size * 0.5,
        }
    }

    pub fn size(&self) -> Vec2 {
        self.half_size * 2.0
    }

    pub fn left(&self) -> f32 {
        self.center.x - self.half_size.x
    }

    pub fn right(&self) -> f32 {
        self.center.x + self.half_size.x
    }

    pub fn top(&self) -> f32 {
        self.center.y - self.half_size.y
    }

    pub fn bottom(&self) -> f32 {
        self.center.y + self.half_size.y
    }

    /// Strict overlap on both axes. Boxes that only share an edge do not intersect.
    pub fn intersects(&self, other: &Aabb) -> bool {
        self.overlaps_horizontally(other)
            && self.top() < other.bottom()
            && self.bottom() > other.top()
    }

    /// Strict overlap of the horizontal extents.
    pub fn overlaps_horizontally(&self, other: &Aabb) -> bool {
        self.right() > other.left() && self.left() < other.right()
    }

    /// Inclusive vertical overlap: touching edges count.
    pub fn touches_vertically(&self, other: &Aabb) -> bool {
        self.bottom() >= other.top() && self.top() <= other.bottom()
    }

    /// Whether `x` lies within the horizontal span, edges included.
    pub fn contains_x(&self, x: f32) -> bool {
        self.left() <= x && x <= self.right()
    }

    /// Whether `x` lies strictly inside the horizontal span.
    pub fn contains_x_strict(&self, x: f32) -> bool {
        self.left() < x && x < self.right()
    }
}
