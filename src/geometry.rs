//! Axis-aligned bounding boxes, the single collision primitive.
//!
//! Every pairwise interaction in the simulation (bullet↔enemy,
//! enemy-bullet↔player, enemy↔player, power-up↔player) goes through
//! [`Aabb::overlaps`]; nothing else in the crate does geometry.

/// An axis-aligned box in arena coordinates (origin top-left, y grows down).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Aabb {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

impl Aabb {
    /// Box from a top-left corner and a width/height.
    pub fn from_rect(x: f32, y: f32, width: f32, height: f32) -> Aabb {
        Aabb {
            left: x,
            top: y,
            right: x + width,
            bottom: y + height,
        }
    }

    fn is_degenerate(&self) -> bool {
        self.right <= self.left || self.bottom <= self.top
    }

    /// Strict-inequality overlap test: boxes that merely share an edge do
    /// not collide, and zero-area boxes never overlap anything.
    pub fn overlaps(&self, other: &Aabb) -> bool {
        if self.is_degenerate() || other.is_degenerate() {
            return false;
        }
        self.left < other.right
            && self.right > other.left
            && self.top < other.bottom
            && self.bottom > other.top
    }
}
