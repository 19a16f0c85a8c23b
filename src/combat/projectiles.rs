//! Combat domain: projectile flight and range limits.

use bevy::prelude::*;

use crate::physics::{Aabb, Facing, Playfield};

/// A bullet or banana in flight. Inactive projectiles stay in their owner's
/// list and are skipped everywhere; the flag never flips back.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projectile {
    pub position: Vec2,
    pub size: Vec2,
    pub facing: Facing,
    pub speed: f32,
    pub travelled: f32,
    pub active: bool,
}

impl Projectile {
    pub fn new(position: Vec2, size: Vec2, facing: Facing, speed: f32) -> Self {
        Self {
            position,
            size,
            facing,
            speed,
            travelled: 0.0,
            active: true,
        }
    }

    /// One tick of flight. Deactivates once `max_range` has been covered or
    /// the new position leaves the play-field horizontally.
    pub fn advance(&mut self, field: &Playfield, max_range: f32) {
        if !self.active {
            return;
        }

        let step = self.facing.sign() * self.speed;
        self.position.x += step;
        self.travelled += step.abs();

        if self.travelled >= max_range || !field.contains_x(self.position.x) {
            self.active = false;
        }
    }

    pub fn deactivate(&mut self) {
        self.active = false;
    }

    pub fn aabb(&self) -> Aabb {
        Aabb::from_center_size(self.position, self.size)
    }
}

/// Advances every projectile in `list`.
pub fn advance_all(list: &mut [Projectile], field: &Playfield, max_range: f32) {
    for projectile in list.iter_mut() {
        projectile.advance(field, max_range);
    }
}
