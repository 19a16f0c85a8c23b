//! Physics domain: spatial components shared by every simulated entity.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::physics::Aabb;

/// Centre of an entity in screen space (y grows downward).
#[derive(Component, Debug, Clone, Copy, PartialEq, Default)]
pub struct Position(pub Vec2);

/// Width and height of the entity's bounding box.
#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub struct BodySize(pub Vec2);

/// Insertion order within the level. First-match scans sort by this, never
/// by query iteration order.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SpawnOrder(pub u32);

impl Position {
    pub fn aabb(&self, size: &BodySize) -> Aabb {
        Aabb::from_center_size(self.0, size.0)
    }
}

/// Horizontal heading of walkers and projectiles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
pub enum Facing {
    Left,
    #[default]
    Right,
}

impl Facing {
    /// -1 for left, +1 for right.
    pub fn sign(self) -> f32 {
        match self {
            Facing::Left => -1.0,
            Facing::Right => 1.0,
        }
    }

    pub fn flipped(self) -> Self {
        match self {
            Facing::Left => Facing::Right,
            Facing::Right => Facing::Left,
        }
    }
}

/// Vertical velocity plus the per-kind gravity and terminal velocity.
#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub struct Motion {
    pub velocity_y: f32,
    pub gravity: f32,
    pub terminal_velocity: f32,
}

impl Motion {
    pub fn new(gravity: f32, terminal_velocity: f32) -> Self {
        Self {
            velocity_y: 0.0,
            gravity,
            terminal_velocity,
        }
    }

    pub fn is_falling(&self) -> bool {
        self.velocity_y > 0.0
    }
}

/// Collects `(order, item)` pairs into a vector sorted by spawn order.
pub fn in_spawn_order<T>(mut items: Vec<(SpawnOrder, T)>) -> Vec<T> {
    items.sort_by_key(|(order, _)| *order);
    items.into_iter().map(|(_, item)| item).collect()
}
