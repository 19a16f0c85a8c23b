//! Draw order and screen placement for world sprites.

use bevy::prelude::*;

use crate::level::SpriteKind;
use crate::physics::Playfield;

/// Defines the render order for world sprites.
/// Lower values render behind higher values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum DrawLayer {
    Ladder = 0,
    Platform = 10,
    Pickup = 20,
    Enemy = 30,
    Player = 40,
    Projectile = 50,
}

impl DrawLayer {
    /// Convert to Z coordinate for 2D ordering.
    pub fn z_index(&self) -> f32 {
        (*self as i32) as f32 * 0.01
    }

    pub fn of(kind: SpriteKind) -> Self {
        match kind {
            SpriteKind::Ladder => DrawLayer::Ladder,
            SpriteKind::Platform => DrawLayer::Platform,
            SpriteKind::Hammer | SpriteKind::Blaster => DrawLayer::Pickup,
            SpriteKind::Barrel | SpriteKind::Boss | SpriteKind::Monkey | SpriteKind::SmartMonkey => {
                DrawLayer::Enemy
            }
            SpriteKind::Player => DrawLayer::Player,
        }
    }
}

/// Simulation positions are y-down from the top-left corner; the 2D camera
/// is y-up and centred on the play-field.
pub fn to_screen(position: Vec2, field: &Playfield, layer: DrawLayer) -> Vec3 {
    Vec3::new(
        position.x - field.width * 0.5,
        field.height * 0.5 - position.y,
        layer.z_index(),
    )
}
