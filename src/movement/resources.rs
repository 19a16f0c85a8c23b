//! Movement domain: tuning resources.

use bevy::prelude::*;

use crate::combat::{Loadout, WeaponKind};
use crate::content::{PlayerSizes, vec2};

#[derive(Resource, Debug, Clone)]
pub struct MovementTuning {
    /// Horizontal distance per frame while an arrow key is held.
    pub walk_speed: f32,
    /// Initial vertical velocity of a jump (negative is up).
    pub jump_velocity: f32,
    pub climb_speed: f32,
}

impl Default for MovementTuning {
    fn default() -> Self {
        Self {
            walk_speed: 3.5,
            jump_velocity: -5.0,
            climb_speed: 2.0,
        }
    }
}

/// Box size of the player for whatever they are holding.
pub fn player_size(sizes: &PlayerSizes, loadout: &Loadout) -> Vec2 {
    match loadout.weapon {
        None => vec2(sizes.unarmed),
        Some(WeaponKind::Hammer) => vec2(sizes.hammer),
        Some(WeaponKind::Blaster) => vec2(sizes.blaster),
    }
}
