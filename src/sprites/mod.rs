//! Sprites module: flat-colour quads for every simulated entity.
//!
//! Rendering only reads the simulation. Positions are converted from the
//! y-down play-field to the centred 2D camera each frame.

pub mod layers;
pub mod palette;
mod systems;

#[cfg(test)]
mod tests;

use bevy::prelude::*;

pub use layers::{DrawLayer, to_screen};
pub use systems::ProjectileVisual;

use crate::core::{GameState, SimSet};
use crate::sprites::systems::{
    attach_sprites, clear_projectiles, draw_projectiles, hide_inactive, spawn_camera,
    sync_player_sprite, sync_sprite_transforms,
};

pub struct SpritesPlugin;

impl Plugin for SpritesPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, spawn_camera)
            .add_systems(OnExit(GameState::Play), clear_projectiles)
            .add_systems(
                Update,
                (
                    attach_sprites,
                    sync_sprite_transforms,
                    sync_player_sprite,
                    hide_inactive,
                    draw_projectiles,
                )
                    .chain()
                    .after(SimSet::Outcome)
                    .run_if(in_state(GameState::Play)),
            );
    }
}
