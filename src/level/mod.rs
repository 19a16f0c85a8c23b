//! Level domain: spawning levels, the run timer and what happens when a level
//! ends.

mod components;
mod resources;
mod spawn;
mod systems;


pub use components::{Ladder, LevelEntity, Platform, SpriteKind};
pub use resources::LevelStatus;
pub use spawn::SpawnTuning;

use bevy::prelude::*;

use crate::core::{GameState, SimSet};
use crate::level::systems::{
    apply_level_gravity, enter_play, exit_play, level_in_progress, resolve_level_outcome,
    tick_clock,
};

pub struct LevelPlugin;

impl Plugin for LevelPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<LevelStatus>()
            .configure_sets(Update, SimSet::World.run_if(level_in_progress))
            .configure_sets(Update, SimSet::Enemies.run_if(level_in_progress))
            .configure_sets(Update, SimSet::Player.run_if(level_in_progress))
            .configure_sets(Update, SimSet::Rules.run_if(level_in_progress))
            .add_systems(OnEnter(GameState::Play), enter_play)
            .add_systems(OnExit(GameState::Play), exit_play)
            .add_systems(Update, tick_clock.in_set(SimSet::Clock))
            .add_systems(Update, apply_level_gravity.in_set(SimSet::World))
            .add_systems(Update, resolve_level_outcome.in_set(SimSet::Outcome));
    }
}
