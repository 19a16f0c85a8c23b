//! Movement domain: player walking, jumping, climbing and the per-frame player
//! step ordering.

mod components;
mod resources;
pub(crate) mod systems;


pub use components::{ContactBox, MovementState, Player};
pub use resources::{MovementTuning, player_size};
pub use systems::climbing::climb;
pub use systems::movement::{fall, try_jump, walk};

use bevy::prelude::*;

use crate::core::SimSet;
use crate::movement::systems::{
    apply_climbing, apply_gravity, apply_horizontal_movement, apply_jump, finish_player_step,
    sync_player_size,
};

/// Ordering inside `SimSet::Player`: weapon bookkeeping, then locomotion, then
/// firing, then the clamp and contact box capture.
#[derive(SystemSet, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlayerStep {
    Arm,
    Locomotion,
    Weapons,
    Finish,
}

pub struct MovementPlugin;

impl Plugin for MovementPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<MovementTuning>()
            .configure_sets(
                Update,
                (
                    PlayerStep::Arm,
                    PlayerStep::Locomotion,
                    PlayerStep::Weapons,
                    PlayerStep::Finish,
                )
                    .chain()
                    .in_set(SimSet::Player),
            )
            .add_systems(
                Update,
                (
                    sync_player_size,
                    apply_horizontal_movement,
                    apply_climbing,
                    apply_jump,
                    apply_gravity,
                )
                    .chain()
                    .in_set(PlayerStep::Locomotion),
            )
            .add_systems(Update, finish_player_step.in_set(PlayerStep::Finish));
    }
}
