//! Debug overlays for tuning levels (dev-tools builds only).
//!
//! - F3: outline every collision box, the player's contact box and live
//!   projectiles
//! - F4: player position, velocity and ladder state

mod state;
mod systems;
mod ui;


pub use state::DebugState;
pub use ui::describe_player;

use bevy::prelude::*;

use crate::core::{GameState, SimSet};
use crate::debug::systems::{draw_hitboxes, handle_debug_hotkeys, update_debug_info_overlay};

pub struct DebugPlugin;

impl Plugin for DebugPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<DebugState>()
            .add_systems(Update, handle_debug_hotkeys)
            .add_systems(
                Update,
                draw_hitboxes
                    .after(SimSet::Outcome)
                    .run_if(in_state(GameState::Play))
                    .run_if(|state: Res<DebugState>| state.show_hitboxes),
            )
            .add_systems(Update, update_debug_info_overlay);
    }
}
