//! UI domain: the in-play HUD.

mod hud_boss;
mod hud_score;
mod readout;


pub use readout::{CurrentReadout, HudReadout};

use bevy::prelude::*;

use crate::core::{GameState, SimSet};
use crate::ui::hud_boss::{cleanup_boss_panel, spawn_boss_panel, update_boss_panel};
use crate::ui::hud_score::{cleanup_score_panel, spawn_score_panel, update_score_panel};
use crate::ui::readout::refresh_readout;

pub struct UiPlugin;

impl Plugin for UiPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<CurrentReadout>()
            .add_systems(
                OnEnter(GameState::Play),
                (spawn_score_panel, spawn_boss_panel),
            )
            .add_systems(
                OnExit(GameState::Play),
                (cleanup_score_panel, cleanup_boss_panel),
            )
            .add_systems(
                Update,
                (refresh_readout, (update_score_panel, update_boss_panel))
                    .chain()
                    .after(SimSet::Outcome)
                    .run_if(in_state(GameState::Play)),
            );
    }
}
