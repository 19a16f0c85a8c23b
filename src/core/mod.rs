//! Core domain: screen state machine, frame clock, input snapshot and the
//! ordering of one simulation tick.

mod events;
mod input;
mod resources;
mod state;
mod systems;
pub mod ui;


pub use events::{GameOverCause, GameOverEvent, LevelAdvancedEvent, LevelStartedEvent, RunWonEvent};
pub use input::FrameInput;
pub use resources::{ActiveLevel, FrameClock, RunScore};
pub use state::GameState;

use bevy::prelude::*;

use crate::core::input::{clear_input_edges, read_input};
use crate::core::systems::{
    log_run_events, quit_on_request, reset_run, return_to_home, start_from_home,
};

/// Phases of one frame. Everything after `Input` only runs in PLAY; the
/// level plugin further gates `World..=Rules` on the level still running.
#[derive(SystemSet, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SimSet {
    Input,
    Clock,
    World,
    Enemies,
    Player,
    Rules,
    Outcome,
}

pub struct CorePlugin;

impl Plugin for CorePlugin {
    fn build(&self, app: &mut App) {
        app.init_state::<GameState>()
            .init_resource::<FrameInput>()
            .init_resource::<FrameClock>()
            .init_resource::<RunScore>()
            .init_resource::<ActiveLevel>()
            .add_message::<LevelStartedEvent>()
            .add_message::<LevelAdvancedEvent>()
            .add_message::<GameOverEvent>()
            .add_message::<RunWonEvent>()
            .configure_sets(
                Update,
                (
                    SimSet::Input,
                    SimSet::Clock,
                    SimSet::World,
                    SimSet::Enemies,
                    SimSet::Player,
                    SimSet::Rules,
                    SimSet::Outcome,
                )
                    .chain(),
            )
            .configure_sets(Update, SimSet::Clock.run_if(in_state(GameState::Play)))
            .configure_sets(Update, SimSet::World.run_if(in_state(GameState::Play)))
            .configure_sets(Update, SimSet::Enemies.run_if(in_state(GameState::Play)))
            .configure_sets(Update, SimSet::Player.run_if(in_state(GameState::Play)))
            .configure_sets(Update, SimSet::Rules.run_if(in_state(GameState::Play)))
            .configure_sets(Update, SimSet::Outcome.run_if(in_state(GameState::Play)))
            .add_systems(OnEnter(GameState::Home), reset_run)
            .add_systems(Update, read_input.in_set(SimSet::Input))
            .add_systems(
                Update,
                (
                    quit_on_request,
                    start_from_home.run_if(in_state(GameState::Home)),
                    return_to_home
                        .run_if(in_state(GameState::GameOver).or(in_state(GameState::Win))),
                )
                    .after(SimSet::Input)
                    .before(SimSet::Clock),
            )
            .add_systems(Update, log_run_events.after(SimSet::Outcome))
            .add_systems(Last, clear_input_edges);
    }
}
