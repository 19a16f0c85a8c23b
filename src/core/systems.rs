//! Core domain: screen flow systems and run bookkeeping.

use bevy::app::AppExit;
use bevy::ecs::message::{MessageReader, MessageWriter};
use bevy::prelude::*;

use crate::content::LevelRegistry;
use crate::core::events::{GameOverEvent, LevelAdvancedEvent, LevelStartedEvent, RunWonEvent};
use crate::core::input::FrameInput;
use crate::core::resources::{ActiveLevel, FrameClock, RunScore};
use crate::core::state::GameState;

/// HOME: confirm starts the first level, the number row jumps to a level directly.
pub(crate) fn start_from_home(
    input: Res<FrameInput>,
    registry: Res<LevelRegistry>,
    mut active: ResMut<ActiveLevel>,
    mut game_state: ResMut<NextState<GameState>>,
) {
    let selected = if input.confirm_pressed {
        Some(0)
    } else {
        input.level_select
    };

    let Some(index) = selected else {
        return;
    };

    if index >= registry.len() {
        warn!(
            "Level {} selected but only {} configured",
            index + 1,
            registry.len()
        );
        return;
    }

    active.index = index;
    game_state.set(GameState::Play);
}

/// GAME_OVER / WIN: reset returns to HOME.
pub(crate) fn return_to_home(
    input: Res<FrameInput>,
    mut game_state: ResMut<NextState<GameState>>,
) {
    if input.reset_pressed {
        game_state.set(GameState::Home);
    }
}

/// Entering HOME discards the previous run.
pub(crate) fn reset_run(mut clock: ResMut<FrameClock>, mut run_score: ResMut<RunScore>) {
    clock.reset();
    run_score.reset();
}

pub(crate) fn quit_on_request(input: Res<FrameInput>, mut exit: MessageWriter<AppExit>) {
    if input.quit_pressed {
        info!("Quit requested");
        exit.write(AppExit::Success);
    }
}

pub(crate) fn log_run_events(
    mut started: MessageReader<LevelStartedEvent>,
    mut advanced: MessageReader<LevelAdvancedEvent>,
    mut game_over: MessageReader<GameOverEvent>,
    mut won: MessageReader<RunWonEvent>,
) {
    for event in started.read() {
        info!("Level {} ('{}') started", event.index + 1, event.level_id);
    }
    for event in advanced.read() {
        info!(
            "Level {} cleared, carrying {} points into level {}",
            event.from + 1,
            event.carried_score,
            event.to + 1
        );
    }
    for event in game_over.read() {
        info!("Game over at frame {}: {:?}", event.frame, event.cause);
    }
    for event in won.read() {
        info!(
            "Run won with {} points ({} time bonus)",
            event.final_score, event.time_bonus
        );
    }
}
