//! Core domain: screen states for the game flow.

use bevy::prelude::*;

/// Screen-level state machine: HOME, PLAY and the two terminal screens.
#[derive(States, Debug, Hash, Eq, PartialEq, Clone, Copy, Default)]
pub enum GameState {
    #[default]
    Home,
    Play,
    GameOver,
    Win,
}

impl GameState {
    pub fn is_end_screen(self) -> bool {
        matches!(self, GameState::GameOver | GameState::Win)
    }
}
