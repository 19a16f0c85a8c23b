//! Core domain: full-screen HOME and end-of-run screens.

mod game_end;
mod home;

pub use game_end::GameEndScreenUI;
pub use home::HomeScreenUI;

use bevy::prelude::*;

use crate::core::GameState;
use crate::core::ui::game_end::{cleanup_game_end_screen, spawn_game_end_screen};
use crate::core::ui::home::{cleanup_home_screen, spawn_home_screen};

pub struct ScreensPlugin;

impl Plugin for ScreensPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(OnEnter(GameState::Home), spawn_home_screen)
            .add_systems(OnExit(GameState::Home), cleanup_home_screen)
            .add_systems(OnEnter(GameState::Win), spawn_game_end_screen)
            .add_systems(OnExit(GameState::Win), cleanup_game_end_screen)
            .add_systems(OnEnter(GameState::GameOver), spawn_game_end_screen)
            .add_systems(OnExit(GameState::GameOver), cleanup_game_end_screen);
    }
}

pub(crate) fn screen_text(text: impl Into<String>, size: f32, color: Color, gap: f32) -> impl Bundle {
    (
        Text::new(text),
        TextFont {
            font_size: size,
            ..default()
        },
        TextColor(color),
        Node {
            margin: UiRect::bottom(Val::Px(gap)),
            ..default()
        },
    )
}
