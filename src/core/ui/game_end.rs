//! Core domain: WIN and GAME_OVER screen UI.

use bevy::prelude::*;

use crate::content::GameSettings;
use crate::core::ui::screen_text;
use crate::core::{GameState, RunScore};

/// Marker for the end-of-run screen UI root
#[derive(Component, Debug)]
pub struct GameEndScreenUI;

pub(crate) fn spawn_game_end_screen(
    mut commands: Commands,
    settings: Res<GameSettings>,
    run_score: Res<RunScore>,
    state: Res<State<GameState>>,
) {
    let won = *state.get() == GameState::Win;
    let bg_color = Color::srgba(0.02, 0.02, 0.06, 0.98);
    let status_color = if won {
        Color::srgb(0.95, 0.85, 0.3)
    } else {
        Color::srgb(0.9, 0.3, 0.3)
    };
    let text_color = Color::srgb(0.9, 0.9, 0.9);
    let muted_text = Color::srgb(0.6, 0.6, 0.7);

    let text = &settings.text;
    let status = if won { &text.won } else { &text.lost };

    commands
        .spawn((
            GameEndScreenUI,
            Node {
                width: Val::Percent(100.0),
                height: Val::Percent(100.0),
                position_type: PositionType::Absolute,
                flex_direction: FlexDirection::Column,
                justify_content: JustifyContent::Center,
                align_items: AlignItems::Center,
                ..default()
            },
            BackgroundColor(bg_color),
            ZIndex(200),
        ))
        .with_children(|parent| {
            parent.spawn(screen_text(status.clone(), 48.0, status_color, 20.0));
            parent.spawn(screen_text(
                format!("{} {}", text.final_score, run_score.cumulative),
                28.0,
                text_color,
                60.0,
            ));
            parent.spawn(screen_text(
                text.continue_prompt.clone(),
                18.0,
                muted_text,
                0.0,
            ));
        });
}

pub(crate) fn cleanup_game_end_screen(
    mut commands: Commands,
    query: Query<Entity, With<GameEndScreenUI>>,
) {
    for entity in query.iter() {
        commands.entity(entity).despawn();
    }
}
