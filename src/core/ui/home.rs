//! Core domain: HOME screen UI.

use bevy::prelude::*;

use crate::content::GameSettings;
use crate::core::ui::screen_text;

/// Marker for HOME screen UI root
#[derive(Component, Debug)]
pub struct HomeScreenUI;

pub(crate) fn spawn_home_screen(mut commands: Commands, settings: Res<GameSettings>) {
    let bg_color = Color::srgb(0.02, 0.02, 0.06);
    let title_color = Color::srgb(0.95, 0.55, 0.2);
    let muted_text = Color::srgb(0.7, 0.7, 0.75);

    commands
        .spawn((
            HomeScreenUI,
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
            parent.spawn(screen_text(
                settings.text.home_title.clone(),
                72.0,
                title_color,
                60.0,
            ));
            parent.spawn(screen_text(
                settings.text.home_prompt.clone(),
                22.0,
                muted_text,
                0.0,
            ));
        });
}

pub(crate) fn cleanup_home_screen(
    mut commands: Commands,
    query: Query<Entity, With<HomeScreenUI>>,
) {
    for entity in query.iter() {
        commands.entity(entity).despawn();
    }
}
