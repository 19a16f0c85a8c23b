//! UI domain: score and timer HUD element.

use bevy::prelude::*;

use crate::ui::readout::CurrentReadout;

pub(crate) const HUD_PADDING: f32 = 16.0;

/// Marker for the score/timer HUD container
#[derive(Component)]
pub struct ScorePanelUI;

#[derive(Component)]
pub struct ScoreText;

#[derive(Component)]
pub struct TimeLeftText;

pub(crate) fn spawn_score_panel(mut commands: Commands, mut readout: ResMut<CurrentReadout>) {
    // fresh text entities need the current numbers even if they did not change
    readout.set_changed();

    commands
        .spawn((
            ScorePanelUI,
            Node {
                position_type: PositionType::Absolute,
                left: Val::Px(HUD_PADDING),
                top: Val::Px(HUD_PADDING),
                flex_direction: FlexDirection::Column,
                row_gap: Val::Px(6.0),
                ..default()
            },
        ))
        .with_children(|parent| {
            parent.spawn((
                ScoreText,
                Text::new("SCORE 0"),
                TextFont {
                    font_size: 22.0,
                    ..default()
                },
                TextColor(Color::srgb(0.95, 0.95, 0.95)),
            ));
            parent.spawn((
                TimeLeftText,
                Text::new("TIME LEFT 0"),
                TextFont {
                    font_size: 22.0,
                    ..default()
                },
                TextColor(Color::srgb(0.95, 0.95, 0.95)),
            ));
        });
}

pub(crate) fn update_score_panel(
    readout: Res<CurrentReadout>,
    mut score_text: Query<&mut Text, (With<ScoreText>, Without<TimeLeftText>)>,
    mut time_text: Query<&mut Text, (With<TimeLeftText>, Without<ScoreText>)>,
) {
    if !readout.is_changed() {
        return;
    }
    for mut text in &mut score_text {
        **text = readout.0.score_line();
    }
    for mut text in &mut time_text {
        **text = readout.0.time_line();
    }
}

pub(crate) fn cleanup_score_panel(
    mut commands: Commands,
    query: Query<Entity, With<ScorePanelUI>>,
) {
    for entity in query.iter() {
        commands.entity(entity).despawn();
    }
}
