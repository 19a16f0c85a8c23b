//! UI domain: boss health and bullet count HUD element.

use bevy::prelude::*;

use crate::combat::{Boss, Health};
use crate::ui::hud_score::HUD_PADDING;
use crate::ui::readout::CurrentReadout;

const BOSS_HEALTHBAR_WIDTH: f32 = 160.0;
const BOSS_HEALTHBAR_HEIGHT: f32 = 10.0;

/// Marker for the right-hand HUD container
#[derive(Component)]
pub struct BossPanelUI;

#[derive(Component)]
pub struct BossHealthText;

#[derive(Component)]
pub struct BossHealthBarFill;

#[derive(Component)]
pub struct BulletText;

pub(crate) fn spawn_boss_panel(mut commands: Commands) {
    let text_color = Color::srgb(0.95, 0.95, 0.95);

    commands
        .spawn((
            BossPanelUI,
            Node {
                position_type: PositionType::Absolute,
                right: Val::Px(HUD_PADDING),
                top: Val::Px(HUD_PADDING),
                flex_direction: FlexDirection::Column,
                align_items: AlignItems::FlexEnd,
                row_gap: Val::Px(6.0),
                ..default()
            },
        ))
        .with_children(|parent| {
            parent.spawn((
                BossHealthText,
                Text::new("BOSS HEALTH"),
                TextFont {
                    font_size: 22.0,
                    ..default()
                },
                TextColor(text_color),
            ));

            parent
                .spawn((
                    Node {
                        width: Val::Px(BOSS_HEALTHBAR_WIDTH),
                        height: Val::Px(BOSS_HEALTHBAR_HEIGHT),
                        border: UiRect::all(Val::Px(1.0)),
                        ..default()
                    },
                    BackgroundColor(Color::srgba(0.05, 0.05, 0.05, 0.9)),
                    BorderColor::all(Color::srgb(0.6, 0.1, 0.1)),
                ))
                .with_children(|bar| {
                    bar.spawn((
                        BossHealthBarFill,
                        Node {
                            width: Val::Percent(100.0),
                            height: Val::Percent(100.0),
                            ..default()
                        },
                        BackgroundColor(Color::srgb(0.8, 0.1, 0.1)),
                    ));
                });

            parent.spawn((
                BulletText,
                Text::new(""),
                TextFont {
                    font_size: 22.0,
                    ..default()
                },
                TextColor(text_color),
                Visibility::Hidden,
            ));
        });
}

pub(crate) fn update_boss_panel(
    readout: Res<CurrentReadout>,
    boss: Query<&Health, With<Boss>>,
    mut health_text: Query<&mut Text, (With<BossHealthText>, Without<BulletText>)>,
    mut bullet_text: Query<(&mut Text, &mut Visibility), (With<BulletText>, Without<BossHealthText>)>,
    mut fill: Query<&mut Node, With<BossHealthBarFill>>,
) {
    if !readout.is_changed() {
        return;
    }

    for mut text in &mut health_text {
        **text = readout.0.boss_line();
    }

    let fraction = boss.iter().next().map_or(0.0, Health::fraction);
    for mut node in &mut fill {
        node.width = Val::Percent(fraction * 100.0);
    }

    let bullets = readout.0.bullet_line();
    for (mut text, mut visibility) in &mut bullet_text {
        match &bullets {
            Some(line) => {
                **text = line.clone();
                *visibility = Visibility::Inherited;
            }
            None => *visibility = Visibility::Hidden,
        }
    }
}

pub(crate) fn cleanup_boss_panel(mut commands: Commands, query: Query<Entity, With<BossPanelUI>>) {
    for entity in query.iter() {
        commands.entity(entity).despawn();
    }
}
