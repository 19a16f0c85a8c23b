//! Debug domain: info overlay layout.

use bevy::prelude::*;

use crate::combat::Loadout;
use crate::movement::MovementState;
use crate::physics::{Motion, Position};

/// Marker for debug info overlay (position, velocity, ladder state)
#[derive(Component, Debug)]
pub struct DebugInfoOverlay;

pub(crate) fn spawn_debug_info_overlay(commands: &mut Commands) {
    commands.spawn((
        DebugInfoOverlay,
        Text::new("Loading..."),
        TextFont {
            font_size: 12.0,
            ..default()
        },
        TextColor(Color::srgb(0.8, 0.9, 0.8)),
        Node {
            position_type: PositionType::Absolute,
            left: Val::Px(20.0),
            bottom: Val::Px(20.0),
            padding: UiRect::all(Val::Px(8.0)),
            ..default()
        },
        BackgroundColor(Color::srgba(0.0, 0.0, 0.0, 0.7)),
        ZIndex(500),
    ));
}

pub fn describe_player(
    frame: u32,
    position: &Position,
    motion: &Motion,
    state: &MovementState,
    loadout: &Loadout,
) -> String {
    format!(
        "Frame: {}\nPos: ({:.1}, {:.1})\nVy: {:.2}\nGround: {} Climbing: {}\nFacing: {:?}\nWeapon: {:?} ({} ammo)",
        frame,
        position.0.x,
        position.0.y,
        motion.velocity_y,
        state.on_ground,
        state.climbing,
        state.facing,
        loadout.weapon,
        loadout.ammo
    )
}
