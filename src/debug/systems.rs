//! Debug domain: hotkeys, hitbox outlines and the info overlay.

use bevy::prelude::*;

use crate::combat::{Destructible, FiredShots, Loadout, Thrower, WeaponPickup};
use crate::core::FrameClock;
use crate::debug::state::DebugState;
use crate::debug::ui::{DebugInfoOverlay, describe_player, spawn_debug_info_overlay};
use crate::level::SpriteKind;
use crate::movement::{ContactBox, MovementState, Player};
use crate::physics::{BodySize, Motion, Playfield, Position};
use crate::sprites::{DrawLayer, to_screen};

/// F3 toggles hitbox outlines, F4 the player readout
pub(crate) fn handle_debug_hotkeys(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut debug_state: ResMut<DebugState>,
) {
    if keyboard.just_pressed(KeyCode::F3) {
        let on = debug_state.toggle_hitboxes();
        info!("Hitbox overlay {}", if on { "on" } else { "off" });
    }
    if keyboard.just_pressed(KeyCode::F4) {
        let on = debug_state.toggle_info();
        info!("Debug info {}", if on { "on" } else { "off" });
    }
}

pub(crate) fn draw_hitboxes(
    mut gizmos: Gizmos,
    field: Res<Playfield>,
    bodies: Query<(
        &Position,
        &BodySize,
        Option<&Destructible>,
        Option<&WeaponPickup>,
    ), With<SpriteKind>>,
    player: Query<&ContactBox, With<Player>>,
    shots: Query<&FiredShots>,
    throwers: Query<&Thrower>,
) {
    let solid = Color::srgb(0.2, 1.0, 0.2);
    let inert = Color::srgba(0.5, 0.5, 0.5, 0.5);

    for (position, size, destructible, pickup) in &bodies {
        let gone = destructible.is_some_and(|d| d.destroyed) || pickup.is_some_and(|p| p.collected);
        let center = to_screen(position.0, &field, DrawLayer::Projectile).truncate();
        gizmos.rect_2d(center, size.0, if gone { inert } else { solid });
    }

    for contact in &player {
        let center = to_screen(contact.0.center, &field, DrawLayer::Projectile).truncate();
        gizmos.rect_2d(center, contact.0.size(), Color::srgb(1.0, 0.2, 0.2));
    }

    let projectiles = shots
        .iter()
        .flat_map(FiredShots::active)
        .chain(throwers.iter().flat_map(Thrower::active));
    for projectile in projectiles {
        let center = to_screen(projectile.position, &field, DrawLayer::Projectile).truncate();
        gizmos.rect_2d(center, projectile.size, Color::srgb(1.0, 1.0, 0.2));
    }
}

/// Update the debug info overlay with current player state
pub(crate) fn update_debug_info_overlay(
    mut commands: Commands,
    debug_state: Res<DebugState>,
    clock: Res<FrameClock>,
    player_query: Query<(&Position, &Motion, &MovementState, &Loadout), With<Player>>,
    mut overlay_query: Query<&mut Text, With<DebugInfoOverlay>>,
    existing_overlay: Query<Entity, With<DebugInfoOverlay>>,
) {
    if !debug_state.show_info {
        for entity in &existing_overlay {
            commands.entity(entity).despawn();
        }
        return;
    }

    if existing_overlay.is_empty() {
        spawn_debug_info_overlay(&mut commands);
        return;
    }

    if let (Some((position, motion, state, loadout)), Ok(mut text)) =
        (player_query.iter().next(), overlay_query.single_mut())
    {
        **text = describe_player(clock.frame, position, motion, state, loadout);
    }
}
