//! Keeps sprites in step with the simulation.

use bevy::prelude::*;

use crate::combat::{Destructible, FiredShots, Loadout, Projectile, Thrower, WeaponPickup};
use crate::level::SpriteKind;
use crate::movement::Player;
use crate::physics::{BodySize, Playfield, Position};
use crate::sprites::layers::{DrawLayer, to_screen};
use crate::sprites::palette::{BANANA_COLOR, BULLET_COLOR, kind_color, player_color};

/// Marker for a pooled quad drawing one live projectile.
#[derive(Component, Debug)]
pub struct ProjectileVisual;

pub(crate) fn spawn_camera(mut commands: Commands) {
    commands.spawn(Camera2d);
}

pub(crate) fn attach_sprites(
    mut commands: Commands,
    field: Res<Playfield>,
    added: Query<(Entity, &SpriteKind, &Position, &BodySize), Added<SpriteKind>>,
) {
    for (entity, kind, position, size) in &added {
        commands.entity(entity).insert((
            Sprite::from_color(kind_color(*kind), size.0),
            Transform::from_translation(to_screen(position.0, &field, DrawLayer::of(*kind))),
            Visibility::default(),
        ));
    }
}

pub(crate) fn sync_sprite_transforms(
    field: Res<Playfield>,
    mut query: Query<(&Position, &SpriteKind, &mut Transform), Changed<Position>>,
) {
    for (position, kind, mut transform) in &mut query {
        transform.translation = to_screen(position.0, &field, DrawLayer::of(*kind));
    }
}

pub(crate) fn sync_player_sprite(
    mut query: Query<(&BodySize, &Loadout, &mut Sprite), With<Player>>,
) {
    for (size, loadout, mut sprite) in &mut query {
        sprite.custom_size = Some(size.0);
        sprite.color = player_color(loadout);
    }
}

/// Destroyed enemies and collected pickups stay in the world but are not drawn.
pub(crate) fn hide_inactive(
    mut query: Query<
        (&mut Visibility, Option<&Destructible>, Option<&WeaponPickup>),
        With<SpriteKind>,
    >,
) {
    for (mut visibility, destructible, pickup) in &mut query {
        let gone = destructible.is_some_and(|d| d.destroyed) || pickup.is_some_and(|p| p.collected);
        let wanted = if gone {
            Visibility::Hidden
        } else {
            Visibility::Inherited
        };
        if *visibility != wanted {
            *visibility = wanted;
        }
    }
}

/// Matches the pool of projectile quads to the live bullets and bananas.
pub(crate) fn draw_projectiles(
    mut commands: Commands,
    field: Res<Playfield>,
    shooters: Query<&FiredShots>,
    throwers: Query<(&Thrower, &Destructible)>,
    mut visuals: Query<(Entity, &mut Transform, &mut Sprite), With<ProjectileVisual>>,
) {
    let bullets = shooters
        .iter()
        .flat_map(FiredShots::active)
        .map(|shot| (shot, BULLET_COLOR));
    let bananas = throwers
        .iter()
        .filter(|(_, destructible)| !destructible.destroyed)
        .flat_map(|(thrower, _)| thrower.active())
        .map(|banana| (banana, BANANA_COLOR));
    let mut live: Vec<(&Projectile, Color)> = bullets.chain(bananas).collect();

    let mut pool = visuals.iter_mut();
    for (projectile, color) in live.drain(..) {
        let translation = to_screen(projectile.position, &field, DrawLayer::Projectile);
        match pool.next() {
            Some((_, mut transform, mut sprite)) => {
                transform.translation = translation;
                sprite.color = color;
                sprite.custom_size = Some(projectile.size);
            }
            None => {
                commands.spawn((
                    ProjectileVisual,
                    Sprite::from_color(color, projectile.size),
                    Transform::from_translation(translation),
                ));
            }
        }
    }

    for (entity, _, _) in pool {
        commands.entity(entity).despawn();
    }
}

pub(crate) fn clear_projectiles(
    mut commands: Commands,
    visuals: Query<Entity, With<ProjectileVisual>>,
) {
    for entity in &visuals {
        commands.entity(entity).despawn();
    }
}
