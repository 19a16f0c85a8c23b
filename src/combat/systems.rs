//! Combat domain: weapon upkeep, blaster fire and combat logging.

use bevy::ecs::message::MessageReader;
use bevy::prelude::*;

use crate::combat::components::{FiredShots, Loadout};
use crate::combat::events::{
    BossHitEvent, EnemyDestroyedEvent, JumpScoredEvent, WeaponCollectedEvent,
};
use crate::combat::projectiles::{Projectile, advance_all};
use crate::combat::resources::ProjectileTuning;
use crate::content::{GameSettings, vec2};
use crate::core::FrameInput;
use crate::movement::{MovementState, Player};
use crate::physics::{Playfield, Position};

/// A blaster with no bullets left is put away before the player moves.
pub(crate) fn drop_empty_blaster(mut query: Query<&mut Loadout, With<Player>>) {
    for mut loadout in &mut query {
        if loadout.weapon.is_some() && loadout.drop_empty_blaster() {
            debug!("Empty blaster dropped");
        }
    }
}

/// Moves bullets already in flight, then fires a new one on request.
pub(crate) fn fire_blaster(
    input: Res<FrameInput>,
    field: Res<Playfield>,
    tuning: Res<ProjectileTuning>,
    settings: Res<GameSettings>,
    mut query: Query<(&Position, &MovementState, &mut Loadout, &mut FiredShots), With<Player>>,
) {
    for (position, state, mut loadout, mut fired) in &mut query {
        advance_all(&mut fired.shots, &field, tuning.max_range);

        if !input.shoot_pressed || !loadout.consume_shot() {
            continue;
        }

        let mut bullet = Projectile::new(
            position.0,
            vec2(settings.sprites.bullet),
            state.facing,
            tuning.bullet_speed,
        );
        bullet.advance(&field, tuning.max_range);
        fired.shots.push(bullet);
        debug!(
            "Bullet fired {:?} from ({:.1}, {:.1}), {} left",
            state.facing, position.0.x, position.0.y, loadout.ammo
        );
    }
}

pub(crate) fn log_combat_events(
    mut collected: MessageReader<WeaponCollectedEvent>,
    mut destroyed: MessageReader<EnemyDestroyedEvent>,
    mut boss_hits: MessageReader<BossHitEvent>,
    mut jumps: MessageReader<JumpScoredEvent>,
) {
    for event in collected.read() {
        info!("Picked up {:?} (ammo {})", event.kind, event.ammo_after);
    }
    for event in destroyed.read() {
        info!(
            "{:?} destroyed by {:?}, +{}",
            event.target, event.by, event.points
        );
    }
    for event in boss_hits.read() {
        info!(
            "Boss hit by {:?}, {} health left",
            event.by, event.remaining_health
        );
    }
    for event in jumps.read() {
        info!("Jumped a barrel, +{}", event.points);
    }
}
