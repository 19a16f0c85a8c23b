//! Combat domain: the per-tick collision and scoring rules.
//!
//! Rules run in a fixed order against the player's contact box. A fatal
//! contact ends the rule it was found in; the remaining rules still run but
//! the level outcome only keeps the first cause.

use bevy::ecs::message::MessageWriter;
use bevy::prelude::*;

use crate::combat::ai::Monkey;
use crate::combat::components::{
    Barrel, Boss, Destroyable, Destructible, FiredShots, Health, Loadout, Thrower, WeaponPickup,
};
use crate::combat::events::{
    BossHitEvent, DestroyedBy, DestroyedTarget, EnemyDestroyedEvent, JumpScoredEvent,
    WeaponCollectedEvent,
};
use crate::combat::resources::ScoringTuning;
use crate::core::GameOverCause;
use crate::level::LevelStatus;
use crate::movement::{ContactBox, MovementState, Player};
use crate::physics::{
    Aabb, BodySize, Motion, PlatformLayout, Position, SpawnOrder, in_spawn_order,
};

/// Whether a player box counts as clearing `barrel` mid-jump.
///
/// The player must be horizontally within `threshold` of the barrel centre,
/// with their feet below the lowest-hanging platform above the barrel and
/// their head at or above the barrel top.
pub fn clears_barrel(player: &Aabb, barrel: &Aabb, platforms: &[Aabb], threshold: f32) -> bool {
    if (player.center.x - barrel.center.x).abs() >= threshold {
        return false;
    }

    let barrel_top = barrel.top();
    let ceiling = platforms
        .iter()
        .filter(|platform| platform.contains_x(barrel.center.x) && platform.bottom() <= barrel_top)
        .map(Aabb::bottom)
        .fold(0.0, f32::max);

    player.bottom() >= ceiling && player.top() <= barrel_top
}

/// Uncollected pickups touching the player are equipped in spawn order.
pub(crate) fn collect_weapons(
    mut player: Query<(&ContactBox, &mut Loadout), With<Player>>,
    mut pickups: Query<(Entity, &Position, &BodySize, &SpawnOrder, &mut WeaponPickup)>,
    mut collected: MessageWriter<WeaponCollectedEvent>,
) {
    let Ok((contact, mut loadout)) = player.single_mut() else {
        return;
    };

    let ordered = in_spawn_order(
        pickups
            .iter_mut()
            .map(|(entity, position, size, order, pickup)| {
                (*order, (entity, position.aabb(size), pickup))
            })
            .collect(),
    );

    for (entity, bounds, mut pickup) in ordered {
        if pickup.collected || !contact.0.intersects(&bounds) {
            continue;
        }
        loadout.equip(&pickup);
        pickup.collected = true;
        collected.write(WeaponCollectedEvent {
            pickup: entity,
            kind: pickup.kind,
            ammo_after: loadout.ammo,
        });
    }
}

/// Barrels first, then the boss. A hammer destroys what it touches; touching
/// either unarmed ends the run.
pub(crate) fn resolve_barrel_and_boss_contacts(
    scoring: Res<ScoringTuning>,
    mut status: ResMut<LevelStatus>,
    player: Query<(&ContactBox, &Loadout), With<Player>>,
    mut barrels: Query<
        (Entity, &Position, &BodySize, &SpawnOrder, &mut Destructible),
        (With<Barrel>, Without<Boss>),
    >,
    mut boss: Query<
        (Entity, &Position, &BodySize, &mut Health, &mut Destructible),
        (With<Boss>, Without<Barrel>),
    >,
    mut destroyed: MessageWriter<EnemyDestroyedEvent>,
    mut boss_hits: MessageWriter<BossHitEvent>,
) {
    let Ok((contact, loadout)) = player.single() else {
        return;
    };
    let armed = loadout.has_hammer();

    let ordered = in_spawn_order(
        barrels
            .iter_mut()
            .map(|(entity, position, size, order, destructible)| {
                (*order, (entity, position.aabb(size), destructible))
            })
            .collect(),
    );

    for (entity, bounds, mut destructible) in ordered {
        if destructible.is_destroyed() || !contact.0.intersects(&bounds) {
            continue;
        }
        if !armed {
            status.fail(GameOverCause::Barrel);
            return;
        }
        destructible.destroy();
        status.award(scoring.barrel_destroyed);
        destroyed.write(EnemyDestroyedEvent {
            entity,
            target: DestroyedTarget::Barrel,
            by: DestroyedBy::Hammer,
            points: scoring.barrel_destroyed,
        });
    }

    let Ok((entity, position, size, mut health, mut destructible)) = boss.single_mut() else {
        return;
    };
    if destructible.is_destroyed() || !contact.0.intersects(&position.aabb(size)) {
        return;
    }
    if !armed {
        status.fail(GameOverCause::Boss);
        return;
    }
    health.deplete();
    destructible.destroy();
    status.complete();
    boss_hits.write(BossHitEvent {
        boss: entity,
        remaining_health: health.current,
        by: DestroyedBy::Hammer,
    });
}

pub(crate) fn resolve_monkey_contacts(
    scoring: Res<ScoringTuning>,
    mut status: ResMut<LevelStatus>,
    player: Query<(&ContactBox, &Loadout), With<Player>>,
    mut monkeys: Query<(Entity, &Position, &BodySize, &SpawnOrder, &mut Destructible), With<Monkey>>,
    mut destroyed: MessageWriter<EnemyDestroyedEvent>,
) {
    let Ok((contact, loadout)) = player.single() else {
        return;
    };
    let armed = loadout.has_hammer();

    let ordered = in_spawn_order(
        monkeys
            .iter_mut()
            .map(|(entity, position, size, order, destructible)| {
                (*order, (entity, position.aabb(size), destructible))
            })
            .collect(),
    );

    for (entity, bounds, mut destructible) in ordered {
        if destructible.is_destroyed() || !contact.0.intersects(&bounds) {
            continue;
        }
        if !armed {
            status.fail(GameOverCause::Monkey);
            return;
        }
        destructible.destroy();
        status.award(scoring.monkey_destroyed);
        destroyed.write(EnemyDestroyedEvent {
            entity,
            target: DestroyedTarget::Monkey,
            by: DestroyedBy::Hammer,
            points: scoring.monkey_destroyed,
        });
    }
}

/// Any live banana touching the player ends the run. Bananas of a destroyed
/// thrower are inert.
pub(crate) fn resolve_banana_contacts(
    mut status: ResMut<LevelStatus>,
    player: Query<&ContactBox, With<Player>>,
    throwers: Query<(&Thrower, &Destructible)>,
) {
    let Ok(contact) = player.single() else {
        return;
    };

    let hit = throwers
        .iter()
        .filter(|(_, destructible)| !destructible.is_destroyed())
        .flat_map(|(thrower, _)| thrower.active())
        .any(|banana| contact.0.intersects(&banana.aabb()));

    if hit {
        status.fail(GameOverCause::Banana);
    }
}

/// Each live bullet stops at the first thing it meets: a platform, then a
/// monkey (spawn order), then the boss.
pub(crate) fn resolve_bullet_impacts(
    scoring: Res<ScoringTuning>,
    layout: Res<PlatformLayout>,
    mut status: ResMut<LevelStatus>,
    mut player: Query<&mut FiredShots, With<Player>>,
    mut monkeys: Query<
        (Entity, &Position, &BodySize, &SpawnOrder, &mut Destructible),
        (With<Monkey>, Without<Boss>),
    >,
    mut boss: Query<
        (Entity, &Position, &BodySize, &mut Health, &mut Destructible),
        (With<Boss>, Without<Monkey>),
    >,
    mut destroyed: MessageWriter<EnemyDestroyedEvent>,
    mut boss_hits: MessageWriter<BossHitEvent>,
) {
    let Ok(mut fired) = player.single_mut() else {
        return;
    };
    if fired.active().next().is_none() {
        return;
    }

    let mut ordered = in_spawn_order(
        monkeys
            .iter_mut()
            .map(|(entity, position, size, order, destructible)| {
                (*order, (entity, position.aabb(size), destructible))
            })
            .collect(),
    );
    let mut boss = boss.single_mut().ok();

    for shot in fired.shots.iter_mut().filter(|shot| shot.active) {
        let bounds = shot.aabb();

        if layout.as_slice().iter().any(|platform| platform.intersects(&bounds)) {
            shot.deactivate();
            continue;
        }

        let struck = ordered.iter_mut().find(|(_, monkey, destructible)| {
            !destructible.is_destroyed() && monkey.intersects(&bounds)
        });
        if let Some((entity, _, destructible)) = struck {
            destructible.destroy();
            shot.deactivate();
            status.award(scoring.monkey_destroyed);
            destroyed.write(EnemyDestroyedEvent {
                entity: *entity,
                target: DestroyedTarget::Monkey,
                by: DestroyedBy::Bullet,
                points: scoring.monkey_destroyed,
            });
            continue;
        }

        let Some((entity, position, size, health, destructible)) = boss.as_mut() else {
            continue;
        };
        if destructible.is_destroyed() || !position.aabb(size).intersects(&bounds) {
            continue;
        }
        if health.take_hit() {
            destructible.destroy();
        }
        shot.deactivate();
        boss_hits.write(BossHitEvent {
            boss: *entity,
            remaining_health: health.current,
            by: DestroyedBy::Bullet,
        });
    }
}

/// Flags a jump as scoring once the falling player clears a barrel.
pub(crate) fn track_jump_over(
    scoring: Res<ScoringTuning>,
    layout: Res<PlatformLayout>,
    mut player: Query<(&ContactBox, &Motion, &mut MovementState), With<Player>>,
    barrels: Query<(&Position, &BodySize, &Destructible), With<Barrel>>,
) {
    let Ok((contact, motion, mut state)) = player.single_mut() else {
        return;
    };
    if state.on_ground || motion.velocity_y < 0.0 || state.scored_this_jump {
        return;
    }

    let cleared = barrels
        .iter()
        .filter(|(_, _, destructible)| !destructible.is_destroyed())
        .any(|(position, size, _)| {
            clears_barrel(
                &contact.0,
                &position.aabb(size),
                layout.as_slice(),
                scoring.jump_over_threshold,
            )
        });

    if cleared {
        state.scored_this_jump = true;
    }
}

/// Pays out a flagged jump once the player is back on the ground.
pub(crate) fn award_jump_over(
    scoring: Res<ScoringTuning>,
    mut status: ResMut<LevelStatus>,
    mut player: Query<&mut MovementState, With<Player>>,
    mut scored: MessageWriter<JumpScoredEvent>,
) {
    let Ok(mut state) = player.single_mut() else {
        return;
    };
    if !state.on_ground || !state.scored_this_jump {
        return;
    }
    state.scored_this_jump = false;
    status.award(scoring.jump_over);
    scored.write(JumpScoredEvent {
        points: scoring.jump_over,
    });
}

pub(crate) fn check_boss_defeated(
    mut status: ResMut<LevelStatus>,
    boss: Query<&Destructible, With<Boss>>,
) {
    if boss.iter().any(Destroyable::is_destroyed) && !status.completed {
        info!("Boss defeated, level {} complete", status.index + 1);
        status.complete();
    }
}
