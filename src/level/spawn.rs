//! Level domain: spawning every entity of a level definition.

use bevy::prelude::*;

use crate::combat::{
    Barrel, Boss, Destructible, EnemyTuning, FiredShots, Health, Loadout, Monkey, Patrol,
    ProjectileTuning, Thrower, WeaponPickup,
};
use crate::content::{Coord, GameSettings, LevelDef, MonkeyKind, vec2};
use crate::level::{Ladder, LevelEntity, Platform, SpriteKind};
use crate::movement::{ContactBox, MovementState, Player};
use crate::physics::{
    Aabb, BodySize, GravityProfiles, PlatformLayout, Position, SpawnOrder, settle_on_platform,
};

/// Tuning resources that shape freshly spawned entities.
pub struct SpawnTuning<'a> {
    pub settings: &'a GameSettings,
    pub gravity: &'a GravityProfiles,
    pub enemy: &'a EnemyTuning,
    pub projectile: &'a ProjectileTuning,
}

/// Hands out spawn orders in definition order.
#[derive(Default)]
struct OrderCounter(u32);

impl OrderCounter {
    fn next(&mut self) -> SpawnOrder {
        let order = SpawnOrder(self.0);
        self.0 += 1;
        order
    }
}

/// Position for an entity defined at `coord`, snapped onto a platform top when
/// its feet are within tolerance of one.
fn placed(coord: Coord, size: Vec2, platforms: &[Aabb]) -> Position {
    let mut position = vec2(coord);
    settle_on_platform(&mut position, size, platforms);
    Position(position)
}

/// Spawns the whole level and returns the platform boxes it was built on.
pub(crate) fn spawn_level(
    commands: &mut Commands,
    level: &LevelDef,
    tuning: &SpawnTuning,
) -> PlatformLayout {
    let sizes = &tuning.settings.sprites;
    let gravity = tuning.gravity;
    let mut order = OrderCounter::default();

    let platform_size = vec2(sizes.platform);
    let platforms: Vec<Aabb> = level
        .platforms
        .iter()
        .map(|&coord| Aabb::from_center_size(vec2(coord), platform_size))
        .collect();

    for platform in &platforms {
        commands.spawn((
            LevelEntity,
            Platform,
            SpriteKind::Platform,
            Position(platform.center),
            BodySize(platform_size),
            order.next(),
        ));
    }

    let ladder_size = vec2(sizes.ladder);
    for &coord in &level.ladders {
        commands.spawn((
            LevelEntity,
            Ladder,
            SpriteKind::Ladder,
            placed(coord, ladder_size, &platforms),
            BodySize(ladder_size),
            gravity.ladder.motion(),
            order.next(),
        ));
    }

    let barrel_size = vec2(sizes.barrel);
    for &coord in &level.barrels {
        commands.spawn((
            LevelEntity,
            Barrel,
            Destructible::default(),
            SpriteKind::Barrel,
            placed(coord, barrel_size, &platforms),
            BodySize(barrel_size),
            gravity.barrel.motion(),
            order.next(),
        ));
    }

    let hammer_size = vec2(sizes.hammer);
    for &coord in &level.hammers {
        commands.spawn((
            LevelEntity,
            WeaponPickup::hammer(),
            SpriteKind::Hammer,
            placed(coord, hammer_size, &platforms),
            BodySize(hammer_size),
            order.next(),
        ));
    }

    let blaster_size = vec2(sizes.blaster);
    for &coord in &level.blasters {
        commands.spawn((
            LevelEntity,
            WeaponPickup::blaster(tuning.projectile.blaster_ammo),
            SpriteKind::Blaster,
            placed(coord, blaster_size, &platforms),
            BodySize(blaster_size),
            order.next(),
        ));
    }

    let boss_size = vec2(sizes.boss);
    commands.spawn((
        LevelEntity,
        Boss,
        Health::new(tuning.enemy.boss_health),
        Destructible::default(),
        SpriteKind::Boss,
        placed(level.boss, boss_size, &platforms),
        BodySize(boss_size),
        gravity.enemy.motion(),
        order.next(),
    ));

    for monkey in &level.monkeys {
        let (size, sprite) = match monkey.kind {
            MonkeyKind::Normal => (vec2(sizes.monkey), SpriteKind::Monkey),
            MonkeyKind::Smart => (vec2(sizes.smart_monkey), SpriteKind::SmartMonkey),
        };
        let mut entity = commands.spawn((
            LevelEntity,
            Monkey { kind: monkey.kind },
            Patrol::new(monkey.route.clone(), monkey.facing),
            Destructible::default(),
            sprite,
            placed(monkey.position, size, &platforms),
            BodySize(size),
            gravity.enemy.motion(),
            order.next(),
        ));
        if monkey.kind == MonkeyKind::Smart {
            entity.insert(Thrower::new(tuning.projectile.throw_interval));
        }
    }

    let player_size = vec2(sizes.player.unarmed);
    let player_position = placed(level.player, player_size, &platforms);
    commands.spawn((
        LevelEntity,
        Player,
        MovementState::default(),
        Loadout::default(),
        FiredShots::default(),
        ContactBox(Aabb::from_center_size(player_position.0, player_size)),
        SpriteKind::Player,
        player_position,
        BodySize(player_size),
        gravity.player.motion(),
        order.next(),
    ));

    info!(
        "Spawned level '{}' ({}): {} platforms, {} ladders, {} barrels, {} monkeys",
        level.id,
        level.name,
        platforms.len(),
        level.ladders.len(),
        level.barrels.len(),
        level.monkeys.len()
    );

    PlatformLayout::new(platforms)
}
