//! Combat domain: monkey patrol routes and banana throwing.

use bevy::prelude::*;

use crate::combat::components::{Destructible, Thrower};
use crate::combat::projectiles::{Projectile, advance_all};
use crate::combat::resources::{EnemyTuning, ProjectileTuning};
use crate::content::{GameSettings, MonkeyKind, vec2};
use crate::core::FrameClock;
use crate::physics::{
    Aabb, BodySize, Facing, Motion, PlatformLayout, Playfield, Position, SURFACE_TOLERANCE,
    resolve_vertical,
};

#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Monkey {
    pub kind: MonkeyKind,
}

/// Route-following state: which step is being walked, how far into it, and
/// which way the monkey faces.
#[derive(Component, Debug, Clone, PartialEq)]
pub struct Patrol {
    pub route: Vec<f32>,
    pub step: usize,
    pub step_distance: f32,
    pub facing: Facing,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PatrolOutcome {
    Walked,
    /// Reached a screen or platform edge and turned without moving.
    TurnedAtEdge,
    /// Finished a route step and turned after moving.
    FinishedStep,
}

/// First platform (slice order) whose top is within tolerance of the feet and
/// whose span contains `position.x`.
pub fn standing_platform(position: Vec2, size: Vec2, platforms: &[Aabb]) -> Option<&Aabb> {
    let foot = position.y + size.y * 0.5;
    platforms.iter().find(|platform| {
        (foot - platform.top()).abs() <= SURFACE_TOLERANCE && platform.contains_x(position.x)
    })
}

impl Patrol {
    pub fn new(route: Vec<f32>, facing: Facing) -> Self {
        Self {
            route,
            step: 0,
            step_distance: 0.0,
            facing,
        }
    }

    /// One tick of patrol movement.
    pub fn advance(
        &mut self,
        position: &mut Vec2,
        size: Vec2,
        platforms: &[Aabb],
        field: &Playfield,
        speed: f32,
    ) -> PatrolOutcome {
        let stride = self.facing.sign() * speed;
        let next_x = position.x + stride;

        let standing = standing_platform(*position, size, platforms);
        let off_platform = match standing {
            Some(platform) => !platform.contains_x(next_x),
            None => true,
        };

        if standing.is_some() && (!field.contains_x(next_x) || off_platform) {
            self.facing = self.facing.flipped();
            self.step_distance = 0.0;
            return PatrolOutcome::TurnedAtEdge;
        }

        position.x = next_x;
        self.step_distance += stride.abs();

        let Some(&length) = self.route.get(self.step) else {
            return PatrolOutcome::Walked;
        };

        if self.step_distance >= length {
            self.step_distance = 0.0;
            self.step = (self.step + 1) % self.route.len();
            self.facing = self.facing.flipped();
            return PatrolOutcome::FinishedStep;
        }

        PatrolOutcome::Walked
    }
}

/// Gravity, patrol and banana throwing for every standing monkey.
pub(crate) fn drive_monkeys(
    clock: Res<FrameClock>,
    layout: Res<PlatformLayout>,
    field: Res<Playfield>,
    enemy_tuning: Res<EnemyTuning>,
    projectile_tuning: Res<ProjectileTuning>,
    settings: Res<GameSettings>,
    mut monkeys: Query<
        (
            &mut Position,
            &BodySize,
            &mut Motion,
            &mut Patrol,
            &Destructible,
            Option<&mut Thrower>,
        ),
        With<Monkey>,
    >,
) {
    let platforms = layout.as_slice();
    let banana_size = vec2(settings.sprites.banana);
    let max_range = projectile_tuning.max_range;

    for (mut position, size, mut motion, mut patrol, destructible, thrower) in &mut monkeys {
        if destructible.destroyed {
            continue;
        }

        resolve_vertical(&mut motion, &mut position.0, size.0, platforms);
        patrol.advance(
            &mut position.0,
            size.0,
            platforms,
            &field,
            enemy_tuning.patrol_speed,
        );

        let Some(mut thrower) = thrower else {
            continue;
        };

        advance_all(&mut thrower.thrown, &field, max_range);

        if thrower.ready(clock.frame) {
            let mut banana = Projectile::new(
                position.0,
                banana_size,
                patrol.facing,
                projectile_tuning.banana_speed,
            );
            banana.advance(&field, max_range);
            thrower.thrown.push(banana);
            thrower.last_throw_frame = clock.frame;
            debug!(
                "Banana thrown {:?} from ({:.1}, {:.1}) at frame {}",
                patrol.facing, position.0.x, position.0.y, clock.frame
            );
        }
    }
}
