//! Combat domain: weapons, projectiles, patrolling enemies and the collision
//! and scoring rules.

pub(crate) mod ai;
mod components;
mod events;
mod projectiles;
mod resources;
mod rules;
mod systems;


pub use ai::{Monkey, Patrol, PatrolOutcome, standing_platform};
pub use components::{
    Barrel, Boss, Destroyable, Destructible, FiredShots, Health, Loadout, Thrower, WeaponKind,
    WeaponPickup,
};
pub use events::{
    BossHitEvent, DestroyedBy, DestroyedTarget, EnemyDestroyedEvent, JumpScoredEvent,
    WeaponCollectedEvent,
};
pub use projectiles::{Projectile, advance_all};
pub use resources::{EnemyTuning, ProjectileTuning, ScoringTuning};
pub use rules::clears_barrel;

use bevy::prelude::*;

use crate::combat::ai::drive_monkeys;
use crate::combat::rules::{
    award_jump_over, check_boss_defeated, collect_weapons, resolve_banana_contacts,
    resolve_barrel_and_boss_contacts, resolve_bullet_impacts, resolve_monkey_contacts,
    track_jump_over,
};
use crate::combat::systems::{drop_empty_blaster, fire_blaster, log_combat_events};
use crate::core::SimSet;
use crate::movement::PlayerStep;

pub struct CombatPlugin;

impl Plugin for CombatPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<ScoringTuning>()
            .init_resource::<ProjectileTuning>()
            .init_resource::<EnemyTuning>()
            .add_message::<WeaponCollectedEvent>()
            .add_message::<EnemyDestroyedEvent>()
            .add_message::<BossHitEvent>()
            .add_message::<JumpScoredEvent>()
            .add_systems(Update, drive_monkeys.in_set(SimSet::Enemies))
            .add_systems(Update, drop_empty_blaster.in_set(PlayerStep::Arm))
            .add_systems(Update, fire_blaster.in_set(PlayerStep::Weapons))
            .add_systems(
                Update,
                (
                    collect_weapons,
                    resolve_barrel_and_boss_contacts,
                    resolve_monkey_contacts,
                    resolve_banana_contacts,
                    resolve_bullet_impacts,
                    track_jump_over,
                    award_jump_over,
                    check_boss_defeated,
                )
                    .chain()
                    .in_set(SimSet::Rules),
            )
            .add_systems(Update, log_combat_events.after(SimSet::Outcome));
    }
}
