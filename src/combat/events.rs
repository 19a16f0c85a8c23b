//! Combat domain: combat-related events.

use bevy::ecs::message::Message;
use bevy::prelude::*;

use crate::combat::components::WeaponKind;

/// Event emitted when the player picks up a weapon
#[derive(Debug)]
pub struct WeaponCollectedEvent {
    pub pickup: Entity,
    pub kind: WeaponKind,
    pub ammo_after: u32,
}

impl Message for WeaponCollectedEvent {}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DestroyedTarget {
    Barrel,
    Monkey,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DestroyedBy {
    Hammer,
    Bullet,
}

/// Event emitted when a barrel or monkey is destroyed
#[derive(Debug)]
pub struct EnemyDestroyedEvent {
    pub entity: Entity,
    pub target: DestroyedTarget,
    pub by: DestroyedBy,
    pub points: u32,
}

impl Message for EnemyDestroyedEvent {}

/// Event emitted whenever the boss loses health
#[derive(Debug)]
pub struct BossHitEvent {
    pub boss: Entity,
    pub remaining_health: u32,
    pub by: DestroyedBy,
}

impl Message for BossHitEvent {}

/// Event emitted when a jump over a barrel is paid out on landing
#[derive(Debug)]
pub struct JumpScoredEvent {
    pub points: u32,
}

impl Message for JumpScoredEvent {}
