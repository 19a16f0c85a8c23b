//! Combat domain: components and combat-related state types.

use bevy::prelude::*;

use crate::combat::projectiles::Projectile;

/// Something that can be destroyed once and stays destroyed.
pub trait Destroyable {
    fn is_destroyed(&self) -> bool;
    fn destroy(&mut self);
}

/// Destroyed flag for barrels, monkeys and the boss. Destroyed entities are
/// skipped by physics, collision and rendering but are never despawned mid-level.
#[derive(Component, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Destructible {
    pub destroyed: bool,
}

impl Destroyable for Destructible {
    fn is_destroyed(&self) -> bool {
        self.destroyed
    }

    fn destroy(&mut self) {
        self.destroyed = true;
    }
}

/// Static obstacle the player must smash or jump over.
#[derive(Component, Debug)]
pub struct Barrel;

/// The goal character. Reaching zero health wins the level.
#[derive(Component, Debug)]
pub struct Boss;

/// Health component for the boss
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Health {
    pub current: u32,
    pub max: u32,
}

impl Health {
    pub fn new(max: u32) -> Self {
        Self { current: max, max }
    }

    /// Removes one point. Returns true if this hit emptied the bar.
    pub fn take_hit(&mut self) -> bool {
        let was_alive = self.current > 0;
        self.current = self.current.saturating_sub(1);
        was_alive && self.current == 0
    }

    /// Melee contact bypasses incremental damage.
    pub fn deplete(&mut self) {
        self.current = 0;
    }

    pub fn is_depleted(&self) -> bool {
        self.current == 0
    }

    pub fn fraction(&self) -> f32 {
        if self.max == 0 {
            return 0.0;
        }
        self.current as f32 / self.max as f32
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WeaponKind {
    /// Melee: destroys whatever it touches.
    Hammer,
    /// Ranged: fires bullets while ammo lasts.
    Blaster,
}

/// Weapon lying in the level waiting to be collected.
#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub struct WeaponPickup {
    pub kind: WeaponKind,
    pub collected: bool,
    /// Bullets granted on pickup (0 for melee weapons).
    pub ammo_grant: u32,
}

impl WeaponPickup {
    pub fn hammer() -> Self {
        Self {
            kind: WeaponKind::Hammer,
            collected: false,
            ammo_grant: 0,
        }
    }

    pub fn blaster(ammo_grant: u32) -> Self {
        Self {
            kind: WeaponKind::Blaster,
            collected: false,
            ammo_grant,
        }
    }
}

/// What the player is holding and how many bullets are left.
#[derive(Component, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Loadout {
    pub weapon: Option<WeaponKind>,
    pub ammo: u32,
}

impl Loadout {
    /// Applies a pickup. Another blaster while holding one tops up ammo,
    /// anything else replaces the current weapon.
    pub fn equip(&mut self, pickup: &WeaponPickup) {
        match pickup.kind {
            WeaponKind::Blaster if self.weapon == Some(WeaponKind::Blaster) => {
                self.ammo += pickup.ammo_grant;
            }
            WeaponKind::Blaster => {
                self.weapon = Some(WeaponKind::Blaster);
                self.ammo = pickup.ammo_grant;
            }
            WeaponKind::Hammer => {
                self.weapon = Some(WeaponKind::Hammer);
                self.ammo = 0;
            }
        }
    }

    pub fn has_hammer(&self) -> bool {
        self.weapon == Some(WeaponKind::Hammer)
    }

    pub fn can_fire(&self) -> bool {
        self.weapon == Some(WeaponKind::Blaster) && self.ammo > 0
    }

    /// Spends one bullet. Returns false if nothing could be fired.
    pub fn consume_shot(&mut self) -> bool {
        if !self.can_fire() {
            return false;
        }
        self.ammo -= 1;
        true
    }

    /// An empty blaster is dropped. Returns true if the weapon was removed.
    pub fn drop_empty_blaster(&mut self) -> bool {
        if self.weapon == Some(WeaponKind::Blaster) && self.ammo == 0 {
            self.weapon = None;
            return true;
        }
        false
    }
}

/// Bullets the player has fired this level, in firing order.
#[derive(Component, Debug, Clone, Default)]
pub struct FiredShots {
    pub shots: Vec<Projectile>,
}

impl FiredShots {
    pub fn active(&self) -> impl Iterator<Item = &Projectile> {
        self.shots.iter().filter(|shot| shot.active)
    }
}

/// Throws a banana every `interval` frames, counted from the last throw.
#[derive(Component, Debug, Clone, Default)]
pub struct Thrower {
    pub last_throw_frame: u32,
    pub interval: u32,
    pub thrown: Vec<Projectile>,
}

impl Thrower {
    pub fn new(interval: u32) -> Self {
        Self {
            last_throw_frame: 0,
            interval,
            thrown: Vec::new(),
        }
    }

    pub fn ready(&self, frame: u32) -> bool {
        frame.saturating_sub(self.last_throw_frame) >= self.interval
    }

    pub fn active(&self) -> impl Iterator<Item = &Projectile> {
        self.thrown.iter().filter(|banana| banana.active)
    }
}
