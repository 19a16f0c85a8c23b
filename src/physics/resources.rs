//! Physics domain: level geometry and per-kind gravity tuning.

use bevy::prelude::*;

use crate::physics::{Aabb, Motion};

/// Platform boxes of the active level, in the order they were configured.
#[derive(Resource, Debug, Default, Clone)]
pub struct PlatformLayout {
    pub platforms: Vec<Aabb>,
}

impl PlatformLayout {
    pub fn new(platforms: Vec<Aabb>) -> Self {
        Self { platforms }
    }

    pub fn as_slice(&self) -> &[Aabb] {
        &self.platforms
    }

    pub fn clear(&mut self) {
        self.platforms.clear();
    }
}

/// Visible play-field. Walkers and projectiles are bounded to `[0, width]`.
#[derive(Resource, Debug, Clone, Copy, PartialEq)]
pub struct Playfield {
    pub width: f32,
    pub height: f32,
}

impl Default for Playfield {
    fn default() -> Self {
        Self {
            width: 1024.0,
            height: 768.0,
        }
    }
}

impl Playfield {
    pub fn contains_x(&self, x: f32) -> bool {
        (0.0..=self.width).contains(&x)
    }

    pub fn clamp_x(&self, x: f32) -> f32 {
        x.clamp(0.0, self.width)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GravityProfile {
    pub gravity: f32,
    pub terminal_velocity: f32,
}

impl GravityProfile {
    pub fn motion(&self) -> Motion {
        Motion::new(self.gravity, self.terminal_velocity)
    }
}

#[derive(Resource, Debug, Clone)]
pub struct GravityProfiles {
    pub player: GravityProfile,
    pub barrel: GravityProfile,
    /// Boss and patrolling monkeys.
    pub enemy: GravityProfile,
    pub ladder: GravityProfile,
}

impl Default for GravityProfiles {
    fn default() -> Self {
        Self {
            player: GravityProfile {
                gravity: 0.2,
                terminal_velocity: 10.0,
            },
            barrel: GravityProfile {
                gravity: 0.4,
                terminal_velocity: 5.0,
            },
            enemy: GravityProfile {
                gravity: 0.4,
                terminal_velocity: 5.0,
            },
            ladder: GravityProfile {
                gravity: 0.25,
                terminal_velocity: 5.0,
            },
        }
    }
}
