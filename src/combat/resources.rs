//! Combat domain: scoring and weapon tuning resources.

use bevy::prelude::*;

/// Points awarded by the collision rules.
#[derive(Resource, Debug, Clone)]
pub struct ScoringTuning {
    pub barrel_destroyed: u32,
    pub monkey_destroyed: u32,
    pub jump_over: u32,
    /// Player x must be strictly closer than this to a barrel's centre to
    /// count as jumping over it.
    pub jump_over_threshold: f32,
    pub time_bonus_multiplier: u32,
}

impl Default for ScoringTuning {
    fn default() -> Self {
        Self {
            barrel_destroyed: 100,
            monkey_destroyed: 100,
            jump_over: 30,
            jump_over_threshold: 30.0,
            time_bonus_multiplier: 3,
        }
    }
}

#[derive(Resource, Debug, Clone)]
pub struct ProjectileTuning {
    pub max_range: f32,
    pub bullet_speed: f32,
    pub banana_speed: f32,
    pub blaster_ammo: u32,
    /// Frames between banana throws.
    pub throw_interval: u32,
}

impl Default for ProjectileTuning {
    fn default() -> Self {
        Self {
            max_range: 300.0,
            bullet_speed: 3.8,
            banana_speed: 1.8,
            blaster_ammo: 5,
            throw_interval: 300,
        }
    }
}

#[derive(Resource, Debug, Clone)]
pub struct EnemyTuning {
    /// Monkey walking speed per frame.
    pub patrol_speed: f32,
    pub boss_health: u32,
}

impl Default for EnemyTuning {
    fn default() -> Self {
        Self {
            patrol_speed: 0.5,
            boss_health: 5,
        }
    }
}
