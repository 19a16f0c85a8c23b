//! Movement domain: walking, jumping and falling for the player.

use bevy::prelude::*;

use crate::combat::Loadout;
use crate::content::GameSettings;
use crate::core::FrameInput;
use crate::movement::{ContactBox, MovementState, MovementTuning, Player, player_size};
use crate::physics::{
    Aabb, BodySize, Facing, Motion, PlatformLayout, Playfield, Position, resolve_vertical,
};

/// Left wins when both arrows are held. Any horizontal step lets go of a ladder.
pub fn walk(position: &mut Vec2, state: &mut MovementState, input: &FrameInput, speed: f32) {
    let facing = if input.left {
        Facing::Left
    } else if input.right {
        Facing::Right
    } else {
        return;
    };

    position.x += facing.sign() * speed;
    state.facing = facing;
    state.climbing = false;
}

/// Starts a jump from solid ground. Returns true if the jump happened.
pub fn try_jump(
    state: &mut MovementState,
    motion: &mut Motion,
    input: &FrameInput,
    jump_velocity: f32,
) -> bool {
    if !input.jump_pressed || !state.on_ground || state.climbing {
        return false;
    }
    motion.velocity_y = jump_velocity;
    state.on_ground = false;
    true
}

/// Gravity step for a player that is not on a ladder.
pub fn fall(
    position: &mut Vec2,
    size: Vec2,
    state: &mut MovementState,
    motion: &mut Motion,
    platforms: &[Aabb],
) {
    if state.climbing {
        return;
    }
    state.on_ground = resolve_vertical(motion, position, size, platforms);
}

pub(crate) fn sync_player_size(
    settings: Res<GameSettings>,
    mut query: Query<(&Loadout, &mut BodySize), With<Player>>,
) {
    for (loadout, mut size) in &mut query {
        let wanted = player_size(&settings.sprites.player, loadout);
        if size.0 != wanted {
            size.0 = wanted;
        }
    }
}

pub(crate) fn apply_horizontal_movement(
    input: Res<FrameInput>,
    tuning: Res<MovementTuning>,
    mut query: Query<(&mut Position, &mut MovementState), With<Player>>,
) {
    for (mut position, mut state) in &mut query {
        walk(&mut position.0, &mut state, &input, tuning.walk_speed);
    }
}

pub(crate) fn apply_jump(
    input: Res<FrameInput>,
    tuning: Res<MovementTuning>,
    mut query: Query<(&mut MovementState, &mut Motion), With<Player>>,
) {
    for (mut state, mut motion) in &mut query {
        if try_jump(&mut state, &mut motion, &input, tuning.jump_velocity) {
            debug!("Jump");
        }
    }
}

pub(crate) fn apply_gravity(
    layout: Res<PlatformLayout>,
    mut query: Query<(&mut Position, &BodySize, &mut MovementState, &mut Motion), With<Player>>,
) {
    for (mut position, size, mut state, mut motion) in &mut query {
        fall(
            &mut position.0,
            size.0,
            &mut state,
            &mut motion,
            layout.as_slice(),
        );
    }
}

/// Clamps to the play-field and records the box the collision rules will use.
pub(crate) fn finish_player_step(
    field: Res<Playfield>,
    mut query: Query<(&mut Position, &BodySize, &mut ContactBox), With<Player>>,
) {
    for (mut position, size, mut contact) in &mut query {
        position.0.x = field.clamp_x(position.0.x);
        contact.0 = position.aabb(size);
    }
}
