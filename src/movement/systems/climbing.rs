//! Movement domain: ladder grabbing, climbing and stepping off at either end.

use bevy::prelude::*;

use crate::core::FrameInput;
use crate::level::Ladder;
use crate::movement::{MovementState, MovementTuning, Player};
use crate::physics::{Aabb, BodySize, Motion, Position, SpawnOrder, in_spawn_order};

/// Re-evaluates ladder contact and moves along the ladder while climbing.
///
/// Holding up or down grabs a ladder whose span strictly contains the player's
/// centre and which touches the player vertically. A player in the air grabs
/// any ladder they overlap. Climbing zeroes vertical velocity.
pub fn climb(
    position: &mut Vec2,
    size: Vec2,
    state: &mut MovementState,
    motion: &mut Motion,
    input: &FrameInput,
    ladders: &[Aabb],
    climb_speed: f32,
) {
    state.climbing = false;
    let body = Aabb::from_center_size(*position, size);
    let wants_ladder = input.up || input.down;

    for ladder in ladders {
        let aligned = ladder.contains_x_strict(body.center.x) && body.touches_vertically(ladder);
        if (wants_ladder && aligned) || (state.airborne() && body.intersects(ladder)) {
            state.climbing = true;
        }
    }

    if !state.climbing {
        return;
    }

    motion.velocity_y = 0.0;
    if input.up {
        position.y -= climb_speed;
        step_off_ladder(position, size, state, ladders, true);
    } else if input.down {
        position.y += climb_speed;
        step_off_ladder(position, size, state, ladders, false);
    }
}

/// Climbing past the top of a ladder (going up) or reaching its foot (going
/// down) puts the player on their feet at that end. The first horizontally
/// overlapping ladder that qualifies decides.
fn step_off_ladder(
    position: &mut Vec2,
    size: Vec2,
    state: &mut MovementState,
    ladders: &[Aabb],
    going_up: bool,
) {
    let body = Aabb::from_center_size(*position, size);
    let half_height = size.y * 0.5;

    for ladder in ladders {
        if !body.overlaps_horizontally(ladder) {
            continue;
        }

        let target_y = if going_up && body.bottom() <= ladder.top() {
            ladder.top() - half_height
        } else if !going_up && body.bottom() >= ladder.bottom() {
            ladder.bottom() - half_height
        } else {
            continue;
        };

        position.y = target_y;
        state.climbing = false;
        state.on_ground = true;
        return;
    }
}

pub(crate) fn apply_climbing(
    input: Res<FrameInput>,
    tuning: Res<MovementTuning>,
    ladders: Query<(&Position, &BodySize, &SpawnOrder), (With<Ladder>, Without<Player>)>,
    mut query: Query<(&mut Position, &BodySize, &mut MovementState, &mut Motion), With<Player>>,
) {
    let ladder_boxes = in_spawn_order(
        ladders
            .iter()
            .map(|(position, size, order)| (*order, position.aabb(size)))
            .collect(),
    );

    for (mut position, size, mut state, mut motion) in &mut query {
        climb(
            &mut position.0,
            size.0,
            &mut state,
            &mut motion,
            &input,
            &ladder_boxes,
            tuning.climb_speed,
        );
    }
}
