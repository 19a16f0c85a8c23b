//! Movement domain: system modules for locomotion updates.

pub(crate) mod climbing;
pub(crate) mod movement;

pub(crate) use climbing::apply_climbing;
pub(crate) use movement::{
    apply_gravity, apply_horizontal_movement, apply_jump, finish_player_step, sync_player_size,
};
