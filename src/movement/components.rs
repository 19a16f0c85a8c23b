//! Movement domain: player markers and locomotion state.

use bevy::prelude::*;

use crate::physics::{Aabb, Facing};

#[derive(Component, Debug)]
pub struct Player;

#[derive(Component, Debug, Default, Clone, Copy, PartialEq)]
pub struct MovementState {
    pub on_ground: bool,
    pub climbing: bool,
    pub facing: Facing,
    /// Set mid-air once a barrel has been cleared; paid out on landing.
    pub scored_this_jump: bool,
}

impl MovementState {
    pub fn airborne(&self) -> bool {
        !self.on_ground
    }
}

/// Player box captured at the end of the player step. Every collision rule in
/// the same tick tests against this box.
#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub struct ContactBox(pub Aabb);
