//! Physics domain: box queries and the gravity/landing resolver shared by every
//! falling or climbing entity.

mod aabb;
mod components;
mod motion;
mod resources;

#[cfg(test)]
mod tests;

pub use aabb::Aabb;
pub use components::{BodySize, Facing, Motion, Position, SpawnOrder, in_spawn_order};
pub use motion::{SURFACE_TOLERANCE, resolve_vertical, settle_on_platform};
pub use resources::{GravityProfile, GravityProfiles, PlatformLayout, Playfield};

use bevy::prelude::*;

pub struct PhysicsPlugin;

impl Plugin for PhysicsPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<PlatformLayout>()
            .init_resource::<GravityProfiles>()
            .init_resource::<Playfield>();
    }
}
