//! Physics domain: gravity integration and platform landing.

use bevy::prelude::*;

use crate::physics::{Aabb, Motion};

/// How far a foot may sit from a platform top and still count as resting on it.
pub const SURFACE_TOLERANCE: f32 = 5.0;

/// Advances one gravity step and resolves landing against `platforms`.
///
/// Velocity is integrated and clamped to the terminal velocity, then the
/// bottom edge is swept from its previous to its candidate position. The first
/// platform (slice order) whose top edge is crossed while falling, and whose
/// horizontal extent overlaps the body, stops the fall: the body is snapped
/// onto that top and its velocity zeroed. Returns whether it landed.
pub fn resolve_vertical(
    motion: &mut Motion,
    position: &mut Vec2,
    size: Vec2,
    platforms: &[Aabb],
) -> bool {
    motion.velocity_y = (motion.velocity_y + motion.gravity).min(motion.terminal_velocity);

    let half_height = size.y * 0.5;
    let candidate_y = position.y + motion.velocity_y;
    let previous_bottom = position.y + half_height;
    let candidate_bottom = candidate_y + half_height;
    let candidate = Aabb::from_center_size(Vec2::new(position.x, candidate_y), size);

    if motion.is_falling() {
        for platform in platforms {
            let top = platform.top();
            let crossed = previous_bottom <= top && candidate_bottom >= top;
            if crossed && candidate.overlaps_horizontally(platform) {
                position.y = top - half_height;
                motion.velocity_y = 0.0;
                return true;
            }
        }
    }

    position.y = candidate_y;
    false
}

/// Moves a freshly placed body so it rests exactly on the first platform whose
/// top is within [`SURFACE_TOLERANCE`] of its bottom and whose span contains
/// its x. Returns whether the body was snapped.
pub fn settle_on_platform(position: &mut Vec2, size: Vec2, platforms: &[Aabb]) -> bool {
    let half_height = size.y * 0.5;
    let bottom = position.y + half_height;

    let surface = platforms.iter().find(|platform| {
        (bottom - platform.top()).abs() <= SURFACE_TOLERANCE && platform.contains_x(position.x)
    });

    match surface {
        Some(platform) => {
            position.y = platform.top() - half_height;
            true
        }
        None => false,
    }
}
