//! Sprites module: tests for screen placement and draw order.

use bevy::prelude::*;

use super::{DrawLayer, to_screen};
use crate::level::SpriteKind;
use crate::physics::Playfield;

#[test]
fn test_to_screen_flips_y_and_centres() {
    let field = Playfield {
        width: 1024.0,
        height: 768.0,
    };
    assert_eq!(
        to_screen(Vec2::ZERO, &field, DrawLayer::Ladder),
        Vec3::new(-512.0, 384.0, 0.0)
    );
    assert_eq!(
        to_screen(Vec2::new(1024.0, 768.0), &field, DrawLayer::Ladder),
        Vec3::new(512.0, -384.0, 0.0)
    );
}

#[test]
fn test_player_draws_above_level() {
    let player = DrawLayer::of(SpriteKind::Player).z_index();
    for kind in [
        SpriteKind::Platform,
        SpriteKind::Ladder,
        SpriteKind::Barrel,
        SpriteKind::Hammer,
        SpriteKind::Boss,
    ] {
        assert!(DrawLayer::of(kind).z_index() < player, "{kind:?}");
    }
    assert!(DrawLayer::Projectile.z_index() > player);
}
