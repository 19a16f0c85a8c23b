//! Physics domain: tests for box queries and the landing resolver.

use bevy::prelude::*;

use super::{Aabb, Motion, SpawnOrder, in_spawn_order, resolve_vertical, settle_on_platform};

const EPSILON: f32 = 1e-4;

fn platform_at(x: f32, y: f32) -> Aabb {
    Aabb::from_center_size(Vec2::new(x, y), Vec2::new(200.0, 20.0))
}

// -----------------------------------------------------------------------------
// Aabb tests
// -----------------------------------------------------------------------------

#[test]
fn test_aabb_edges_in_screen_space() {
    let aabb = Aabb::from_center_size(Vec2::new(100.0, 50.0), Vec2::new(40.0, 20.0));
    assert_eq!(aabb.left(), 80.0);
    assert_eq!(aabb.right(), 120.0);
    assert_eq!(aabb.top(), 40.0);
    assert_eq!(aabb.bottom(), 60.0);
    assert_eq!(aabb.size(), Vec2::new(40.0, 20.0));
}

#[test]
fn test_aabb_intersects_overlapping_boxes() {
    let a = Aabb::from_center_size(Vec2::new(0.0, 0.0), Vec2::splat(10.0));
    let b = Aabb::from_center_size(Vec2::new(8.0, 8.0), Vec2::splat(10.0));
    assert!(a.intersects(&b));
    assert!(b.intersects(&a));
}

#[test]
fn test_aabb_touching_edges_do_not_intersect() {
    let a = Aabb::from_center_size(Vec2::new(0.0, 0.0), Vec2::splat(10.0));
    let right = Aabb::from_center_size(Vec2::new(10.0, 0.0), Vec2::splat(10.0));
    let below = Aabb::from_center_size(Vec2::new(0.0, 10.0), Vec2::splat(10.0));
    assert!(!a.intersects(&right));
    assert!(!a.intersects(&below));
    assert!(a.touches_vertically(&below));
}

#[test]
fn test_aabb_contains_x_inclusive_and_strict() {
    let aabb = Aabb::from_center_size(Vec2::new(50.0, 0.0), Vec2::new(20.0, 10.0));
    assert!(aabb.contains_x(40.0));
    assert!(aabb.contains_x(60.0));
    assert!(!aabb.contains_x_strict(40.0));
    assert!(aabb.contains_x_strict(45.0));
    assert!(!aabb.contains_x(60.5));
}

// -----------------------------------------------------------------------------
// Resolver tests
// -----------------------------------------------------------------------------

#[test]
fn test_velocity_after_n_ungrounded_ticks_is_clamped() {
    let mut motion = Motion::new(0.4, 5.0);
    let mut position = Vec2::new(0.0, 0.0);
    let size = Vec2::splat(10.0);

    for n in 1..=30u32 {
        let landed = resolve_vertical(&mut motion, &mut position, size, &[]);
        assert!(!landed);
        let expected = (n as f32 * 0.4).min(5.0);
        assert!(
            (motion.velocity_y - expected).abs() < EPSILON,
            "tick {n}: {} != {expected}",
            motion.velocity_y
        );
        assert!(motion.velocity_y <= motion.terminal_velocity);
    }
}

#[test]
fn test_falling_body_lands_on_platform_top() {
    let platform = platform_at(100.0, 110.0); // top at 100
    let mut motion = Motion::new(0.2, 10.0);
    motion.velocity_y = 4.0;
    let size = Vec2::new(30.0, 40.0);
    // bottom at 98, candidate bottom at 102.2
    let mut position = Vec2::new(100.0, 78.0);

    let landed = resolve_vertical(&mut motion, &mut position, size, &[platform]);

    assert!(landed);
    assert_eq!(position.y, 80.0);
    assert_eq!(motion.velocity_y, 0.0);
}

#[test]
fn test_landing_is_idempotent() {
    let platform = platform_at(100.0, 110.0);
    let size = Vec2::new(30.0, 40.0);
    let mut motion = Motion::new(0.2, 10.0);
    let mut position = Vec2::new(100.0, 80.0);

    for _ in 0..10 {
        let landed = resolve_vertical(&mut motion, &mut position, size, &[platform]);
        assert!(landed);
        assert_eq!(position.y + size.y * 0.5, platform.top());
        assert_eq!(motion.velocity_y, 0.0);
    }
}

#[test]
fn test_rising_body_passes_through_platform() {
    let platform = platform_at(100.0, 110.0);
    let size = Vec2::new(30.0, 40.0);
    let mut motion = Motion::new(0.2, 10.0);
    motion.velocity_y = -5.0;
    let mut position = Vec2::new(100.0, 140.0);

    let landed = resolve_vertical(&mut motion, &mut position, size, &[platform]);

    assert!(!landed);
    assert!((position.y - 135.2).abs() < EPSILON);
}

#[test]
fn test_no_landing_without_horizontal_overlap() {
    let platform = platform_at(100.0, 110.0); // spans 0..200
    let size = Vec2::new(30.0, 40.0);
    let mut motion = Motion::new(0.2, 10.0);
    motion.velocity_y = 4.0;
    // left edge exactly at the platform's right edge
    let mut position = Vec2::new(215.0, 78.0);

    let landed = resolve_vertical(&mut motion, &mut position, size, &[platform]);

    assert!(!landed);
    assert!(position.y > 78.0);
}

#[test]
fn test_first_platform_in_order_wins() {
    let upper = platform_at(100.0, 110.0); // top at 100
    let lower = platform_at(100.0, 112.0); // top at 102
    let size = Vec2::new(30.0, 40.0);

    let mut motion = Motion::new(0.2, 10.0);
    motion.velocity_y = 5.0;
    let mut position = Vec2::new(100.0, 78.0);
    resolve_vertical(&mut motion, &mut position, size, &[lower, upper]);
    assert_eq!(position.y, 82.0);

    let mut motion = Motion::new(0.2, 10.0);
    motion.velocity_y = 5.0;
    let mut position = Vec2::new(100.0, 78.0);
    resolve_vertical(&mut motion, &mut position, size, &[upper, lower]);
    assert_eq!(position.y, 80.0);
}

#[test]
fn test_settle_on_platform_within_tolerance() {
    let platforms = [platform_at(100.0, 110.0)];
    let size = Vec2::new(30.0, 30.0);

    let mut near = Vec2::new(50.0, 88.0); // bottom 103, top 100
    assert!(settle_on_platform(&mut near, size, &platforms));
    assert_eq!(near.y, 85.0);

    let mut far = Vec2::new(50.0, 60.0);
    assert!(!settle_on_platform(&mut far, size, &platforms));
    assert_eq!(far.y, 60.0);

    let mut outside = Vec2::new(250.0, 88.0);
    assert!(!settle_on_platform(&mut outside, size, &platforms));
}

#[test]
fn test_in_spawn_order_sorts_by_order() {
    let items = vec![
        (SpawnOrder(2), "c"),
        (SpawnOrder(0), "a"),
        (SpawnOrder(1), "b"),
    ];
    assert_eq!(in_spawn_order(items), vec!["a", "b", "c"]);
}
