mod common;

use bevy::prelude::*;

use barrel_climb::combat::{
    Barrel, Boss, Destructible, FiredShots, Health, Loadout, Monkey, Projectile, Thrower,
    WeaponPickup,
};
use barrel_climb::core::{ActiveLevel, GameOverCause, GameState, RunScore};
use barrel_climb::level::LevelStatus;
use barrel_climb::movement::MovementState;
use barrel_climb::physics::{Facing, Motion, Position, SpawnOrder};

use common::{
    app_headless, arm_player, component, place_player, player, press, run_frames, start_level,
    state,
};

fn in_order<F: bevy::ecs::query::QueryFilter>(app: &mut App) -> Vec<Entity> {
    let mut query = app.world_mut().query_filtered::<(Entity, &SpawnOrder), F>();
    let mut found: Vec<(SpawnOrder, Entity)> = query
        .iter(app.world())
        .map(|(entity, order)| (*order, entity))
        .collect();
    found.sort_by_key(|(order, _)| *order);
    found.into_iter().map(|(_, entity)| entity).collect()
}

fn failure(app: &App) -> Option<GameOverCause> {
    app.world().resource::<LevelStatus>().failure
}

#[test]
fn hammer_smashes_barrel_for_points() {
    let mut app = app_headless();
    start_level(&mut app, 0);

    arm_player(&mut app, WeaponPickup::hammer());
    place_player(&mut app, Vec2::new(480.0, 598.0));
    app.update();

    let first_barrel = in_order::<With<Barrel>>(&mut app)[0];
    assert!(component::<Destructible>(&app, first_barrel).destroyed);
    assert_eq!(app.world().resource::<LevelStatus>().score, 100);
    assert_eq!(failure(&app), None);

    // a destroyed barrel can be walked through
    run_frames(&mut app, 3);
    assert_eq!(state(&app), GameState::Play);
    assert_eq!(app.world().resource::<LevelStatus>().score, 100);
}

#[test]
fn touching_barrel_unarmed_ends_run() {
    let mut app = app_headless();
    start_level(&mut app, 0);

    place_player(&mut app, Vec2::new(480.0, 598.0));
    app.update();
    assert_eq!(failure(&app), Some(GameOverCause::Barrel));

    app.update();
    assert_eq!(state(&app), GameState::GameOver);
    assert_eq!(app.world().resource::<RunScore>().cumulative, 0);
}

#[test]
fn touching_boss_unarmed_ends_run() {
    let mut app = app_headless();
    start_level(&mut app, 0);

    place_player(&mut app, Vec2::new(512.0, 118.0));
    app.update();
    assert_eq!(failure(&app), Some(GameOverCause::Boss));
}

#[test]
fn jump_over_barrel_pays_on_landing() {
    let mut app = app_headless();
    start_level(&mut app, 0);

    // between the first barrel (top 588) and the girder row above (bottom 518)
    let entity = player(&mut app);
    place_player(&mut app, Vec2::new(480.0, 560.0));
    if let Some(mut state) = app.world_mut().get_mut::<MovementState>(entity) {
        state.on_ground = false;
    }
    if let Some(mut motion) = app.world_mut().get_mut::<Motion>(entity) {
        motion.velocity_y = 0.0;
    }
    app.update();

    assert!(component::<MovementState>(&app, entity).scored_this_jump);
    assert_eq!(app.world().resource::<LevelStatus>().score, 0);

    // land somewhere safe
    place_player(&mut app, Vec2::new(60.0, 718.0));
    app.update();

    let state = component::<MovementState>(&app, entity);
    assert!(state.on_ground);
    assert!(!state.scored_this_jump);
    assert_eq!(app.world().resource::<LevelStatus>().score, 30);
}

#[test]
fn bullet_destroys_monkey() {
    let mut app = app_headless();
    start_level(&mut app, 1);

    arm_player(&mut app, WeaponPickup::blaster(5));
    place_player(&mut app, Vec2::new(420.0, 598.0));
    press(&mut app, |input| input.shoot_pressed = true);

    let entity = player(&mut app);
    assert_eq!(component::<Loadout>(&app, entity).ammo, 4);
    assert_eq!(component::<FiredShots>(&app, entity).shots.len(), 1);

    let first_monkey = in_order::<With<Monkey>>(&mut app)[0];
    for _ in 0..60 {
        if component::<Destructible>(&app, first_monkey).destroyed {
            break;
        }
        app.update();
    }

    assert!(component::<Destructible>(&app, first_monkey).destroyed);
    assert_eq!(app.world().resource::<LevelStatus>().score, 100);
    assert_eq!(component::<FiredShots>(&app, entity).active().count(), 0);
    assert_eq!(failure(&app), None);
}

#[test]
fn banana_hit_ends_run() {
    let mut app = app_headless();
    start_level(&mut app, 1);

    let entity = player(&mut app);
    let at = component::<Position>(&app, entity).0;
    let smart = in_order::<With<Thrower>>(&mut app)[0];
    if let Some(mut thrower) = app.world_mut().get_mut::<Thrower>(smart) {
        thrower.thrown.push(Projectile::new(
            at,
            Vec2::new(16.0, 16.0),
            Facing::Right,
            1.8,
        ));
    }
    app.update();

    assert_eq!(failure(&app), Some(GameOverCause::Banana));
}

#[test]
fn banana_from_destroyed_monkey_is_harmless() {
    let mut app = app_headless();
    start_level(&mut app, 1);

    let entity = player(&mut app);
    let at = component::<Position>(&app, entity).0;
    let smart = in_order::<With<Thrower>>(&mut app)[0];
    if let Some(mut thrower) = app.world_mut().get_mut::<Thrower>(smart) {
        thrower.thrown.push(Projectile::new(
            at,
            Vec2::new(16.0, 16.0),
            Facing::Right,
            1.8,
        ));
    }
    if let Some(mut destructible) = app.world_mut().get_mut::<Destructible>(smart) {
        destructible.destroyed = true;
    }
    app.update();

    assert_eq!(failure(&app), None);
}

#[test]
fn blaster_runs_dry_and_is_put_away() {
    let mut app = app_headless();
    start_level(&mut app, 1);

    // the ground row is clear to the right of the spawn point
    arm_player(&mut app, WeaponPickup::blaster(5));
    press(&mut app, |input| input.shoot_pressed = true);
    press(&mut app, |input| input.shoot_pressed = true);

    let entity = player(&mut app);
    assert_eq!(component::<Loadout>(&app, entity).ammo, 3);

    if let Some(mut loadout) = app.world_mut().get_mut::<Loadout>(entity) {
        loadout.ammo = 1;
    }
    press(&mut app, |input| input.shoot_pressed = true);

    let loadout = component::<Loadout>(&app, entity);
    assert_eq!(loadout.ammo, 0);
    assert!(loadout.weapon.is_some());
    assert_eq!(component::<FiredShots>(&app, entity).shots.len(), 3);

    app.update();
    assert_eq!(component::<Loadout>(&app, entity).weapon, None);

    // nothing left to fire
    press(&mut app, |input| input.shoot_pressed = true);
    assert_eq!(component::<FiredShots>(&app, entity).shots.len(), 3);
}

fn boss_health(app: &mut App) -> Health {
    let mut query = app.world_mut().query_filtered::<&Health, With<Boss>>();
    *query.single(app.world()).expect("one boss")
}

/// Fires once, then ticks until `done` holds or a second has passed.
fn shoot_until(app: &mut App, done: impl Fn(&mut App) -> bool) -> bool {
    press(app, |input| input.shoot_pressed = true);
    for _ in 0..60 {
        if done(app) {
            return true;
        }
        app.update();
    }
    done(app)
}

#[test]
fn bullet_into_girder_stops_without_damage() {
    let mut app = app_headless();
    start_level(&mut app, 1);

    // centred inside the second girder row, so the bullet leaves at girder height
    arm_player(&mut app, WeaponPickup::blaster(5));
    place_player(&mut app, Vec2::new(420.0, 628.0));
    press(&mut app, |input| input.shoot_pressed = true);

    let entity = player(&mut app);
    let fired = component::<FiredShots>(&app, entity);
    assert_eq!(fired.shots.len(), 1);
    assert!(!fired.shots[0].active);

    assert_eq!(app.world().resource::<LevelStatus>().score, 0);
    for monkey in in_order::<With<Monkey>>(&mut app) {
        assert!(!component::<Destructible>(&app, monkey).destroyed);
    }
}

#[test]
fn bullets_wear_the_boss_down_one_point_at_a_time() {
    let mut app = app_headless();
    start_level(&mut app, 0);

    // on the boss ledge, left of the boss and level with it
    arm_player(&mut app, WeaponPickup::blaster(5));
    place_player(&mut app, Vec2::new(420.0, 118.0));

    for expected in (1..5).rev() {
        assert!(shoot_until(&mut app, |app| boss_health(app).current == expected));
        let status = app.world().resource::<LevelStatus>();
        assert!(!status.completed);
        assert_eq!(status.failure, None);
        let boss = in_order::<With<Boss>>(&mut app)[0];
        assert!(!component::<Destructible>(&app, boss).destroyed);
    }

    // the fifth hit empties the bar and the next level is loaded
    assert!(shoot_until(&mut app, |app| {
        app.world().resource::<ActiveLevel>().index == 1
    }));
    assert_eq!(state(&app), GameState::Play);
    assert_eq!(boss_health(&mut app).current, 5);
}
