mod common;

use bevy::prelude::*;

use barrel_climb::combat::{Boss, Destructible, Health, WeaponPickup};
use barrel_climb::core::{ActiveLevel, FrameClock, GameOverCause, GameState, RunScore};
use barrel_climb::level::{Ladder, LevelEntity, LevelStatus};
use barrel_climb::physics::{Position, SpawnOrder};

use common::{
    app_headless, app_with_content, arm_player, place_player, press, run_frames, shipped_content,
    start_level, state,
};

fn boss_destroyed(app: &mut App) -> bool {
    let mut query = app.world_mut().query_filtered::<&Destructible, With<Boss>>();
    query.single(app.world()).expect("one boss").destroyed
}

#[test]
fn time_runs_out_on_frame_600() {
    let mut content = shipped_content();
    content.settings.max_frames = 600;
    let mut app = app_with_content(content);

    start_level(&mut app, 0);
    assert_eq!(app.world().resource::<FrameClock>().frame, 1);

    run_frames(&mut app, 598);
    assert_eq!(app.world().resource::<FrameClock>().frame, 599);
    assert_eq!(state(&app), GameState::Play);
    assert_eq!(app.world().resource::<LevelStatus>().remaining_time, 0);

    app.update();
    assert_eq!(app.world().resource::<FrameClock>().frame, 600);
    assert_eq!(
        app.world().resource::<LevelStatus>().failure,
        Some(GameOverCause::TimeUp)
    );

    app.update();
    assert_eq!(state(&app), GameState::GameOver);
    assert_eq!(app.world().resource::<RunScore>().cumulative, 0);
}

#[test]
fn hammer_on_boss_advances_to_next_level() {
    let mut app = app_headless();
    start_level(&mut app, 0);

    arm_player(&mut app, WeaponPickup::hammer());
    place_player(&mut app, Vec2::new(512.0, 118.0));
    app.update();

    // the new level was spawned in the same tick
    assert_eq!(state(&app), GameState::Play);
    assert_eq!(app.world().resource::<ActiveLevel>().index, 1);
    let status = app.world().resource::<LevelStatus>();
    assert_eq!(status.index, 1);
    assert_eq!(status.score, 0);
    assert!(!status.completed);

    app.update();
    assert!(!boss_destroyed(&mut app));
    let mut boss_health = app.world_mut().query_filtered::<&Health, With<Boss>>();
    assert_eq!(boss_health.single(app.world()).expect("one boss").current, 5);
}

#[test]
fn beating_the_last_level_wins_with_time_bonus() {
    let mut app = app_headless();
    start_level(&mut app, 1);

    arm_player(&mut app, WeaponPickup::hammer());
    place_player(&mut app, Vec2::new(512.0, 118.0));
    app.update();

    assert_eq!(app.world().resource::<FrameClock>().frame, 2);
    assert!(boss_destroyed(&mut app));
    // (10800 - 2) / 60 = 179 seconds left, three points each
    assert_eq!(app.world().resource::<RunScore>().cumulative, 537);

    app.update();
    assert_eq!(state(&app), GameState::Win);
    assert_eq!(app.world().resource::<RunScore>().cumulative, 537);

    let mut level_entities = app.world_mut().query_filtered::<Entity, With<LevelEntity>>();
    assert_eq!(level_entities.iter(app.world()).count(), 0);
}

#[test]
fn reset_from_end_screen_returns_home_and_clears_run() {
    let mut app = app_headless();
    start_level(&mut app, 1);
    arm_player(&mut app, WeaponPickup::hammer());
    place_player(&mut app, Vec2::new(512.0, 118.0));
    run_frames(&mut app, 2);
    assert_eq!(state(&app), GameState::Win);

    press(&mut app, |input| input.reset_pressed = true);
    app.update();

    assert_eq!(state(&app), GameState::Home);
    assert_eq!(app.world().resource::<FrameClock>().frame, 0);
    assert_eq!(app.world().resource::<RunScore>().cumulative, 0);
}

#[test]
fn clock_keeps_running_across_levels() {
    let mut app = app_headless();
    start_level(&mut app, 0);
    run_frames(&mut app, 9);

    arm_player(&mut app, WeaponPickup::hammer());
    place_player(&mut app, Vec2::new(512.0, 118.0));
    app.update();
    assert_eq!(app.world().resource::<ActiveLevel>().index, 1);

    app.update();
    assert_eq!(app.world().resource::<FrameClock>().frame, 12);
    // (10800 - 12) / 60
    assert_eq!(app.world().resource::<LevelStatus>().remaining_time, 179);
}

#[test]
fn sunken_ladder_rests_on_its_girder() {
    let mut content = shipped_content();
    content.levels.levels[0].ladders[0].1 += 3.0;
    let mut app = app_with_content(content);

    start_level(&mut app, 0);
    run_frames(&mut app, 120);

    let mut query = app
        .world_mut()
        .query_filtered::<(&SpawnOrder, &Position), With<Ladder>>();
    let mut ladders: Vec<(SpawnOrder, Vec2)> = query
        .iter(app.world())
        .map(|(order, position)| (*order, position.0))
        .collect();
    ladders.sort_by_key(|(order, _)| *order);

    let heights: Vec<f32> = ladders.iter().map(|(_, position)| position.y).collect();
    assert_eq!(heights, vec![678.0, 558.0, 438.0, 318.0, 198.0]);
}
