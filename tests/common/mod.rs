//! Integration test harness.
//!
//! Keep integration tests headless:
//! - `MinimalPlugins` and `StatesPlugin` provide the ECS runtime.
//! - `barrel_climb::configure_headless` installs the simulation plugins.
//! - input is written straight into `FrameInput`; there is no keyboard.

#![allow(dead_code)]

use std::path::Path;

use bevy::prelude::*;
use bevy::state::app::StatesPlugin;

use barrel_climb::combat::{Loadout, WeaponPickup};
use barrel_climb::content::{CONTENT_DIR, GameContent, load_game_content};
use barrel_climb::core::{FrameInput, GameState};
use barrel_climb::movement::Player;
use barrel_climb::physics::Position;

pub fn shipped_content() -> GameContent {
    let dir = Path::new(env!("CARGO_MANIFEST_DIR")).join(CONTENT_DIR);
    load_game_content(&dir).expect("shipped content should load")
}

pub fn app_headless() -> App {
    app_with_content(shipped_content())
}

pub fn app_with_content(content: GameContent) -> App {
    let mut app = App::new();
    app.add_plugins((MinimalPlugins, StatesPlugin));
    barrel_climb::configure_headless(&mut app, content);
    app.update();
    app
}

/// Picks a level from HOME. Returns once the first PLAY tick has run.
pub fn start_level(app: &mut App, index: usize) {
    app.world_mut().resource_mut::<FrameInput>().level_select = Some(index);
    app.update();
    app.update();
    assert_eq!(state(app), GameState::Play);
}

pub fn press(app: &mut App, edit: impl FnOnce(&mut FrameInput)) {
    edit(&mut app.world_mut().resource_mut::<FrameInput>());
    app.update();
}

pub fn run_frames(app: &mut App, frames: u32) {
    for _ in 0..frames {
        app.update();
    }
}

pub fn state(app: &App) -> GameState {
    *app.world().resource::<State<GameState>>().get()
}

pub fn player(app: &mut App) -> Entity {
    let mut query = app.world_mut().query_filtered::<Entity, With<Player>>();
    query.single(app.world()).expect("exactly one player")
}

pub fn place_player(app: &mut App, position: Vec2) {
    let entity = player(app);
    if let Some(mut current) = app.world_mut().get_mut::<Position>(entity) {
        current.0 = position;
    }
}

pub fn arm_player(app: &mut App, pickup: WeaponPickup) {
    let entity = player(app);
    if let Some(mut loadout) = app.world_mut().get_mut::<Loadout>(entity) {
        loadout.equip(&pickup);
    }
}

pub fn component<T: Component + Clone>(app: &App, entity: Entity) -> T {
    app.world()
        .get::<T>(entity)
        .cloned()
        .expect("component should be present")
}
