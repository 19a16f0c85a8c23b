//! Barrel Climb: a single-screen platformer where the player climbs girders
//! and ladders to reach the boss, dodging or smashing barrels on the way.
//!
//! The library exposes two composition roots:
//! - `configure_full`: window, rendering, HUD and screens on top of the game.
//! - `configure_headless`: the simulation only, for integration tests.

pub mod combat;
pub mod content;
pub mod core;
#[cfg(feature = "dev-tools")]
pub mod debug;
pub mod level;
pub mod movement;
pub mod physics;
pub mod sprites;
pub mod ui;

use bevy::prelude::*;
use bevy::window::{PresentMode, WindowResolution};

use crate::content::{ContentPlugin, GameContent};

/// Full configuration for `cargo run`.
pub fn configure_full(app: &mut App, content: GameContent) {
    let window = content.settings.window.clone();

    app.add_plugins(DefaultPlugins.set(WindowPlugin {
        primary_window: Some(Window {
            title: window.title,
            resolution: WindowResolution::new(window.width as u32, window.height as u32),
            resizable: false,
            present_mode: PresentMode::AutoVsync,
            ..default()
        }),
        ..default()
    }))
    .insert_resource(ClearColor(Color::BLACK));

    configure_game(app, content);

    app.add_plugins((
        crate::core::ui::ScreensPlugin,
        ui::UiPlugin,
        sprites::SpritesPlugin,
    ));

    #[cfg(feature = "dev-tools")]
    app.add_plugins(debug::DebugPlugin);
}

/// Headless configuration for integration tests.
///
/// The caller provides `MinimalPlugins` and `StatesPlugin`; nothing here needs
/// a window or a renderer.
pub fn configure_headless(app: &mut App, content: GameContent) {
    configure_game(app, content);
}

/// Configuration shared by both full and headless apps.
fn configure_game(app: &mut App, content: GameContent) {
    app.add_plugins((
        ContentPlugin::new(content),
        crate::core::CorePlugin,
        physics::PhysicsPlugin,
        level::LevelPlugin,
        movement::MovementPlugin,
        combat::CombatPlugin,
    ));
}
