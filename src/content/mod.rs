//! Content domain: RON-driven settings and level layouts.
//!
//! Content is loaded and validated before the app is built; a broken file
//! stops the game before the first frame rather than surfacing mid-run.

mod data;
mod loader;
mod registry;
mod validation;

#[cfg(test)]
mod tests;

pub use data::*;
// the bevy prelude also exports a `vec2`; this one wins
pub use data::vec2;
pub use loader::{
    ContentLoadError, GameContent, LEVELS_FILE, SETTINGS_FILE, load_game_content,
    parse_data_file, parse_single,
};
pub use registry::LevelRegistry;
pub use validation::{ValidationError, validate_content, validate_level, validate_settings};

use bevy::prelude::*;

use crate::physics::Playfield;

/// Directory holding settings.ron and levels.ron, relative to the crate root.
pub const CONTENT_DIR: &str = "assets/data";

/// Installs already-loaded content as resources.
pub struct ContentPlugin {
    content: GameContent,
}

impl ContentPlugin {
    pub fn new(content: GameContent) -> Self {
        Self { content }
    }
}

impl Plugin for ContentPlugin {
    fn build(&self, app: &mut App) {
        let settings = self.content.settings.clone();
        info!("{}", self.content.levels.summary());

        app.insert_resource(Playfield {
            width: settings.window.width,
            height: settings.window.height,
        })
        .insert_resource(self.content.levels.clone())
        .insert_resource(settings);
    }
}
