//! Data definitions for the RON content files.
//!
//! These structs mirror assets/data/settings.ron and assets/data/levels.ron.
//! Coordinates are `(x, y)` pairs in screen space, sizes are `(width, height)`.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::physics::Facing;

pub type Coord = (f32, f32);

pub fn vec2(pair: Coord) -> Vec2 {
    Vec2::new(pair.0, pair.1)
}

// ============================================================================
// Common wrapper for RON files with schema_version and items
// ============================================================================

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DataFile<T> {
    pub schema_version: u32,
    pub items: Vec<T>,
}

// ============================================================================
// Levels (levels.ron)
// ============================================================================

/// Static layout of one stage. Lists keep their file order, which is the
/// order every first-match scan uses.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LevelDef {
    pub id: String,
    pub name: String,
    pub player: Coord,
    pub boss: Coord,
    pub platforms: Vec<Coord>,
    #[serde(default)]
    pub ladders: Vec<Coord>,
    #[serde(default)]
    pub barrels: Vec<Coord>,
    #[serde(default)]
    pub hammers: Vec<Coord>,
    #[serde(default)]
    pub blasters: Vec<Coord>,
    #[serde(default)]
    pub monkeys: Vec<MonkeyDef>,
}

impl LevelDef {
    /// Ammo only matters on levels that hand out blasters.
    pub fn has_ranged_weapons(&self) -> bool {
        !self.blasters.is_empty()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub enum MonkeyKind {
    /// Walks its route.
    Normal,
    /// Walks its route and throws bananas on a fixed interval.
    Smart,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct MonkeyDef {
    pub kind: MonkeyKind,
    pub position: Coord,
    pub facing: Facing,
    /// Step lengths walked before each turn, repeated forever.
    pub route: Vec<f32>,
}

// ============================================================================
// Settings (settings.ron)
// ============================================================================

#[derive(Debug, Clone, Deserialize, Serialize, Resource)]
pub struct GameSettings {
    pub schema_version: u32,
    pub window: WindowDef,
    pub frames_per_second: u32,
    /// Frame budget for a whole run. Elapsed frames carry across levels.
    pub max_frames: u32,
    pub sprites: SpriteSizes,
    pub text: ScreenText,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct WindowDef {
    pub title: String,
    pub width: f32,
    pub height: f32,
}

/// Bounding-box sizes per visual kind. Physics and collision use these, the
/// renderer draws quads of the same size.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SpriteSizes {
    pub player: PlayerSizes,
    pub platform: Coord,
    pub ladder: Coord,
    pub barrel: Coord,
    pub hammer: Coord,
    pub blaster: Coord,
    pub boss: Coord,
    pub monkey: Coord,
    pub smart_monkey: Coord,
    pub bullet: Coord,
    pub banana: Coord,
}

/// The player sprite changes with the held weapon, and so does its box.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PlayerSizes {
    pub unarmed: Coord,
    pub hammer: Coord,
    pub blaster: Coord,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ScreenText {
    pub home_title: String,
    pub home_prompt: String,
    pub won: String,
    pub lost: String,
    pub continue_prompt: String,
    pub final_score: String,
}
