//! Level domain: entity components and markers for a loaded level.

use bevy::prelude::*;

/// Marker for everything spawned for the current level; despawned on unload.
#[derive(Component, Debug)]
pub struct LevelEntity;

/// Solid girder. Its box is also mirrored in `PlatformLayout`.
#[derive(Component, Debug)]
pub struct Platform;

#[derive(Component, Debug)]
pub struct Ladder;

/// Which sprite an entity is drawn with.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpriteKind {
    Player,
    Platform,
    Ladder,
    Barrel,
    Hammer,
    Blaster,
    Boss,
    Monkey,
    SmartMonkey,
}
