//! Flat colours standing in for sprite art.

use bevy::prelude::*;

use crate::combat::{Loadout, WeaponKind};
use crate::level::SpriteKind;

pub fn kind_color(kind: SpriteKind) -> Color {
    match kind {
        SpriteKind::Player => Color::srgb(0.9, 0.2, 0.2),
        SpriteKind::Platform => Color::srgb(0.75, 0.2, 0.35),
        SpriteKind::Ladder => Color::srgb(0.3, 0.75, 0.9),
        SpriteKind::Barrel => Color::srgb(0.6, 0.35, 0.15),
        SpriteKind::Hammer => Color::srgb(0.85, 0.85, 0.3),
        SpriteKind::Blaster => Color::srgb(0.4, 0.9, 0.5),
        SpriteKind::Boss => Color::srgb(0.45, 0.25, 0.1),
        SpriteKind::Monkey => Color::srgb(0.7, 0.5, 0.3),
        SpriteKind::SmartMonkey => Color::srgb(0.8, 0.4, 0.6),
    }
}

/// The player is tinted by whatever they are holding.
pub fn player_color(loadout: &Loadout) -> Color {
    match loadout.weapon {
        None => kind_color(SpriteKind::Player),
        Some(WeaponKind::Hammer) => Color::srgb(0.95, 0.6, 0.2),
        Some(WeaponKind::Blaster) => Color::srgb(0.3, 0.6, 0.95),
    }
}

pub const BULLET_COLOR: Color = Color::srgb(1.0, 0.95, 0.4);
pub const BANANA_COLOR: Color = Color::srgb(1.0, 0.85, 0.1);
