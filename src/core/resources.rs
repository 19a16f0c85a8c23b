//! Core domain: run-wide counters owned by the game flow.

use bevy::prelude::*;

/// Frames elapsed while in PLAY. Not reset between levels, only on return to HOME.
#[derive(Resource, Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct FrameClock {
    pub frame: u32,
}

impl FrameClock {
    pub fn advance(&mut self) -> u32 {
        self.frame += 1;
        self.frame
    }

    pub fn reset(&mut self) {
        self.frame = 0;
    }
}

/// Score carried across levels. Zeroed on game over and on return to HOME.
#[derive(Resource, Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RunScore {
    pub cumulative: u32,
}

impl RunScore {
    pub fn bank(&mut self, points: u32) {
        self.cumulative += points;
    }

    pub fn reset(&mut self) {
        self.cumulative = 0;
    }
}

/// Index (into the level registry) of the level PLAY should run.
#[derive(Resource, Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ActiveLevel {
    pub index: usize,
}
