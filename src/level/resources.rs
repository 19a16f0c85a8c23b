//! Level domain: per-level score, timer and outcome flags.

use bevy::prelude::*;

use crate::core::GameOverCause;

/// Progress of the level being played. Rebuilt on every level load.
#[derive(Resource, Debug, Clone, Default, PartialEq)]
pub struct LevelStatus {
    pub index: usize,
    /// Points earned in this level only.
    pub score: u32,
    /// Whole seconds left on the run timer.
    pub remaining_time: i32,
    pub completed: bool,
    /// First fatal cause seen this level.
    pub failure: Option<GameOverCause>,
}

impl LevelStatus {
    pub fn new(index: usize) -> Self {
        Self {
            index,
            ..default()
        }
    }

    pub fn award(&mut self, points: u32) {
        self.score += points;
    }

    /// Records a game over. Later causes in the same tick are ignored.
    pub fn fail(&mut self, cause: GameOverCause) {
        if self.failure.is_none() {
            self.failure = Some(cause);
        }
    }

    pub fn complete(&mut self) {
        self.completed = true;
    }

    pub fn timed_out(&self) -> bool {
        self.failure == Some(GameOverCause::TimeUp)
    }

    /// Refreshes the displayed time for `frame` and flags a time-up once the
    /// frame budget is spent. Returns true on the frame that ran out.
    pub fn update_clock(&mut self, frame: u32, max_frames: u32, fps: u32) -> bool {
        let left = i64::from(max_frames) - i64::from(frame);
        self.remaining_time = (left / i64::from(fps.max(1))) as i32;

        if frame >= max_frames && !self.timed_out() {
            self.failure = Some(GameOverCause::TimeUp);
            return true;
        }
        false
    }

    /// Seconds left times `multiplier`, never negative.
    pub fn time_bonus(&self, multiplier: u32) -> u32 {
        self.remaining_time.max(0) as u32 * multiplier
    }
}
