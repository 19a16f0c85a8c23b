//! Core domain: events for level transitions and the end of a run.

use bevy::ecs::message::Message;

/// What ended the run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOverCause {
    TimeUp,
    Barrel,
    Boss,
    Monkey,
    Banana,
}

/// Event fired when a level has been spawned and PLAY begins on it
#[derive(Debug)]
pub struct LevelStartedEvent {
    pub index: usize,
    pub level_id: String,
}

impl Message for LevelStartedEvent {}

/// Event fired when a completed level hands over to the next one
#[derive(Debug)]
pub struct LevelAdvancedEvent {
    pub from: usize,
    pub to: usize,
    pub carried_score: u32,
}

impl Message for LevelAdvancedEvent {}

#[derive(Debug)]
pub struct GameOverEvent {
    pub cause: GameOverCause,
    pub frame: u32,
}

impl Message for GameOverEvent {}

/// Event fired when the last level is completed
#[derive(Debug)]
pub struct RunWonEvent {
    pub final_score: u32,
    pub time_bonus: u32,
}

impl Message for RunWonEvent {}
