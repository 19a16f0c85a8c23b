//! Level domain: loading, the run timer, world gravity and level outcomes.

use bevy::ecs::message::MessageWriter;
use bevy::ecs::system::SystemParam;
use bevy::prelude::*;

use crate::combat::{Destructible, EnemyTuning, Monkey, ProjectileTuning, ScoringTuning};
use crate::content::{GameSettings, LevelRegistry};
use crate::core::{
    ActiveLevel, FrameClock, GameOverCause, GameOverEvent, GameState, LevelAdvancedEvent,
    LevelStartedEvent, RunScore, RunWonEvent,
};
use crate::level::spawn::{SpawnTuning, spawn_level};
use crate::level::{LevelEntity, LevelStatus};
use crate::movement::Player;
use crate::physics::{
    BodySize, GravityProfiles, Motion, PlatformLayout, Position, resolve_vertical,
};

/// Everything needed to tear down the current level and build another.
#[derive(SystemParam)]
pub(crate) struct LevelLoader<'w, 's> {
    commands: Commands<'w, 's>,
    registry: Res<'w, LevelRegistry>,
    settings: Res<'w, GameSettings>,
    gravity: Res<'w, GravityProfiles>,
    enemy_tuning: Res<'w, EnemyTuning>,
    projectile_tuning: Res<'w, ProjectileTuning>,
    layout: ResMut<'w, PlatformLayout>,
    pub status: ResMut<'w, LevelStatus>,
    entities: Query<'w, 's, Entity, With<LevelEntity>>,
    started: MessageWriter<'w, LevelStartedEvent>,
}

impl LevelLoader<'_, '_> {
    pub fn next_index(&self, index: usize) -> Option<usize> {
        self.registry.next_index(index)
    }

    pub fn unload(&mut self) {
        for entity in self.entities.iter() {
            self.commands.entity(entity).despawn();
        }
        self.layout.clear();
    }

    /// Spawns level `index` with a fresh status. Returns false if no such
    /// level is configured.
    pub fn load(&mut self, index: usize) -> bool {
        let Some(level) = self.registry.get(index) else {
            error!(
                "Level {} requested but only {} configured",
                index + 1,
                self.registry.len()
            );
            return false;
        };

        let tuning = SpawnTuning {
            settings: &self.settings,
            gravity: &self.gravity,
            enemy: &self.enemy_tuning,
            projectile: &self.projectile_tuning,
        };
        *self.layout = spawn_level(&mut self.commands, level, &tuning);
        *self.status = LevelStatus::new(index);
        self.started.write(LevelStartedEvent {
            index,
            level_id: level.id.clone(),
        });
        true
    }

    /// Recomputes the remaining time of the freshly loaded level.
    pub fn refresh_clock(&mut self, frame: u32) {
        self.status.update_clock(
            frame,
            self.settings.max_frames,
            self.settings.frames_per_second,
        );
    }
}

/// Run condition for the simulation sets: false once the timer has run out.
pub(crate) fn level_in_progress(status: Res<LevelStatus>) -> bool {
    !status.timed_out()
}

pub(crate) fn enter_play(active: Res<ActiveLevel>, clock: Res<FrameClock>, mut loader: LevelLoader) {
    if loader.load(active.index) {
        loader.refresh_clock(clock.frame);
    }
}

pub(crate) fn exit_play(mut loader: LevelLoader) {
    loader.unload();
}

/// Advances the frame counter and refreshes the remaining time.
pub(crate) fn tick_clock(
    mut clock: ResMut<FrameClock>,
    settings: Res<GameSettings>,
    mut status: ResMut<LevelStatus>,
) {
    let frame = clock.advance();
    if status.update_clock(frame, settings.max_frames, settings.frames_per_second) {
        info!("Time up at frame {}", frame);
    }
}

/// Gravity for barrels, ladders and the boss. Monkeys fall inside their own
/// driver and the player inside the player step.
pub(crate) fn apply_level_gravity(
    layout: Res<PlatformLayout>,
    mut bodies: Query<
        (&mut Position, &BodySize, &mut Motion, Option<&Destructible>),
        (Without<Player>, Without<Monkey>),
    >,
) {
    let platforms = layout.as_slice();
    for (mut position, size, mut motion, destructible) in &mut bodies {
        if destructible.is_some_and(|d| d.destroyed) {
            continue;
        }
        resolve_vertical(&mut motion, &mut position.0, size.0, platforms);
    }
}

/// End of tick: time-up beats completion, completion beats a fatal contact.
pub(crate) fn resolve_level_outcome(
    clock: Res<FrameClock>,
    scoring: Res<ScoringTuning>,
    mut loader: LevelLoader,
    mut run_score: ResMut<RunScore>,
    mut active: ResMut<ActiveLevel>,
    mut next_state: ResMut<NextState<GameState>>,
    mut advanced: MessageWriter<LevelAdvancedEvent>,
    mut game_over: MessageWriter<GameOverEvent>,
    mut won: MessageWriter<RunWonEvent>,
) {
    let status = loader.status.clone();

    if status.timed_out() {
        run_score.reset();
        next_state.set(GameState::GameOver);
        game_over.write(GameOverEvent {
            cause: GameOverCause::TimeUp,
            frame: clock.frame,
        });
        return;
    }

    if status.completed {
        match loader.next_index(status.index) {
            Some(next) => {
                run_score.bank(status.score);
                active.index = next;
                loader.unload();
                if loader.load(next) {
                    loader.refresh_clock(clock.frame);
                }
                advanced.write(LevelAdvancedEvent {
                    from: status.index,
                    to: next,
                    carried_score: run_score.cumulative,
                });
            }
            None => {
                let time_bonus = status.time_bonus(scoring.time_bonus_multiplier);
                loader.status.award(time_bonus);
                run_score.bank(status.score + time_bonus);
                next_state.set(GameState::Win);
                won.write(RunWonEvent {
                    final_score: run_score.cumulative,
                    time_bonus,
                });
            }
        }
        return;
    }

    if let Some(cause) = status.failure {
        run_score.reset();
        next_state.set(GameState::GameOver);
        game_over.write(GameOverEvent {
            cause,
            frame: clock.frame,
        });
    }
}
