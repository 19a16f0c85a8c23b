//! UI domain: the numbers the HUD shows, gathered once per frame.

use bevy::prelude::*;

use crate::combat::{Boss, Health, Loadout};
use crate::content::LevelRegistry;
use crate::core::RunScore;
use crate::level::LevelStatus;
use crate::movement::Player;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HudReadout {
    /// Banked score plus what this level has earned so far.
    pub score: u32,
    pub time_left: i32,
    pub boss_health: u32,
    /// Only levels that hand out blasters show a bullet count.
    pub bullets: Option<u32>,
}

impl HudReadout {
    pub fn score_line(&self) -> String {
        format!("SCORE {}", self.score)
    }

    pub fn time_line(&self) -> String {
        format!("TIME LEFT {}", self.time_left)
    }

    pub fn boss_line(&self) -> String {
        format!("BOSS HEALTH {}", self.boss_health)
    }

    pub fn bullet_line(&self) -> Option<String> {
        self.bullets.map(|count| format!("BULLETS {}", count))
    }
}

pub(crate) fn gather_readout(
    run_score: &RunScore,
    status: &LevelStatus,
    registry: &LevelRegistry,
    boss_health: Option<&Health>,
    loadout: Option<&Loadout>,
) -> HudReadout {
    let ranged = registry
        .get(status.index)
        .is_some_and(|level| level.has_ranged_weapons());

    HudReadout {
        score: run_score.cumulative + status.score,
        time_left: status.remaining_time,
        boss_health: boss_health.map_or(0, |health| health.current),
        bullets: ranged.then(|| loadout.map_or(0, |loadout| loadout.ammo)),
    }
}

/// Rebuilt each frame in PLAY before the HUD text is refreshed.
#[derive(Resource, Debug, Default)]
pub struct CurrentReadout(pub HudReadout);

pub(crate) fn refresh_readout(
    run_score: Res<RunScore>,
    status: Res<LevelStatus>,
    registry: Res<LevelRegistry>,
    boss: Query<&Health, With<Boss>>,
    player: Query<&Loadout, With<Player>>,
    mut current: ResMut<CurrentReadout>,
) {
    let readout = gather_readout(
        &run_score,
        &status,
        &registry,
        boss.iter().next(),
        player.iter().next(),
    );
    if current.0 != readout {
        current.0 = readout;
    }
}
