//! LevelRegistry resource holding the configured levels in play order.

use bevy::prelude::*;

use super::data::*;

/// Levels in the order they are played. Index 0 is the first level.
#[derive(Resource, Debug, Clone, Default)]
pub struct LevelRegistry {
    pub levels: Vec<LevelDef>,
}

impl LevelRegistry {
    pub fn new(levels: Vec<LevelDef>) -> Self {
        Self { levels }
    }

    pub fn len(&self) -> usize {
        self.levels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&LevelDef> {
        self.levels.get(index)
    }

    /// Index of the level that follows `index`, if any.
    pub fn next_index(&self, index: usize) -> Option<usize> {
        let next = index + 1;
        (next < self.levels.len()).then_some(next)
    }

    /// Returns a summary of loaded content counts for logging.
    pub fn summary(&self) -> String {
        let mut out = format!("LevelRegistry loaded {} level(s):", self.levels.len());
        for (index, level) in self.levels.iter().enumerate() {
            out.push_str(&format!(
                "\n - {} '{}': {} platforms, {} ladders, {} barrels, {} hammers, {} blasters, {} monkeys",
                index + 1,
                level.id,
                level.platforms.len(),
                level.ladders.len(),
                level.barrels.len(),
                level.hammers.len(),
                level.blasters.len(),
                level.monkeys.len(),
            ));
        }
        out
    }
}
