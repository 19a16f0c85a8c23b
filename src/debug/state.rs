//! Debug domain: overlay toggles.

use bevy::prelude::*;

/// Resource tracking which debug overlays are on
#[derive(Resource, Debug, Default)]
pub struct DebugState {
    /// Outline every collision box (F3)
    pub show_hitboxes: bool,
    /// Player state readout (F4)
    pub show_info: bool,
}

impl DebugState {
    pub fn toggle_hitboxes(&mut self) -> bool {
        self.show_hitboxes = !self.show_hitboxes;
        self.show_hitboxes
    }

    pub fn toggle_info(&mut self) -> bool {
        self.show_info = !self.show_info;
        self.show_info
    }
}
