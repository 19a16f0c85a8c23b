//! Core domain: per-frame input snapshot sampled from the keyboard.

use bevy::prelude::*;

/// Held directions plus the discrete presses of this frame.
///
/// Edge fields are cleared at the end of every frame, so a press is seen by
/// exactly one simulation tick.
#[derive(Resource, Debug, Default, Clone, PartialEq)]
pub struct FrameInput {
    pub left: bool,
    pub right: bool,
    pub up: bool,
    pub down: bool,
    pub jump_pressed: bool,
    pub shoot_pressed: bool,
    /// Starts the first level from HOME.
    pub confirm_pressed: bool,
    /// Leaves an end screen for HOME.
    pub reset_pressed: bool,
    pub quit_pressed: bool,
    /// Zero-based level index picked with the number row.
    pub level_select: Option<usize>,
}

impl FrameInput {
    pub fn clear_edges(&mut self) {
        self.jump_pressed = false;
        self.shoot_pressed = false;
        self.confirm_pressed = false;
        self.reset_pressed = false;
        self.quit_pressed = false;
        self.level_select = None;
    }
}

const LEVEL_KEYS: [(KeyCode, KeyCode); 9] = [
    (KeyCode::Digit1, KeyCode::Numpad1),
    (KeyCode::Digit2, KeyCode::Numpad2),
    (KeyCode::Digit3, KeyCode::Numpad3),
    (KeyCode::Digit4, KeyCode::Numpad4),
    (KeyCode::Digit5, KeyCode::Numpad5),
    (KeyCode::Digit6, KeyCode::Numpad6),
    (KeyCode::Digit7, KeyCode::Numpad7),
    (KeyCode::Digit8, KeyCode::Numpad8),
    (KeyCode::Digit9, KeyCode::Numpad9),
];

/// Headless apps have no keyboard; the snapshot is then left for tests to fill.
pub(crate) fn read_input(
    keyboard: Option<Res<ButtonInput<KeyCode>>>,
    mut input: ResMut<FrameInput>,
) {
    let Some(keyboard) = keyboard else {
        return;
    };

    input.left = keyboard.pressed(KeyCode::ArrowLeft);
    input.right = keyboard.pressed(KeyCode::ArrowRight);
    input.up = keyboard.pressed(KeyCode::ArrowUp);
    input.down = keyboard.pressed(KeyCode::ArrowDown);

    input.jump_pressed = keyboard.just_pressed(KeyCode::Space);
    input.reset_pressed = keyboard.just_pressed(KeyCode::Space);
    input.shoot_pressed = keyboard.just_pressed(KeyCode::KeyS);
    input.confirm_pressed =
        keyboard.just_pressed(KeyCode::Enter) || keyboard.just_pressed(KeyCode::NumpadEnter);
    input.quit_pressed = keyboard.just_pressed(KeyCode::Escape);
    input.level_select = LEVEL_KEYS
        .iter()
        .position(|(digit, numpad)| keyboard.just_pressed(*digit) || keyboard.just_pressed(*numpad));
}

pub(crate) fn clear_input_edges(mut input: ResMut<FrameInput>) {
    input.clear_edges();
}
