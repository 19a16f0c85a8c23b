//! Validation for loaded settings and level layouts.

use std::collections::HashSet;

use super::data::*;
use super::loader::GameContent;

/// A validation error with context about what failed.
#[derive(Debug)]
pub struct ValidationError {
    pub source_type: &'static str,
    pub source_id: String,
    pub field: String,
    pub problem: String,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} '{}' has invalid field '{}': {}",
            self.source_type, self.source_id, self.field, self.problem
        )
    }
}

/// Helper macro for pushing an error when a condition fails
macro_rules! require {
    ($errors:expr, $cond:expr, $source_type:expr, $source_id:expr, $field:expr, $problem:expr) => {
        if !$cond {
            $errors.push(ValidationError {
                source_type: $source_type,
                source_id: $source_id.to_string(),
                field: $field.to_string(),
                problem: $problem.to_string(),
            });
        }
    };
}

fn positive_size(size: Coord) -> bool {
    size.0 > 0.0 && size.1 > 0.0
}

/// Validate settings and every level.
/// Returns a list of validation errors, empty if the content is usable.
pub fn validate_content(content: &GameContent) -> Vec<ValidationError> {
    let mut errors = validate_settings(&content.settings);

    require!(
        errors,
        !content.levels.is_empty(),
        "Levels",
        "levels.ron",
        "items",
        "at least one level is required"
    );

    let mut seen_ids = HashSet::new();
    for level in &content.levels.levels {
        require!(
            errors,
            seen_ids.insert(level.id.clone()),
            "Level",
            level.id,
            "id",
            "duplicate level id"
        );
        errors.extend(validate_level(level));
    }

    errors
}

pub fn validate_settings(settings: &GameSettings) -> Vec<ValidationError> {
    let mut errors = Vec::new();
    let id = "settings.ron";

    require!(
        errors,
        settings.window.width > 0.0 && settings.window.height > 0.0,
        "Settings",
        id,
        "window",
        "play-field size must be positive"
    );
    require!(
        errors,
        settings.frames_per_second > 0,
        "Settings",
        id,
        "frames_per_second",
        "must be greater than zero"
    );
    require!(
        errors,
        settings.max_frames > 0,
        "Settings",
        id,
        "max_frames",
        "must be greater than zero"
    );

    let sizes = &settings.sprites;
    let named = [
        ("sprites.player.unarmed", sizes.player.unarmed),
        ("sprites.player.hammer", sizes.player.hammer),
        ("sprites.player.blaster", sizes.player.blaster),
        ("sprites.platform", sizes.platform),
        ("sprites.ladder", sizes.ladder),
        ("sprites.barrel", sizes.barrel),
        ("sprites.hammer", sizes.hammer),
        ("sprites.blaster", sizes.blaster),
        ("sprites.boss", sizes.boss),
        ("sprites.monkey", sizes.monkey),
        ("sprites.smart_monkey", sizes.smart_monkey),
        ("sprites.bullet", sizes.bullet),
        ("sprites.banana", sizes.banana),
    ];
    for (field, size) in named {
        require!(
            errors,
            positive_size(size),
            "Settings",
            id,
            field,
            "width and height must be positive"
        );
    }

    errors
}

pub fn validate_level(level: &LevelDef) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    require!(
        errors,
        !level.platforms.is_empty(),
        "Level",
        level.id,
        "platforms",
        "a level needs at least one platform"
    );

    for (index, monkey) in level.monkeys.iter().enumerate() {
        let field = format!("monkeys[{}].route", index);
        require!(
            errors,
            !monkey.route.is_empty(),
            "Level",
            level.id,
            field,
            "route must have at least one step"
        );
        require!(
            errors,
            monkey.route.iter().all(|step| step.is_finite() && *step >= 0.0),
            "Level",
            level.id,
            field,
            "route steps must be finite and non-negative"
        );
    }

    errors
}
