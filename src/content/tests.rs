//! Content domain: tests for parsing and validating the shipped RON files.

use super::*;
use crate::physics::Facing;

const SETTINGS_RON: &str = include_str!("../../assets/data/settings.ron");
const LEVELS_RON: &str = include_str!("../../assets/data/levels.ron");

fn shipped_content() -> GameContent {
    let settings = parse_single::<GameSettings>(SETTINGS_FILE, SETTINGS_RON)
        .expect("settings.ron should parse");
    let levels =
        parse_data_file::<LevelDef>(LEVELS_FILE, LEVELS_RON).expect("levels.ron should parse");
    GameContent {
        settings,
        levels: LevelRegistry::new(levels),
    }
}

#[test]
fn test_shipped_content_is_valid() {
    let content = shipped_content();
    let errors = validate_content(&content);
    assert!(
        errors.is_empty(),
        "unexpected errors: {:?}",
        errors.iter().map(ToString::to_string).collect::<Vec<_>>()
    );
}

#[test]
fn test_shipped_levels_keep_file_order() {
    let content = shipped_content();
    assert_eq!(content.levels.len(), 2);
    assert_eq!(content.levels.get(0).map(|l| l.id.as_str()), Some("girders"));
    assert_eq!(content.levels.get(1).map(|l| l.id.as_str()), Some("jungle"));
    assert_eq!(content.levels.next_index(0), Some(1));
    assert_eq!(content.levels.next_index(1), None);
}

#[test]
fn test_first_level_has_no_ranged_weapons() {
    let content = shipped_content();
    let first = content.levels.get(0).expect("first level");
    assert!(!first.has_ranged_weapons());
    assert!(first.monkeys.is_empty());

    let second = content.levels.get(1).expect("second level");
    assert!(second.has_ranged_weapons());
    assert!(second.monkeys.iter().any(|m| m.kind == MonkeyKind::Smart));
}

#[test]
fn test_optional_level_lists_default_to_empty() {
    let text = r#"(
        schema_version: 1,
        items: [
            (id: "bare", name: "Bare", player: (10.0, 10.0), boss: (50.0, 10.0),
             platforms: [(64.0, 100.0)]),
        ],
    )"#;
    let levels = parse_data_file::<LevelDef>("inline", text).expect("should parse");
    assert_eq!(levels.len(), 1);
    assert!(levels[0].ladders.is_empty());
    assert!(levels[0].monkeys.is_empty());
}

#[test]
fn test_monkey_facing_parses() {
    let text = r#"(
        schema_version: 1,
        items: [
            (id: "m", name: "M", player: (10.0, 10.0), boss: (50.0, 10.0),
             platforms: [(64.0, 100.0)],
             monkeys: [(kind: Normal, position: (60.0, 70.0), facing: Left, route: [10.0])]),
        ],
    )"#;
    let levels = parse_data_file::<LevelDef>("inline", text).expect("should parse");
    assert_eq!(levels[0].monkeys[0].facing, Facing::Left);
}

#[test]
fn test_parse_error_names_the_file() {
    let err = parse_single::<GameSettings>("broken.ron", "(schema_version: ")
        .expect_err("truncated file must fail");
    assert_eq!(err.file, "broken.ron");
    assert!(err.to_string().starts_with("Failed to load broken.ron"));
}

#[test]
fn test_missing_directory_reports_both_files() {
    let errors = load_game_content(std::path::Path::new("does/not/exist"))
        .expect_err("missing files must fail");
    assert_eq!(errors.len(), 2);
}

#[test]
fn test_validation_rejects_empty_route_and_zero_budget() {
    let mut content = shipped_content();
    content.settings.max_frames = 0;
    content.levels.levels[1].monkeys[0].route.clear();

    let errors = validate_content(&content);
    assert!(errors.iter().any(|e| e.field == "max_frames"));
    assert!(errors.iter().any(|e| e.field == "monkeys[0].route"));
}

#[test]
fn test_validation_rejects_duplicate_level_ids() {
    let mut content = shipped_content();
    let copy = content.levels.levels[0].clone();
    content.levels.levels.push(copy);

    let errors = validate_content(&content);
    assert!(errors.iter().any(|e| e.field == "id" && e.source_id == "girders"));
}

#[test]
fn test_validation_rejects_non_positive_sizes() {
    let mut content = shipped_content();
    content.settings.sprites.barrel = (0.0, 30.0);

    let errors = validate_settings(&content.settings);
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].field, "sprites.barrel");
}

#[test]
fn test_coords_convert_to_vectors() {
    use crate::content::vec2;
    assert_eq!(vec2((60.0, 718.0)), bevy::math::Vec2::new(60.0, 718.0));
}
