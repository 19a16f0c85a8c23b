//! Loader for RON content files at startup.

use ron::Options;
use std::fs;
use std::path::Path;

use super::data::*;
use super::registry::LevelRegistry;

pub const SETTINGS_FILE: &str = "settings.ron";
pub const LEVELS_FILE: &str = "levels.ron";

/// Error type for content loading failures.
#[derive(Debug)]
pub struct ContentLoadError {
    pub file: String,
    pub message: String,
}

impl std::fmt::Display for ContentLoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Failed to load {}: {}", self.file, self.message)
    }
}

/// Everything the game needs from disk before the first frame.
#[derive(Debug, Clone)]
pub struct GameContent {
    pub settings: GameSettings,
    pub levels: LevelRegistry,
}

/// Create RON options with extensions enabled for more flexible parsing.
fn ron_options() -> Options {
    Options::default().with_default_extension(ron::extensions::Extensions::IMPLICIT_SOME)
}

fn read_file(path: &Path) -> Result<String, ContentLoadError> {
    fs::read_to_string(path).map_err(|e| ContentLoadError {
        file: path.display().to_string(),
        message: format!("IO error: {}", e),
    })
}

/// Parse a RON document containing a DataFile<T> wrapper.
pub fn parse_data_file<T>(file_name: &str, contents: &str) -> Result<Vec<T>, ContentLoadError>
where
    T: for<'de> serde::Deserialize<'de>,
{
    let data: DataFile<T> = ron_options()
        .from_str(contents)
        .map_err(|e| ContentLoadError {
            file: file_name.to_string(),
            message: format!("Parse error: {}", e),
        })?;

    Ok(data.items)
}

/// Parse a single RON struct (not wrapped in DataFile).
pub fn parse_single<T>(file_name: &str, contents: &str) -> Result<T, ContentLoadError>
where
    T: for<'de> serde::Deserialize<'de>,
{
    ron_options()
        .from_str(contents)
        .map_err(|e| ContentLoadError {
            file: file_name.to_string(),
            message: format!("Parse error: {}", e),
        })
}

/// Load settings.ron and levels.ron from `base_path`.
/// Returns every file that failed, not only the first.
pub fn load_game_content(base_path: &Path) -> Result<GameContent, Vec<ContentLoadError>> {
    let mut errors = Vec::new();

    let settings_path = base_path.join(SETTINGS_FILE);
    let settings = read_file(&settings_path)
        .and_then(|text| parse_single::<GameSettings>(&settings_path.display().to_string(), &text));

    let levels_path = base_path.join(LEVELS_FILE);
    let levels = read_file(&levels_path)
        .and_then(|text| parse_data_file::<LevelDef>(&levels_path.display().to_string(), &text));

    let settings = settings.map_err(|e| errors.push(e)).ok();
    let levels = levels.map_err(|e| errors.push(e)).ok();

    match (settings, levels) {
        (Some(settings), Some(levels)) => Ok(GameContent {
            settings,
            levels: LevelRegistry::new(levels),
        }),
        _ => Err(errors),
    }
}
