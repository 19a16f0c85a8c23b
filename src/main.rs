use std::path::Path;
use std::process::ExitCode;

use bevy::prelude::*;

use barrel_climb::configure_full;
use barrel_climb::content::{CONTENT_DIR, load_game_content, validate_content};

fn main() -> ExitCode {
    let content = match load_game_content(Path::new(CONTENT_DIR)) {
        Ok(content) => content,
        Err(errors) => {
            for error in &errors {
                eprintln!("{}", error);
            }
            return ExitCode::FAILURE;
        }
    };

    let problems = validate_content(&content);
    if !problems.is_empty() {
        for problem in &problems {
            eprintln!("{}", problem);
        }
        eprintln!("{} content problem(s); refusing to start", problems.len());
        return ExitCode::FAILURE;
    }

    let mut app = App::new();
    configure_full(&mut app, content);
    match app.run() {
        AppExit::Success => ExitCode::SUCCESS,
        AppExit::Error(code) => ExitCode::from(code.get()),
    }
}
