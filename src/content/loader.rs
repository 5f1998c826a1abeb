//! Loader for movement tuning files.

use ron::Options;
use std::fs;
use std::path::Path;

use crate::movement::MovementTuning;

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

impl std::error::Error for ContentLoadError {}

/// Create RON options with extensions enabled for more flexible parsing.
fn ron_options() -> Options {
    Options::default().with_default_extension(ron::extensions::Extensions::IMPLICIT_SOME)
}

/// Parse tuning from RON text. Missing fields keep their defaults.
pub fn parse_tuning_ron(source: &str, contents: &str) -> Result<MovementTuning, ContentLoadError> {
    ron_options()
        .from_str(contents)
        .map_err(|e| ContentLoadError {
            file: source.to_string(),
            message: format!("Parse error: {}", e),
        })
}

/// Parse tuning from JSON text. Missing fields keep their defaults.
pub fn parse_tuning_json(
    source: &str,
    contents: &str,
) -> Result<MovementTuning, ContentLoadError> {
    serde_json::from_str(contents).map_err(|e| ContentLoadError {
        file: source.to_string(),
        message: format!("Parse error: {}", e),
    })
}

/// Load a tuning file, choosing the format from its extension.
/// `.json` is parsed as JSON, everything else as RON.
pub fn load_movement_tuning(path: &Path) -> Result<MovementTuning, ContentLoadError> {
    let file_name = path.display().to_string();
    let contents = fs::read_to_string(path).map_err(|e| ContentLoadError {
        file: file_name.clone(),
        message: format!("IO error: {}", e),
    })?;

    match path.extension().and_then(|ext| ext.to_str()) {
        Some("json") => parse_tuning_json(&file_name, &contents),
        _ => parse_tuning_ron(&file_name, &contents),
    }
}
