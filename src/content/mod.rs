//! Content domain: data-driven movement tuning loaded at startup.

use bevy::prelude::*;
use std::path::PathBuf;

mod loader;
mod validation;

#[cfg(test)]
mod tests;

pub use loader::{ContentLoadError, load_movement_tuning, parse_tuning_json, parse_tuning_ron};
pub use validation::{TuningWarning, validate_tuning};

use crate::movement::MovementTuning;

/// Inserts [`MovementTuning`] read from `path`, falling back to defaults
/// when the file is missing or malformed.
pub struct ContentPlugin {
    pub path: PathBuf,
}

impl Default for ContentPlugin {
    fn default() -> Self {
        Self {
            path: PathBuf::from("assets/data/movement.ron"),
        }
    }
}

impl Plugin for ContentPlugin {
    fn build(&self, app: &mut App) {
        let tuning = match load_movement_tuning(&self.path) {
            Ok(tuning) => {
                info!("Loaded movement tuning from {}", self.path.display());
                tuning
            }
            Err(e) => {
                warn!("{}; using default movement tuning", e);
                MovementTuning::default()
            }
        };

        for warning in validate_tuning(&tuning) {
            warn!("{}", warning);
        }

        app.insert_resource(tuning);
    }
}
