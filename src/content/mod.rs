//! Content domain: loading and validating movement stats at startup.

mod loader;
mod validation;

#[cfg(test)]
mod tests;

use bevy::prelude::*;
use std::path::Path;

use crate::content::loader::{StatsLoadError, load_stats_file};
use crate::content::validation::{StatsValidationError, validate_stats};
use crate::movement::MovementStats;

/// Location of the movement stats file, relative to the working directory.
pub const STATS_PATH: &str = "assets/data/movement_stats.ron";

/// Anything that stops a stats file from being used.
#[derive(Debug)]
pub enum StatsError {
    Load(StatsLoadError),
    Invalid(StatsValidationError),
}

impl std::fmt::Display for StatsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StatsError::Load(e) => write!(f, "{}", e),
            StatsError::Invalid(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for StatsError {}

/// Load and validate stats, returning every problem found.
pub fn load_movement_stats(path: &Path) -> Result<MovementStats, Vec<StatsError>> {
    let stats = load_stats_file(path).map_err(|e| vec![StatsError::Load(e)])?;

    let errors = validate_stats(&stats);
    if errors.is_empty() {
        Ok(stats)
    } else {
        Err(errors.into_iter().map(StatsError::Invalid).collect())
    }
}

pub struct ContentPlugin;

impl Plugin for ContentPlugin {
    fn build(&self, app: &mut App) {
        // The pipeline cannot compute anything without stats: refuse to start.
        let stats = match load_movement_stats(Path::new(STATS_PATH)) {
            Ok(stats) => stats,
            Err(errors) => {
                for error in &errors {
                    error!("{}", error);
                }
                panic!(
                    "Movement stats at '{}' are unusable ({} error(s)); see log above",
                    STATS_PATH,
                    errors.len()
                );
            }
        };

        info!("MovementStats loaded: {}", stats.summary());
        app.insert_resource(stats);

        #[cfg(feature = "dev-tools")]
        app.add_systems(Update, reload_stats_on_key);
    }
}

/// Re-read the stats file on F5. Bad files are logged and the current stats kept.
#[cfg(feature = "dev-tools")]
fn reload_stats_on_key(keyboard: Res<ButtonInput<KeyCode>>, mut stats: ResMut<MovementStats>) {
    if !keyboard.just_pressed(KeyCode::F5) {
        return;
    }

    match load_movement_stats(Path::new(STATS_PATH)) {
        Ok(reloaded) => {
            info!("MovementStats reloaded: {}", reloaded.summary());
            *stats = reloaded;
        }
        Err(errors) => {
            for error in &errors {
                warn!("Stats reload rejected: {}", error);
            }
        }
    }
}
