//! Loader for the RON movement stats file.

use ron::Options;
use std::fs;
use std::path::Path;

use crate::movement::MovementStats;

/// Error type for stats loading failures.
#[derive(Debug)]
pub struct StatsLoadError {
    pub file: String,
    pub message: String,
}

impl std::fmt::Display for StatsLoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Failed to load {}: {}", self.file, self.message)
    }
}

impl std::error::Error for StatsLoadError {}

/// Create RON options with extensions enabled for more flexible parsing.
fn ron_options() -> Options {
    Options::default().with_default_extension(ron::extensions::Extensions::IMPLICIT_SOME)
}

/// Parse stats from RON text. `file_name` is only used for error context.
pub fn parse_stats(contents: &str, file_name: &str) -> Result<MovementStats, StatsLoadError> {
    ron_options()
        .from_str(contents)
        .map_err(|e| StatsLoadError {
            file: file_name.to_string(),
            message: format!("Parse error: {}", e),
        })
}

/// Read and parse a stats file.
pub fn load_stats_file(path: &Path) -> Result<MovementStats, StatsLoadError> {
    let file_name = path.display().to_string();
    let contents = fs::read_to_string(path).map_err(|e| StatsLoadError {
        file: file_name.clone(),
        message: format!("IO error: {}", e),
    })?;

    parse_stats(&contents, &file_name)
}
