//! CLI output: error mapping from domain errors to stable CLI surface.

use crate::error::ConfigError;

/// Map configuration errors to a string for CLI output.
pub fn map_error(e: &ConfigError) -> String {
    format!("error: {}", e)
}
