//! Error types for assertion generator configuration.

use std::path::PathBuf;
use thiserror::Error;

/// Configuration-time errors.
///
/// Every variant is deterministic: the same build description always fails the
/// same way, so nothing here is retried.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid configuration value '{token}': expected one of [{}]", valid.join(", "))]
    InvalidConfiguration { token: String, valid: Vec<String> },

    #[error("Unknown template '{key}': expected one of [{}]", known.join(", "))]
    InvalidTemplate { key: String, known: Vec<String> },

    #[error("Cannot substitute unit placeholder in '{template}' for unit '{unit}'")]
    UnresolvedPlaceholder { template: String, unit: String },

    #[error("Invalid name pattern '{pattern}': {reason}")]
    InvalidPattern { pattern: String, reason: String },

    #[error("Unknown unit: {0}")]
    UnknownUnit(String),

    #[error("Failed to load build description: {0}")]
    Load(String),

    #[error("Failed to read template file {path:?}: {source}")]
    TemplateRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Logging setup failed: {0}")]
    InvalidLogging(String),

    #[error("Failed to render output: {0}")]
    Render(#[from] serde_json::Error),
}

impl From<config::ConfigError> for ConfigError {
    fn from(err: config::ConfigError) -> Self {
        ConfigError::Load(err.to_string())
    }
}

/// Errors reported by an external assertion generator.
#[derive(Debug, Error)]
pub enum GeneratorError {
    #[error("Generation failed for unit '{unit}': {message}")]
    Failed { unit: String, message: String },

    #[error("Generator I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}
