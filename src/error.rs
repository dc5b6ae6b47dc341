//! Custom error types for configuration loading.

use std::fmt;

/// An error that can occur while resolving or loading a CSV configuration.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// No preset is registered under the given name.
    UnknownPreset(String),
    /// The configuration document is not valid JSON or has mistyped fields.
    InvalidJson(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::UnknownPreset(name) => write!(f, "Unknown configuration preset: {}", name),
            ConfigError::InvalidJson(msg) => write!(f, "Invalid configuration: {}", msg),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<serde_json::Error> for ConfigError {
    fn from(err: serde_json::Error) -> Self {
        ConfigError::InvalidJson(err.to_string())
    }
}
