//! Starfield error handling
//!
//! All fallible work happens once at startup (configuration, mounting). The per-frame
//! path never returns errors.

use std::path::PathBuf;

/// Result type for starfield operations
pub type StarfieldResult<T> = Result<T, StarfieldError>;

/// Errors that abort starfield initialization
#[derive(Debug, thiserror::Error)]
pub enum StarfieldError {
    #[error("Failed to read config {path}: {source}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse JSON config: {0}")]
    ConfigJson(#[from] serde_json::Error),

    #[error("Failed to parse TOML config: {0}")]
    ConfigToml(#[from] toml::de::Error),

    #[error("Unsupported config format: {0}")]
    UnsupportedConfigFormat(PathBuf),

    #[error("Invalid configuration: {field}: {reason}")]
    InvalidConfig { field: &'static str, reason: String },

    #[error("Missing mount element: #{0}")]
    MissingMount(String),

    #[error("JavaScript error: {0}")]
    JsError(String),
}

/// Create an invalid configuration error
pub fn invalid_config(field: &'static str, reason: impl Into<String>) -> StarfieldError {
    StarfieldError::InvalidConfig {
        field,
        reason: reason.into(),
    }
}
