//! Error types for semroute core

use crate::validator::ValidationError;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for route operations
pub type Result<T> = std::result::Result<T, RouteError>;

/// Errors that can occur while building, validating or persisting routes
#[derive(Error, Debug)]
pub enum RouteError {
    /// Malformed input handed to the schema extractor
    #[error("Schema error: {0}")]
    Schema(String),

    /// Route payload failed structural validation
    #[error("Invalid route config: {0}")]
    InvalidConfig(#[from] ValidationError),

    /// File extension is not one of .json, .yaml or .yml
    #[error("Unsupported file type: {path} (only .json, .yaml and .yml are supported)")]
    UnsupportedFileType { path: PathBuf },

    /// No route with the requested name
    #[error("Route `{name}` not found")]
    RouteNotFound { name: String },

    /// I/O error occurred
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// YAML serialization error
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}
