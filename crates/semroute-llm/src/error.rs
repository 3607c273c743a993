//! Error types for semroute LLM module

use crate::generator::SynthesisStage;
use semroute_core::{RouteError, ValidationError};
use thiserror::Error;

/// Result type alias for LLM operations
pub type Result<T> = std::result::Result<T, LLMError>;

/// LLM module errors
#[derive(Debug, Error)]
pub enum LLMError {
    /// External API call failed
    #[error("External API call failed: {0}")]
    ApiCallFailed(String),

    /// Invalid configuration
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// Serialization/deserialization error
    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    /// HTTP request error
    #[error("HTTP request error: {0}")]
    HttpError(#[from] reqwest::Error),

    /// Invalid response format
    #[error("Invalid response format: {0}")]
    InvalidResponse(String),

    /// The completion endpoint returned no content
    #[error("No output generated by the completion endpoint")]
    EmptyCompletion,

    /// Model output lacks a `<config>...</config>` block
    #[error("No <config></config> tags found in the output")]
    MissingConfigTags,

    /// Extracted payload failed structural validation
    #[error("Generated route config is invalid: {0}")]
    InvalidConfig(#[from] ValidationError),

    /// Route construction or schema extraction failed
    #[error("Route error: {0}")]
    Route(#[from] RouteError),
}

impl LLMError {
    /// Synthesis stage at which this error ended the attempt
    ///
    /// `None` for errors that are not tied to a pipeline stage, such as
    /// transport or configuration failures.
    pub fn failed_stage(&self) -> Option<SynthesisStage> {
        match self {
            LLMError::EmptyCompletion => Some(SynthesisStage::CompletionReceived),
            LLMError::MissingConfigTags => Some(SynthesisStage::ConfigExtracted),
            LLMError::InvalidConfig(_) | LLMError::Route(RouteError::InvalidConfig(_)) => {
                Some(SynthesisStage::Validated)
            }
            _ => None,
        }
    }
}
