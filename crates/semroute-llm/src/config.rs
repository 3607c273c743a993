//! Completion endpoint configuration
//!
//! Describes where the OpenAI-compatible chat completion endpoint lives and
//! how to authenticate against it. The API key normally comes from the
//! process environment.

use serde::{Deserialize, Serialize};

/// Default endpoint (OpenRouter, OpenAI-compatible)
pub const DEFAULT_BASE_URL: &str = "https://openrouter.ai/api/v1";

/// Environment variable holding the API key
pub const API_KEY_ENV: &str = "OPENROUTER_API_KEY";

/// Environment variable overriding the base URL
pub const BASE_URL_ENV: &str = "OPENROUTER_BASE_URL";

/// Completion endpoint configuration
///
/// # Examples
///
/// ```rust
/// use semroute_llm::ProviderConfig;
///
/// let config = ProviderConfig::new("sk-or-test")
///     .with_base_url("https://api.openai.com/v1");
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProviderConfig {
    /// Base URL; `/chat/completions` is appended
    pub base_url: String,

    /// Bearer token
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            api_key: None,
        }
    }
}

impl ProviderConfig {
    /// Configuration for the default endpoint with the given key
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            api_key: Some(api_key.into()),
        }
    }

    /// Read `OPENROUTER_API_KEY` and `OPENROUTER_BASE_URL` from the environment
    ///
    /// Missing variables are left unset; call [`ProviderConfig::validate`]
    /// to find out whether the result is usable.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let base_url = lookup(BASE_URL_ENV)
            .filter(|url| !url.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        Self {
            base_url,
            api_key: lookup(API_KEY_ENV),
        }
    }

    /// Set the base URL
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Set the API key
    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    /// Chat completion URL for this endpoint
    pub fn completions_url(&self) -> String {
        format!("{}/chat/completions", self.base_url.trim_end_matches('/'))
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.base_url.trim().is_empty() {
            return Err(ConfigError::MissingField {
                field: "base_url".to_string(),
            });
        }
        match self.api_key.as_deref() {
            Some(key) if !key.trim().is_empty() => Ok(()),
            _ => Err(ConfigError::MissingField {
                field: "api_key".to_string(),
            }),
        }
    }
}

/// Configuration error
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// A required field is missing or empty
    MissingField { field: String },
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::MissingField { field } if field == "api_key" => {
                write!(f, "api_key is not set (export {})", API_KEY_ENV)
            }
            ConfigError::MissingField { field } => write!(f, "{} is not set", field),
        }
    }
}

impl std::error::Error for ConfigError {}
