//! Completion request/response types and the [`LLMClient`] trait
//!
//! A route synthesis attempt sends one prompt as a single user message, with
//! the model and sampling settings taken from the generator configuration.

use crate::error::Result;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Role of the only message a completion request carries
pub const USER_ROLE: &str = "user";

/// Chat message as sent on the wire
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

/// One completion request: a prompt plus the settings it is sampled with
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LLMRequest {
    /// Model identifier, e.g. "mistralai/mistral-7b-instruct"
    pub model: String,

    /// Prompt text
    pub prompt: String,

    /// Upper bound on generated tokens, endpoint default when `None`
    pub max_tokens: Option<u32>,

    /// Sampling temperature, endpoint default when `None`
    pub temperature: Option<f32>,
}

impl LLMRequest {
    pub fn new(prompt: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            model: model.into(),
            prompt: prompt.into(),
            max_tokens: None,
            temperature: None,
        }
    }

    /// Apply both sampling settings at once, leaving `None` values unset
    pub fn with_sampling(mut self, max_tokens: Option<u32>, temperature: Option<f32>) -> Self {
        self.max_tokens = max_tokens;
        self.temperature = temperature;
        self
    }

    pub fn with_max_tokens(self, max_tokens: u32) -> Self {
        let temperature = self.temperature;
        self.with_sampling(Some(max_tokens), temperature)
    }

    pub fn with_temperature(self, temperature: f32) -> Self {
        let max_tokens = self.max_tokens;
        self.with_sampling(max_tokens, Some(temperature))
    }

    /// The prompt wrapped as the request's single user message
    pub fn user_message(&self) -> ChatMessage {
        ChatMessage {
            role: USER_ROLE.to_string(),
            content: self.prompt.clone(),
        }
    }
}

/// Completion text plus what the endpoint reported about it
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LLMResponse {
    pub content: String,

    /// Model that answered, which may differ from the requested alias
    pub model: String,

    /// Total tokens billed for the call, 0 when not reported
    pub tokens_used: u32,

    /// "stop", "length", ...
    pub finish_reason: String,
}

impl LLMResponse {
    pub fn new(content: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            model: model.into(),
            tokens_used: 0,
            finish_reason: "stop".to_string(),
        }
    }

    pub fn with_tokens(mut self, tokens: u32) -> Self {
        self.tokens_used = tokens;
        self
    }

    pub fn with_finish_reason(mut self, reason: impl Into<String>) -> Self {
        self.finish_reason = reason.into();
        self
    }

    /// True when the completion carried no text at all
    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }
}

/// Async completion client
///
/// Implementations perform exactly one completion request per `call`; retry
/// policy belongs to the caller.
#[async_trait]
pub trait LLMClient: Send + Sync {
    async fn call(&self, request: LLMRequest) -> Result<LLMResponse>;

    /// Short identifier used in log lines
    fn name(&self) -> &str;
}
