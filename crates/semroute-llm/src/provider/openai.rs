//! OpenAI-compatible chat completion provider
//!
//! Works against any endpoint implementing the standard "create chat
//! completion" contract (OpenAI, OpenRouter, vLLM, ...).

use crate::cache::LLMCache;
use crate::client::{LLMClient, LLMRequest, LLMResponse};
use crate::config::ProviderConfig;
use crate::error::{LLMError, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde_json::json;
use std::sync::Arc;

/// OpenAI-compatible provider
pub struct OpenAIProvider {
    api_key: String,
    completions_url: String,
    cache: Option<Arc<dyn LLMCache>>,
    client: Client,
}

impl OpenAIProvider {
    /// Create a provider for the default endpoint
    pub fn new(api_key: String) -> Self {
        Self::with_base_url(api_key, crate::config::DEFAULT_BASE_URL.to_string())
    }

    /// Create with custom base URL (e.g., api.openai.com or a local server)
    pub fn with_base_url(api_key: String, base_url: String) -> Self {
        let config = ProviderConfig::new(api_key).with_base_url(base_url);
        Self {
            completions_url: config.completions_url(),
            api_key: config.api_key.unwrap_or_default(),
            cache: None,
            client: Client::new(),
        }
    }

    /// Create from a validated configuration
    pub fn from_config(config: ProviderConfig) -> Result<Self> {
        config
            .validate()
            .map_err(|e| LLMError::InvalidConfiguration(e.to_string()))?;

        Ok(Self {
            completions_url: config.completions_url(),
            api_key: config.api_key.unwrap_or_default(),
            cache: None,
            client: Client::new(),
        })
    }

    /// Create from `OPENROUTER_API_KEY` / `OPENROUTER_BASE_URL`
    pub fn from_env() -> Result<Self> {
        Self::from_config(ProviderConfig::from_env())
    }

    /// Attach a response cache
    pub fn with_cache(mut self, cache: Arc<dyn LLMCache>) -> Self {
        self.cache = Some(cache);
        self
    }

    fn build_body(request: &LLMRequest) -> serde_json::Value {
        let mut body = json!({
            "model": request.model,
            "messages": [request.user_message()],
        });
        if let Some(max_tokens) = request.max_tokens {
            body["max_tokens"] = json!(max_tokens);
        }
        if let Some(temperature) = request.temperature {
            body["temperature"] = json!(temperature);
        }
        body
    }
}

#[async_trait]
impl LLMClient for OpenAIProvider {
    async fn call(&self, request: LLMRequest) -> Result<LLMResponse> {
        // Check cache first
        if let Some(ref cache) = self.cache {
            if let Some(cached) = cache.get(&request).await {
                tracing::debug!("Completion cache hit for model {}", request.model);
                return Ok(cached);
            }
        }

        let body = Self::build_body(&request);

        let resp = self
            .client
            .post(&self.completions_url)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .header("Content-Type", "application/json")
            .json(&body)
            .send()
            .await
            .map_err(|e| LLMError::ApiCallFailed(format!("Completion request failed: {}", e)))?;

        let status = resp.status();
        let resp_text = resp.text().await.map_err(|e| {
            LLMError::ApiCallFailed(format!("Failed to read response: {}", e))
        })?;

        if !status.is_success() {
            return Err(LLMError::ApiCallFailed(format!(
                "Completion API error ({}): {}",
                status, resp_text
            )));
        }

        let resp_json: serde_json::Value = serde_json::from_str(&resp_text).map_err(|e| {
            LLMError::InvalidResponse(format!("Failed to parse response: {}", e))
        })?;

        let content = match resp_json["choices"][0]["message"]["content"].as_str() {
            Some(content) if !content.is_empty() => content.to_string(),
            _ => return Err(LLMError::EmptyCompletion),
        };

        let finish_reason = resp_json["choices"][0]["finish_reason"]
            .as_str()
            .unwrap_or("stop")
            .to_string();

        let tokens_used = resp_json["usage"]["total_tokens"].as_u64().unwrap_or(0) as u32;

        let model = resp_json["model"]
            .as_str()
            .map(|m| m.to_string())
            .unwrap_or_else(|| request.model.clone());

        let response = LLMResponse::new(content, model)
            .with_tokens(tokens_used)
            .with_finish_reason(finish_reason);

        if let Some(ref cache) = self.cache {
            cache.set(request, response.clone()).await;
        }

        Ok(response)
    }

    fn name(&self) -> &str {
        "openai"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::InMemoryLLMCache;

    #[test]
    fn test_openai_provider_creation() {
        let provider = OpenAIProvider::new("test-key".to_string());
        assert_eq!(provider.name(), "openai");
        assert_eq!(
            provider.completions_url,
            "https://openrouter.ai/api/v1/chat/completions"
        );
    }

    #[test]
    fn test_from_config_requires_api_key() {
        let result = OpenAIProvider::from_config(ProviderConfig::default());
        assert!(matches!(result, Err(LLMError::InvalidConfiguration(_))));
    }

    #[test]
    fn test_provider_with_cache() {
        let cache = Arc::new(InMemoryLLMCache::new());
        let provider = OpenAIProvider::new("test-key".to_string()).with_cache(cache);
        assert!(provider.cache.is_some());
    }

    #[test]
    fn test_body_is_single_user_message() {
        let request = LLMRequest::new("hello".to_string(), "m".to_string())
            .with_temperature(0.01)
            .with_max_tokens(200);
        let body = OpenAIProvider::build_body(&request);

        assert_eq!(body["model"], "m");
        assert_eq!(body["messages"].as_array().unwrap().len(), 1);
        assert_eq!(body["messages"][0]["role"], "user");
        assert_eq!(body["messages"][0]["content"], "hello");
        assert_eq!(body["max_tokens"], 200);
        assert!((body["temperature"].as_f64().unwrap() - 0.01).abs() < 1e-6);
    }

    #[test]
    fn test_body_omits_unset_sampling_settings() {
        let body = OpenAIProvider::build_body(&LLMRequest::new("hello", "m"));

        assert_eq!(body["messages"].as_array().unwrap().len(), 1);
        assert!(body.get("temperature").is_none());
        assert!(body.get("max_tokens").is_none());
    }
}
