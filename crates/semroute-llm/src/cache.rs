//! LLM response caching

use crate::client::{LLMRequest, LLMResponse};
use async_trait::async_trait;
use dashmap::DashMap;

/// LLM cache trait
#[async_trait]
pub trait LLMCache: Send + Sync {
    /// Get a cached response
    async fn get(&self, request: &LLMRequest) -> Option<LLMResponse>;

    /// Store a response in cache
    async fn set(&self, request: LLMRequest, response: LLMResponse);

    /// Clear the cache
    async fn clear(&self);
}

/// In-memory LLM cache implementation
#[derive(Default)]
pub struct InMemoryLLMCache {
    cache: DashMap<String, LLMResponse>,
}

impl InMemoryLLMCache {
    /// Create a new in-memory cache
    pub fn new() -> Self {
        Self {
            cache: DashMap::new(),
        }
    }

    /// Number of cached responses
    pub fn len(&self) -> usize {
        self.cache.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cache.is_empty()
    }

    /// Every field that changes the sampled output is part of the key
    ///
    /// Fields are serialized as a JSON tuple so separators inside values and
    /// unset settings cannot collide with other requests.
    fn cache_key(request: &LLMRequest) -> String {
        let fields = (
            &request.model,
            request.max_tokens,
            request.temperature,
            &request.prompt,
        );
        serde_json::to_string(&fields).unwrap_or_else(|_| format!("{:?}", fields))
    }
}

#[async_trait]
impl LLMCache for InMemoryLLMCache {
    async fn get(&self, request: &LLMRequest) -> Option<LLMResponse> {
        let key = Self::cache_key(request);
        self.cache.get(&key).map(|entry| entry.value().clone())
    }

    async fn set(&self, request: LLMRequest, response: LLMResponse) {
        let key = Self::cache_key(&request);
        self.cache.insert(key, response);
    }

    async fn clear(&self) {
        self.cache.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_cache_get_set() {
        let cache = InMemoryLLMCache::new();

        let request = LLMRequest::new("Test prompt".to_string(), "gpt-4o-mini".to_string());
        let response = LLMResponse::new("Test response".to_string(), "gpt-4o-mini".to_string());

        // Initially empty
        assert!(cache.get(&request).await.is_none());

        cache.set(request.clone(), response).await;
        let cached = cache.get(&request).await;
        assert_eq!(cached.unwrap().content, "Test response");
        assert_eq!(cache.len(), 1);
    }

    #[tokio::test]
    async fn test_cache_clear() {
        let cache = InMemoryLLMCache::new();

        let request = LLMRequest::new("Test".to_string(), "gpt-4o-mini".to_string());
        let response = LLMResponse::new("Response".to_string(), "gpt-4o-mini".to_string());

        cache.set(request.clone(), response).await;
        assert!(cache.get(&request).await.is_some());

        cache.clear().await;
        assert!(cache.get(&request).await.is_none());
        assert!(cache.is_empty());
    }

    #[tokio::test]
    async fn test_sampling_settings_are_part_of_key() {
        let cache = InMemoryLLMCache::new();

        let cold = LLMRequest::new("Prompt".to_string(), "m".to_string()).with_temperature(0.01);
        let warm = LLMRequest::new("Prompt".to_string(), "m".to_string()).with_temperature(0.9);

        cache
            .set(cold.clone(), LLMResponse::new("cold".to_string(), "m".to_string()))
            .await;

        assert_eq!(cache.get(&cold).await.unwrap().content, "cold");
        assert!(cache.get(&warm).await.is_none());
    }

    #[tokio::test]
    async fn test_keys_do_not_collide() {
        let cache = InMemoryLLMCache::new();

        let unset = LLMRequest::new("Prompt", "m");
        let zero = LLMRequest::new("Prompt", "m").with_max_tokens(0);
        let colon_model = LLMRequest::new("b", "a:");
        let colon_prompt = LLMRequest::new(":b", "a");

        cache.set(unset.clone(), LLMResponse::new("unset", "m")).await;
        cache.set(colon_model.clone(), LLMResponse::new("model", "a:")).await;

        assert!(cache.get(&zero).await.is_none());
        assert!(cache.get(&colon_prompt).await.is_none());
        assert_eq!(cache.get(&unset).await.unwrap().content, "unset");
        assert_eq!(cache.get(&colon_model).await.unwrap().content, "model");
        assert_eq!(cache.len(), 2);
    }
}
