//! Mock LLM provider for testing

use crate::client::{LLMClient, LLMRequest, LLMResponse};
use crate::error::Result;
use async_trait::async_trait;
use std::sync::Mutex;

/// Mock LLM provider for testing
///
/// Replies with canned responses and records every request it receives.
/// With several responses configured they are returned in order and the
/// last one repeats once the list is exhausted.
pub struct MockProvider {
    name: String,
    responses: Vec<String>,
    requests: Mutex<Vec<LLMRequest>>,
}

impl MockProvider {
    /// Create a new mock provider
    pub fn new() -> Self {
        Self::with_response("Mock LLM response".to_string())
    }

    /// Create with custom default response
    pub fn with_response(response: String) -> Self {
        Self::with_responses(vec![response])
    }

    /// Create with a sequence of responses
    pub fn with_responses(responses: Vec<String>) -> Self {
        Self {
            name: "mock".to_string(),
            responses,
            requests: Mutex::new(Vec::new()),
        }
    }

    /// Provider whose completions carry no content
    pub fn empty() -> Self {
        Self::with_response(String::new())
    }

    /// Requests received so far
    pub fn requests(&self) -> Vec<LLMRequest> {
        self.requests
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    /// Number of calls received so far
    pub fn call_count(&self) -> usize {
        self.requests
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .len()
    }
}

impl Default for MockProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl LLMClient for MockProvider {
    async fn call(&self, request: LLMRequest) -> Result<LLMResponse> {
        let model = request.model.clone();
        let call_index = {
            let mut requests = self
                .requests
                .lock()
                .unwrap_or_else(|poisoned| poisoned.into_inner());
            requests.push(request);
            requests.len() - 1
        };

        let content = self
            .responses
            .get(call_index)
            .or_else(|| self.responses.last())
            .cloned()
            .unwrap_or_default();

        Ok(LLMResponse::new(content, model)
            .with_tokens(10)
            .with_finish_reason("stop"))
    }

    fn name(&self) -> &str {
        &self.name
    }
}
