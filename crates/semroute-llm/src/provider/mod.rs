//! Completion endpoint implementations of [`LLMClient`](crate::client::LLMClient)

mod mock;
mod openai;

pub use mock::MockProvider;
pub use openai::OpenAIProvider;
