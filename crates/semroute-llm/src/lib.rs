//! semroute LLM integration
//!
//! Dynamic route synthesis: given a function or data-model description, ask
//! an OpenAI-compatible chat completion endpoint for example utterances and
//! turn its answer into a validated [`Route`](semroute_core::Route).
//!
//! - [`client`]: request/response types and the [`LLMClient`] trait
//! - [`provider`]: OpenAI-compatible HTTP provider and a mock for tests
//! - [`generator`]: prompt template, `<config>` extraction and the
//!   [`RouteGenerator`] pipeline
//!
//! Each synthesis attempt makes exactly one completion request. Callers that
//! want to retry on malformed model output re-run the generator.

pub use cache::{InMemoryLLMCache, LLMCache};
pub use client::{ChatMessage, LLMClient, LLMRequest, LLMResponse};
pub use config::{ConfigError, ProviderConfig};
pub use error::{LLMError, Result};

pub use provider::{MockProvider, OpenAIProvider};

pub use generator::{
    build_route_prompt, extract_all_configs, extract_config, RouteGenerator,
    RouteGeneratorConfig, SynthesisStage,
};

pub mod cache;
pub mod client;
pub mod config;
pub mod error;
pub mod generator;
pub mod provider;
