//! Dynamic route synthesis
//!
//! Turns a function or data-model schema into a [`Route`](semroute_core::Route)
//! by asking an LLM for example utterances:
//!
//! ```text
//! SchemaSource ──extract──▶ Schema ──prompt──▶ LLMClient ──▶ <config> block
//!                                                               │
//!                              Route ◀──build── validate ◀──────┘
//! ```
//!
//! # Example
//! ```no_run
//! use semroute_core::Schema;
//! use semroute_llm::{MockProvider, RouteGenerator};
//! use std::sync::Arc;
//!
//! # async fn example() -> semroute_llm::Result<()> {
//! let provider = Arc::new(MockProvider::with_response(
//!     r#"<config>{"name": "get_weather", "utterances": ["weather in Oslo?"]}</config>"#.to_string(),
//! ));
//! let generator = RouteGenerator::with_defaults(provider);
//!
//! let schema = Schema {
//!     name: "get_weather".to_string(),
//!     description: "Get current weather".to_string(),
//!     signature: "(city: str) -> str".to_string(),
//!     output: None,
//! };
//! let route = generator.generate_from_schema(&schema).await?;
//! println!("{:?}", route);
//! # Ok(())
//! # }
//! ```

pub mod config_extractor;
pub mod prompt_templates;
pub mod route_generator;

pub use config_extractor::{extract_all_configs, extract_config};
pub use prompt_templates::{build_route_prompt, ROUTE_GENERATION_PROMPT};
pub use route_generator::{RouteGenerator, RouteGeneratorConfig, SynthesisStage};
