//! Route generation from function and model schemas

use crate::client::{LLMClient, LLMRequest, LLMResponse};
use crate::error::{LLMError, Result};
use crate::generator::config_extractor::{extract_all_configs, extract_config};
use crate::generator::prompt_templates::build_route_prompt;
use semroute_core::{
    routes_from_value, validate_route_config, Route, Schema, SchemaSource, ValidationError,
};
use std::fmt;
use std::sync::Arc;

/// Steps of a single synthesis attempt, in order
///
/// An attempt either reaches [`SynthesisStage::RouteBuilt`] or stops with an
/// error; see [`LLMError::failed_stage`]. There is no retry loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SynthesisStage {
    SchemaExtracted,
    PromptBuilt,
    CompletionReceived,
    ConfigExtracted,
    Validated,
    RouteBuilt,
}

impl SynthesisStage {
    pub fn as_str(&self) -> &'static str {
        match self {
            SynthesisStage::SchemaExtracted => "schema_extracted",
            SynthesisStage::PromptBuilt => "prompt_built",
            SynthesisStage::CompletionReceived => "completion_received",
            SynthesisStage::ConfigExtracted => "config_extracted",
            SynthesisStage::Validated => "validated",
            SynthesisStage::RouteBuilt => "route_built",
        }
    }
}

impl fmt::Display for SynthesisStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Configuration for route generation
#[derive(Debug, Clone)]
pub struct RouteGeneratorConfig {
    /// Model to use for generation
    pub model: String,
    /// Maximum tokens for response
    pub max_tokens: Option<u32>,
    /// Temperature (0.0 - 1.0, lower = more deterministic)
    pub temperature: Option<f32>,
}

impl Default for RouteGeneratorConfig {
    fn default() -> Self {
        Self {
            model: "mistralai/mistral-7b-instruct".to_string(),
            max_tokens: Some(200),
            temperature: Some(0.01),
        }
    }
}

impl RouteGeneratorConfig {
    /// Create a new configuration with a specific model
    pub fn new(model: impl Into<String>) -> Self {
        Self {
            model: model.into(),
            ..Default::default()
        }
    }

    /// Set maximum tokens
    pub fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = Some(max_tokens);
        self
    }

    /// Set temperature
    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = Some(temperature);
        self
    }
}

/// Synthesizes routes by asking an LLM for example utterances
///
/// Holds no mutable state, so one generator can serve concurrent requests.
pub struct RouteGenerator {
    client: Arc<dyn LLMClient>,
    config: RouteGeneratorConfig,
}

impl RouteGenerator {
    /// Create a new route generator
    pub fn new(client: Arc<dyn LLMClient>, config: RouteGeneratorConfig) -> Self {
        Self { client, config }
    }

    /// Create with default configuration
    pub fn with_defaults(client: Arc<dyn LLMClient>) -> Self {
        Self::new(client, RouteGeneratorConfig::default())
    }

    /// Generate a route for a function or data model
    ///
    /// # Example
    /// ```no_run
    /// use semroute_core::{ParamSpec, SchemaSource};
    /// use semroute_llm::{OpenAIProvider, RouteGenerator};
    /// use std::sync::Arc;
    ///
    /// # async fn example() -> semroute_llm::Result<()> {
    /// let provider = Arc::new(OpenAIProvider::from_env()?);
    /// let generator = RouteGenerator::with_defaults(provider);
    ///
    /// let source = SchemaSource::function(
    ///     "get_time",
    ///     Some("Finds the current time in a timezone".to_string()),
    ///     vec![ParamSpec::new("timezone").with_type("str")],
    ///     Some("str".to_string()),
    /// );
    /// let route = generator.generate(&source).await?;
    /// println!("{}: {:?}", route.name, route.utterances);
    /// # Ok(())
    /// # }
    /// ```
    pub async fn generate(&self, source: &SchemaSource) -> Result<Route> {
        let schema = source.extract()?;
        tracing::debug!(
            stage = %SynthesisStage::SchemaExtracted,
            name = %schema.name,
            "Schema extracted"
        );
        self.generate_from_schema(&schema).await
    }

    /// Generate a single route from an extracted schema
    ///
    /// A list payload is accepted only when it holds exactly one route;
    /// otherwise the attempt fails at [`SynthesisStage::Validated`].
    pub async fn generate_from_schema(&self, schema: &Schema) -> Result<Route> {
        let (route, _) = self.generate_with_metadata(schema).await?;
        Ok(route)
    }

    /// Generate a route and return the raw LLM response alongside it
    pub async fn generate_with_metadata(&self, schema: &Schema) -> Result<(Route, LLMResponse)> {
        let (routes, response) = self.run(schema).await?;

        let found = routes.len();
        let mut routes = routes.into_iter();
        match (routes.next(), found) {
            (Some(route), 1) => Ok((route, response)),
            _ => {
                let err = ValidationError::RouteCount { expected: 1, found };
                tracing::warn!("{}", err);
                Err(err.into())
            }
        }
    }

    /// Generate every route contained in the model's payload
    pub async fn generate_routes(&self, schema: &Schema) -> Result<Vec<Route>> {
        let (routes, _) = self.run(schema).await?;
        Ok(routes)
    }

    async fn run(&self, schema: &Schema) -> Result<(Vec<Route>, LLMResponse)> {
        tracing::info!("Generating dynamic route for `{}`...", schema.name);

        let prompt = build_route_prompt(schema);
        tracing::debug!(
            stage = %SynthesisStage::PromptBuilt,
            prompt_len = prompt.len(),
            "Prompt built"
        );

        let request = LLMRequest::new(prompt, self.config.model.as_str())
            .with_sampling(self.config.max_tokens, self.config.temperature);

        let response = self.client.call(request).await?;
        if response.is_empty() {
            tracing::error!("Completion for `{}` returned no output", schema.name);
            return Err(LLMError::EmptyCompletion);
        }
        tracing::debug!(
            stage = %SynthesisStage::CompletionReceived,
            tokens = response.tokens_used,
            finish_reason = %response.finish_reason,
            "Completion received"
        );

        let route_config = extract_config(&response.content).map_err(|e| {
            tracing::error!("{} (client: {})", e, self.client.name());
            e
        })?;
        let extra_blocks = extract_all_configs(&response.content).len().saturating_sub(1);
        if extra_blocks > 0 {
            tracing::warn!("Ignoring {} extra <config> block(s)", extra_blocks);
        }
        tracing::debug!(stage = %SynthesisStage::ConfigExtracted, "Config extracted");
        tracing::info!("Generated route config:\n{}", route_config);

        let value = validate_route_config(&route_config)?;
        tracing::debug!(stage = %SynthesisStage::Validated, "Config validated");

        let routes = routes_from_value(value)?;
        tracing::debug!(
            stage = %SynthesisStage::RouteBuilt,
            routes = routes.len(),
            "Route built"
        );

        Ok((routes, response))
    }

    /// Update the model configuration
    pub fn set_config(&mut self, config: RouteGeneratorConfig) {
        self.config = config;
    }

    /// Get current configuration
    pub fn config(&self) -> &RouteGeneratorConfig {
        &self.config
    }
}
