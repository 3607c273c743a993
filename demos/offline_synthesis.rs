//! Example: Route synthesis without network access
//!
//! Uses the mock provider to walk through a successful synthesis, each
//! failure stage, and a caller-side retry loop.
//!
//! Run with:
//! ```bash
//! cargo run --example offline_synthesis
//! ```

use semroute_core::{ParamSpec, SchemaSource};
use semroute_llm::{LLMError, MockProvider, RouteGenerator};
use std::sync::Arc;

const MAX_ATTEMPTS: usize = 3;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    semroute::init_tracing()?;

    let source = SchemaSource::function(
        "get_weather",
        Some("Get current weather".to_string()),
        vec![ParamSpec::new("city").with_type("str")],
        Some("str".to_string()),
    );
    let schema = source.extract()?;
    println!("Schema: {}\n", schema.to_prompt_context());

    let cases = [
        ("empty output", String::new()),
        ("no tags", r#"{"name": "get_weather"}"#.to_string()),
        ("missing utterances", r#"<config>{"name": "get_weather"}</config>"#.to_string()),
        (
            "well formed",
            r#"<config>{"name": "get_weather", "utterances": ["weather in Paris?", "is it raining in Oslo?", "how hot is it in Cairo?", "do I need an umbrella in London?", "forecast for Tokyo"]}</config>"#
                .to_string(),
        ),
    ];

    for (label, response) in cases {
        let generator = RouteGenerator::with_defaults(Arc::new(MockProvider::with_response(response)));
        match generator.generate(&source).await {
            Ok(route) => println!("{:<20} -> {:?}", label, route),
            Err(e) => println!("{:<20} -> failed at {:?}: {}", label, e.failed_stage(), e),
        }
    }

    // Retrying is up to the caller
    let provider = Arc::new(MockProvider::with_responses(vec![
        "I'm not sure what you mean.".to_string(),
        r#"<config>{"name": "get_weather", "utterances": ["what's the weather like?"]}</config>"#
            .to_string(),
    ]));
    let generator = RouteGenerator::with_defaults(provider.clone());

    let mut last_error: Option<LLMError> = None;
    for attempt in 1..=MAX_ATTEMPTS {
        match generator.generate_from_schema(&schema).await {
            Ok(route) => {
                println!("\nattempt {}: got route `{}`", attempt, route.name);
                last_error = None;
                break;
            }
            Err(e) => {
                println!("\nattempt {}: {}", attempt, e);
                last_error = Some(e);
            }
        }
    }
    if let Some(e) = last_error {
        return Err(e.into());
    }
    println!("completion requests made: {}", provider.call_count());

    Ok(())
}
