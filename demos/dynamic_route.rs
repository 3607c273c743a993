//! Example: Generate routes with a real LLM
//!
//! Describes a function and a data model, asks an OpenAI-compatible endpoint
//! (OpenRouter by default) for example utterances and saves the resulting
//! routes as YAML.
//!
//! Prerequisites:
//! - Set the OPENROUTER_API_KEY environment variable
//! - Optionally set OPENROUTER_BASE_URL to use another compatible endpoint
//!
//! Run with:
//! ```bash
//! export OPENROUTER_API_KEY=your-api-key
//! cargo run --example dynamic_route
//! ```

use semroute_core::{FieldSpec, ParamSpec, RouteConfig, SchemaSource};
use semroute_llm::{OpenAIProvider, RouteGenerator};
use std::sync::Arc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    semroute::init_tracing()?;

    let provider = match OpenAIProvider::from_env() {
        Ok(provider) => provider,
        Err(e) => {
            eprintln!("Error: {}", e);
            eprintln!("Please set it with: export OPENROUTER_API_KEY=your-api-key");
            std::process::exit(1);
        }
    };
    let generator = RouteGenerator::with_defaults(Arc::new(provider));

    let sources = vec![
        SchemaSource::function(
            "get_time",
            Some("Finds the current time in a specific timezone.".to_string()),
            vec![ParamSpec::new("timezone").with_type("str")],
            Some("str".to_string()),
        ),
        SchemaSource::model(
            "BookFlight",
            Some("Books a flight for the user.".to_string()),
            vec![
                FieldSpec::new("origin", "str"),
                FieldSpec::new("destination", "str"),
                FieldSpec::new("passengers", "int").with_default(1),
            ],
        ),
    ];

    let mut config = RouteConfig::default();
    for source in &sources {
        match generator.generate(source).await {
            Ok(route) => {
                println!("Route `{}`:", route.name);
                for utterance in &route.utterances {
                    println!("  - {}", utterance);
                }
                config.add(route);
            }
            Err(e) => {
                let stage = e
                    .failed_stage()
                    .map(|s| s.to_string())
                    .unwrap_or_else(|| "the completion request".to_string());
                eprintln!("Failed to generate `{}` at {}: {}", source.name(), stage, e);
            }
        }
    }

    let path = std::env::temp_dir().join("semroute_dynamic_routes.yaml");
    config.to_file(&path).await?;
    println!("\nSaved {} routes to {}", config.len(), path.display());

    Ok(())
}
