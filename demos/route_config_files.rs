//! Example: Manage a route config and persist it as JSON and YAML
//!
//! Run with:
//! ```bash
//! cargo run --example route_config_files
//! ```

use semroute_core::{Route, RouteConfig, RouteError};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    semroute::init_tracing()?;

    let mut config = RouteConfig::new(vec![
        Route::new(
            "politics",
            vec![
                "isn't politics the best thing ever",
                "why don't you tell me about your political opinions",
                "don't you just love the president",
            ],
        ),
        Route::new(
            "chitchat",
            vec!["how's the weather today?", "how are things going?", "lovely weather today"],
        )
        .with_description("Small talk"),
    ]);

    config.add(Route::new("goodbye", vec!["bye", "see you later", "talk soon"]));
    println!("Routes: {:?}", config.names());

    let chitchat = config.get("chitchat")?;
    println!("`chitchat` has {} utterances", chitchat.utterances.len());

    config.remove("goodbye");
    // Logged, not an error
    config.remove("goodbye");

    if let Err(RouteError::RouteNotFound { name }) = config.get("goodbye") {
        println!("`{}` is gone", name);
    }

    let dir = std::env::temp_dir();
    for file_name in ["semroute_routes.json", "semroute_routes.yaml"] {
        let path = dir.join(file_name);
        config.to_file(&path).await?;

        let loaded = RouteConfig::from_file(&path).await?;
        println!(
            "{} -> {} routes, identical: {}",
            path.display(),
            loaded.len(),
            loaded == config
        );
    }

    match config.to_file(dir.join("semroute_routes.txt")).await {
        Err(e @ RouteError::UnsupportedFileType { .. }) => println!("Rejected: {}", e),
        other => println!("Unexpected: {:?}", other),
    }

    for route in &config {
        println!("{:<10} {} utterances", route.name, route.utterances.len());
    }

    // Routes can be taken back out and wrapped again
    let rebuilt = RouteConfig::from(config.clone().into_routes());
    let total: usize = rebuilt.iter().map(|r| r.utterances.len()).sum();
    println!("{} utterances across {} routes", total, rebuilt.len());

    println!("\n{}", serde_json::to_string_pretty(&config.to_dict())?);
    Ok(())
}
