//! Integration tests for RouteConfig file persistence

use semroute_core::{Route, RouteConfig, RouteError, ValidationError};
use tempfile::TempDir;
use tokio::fs;

fn sample_config() -> RouteConfig {
    RouteConfig::new(vec![
        Route::new(
            "politics",
            vec![
                "isn't politics the best thing ever",
                "why don't you tell me about your political opinions",
            ],
        ),
        Route::new("chitchat", vec!["how's the weather today?", "how are things going?"])
            .with_description("Small talk"),
        Route::new("empty", Vec::<String>::new()),
    ])
}

#[tokio::test]
async fn test_json_round_trip() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("routes.json");

    let config = sample_config();
    config.to_file(&path).await.expect("Failed to save JSON");

    let loaded = RouteConfig::from_file(&path).await.expect("Failed to load JSON");
    assert_eq!(loaded.len(), 3);
    assert_eq!(loaded, config);
}

#[tokio::test]
async fn test_yaml_round_trip() {
    let temp_dir = TempDir::new().unwrap();

    for file_name in ["routes.yaml", "routes.yml"] {
        let path = temp_dir.path().join(file_name);
        let config = sample_config();
        config.to_file(&path).await.expect("Failed to save YAML");

        let loaded = RouteConfig::from_file(&path).await.expect("Failed to load YAML");
        assert_eq!(loaded.routes(), config.routes());
    }
}

#[tokio::test]
async fn test_load_txt_is_unsupported_regardless_of_content() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("routes.txt");
    fs::write(&path, r#"[{"name": "a", "utterances": ["b"]}]"#)
        .await
        .unwrap();

    let err = RouteConfig::from_file(&path).await.unwrap_err();
    assert!(matches!(err, RouteError::UnsupportedFileType { .. }));

    // The extension check happens before reading, so a missing file is
    // reported the same way
    let err = RouteConfig::from_file(temp_dir.path().join("missing.txt"))
        .await
        .unwrap_err();
    assert!(matches!(err, RouteError::UnsupportedFileType { .. }));
}

#[tokio::test]
async fn test_save_txt_writes_nothing() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("routes.txt");

    let err = sample_config().to_file(&path).await.unwrap_err();
    assert!(matches!(err, RouteError::UnsupportedFileType { .. }));
    assert!(!path.exists());
}

#[tokio::test]
async fn test_load_hand_written_yaml() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("routes.yaml");
    let content = r#"
- name: get_time
  utterances:
    - what time is it in New York?
    - tell me the time in Tokyo
  description: Finds the current time in a timezone
- name: greet
  utterances: [hi, hello]
  description: null
"#;
    fs::write(&path, content).await.unwrap();

    let config = RouteConfig::from_file(&path).await.unwrap();
    assert_eq!(config.names(), vec!["get_time", "greet"]);
    assert_eq!(
        config.get("get_time").unwrap().description.as_deref(),
        Some("Finds the current time in a timezone")
    );
    assert!(config.get("greet").unwrap().description.is_none());
}

#[tokio::test]
async fn test_load_rejects_missing_utterances() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("routes.json");
    fs::write(&path, r#"[{"name": "a", "utterances": []}, {"name": "b"}]"#)
        .await
        .unwrap();

    let err = RouteConfig::from_file(&path).await.unwrap_err();
    match err {
        RouteError::InvalidConfig(ValidationError::MissingKeys { index, keys }) => {
            assert_eq!(index, Some(1));
            assert_eq!(keys, vec!["utterances".to_string()]);
        }
        other => panic!("unexpected error: {:?}", other),
    }
}

#[tokio::test]
async fn test_load_missing_file_is_io_error() {
    let temp_dir = TempDir::new().unwrap();
    let err = RouteConfig::from_file(temp_dir.path().join("nope.json"))
        .await
        .unwrap_err();
    assert!(matches!(err, RouteError::Io(_)));
}

#[tokio::test]
async fn test_crud_then_persist() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("routes.json");

    let mut config = RouteConfig::default();
    config.add(Route::new("a", vec!["one"]));
    config.add(Route::new("b", vec!["two"]));
    config.remove("a");
    config.remove("missing");
    config.to_file(&path).await.unwrap();

    let loaded = RouteConfig::from_file(&path).await.unwrap();
    assert_eq!(loaded.names(), vec!["b"]);
    assert!(matches!(
        loaded.get("a"),
        Err(RouteError::RouteNotFound { .. })
    ));
}
