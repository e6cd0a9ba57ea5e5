//! Tests for the pipeline engine

use super::*;
use crate::config::PipelineConfig;
use crate::fetch::{CatalogClient, FetchConfig};
use crate::storage::Destination;
use crate::types::FetchFallback;
use futures::TryStreamExt;
use object_store::memory::InMemory;
use object_store::ObjectStore;
use serde_json::json;
use std::sync::Arc;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn test_config(dir: &tempfile::TempDir, endpoint: &str) -> PipelineConfig {
    PipelineConfig {
        endpoint: endpoint.to_string(),
        json_path: dir.path().join("products.json"),
        ndjson_path: dir.path().join("products.ndjson"),
        ..PipelineConfig::default()
    }
}

fn memory_pipeline(config: PipelineConfig, store: Arc<InMemory>) -> Pipeline {
    let client = CatalogClient::with_config(FetchConfig {
        fallback: config.on_fetch_error,
        ..FetchConfig::default()
    });
    let destination = Destination::from_store(store, "", "gs");
    Pipeline::with_parts(config, client, destination)
}

#[tokio::test]
async fn test_run_emits_both_artifacts() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/products"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"id": 1, "title": "Shirt"},
            {"id": 2, "title": "Mug"}
        ])))
        .mount(&mock_server)
        .await;

    let dir = tempfile::tempdir().unwrap();
    let config = test_config(&dir, &format!("{}/products", mock_server.uri()));
    let store = Arc::new(InMemory::new());
    let pipeline = memory_pipeline(config.clone(), store);

    let report = pipeline.run().await.unwrap();

    assert_eq!(report.records, 2);
    assert_eq!(report.artifacts.len(), 2);
    assert!(config.json_path.exists());
    assert!(config.ndjson_path.exists());
    let uploaded = report.uploaded.unwrap();
    assert!(uploaded.starts_with("gs://products/products_"));
    assert!(uploaded.ends_with(".json"));
}

#[tokio::test]
async fn test_run_raw_json_variant_skips_converter() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/products"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{"id": 1}])))
        .mount(&mock_server)
        .await;

    let dir = tempfile::tempdir().unwrap();
    let mut config = test_config(&dir, &format!("{}/products", mock_server.uri()));
    config.emit_ndjson = false;
    config.key_template = "products/products.json".to_string();

    let store = Arc::new(InMemory::new());
    let pipeline = memory_pipeline(config.clone(), store.clone());

    let report = pipeline.run().await.unwrap();

    // Only the JSON artifact; the NDJSON stage never ran
    assert_eq!(report.artifacts.len(), 1);
    assert!(!config.ndjson_path.exists());
    // Fixed key, no timestamp
    assert_eq!(report.uploaded.unwrap(), "gs://products/products.json");

    // The uploaded object is the pretty JSON artifact
    let stored = store
        .get(&object_store::path::Path::from("products/products.json"))
        .await
        .unwrap()
        .bytes()
        .await
        .unwrap();
    let value: serde_json::Value = serde_json::from_slice(&stored).unwrap();
    assert_eq!(value, json!([{"id": 1}]));
}

#[tokio::test]
async fn test_run_skip_upload() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/products"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{"id": 1}])))
        .mount(&mock_server)
        .await;

    let dir = tempfile::tempdir().unwrap();
    let config = test_config(&dir, &format!("{}/products", mock_server.uri()));
    let store = Arc::new(InMemory::new());
    let pipeline = memory_pipeline(config, store.clone()).skip_upload(true);

    let report = pipeline.run().await.unwrap();

    assert!(report.uploaded.is_none());
    let listed: Vec<_> = store.list(None).try_collect().await.unwrap();
    assert!(listed.is_empty());
}

#[tokio::test]
async fn test_run_empty_catalog_fallback_produces_empty_artifacts() {
    let dir = tempfile::tempdir().unwrap();
    let mut config = test_config(&dir, "http://127.0.0.1:1/products");
    config.on_fetch_error = FetchFallback::EmptyCatalog;

    let store = Arc::new(InMemory::new());
    let pipeline = memory_pipeline(config.clone(), store);

    let report = pipeline.run().await.unwrap();

    assert_eq!(report.records, 0);
    let json = std::fs::read_to_string(&config.json_path).unwrap();
    assert_eq!(serde_json::from_str::<serde_json::Value>(&json).unwrap(), json!([]));
    assert_eq!(std::fs::read_to_string(&config.ndjson_path).unwrap(), "");
    // The empty artifact is still uploaded
    assert!(report.uploaded.is_some());
}

#[tokio::test]
async fn test_run_fail_policy_aborts_before_artifacts() {
    let dir = tempfile::tempdir().unwrap();
    let config = test_config(&dir, "http://127.0.0.1:1/products");

    let store = Arc::new(InMemory::new());
    let pipeline = memory_pipeline(config.clone(), store);

    let err = pipeline.run().await.unwrap_err();
    assert!(err.is_transport());
    // Nothing was written
    assert!(!config.json_path.exists());
    assert!(!config.ndjson_path.exists());
}
