//! Pipeline configuration
//!
//! One configuration object covers everything the pipeline needs: the
//! catalog endpoint, local artifact filenames, the storage destination,
//! the blob-key template, and the fetch-failure policy. Loaded from YAML
//! with per-field defaults, so a partial file (or none at all) works.

use crate::error::{Error, Result};
use crate::types::FetchFallback;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;
use url::Url;

/// Complete pipeline configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PipelineConfig {
    /// Catalog endpoint to fetch from
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    /// Fetch timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Path of the pretty-printed JSON artifact
    #[serde(default = "default_json_path")]
    pub json_path: PathBuf,

    /// Path of the NDJSON artifact
    #[serde(default = "default_ndjson_path")]
    pub ndjson_path: PathBuf,

    /// Whether to convert the catalog to NDJSON and upload that instead
    /// of the raw JSON artifact
    #[serde(default = "default_emit_ndjson")]
    pub emit_ndjson: bool,

    /// Storage destination URL (`gs://bucket`, `s3://bucket`, or a local path)
    #[serde(default = "default_destination")]
    pub destination: String,

    /// Blob-key template; `{timestamp}` and `{date}` are interpolated at run time
    #[serde(default = "default_key_template")]
    pub key_template: String,

    /// What to do when the fetch fails at the transport layer
    #[serde(default)]
    pub on_fetch_error: FetchFallback,
}

fn default_endpoint() -> String {
    "https://fakestoreapi.com/products".to_string()
}

fn default_timeout_secs() -> u64 {
    10
}

fn default_json_path() -> PathBuf {
    PathBuf::from("products.json")
}

fn default_ndjson_path() -> PathBuf {
    PathBuf::from("products.ndjson")
}

fn default_emit_ndjson() -> bool {
    true
}

fn default_destination() -> String {
    "gs://fake-products-bucket".to_string()
}

fn default_key_template() -> String {
    "products/products_{timestamp}.json".to_string()
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            timeout_secs: default_timeout_secs(),
            json_path: default_json_path(),
            ndjson_path: default_ndjson_path(),
            emit_ndjson: default_emit_ndjson(),
            destination: default_destination(),
            key_template: default_key_template(),
            on_fetch_error: FetchFallback::default(),
        }
    }
}

impl PipelineConfig {
    /// Load a configuration from a YAML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            Error::config(format!(
                "Failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;
        Self::from_yaml(&content)
    }

    /// Load a configuration from a YAML string
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(yaml)
            .map_err(|e| Error::config(format!("Failed to parse config YAML: {e}")))?;

        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.endpoint.is_empty() {
            return Err(Error::config("endpoint cannot be empty"));
        }

        Url::parse(&self.endpoint)?;

        if self.timeout_secs == 0 {
            return Err(Error::config("timeout_secs must be greater than zero"));
        }

        if self.destination.is_empty() {
            return Err(Error::config("destination cannot be empty"));
        }

        if self.key_template.is_empty() {
            return Err(Error::config("key_template cannot be empty"));
        }

        if self.json_path == self.ndjson_path {
            return Err(Error::config(
                "json_path and ndjson_path must point to different files",
            ));
        }

        Ok(())
    }

    /// Fetch timeout as a `Duration`
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}
