//! Pipeline execution

use super::types::{ArtifactInfo, PipelineReport};
use crate::artifact::{convert_to_ndjson, write_catalog};
use crate::config::PipelineConfig;
use crate::error::Result;
use crate::fetch::{CatalogClient, FetchConfig};
use crate::storage::Destination;
use crate::template;
use crate::types::ArtifactKind;
use chrono::Utc;
use std::time::Instant;
use tracing::{info, warn};

/// The catalog sync pipeline
///
/// Owns the configuration plus the two external capabilities (HTTP client
/// and storage destination). Production code builds everything from config
/// with [`Pipeline::new`]; tests inject fakes with [`Pipeline::with_parts`].
pub struct Pipeline {
    config: PipelineConfig,
    client: CatalogClient,
    destination: Destination,
    skip_upload: bool,
}

impl Pipeline {
    /// Build a pipeline from configuration
    pub fn new(config: PipelineConfig) -> Result<Self> {
        config.validate()?;

        let client = CatalogClient::with_config(FetchConfig {
            timeout: config.timeout(),
            fallback: config.on_fetch_error,
            ..FetchConfig::default()
        });
        let destination = Destination::parse(&config.destination)?;

        Ok(Self {
            config,
            client,
            destination,
            skip_upload: false,
        })
    }

    /// Build a pipeline from injected parts
    pub fn with_parts(
        config: PipelineConfig,
        client: CatalogClient,
        destination: Destination,
    ) -> Self {
        Self {
            config,
            client,
            destination,
            skip_upload: false,
        }
    }

    /// Skip the upload stage (dry run)
    #[must_use]
    pub fn skip_upload(mut self, skip: bool) -> Self {
        self.skip_upload = skip;
        self
    }

    /// Run all four stages in sequence
    ///
    /// Local artifacts are not rolled back when a later stage fails.
    pub async fn run(&self) -> Result<PipelineReport> {
        let started = Instant::now();

        // Stage 1: fetch
        info!("Fetching catalog from {}", self.config.endpoint);
        let catalog = self.client.fetch(&self.config.endpoint).await?;
        if catalog.is_empty() {
            warn!("Catalog is empty; artifacts will contain no records");
        } else {
            info!("Fetched {} records", catalog.len());
        }

        // Stage 2: write the JSON artifact
        let bytes = write_catalog(&catalog, &self.config.json_path)?;
        info!(
            "Wrote {} ({bytes} bytes, {} records)",
            self.config.json_path.display(),
            catalog.len()
        );
        let mut artifacts = vec![ArtifactInfo {
            kind: ArtifactKind::Json,
            path: self.config.json_path.clone(),
            records: catalog.len(),
        }];

        // Stage 3: convert to NDJSON, unless configured to upload raw JSON
        let upload_source = if self.config.emit_ndjson {
            let lines = convert_to_ndjson(&self.config.json_path, &self.config.ndjson_path)?;
            info!(
                "Conversion successful: {} is ready ({lines} lines)",
                self.config.ndjson_path.display()
            );
            artifacts.push(ArtifactInfo {
                kind: ArtifactKind::Ndjson,
                path: self.config.ndjson_path.clone(),
                records: lines,
            });
            &self.config.ndjson_path
        } else {
            &self.config.json_path
        };

        // Stage 4: upload
        let uploaded = if self.skip_upload {
            info!("Upload skipped");
            None
        } else {
            let key = template::render_key(&self.config.key_template, &Utc::now())?;
            Some(self.destination.upload_file(upload_source, &key).await?)
        };

        Ok(PipelineReport {
            records: catalog.len(),
            artifacts,
            uploaded,
            elapsed: started.elapsed(),
        })
    }
}

impl std::fmt::Debug for Pipeline {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Pipeline")
            .field("config", &self.config)
            .field("destination", &self.destination)
            .field("skip_upload", &self.skip_upload)
            .finish_non_exhaustive()
    }
}
