//! # Catalog Sync
//!
//! A minimal, Rust-native pipeline for syncing product catalogs to cloud
//! storage. One binary, four stages, no moving parts.
//!
//! ## Features
//!
//! - **HTTP Extraction**: One GET against a catalog endpoint with a bounded timeout
//! - **Local Artifacts**: Pretty-printed JSON array plus compact NDJSON on disk
//! - **Cloud Upload**: GCS, S3, or local filesystem via `object_store`
//! - **Single Config**: One YAML file covers endpoint, filenames, destination, and key template
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use catalog_sync::{Pipeline, PipelineConfig, Result};
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let config = PipelineConfig::from_file("catalog-sync.yaml")?;
//!     let pipeline = Pipeline::new(config)?;
//!
//!     let report = pipeline.run().await?;
//!     println!("{}", report.summary());
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │                     Pipeline::run                        │
//! │  fetch → write JSON → convert NDJSON → upload            │
//! └──────────────────────────────────────────────────────────┘
//!                │
//! ┌──────────┬───┴────────┬──────────────┬──────────────────┐
//! │  Fetch   │  Artifact  │   Storage    │     Config       │
//! ├──────────┼────────────┼──────────────┼──────────────────┤
//! │ GET      │ JSON array │ gs://        │ YAML file        │
//! │ Timeout  │ NDJSON     │ s3://        │ Field defaults   │
//! │ Fallback │ Overwrite  │ local path   │ Key template     │
//! └──────────┴────────────┴──────────────┴──────────────────┘
//! ```

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types for the pipeline
pub mod error;

/// Common types and type aliases
pub mod types;

/// Pipeline configuration
pub mod config;

/// Blob-key template rendering
pub mod template;

/// Catalog fetching over HTTP
pub mod fetch;

/// Local artifact stages (JSON writer, NDJSON converter)
pub mod artifact;

/// Object-storage destinations
pub mod storage;

/// The four-stage sync pipeline
pub mod pipeline;

/// Command-line interface
pub mod cli;

// ============================================================================
// Re-exports
// ============================================================================

pub use config::PipelineConfig;
pub use error::{Error, Result};
pub use fetch::CatalogClient;
pub use pipeline::{Pipeline, PipelineReport};
pub use storage::Destination;
pub use types::*;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
