//! Destination parsing and upload

use crate::error::{Error, Result};
use bytes::Bytes;
use object_store::aws::AmazonS3Builder;
use object_store::gcp::GoogleCloudStorageBuilder;
use object_store::local::LocalFileSystem;
use object_store::path::Path as ObjectPath;
use object_store::ObjectStore;
use std::path::Path;
use std::sync::Arc;
use tracing::info;

/// An upload destination parsed from a URL
///
/// Holds the object store as an injected capability: production code gets
/// one from [`Destination::parse`], tests build one around an in-memory
/// store with [`Destination::from_store`].
#[derive(Debug, Clone)]
pub struct Destination {
    /// The object store implementation
    store: Arc<dyn ObjectStore>,
    /// Base path prefix within the bucket
    prefix: String,
    /// URL scheme, for logging
    scheme: String,
}

/// Split `bucket/some/prefix` into bucket and prefix parts
fn split_bucket(rest: &str) -> (&str, &str) {
    match rest.find('/') {
        Some(idx) => (&rest[..idx], rest[idx + 1..].trim_end_matches('/')),
        None => (rest, ""),
    }
}

impl Destination {
    /// Parse a destination URL and create the matching object store
    ///
    /// Supported formats:
    /// - `gs://bucket/prefix` - Google Cloud Storage
    /// - `s3://bucket/prefix` - Amazon S3
    /// - `/local/path` or `./path` - Local filesystem
    ///
    /// Cloud credentials come from the environment (`from_env`); a missing
    /// or unreachable bucket only surfaces on the first write.
    pub fn parse(url: &str) -> Result<Self> {
        if let Some(rest) = url.strip_prefix("gs://") {
            let (bucket, prefix) = split_bucket(rest);
            let store = GoogleCloudStorageBuilder::from_env()
                .with_bucket_name(bucket)
                .build()
                .map_err(|e| Error::config(format!("Failed to create GCS client: {e}")))?;
            Ok(Self::from_store(Arc::new(store), prefix, "gs"))
        } else if let Some(rest) = url.strip_prefix("s3://") {
            let (bucket, prefix) = split_bucket(rest);
            let store = AmazonS3Builder::from_env()
                .with_bucket_name(bucket)
                .build()
                .map_err(|e| Error::config(format!("Failed to create S3 client: {e}")))?;
            Ok(Self::from_store(Arc::new(store), prefix, "s3"))
        } else {
            let path = url.strip_prefix("file://").unwrap_or(url);
            std::fs::create_dir_all(path)
                .map_err(|e| Error::config(format!("Failed to create directory {path}: {e}")))?;
            let store = LocalFileSystem::new_with_prefix(path)
                .map_err(|e| Error::config(format!("Failed to create local store: {e}")))?;
            Ok(Self::from_store(Arc::new(store), "", "file"))
        }
    }

    /// Build a destination around an existing object store
    pub fn from_store(
        store: Arc<dyn ObjectStore>,
        prefix: impl Into<String>,
        scheme: impl Into<String>,
    ) -> Self {
        Self {
            store,
            prefix: prefix.into(),
            scheme: scheme.into(),
        }
    }

    /// Check if this is a cloud destination (not local)
    pub fn is_cloud(&self) -> bool {
        self.scheme != "file"
    }

    /// Get the scheme (gs, s3, file)
    pub fn scheme(&self) -> &str {
        &self.scheme
    }

    /// Resolve a blob key against the destination prefix
    fn object_path(&self, key: &str) -> ObjectPath {
        if self.prefix.is_empty() {
            ObjectPath::from(key)
        } else {
            ObjectPath::from(format!("{}/{key}", self.prefix))
        }
    }

    /// Write bytes to `key`, overwriting unconditionally
    ///
    /// Returns the full object path for logging.
    pub async fn put(&self, key: &str, data: Bytes) -> Result<String> {
        let path = self.object_path(key);

        self.store
            .put(&path, data.into())
            .await
            .map_err(|e| Error::upload(format!("Failed to write {path}: {e}")))?;

        Ok(format!("{}://{path}", self.scheme))
    }

    /// Upload a local file's full contents to `key`
    ///
    /// No chunking and no resumable-upload handling; the file is read into
    /// memory and written in one put.
    pub async fn upload_file(&self, local: impl AsRef<Path>, key: &str) -> Result<String> {
        let local = local.as_ref();
        let data = tokio::fs::read(local).await.map_err(|e| {
            Error::upload(format!("Failed to read {}: {e}", local.display()))
        })?;

        let uploaded = self.put(key, Bytes::from(data)).await?;
        info!("File {} uploaded to {uploaded}", local.display());
        Ok(uploaded)
    }
}
