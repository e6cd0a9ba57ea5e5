//! JSON catalog writer

use crate::error::Result;
use crate::types::Record;
use std::fs;
use std::path::Path;
use tracing::warn;

/// Serialize the catalog as an indented JSON array and write it to `path`
///
/// An existing file at `path` is fully overwritten after a warning; there
/// is no merge and no atomic write. Returns the number of bytes written.
pub fn write_catalog(catalog: &[Record], path: impl AsRef<Path>) -> Result<u64> {
    let path = path.as_ref();

    if path.exists() {
        warn!("Overwriting existing file {}", path.display());
    }

    let json = serde_json::to_string_pretty(catalog)?;
    fs::write(path, &json)?;

    Ok(json.len() as u64)
}
