//! JSON → NDJSON conversion

use crate::error::{Error, Result};
use crate::types::{json_type_name, JsonValue};
use std::fs;
use std::io::ErrorKind;
use std::path::Path;
use tracing::debug;

/// Convert a JSON-array file to NDJSON
///
/// Reads `input`, validates that the top-level value is an array, then
/// writes one compact JSON-encoded line per record to `output`, UTF-8,
/// LF-terminated. Validation happens before `output` is touched: a
/// malformed or wrong-shaped input leaves any existing output file intact.
/// Returns the number of lines written.
pub fn convert_to_ndjson(input: impl AsRef<Path>, output: impl AsRef<Path>) -> Result<usize> {
    let input = input.as_ref();
    let output = output.as_ref();

    let content = fs::read_to_string(input).map_err(|e| {
        if e.kind() == ErrorKind::NotFound {
            Error::file_not_found(input.display().to_string())
        } else {
            Error::Io(e)
        }
    })?;

    let value: JsonValue = serde_json::from_str(&content)?;
    let records = match value {
        JsonValue::Array(records) => records,
        other => return Err(Error::not_an_array(json_type_name(&other))),
    };

    let mut buf = String::with_capacity(content.len());
    for record in &records {
        buf.push_str(&serde_json::to_string(record)?);
        buf.push('\n');
    }

    fs::write(output, buf)?;
    debug!(
        "Converted {} records: {} -> {}",
        records.len(),
        input.display(),
        output.display()
    );

    Ok(records.len())
}
