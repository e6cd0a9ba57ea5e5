//! Common types used throughout catalog-sync
//!
//! This module contains shared type definitions, type aliases,
//! and utility types used across multiple modules.

use serde::{Deserialize, Serialize};

// ============================================================================
// Type Aliases
// ============================================================================

/// JSON value type (re-exported from serde_json)
pub type JsonValue = serde_json::Value;

/// JSON object type
pub type JsonObject = serde_json::Map<String, JsonValue>;

/// One catalog item. Opaque pass-through data; no schema is enforced.
pub type Record = JsonValue;

/// The full ordered list of records returned by the source endpoint
pub type Catalog = Vec<Record>;

// ============================================================================
// Fetch Fallback
// ============================================================================

/// What to do when the catalog fetch fails at the transport layer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FetchFallback {
    /// Propagate the error and abort the run
    #[default]
    Fail,
    /// Log a warning and continue with an empty catalog
    EmptyCatalog,
}

// ============================================================================
// Artifact Kind
// ============================================================================

/// Encoding of a local artifact file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ArtifactKind {
    /// Pretty-printed JSON array
    Json,
    /// Newline-delimited JSON, one compact object per line
    Ndjson,
}

impl ArtifactKind {
    /// Short name for logs and report output
    pub fn as_str(self) -> &'static str {
        match self {
            ArtifactKind::Json => "json",
            ArtifactKind::Ndjson => "ndjson",
        }
    }
}

impl std::fmt::Display for ArtifactKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Name of a JSON value's top-level type, for shape-validation errors
pub fn json_type_name(value: &JsonValue) -> &'static str {
    match value {
        JsonValue::Null => "null",
        JsonValue::Bool(_) => "boolean",
        JsonValue::Number(_) => "number",
        JsonValue::String(_) => "string",
        JsonValue::Array(_) => "array",
        JsonValue::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_fetch_fallback_serde() {
        let fallback: FetchFallback = serde_yaml::from_str("empty_catalog").unwrap();
        assert_eq!(fallback, FetchFallback::EmptyCatalog);

        let fallback: FetchFallback = serde_yaml::from_str("fail").unwrap();
        assert_eq!(fallback, FetchFallback::Fail);

        assert_eq!(FetchFallback::default(), FetchFallback::Fail);
    }

    #[test]
    fn test_json_type_name() {
        assert_eq!(json_type_name(&json!(null)), "null");
        assert_eq!(json_type_name(&json!(42)), "number");
        assert_eq!(json_type_name(&json!("x")), "string");
        assert_eq!(json_type_name(&json!([])), "array");
        assert_eq!(json_type_name(&json!({})), "object");
    }

    #[test]
    fn test_artifact_kind_display() {
        assert_eq!(ArtifactKind::Json.to_string(), "json");
        assert_eq!(ArtifactKind::Ndjson.to_string(), "ndjson");
    }
}
